use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use sparse_paths::web::api::{find_path, get_graph, health_check, list_graphs, upload_graph, AppState};
use sparse_paths::web::models::{GraphUploadRequest, PathRequest};

const SAMPLE: &str = "# sample\n0 1 4\n0 2 1\n2 1 1\n1 3 1\nbroken line\n";

async fn upload(state: &AppState, name: &str, edges: &str) -> Uuid {
    let Json(summary) = upload_graph(
        State(state.clone()),
        Json(GraphUploadRequest {
            name: Some(name.to_string()),
            edges: edges.to_string(),
        }),
    )
    .await
    .unwrap();
    summary.id
}

fn path_request(start: u64, goal: u64) -> PathRequest {
    PathRequest {
        start,
        goal,
        queue: "lazy".to_string(),
        max_expansions: None,
    }
}

#[tokio::test]
async fn test_upload_and_summarize_graph() {
    let state = AppState::new();
    let id = upload(&state, "sample", SAMPLE).await;

    let Json(summary) = get_graph(State(state.clone()), Path(id)).await.unwrap();
    assert_eq!(summary.name, "sample");
    assert_eq!(summary.node_count, 4);
    assert_eq!(summary.edge_count, 4);
    assert_eq!(summary.load.skipped, 1);
    assert_eq!(summary.load.ignored, 1);

    let Json(all) = list_graphs(State(state)).await;
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_find_path_over_uploaded_graph() {
    let state = AppState::new();
    let id = upload(&state, "sample", SAMPLE).await;

    let Json(response) = find_path(State(state.clone()), Path(id), Json(path_request(0, 3)))
        .await
        .unwrap();
    assert!(response.reachable);
    assert_eq!(response.path, vec![0, 2, 1, 3]);
    assert_eq!(response.cost, Some(3));
    assert_eq!(response.session_id, id);

    let mut decrease_key = path_request(3, 0);
    decrease_key.queue = "decrease-key".to_string();
    let Json(response) = find_path(State(state), Path(id), Json(decrease_key)).await.unwrap();
    assert!(!response.reachable);
    assert!(response.path.is_empty());
    assert_eq!(response.cost, None);
}

#[tokio::test]
async fn test_find_path_errors() {
    let state = AppState::new();
    let id = upload(&state, "sample", SAMPLE).await;

    let (status, Json(body)) = find_path(State(state.clone()), Path(id), Json(path_request(99, 3)))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "start_not_found");

    let (status, _) = find_path(State(state.clone()), Path(Uuid::new_v4()), Json(path_request(0, 3)))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);

    let mut bad_queue = path_request(0, 3);
    bad_queue.queue = "fibonacci".to_string();
    let (status, _) = find_path(State(state.clone()), Path(id), Json(bad_queue)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut limited = path_request(0, 3);
    limited.max_expansions = Some(1);
    let (status, Json(body)) = find_path(State(state), Path(id), Json(limited)).await.unwrap_err();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.error, "expansion_limit_reached");
}

#[tokio::test]
async fn test_upload_rejects_negative_weights_and_oversized_bodies() {
    let state = AppState::with_limits(10, 16);

    let (status, Json(body)) = upload_graph(
        State(state.clone()),
        Json(GraphUploadRequest {
            name: None,
            edges: "0 1 -2\n".to_string(),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "negative_weight");

    let (status, _) = upload_graph(
        State(state),
        Json(GraphUploadRequest {
            name: None,
            edges: SAMPLE.to_string(),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_oldest_session_is_evicted() {
    let state = AppState::with_limits(2, 1024);
    let first = upload(&state, "first", SAMPLE).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = upload(&state, "second", SAMPLE).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let third = upload(&state, "third", SAMPLE).await;

    assert!(get_graph(State(state.clone()), Path(first)).await.is_err());
    assert!(get_graph(State(state.clone()), Path(second)).await.is_ok());
    assert!(get_graph(State(state), Path(third)).await.is_ok());
}

#[tokio::test]
async fn test_health_check() {
    let Json(body) = health_check().await;
    assert_eq!(body["status"], "healthy");
}
