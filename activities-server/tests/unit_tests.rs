use activities_core::RegistryError;
use activities_server::errors::{ApiError, ServerError};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;

async fn status_and_detail(error: ServerError) -> (StatusCode, String) {
    let response = error.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (status, body["detail"].as_str().unwrap().to_string())
}

#[tokio::test]
async fn test_registry_errors_map_to_status() {
    let (status, detail) =
        status_and_detail(RegistryError::ActivityNotFound("Knitting".to_string()).into()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(detail, "Activity not found");

    let (status, _) = status_and_detail(
        RegistryError::NotRegistered {
            email: "a@example.com".to_string(),
            activity: "Chess Club".to_string(),
        }
        .into(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, detail) = status_and_detail(
        RegistryError::AlreadyRegistered {
            email: "a@example.com".to_string(),
            activity: "Chess Club".to_string(),
        }
        .into(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(detail, "Student is already signed up");
}

#[tokio::test]
async fn test_internal_errors_hide_details() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
    let (status, detail) = status_and_detail(ServerError::Io(io)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(detail, "Unexpected Error");
}

#[test]
fn test_api_error_display_includes_meta() {
    let error = ApiError::bad_request("Email is required", Some("query: email".to_string()));
    assert_eq!(error.to_string(), "Status=400, BadRequest: Email is required. query: email");
    assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
}
