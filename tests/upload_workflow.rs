use mockito::Matcher;
use serde_json::json;
use tabular_lens::client::HttpServiceClient;
use tabular_lens::config::Config;
use tabular_lens::connectivity::{self, ConnectivityStatus};
use tabular_lens::intake::Intake;
use tabular_lens::lifecycle::{UploadController, UploadState};
use tabular_lens::models::FileHandle;
use tabular_lens::render::{self, Panel};
use tabular_lens::validator::XLSX_MEDIA_TYPE;

fn client_for(url: &str) -> HttpServiceClient {
    HttpServiceClient::new(&Config::default().with_base_url(url))
}

fn csv_file() -> FileHandle {
    FileHandle::new("data.csv", "text/csv", b"a,b,c\n1,,x\n2,,y\n".to_vec())
}

fn report_body() -> String {
    json!({
        "upload_id": 7,
        "filename": "data.csv",
        "message": "File uploaded and analyzed successfully",
        "status": "success",
        "analysis": {
            "rows": 100,
            "columns": 3,
            "column_names": ["a", "b", "c"],
            "data_types": { "a": "int64", "b": "float64", "c": "object" },
            "sample_data": [{ "a": 1, "b": null, "c": "x" }],
            "missing_values": { "a": 0, "b": 2, "c": 0 },
            "numeric_summary": {}
        }
    })
    .to_string()
}

#[tokio::test]
async fn successful_upload_renders_summary() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/upload")
        .match_header("content-type", Matcher::Regex("multipart/form-data".into()))
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file"; filename="data.csv""#.into()),
            Matcher::Regex(r"(?i)content-type: text/csv".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(report_body())
        .create_async()
        .await;

    let mut controller = UploadController::new(client_for(&server.url()));
    let report = controller.submit(csv_file()).await.unwrap();
    assert_eq!(report.upload_id, 7);
    mock.assert_async().await;

    let view = render::project(controller.state(), &Intake::new());
    let Panel::Summary(summary) = view.panel else {
        panic!("expected summary panel, got {:?}", view.panel);
    };
    assert_eq!(summary.rows, "100");
    assert_eq!(summary.columns, "3");
    assert_eq!(summary.missing_values, "2");
    assert_eq!(summary.column_overview.len(), 3);
    assert_eq!(summary.column_overview[2].data_type, "object");
    assert!(view.intake.enabled);
}

#[tokio::test]
async fn rejected_file_never_reaches_the_service() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/upload")
        .expect(0)
        .create_async()
        .await;

    let mut controller = UploadController::new(client_for(&server.url()));
    let pdf = FileHandle::new("report.pdf", "application/pdf", b"%PDF".to_vec());
    assert!(controller.submit(pdf).await.is_err());

    assert_eq!(
        controller.state(),
        &UploadState::Failed("Only CSV and Excel files are allowed.".to_string())
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn service_detail_is_shown_verbatim() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/upload")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"disk full"}"#)
        .create_async()
        .await;

    let mut controller = UploadController::new(client_for(&server.url()));
    let xlsx = FileHandle::new("book.xlsx", XLSX_MEDIA_TYPE, vec![0u8; 16]);
    assert!(controller.submit(xlsx).await.is_err());

    assert_eq!(controller.state(), &UploadState::Failed("disk full".to_string()));
    let view = render::project(controller.state(), &Intake::new());
    assert_eq!(view.panel, Panel::Error("disk full".to_string()));
}

#[tokio::test]
async fn error_without_detail_falls_back_to_generic_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/upload")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let mut controller = UploadController::new(client_for(&server.url()));
    assert!(controller.submit(csv_file()).await.is_err());
    assert_eq!(controller.state(), &UploadState::Failed("Upload failed".to_string()));
}

#[tokio::test]
async fn malformed_success_body_is_a_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/upload")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"upload_id": 1, "filename": "data.csv"}"#)
        .create_async()
        .await;

    let mut controller = UploadController::new(client_for(&server.url()));
    assert!(controller.submit(csv_file()).await.is_err());
    assert_eq!(
        controller.state(),
        &UploadState::Failed("Unexpected response from server".to_string())
    );
}

#[tokio::test]
async fn unreachable_service_reports_connection_failure() {
    let mut controller = UploadController::new(client_for("http://127.0.0.1:1"));
    assert!(controller.submit(csv_file()).await.is_err());
    assert_eq!(
        controller.state(),
        &UploadState::Failed("Failed to connect to server".to_string())
    );
}

#[tokio::test]
async fn resubmitting_after_failure_clears_the_error() {
    let mut server = mockito::Server::new_async().await;
    let failing = server
        .mock("POST", "/upload")
        .with_status(500)
        .with_body(r#"{"detail":"disk full"}"#)
        .expect(1)
        .create_async()
        .await;

    let mut controller = UploadController::new(client_for(&server.url()));
    assert!(controller.submit(csv_file()).await.is_err());
    failing.assert_async().await;
    failing.remove_async().await;

    server
        .mock("POST", "/upload")
        .with_status(200)
        .with_body(report_body())
        .create_async()
        .await;

    controller.submit(csv_file()).await.unwrap();
    assert!(controller.state().error().is_none());
    assert!(controller.state().report().is_some());
}

#[tokio::test]
async fn health_status_is_displayed_verbatim() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"ok"}"#)
        .create_async()
        .await;

    let status = connectivity::check(&client_for(&server.url())).await;
    assert_eq!(status, ConnectivityStatus::Reported("ok".to_string()));
    assert_eq!(status.label(), "ok");
}

#[tokio::test]
async fn health_failure_shows_fallback_label() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(503)
        .create_async()
        .await;

    let status = connectivity::check(&client_for(&server.url())).await;
    assert_eq!(status, ConnectivityStatus::Unreachable);
    assert_eq!(status.label(), "error - backend not running");

    let offline = connectivity::check(&client_for("http://127.0.0.1:1")).await;
    assert_eq!(offline, ConnectivityStatus::Unreachable);
}
