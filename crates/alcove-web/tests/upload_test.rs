mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::{setup_test_app, setup_test_app_with, setup_test_app_with_limit, FakeAlfresco};
use http::header;
use serde_json::{json, Value};

fn file_form(name: &str, bytes: &'static [u8]) -> MultipartForm {
    MultipartForm::new().add_part("file", Part::bytes(bytes).file_name(name))
}

#[tokio::test]
async fn test_valid_upload_is_persisted_mirrored_and_cleared() {
    let app = setup_test_app().await;
    let cookie = app.login().await;

    let response = app
        .server
        .post("/upload")
        .add_header(header::COOKIE, cookie)
        .multipart(file_form("notes.txt", b"hello world"))
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.json::<Value>(),
        json!({ "is_valid": true, "name": "notes.txt", "url": "/media/notes.txt" })
    );

    // The file landed in the upload directory.
    let path = std::path::Path::new(app.state.config.upload_dir()).join("notes.txt");
    let written = tokio::fs::read(&path).await.expect("uploaded file");
    assert_eq!(written, b"hello world");

    // Mirrored into the user home, content written after node creation.
    assert_eq!(
        app.alfresco.data_calls(),
        ["create_node:-my-:notes.txt", "put_content:created-notes.txt"]
    );

    // The local document table is cleared at the end of the flow.
    assert!(app.state.documents.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_disallowed_extension_is_rejected_without_side_effects() {
    let app = setup_test_app().await;
    let cookie = app.login().await;

    let response = app
        .server
        .post("/upload")
        .add_header(header::COOKIE, cookie)
        .multipart(file_form("malware.exe", b"MZ"))
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>(), json!({ "is_valid": false }));
    assert!(app.alfresco.data_calls().is_empty());
}

#[tokio::test]
async fn test_empty_file_is_rejected() {
    let app = setup_test_app().await;
    let cookie = app.login().await;

    let response = app
        .server
        .post("/upload")
        .add_header(header::COOKIE, cookie)
        .multipart(file_form("empty.txt", b""))
        .await;
    assert_eq!(response.json::<Value>(), json!({ "is_valid": false }));
    assert!(app.alfresco.data_calls().is_empty());
}

#[tokio::test]
async fn test_form_without_file_field_is_rejected() {
    let app = setup_test_app().await;
    let cookie = app.login().await;

    let form = MultipartForm::new().add_part("other", Part::bytes(b"data".as_slice()));
    let response = app
        .server
        .post("/upload")
        .add_header(header::COOKIE, cookie)
        .multipart(form)
        .await;
    assert_eq!(response.json::<Value>(), json!({ "is_valid": false }));
    assert!(app.alfresco.data_calls().is_empty());
}

#[tokio::test]
async fn test_path_components_are_stripped_from_the_filename() {
    let app = setup_test_app().await;
    let cookie = app.login().await;

    let response = app
        .server
        .post("/upload")
        .add_header(header::COOKIE, cookie)
        .multipart(file_form("../../escape.txt", b"content"))
        .await;
    assert_eq!(
        response.json::<Value>(),
        json!({ "is_valid": true, "name": "escape.txt", "url": "/media/escape.txt" })
    );

    let path = std::path::Path::new(app.state.config.upload_dir()).join("escape.txt");
    assert!(tokio::fs::try_exists(&path).await.expect("stat"));
}

#[tokio::test]
async fn test_failed_content_write_still_reports_a_valid_upload() {
    let app = setup_test_app_with(FakeAlfresco {
        fail_put_content: true,
        ..FakeAlfresco::default()
    })
    .await;
    let cookie = app.login().await;

    let response = app
        .server
        .post("/upload")
        .add_header(header::COOKIE, cookie)
        .multipart(file_form("notes.txt", b"hello"))
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>()["is_valid"], json!(true));

    // The node was created and the content write attempted.
    assert_eq!(
        app.alfresco.data_calls(),
        ["create_node:-my-:notes.txt", "put_content:created-notes.txt"]
    );
    assert!(app.state.documents.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_failed_node_creation_still_reports_a_valid_upload() {
    let app = setup_test_app_with(FakeAlfresco {
        fail_create_node: true,
        ..FakeAlfresco::default()
    })
    .await;
    let cookie = app.login().await;

    let response = app
        .server
        .post("/upload")
        .add_header(header::COOKIE, cookie)
        .multipart(file_form("notes.txt", b"hello"))
        .await;
    assert_eq!(response.json::<Value>()["is_valid"], json!(true));
    assert_eq!(app.alfresco.data_calls(), ["create_node:-my-:notes.txt"]);
}

#[tokio::test]
async fn test_multi_megabyte_upload_within_limit_is_accepted() {
    let app = setup_test_app().await;
    let cookie = app.login().await;

    // Larger than axum's stock 2 MiB body cap but well under the configured
    // maximum; the transport limit must not cut it off.
    let payload = vec![b'a'; 3 * 1024 * 1024];
    let form = MultipartForm::new().add_part("file", Part::bytes(payload).file_name("big.txt"));

    let response = app
        .server
        .post("/upload")
        .add_header(header::COOKIE, cookie)
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.json::<Value>(),
        json!({ "is_valid": true, "name": "big.txt", "url": "/media/big.txt" })
    );
    assert_eq!(
        app.alfresco.data_calls(),
        ["create_node:-my-:big.txt", "put_content:created-big.txt"]
    );
}

#[tokio::test]
async fn test_upload_above_configured_limit_is_rejected() {
    let app = setup_test_app_with_limit(FakeAlfresco::default(), 1024).await;
    let cookie = app.login().await;

    let payload = vec![b'a'; 4 * 1024];
    let form = MultipartForm::new().add_part("file", Part::bytes(payload).file_name("big.txt"));

    let response = app
        .server
        .post("/upload")
        .add_header(header::COOKIE, cookie)
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>(), json!({ "is_valid": false }));
    assert!(app.alfresco.data_calls().is_empty());
}

#[tokio::test]
async fn test_uploaded_file_is_served_under_media() {
    let app = setup_test_app().await;
    let cookie = app.login().await;

    let response = app
        .server
        .post("/upload")
        .add_header(header::COOKIE, cookie)
        .multipart(file_form("notes.txt", b"hello world"))
        .await;
    assert_eq!(response.json::<Value>()["url"], json!("/media/notes.txt"));

    let served = app.server.get("/media/notes.txt").await;
    assert_eq!(served.status_code(), 200);
    assert_eq!(served.as_bytes().as_ref(), b"hello world");
}

#[tokio::test]
async fn test_upload_page_lists_pending_documents() {
    let app = setup_test_app().await;
    let cookie = app.login().await;

    let document = alcove_core::models::Document::new(
        "pending.pdf".to_string(),
        "/media/pending.pdf".to_string(),
        "application/pdf".to_string(),
        1024,
    );
    app.state.documents.insert(&document).await.expect("insert");

    let response = app
        .server
        .get("/upload")
        .add_header(header::COOKIE, cookie)
        .await;
    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("pending.pdf"));
}
