use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use reqwest::StatusCode;
use server::api::PlayerPage;

mod common;
use common::TestServer;

const TEST_TIMEOUT: Duration = Duration::from_secs(10);
const VIDEO_BYTES: &[u8] = b"\x00\x00\x00\x18ftypmp42 not really a video";

#[tokio::test]
async fn test_index_reports_missing_video() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let server = TestServer::start(dir.path().join("synced_video.mp4")).await?;
    let client = reqwest::Client::new();

    let response = timeout_test!(TEST_TIMEOUT, client.get(server.url("/")).send())?;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.text().await?;
    assert!(body.contains("synced_video.mp4"), "body was {}", body);

    // A missing video is reported without touching playback state
    let record = server.store.record().await;
    assert_eq!(record.action.as_str(), "pause");
    assert_eq!(record.reference_time, 0.0);

    // The check runs per request, so the page comes up once the file appears
    std::fs::write(&server.video_path, VIDEO_BYTES)?;
    let response = client.get(server.url("/")).send().await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await?.contains("/video/stream"));

    server.shutdown().await
}

#[tokio::test]
async fn test_index_serves_custom_template() -> Result<()> {
    let mut video = tempfile::NamedTempFile::new()?;
    video.write_all(VIDEO_BYTES)?;
    let mut template = tempfile::NamedTempFile::new()?;
    write!(template, "<html><body>movie night</body></html>")?;

    let page = PlayerPage::from_template(template.path())?;
    let server = TestServer::start_with_page(video.path(), page).await?;

    let response = reqwest::get(server.url("/")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await?, "<html><body>movie night</body></html>");

    server.shutdown().await
}

#[tokio::test]
async fn test_stream_serves_file_without_caching() -> Result<()> {
    let mut video = tempfile::NamedTempFile::new()?;
    video.write_all(VIDEO_BYTES)?;
    let server = TestServer::start(video.path()).await?;

    let response = timeout_test!(TEST_TIMEOUT, reqwest::get(server.url("/video/stream")))?;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(headers["cache-control"], "no-cache, no-store, must-revalidate");
    assert_eq!(headers["pragma"], "no-cache");
    assert_eq!(headers["expires"], "0");

    assert_eq!(response.bytes().await?.as_ref(), VIDEO_BYTES);

    server.shutdown().await
}

#[tokio::test]
async fn test_stream_supports_ranges() -> Result<()> {
    let mut video = tempfile::NamedTempFile::new()?;
    video.write_all(VIDEO_BYTES)?;
    let server = TestServer::start(video.path()).await?;

    let response = reqwest::Client::new()
        .get(server.url("/video/stream"))
        .header("Range", "bytes=4-7")
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
    assert_eq!(response.bytes().await?.as_ref(), b"ftyp");

    server.shutdown().await
}

#[tokio::test]
async fn test_stream_missing_file_is_not_found() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let server = TestServer::start(dir.path().join("absent.mp4")).await?;

    let response = reqwest::get(server.url("/video/stream")).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    server.shutdown().await
}

#[tokio::test]
async fn test_health_check() -> Result<()> {
    let server = TestServer::start("missing.mp4").await?;

    let response = reqwest::get(server.url("/health")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await?, "OK");

    server.shutdown().await
}
