// tests/discord_webhook.rs
use chrono::{TimeZone, Utc};
use mockito::Matcher;

use aws_whatsnew_notifier::ingest::types::FeedItem;
use aws_whatsnew_notifier::notify::discord::DiscordNotifier;
use aws_whatsnew_notifier::notify::format::format_message;
use aws_whatsnew_notifier::notify::Notifier;

fn sample_item() -> FeedItem {
    FeedItem {
        title: "Amazon S3 adds new storage class".to_string(),
        link: Some("https://aws.amazon.com/about-aws/whats-new/2025/08/s3-new-class/".to_string()),
        snippet: Some("Amazon S3 now offers a new storage class.".to_string()),
        published_at: Some(Utc.with_ymd_and_hms(2025, 8, 19, 17, 30, 0).unwrap()),
    }
}

#[tokio::test]
async fn posts_embed_payload_to_webhook() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/webhook")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "username": "AWS What's New",
            "embeds": [{
                "title": "Amazon S3 adds new storage class",
                "description": "Amazon S3 now offers a new storage class.",
                "url": "https://aws.amazon.com/about-aws/whats-new/2025/08/s3-new-class/",
                "color": 16750848,
                "footer": { "text": "AWS What's New • 1/1" },
                "fields": [{ "name": "Published", "value": "Tue, 19 Aug 2025 17:30 UTC" }]
            }]
        })))
        .with_status(204)
        .create_async()
        .await;

    let notifier = DiscordNotifier::new(format!("{}/webhook", server.url()));
    let msg = format_message(&sample_item(), 1, 1);

    notifier.send(&msg).await.expect("send ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn thread_id_is_appended_as_query_param() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/webhook")
        .match_query(Matcher::UrlEncoded("thread_id".into(), "12345".into()))
        .with_status(204)
        .create_async()
        .await;

    let notifier = DiscordNotifier::new(format!("{}/webhook", server.url()))
        .with_thread_id(Some("12345".to_string()));
    let msg = format_message(&sample_item(), 1, 1);

    notifier.send(&msg).await.expect("send ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn non_2xx_surfaces_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/webhook")
        .with_status(400)
        .with_body(r#"{"message": "Invalid Webhook Token", "code": 50027}"#)
        .create_async()
        .await;

    let notifier = DiscordNotifier::new(format!("{}/webhook", server.url()));
    let msg = format_message(&sample_item(), 1, 1);

    let err = notifier.send(&msg).await.expect_err("must fail on 400");
    let text = format!("{err:#}");
    assert!(text.contains("400"), "diagnostic should carry the status: {text}");
    assert!(
        text.contains("Invalid Webhook Token"),
        "diagnostic should carry the response body: {text}"
    );
}
