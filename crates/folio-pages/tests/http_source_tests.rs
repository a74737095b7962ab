//! Integration tests for the reqwest-backed article source
//!
//! A local axum server stands in for the static file host.

#![cfg(not(target_arch = "wasm32"))]

use std::rc::Rc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use folio_pages::{
	ArticleSource, Dispatch, FetchError, HttpArticleSource, MemoryHistory, MemoryRegion,
	NOT_FOUND_MARKUP, RouteKind, Router, RouterSettings, article_url, fetch_article,
};

/// Serves the article fixtures and returns the server's origin.
async fn serve_articles() -> String {
	let app = axum::Router::new()
		.route("/articles/1.html", get(|| async { "<p>Hi</p>" }))
		.route(
			"/articles/boom.html",
			get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
		)
		.route(
			"/articles/slow.html",
			get(|| async {
				tokio::time::sleep(Duration::from_secs(5)).await;
				"<p>late</p>"
			}),
		);

	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	tokio::spawn(async move {
		axum::serve(listener, app).await.unwrap();
	});

	format!("http://{}/", addr)
}

fn settings_for(origin: &str) -> RouterSettings {
	RouterSettings::default().with_origin(origin)
}

#[tokio::test]
async fn test_get_existing_article() {
	let settings = settings_for(&serve_articles().await);
	let source = HttpArticleSource::new(&settings).unwrap();
	let url = article_url(&settings, "/articles/1", "1").unwrap();

	let response = source.get(&url).await.unwrap();

	assert_eq!(response.status, 200);
	assert_eq!(response.body, "<p>Hi</p>");
}

#[tokio::test]
async fn test_get_reports_status_codes() {
	let settings = settings_for(&serve_articles().await);
	let source = HttpArticleSource::new(&settings).unwrap();

	let missing = article_url(&settings, "/articles/42", "42").unwrap();
	assert_eq!(source.get(&missing).await.unwrap().status, 404);

	let broken = article_url(&settings, "/articles/boom", "boom").unwrap();
	let response = source.get(&broken).await.unwrap();
	assert_eq!(response.status, 500);
	assert_eq!(
		fetch_article(&source, &broken, &settings).await,
		NOT_FOUND_MARKUP
	);
}

#[tokio::test]
async fn test_unreachable_host_is_a_network_error() {
	// Nothing listens on port 1
	let settings = settings_for("http://127.0.0.1:1/");
	let source = HttpArticleSource::new(&settings).unwrap();
	let url = article_url(&settings, "/articles/1", "1").unwrap();

	let result = source.get(&url).await;
	assert!(matches!(result, Err(FetchError::Network(_))));

	assert_eq!(fetch_article(&source, &url, &settings).await, NOT_FOUND_MARKUP);
}

#[tokio::test]
async fn test_custom_client_timeout_renders_not_found() {
	let settings = settings_for(&serve_articles().await);
	let client = reqwest::Client::builder()
		.timeout(Duration::from_millis(200))
		.build()
		.unwrap();
	let source = HttpArticleSource::with_client(client);

	let fast = article_url(&settings, "/articles/1", "1").unwrap();
	assert_eq!(source.get(&fast).await.unwrap().status, 200);

	let slow = article_url(&settings, "/articles/slow", "slow").unwrap();
	let result = source.get(&slow).await;
	assert!(matches!(result, Err(FetchError::Network(_))));
	assert_eq!(fetch_article(&source, &slow, &settings).await, NOT_FOUND_MARKUP);
}

#[tokio::test]
async fn test_router_renders_served_article() {
	let settings = settings_for(&serve_articles().await);
	let source = HttpArticleSource::new(&settings).unwrap();
	let router = Rc::new(Router::new(
		MemoryHistory::new("/blog"),
		MemoryRegion::new(r#"<nav class="nav"><a href="/blog">Blog</a></nav>"#),
		source,
		settings,
	));

	let outcome = router.navigate("/articles/1").await.unwrap();

	assert_eq!(outcome, Dispatch::Rendered(RouteKind::Article));
	assert_eq!(router.region().inner_html(), "<p>Hi</p>");
}
