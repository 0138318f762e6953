mod common;

use axum_test::TestServer;
use common::{InMemoryArticles, articles, create_test_context};
use maple_blog::routes::blog_router;

#[tokio::test]
async fn test_article_page_renders() {
    let ctx = create_test_context(
        InMemoryArticles::new(articles(3, "rust")).with_tag(2, "async"),
        false,
    );
    ctx.comments.seed_comment(2, "carol", "Great read");
    let server = TestServer::new(blog_router(ctx.state.clone())).unwrap();

    let response = server.get("/view/2").await;

    assert_eq!(response.status_code(), 200);
    let body = response.text();
    assert!(body.contains("Article 2"));
    assert!(body.contains("<p>Body of article 2</p>"));
    assert!(body.contains("async"));
    assert!(body.contains("Great read"));
    assert!(body.contains("/pages/2/comment"));
    assert!(body.contains("/pages/2/1"));
}

#[tokio::test]
async fn test_each_request_counts_one_view() {
    let ctx = create_test_context(InMemoryArticles::new(articles(3, "rust")), false);
    let views = ctx.views.clone();
    let server = TestServer::new(blog_router(ctx.state)).unwrap();

    server.get("/view/1").await;
    server.get("/view/1").await;
    let response = server.get("/view/1").await;

    assert_eq!(views.count(1), 3);
    assert!(response.text().contains("3 views"));
}

#[tokio::test]
async fn test_cached_hits_are_counted() {
    let ctx = create_test_context(InMemoryArticles::new(articles(3, "rust")), true);
    let views = ctx.views.clone();
    let server = TestServer::new(blog_router(ctx.state)).unwrap();

    let first = server.get("/view/2").await;
    let second = server.get("/view/2").await;

    assert_eq!(first.status_code(), 200);
    assert_eq!(second.text(), first.text());
    assert_eq!(views.count(2), 2);
}

#[tokio::test]
async fn test_missing_article_is_not_found_but_counted() {
    let ctx = create_test_context(InMemoryArticles::new(articles(3, "rust")), false);
    let views = ctx.views.clone();
    let server = TestServer::new(blog_router(ctx.state)).unwrap();

    let response = server.get("/view/99").await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(views.count(99), 1);
}

#[tokio::test]
async fn test_non_numeric_id_is_not_found() {
    let ctx = create_test_context(InMemoryArticles::new(articles(3, "rust")), false);
    let server = TestServer::new(blog_router(ctx.state)).unwrap();

    let response = server.get("/view/abc").await;

    assert_eq!(response.status_code(), 404);
}
