mod common;

use axum_test::TestServer;
use common::{InMemoryArticles, articles, create_test_context};
use maple_blog::routes::blog_router;
use serde_json::Value;

#[tokio::test]
async fn test_health_reports_components() {
    let ctx = create_test_context(InMemoryArticles::new(articles(4, "rust")), true);
    let server = TestServer::new(blog_router(ctx.state)).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 200);
    let json: Value = response.json();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["database"]["message"], "Connected, 4 articles");
    assert_eq!(json["checks"]["cache"]["message"], "memory backend reachable");
    assert_eq!(json["checks"]["views"]["status"], "ok");
}
