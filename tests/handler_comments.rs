mod common;

use axum_test::TestServer;
use common::{
    InMemoryArticles, TestContext, UNCONFIRMED_TOKEN, WRITER_TOKEN, articles,
    create_test_context, session_cookie,
};
use maple_blog::routes::blog_router;

fn setup() -> (TestContext, TestServer) {
    let ctx = create_test_context(InMemoryArticles::new(articles(3, "rust")), false);
    let server = TestServer::new(blog_router(ctx.state.clone())).unwrap();
    (ctx, server)
}

#[tokio::test]
async fn test_comment_without_session_redirects_to_login() {
    let (ctx, server) = setup();

    let response = server
        .post("/pages/1/comment")
        .form(&[("comment", "Hello")])
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/login?next=%2Fpages%2F1%2Fcomment");
    let cookie = response.header("set-cookie");
    assert!(cookie.to_str().unwrap().starts_with("flash=login_required"));
    assert!(ctx.comments.comments().is_empty());
}

#[tokio::test]
async fn test_unknown_session_redirects_to_login() {
    let (ctx, server) = setup();

    let response = server
        .post("/pages/1/comment")
        .add_header("Cookie", session_cookie("forged"))
        .form(&[("comment", "Hello")])
        .await;

    assert_eq!(response.status_code(), 303);
    assert!(
        response
            .header("location")
            .to_str()
            .unwrap()
            .starts_with("/login?next=")
    );
    assert!(ctx.comments.comments().is_empty());
}

#[tokio::test]
async fn test_unconfirmed_account_is_sent_home_with_notice() {
    let (ctx, server) = setup();

    let response = server
        .post("/pages/1/comment")
        .add_header("Cookie", session_cookie(UNCONFIRMED_TOKEN))
        .form(&[("comment", "Hello")])
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/");
    assert!(
        response
            .header("set-cookie")
            .to_str()
            .unwrap()
            .starts_with("flash=unconfirmed")
    );
    assert!(ctx.comments.comments().is_empty());
}

#[tokio::test]
async fn test_valid_comment_is_stored() {
    let (ctx, server) = setup();

    let response = server
        .post("/pages/2/comment")
        .add_header("Cookie", session_cookie(WRITER_TOKEN))
        .form(&[("comment", "Nice post")])
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/view/2#comment");

    let comments = ctx.comments.comments();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].author, "alice");
    assert_eq!(comments[0].content, "Nice post");
    assert_eq!(comments[0].article_id, 2);
}

#[tokio::test]
async fn test_get_does_not_store() {
    let (ctx, server) = setup();

    let response = server
        .get("/pages/2/comment")
        .add_header("Cookie", session_cookie(WRITER_TOKEN))
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/view/2#comment");
    assert!(ctx.comments.comments().is_empty());
}

#[tokio::test]
async fn test_invalid_comment_is_not_stored() {
    let (ctx, server) = setup();
    let too_long = "x".repeat(2001);

    for content in ["", "   ", too_long.as_str()] {
        let response = server
            .post("/pages/2/comment")
            .add_header("Cookie", session_cookie(WRITER_TOKEN))
            .form(&[("comment", content)])
            .await;

        assert_eq!(response.status_code(), 303);
        assert_eq!(response.header("location"), "/view/2#comment");
    }

    assert!(ctx.comments.comments().is_empty());
}

#[tokio::test]
async fn test_comment_on_missing_article_is_not_found() {
    let (ctx, server) = setup();

    let response = server
        .post("/pages/99/comment")
        .add_header("Cookie", session_cookie(WRITER_TOKEN))
        .form(&[("comment", "Hello")])
        .await;

    assert_eq!(response.status_code(), 404);
    assert!(ctx.comments.comments().is_empty());
}

#[tokio::test]
async fn test_non_numeric_article_id_is_not_found() {
    let (_ctx, server) = setup();

    let response = server
        .post("/pages/abc/comment")
        .add_header("Cookie", session_cookie(WRITER_TOKEN))
        .form(&[("comment", "Hello")])
        .await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_valid_reply_is_stored() {
    let (ctx, server) = setup();
    let comment = ctx.comments.seed_comment(2, "carol", "First");

    let response = server
        .post(&format!("/pages/2/{}", comment.id))
        .add_header("Cookie", session_cookie(WRITER_TOKEN))
        .form(&[("reply", "Agreed")])
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/view/2#comment");

    let replies = ctx.comments.replies();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].author, "alice");
    assert_eq!(replies[0].comment_id, comment.id);
}

#[tokio::test]
async fn test_reply_to_comment_of_other_article_is_not_found() {
    let (ctx, server) = setup();
    let comment = ctx.comments.seed_comment(1, "carol", "First");

    let response = server
        .post(&format!("/pages/2/{}", comment.id))
        .add_header("Cookie", session_cookie(WRITER_TOKEN))
        .form(&[("reply", "Agreed")])
        .await;

    assert_eq!(response.status_code(), 404);
    assert!(ctx.comments.replies().is_empty());
}

#[tokio::test]
async fn test_reply_to_missing_comment_is_not_found() {
    let (ctx, server) = setup();

    let response = server
        .post("/pages/2/77")
        .add_header("Cookie", session_cookie(WRITER_TOKEN))
        .form(&[("reply", "Agreed")])
        .await;

    assert_eq!(response.status_code(), 404);
    assert!(ctx.comments.replies().is_empty());
}

#[tokio::test]
async fn test_stored_comment_appears_on_article_page() {
    let (_ctx, server) = setup();

    server
        .post("/pages/3/comment")
        .add_header("Cookie", session_cookie(WRITER_TOKEN))
        .form(&[("comment", "Shows up")])
        .await;

    let page = server.get("/view/3").await;
    assert!(page.text().contains("Shows up"));
}
