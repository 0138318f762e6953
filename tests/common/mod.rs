#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use maple_blog::application::services::{
    ArticleService, AuthService, CommentService, FeedService,
};
use maple_blog::domain::entities::{
    Article, Comment, CommentThread, Identity, NewComment, NewReply, Reply, Tag,
};
use maple_blog::domain::pagination::PageRequest;
use maple_blog::domain::repositories::{
    ArticleFilter, ArticleRepository, CommentRepository, Session, SessionRepository,
    TagRepository,
};
use maple_blog::error::AppError;
use maple_blog::infrastructure::cache::{CacheResult, CacheService, MemoryCache, NullCache};
use maple_blog::infrastructure::views::ViewCounter;
use maple_blog::state::{AppState, WebSettings};

pub const SIGNING_SECRET: &str = "test-signing-secret";
pub const WRITER_TOKEN: &str = "writer-token";
pub const UNCONFIRMED_TOKEN: &str = "unconfirmed-token";

pub fn published(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
}

pub fn article(id: i64, category: &str, publish: DateTime<Utc>) -> Article {
    Article::new(
        id,
        format!("Article {}", id),
        format!("<p>Body of article {}</p>", id),
        "honmaple".to_string(),
        category.to_string(),
        publish,
    )
}

/// `count` articles in `category`, the highest id published last.
pub fn articles(count: i64, category: &str) -> Vec<Article> {
    (1..=count)
        .map(|id| article(id, category, published(1) + Duration::hours(id)))
        .collect()
}

/// Articles with their tags, counting list queries.
#[derive(Default)]
pub struct InMemoryArticles {
    articles: Vec<Article>,
    tags: Vec<(i64, Tag)>,
    pub list_calls: AtomicUsize,
}

impl InMemoryArticles {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles,
            ..Default::default()
        }
    }

    pub fn with_tag(mut self, article_id: i64, name: &str) -> Self {
        let id = self.tags.len() as i64 + 1;
        self.tags.push((article_id, Tag::new(id, name.to_string())));
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn matching(&self, filter: &ArticleFilter) -> Vec<Article> {
        let mut matching: Vec<Article> = self
            .articles
            .iter()
            .filter(|a| match filter {
                ArticleFilter::All => true,
                ArticleFilter::Category(c) => &a.category == c,
                ArticleFilter::Tag(t) => self
                    .tags
                    .iter()
                    .any(|(article_id, tag)| *article_id == a.id && &tag.name == t),
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.publish.cmp(&a.publish).then(b.id.cmp(&a.id)));
        matching
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticles {
    async fn list(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> Result<Vec<Article>, AppError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .matching(filter)
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn count(&self, filter: &ArticleFilter) -> Result<i64, AppError> {
        Ok(self.matching(filter).len() as i64)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, AppError> {
        Ok(self.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn latest(&self, limit: i64) -> Result<Vec<Article>, AppError> {
        Ok(self
            .matching(&ArticleFilter::All)
            .into_iter()
            .take(limit as usize)
            .collect())
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.articles.iter().any(|a| a.id == id))
    }
}

#[async_trait]
impl TagRepository for InMemoryArticles {
    async fn distinct_names(&self) -> Result<Vec<String>, AppError> {
        let mut names: Vec<String> = self.tags.iter().map(|(_, t)| t.name.clone()).collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    async fn for_article(&self, article_id: i64) -> Result<Vec<Tag>, AppError> {
        Ok(self
            .tags
            .iter()
            .filter(|(id, _)| *id == article_id)
            .map(|(_, t)| t.clone())
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryComments {
    comments: Mutex<Vec<Comment>>,
    replies: Mutex<Vec<Reply>>,
}

impl InMemoryComments {
    pub fn comments(&self) -> Vec<Comment> {
        self.comments.lock().unwrap().clone()
    }

    pub fn replies(&self) -> Vec<Reply> {
        self.replies.lock().unwrap().clone()
    }

    pub fn seed_comment(&self, article_id: i64, author: &str, content: &str) -> Comment {
        let mut comments = self.comments.lock().unwrap();
        let comment = NewComment {
            author: author.to_string(),
            content: content.to_string(),
            article_id,
            publish: published(20),
        }
        .into_comment(comments.len() as i64 + 1);
        comments.push(comment.clone());
        comment
    }
}

#[async_trait]
impl CommentRepository for InMemoryComments {
    async fn create_comment(&self, new_comment: NewComment) -> Result<Comment, AppError> {
        let mut comments = self.comments.lock().unwrap();
        let comment = new_comment.into_comment(comments.len() as i64 + 1);
        comments.push(comment.clone());
        Ok(comment)
    }

    async fn create_reply(&self, new_reply: NewReply) -> Result<Reply, AppError> {
        let mut replies = self.replies.lock().unwrap();
        let reply = new_reply.into_reply(replies.len() as i64 + 1);
        replies.push(reply.clone());
        Ok(reply)
    }

    async fn find_comment(&self, id: i64) -> Result<Option<Comment>, AppError> {
        Ok(self.comments().into_iter().find(|c| c.id == id))
    }

    async fn threads_for_article(&self, article_id: i64) -> Result<Vec<CommentThread>, AppError> {
        let replies = self.replies();
        Ok(self
            .comments()
            .into_iter()
            .filter(|c| c.article_id == article_id)
            .map(|comment| CommentThread {
                replies: replies
                    .iter()
                    .filter(|r| r.comment_id == comment.id)
                    .cloned()
                    .collect(),
                comment,
            })
            .collect())
    }
}

/// Sessions keyed by token hash.
#[derive(Default)]
pub struct InMemorySessions {
    identities: Mutex<HashMap<String, Identity>>,
}

#[async_trait]
impl SessionRepository for InMemorySessions {
    async fn find_identity(&self, token_hash: &str) -> Result<Option<Identity>, AppError> {
        Ok(self.identities.lock().unwrap().get(token_hash).cloned())
    }

    async fn touch(&self, _token_hash: &str) -> Result<(), AppError> {
        Ok(())
    }

    async fn create_session(&self, user_id: i64, token_hash: &str) -> Result<Session, AppError> {
        self.identities.lock().unwrap().insert(
            token_hash.to_string(),
            Identity::from_account(user_id, format!("user{}", user_id), true),
        );
        Ok(Session {
            id: user_id,
            user_id,
            token_hash: token_hash.to_string(),
            created_at: Utc::now(),
            revoked_at: None,
        })
    }

    async fn revoke_for_user(&self, user_id: i64) -> Result<u64, AppError> {
        let mut identities = self.identities.lock().unwrap();
        let before = identities.len();
        identities.retain(|_, identity| identity.user_id != user_id);
        Ok((before - identities.len()) as u64)
    }
}

#[derive(Default)]
pub struct InMemoryViews {
    counts: Mutex<HashMap<i64, u64>>,
}

impl InMemoryViews {
    pub fn count(&self, article_id: i64) -> u64 {
        self.counts
            .lock()
            .unwrap()
            .get(&article_id)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl ViewCounter for InMemoryViews {
    async fn record_view(&self, article_id: i64) -> CacheResult<u64> {
        let mut counts = self.counts.lock().unwrap();
        let count = counts.entry(article_id).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    async fn views(&self, article_id: i64) -> CacheResult<Option<u64>> {
        Ok(self.counts.lock().unwrap().get(&article_id).copied())
    }

    async fn top(&self, limit: usize) -> CacheResult<Vec<(i64, u64)>> {
        let mut top: Vec<(i64, u64)> = self
            .counts
            .lock()
            .unwrap()
            .iter()
            .map(|(id, count)| (*id, *count))
            .collect();
        top.sort_by(|a, b| b.1.cmp(&a.1));
        top.truncate(limit);
        Ok(top)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// State plus handles on the fakes behind it.
pub struct TestContext {
    pub state: AppState,
    pub articles: Arc<InMemoryArticles>,
    pub comments: Arc<InMemoryComments>,
    pub views: Arc<InMemoryViews>,
}

/// Builds state over in-memory fakes with two sessions: [`WRITER_TOKEN`]
/// (confirmed `alice`) and [`UNCONFIRMED_TOKEN`] (unconfirmed `bob`).
///
/// `cached` selects a memory page cache with a 180 second TTL instead of none.
pub fn create_test_context(articles: InMemoryArticles, cached: bool) -> TestContext {
    let articles = Arc::new(articles);
    let comments = Arc::new(InMemoryComments::default());
    let views = Arc::new(InMemoryViews::default());
    let sessions = Arc::new(InMemorySessions::default());

    let auth_service = Arc::new(AuthService::new(
        sessions.clone(),
        SIGNING_SECRET.to_string(),
    ));
    {
        let mut identities = sessions.identities.lock().unwrap();
        identities.insert(
            auth_service.hash_token(WRITER_TOKEN),
            Identity::from_account(1, "alice".to_string(), true),
        );
        identities.insert(
            auth_service.hash_token(UNCONFIRMED_TOKEN),
            Identity::from_account(2, "bob".to_string(), false),
        );
    }

    let settings = WebSettings::default();
    let cache: Arc<dyn CacheService> = if cached {
        Arc::new(MemoryCache::new(
            NonZeroUsize::new(64).unwrap(),
            settings.page_cache_ttl,
        ))
    } else {
        Arc::new(NullCache::new())
    };

    let state = AppState::new(
        Arc::new(ArticleService::new(
            articles.clone(),
            articles.clone(),
            comments.clone(),
        )),
        Arc::new(FeedService::new(articles.clone())),
        Arc::new(CommentService::new(articles.clone(), comments.clone())),
        auth_service,
        cache,
        views.clone(),
        settings,
    );

    TestContext {
        state,
        articles,
        comments,
        views,
    }
}

pub fn session_cookie(token: &str) -> String {
    format!("session={}", token)
}
