//! Core domain entities representing the blog data model.
//!
//! Entities are plain data structures. Rows are mapped into them by the
//! repositories in [`crate::infrastructure::persistence`].
//!
//! # Entity Types
//!
//! - [`Article`] - A published blog post
//! - [`Tag`] - A label attached to zero or more articles
//! - [`Comment`] / [`Reply`] - Reader feedback on an article
//! - [`Identity`] - The authenticated user behind a session
//! - [`User`] - A registered account, managed by the admin CLI
//!
//! Records created by this module have separate input structs
//! ([`NewComment`], [`NewReply`]).

pub mod article;
pub mod comment;
pub mod identity;
pub mod tag;

pub use article::Article;
pub use comment::{Comment, CommentThread, NewComment, NewReply, Reply};
pub use identity::{Capability, Identity, User};
pub use tag::Tag;
