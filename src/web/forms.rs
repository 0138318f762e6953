//! Submission forms for comments and replies.

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Longest accepted comment or reply, in characters.
pub const MAX_MESSAGE_LENGTH: u64 = 2000;

/// Form posted to `/pages/{id}/comment`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CommentForm {
    #[validate(length(max = MAX_MESSAGE_LENGTH), custom(function = "not_blank"))]
    pub comment: String,
}

/// Form posted to `/pages/{id}/{comment_id}`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ReplyForm {
    #[validate(length(max = MAX_MESSAGE_LENGTH), custom(function = "not_blank"))]
    pub reply: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_form_accepts_text() {
        let form = CommentForm {
            comment: "Great read".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_blank_comment_rejected() {
        let form = CommentForm {
            comment: " \n\t ".to_string(),
        };
        assert!(form.validate().is_err());

        assert!(CommentForm::default().validate().is_err());
    }

    #[test]
    fn test_reply_length_limit() {
        let form = ReplyForm {
            reply: "x".repeat(MAX_MESSAGE_LENGTH as usize),
        };
        assert!(form.validate().is_ok());

        let form = ReplyForm {
            reply: "x".repeat(MAX_MESSAGE_LENGTH as usize + 1),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_comment_length_limit() {
        let form = CommentForm {
            comment: "x".repeat(MAX_MESSAGE_LENGTH as usize),
        };
        assert!(form.validate().is_ok());

        let form = CommentForm {
            comment: "x".repeat(MAX_MESSAGE_LENGTH as usize + 1),
        };
        assert!(form.validate().is_err());
    }
}
