//! Post entity: a short text message on the board.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,

    /// Trimmed, non-empty message text
    pub message: String,

    /// Creation time in epoch milliseconds
    pub created: i64,

    /// Id of the authoring user
    #[serde(rename = "userId")]
    pub user_id: String,
}

impl Post {
    /// Creates a post stamped with the current time
    ///
    /// The caller is responsible for trimming and validating `message`.
    pub fn new(message: String, user_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message,
            created: Utc::now().timestamp_millis(),
            user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_serializes_with_camel_case_user_id() {
        let post = Post::new("hello".to_string(), "u-1".to_string());
        let json = serde_json::to_value(&post).unwrap();

        assert_eq!(json["message"], "hello");
        assert_eq!(json["userId"], "u-1");
        assert!(json["created"].as_i64().unwrap() > 0);
        assert!(json.get("user_id").is_none());
    }
}
