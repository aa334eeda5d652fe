use serde::{Deserialize, Serialize};

/// Body of `POST /api/posts`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostResponse {
    pub success: bool,
}
