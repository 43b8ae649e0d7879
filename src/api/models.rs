use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct TopicRequest {
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct GeneratedPost {
    pub title: String,
    pub meta_description: String,
    pub post_content: String,
}
