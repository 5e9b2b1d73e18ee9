use serde::{Deserialize, Serialize};

use super::enums::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub youtube_id: Option<String>,
    pub embed_url: Option<String>,
    pub channel: String,
    pub views: String,
    pub category: String,
}
