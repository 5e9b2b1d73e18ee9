use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::Sender;

/// One transcript entry. Never edited once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: NaiveDateTime,
}
