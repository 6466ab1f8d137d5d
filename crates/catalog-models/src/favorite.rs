use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::media::Hit;

/// One persisted favorites entry. The list is ordered most recently
/// added first; `added_at` records when the toggle happened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteEntry {
    pub hit: Hit,
    pub added_at: DateTime<Utc>,
}

impl FavoriteEntry {
    pub fn new(hit: Hit) -> Self {
        Self {
            hit,
            added_at: Utc::now(),
        }
    }
}
