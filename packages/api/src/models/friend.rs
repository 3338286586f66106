//! # Friend wire types
//!
//! The friends endpoints answer with an envelope whose `data` member holds the
//! list of users:
//!
//! ```json
//! { "data": [ { "user_id": 7, "first_name": "Coral", "last_name": "Badger" } ] }
//! ```
//!
//! The same layout is used for the friend list and for suggestions. Nothing here
//! is persisted; a [`Friend`] lives for one render pass.

use serde::{Deserialize, Serialize};

/// A single user as returned by the friends endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Friend {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl Friend {
    /// "{first_name} {last_name}", exactly as shown in the list.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Response envelope of `GET /api/friends/` and `GET /api/makefriends/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FriendListResponse {
    pub data: Vec<Friend>,
}
