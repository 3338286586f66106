//! Data models exchanged with the API server.

mod friend;

pub use friend::{Friend, FriendListResponse};
