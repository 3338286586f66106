//! # API crate — client side of the friends endpoints
//!
//! Everything the front end needs to talk to the application server lives here,
//! independent of any UI framework so it can be exercised from plain unit tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`FriendsSource`] trait and its HTTP implementation [`FriendsClient`] (reqwest) |
//! | [`config`] | [`FrontendConfig`], the `frontend.toml` file with endpoint paths and page hooks |
//! | [`error`] | [`FetchError`], the terminal failure kinds of a single request |
//! | [`models`] | Wire types: [`Friend`] and [`FriendListResponse`] |
//!
//! ## Endpoints
//!
//! - `GET /api/friends/` — the current user's friends
//! - `GET /api/makefriends/` — friend suggestions (friends of friends)
//! - `POST /api/friend/{id}/` — befriend a user
//!
//! Every request carries the page's CSRF token in the `X-CSRFToken` header.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{FriendsClient, FriendsSource};
pub use config::{FriendsConfig, FrontendConfig, SignupConfig};
pub use error::FetchError;
pub use models::{Friend, FriendListResponse};
