//! This crate contains the shared UI for the workspace: the friends panel and
//! the signup form.

pub mod friend_list;
pub use friend_list::{FriendEntry, FriendList, FriendListState, LoadOutcome, Section};

mod friends_panel;
pub use friends_panel::FriendsPanel;

mod signup_form;
pub use signup_form::SignupForm;

pub mod page;

pub mod views;
