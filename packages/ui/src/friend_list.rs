//! # Friend list state and rendering
//!
//! [`FriendListState`] holds what the friends modal shows: the friend list and
//! the suggestions, each fully replaced by every successful load.
//!
//! Every dialog open starts a new load generation via
//! [`FriendListState::begin_load`]. Responses are applied with the
//! [`LoadTicket`] they were started with; a ticket from an older generation is
//! stale and its result is dropped, so overlapping opens always end with the
//! data of the latest one, whichever request resolves last.
//!
//! Failed loads leave the list exactly as it was.

use api::{FetchError, Friend, FriendsConfig, FriendsSource};
use dioxus::prelude::*;

/// One rendered row of the list.
#[derive(Clone, Debug, PartialEq)]
pub struct FriendEntry {
    pub user_id: i64,
    /// "{first_name} {last_name}"
    pub name: String,
    /// "/profile/{user_id}"
    pub href: String,
    pub caption: String,
}

impl FriendEntry {
    pub fn new(friend: &Friend, config: &FriendsConfig) -> Self {
        Self {
            user_id: friend.user_id,
            name: friend.full_name(),
            href: config.profile_href(friend.user_id),
            caption: config.caption.clone(),
        }
    }
}

/// Which list a load fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Friends,
    Suggestions,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Friends, Section::Suggestions];
}

/// Identifies the dialog open a load belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, PartialEq)]
pub enum LoadOutcome {
    /// The section now shows this many entries.
    Rendered(usize),
    /// A newer load was started; the result was dropped.
    Stale,
    /// The request failed; the section is unchanged.
    Failed(FetchError),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FriendListState {
    generation: u64,
    pub friends: Vec<FriendEntry>,
    pub suggestions: Vec<FriendEntry>,
}

impl FriendListState {
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    pub fn apply(
        &mut self,
        ticket: LoadTicket,
        section: Section,
        result: Result<Vec<Friend>, FetchError>,
        config: &FriendsConfig,
    ) -> LoadOutcome {
        if !self.is_current(ticket) {
            return LoadOutcome::Stale;
        }
        let friends = match result {
            Ok(friends) => friends,
            Err(e) => return LoadOutcome::Failed(e),
        };
        let entries: Vec<FriendEntry> = friends
            .iter()
            .map(|f| FriendEntry::new(f, config))
            .collect();
        let count = entries.len();
        match section {
            Section::Friends => self.friends = entries,
            Section::Suggestions => self.suggestions = entries,
        }
        LoadOutcome::Rendered(count)
    }
}

/// Request one section from `source`.
pub async fn fetch_section<S: FriendsSource>(
    source: &S,
    section: Section,
) -> Result<Vec<Friend>, FetchError> {
    match section {
        Section::Friends => source.friends().await,
        Section::Suggestions => source.suggestions().await,
    }
}

/// Log a load result. A failed friend list is the one error of an open;
/// suggestions are secondary and only warn.
pub fn report(section: Section, outcome: &LoadOutcome) {
    match (section, outcome) {
        (_, LoadOutcome::Rendered(count)) => tracing::debug!(?section, count, "rendered"),
        (_, LoadOutcome::Stale) => tracing::debug!(?section, "dropped stale response"),
        (Section::Friends, LoadOutcome::Failed(e)) => tracing::error!("{e}"),
        (Section::Suggestions, LoadOutcome::Failed(e)) => {
            tracing::warn!("Could not load suggestions: {e}")
        }
    }
}

/// The `#friendList` list group.
#[component]
pub fn FriendList(entries: Vec<FriendEntry>) -> Element {
    rsx! {
        div {
            id: "friendList",
            class: "list-group",
            for entry in entries {
                a {
                    key: "{entry.user_id}",
                    href: "{entry.href}",
                    class: "list-group-item list-group-item-action",
                    div {
                        class: "d-flex w-100 justify-content-between",
                        h5 { class: "mb-1", "{entry.name}" }
                        small { "{entry.caption}" }
                    }
                }
            }
        }
    }
}

/// Suggested users, each with an "Add" button.
#[component]
pub fn SuggestionList(entries: Vec<FriendEntry>, on_add: EventHandler<i64>) -> Element {
    rsx! {
        ul {
            class: "list-group",
            for entry in entries {
                li {
                    key: "{entry.user_id}",
                    class: "list-group-item d-flex justify-content-between align-items-center",
                    a { href: "{entry.href}", "{entry.name}" }
                    button {
                        r#type: "button",
                        class: "btn btn-sm btn-outline-primary",
                        onclick: move |_| on_add.call(entry.user_id),
                        "Add"
                    }
                }
            }
        }
    }
}
