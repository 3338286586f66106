use api::{FriendsClient, FriendsSource};
use dioxus::prelude::*;

use crate::friend_list::{
    fetch_section, report, FriendList, FriendListState, Section, SuggestionList,
};
use crate::views::ModalOverlay;

/// "Friends" button plus the `#friendsModal` dialog it opens.
///
/// Every open reloads the friend list and the suggestions from the
/// [`FriendsClient`] found in context.
#[component]
pub fn FriendsPanel() -> Element {
    let client = use_context::<FriendsClient>();
    let mut open = use_signal(|| false);
    let state = use_signal(FriendListState::default);

    let show_client = client.clone();
    let show = use_callback(move |()| {
        open.set(true);
        start_load(show_client.clone(), state);
    });

    let add = use_callback(move |user_id: i64| {
        let client = client.clone();
        spawn(async move {
            match client.add_friend(user_id).await {
                Ok(()) => start_load(client, state),
                Err(e) => tracing::error!(user_id, "Failed to add friend: {e}"),
            }
        });
    });

    let friends = state.read().friends.clone();
    let suggestions = state.read().suggestions.clone();

    rsx! {
        button {
            r#type: "button",
            class: "btn btn-outline-secondary",
            onclick: move |_| show.call(()),
            "Friends"
        }

        if open() {
            ModalOverlay {
                id: "friendsModal",
                title: "Friends",
                on_close: move |_| open.set(false),

                FriendList { entries: friends }

                if !suggestions.is_empty() {
                    h6 { class: "mt-4 mb-2 text-muted", "People you may know" }
                    SuggestionList { entries: suggestions, on_add: add }
                }
            }
        }
    }
}

/// Start a new load generation and fetch every section for it.
fn start_load(client: FriendsClient, mut state: Signal<FriendListState>) {
    let ticket = state.write().begin_load();
    for section in Section::ALL {
        let client = client.clone();
        spawn(async move {
            let result = fetch_section(&client, section).await;
            let outcome = state
                .write()
                .apply(ticket, section, result, client.config());
            report(section, &outcome);
        });
    }
}
