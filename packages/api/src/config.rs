//! # Front-end configuration — `frontend.toml`
//!
//! Endpoint paths and page-contract names the widgets depend on. The web
//! binary embeds this file at build time; a missing or empty file is
//! equivalent to [`FrontendConfig::default`], which matches what the server
//! templates render.
//!
//! ## Structure
//!
//! ```toml
//! [friends]
//! endpoint = "/api/friends/"
//! suggestions_endpoint = "/api/makefriends/"
//! add_endpoint = "/api/friend/"
//! profile_prefix = "/profile/"
//! caption = "Last workout 3 days ago"
//! csrf_header = "X-CSRFToken"
//! csrf_meta_name = "csrf-token"
//!
//! [signup]
//! action = "/register/"
//! csrf_field = "csrfmiddlewaretoken"
//! min_password_length = 8
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `frontend.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontendConfig {
    #[serde(default)]
    pub friends: FriendsConfig,
    #[serde(default)]
    pub signup: SignupConfig,
}

/// Friends panel settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendsConfig {
    /// Path of the friend list endpoint, resolved against the page origin.
    pub endpoint: String,
    /// Path of the friend suggestions endpoint.
    pub suggestions_endpoint: String,
    /// Prefix of the befriend endpoint; the user id and a trailing slash are appended.
    pub add_endpoint: String,
    /// Prefix of profile links; the user id is appended.
    pub profile_prefix: String,
    /// Caption rendered under every friend. Static, not derived from data.
    pub caption: String,
    /// Request header carrying the CSRF token.
    pub csrf_header: String,
    /// `name` of the `<meta>` tag holding the CSRF token.
    pub csrf_meta_name: String,
}

impl Default for FriendsConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/friends/".to_string(),
            suggestions_endpoint: "/api/makefriends/".to_string(),
            add_endpoint: "/api/friend/".to_string(),
            profile_prefix: "/profile/".to_string(),
            caption: "Last workout 3 days ago".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            csrf_meta_name: "csrf-token".to_string(),
        }
    }
}

impl FriendsConfig {
    /// Profile link of a user: `/profile/{user_id}`.
    pub fn profile_href(&self, user_id: i64) -> String {
        format!("{}{user_id}", self.profile_prefix)
    }

    /// Befriend endpoint of a user: `/api/friend/{user_id}/`.
    pub fn add_path(&self, user_id: i64) -> String {
        format!("{}{user_id}/", self.add_endpoint)
    }
}

/// Signup form settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupConfig {
    /// Where the form posts when every field is valid.
    pub action: String,
    /// Name of the hidden input carrying the CSRF token.
    pub csrf_field: String,
    /// Minimum password length, in characters.
    pub min_password_length: usize,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            action: "/register/".to_string(),
            csrf_field: "csrfmiddlewaretoken".to_string(),
            min_password_length: 8,
        }
    }
}

impl FrontendConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "frontend.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
