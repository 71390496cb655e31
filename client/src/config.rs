//! Backend endpoint and timing configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page talks to a credential-holding function host rather than to the
//! platform directly. The base URL is fixed at compile time so the hydrate
//! bundle and the SSR render agree on it without a config round-trip.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Function host used when `PINBRIDGE_BACKEND_URL` is not set at build time.
pub const DEFAULT_BACKEND_URL: &str = "https://exploreandbook-legal.netlify.app/.netlify/functions";

/// Settle delay between a successful token exchange and the first board fetch.
pub const BOARD_FETCH_DELAY: Duration = Duration::from_millis(500);

/// How long the "No boards" warning stays up before the empty list is revealed.
pub const EMPTY_BOARDS_REVEAL_DELAY: Duration = Duration::from_secs(2);

/// `localStorage` key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "pinbridge_access_token";

/// `sessionStorage` key for boards created during this tab session.
pub const LOCAL_BOARDS_KEY: &str = "pinbridge_local_boards";

/// Fully-qualified URLs for each backend function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub token: String,
    pub proxy: String,
    pub create_pin: String,
    pub create_board: String,
    pub parse_product: String,
}

impl Endpoints {
    /// Build endpoint URLs under `base`. A trailing slash on `base` is ignored.
    #[must_use]
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            token: format!("{base}/pinterest-token"),
            proxy: format!("{base}/pinterest-proxy"),
            create_pin: format!("{base}/pinterest-create-pin"),
            create_board: format!("{base}/pinterest-create-board"),
            parse_product: format!("{base}/parse-product"),
        }
    }

    /// Proxy URL that lists the authenticated user's boards.
    #[must_use]
    pub fn boards_list(&self) -> String {
        format!("{}?endpoint=boards", self.proxy)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_base(option_env!("PINBRIDGE_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL))
    }
}
