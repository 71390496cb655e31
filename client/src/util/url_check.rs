//! URL validation and entry query-string decoding.
//!
//! The only URL rule the workflow applies is "absolute, with a scheme and a
//! host". Reachability and content type are never checked.

#[cfg(test)]
#[path = "url_check_test.rs"]
mod url_check_test;

/// Whether `raw` parses as an absolute URL with a host.
pub fn is_valid_url(raw: &str) -> bool {
    url::Url::parse(raw.trim()).map_or(false, |u| u.has_host())
}

/// Authorization parameters found on the redirect back to the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryParams {
    pub code: Option<String>,
    pub error: Option<String>,
}

impl EntryParams {
    /// Decode `code` and `error` from a query string, with or without the
    /// leading `?`. Empty values count as absent; the first occurrence wins.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "code" if params.code.is_none() => params.code = Some(value.into_owned()),
                "error" if params.error.is_none() => params.error = Some(value.into_owned()),
                _ => {}
            }
        }
        params
    }

    /// Read the current page's query string from `window.location`.
    pub fn from_location() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let search = web_sys::window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            Self::from_query(&search)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
