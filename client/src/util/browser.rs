//! Thin wrappers over browser globals used by the workflow driver.

/// Show a blocking notification. Off-browser this only logs.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::info!("notification: {message}");
    }
}

/// Wall-clock time of day for activity log lines, e.g. `"14:03:27"`.
pub fn local_time_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format!("{:02}:{:02}:{:02}", now.get_hours(), now.get_minutes(), now.get_seconds())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "--:--:--".to_owned()
    }
}
