//! Collapsible debug panel listing workflow activity.

use leptos::prelude::*;

use crate::pages::workflow::Driver;

#[component]
pub fn ActivityPanel() -> impl IntoView {
    let activity = expect_context::<Driver>().activity();
    let lines = move || {
        activity.with(|a| a.entries().map(|e| format!("[{}] {}", e.time, e.message)).collect::<Vec<_>>())
    };

    view! {
        <details class="activity-panel">
            <summary>{move || format!("Activity ({})", activity.with(|a| a.len()))}</summary>
            <div class="activity-panel__lines">
                {move || lines().into_iter().map(|line| view! { <div>{line}</div> }).collect_view()}
            </div>
        </details>
    }
}
