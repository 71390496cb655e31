//! Status banner for authentication progress and terminal errors.

#[cfg(test)]
#[path = "status_banner_test.rs"]
mod status_banner_test;

use leptos::prelude::*;

use crate::pages::workflow::Driver;
use crate::state::workflow::StatusKind;

fn status_class(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Info => "status status--info",
        StatusKind::Success => "status status--success",
        StatusKind::Warning => "status status--warning",
        StatusKind::Error => "status status--error",
    }
}

fn status_icon(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Info => "⏳",
        StatusKind::Success => "✅",
        StatusKind::Warning => "⚠️",
        StatusKind::Error => "❌",
    }
}

/// Banner shown while the workflow has a status line.
#[component]
pub fn StatusBanner() -> impl IntoView {
    let workflow = expect_context::<Driver>().workflow();
    let status = move || workflow.with(|wf| wf.status.clone());

    view! {
        {move || {
            status()
                .map(|line| {
                    view! {
                        <div class=status_class(line.kind) role="status">
                            {format!("{} {}", status_icon(line.kind), line.text)}
                        </div>
                    }
                })
        }}
    }
}
