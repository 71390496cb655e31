//! Workflow page and its command driver.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the page the authorization redirect lands on. `Driver` owns the
//! single `RwSignal<Workflow>`, feeds it events, and executes the commands
//! it returns: HTTP calls and timers run as `spawn_local` futures whose
//! completions re-enter `dispatch`, while storage writes, notifications and
//! activity lines run inline.
//!
//! Off-browser (SSR, native tests) network and timer commands are skipped;
//! the server only renders the initial status view.

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;

use leptos::prelude::*;

use crate::components::activity_panel::ActivityPanel;
use crate::components::board_list::BoardList;
use crate::components::create_board_form::CreateBoardForm;
use crate::components::create_pin_form::CreatePinForm;
use crate::components::status_banner::StatusBanner;
use crate::config::{ACCESS_TOKEN_KEY, Endpoints, LOCAL_BOARDS_KEY};
use crate::state::activity::ActivityLog;
use crate::state::boards::LocalBoardCache;
use crate::state::workflow::{Command, Event, Notice, NoticeLevel, View, Workflow};
use crate::util::browser;
use crate::util::storage::{self, StorageArea};
use crate::util::url_check::EntryParams;

/// Text shown in the blocking notification for `notice`.
fn notice_text(notice: &Notice) -> String {
    match notice.level {
        NoticeLevel::Success => format!("✅ {}", notice.text),
        NoticeLevel::Error => format!("❌ {}", notice.text),
    }
}

/// Decode the tab's local board cache; a corrupt entry counts as empty.
fn decode_local_boards(raw: Option<&str>) -> LocalBoardCache {
    LocalBoardCache::restore(raw).unwrap_or_else(|e| {
        log::warn!("ignoring corrupt local board cache: {e}");
        LocalBoardCache::default()
    })
}

/// Executes workflow commands against the browser.
#[derive(Clone, Copy)]
pub struct Driver {
    workflow: RwSignal<Workflow>,
    activity: RwSignal<ActivityLog>,
    endpoints: StoredValue<Endpoints>,
}

impl Driver {
    /// Create the page state, seeded from `sessionStorage`, and provide it as context.
    pub fn install() -> Self {
        let raw = storage::load_raw(StorageArea::Session, LOCAL_BOARDS_KEY);
        let driver = Self {
            workflow: RwSignal::new(Workflow::new(decode_local_boards(raw.as_deref()))),
            activity: RwSignal::new(ActivityLog::default()),
            endpoints: StoredValue::new(Endpoints::default()),
        };
        provide_context(driver);
        driver
    }

    pub fn workflow(self) -> RwSignal<Workflow> {
        self.workflow
    }

    pub fn activity(self) -> RwSignal<ActivityLog> {
        self.activity
    }

    /// Feed the redirect's query parameters into the controller.
    pub fn start(self) {
        self.log("App loaded".to_owned());
        let cached = self.workflow.with_untracked(|wf| wf.local_boards.len());
        if cached > 0 {
            self.log(format!("Restored {cached} locally created boards"));
        }
        self.dispatch(Event::Entry(EntryParams::from_location()));
    }

    /// Apply `event` and run every command it produces.
    pub fn dispatch(self, event: Event) {
        let commands = self.workflow.try_update(|wf| wf.handle(event)).unwrap_or_default();
        for command in commands {
            self.execute(command);
        }
    }

    fn execute(self, command: Command) {
        match command {
            Command::Log(message) => self.log(message),
            Command::Notify(notice) => browser::alert(&notice_text(&notice)),
            Command::PersistToken { token } => {
                if let Err(e) = storage::save_raw(StorageArea::Local, ACCESS_TOKEN_KEY, &token) {
                    log::warn!("access token not persisted: {e}");
                }
            }
            Command::PersistLocalBoards(cache) => {
                if let Err(e) = storage::save_json(StorageArea::Session, LOCAL_BOARDS_KEY, &cache) {
                    log::warn!("local board cache not persisted: {e}");
                }
            }
            other => self.spawn(other),
        }
    }

    fn log(self, message: String) {
        log::info!("{message}");
        let time = browser::local_time_label();
        self.activity.update(|a| a.push(time, message));
    }

    #[cfg(feature = "hydrate")]
    fn spawn(self, command: Command) {
        use crate::net::api;

        let endpoints = self.endpoints.get_value();
        leptos::task::spawn_local(async move {
            let event = match command {
                Command::ExchangeToken { code } => Event::TokenExchanged(api::exchange_token(&endpoints, &code).await),
                Command::FetchBoards { token, delay } => {
                    gloo_timers::future::sleep(delay).await;
                    Event::BoardsFetched(api::fetch_boards(&endpoints, &token).await)
                }
                Command::RevealEmptyBoards { delay } => {
                    gloo_timers::future::sleep(delay).await;
                    Event::EmptyRevealElapsed
                }
                Command::ParseProduct { url } => Event::ProductParsed(api::parse_product(&endpoints, &url).await),
                Command::CreatePin { token, request } => {
                    Event::PinCreated(api::create_pin(&endpoints, &token, &request).await)
                }
                Command::CreateBoard { token, request } => {
                    Event::BoardCreated(api::create_board(&endpoints, &token, &request).await)
                }
                Command::PersistToken { .. } | Command::PersistLocalBoards(_) | Command::Notify(_) | Command::Log(_) => {
                    return;
                }
            };
            self.dispatch(event);
        });
    }

    #[cfg(not(feature = "hydrate"))]
    fn spawn(self, command: Command) {
        let _ = self.endpoints;
        if command.is_network() {
            log::debug!("skipping request outside the browser: {command:?}");
        }
    }
}

/// The single page of the app: status banner, active view, and activity log.
#[component]
pub fn WorkflowPage() -> impl IntoView {
    let driver = Driver::install();
    let workflow = driver.workflow();

    Effect::new(move || driver.start());

    let active_view = move || workflow.with(|wf| wf.view);

    view! {
        <main class="workflow-page">
            <header class="workflow-page__header">
                <h1>"Pin Publisher"</h1>
            </header>
            <StatusBanner/>
            {move || match active_view() {
                View::BoardList => view! { <BoardList/> }.into_any(),
                View::CreatePin => view! { <CreatePinForm/> }.into_any(),
                View::CreateBoard => view! { <CreateBoardForm/> }.into_any(),
                View::AwaitingAuth | View::Authenticating | View::Error => ().into_any(),
            }}
            <ActivityPanel/>
        </main>
    }
}
