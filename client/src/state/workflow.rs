//! Workflow controller: the page's single state machine.
//!
//! DESIGN
//! ======
//! The controller is sans-IO. `Workflow::handle` takes the current state plus
//! one `Event` (a user action, an HTTP completion, or an elapsed timer),
//! mutates the state, and returns the `Command`s the driver must execute. The
//! driver turns each completion back into an `Event`, so every transition is
//! reachable from plain unit tests without a browser.
//!
//! Views: `AwaitingAuth -> Authenticating -> BoardList <-> {CreatePin,
//! CreateBoard}`, with `Error` absorbing from anywhere.
//!
//! INVARIANTS
//! ==========
//! - Authenticated commands (`FetchBoards`, `CreatePin`, `CreateBoard`) carry
//!   the session token by value and are only built when it is set.
//! - An action with a call in flight is ignored until its completion arrives;
//!   the completion clears the in-flight marker whatever the outcome.
//! - Completions never move the view unless it is still the view that issued
//!   the call and the user has not gone back to the list since (`nav_epoch`).

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;

use std::time::Duration;

use crate::config::{BOARD_FETCH_DELAY, EMPTY_BOARDS_REVEAL_DELAY};
use crate::error::WorkflowError;
use crate::net::api::ApiError;
use crate::net::types::{CreateBoardRequest, CreatePinRequest, CreatedBoard, ParsedProduct, RemoteBoard};
use crate::state::boards::{Board, LocalBoardCache, merge_boards};
use crate::state::forms::{BoardField, BoardForm, PinField, PinForm};
use crate::util::url_check::EntryParams;

// =============================================================================
// STATE
// =============================================================================

/// Which view is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    AwaitingAuth,
    Authenticating,
    BoardList,
    CreatePin,
    CreateBoard,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Banner text for the Status view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub access_token: Option<String>,
}

/// The board pins are being created for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub board_id: String,
    pub board_name: String,
}

/// A pin submission awaiting its response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingPin {
    pub target: Selection,
    /// `Workflow::nav_epoch` at submit time.
    pub nav_epoch: u64,
}

/// Calls currently awaiting a response, one slot per action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InFlight {
    /// Product URL being parsed.
    pub parse: Option<String>,
    pub create_pin: Option<PendingPin>,
    /// `Workflow::nav_epoch` at submit time.
    pub create_board: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A blocking notification for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    fn success(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, text: text.into() }
    }

    fn error(err: &WorkflowError) -> Self {
        Self { level: NoticeLevel::Error, text: err.to_string() }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Workflow {
    pub view: View,
    pub status: Option<StatusLine>,
    pub session: Session,
    /// Remote listing merged with `local_boards`.
    pub boards: Vec<Board>,
    pub local_boards: LocalBoardCache,
    pub selection: Option<Selection>,
    pub pin_form: PinForm,
    pub board_form: BoardForm,
    pub parsed: Option<ParsedProduct>,
    pub in_flight: InFlight,
    /// Bumped each time the user leaves a form for the board list.
    pub nav_epoch: u64,
}

// =============================================================================
// EVENTS AND COMMANDS
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Page load with the redirect's query parameters.
    Entry(EntryParams),
    TokenExchanged(Result<String, ApiError>),
    BoardsFetched(Result<Vec<RemoteBoard>, ApiError>),
    EmptyRevealElapsed,
    SelectBoard(String),
    OpenCreateBoard,
    BackToBoards,
    PinFieldChanged(PinField, String),
    BoardFieldChanged(BoardField, String),
    ParseRequested,
    ProductParsed(Result<ParsedProduct, ApiError>),
    SubmitPin,
    PinCreated(Result<String, ApiError>),
    SubmitBoard,
    BoardCreated(Result<CreatedBoard, ApiError>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    ExchangeToken { code: String },
    PersistToken { token: String },
    FetchBoards { token: String, delay: Duration },
    /// Fire `Event::EmptyRevealElapsed` after `delay`.
    RevealEmptyBoards { delay: Duration },
    ParseProduct { url: String },
    CreatePin { token: String, request: CreatePinRequest },
    CreateBoard { token: String, request: CreateBoardRequest },
    PersistLocalBoards(LocalBoardCache),
    Notify(Notice),
    Log(String),
}

impl Command {
    /// Whether executing this command performs an HTTP request.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::ExchangeToken { .. }
                | Self::FetchBoards { .. }
                | Self::ParseProduct { .. }
                | Self::CreatePin { .. }
                | Self::CreateBoard { .. }
        )
    }
}

fn log(message: impl Into<String>) -> Command {
    Command::Log(message.into())
}

// =============================================================================
// CONTROLLER
// =============================================================================

impl Workflow {
    /// Fresh controller seeded with boards created earlier in this tab session.
    #[must_use]
    pub fn new(local_boards: LocalBoardCache) -> Self {
        Self {
            status: Some(StatusLine::new(StatusKind::Info, "Checking authorization...")),
            local_boards,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.access_token.as_deref()
    }

    /// The empty-boards sub-state: on the board list with nothing to show.
    #[must_use]
    pub fn shows_empty_boards(&self) -> bool {
        self.view == View::BoardList && self.boards.is_empty()
    }

    /// Apply one event and return the commands it produces.
    pub fn handle(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::Entry(params) => self.on_entry(params),
            Event::TokenExchanged(result) => self.on_token_exchanged(result),
            Event::BoardsFetched(result) => self.on_boards_fetched(result),
            Event::EmptyRevealElapsed => self.on_empty_reveal(),
            Event::SelectBoard(id) => self.on_select_board(&id),
            Event::OpenCreateBoard => self.on_open_create_board(),
            Event::BackToBoards => self.on_back_to_boards(),
            Event::PinFieldChanged(field, value) => {
                if self.view == View::CreatePin {
                    self.pin_form.set(field, value);
                }
                Vec::new()
            }
            Event::BoardFieldChanged(field, value) => {
                if self.view == View::CreateBoard {
                    self.board_form.set(field, value);
                }
                Vec::new()
            }
            Event::ParseRequested => self.on_parse_requested(),
            Event::ProductParsed(result) => self.on_product_parsed(result),
            Event::SubmitPin => self.on_submit_pin(),
            Event::PinCreated(result) => self.on_pin_created(result),
            Event::SubmitBoard => self.on_submit_board(),
            Event::BoardCreated(result) => self.on_board_created(result),
        }
    }

    fn fail(&mut self, err: &WorkflowError) {
        if err.is_terminal() {
            self.session.access_token = None;
        }
        self.view = View::Error;
        self.status = Some(StatusLine::new(StatusKind::Error, err.to_string()));
    }

    /// Clear selection, both forms and any parse result, and show the board list.
    fn reset_to_boards(&mut self) {
        self.selection = None;
        self.pin_form = PinForm::default();
        self.board_form = BoardForm::default();
        self.parsed = None;
        self.status = None;
        self.view = View::BoardList;
    }

    // -------------------------------------------------------------------------
    // Authentication and board loading
    // -------------------------------------------------------------------------

    fn on_entry(&mut self, params: EntryParams) -> Vec<Command> {
        if self.view != View::AwaitingAuth {
            return vec![log("Ignoring repeated entry")];
        }
        if let Some(error) = params.error {
            let err = WorkflowError::Auth(error);
            self.fail(&err);
            return vec![log(err.to_string())];
        }
        let Some(code) = params.code else {
            let err = WorkflowError::Auth("No auth code".to_owned());
            self.fail(&err);
            return vec![log(err.to_string())];
        };
        self.view = View::Authenticating;
        self.status = Some(StatusLine::new(StatusKind::Info, "Exchanging token..."));
        vec![log("Exchanging token..."), Command::ExchangeToken { code }]
    }

    fn on_token_exchanged(&mut self, result: Result<String, ApiError>) -> Vec<Command> {
        if self.view != View::Authenticating || self.session.access_token.is_some() {
            return vec![log("Ignoring late token response")];
        }
        match result {
            Ok(token) => {
                self.session.access_token = Some(token.clone());
                self.status = Some(StatusLine::new(StatusKind::Success, "Connected!"));
                vec![
                    Command::PersistToken { token: token.clone() },
                    log("Token saved"),
                    Command::FetchBoards { token, delay: BOARD_FETCH_DELAY },
                ]
            }
            Err(e) => {
                let err = WorkflowError::Auth(WorkflowError::from_api(e, "No token").to_string());
                self.fail(&err);
                vec![log(err.to_string())]
            }
        }
    }

    fn on_boards_fetched(&mut self, result: Result<Vec<RemoteBoard>, ApiError>) -> Vec<Command> {
        if self.view != View::Authenticating {
            return vec![log("Ignoring late board list")];
        }
        match result {
            Ok(remote) => {
                let remote_count = remote.len();
                self.boards = merge_boards(remote, self.local_boards.boards());
                let summary = format!(
                    "Loaded {} boards ({remote_count} remote, {} local)",
                    self.boards.len(),
                    self.boards.len() - remote_count
                );
                if self.boards.is_empty() {
                    self.status = Some(StatusLine::new(StatusKind::Warning, "No boards"));
                    vec![log(summary), Command::RevealEmptyBoards { delay: EMPTY_BOARDS_REVEAL_DELAY }]
                } else {
                    self.status = None;
                    self.view = View::BoardList;
                    vec![log(summary)]
                }
            }
            Err(e) => {
                self.fail(&WorkflowError::Network("Failed to load boards".to_owned()));
                vec![log(format!("Board fetch failed: {e}"))]
            }
        }
    }

    fn on_empty_reveal(&mut self) -> Vec<Command> {
        if self.view == View::Authenticating && self.session.access_token.is_some() && self.boards.is_empty() {
            self.status = None;
            self.view = View::BoardList;
        }
        Vec::new()
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    fn on_select_board(&mut self, id: &str) -> Vec<Command> {
        if self.view != View::BoardList {
            return Vec::new();
        }
        let Some(board) = self.boards.iter().find(|b| b.id == id) else {
            return vec![log(format!("Unknown board selected: {id}"))];
        };
        self.selection = Some(Selection { board_id: board.id.clone(), board_name: board.name.clone() });
        self.view = View::CreatePin;
        vec![log(format!("Selected board: {}", board.name))]
    }

    fn on_open_create_board(&mut self) -> Vec<Command> {
        if self.view == View::BoardList {
            self.view = View::CreateBoard;
        }
        Vec::new()
    }

    fn on_back_to_boards(&mut self) -> Vec<Command> {
        match self.view {
            View::CreatePin | View::CreateBoard => {
                self.nav_epoch += 1;
                self.reset_to_boards();
            }
            View::BoardList => self.reset_to_boards(),
            View::AwaitingAuth | View::Authenticating | View::Error => {}
        }
        Vec::new()
    }

    // -------------------------------------------------------------------------
    // Product parse
    // -------------------------------------------------------------------------

    fn on_parse_requested(&mut self) -> Vec<Command> {
        if self.view != View::CreatePin || self.in_flight.parse.is_some() {
            return Vec::new();
        }
        match self.pin_form.parse_target() {
            Ok(url) => {
                self.in_flight.parse = Some(url.clone());
                self.parsed = None;
                vec![log(format!("Parsing: {url}")), Command::ParseProduct { url }]
            }
            Err(err) => vec![Command::Notify(Notice::error(&err))],
        }
    }

    fn on_product_parsed(&mut self, result: Result<ParsedProduct, ApiError>) -> Vec<Command> {
        let Some(url) = self.in_flight.parse.take() else {
            return vec![log("Ignoring unexpected parse result")];
        };
        match result {
            Ok(product) if self.view == View::CreatePin => {
                self.pin_form.prefill(&product, &url);
                self.parsed = Some(product);
                vec![log("Parsed successfully")]
            }
            Ok(_) => vec![log("Discarding parse result after navigation")],
            Err(e) => {
                let err = WorkflowError::from_api(e, "Parse failed");
                vec![log(format!("Parse failed: {err}")), Command::Notify(Notice::error(&err))]
            }
        }
    }

    // -------------------------------------------------------------------------
    // Pin creation
    // -------------------------------------------------------------------------

    fn on_submit_pin(&mut self) -> Vec<Command> {
        if self.view != View::CreatePin || self.in_flight.create_pin.is_some() {
            return Vec::new();
        }
        let Some(token) = self.token().map(str::to_owned) else {
            self.fail(&WorkflowError::Auth("Not connected".to_owned()));
            return vec![log("Pin submit without a session token")];
        };
        let Some(selection) = self.selection.clone() else {
            return vec![Command::Notify(Notice::error(&WorkflowError::Validation("Select a board first")))];
        };
        match self.pin_form.to_request(&selection.board_id) {
            Ok(request) => {
                self.in_flight.create_pin = Some(PendingPin { target: selection, nav_epoch: self.nav_epoch });
                vec![log("Creating pin..."), Command::CreatePin { token, request }]
            }
            Err(err) => vec![Command::Notify(Notice::error(&err))],
        }
    }

    fn on_pin_created(&mut self, result: Result<String, ApiError>) -> Vec<Command> {
        let Some(PendingPin { target, nav_epoch }) = self.in_flight.create_pin.take() else {
            return vec![log("Ignoring unexpected pin result")];
        };
        match result {
            Ok(id) => {
                if self.view == View::CreatePin && nav_epoch == self.nav_epoch {
                    self.reset_to_boards();
                }
                vec![
                    log(format!("Pin created: {id}")),
                    Command::Notify(Notice::success(format!(
                        "Pin created!\n\nID: {id}\nBoard: {}\n\nSandbox mode: the pin is not visible in production.",
                        target.board_name
                    ))),
                ]
            }
            Err(e) => {
                let err = WorkflowError::from_api(e, "Failed");
                vec![log(format!("Pin creation failed: {err}")), Command::Notify(Notice::error(&err))]
            }
        }
    }

    // -------------------------------------------------------------------------
    // Board creation
    // -------------------------------------------------------------------------

    fn on_submit_board(&mut self) -> Vec<Command> {
        if self.view != View::CreateBoard || self.in_flight.create_board.is_some() {
            return Vec::new();
        }
        let Some(token) = self.token().map(str::to_owned) else {
            self.fail(&WorkflowError::Auth("Not connected".to_owned()));
            return vec![log("Board submit without a session token")];
        };
        match self.board_form.to_request() {
            Ok(request) => {
                self.in_flight.create_board = Some(self.nav_epoch);
                vec![log(format!("Creating board: {}", request.name)), Command::CreateBoard { token, request }]
            }
            Err(err) => vec![Command::Notify(Notice::error(&err))],
        }
    }

    fn on_board_created(&mut self, result: Result<CreatedBoard, ApiError>) -> Vec<Command> {
        let Some(nav_epoch) = self.in_flight.create_board.take() else {
            return vec![log("Ignoring unexpected board result")];
        };
        match result {
            Ok(created) => {
                let board = Board::from(created);
                let name = board.name.clone();
                if !self.boards.iter().any(|b| b.id == board.id) {
                    self.boards.push(board.clone());
                }
                let mut commands = Vec::new();
                if !self.local_boards.push(board) {
                    commands.push(log(format!("Board already cached: {name}")));
                }
                if self.view == View::CreateBoard && nav_epoch == self.nav_epoch {
                    self.reset_to_boards();
                }
                commands.extend([
                    Command::PersistLocalBoards(self.local_boards.clone()),
                    log(format!("Board created: {name}")),
                    Command::Notify(Notice::success(format!("Board created: {name}"))),
                ]);
                commands
            }
            Err(e) => {
                let err = WorkflowError::from_api(e, "Failed");
                vec![log(format!("Board creation failed: {err}")), Command::Notify(Notice::error(&err))]
            }
        }
    }
}
