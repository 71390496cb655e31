//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render a function of the workflow state read from the `Driver`
//! context and report user actions back as workflow events.

pub mod activity_panel;
pub mod board_card;
pub mod board_list;
pub mod create_board_form;
pub mod create_pin_form;
pub mod parse_result;
pub mod status_banner;
