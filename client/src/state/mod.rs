//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `workflow` owns every transition; `boards`, `forms` and `activity` are the
//! focused models it is built from, kept separate so each can be tested on
//! its own.

pub mod activity;
pub mod boards;
pub mod forms;
pub mod workflow;
