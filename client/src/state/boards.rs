//! Board list state: remote listing merged with boards created this session.
//!
//! DESIGN
//! ======
//! The platform's board listing can lag behind (or, in sandbox deployments,
//! never show) boards this client just created. Created boards are therefore
//! kept in a tab-scoped cache and unioned into every listing, keyed solely
//! by `id`.

#[cfg(test)]
#[path = "boards_test.rs"]
mod boards_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::net::types::{CreatedBoard, RemoteBoard};

/// A board as displayed in the board list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub pin_count: u64,
    #[serde(default)]
    pub follower_count: u64,
    /// Created by this client during the current tab session.
    #[serde(default)]
    pub is_locally_created: bool,
}

impl Board {
    /// Description worth displaying, skipping empty strings.
    #[must_use]
    pub fn display_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

impl From<RemoteBoard> for Board {
    fn from(remote: RemoteBoard) -> Self {
        Self {
            id: remote.id,
            name: remote.name,
            description: remote.description,
            pin_count: remote.pin_count.unwrap_or(0),
            follower_count: remote.follower_count.unwrap_or(0),
            is_locally_created: false,
        }
    }
}

impl From<CreatedBoard> for Board {
    fn from(created: CreatedBoard) -> Self {
        Self {
            id: created.id,
            name: created.name,
            description: Some(created.description),
            pin_count: 0,
            follower_count: 0,
            is_locally_created: true,
        }
    }
}

/// Union the remote listing with locally created boards.
///
/// Remote boards keep their order and come first. A local board is appended
/// only when no board with the same `id` is already present.
pub fn merge_boards(remote: Vec<RemoteBoard>, local: &[Board]) -> Vec<Board> {
    let mut merged: Vec<Board> = remote.into_iter().map(Board::from).collect();
    let mut seen: HashSet<String> = merged.iter().map(|b| b.id.clone()).collect();
    for board in local {
        if seen.insert(board.id.clone()) {
            merged.push(Board { is_locally_created: true, ..board.clone() });
        }
    }
    merged
}

/// Boards created during this tab session, persisted as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalBoardCache {
    boards: Vec<Board>,
}

impl LocalBoardCache {
    /// Decode a stored cache. `None` (nothing stored) yields an empty cache.
    ///
    /// # Errors
    ///
    /// Returns the JSON error for a corrupt entry; callers treat that as empty.
    pub fn restore(raw: Option<&str>) -> Result<Self, serde_json::Error> {
        match raw {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str(raw),
            _ => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Append `board` unless a board with the same id is already cached.
    /// Returns whether it was added.
    pub fn push(&mut self, board: Board) -> bool {
        if self.boards.iter().any(|b| b.id == board.id) {
            return false;
        }
        self.boards.push(board);
        true
    }
}
