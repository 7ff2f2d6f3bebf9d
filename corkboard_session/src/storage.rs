// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The persistence boundary: the plain board record and the storage trait.
//!
//! The engine never talks to a concrete database. It assembles a
//! [`BoardState`] — a plain record of everything a board is — and hands it
//! to whatever [`BoardStorage`] the host provides. Storage errors are the
//! implementation's associated type; the engine reports them to the caller
//! and does not retry.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;

use hashbrown::HashMap;

use corkboard_board::{Board, BoardSettings};
use corkboard_view2d::ViewportState;

/// The plain persisted record of one board.
///
/// With the `serde` feature enabled this serializes as a flat key-value
/// record: the object list, the camera snapshot, and the settings, keyed by
/// the board id.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    /// Storage key of the board.
    pub board_id: String,
    /// The object collection.
    pub board: Board,
    /// The camera snapshot.
    pub viewport: ViewportState,
    /// Board-level settings.
    pub settings: BoardSettings,
}

/// A board as listed in pickers: its key and display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSummary {
    /// Storage key of the board.
    pub board_id: String,
    /// Display name of the board.
    pub name: String,
}

/// Where board records are kept.
///
/// Implementations own the mechanics (a browser database, files, a remote
/// service); the engine only needs these five operations. `load` with no id
/// means "the board the user had open last", which implementations track
/// across `save` calls.
pub trait BoardStorage {
    /// Storage-specific failure type.
    type Error: Debug;

    /// Persists `state` under its board id and remembers it as the most
    /// recently saved board.
    fn save(&mut self, state: &BoardState) -> Result<(), Self::Error>;

    /// Loads a board by id, or the most recently saved board when `board_id`
    /// is `None`. Returns `Ok(None)` if no such board exists.
    fn load(&mut self, board_id: Option<&str>) -> Result<Option<BoardState>, Self::Error>;

    /// Lists all stored boards.
    fn list(&mut self) -> Result<Vec<BoardSummary>, Self::Error>;

    /// Deletes a board by id. Deleting an unknown id is not an error.
    fn delete(&mut self, board_id: &str) -> Result<(), Self::Error>;
}

/// In-memory [`BoardStorage`], for tests and ephemeral sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    boards: HashMap<String, BoardState>,
    last_board_id: Option<String>,
}

impl MemoryStorage {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoardStorage for MemoryStorage {
    type Error = core::convert::Infallible;

    fn save(&mut self, state: &BoardState) -> Result<(), Self::Error> {
        self.boards.insert(state.board_id.clone(), state.clone());
        self.last_board_id = Some(state.board_id.clone());
        Ok(())
    }

    fn load(&mut self, board_id: Option<&str>) -> Result<Option<BoardState>, Self::Error> {
        let key = match board_id {
            Some(id) => Some(id),
            None => self.last_board_id.as_deref(),
        };
        Ok(key.and_then(|id| self.boards.get(id).cloned()))
    }

    fn list(&mut self) -> Result<Vec<BoardSummary>, Self::Error> {
        Ok(self
            .boards
            .values()
            .map(|state| BoardSummary {
                board_id: state.board_id.clone(),
                name: state.settings.name.clone(),
            })
            .collect())
    }

    fn delete(&mut self, board_id: &str) -> Result<(), Self::Error> {
        self.boards.remove(board_id);
        Ok(())
    }
}
