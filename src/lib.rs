/* lib.rs
 *
 * Copyright 2026 baize contributors
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 *
 * SPDX-License-Identifier: GPL-3.0-or-later
 */

//! Rules engine and pointer-interaction core for Klondike solitaire.
//!
//! The crate owns the pile state, move legality, and the drag/click state
//! machine. A renderer/input collaborator delivers normalized pointer events
//! (already resolved to logical pile and card indices) and draws from the
//! read-only [`TableView`] snapshot. No pixel geometry lives here.

pub mod engine;
pub mod game;

pub use engine::input::{DragOffset, PointerHit};
pub use engine::session::GameSession;
pub use engine::view_model::{DragView, TableView};
pub use game::{Card, DrawMode, DrawResult, KlondikeGame, PileId, Suit};
