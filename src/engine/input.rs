//! Normalized input events from the renderer/input collaborator.
//!
//! The collaborator owns all pixel geometry. By the time an event reaches the
//! session it has been resolved to a logical pile (and, for stacked tableau
//! cards, a card index). The core never sees coordinates.

use crate::game::PileId;

/// A pointer-down resolved to a pile. `card` is the stacked card index under
/// the pointer when the collaborator can tell (tableau fans); `None` means
/// the hit landed on the pile's footprint without a specific card, e.g. an
/// empty slot or the gap below a short pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerHit {
    pub pile: PileId,
    pub card: Option<usize>,
}

impl PointerHit {
    pub fn pile(pile: PileId) -> Self {
        Self { pile, card: None }
    }

    pub fn card(pile: PileId, card: usize) -> Self {
        Self {
            pile,
            card: Some(card),
        }
    }
}

/// Grab offset between the pointer and the lifted card's origin, in whatever
/// units the collaborator draws in. Opaque to the core: stored for the
/// duration of the gesture and echoed back through the snapshot so the
/// renderer can keep the lifted cards glued to the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragOffset {
    pub x: f32,
    pub y: f32,
}
