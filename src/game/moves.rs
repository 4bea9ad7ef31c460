use log::warn;

use super::*;

/// Tableau stacking rule: only a king may start an empty pile; otherwise the
/// incoming card must be the opposite color and one rank below the top card.
pub fn can_stack_tableau(top: Option<&Card>, card: Card) -> bool {
    match top {
        None => card.rank == 13,
        Some(top_card) => top_card.color_red() != card.color_red() && card.rank == top_card.rank - 1,
    }
}

/// Foundation stacking rule: only an ace may start an empty pile; otherwise
/// same suit, one rank up.
pub fn can_stack_foundation(top: Option<&Card>, card: Card) -> bool {
    match top {
        None => card.rank == 1,
        Some(top_card) => top_card.suit == card.suit && card.rank == top_card.rank + 1,
    }
}

impl KlondikeGame {
    /// First foundation (in index order) that accepts the card, if any.
    /// Backs the double-click-to-foundation shortcut.
    pub fn find_auto_foundation(&self, card: Card) -> Option<usize> {
        self.foundations
            .iter()
            .position(|pile| can_stack_foundation(pile.last(), card))
    }

    /// Moves `src[start..]` onto the top of `dst` in original order, then
    /// turns the source's newly exposed top card face up if it was face down
    /// (tableau reveal rule; an emptied source is left alone).
    ///
    /// The single move primitive behind both drag-drop and double-click.
    /// Legality is the caller's business; this only rejects malformed
    /// arguments, failing closed so a buggy collaborator cannot corrupt the
    /// piles.
    pub fn move_slice(&mut self, src: PileId, dst: PileId, start: usize) -> bool {
        if src == dst || !self.pile_exists(src) || !self.pile_exists(dst) {
            warn!("move_slice rejected: bad pile pair {:?} -> {:?}", src, dst);
            return false;
        }

        let source = self.pile_mut(src);
        if start >= source.len() {
            warn!(
                "move_slice rejected: start {} out of range for {:?} (len {})",
                start,
                src,
                source.len()
            );
            return false;
        }

        let moved = source.split_off(start);
        if let Some(top) = source.last_mut() {
            if !top.face_up {
                top.flip();
            }
        }
        self.pile_mut(dst).extend(moved);
        true
    }

    pub(crate) fn pile_exists(&self, id: PileId) -> bool {
        match id {
            PileId::Tableau(col) => col < self.tableau.len(),
            PileId::Foundation(idx) => idx < self.foundations.len(),
            PileId::Stock | PileId::Waste => true,
        }
    }
}
