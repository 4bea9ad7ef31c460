//! The interaction state machine.
//!
//! A [`GameSession`] owns the piles and the in-flight drag gesture, consumes
//! normalized pointer events, and exposes a read-only snapshot for drawing.
//! Illegal input resolves as a silent snap-back, never an error: the rules
//! live in `game::moves` and everything here is gesture bookkeeping.

use log::warn;

use crate::engine::input::{DragOffset, PointerHit};
use crate::engine::view_model::TableView;
use crate::game::{
    can_stack_foundation, can_stack_tableau, Card, DrawMode, DrawResult, KlondikeGame, PileId,
};

/// Two presses on the same pile within this window count as a double-click.
const DOUBLE_CLICK_WINDOW_MS: u64 = 300;

/// Double-clicks on the waste are ignored this soon after a stock deal, so
/// rapid dealing cannot accidentally autoplay the fresh card.
const WASTE_AUTOPLAY_GUARD_MS: u64 = 500;

/// A live drag. `cards` are copies of `source[start..]`; the source pile is
/// left untouched until the drop commits, so snap-back is free.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    pub source: PileId,
    pub start: usize,
    pub cards: Vec<Card>,
    pub offset: DragOffset,
}

#[derive(Debug)]
pub struct GameSession {
    game: KlondikeGame,
    drag: Option<DragGesture>,
    seed: u64,
    move_count: u32,
    won: bool,
    last_click: Option<(PileId, u64)>,
    last_deal_at: Option<u64>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            game: KlondikeGame::new_with_seed(seed),
            drag: None,
            seed,
            move_count: 0,
            won: false,
            last_click: None,
            last_deal_at: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_game(game: KlondikeGame) -> Self {
        Self {
            game,
            drag: None,
            seed: 0,
            move_count: 0,
            won: false,
            last_click: None,
            last_deal_at: None,
        }
    }

    pub fn new_game(&mut self) {
        self.reset(rand::random());
    }

    pub fn new_game_with_seed(&mut self, seed: u64) {
        self.reset(seed);
    }

    fn reset(&mut self, seed: u64) {
        let draw_mode = self.game.draw_mode();
        self.game = KlondikeGame::new_with_seed(seed);
        self.game.set_draw_mode(draw_mode);
        self.drag = None;
        self.seed = seed;
        self.move_count = 0;
        self.won = false;
        self.last_click = None;
        self.last_deal_at = None;
    }

    /// Pointer press, resolved by the collaborator. Stock presses cycle the
    /// stock; a second press on the same pile within the double-click window
    /// autoplays to a foundation; anything else tries to start a drag.
    pub fn pointer_down(&mut self, hit: Option<PointerHit>, offset: DragOffset, now_ms: u64) {
        if self.drag.is_some() {
            // One gesture at a time; a second press never preempts a live drag.
            return;
        }

        let double = self.note_click(hit.map(|h| h.pile), now_ms);
        let Some(hit) = hit else { return };
        if !self.game.pile_exists(hit.pile) {
            warn!("pointer_down on unknown pile {:?}", hit.pile);
            return;
        }

        match hit.pile {
            PileId::Stock => self.cycle_stock(now_ms),
            pile if double => self.auto_to_foundation(pile, now_ms),
            _ => self.begin_drag(hit, offset),
        }
    }

    /// Pointer release. Commits the drag when the drop target accepts the
    /// lifted cards, otherwise snaps back; idle either way afterwards.
    pub fn pointer_up(&mut self, target: Option<PileId>) {
        let Some(gesture) = self.drag.take() else {
            return;
        };
        let Some(target) = target else {
            return;
        };
        if target == gesture.source || !self.game.pile_exists(target) {
            return;
        }

        // Legality is judged on the bottom card of the lifted run, the one
        // that will sit on the target's current top.
        let bottom = gesture.cards[0];
        let legal = match target {
            PileId::Tableau(_) => can_stack_tableau(self.game.pile(target).last(), bottom),
            PileId::Foundation(_) => {
                gesture.cards.len() == 1
                    && can_stack_foundation(self.game.pile(target).last(), bottom)
            }
            // Nothing ever drops onto the stock or waste.
            PileId::Stock | PileId::Waste => false,
        };

        if legal && self.game.move_slice(gesture.source, target, gesture.start) {
            self.finish_mutation();
        }
    }

    /// Explicit double-click entry for collaborators that do their own click
    /// timing. `pointer_down` detects the same gesture internally.
    pub fn double_click(&mut self, target: Option<PileId>, now_ms: u64) {
        if self.drag.is_some() {
            return;
        }
        let Some(pile) = target else {
            return;
        };
        if !self.game.pile_exists(pile) {
            warn!("double_click on unknown pile {:?}", pile);
            return;
        }
        self.auto_to_foundation(pile, now_ms);
    }

    fn note_click(&mut self, pile: Option<PileId>, now_ms: u64) -> bool {
        let previous = self.last_click.take();
        let Some(pile) = pile else {
            return false;
        };
        let double = previous.is_some_and(|(prev_pile, at)| {
            prev_pile == pile && now_ms.saturating_sub(at) < DOUBLE_CLICK_WINDOW_MS
        });
        // A consumed double-click resets the window instead of chaining into
        // a triple-click.
        if !double {
            self.last_click = Some((pile, now_ms));
        }
        double
    }

    fn cycle_stock(&mut self, now_ms: u64) {
        match self.game.draw_or_recycle() {
            DrawResult::DrewFromStock => {
                self.last_deal_at = Some(now_ms);
                self.finish_mutation();
            }
            DrawResult::RecycledWaste => self.finish_mutation(),
            DrawResult::NoOp => {}
        }
    }

    fn begin_drag(&mut self, hit: PointerHit, offset: DragOffset) {
        let pile = self.game.pile(hit.pile);
        if pile.is_empty() {
            return;
        }

        let start = match hit.pile {
            // Forgiving tableau hit-testing: a press below a short pile (or
            // a stale card index) selects the pile's top card.
            PileId::Tableau(_) => hit.card.unwrap_or(pile.len() - 1).min(pile.len() - 1),
            // Waste and foundations only ever move their single top card.
            PileId::Waste | PileId::Foundation(_) => pile.len() - 1,
            PileId::Stock => return,
        };

        if !pile[start].face_up {
            return;
        }

        self.drag = Some(DragGesture {
            source: hit.pile,
            start,
            cards: pile[start..].to_vec(),
            offset,
        });
    }

    fn auto_to_foundation(&mut self, pile: PileId, now_ms: u64) {
        let Some(top) = self.game.pile_top(pile) else {
            return;
        };
        if !top.face_up {
            return;
        }

        // A card dealt to the waste moments ago is not autoplay-eligible yet.
        if pile == PileId::Waste
            && self
                .last_deal_at
                .is_some_and(|at| now_ms.saturating_sub(at) < WASTE_AUTOPLAY_GUARD_MS)
        {
            return;
        }

        let Some(idx) = self.game.find_auto_foundation(top) else {
            return;
        };
        let start = self.game.pile(pile).len() - 1;
        if self.game.move_slice(pile, PileId::Foundation(idx), start) {
            self.finish_mutation();
        }
    }

    fn finish_mutation(&mut self) {
        self.move_count += 1;
        // Sticky until the next deal.
        if self.game.is_won() {
            self.won = true;
        }
    }

    pub fn view(&self) -> TableView {
        TableView::new(
            self.game.clone(),
            self.drag.clone(),
            self.won,
            self.move_count,
            self.seed,
        )
    }

    pub fn game(&self) -> &KlondikeGame {
        &self.game
    }

    pub fn drag(&self) -> Option<&DragGesture> {
        self.drag.as_ref()
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn set_draw_mode(&mut self, mode: DrawMode) {
        self.game.set_draw_mode(mode);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
