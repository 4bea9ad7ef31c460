use crate::engine::input::DragOffset;
use crate::engine::session::DragGesture;
use crate::game::{Card, KlondikeGame, PileId};

/// Read-only snapshot handed to the renderer: pile contents, the in-flight
/// drag (so the renderer can skip the lifted slice at its source and draw it
/// at the pointer instead), and the win flag.
#[derive(Debug, Clone)]
pub struct TableView {
    game: KlondikeGame,
    drag: Option<DragView>,
    won: bool,
    move_count: u32,
    seed: u64,
}

#[derive(Debug, Clone)]
pub struct DragView {
    pub source: PileId,
    pub start: usize,
    pub cards: Vec<Card>,
    pub offset: DragOffset,
}

impl TableView {
    pub(crate) fn new(
        game: KlondikeGame,
        drag: Option<DragGesture>,
        won: bool,
        move_count: u32,
        seed: u64,
    ) -> Self {
        Self {
            game,
            drag: drag.map(|gesture| DragView {
                source: gesture.source,
                start: gesture.start,
                cards: gesture.cards,
                offset: gesture.offset,
            }),
            won,
            move_count,
            seed,
        }
    }

    pub fn game(&self) -> &KlondikeGame {
        &self.game
    }

    pub fn drag(&self) -> Option<&DragView> {
        self.drag.as_ref()
    }

    /// Whether the card at `pile[index]` is part of the lifted slice and
    /// should be drawn at the pointer rather than in place.
    pub fn is_lifted(&self, pile: PileId, index: usize) -> bool {
        self.drag
            .as_ref()
            .is_some_and(|drag| drag.source == pile && index >= drag.start)
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
}
