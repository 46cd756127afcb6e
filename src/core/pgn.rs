//! Move-list extraction seam. The engine only needs a half-move count and the
//! opening key; everything else in the transcript is ignored.

use pgn_reader::{Reader, SanPlus, Skip, Visitor};
use std::ops::ControlFlow;

use crate::consts::OPENING_KEY_PLIES;

/// Move-derived facts for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MoveSummary {
    pub(crate) plies: u32,
    /// Space-joined first <=4 half-moves in SAN; empty for moveless games
    pub(crate) opening_key: String,
}

#[derive(Default)]
struct MoveListVisitor {
    plies: u32,
    opening: Vec<String>,
}

impl Visitor for MoveListVisitor {
    type Tags = ();
    type Movetext = ();
    type Output = ();

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        self.plies = 0;
        self.opening.clear();
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, _: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        ControlFlow::Continue(())
    }

    fn begin_variation(&mut self, _: &mut Self::Movetext) -> ControlFlow<Self::Output, Skip> {
        // Only the mainline counts
        ControlFlow::Continue(Skip(true))
    }

    fn san(&mut self, _: &mut Self::Movetext, san: SanPlus) -> ControlFlow<Self::Output> {
        self.plies += 1;
        if self.opening.len() < OPENING_KEY_PLIES {
            self.opening.push(san.to_string());
        }
        ControlFlow::Continue(())
    }

    fn end_game(&mut self, _: Self::Movetext) -> Self::Output {}
}

/// Parse a PGN transcript and summarize its mainline. Returns `None` when the
/// transcript does not contain a readable game; failures are logged, never
/// fatal.
pub(crate) fn summarize_moves(pgn: &str) -> Option<MoveSummary> {
    let mut reader = Reader::new(pgn.as_bytes());
    let mut visitor = MoveListVisitor::default();
    match reader.read_game(&mut visitor) {
        Ok(Some(())) => Some(MoveSummary {
            plies: visitor.plies,
            opening_key: visitor.opening.join(" "),
        }),
        Ok(None) => None,
        Err(e) => {
            eprintln!("Failed to parse PGN: {e}");
            None
        }
    }
}
