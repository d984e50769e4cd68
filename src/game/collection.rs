use rand::Rng;
use std::collections::BTreeSet;

use crate::constants::PIECE_COUNT;

/// Inventory of collectible pieces, one earned per cleared level.
/// Piece ids run from 1 to [`PIECE_COUNT`].
#[derive(Debug, Default)]
pub struct Collection {
    pieces: BTreeSet<u8>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pieces(pieces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            pieces: pieces
                .into_iter()
                .filter(|&id| (1..=PIECE_COUNT).contains(&id))
                .collect(),
        }
    }

    pub fn has(&self, id: u8) -> bool {
        self.pieces.contains(&id)
    }

    pub fn count(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_complete(&self) -> bool {
        self.pieces.len() == PIECE_COUNT as usize
    }

    pub fn pieces(&self) -> impl Iterator<Item = u8> + '_ {
        self.pieces.iter().copied()
    }

    /// Award a uniformly random piece the player does not own yet.
    /// Returns the awarded id, or None once everything is collected.
    pub fn award_random(&mut self) -> Option<u8> {
        let missing: Vec<u8> = (1..=PIECE_COUNT).filter(|&id| !self.has(id)).collect();
        if missing.is_empty() {
            return None;
        }
        let id = missing[rand::thread_rng().gen_range(0..missing.len())];
        self.pieces.insert(id);
        Some(id)
    }

    /// Grant every remaining piece (shown when the adventure is finished).
    pub fn unlock_all(&mut self) {
        self.pieces.extend(1..=PIECE_COUNT);
    }

    pub fn reset(&mut self) {
        self.pieces.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn awards_are_unique_until_complete() {
        let mut collection = Collection::new();
        for n in 1..=PIECE_COUNT as usize {
            let id = collection.award_random().expect("pieces left to award");
            assert!((1..=PIECE_COUNT).contains(&id));
            assert_eq!(collection.count(), n);
        }
        assert!(collection.is_complete());
        assert_eq!(collection.award_random(), None);
    }

    #[test]
    fn from_pieces_ignores_out_of_range_ids() {
        let collection = Collection::from_pieces([0, 1, 7, PIECE_COUNT + 1]);
        assert_eq!(collection.count(), 2);
        assert!(collection.has(1));
        assert!(collection.has(7));
    }

    #[test]
    fn unlock_all_completes_the_collection() {
        let mut collection = Collection::from_pieces([3]);
        collection.unlock_all();
        assert!(collection.is_complete());
    }

    #[test]
    fn reset_clears_everything() {
        let mut collection = Collection::from_pieces([1, 2, 3]);
        collection.reset();
        assert_eq!(collection.count(), 0);
        assert!(!collection.has(1));
    }
}
