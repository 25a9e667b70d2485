//! Town-name composition.
//!
//! The reverse of splitting: glue a random left piece to a random right piece.

use rand::Rng;

use crate::core::vocabulary::Vocabulary;

/// Compose one name from uniformly chosen pieces.
///
/// Returns `None` when either vocabulary is empty.
pub fn compose<R: Rng + ?Sized>(left: &Vocabulary, right: &Vocabulary, rng: &mut R) -> Option<String> {
    if left.is_empty() || right.is_empty() {
        return None;
    }
    let first = left.get(rng.gen_range(0..left.len()))?;
    let second = right.get(rng.gen_range(0..right.len()))?;
    Some(format!("{first}{second}"))
}

/// Compose up to `count` names.
pub fn compose_many<R: Rng + ?Sized>(
    left: &Vocabulary,
    right: &Vocabulary,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    (0..count).map_while(|_| compose(left, right, rng)).collect()
}
