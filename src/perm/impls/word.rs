//! A permutation represented as a pending word of factors, evaluated lazily.
//!
//! Used by random-element generation (Cayley walks) to avoid materializing
//! an intermediate permutation after every step; the word is only collapsed
//! into a concrete `P` once, at the end of the walk.

use crate::perm::Permutation;

/// A permutation stored as `factors[0].op(factors[1]).op(...)`, not yet
/// evaluated.
#[derive(Debug, Clone)]
pub struct WordPermutation<P> {
    factors: Vec<P>,
}

impl<P: Permutation> WordPermutation<P> {
    /// An empty word (the identity), with capacity reserved for `hint`
    /// factors.
    pub fn id_with_capacity(hint: usize) -> Self {
        Self { factors: Vec::with_capacity(hint) }
    }

    /// Append a factor to the word without evaluating anything yet.
    pub fn multiply_mut(&mut self, factor: &P) {
        self.factors.push(factor.clone());
    }

    /// Collapse the word into a single concrete permutation.
    pub fn evaluate(&self) -> P {
        self.factors.iter().fold(P::id(), |accum, p| accum.op(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perm::impls::Perm;

    #[test]
    fn evaluate_matches_left_to_right_composition() {
        let a = Perm::from_images(&[1, 2, 0]).unwrap();
        let b = Perm::from_images(&[0, 2, 1]).unwrap();
        let mut word = WordPermutation::<Perm>::id_with_capacity(2);
        word.multiply_mut(&a);
        word.multiply_mut(&b);
        assert_eq!(word.evaluate(), a.op(&b));
    }

    #[test]
    fn empty_word_is_identity() {
        let word = WordPermutation::<Perm>::id_with_capacity(0);
        assert!(word.evaluate().is_id());
    }
}
