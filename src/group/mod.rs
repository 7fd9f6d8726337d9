//! Orbits, transversals, stabilizer chains, Schreier-Sims, base change,
//! subgroup search, partition stabilizers, and the user-facing [`Grp`]
//! handle.

pub mod cancel;
pub mod grp;
pub mod orbit;
pub mod partition;
pub mod random_perm;
pub mod search;
pub mod stabchain;

pub use grp::Grp;

use crate::perm::Permutation;

/// A finite generating set for a permutation group. This is the raw input
/// to every construction in this crate; [`Grp`] wraps one together with its
/// (lazily built) stabilizer chain.
#[derive(Debug, Clone)]
pub struct Group<P> {
    generators: Vec<P>,
}

impl<P: Permutation> Group<P> {
    /// The trivial group (no generators).
    pub fn trivial() -> Self {
        Self { generators: Vec::new() }
    }

    /// A group generated by the given permutations.
    pub fn new(generators: &[P]) -> Self {
        Self { generators: generators.to_vec() }
    }

    /// As [`Group::new`], taking ownership of the generator list.
    pub fn from_list(generators: Vec<P>) -> Self {
        Self { generators }
    }

    /// The symmetric group on `n` points, generated by the transposition
    /// `(0 1)` and the `n`-cycle `(0 1 ... n-1)`.
    pub fn symmetric(n: usize) -> Self {
        if n < 2 {
            return Self::trivial();
        }
        let mut transposition: Vec<usize> = (0..n).collect();
        transposition.swap(0, 1);
        let mut cycle: Vec<usize> = (1..n).collect();
        cycle.push(0);
        Self::new(&[
            P::from_images(&transposition).expect("transposition is a valid permutation"),
            P::from_images(&cycle).expect("cycle is a valid permutation"),
        ])
    }

    /// The cyclic group of order `n`, generated by the single `n`-cycle
    /// `(0 1 ... n-1)`.
    pub fn cyclic(n: usize) -> Self {
        if n < 2 {
            return Self::trivial();
        }
        let mut cycle: Vec<usize> = (1..n).collect();
        cycle.push(0);
        Self::new(&[P::from_images(&cycle).expect("cycle is a valid permutation")])
    }

    /// The current generators.
    pub fn generators(&self) -> &[P] {
        &self.generators
    }

    /// One past the largest point moved by any generator: the smallest `n`
    /// such that this group is (isomorphic to a subgroup of) `Sym(n)`.
    pub fn symmetric_super_order(&self) -> usize {
        self.generators
            .iter()
            .filter_map(|g| g.support_max())
            .max()
            .map(|m| m + 1)
            .unwrap_or(0)
    }
}

impl<P: Permutation + std::fmt::Display> std::fmt::Display for Group<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<")?;
        for (i, g) in self.generators.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", g)?;
        }
        write!(f, ">")
    }
}
