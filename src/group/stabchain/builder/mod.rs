//! Stabilizer chain construction: fold generators in one at a time,
//! closing each level with its Schreier generators before moving down.

pub mod random;

use crate::{
    group::{
        stabchain::{
            Stabchain,
            StabchainLevel,
        },
        Group,
    },
    perm::{
        action::SimpleApplication,
        Action,
        Permutation,
    },
};

use tracing::{
    debug,
    trace,
};

/// Builds a stabilizer chain one generator at a time via classical
/// (deterministic) Schreier-Sims: each newly admitted generator is folded
/// into its level's orbit and transversal, and every Schreier generator it
/// produces is sifted; anything that doesn't sift to the identity is
/// recursively folded into the next level down (Seress, Algorithm 4.1).
///
/// The base point at a new level is always the smallest point the
/// extending permutation moves. This is simple and deterministic, at the
/// cost of sometimes choosing a longer base than a smarter heuristic
/// would; nothing downstream depends on the base being short.
#[derive(Debug)]
pub struct SchreierSimsBuilder<P, A = SimpleApplication<P>>
where
    P: Permutation,
    A: Action<P, OrbitT = usize>,
{
    levels: Vec<StabchainLevel<P, A>>,
    action: A,
}

impl<P, A> SchreierSimsBuilder<P, A>
where
    P: Permutation,
    A: Action<P, OrbitT = usize>,
{
    pub fn new(action: A) -> Self {
        Self { levels: Vec::new(), action }
    }

    /// Build a complete chain for the given generating set.
    pub fn build(mut self, generators: &Group<P>) -> Stabchain<P, A> {
        for g in generators.generators() {
            trace!(perm = ?g, "folding generator into chain");
            self.extend(0, g.clone());
        }
        Stabchain::from_levels(self.levels, self.action)
    }

    fn extend(&mut self, level: usize, p: P) {
        if p.is_id() {
            return;
        }

        if level == self.levels.len() {
            let base = p.support_min().expect("non-identity permutation moves a point");
            debug!(level, base, "opening new chain level");
            let new_level = StabchainLevel::new(base, Group::new(&[p]), self.action.clone());
            self.levels.push(new_level);
            self.close_level(level);
            return;
        }

        if self.levels[level].generators().generators().iter().any(|g| crate::perm::perm_eq(g, &p)) {
            return;
        }

        let base = *self.levels[level].base();
        let mut gens = self.levels[level].generators().generators().to_vec();
        gens.push(p);
        self.levels[level] = StabchainLevel::new(base, Group::from_list(gens), self.action.clone());
        self.close_level(level);
    }

    /// Generate and sift every Schreier generator for `level`: for each
    /// orbit point `α` with representative `u(α)` and each generator `g`,
    /// the Schreier generator `u(α)·g·u(α·g)^-1` fixes the base and so
    /// belongs in the stabilizer at `level + 1`.
    fn close_level(&mut self, level: usize) {
        let gens = self.levels[level].generators().generators().to_vec();
        let points: Vec<usize> = self.levels[level].transversal().points().cloned().collect();

        for point in points {
            let u = self.levels[level]
                .transversal()
                .u(&point)
                .cloned()
                .expect("point came from this transversal");
            for gen in &gens {
                let image = self.action.apply(gen, point);
                let u_image_inv = self.levels[level]
                    .transversal()
                    .u_inv(&image)
                    .expect("a generator's image stays within the orbit it was computed from");
                let schreier_gen = u.op(gen).op(&u_image_inv);

                let chain_below = Stabchain::from_levels(self.levels[level + 1..].to_vec(), self.action.clone());
                let (residue, drop) = chain_below.basic_sift(&schreier_gen);
                if !residue.is_id() {
                    self.extend(level + 1 + drop, residue);
                }
            }
        }
    }
}
