//! The stabilizer chain itself: a sequence of levels `G = G^(1) ≥ G^(2) ≥
//! ... ≥ G^(k+1) = 1`, each fixing one more base point than the last, each
//! carrying the generators of its level and a transversal for its orbit.

pub mod base_change;
pub mod builder;

use num::BigUint;
use rand::Rng;

use crate::{
    group::{
        orbit::transversal::Transversal,
        Group,
    },
    perm::{
        action::SimpleApplication,
        Action,
        Permutation,
    },
};

/// One level of a stabilizer chain: the base point `β_i`, the strong
/// generators known at this level, and their transversal over `β_i`'s
/// orbit.
#[derive(Debug, Clone)]
pub struct StabchainLevel<P, A = SimpleApplication<P>>
where
    P: Permutation,
    A: Action<P>,
{
    base: A::OrbitT,
    generators: Group<P>,
    transversal: Transversal<P, A>,
}

impl<P, A> StabchainLevel<P, A>
where
    P: Permutation,
    A: Action<P>,
{
    pub fn new(base: A::OrbitT, generators: Group<P>, action: A) -> Self {
        let transversal = Transversal::compute(base.clone(), generators.generators(), action);
        Self { base, generators, transversal }
    }

    pub fn base(&self) -> &A::OrbitT {
        &self.base
    }

    pub fn generators(&self) -> &Group<P> {
        &self.generators
    }

    pub fn transversal(&self) -> &Transversal<P, A> {
        &self.transversal
    }

    pub fn orbit_size(&self) -> usize {
        self.transversal.orbit_size()
    }
}

/// A base and strong generating set, as a sequence of [`StabchainLevel`]s.
#[derive(Debug, Clone)]
pub struct Stabchain<P, A = SimpleApplication<P>>
where
    P: Permutation,
    A: Action<P>,
{
    levels: Vec<StabchainLevel<P, A>>,
    action: A,
}

impl<P, A> Stabchain<P, A>
where
    P: Permutation,
    A: Action<P>,
{
    /// The chain of the trivial group: no levels.
    pub fn trivial(action: A) -> Self {
        Self { levels: Vec::new(), action }
    }

    pub fn from_levels(levels: Vec<StabchainLevel<P, A>>, action: A) -> Self {
        Self { levels, action }
    }

    pub fn levels(&self) -> &[StabchainLevel<P, A>] {
        &self.levels
    }

    /// Number of levels (the length of the base).
    pub fn length(&self) -> usize {
        self.levels.len()
    }

    /// The base: the sequence of points fixed one at a time down the chain.
    pub fn base(&self) -> Vec<A::OrbitT> {
        self.levels.iter().map(|l| l.base.clone()).collect()
    }

    /// The union of every level's generating set, deduplicated.
    pub fn strong_generating_set(&self) -> Vec<P> {
        let mut set: Vec<P> = Vec::new();
        for level in &self.levels {
            for g in level.generators.generators() {
                if !set.iter().any(|existing| crate::perm::perm_eq(existing, g)) {
                    set.push(g.clone());
                }
            }
        }
        set
    }

    /// The group order: the product of the orbit sizes at each level
    /// (orbit-stabilizer, applied once per level). Always exact, via
    /// arbitrary precision, since `n!` overflows a machine integer well
    /// before the domains this crate is meant for are exhausted.
    pub fn order(&self) -> BigUint {
        self.levels
            .iter()
            .fold(BigUint::from(1u8), |acc, level| acc * BigUint::from(level.orbit_size()))
    }

    /// Sift `p` through the chain starting at `from`, stripping off a coset
    /// representative at each level it still belongs to the orbit of.
    /// Returns the residue and the level index sifting stopped at: stopping
    /// at `self.length()` means `p` sifted all the way through.
    pub fn sift_from(&self, from: usize, p: &P) -> (P, usize) {
        let mut residue = p.clone();
        for (offset, level) in self.levels.iter().enumerate().skip(from) {
            let image = self.action.apply(&residue, level.base.clone());
            match level.transversal.u_inv(&image) {
                Some(u_inv) => residue = residue.op(&u_inv),
                None => return (residue, offset),
            }
        }
        (residue, self.levels.len())
    }

    /// Sift from the top of the chain.
    pub fn basic_sift(&self, p: &P) -> (P, usize) {
        self.sift_from(0, p)
    }

    /// Whether `p` is a member of the group this chain describes: it sifts
    /// all the way through to the identity.
    pub fn is_member(&self, p: &P) -> bool {
        let (residue, level) = self.basic_sift(p);
        level == self.levels.len() && residue.is_id()
    }

    /// Whether `point` is fixed by every strong generator of this chain.
    pub fn is_fixed(&self, point: &A::OrbitT) -> bool {
        self.strong_generating_set().iter().all(|g| self.action.apply(g, point.clone()) == *point)
    }

    /// A uniformly random element of the group, as a product of one random
    /// transversal representative per level.
    pub fn random_element<R: Rng>(&self, rng: &mut R) -> P {
        let mut acc = P::id();
        for level in &self.levels {
            let points: Vec<_> = level.transversal.points().cloned().collect();
            if points.is_empty() {
                continue;
            }
            let chosen = &points[rng.gen_range(0..points.len())];
            let rep = level.transversal.u(chosen).expect("chosen from this transversal's own points");
            acc = acc.op(rep);
        }
        acc
    }

    pub(crate) fn action(&self) -> &A {
        &self.action
    }
}

/// Check the base-point-fixing invariant: every generator at level `i` must
/// fix every base point of levels `0..i`.
pub fn valid_stabchain<P, A>(chain: &Stabchain<P, A>) -> bool
where
    P: Permutation,
    A: Action<P>,
{
    for (i, level) in chain.levels.iter().enumerate() {
        for gen in level.generators.generators() {
            for earlier in &chain.levels[..i] {
                if chain.action.apply(gen, earlier.base.clone()) != earlier.base {
                    return false;
                }
            }
        }
    }
    true
}

/// Check the chain's computed order against an externally known order.
pub fn correct_stabchain_order<P, A>(chain: &Stabchain<P, A>, expected: &BigUint) -> bool
where
    P: Permutation,
    A: Action<P>,
{
    chain.order() == *expected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perm::{
        action::SimpleApplication,
        impls::Perm,
    };

    fn sym3_chain() -> Stabchain<Perm> {
        let transposition: Perm = Perm::from_images(&[1, 0, 2]).unwrap();
        let cycle: Perm = Perm::from_images(&[1, 2, 0]).unwrap();
        let level0 = StabchainLevel::new(0usize, Group::new(&[transposition, cycle]), SimpleApplication::default());
        // Stabilizer of 0 in Sym(3) is generated by the transposition (1 2).
        let stab_gen: Perm = Perm::from_images(&[0, 2, 1]).unwrap();
        let level1 = StabchainLevel::new(1usize, Group::new(&[stab_gen]), SimpleApplication::default());
        Stabchain::from_levels(vec![level0, level1], SimpleApplication::default())
    }

    #[test]
    fn order_of_symmetric_group_chain_is_six() {
        let chain = sym3_chain();
        assert_eq!(chain.order(), BigUint::from(6u8));
    }

    #[test]
    fn every_strong_generator_sifts_to_identity() {
        let chain = sym3_chain();
        for gen in chain.strong_generating_set() {
            assert!(chain.is_member(&gen));
        }
    }

    #[test]
    fn non_member_does_not_sift_to_identity() {
        let chain = sym3_chain();
        // A 4-point permutation moving a point outside the chain's domain
        // cannot be a member of Sym(3).
        let outsider: Perm = Perm::from_images(&[0, 1, 3, 2]).unwrap();
        assert!(!chain.is_member(&outsider));
    }

    #[test]
    fn chain_satisfies_base_fixing_invariant() {
        assert!(valid_stabchain(&sym3_chain()));
    }

    #[test]
    fn random_element_is_always_a_member() {
        let chain = sym3_chain();
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let g = chain.random_element(&mut rng);
            assert!(chain.is_member(&g));
        }
    }

    #[test]
    fn is_fixed_matches_strong_generating_set_scan() {
        // A chain whose only strong generator is (1 2): point 0 is fixed by
        // every strong generator, points 1 and 2 are not.
        let stab_gen: Perm = Perm::from_images(&[0, 2, 1]).unwrap();
        let level = StabchainLevel::new(1usize, Group::new(&[stab_gen]), SimpleApplication::default());
        let chain = Stabchain::from_levels(vec![level], SimpleApplication::default());
        assert!(chain.is_fixed(&0));
        assert!(!chain.is_fixed(&1));
        assert!(!chain.is_fixed(&2));
    }
}
