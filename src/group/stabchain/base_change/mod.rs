//! Base change: re-deriving a stabilizer chain for the same group under a
//! different base point ordering.
//!
//! Two strategies are offered. [`swap_by_conjugation`] is cheap and used by
//! default: when the desired point is already in the current level's
//! orbit, the whole sub-chain from that level down is relabelled by
//! conjugating with the coset representative that reaches it, reusing
//! every transversal instead of recomputing. [`rebuild`] is the fallback
//! for points outside the current orbit (or a caller that just wants a
//! clean chain for an arbitrary base): it samples random group elements
//! and sifts them through a fresh chain seeded with the target base order,
//! same in spirit to the randomized builder.

use num::BigUint;
use rand::Rng;

use crate::{
    group::{
        random_perm::RandPerm,
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

/// A source of "preferred" base points, consulted one level at a time.
/// Returning `None` leaves the existing/auto-selected point in place.
pub trait BaseGuide {
    fn base_point(&self, level: usize, previous_base: &[usize]) -> Option<usize>;
}

/// A fixed, fully explicit target base.
#[derive(Debug, Clone)]
pub struct ExplicitBase(pub Vec<usize>);

impl BaseGuide for ExplicitBase {
    fn base_point(&self, level: usize, _previous_base: &[usize]) -> Option<usize> {
        self.0.get(level).copied()
    }
}

/// Try the cheap swap at `level`: if `new_point` is already in that
/// level's orbit, relabel every level from `level` down by conjugating
/// with `u(new_point)`. Returns `None` if `new_point` is outside the
/// orbit, meaning the caller should fall back to [`rebuild`].
pub fn swap_by_conjugation<P, A>(chain: &Stabchain<P, A>, level: usize, new_point: usize) -> Option<Stabchain<P, A>>
where
    P: Permutation,
    A: Action<P, OrbitT = usize>,
{
    let old_level = chain.levels().get(level)?;
    if *old_level.base() == new_point {
        return Some(chain.clone());
    }
    let conj = old_level.transversal().u(&new_point)?.clone();
    let conj_inv = conj.inverse();
    let action = chain.action().clone();

    let mut levels: Vec<StabchainLevel<P, A>> = chain.levels()[..level].to_vec();
    for l in &chain.levels()[level..] {
        let new_gens: Vec<P> = l
            .generators()
            .generators()
            .iter()
            .map(|g| conj_inv.op(g).op(&conj))
            .collect();
        let new_base = action.apply(&conj, *l.base());
        levels.push(StabchainLevel::new(new_base, Group::from_list(new_gens), action.clone()));
    }
    Some(Stabchain::from_levels(levels, action))
}

/// Rebuild a chain for the same group from scratch, targeting `new_base`:
/// seed a trivial chain at each of `new_base`'s points, then repeatedly
/// sift random elements of the original group through it, adding whichever
/// generator a sift fails on, until the order matches.
pub fn rebuild<P, A, R>(chain: &Stabchain<P, A>, new_base: &[usize], rng: &mut R) -> Stabchain<P, A>
where
    P: Permutation,
    A: Action<P, OrbitT = usize>,
    R: Rng,
{
    let target_order = chain.order();
    let action = chain.action().clone();
    let sgs = Group::from_list(chain.strong_generating_set());

    let mut levels: Vec<StabchainLevel<P, A>> =
        new_base.iter().map(|&base| StabchainLevel::new(base, Group::trivial(), action.clone())).collect();

    if sgs.generators().is_empty() {
        return Stabchain::from_levels(levels, action);
    }

    let mut rand_perm = RandPerm::new(11, &sgs, 50, &mut *rng);
    let mut partial = Stabchain::from_levels(levels.clone(), action.clone());
    while partial.order() < target_order {
        let g = rand_perm.random_permutation();
        let (residue, drop_level) = partial.sift_from(0, &g);
        if !residue.is_id() && drop_level < levels.len() {
            let base = *levels[drop_level].base();
            let mut gens = levels[drop_level].generators().generators().to_vec();
            gens.push(residue);
            levels[drop_level] = StabchainLevel::new(base, Group::from_list(gens), action.clone());
            partial = Stabchain::from_levels(levels.clone(), action.clone());
        }
    }
    partial
}

/// Change the base of `chain` to follow `guide`, using the cheap swap
/// wherever possible and falling back to a rebuild from `level` onward the
/// first time a desired point isn't already reachable.
pub fn change_base<P, A, G, R>(chain: &Stabchain<P, A>, guide: &G, rng: &mut R) -> Stabchain<P, A>
where
    P: Permutation,
    A: Action<P, OrbitT = usize>,
    G: BaseGuide,
    R: Rng,
{
    let mut current = chain.clone();
    let mut previous_base: Vec<usize> = Vec::new();
    let mut level = 0;
    while level < current.length() {
        let Some(target) = guide.base_point(level, &previous_base) else {
            previous_base.push(*current.levels()[level].base());
            level += 1;
            continue;
        };
        if *current.levels()[level].base() == target {
            previous_base.push(target);
            level += 1;
            continue;
        }
        if let Some(swapped) = swap_by_conjugation(&current, level, target) {
            current = swapped;
        } else {
            let mut new_base = previous_base.clone();
            new_base.push(target);
            new_base.extend(current.base().into_iter().skip(level + 1));
            current = rebuild(&current, &new_base, rng);
        }
        previous_base.push(target);
        level += 1;
    }
    current
}
