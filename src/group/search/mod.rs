//! Generic backtracking subgroup search over a stabilizer chain: given a
//! predicate that a group element either does or doesn't satisfy, find the
//! (generating set of the) subgroup of elements that do.
//!
//! The search walks the chain level by level, extending a partial product
//! by one coset representative per level and pruning branches early with
//! [`Test::test`]. This enumerates every coset-representative combination
//! subject to pruning, which is complete but not the asymptotically fast
//! refinement search used by production computer algebra systems — correct
//! over large symmetric groups, just not competitive with them.
//!
//! Each level's representative is composed onto the *front* of the partial
//! product, not the back: a level-`i` representative always fixes the base
//! points of levels `0..i`, so prepending one onto a product already fixing
//! `base[0..level]` leaves those images untouched. Appending it instead
//! would not: the representative fixes the chain's *original* base points,
//! not wherever the partial product has already moved them to. This is
//! what lets [`Test::test`] treat a committed base point's image as frozen
//! for the rest of the descent.

use crate::{
    group::{
        cancel::CancellationToken,
        stabchain::Stabchain,
        Group,
    },
    perm::{
        Action,
        Permutation,
    },
    Result,
};

/// A prunable partial-candidate test, consulted once per level as the
/// search descends the chain.
pub trait Test<P: Permutation> {
    /// Whether `partial` (a product of coset representatives for levels
    /// `0..level`, composed deepest-representative-first) could still be
    /// extended to a full candidate satisfying the definition. Returning
    /// `false` prunes the whole subtree below `level`. `partial`'s images
    /// of `base[0..level]` are final and will not change as the search
    /// descends further.
    fn test(&self, level: usize, partial: &P) -> bool;
}

/// A full subgroup membership test, consulted on every candidate that
/// reaches the bottom of the chain (fixes the whole base).
pub trait SubgroupDefinition<P: Permutation>: Test<P> {
    fn complete(&self, candidate: &P) -> bool;
}

/// Search `chain` for every non-identity element satisfying `definition`,
/// returning them as a (possibly redundant) generating set for the
/// subgroup they generate.
pub fn search<P, A, D>(chain: &Stabchain<P, A>, definition: &D, cancel: &CancellationToken) -> Result<Group<P>>
where
    P: Permutation,
    A: Action<P, OrbitT = usize>,
    D: SubgroupDefinition<P>,
{
    let mut found = Vec::new();
    backtrack(chain, 0, P::id(), definition, &mut found, cancel)?;
    Ok(Group::from_list(found))
}

fn backtrack<P, A, D>(
    chain: &Stabchain<P, A>,
    level: usize,
    partial: P,
    definition: &D,
    found: &mut Vec<P>,
    cancel: &CancellationToken,
) -> Result<()>
where
    P: Permutation,
    A: Action<P, OrbitT = usize>,
    D: SubgroupDefinition<P>,
{
    cancel.check()?;

    if level == chain.length() {
        if !partial.is_id() && definition.complete(&partial) {
            found.push(partial);
        }
        return Ok(());
    }

    if !definition.test(level, &partial) {
        return Ok(());
    }

    let level_rec = &chain.levels()[level];
    let points: Vec<usize> = level_rec.transversal().points().cloned().collect();
    for point in points {
        let u = level_rec.transversal().u(&point).expect("point came from this transversal").clone();
        // `u` fixes base[0..level], so prepending it keeps the images the
        // partial product already assigned to those points untouched.
        let candidate = u.op(&partial);
        backtrack(chain, level + 1, candidate, definition, found, cancel)?;
    }
    Ok(())
}

/// The chain of stabilizer subgroups `G = G^(0) ≥ G^(1) ≥ ... ≥ G^(k) =
/// 1`, each as its own (possibly redundant) generating set, read off the
/// chain's strong generating set at each level.
pub fn base_point_groups<P, A>(chain: &Stabchain<P, A>) -> Vec<Group<P>>
where
    P: Permutation,
    A: Action<P, OrbitT = usize>,
{
    (0..=chain.length())
        .map(|i| {
            let gens: Vec<P> =
                chain.levels()[i..].iter().flat_map(|l| l.generators().generators().to_vec()).collect();
            Group::from_list(gens)
        })
        .collect()
}
