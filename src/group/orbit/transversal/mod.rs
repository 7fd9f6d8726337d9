//! Schreier transversals: for every point `α` in an orbit of `β`, an
//! explicit coset representative `u(α)` with `β · u(α) = α`.
//!
//! Unlike a Schreier vector (which stores only the generator label on each
//! orbit edge and reconstructs `u(α)` by walking back to the root on
//! demand), this keeps the representative itself at each point. That costs
//! more memory but makes `u`/`uInv` O(1) lookups, which the subgroup search
//! and sifting code call on the same few points repeatedly.

use crate::{
    perm::{
        action::SimpleApplication,
        Action,
        Permutation,
    },
    DetHashMap,
};
use std::collections::VecDeque;

/// A transversal for the orbit of `base`: a map from orbit point to coset
/// representative.
#[derive(Debug, Clone)]
pub struct Transversal<P, A = SimpleApplication<P>>
where
    P: Permutation,
    A: Action<P>,
{
    base: A::OrbitT,
    reps: DetHashMap<A::OrbitT, P>,
    action: A,
}

impl<P, A> Transversal<P, A>
where
    P: Permutation,
    A: Action<P>,
{
    /// Compute the transversal for `base`'s orbit under `generators` from
    /// scratch, by breadth-first closure starting from the identity at
    /// `base`.
    pub fn compute(base: A::OrbitT, generators: &[P], action: A) -> Self {
        let mut reps = DetHashMap::default();
        reps.insert(base.clone(), P::id());
        let mut queue = VecDeque::new();
        queue.push_back(base.clone());
        while let Some(point) = queue.pop_front() {
            let rep = reps.get(&point).expect("point was queued with a representative").clone();
            for gen in generators {
                let image = action.apply(gen, point.clone());
                if !reps.contains_key(&image) {
                    reps.insert(image.clone(), rep.op(gen));
                    queue.push_back(image);
                }
            }
        }
        Self { base, reps, action }
    }

    pub fn base(&self) -> &A::OrbitT {
        &self.base
    }

    /// Size of the underlying orbit.
    pub fn orbit_size(&self) -> usize {
        self.reps.len()
    }

    /// Whether `point` is in the orbit this transversal covers.
    pub fn contains(&self, point: &A::OrbitT) -> bool {
        self.reps.contains_key(point)
    }

    /// Every point in the orbit, in no particular order.
    pub fn points(&self) -> impl Iterator<Item = &A::OrbitT> {
        self.reps.keys()
    }

    /// `u(α)`: the coset representative with `base · u(α) = α`, if `α` is
    /// in the orbit.
    pub fn u(&self, point: &A::OrbitT) -> Option<&P> {
        self.reps.get(point)
    }

    /// `u(α)^-1`.
    pub fn u_inv(&self, point: &A::OrbitT) -> Option<P> {
        self.reps.get(point).map(Permutation::inverse)
    }

    /// Extend the transversal to account for a newly added generator, given
    /// the full (old + new) generating set. As with [`super::Orbit::updated`],
    /// the closure loop naturally does nothing extra once no generator
    /// reaches an unseen point, so there is nothing to special-case for the
    /// "no growth" outcome.
    pub fn updated(&self, generators: &[P]) -> Self {
        let mut reps = self.reps.clone();
        let mut queue: VecDeque<_> = reps.keys().cloned().collect();
        while let Some(point) = queue.pop_front() {
            let rep = reps.get(&point).expect("point was queued with a representative").clone();
            for gen in generators {
                let image = self.action.apply(gen, point.clone());
                if !reps.contains_key(&image) {
                    reps.insert(image.clone(), rep.op(gen));
                    queue.push_back(image);
                }
            }
        }
        Self { base: self.base.clone(), reps, action: self.action.clone() }
    }

    /// Conjugate every representative by `conj`: the transversal for the
    /// orbit of `base · conj` under a conjugated generating set, built
    /// without recomputing from scratch. Used by the swap-with-conjugation
    /// base change strategy.
    pub fn conjugated(&self, conj: &P) -> Self
    where
        A::OrbitT: Copy,
    {
        let conj_inv = conj.inverse();
        let mut reps = DetHashMap::default();
        for (point, rep) in &self.reps {
            let new_point = self.action.apply(conj, *point);
            let new_rep = conj_inv.op(rep).op(conj);
            reps.insert(new_point, new_rep);
        }
        let new_base = self.action.apply(conj, self.base);
        Self { base: new_base, reps, action: self.action.clone() }
    }
}
