//! The orbit of a point under a generating set, computed by breadth-first
//! closure (Seress, Lemma 4.4.1) and kept up to date as generators are
//! added one at a time during stabilizer chain construction.

pub mod transversal;

use std::collections::VecDeque;

use crate::{
    perm::{
        action::SimpleApplication,
        Action,
        Permutation,
    },
    DetHashSet,
};

/// The set of points reachable from a base point `β` under repeated
/// application of a generating set.
#[derive(Debug, Clone)]
pub struct Orbit<P, A = SimpleApplication<P>>
where
    P: Permutation,
    A: Action<P>,
{
    base: A::OrbitT,
    points: DetHashSet<A::OrbitT>,
    action: A,
}

impl<P, A> Orbit<P, A>
where
    P: Permutation,
    A: Action<P>,
{
    /// Compute the orbit of `base` under `generators` from scratch.
    pub fn compute(base: A::OrbitT, generators: &[P], action: A) -> Self {
        let mut points = DetHashSet::default();
        points.insert(base.clone());
        let mut queue = VecDeque::new();
        queue.push_back(base.clone());
        while let Some(point) = queue.pop_front() {
            for gen in generators {
                let image = action.apply(gen, point.clone());
                if points.insert(image.clone()) {
                    queue.push_back(image);
                }
            }
        }
        Self { base, points, action }
    }

    /// The base point this orbit was computed from.
    pub fn base(&self) -> &A::OrbitT {
        &self.base
    }

    /// Number of points in the orbit.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `point` is in the orbit.
    pub fn contains(&self, point: &A::OrbitT) -> bool {
        self.points.contains(point)
    }

    /// Iterate the orbit's points in no particular order.
    pub fn points(&self) -> impl Iterator<Item = &A::OrbitT> {
        self.points.iter()
    }

    /// Extend the orbit to account for a newly added generator, given the
    /// full (old + new) generating set.
    ///
    /// This re-seeds the BFS frontier from every currently known point
    /// rather than tracking which points are "new": the closure loop below
    /// already terminates the moment no generator produces an unseen image,
    /// so points that were already saturated under the old generators cost
    /// one wasted pass over their neighbours and nothing more — there is no
    /// separate fixed-point short circuit to get right or get wrong.
    pub fn updated(&self, generators: &[P]) -> Self {
        let mut points = self.points.clone();
        let mut queue: VecDeque<_> = points.iter().cloned().collect();
        while let Some(point) = queue.pop_front() {
            for gen in generators {
                let image = self.action.apply(gen, point.clone());
                if points.insert(image.clone()) {
                    queue.push_back(image);
                }
            }
        }
        Self { base: self.base.clone(), points, action: self.action.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perm::impls::Perm;

    #[test]
    fn single_cycle_orbit_is_the_whole_cycle() {
        let gen: Perm = Perm::from_images(&[1, 2, 0]).unwrap();
        let orbit = Orbit::compute(0usize, &[gen], SimpleApplication::default());
        assert_eq!(orbit.len(), 3);
        assert!(orbit.contains(&0) && orbit.contains(&1) && orbit.contains(&2));
    }

    #[test]
    fn fixed_point_has_singleton_orbit() {
        let gen: Perm = Perm::from_images(&[0, 2, 1]).unwrap();
        let orbit = Orbit::compute(0usize, &[gen], SimpleApplication::default());
        assert_eq!(orbit.len(), 1);
    }

    #[test]
    fn updated_grows_orbit_when_new_generator_connects_more_points() {
        let fix_zero: Perm = Perm::from_images(&[0, 2, 1, 3]).unwrap();
        let orbit = Orbit::compute(0usize, &[fix_zero.clone()], SimpleApplication::default());
        assert_eq!(orbit.len(), 1);

        let connect: Perm = Perm::from_images(&[3, 1, 2, 0]).unwrap();
        let grown = orbit.updated(&[fix_zero, connect]);
        assert_eq!(grown.len(), 2);
        assert!(grown.contains(&0) && grown.contains(&3));
    }

    #[test]
    fn updated_is_a_no_op_when_no_new_points_are_reachable() {
        let gen: Perm = Perm::from_images(&[1, 2, 0]).unwrap();
        let orbit = Orbit::compute(0usize, &[gen.clone()], SimpleApplication::default());
        let same = orbit.updated(&[gen]);
        assert_eq!(same.len(), orbit.len());
    }
}
