use std::fmt;

use num::integer::lcm;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    domain::PointConvention,
    error::Error,
    perm::Permutation,
    DetHashSet,
};

/// A permutation in canonical disjoint-cycle notation, under the active
/// 0-/1-based [`PointConvention`]. Fixed points are omitted; the identity
/// renders as `()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CyclePermutation {
    cycles: Vec<Vec<usize>>,
    convention: PointConvention,
}

impl CyclePermutation {
    /// The identity, under a convention (only relevant for rendering).
    pub fn id(convention: PointConvention) -> Self {
        Self { cycles: Vec::new(), convention }
    }

    /// The disjoint cycles, as internal 0-based points.
    pub fn cycles(&self) -> &[Vec<usize>] {
        &self.cycles
    }

    /// The order of the permutation this represents: the lcm of its cycle
    /// lengths.
    pub fn order(&self) -> usize {
        self.cycles.iter().map(|c| c.len()).fold(1, lcm)
    }

    /// Build the canonical disjoint-cycle form from a permutation.
    pub fn from_permutation<P: Permutation>(perm: &P, convention: PointConvention) -> Self {
        let max = match perm.support_max() {
            None => return Self::id(convention),
            Some(max) => max,
        };

        let mut accounted = DetHashSet::default();
        let mut cycles = Vec::new();
        for start in 0..=max {
            if accounted.contains(&start) || perm.image(start) == start {
                continue;
            }
            accounted.insert(start);
            let mut current = start;
            let mut cycle = vec![current];
            loop {
                current = perm.image(current);
                if current == start {
                    break;
                }
                accounted.insert(current);
                cycle.push(current);
            }
            cycles.push(cycle);
        }
        Self { cycles, convention }
    }

    /// Build a permutation by composing a sequence of cycles (as
    /// user-facing literals under `convention`), left to right: each
    /// subsequent cycle is multiplied on the right of the accumulated
    /// product, so cycles are free to overlap.
    pub fn build<P: Permutation>(
        cycles: &[Vec<usize>],
        convention: PointConvention,
    ) -> Result<P, Error> {
        let mut acc = P::id();
        for cycle in cycles {
            acc = acc.op(&single_cycle::<P>(cycle, convention)?);
        }
        Ok(acc)
    }

    /// Build a single-cycle permutation, e.g. `single_cycle_permutation(&[1,
    /// 2, 3], ..)` for `(1 2 3)`.
    pub fn single_cycle_permutation<P: Permutation>(
        cycle: &[usize],
        convention: PointConvention,
    ) -> Result<P, Error> {
        single_cycle::<P>(cycle, convention)
    }
}

fn single_cycle<P: Permutation>(cycle: &[usize], convention: PointConvention) -> Result<P, Error> {
    if cycle.is_empty() {
        return Ok(P::id());
    }
    let internal: Vec<usize> = cycle
        .iter()
        .map(|&literal| convention.try_to_internal(literal))
        .collect::<Result<_, _>>()?;

    let mut seen = DetHashSet::default();
    for &p in &internal {
        if !seen.insert(p) {
            return Err(Error::invalid(format!("cycle {:?} repeats point {}", cycle, p)));
        }
    }

    let n = internal.iter().copied().max().unwrap() + 1;
    let mut images: Vec<usize> = (0..n).collect();
    for window in 0..internal.len() {
        let from = internal[window];
        let to = internal[(window + 1) % internal.len()];
        images[from] = to;
    }
    P::from_images(&images)
}

impl fmt::Display for CyclePermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cycles.is_empty() {
            return write!(f, "()");
        }

        for cycle in &self.cycles {
            write!(f, "(")?;
            for (i, &point) in cycle.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.convention.from_internal(point))?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perm::impls::Perm;

    #[test]
    fn identity_renders_as_empty_parens() {
        let id: Perm = Perm::id();
        let cyclic = CyclePermutation::from_permutation(&id, PointConvention::OneBased);
        assert_eq!(cyclic.to_string(), "()");
    }

    #[test]
    fn two_cycle_notation() {
        let p: Perm = Perm::from_images(&[1, 0, 4, 3, 2]).unwrap();
        let cyclic = CyclePermutation::from_permutation(&p, PointConvention::OneBased);
        assert_eq!(cyclic.cycles().len(), 2);
        assert_eq!(cyclic.to_string(), "(1 2)(3 5)");
    }

    #[test]
    fn build_from_disjoint_cycles() {
        let p: Perm = CyclePermutation::build(&[vec![1, 2], vec![3, 4]], PointConvention::OneBased).unwrap();
        assert_eq!(p.image(0), 1);
        assert_eq!(p.image(1), 0);
        assert_eq!(p.image(2), 3);
        assert_eq!(p.image(3), 2);
    }

    #[test]
    fn build_from_overlapping_cycles_composes_left_to_right() {
        // (1 2)(2 3) applied to point 1 (1-based): first cycle sends 1 -> 2,
        // second cycle then sends 2 -> 3, so overall image of 1 is 3.
        let p: Perm = CyclePermutation::build(&[vec![1, 2], vec![2, 3]], PointConvention::OneBased).unwrap();
        let one_based_image = |k: usize| p.image(k - 1) + 1;
        assert_eq!(one_based_image(1), 3);
    }

    #[test]
    fn single_cycle_application_and_inverse() {
        let p: Perm = CyclePermutation::single_cycle_permutation(&[1, 3, 2], PointConvention::OneBased).unwrap();
        // (1 3 2) applied to point 1 (1-based) yields 3.
        assert_eq!(p.image(0) + 1, 3);
        let inv = p.inverse();
        // Its inverse applied to 3 yields 1.
        assert_eq!(inv.image(2) + 1, 1);
    }

    #[test]
    fn rejects_zero_under_one_based_convention() {
        let result: Result<Perm, _> = CyclePermutation::build(&[vec![0, 1]], PointConvention::OneBased);
        assert!(result.is_err());
    }

    #[test]
    fn order_matches_lcm_of_cycle_lengths() {
        let p: Perm = Perm::from_images(&[1, 2, 0, 4, 3]).unwrap();
        let cyclic = CyclePermutation::from_permutation(&p, PointConvention::OneBased);
        assert_eq!(cyclic.order(), 6);
    }
}
