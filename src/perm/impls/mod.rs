//! Concrete permutation encodings, and the [`Perm`] tagged union that
//! dispatches to the narrowest one for a given permutation's support.

pub mod array;
pub mod id;
pub mod perm16;
pub mod perm32;
pub mod word;

use std::hash::{
    Hash,
    Hasher,
};

pub use array::ArrayPermutation;
pub use id::IdPermutation;
pub use perm16::Perm16;
pub use perm32::Perm32;
pub use word::WordPermutation;

use crate::{
    error::Error,
    perm::{
        perm_eq,
        perm_hash,
        Permutation,
    },
};

/// The permutation value type: a tagged union over every encoding, always
/// held in its narrowest legal variant.
///
/// Callers never construct a variant directly; [`Perm::from_images`] and
/// every arithmetic operation picks the narrowest encoding for the result,
/// so two permutations that happen to agree as functions are always
/// structurally comparable via `==` regardless of how they were built.
#[derive(Debug, Clone)]
pub enum Perm {
    Id(IdPermutation),
    Small(Perm16),
    Wide(Perm32),
    Array(ArrayPermutation),
}

impl Perm {
    /// Pick the narrowest encoding for a length-`n` image table that is
    /// already known to be a valid permutation (used internally once
    /// validity has been checked, or composition guarantees it).
    fn narrow_trusted(images: &[usize]) -> Self {
        let mut end = images.len();
        while end > 0 && images[end - 1] == end - 1 {
            end -= 1;
        }
        let trimmed = &images[..end];
        if trimmed.is_empty() {
            Perm::Id(IdPermutation)
        } else if Perm16::fits(trimmed) {
            Perm::Small(Perm16::from_images_unchecked(trimmed))
        } else if Perm32::fits(trimmed) {
            Perm::Wide(Perm32::from_images_unchecked(trimmed))
        } else {
            Perm::Array(ArrayPermutation::from_images_unchecked(trimmed))
        }
    }
}

impl Default for Perm {
    fn default() -> Self {
        Perm::id()
    }
}

impl Permutation for Perm {
    fn id() -> Self {
        Perm::Id(IdPermutation)
    }

    fn from_images(images: &[usize]) -> Result<Self, Error> {
        crate::perm::valid_images(images)?;
        Ok(Self::narrow_trusted(images))
    }

    fn is_id(&self) -> bool {
        matches!(self, Perm::Id(_))
    }

    fn image(&self, k: usize) -> usize {
        match self {
            Perm::Id(p) => p.image(k),
            Perm::Small(p) => p.image(k),
            Perm::Wide(p) => p.image(k),
            Perm::Array(p) => p.image(k),
        }
    }

    fn inv_image(&self, k: usize) -> usize {
        match self {
            Perm::Id(p) => p.inv_image(k),
            Perm::Small(p) => p.inv_image(k),
            Perm::Wide(p) => p.inv_image(k),
            Perm::Array(p) => p.inv_image(k),
        }
    }

    fn op(&self, other: &Self) -> Self {
        if self.is_id() {
            return other.clone();
        }
        if other.is_id() {
            return self.clone();
        }
        let n = self.support_max().unwrap_or(0).max(other.support_max().unwrap_or(0)) + 1;
        let images: Vec<usize> = (0..n).map(|k| other.image(self.image(k))).collect();
        Self::narrow_trusted(&images)
    }

    fn inverse(&self) -> Self {
        let n = match self.support_max() {
            None => return Perm::Id(IdPermutation),
            Some(max) => max + 1,
        };
        let mut images = vec![0usize; n];
        for preimage in 0..n {
            images[self.image(preimage)] = preimage;
        }
        Self::narrow_trusted(&images)
    }

    fn support_max(&self) -> Option<usize> {
        match self {
            Perm::Id(p) => p.support_max(),
            Perm::Small(p) => p.support_max(),
            Perm::Wide(p) => p.support_max(),
            Perm::Array(p) => p.support_max(),
        }
    }

    fn support_max_element(&self) -> usize {
        match self {
            Perm::Id(p) => p.support_max_element(),
            Perm::Small(p) => p.support_max_element(),
            Perm::Wide(p) => p.support_max_element(),
            Perm::Array(p) => p.support_max_element(),
        }
    }

    fn support_min(&self) -> Option<usize> {
        match self {
            Perm::Id(p) => p.support_min(),
            Perm::Small(p) => p.support_min(),
            Perm::Wide(p) => p.support_min(),
            Perm::Array(p) => p.support_min(),
        }
    }
}

impl PartialEq for Perm {
    fn eq(&self, other: &Self) -> bool {
        perm_eq(self, other)
    }
}

impl Eq for Perm {}

impl Hash for Perm {
    fn hash<H: Hasher>(&self, state: &mut H) {
        perm_hash(self, state);
    }
}

impl std::fmt::Display for Perm {
    /// Renders in the canonical disjoint-cycle form, 1-based (the
    /// convention used throughout this crate's own doctests).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cyclic = crate::perm::export::CyclePermutation::from_permutation(
            self,
            crate::domain::PointConvention::OneBased,
        );
        write!(f, "{}", cyclic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowest_encoding_is_chosen() {
        assert!(matches!(Perm::id(), Perm::Id(_)));
        assert!(matches!(Perm::from_images(&[1, 0]).unwrap(), Perm::Small(_)));
        let mut wide: Vec<usize> = (0..20).collect();
        wide.swap(0, 19);
        assert!(matches!(Perm::from_images(&wide).unwrap(), Perm::Wide(_)));
        let mut huge: Vec<usize> = (0..400).collect();
        huge.swap(0, 399);
        assert!(matches!(Perm::from_images(&huge).unwrap(), Perm::Array(_)));
    }

    #[test]
    fn product_with_inverse_is_identity_in_smallest_encoding() {
        let mut images: Vec<usize> = (0..20).collect();
        images.reverse();
        let g = Perm::from_images(&images).unwrap();
        let product = g.op(&g.inverse());
        assert!(product.is_id());
        assert!(matches!(product, Perm::Id(_)));
    }

    #[test]
    fn shrink_after_multiply_downgrades_encoding() {
        // Two wide permutations whose product only moves a couple of points.
        let mut a: Vec<usize> = (0..20).collect();
        a.swap(0, 19);
        let mut b: Vec<usize> = (0..20).collect();
        b.swap(0, 19);
        let g = Perm::from_images(&a).unwrap();
        let h = Perm::from_images(&b).unwrap().inverse();
        let product = g.op(&h);
        assert!(product.is_id());
    }

    #[test]
    fn equality_ignores_trailing_identity_and_encoding() {
        let small = Perm::from_images(&[1, 0]).unwrap();
        let padded = Perm::from_images(&[1, 0, 2, 3, 4]).unwrap();
        assert_eq!(small, padded);
    }

    #[test]
    fn from_images_rejects_non_bijections() {
        assert!(Perm::from_images(&[0, 0]).is_err());
        assert!(Perm::from_images(&[2, 0]).is_err());
    }

    #[test]
    fn sign_and_order_agree_with_cycle_structure() {
        // A 3-cycle is even and has order 3.
        let p = Perm::from_images(&[1, 2, 0]).unwrap();
        assert_eq!(p.sign(), 1);
        assert_eq!(p.order(), 3);
        // A transposition is odd and has order 2.
        let t = Perm::from_images(&[1, 0, 2]).unwrap();
        assert_eq!(t.sign(), -1);
        assert_eq!(t.order(), 2);
    }
}
