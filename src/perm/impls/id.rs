//! The identity encoding: any domain size, moves nothing, stores nothing.

use crate::{
    error::Error,
    perm::Permutation,
};

/// The identity permutation. Carries no data; every other encoding
/// collapses to this one the moment its support becomes empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdPermutation;

impl Permutation for IdPermutation {
    fn id() -> Self {
        IdPermutation
    }

    fn from_images(images: &[usize]) -> Result<Self, Error> {
        crate::perm::valid_images(images)?;
        if images.iter().enumerate().all(|(k, &v)| k == v) {
            Ok(IdPermutation)
        } else {
            Err(Error::invalid("non-identity images given to IdPermutation::from_images"))
        }
    }

    fn image(&self, k: usize) -> usize {
        k
    }

    fn inv_image(&self, k: usize) -> usize {
        k
    }

    fn op(&self, _other: &Self) -> Self {
        IdPermutation
    }

    fn inverse(&self) -> Self {
        IdPermutation
    }

    fn support_max(&self) -> Option<usize> {
        None
    }

    fn support_max_element(&self) -> usize {
        usize::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_fixes_everything() {
        let id = IdPermutation::id();
        for k in 0..100 {
            assert_eq!(id.image(k), k);
        }
        assert!(id.is_id());
        assert_eq!(id.sign(), 1);
    }
}
