//! The array-backed encoding used once a permutation's domain is too large
//! for the bit-packed encodings. The image table is stored in the narrowest
//! integer width (`u8`/`u16`/`u32`) that can hold every image.

use crate::{
    error::Error,
    perm::Permutation,
};

/// An explicit image table, stored in the narrowest of `u8`/`u16`/`u32` that
/// fits the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayPermutation {
    Byte(Vec<u8>),
    Short(Vec<u16>),
    Int(Vec<u32>),
}

impl ArrayPermutation {
    fn len(&self) -> usize {
        match self {
            ArrayPermutation::Byte(v) => v.len(),
            ArrayPermutation::Short(v) => v.len(),
            ArrayPermutation::Int(v) => v.len(),
        }
    }

    fn get(&self, k: usize) -> usize {
        match self {
            ArrayPermutation::Byte(v) => v[k] as usize,
            ArrayPermutation::Short(v) => v[k] as usize,
            ArrayPermutation::Int(v) => v[k] as usize,
        }
    }

    /// Build from a caller-guaranteed-valid image table, picking the
    /// narrowest width, without re-checking it is a bijection.
    pub(crate) fn from_images_unchecked(images: &[usize]) -> Self {
        Self::from_images_sized(images)
    }

    fn from_images_sized(images: &[usize]) -> Self {
        let n = images.len();
        if n <= u8::MAX as usize + 1 {
            ArrayPermutation::Byte(images.iter().map(|&v| v as u8).collect())
        } else if n <= u16::MAX as usize + 1 {
            ArrayPermutation::Short(images.iter().map(|&v| v as u16).collect())
        } else {
            ArrayPermutation::Int(images.iter().map(|&v| v as u32).collect())
        }
    }
}

impl Permutation for ArrayPermutation {
    fn id() -> Self {
        ArrayPermutation::Byte(Vec::new())
    }

    fn from_images(images: &[usize]) -> Result<Self, Error> {
        crate::perm::valid_images(images)?;
        Ok(Self::from_images_sized(images))
    }

    fn image(&self, k: usize) -> usize {
        if k < self.len() {
            self.get(k)
        } else {
            k
        }
    }

    fn inv_image(&self, k: usize) -> usize {
        if k >= self.len() {
            return k;
        }
        (0..self.len()).find(|&p| self.get(p) == k).unwrap_or(k)
    }

    fn op(&self, other: &Self) -> Self {
        let n = self.len().max(other.len());
        let images: Vec<usize> = (0..n).map(|k| other.image(self.image(k))).collect();
        Self::from_images_sized(&images)
    }

    fn inverse(&self) -> Self {
        let n = self.len();
        let mut images = vec![0usize; n];
        for preimage in 0..n {
            images[self.get(preimage)] = preimage;
        }
        Self::from_images_sized(&images)
    }

    fn support_max(&self) -> Option<usize> {
        (0..self.len()).rev().find(|&k| self.get(k) != k)
    }

    fn support_max_element(&self) -> usize {
        usize::MAX
    }

    fn support_min(&self) -> Option<usize> {
        (0..self.len()).find(|&k| self.get(k) != k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chooses_byte_width_for_small_domain() {
        let images: Vec<usize> = (0..200).collect();
        let p = ArrayPermutation::from_images(&images).unwrap();
        assert!(matches!(p, ArrayPermutation::Byte(_)));
    }

    #[test]
    fn chooses_short_width_past_256() {
        let mut images: Vec<usize> = (0..300).collect();
        images.swap(0, 1);
        let p = ArrayPermutation::from_images(&images).unwrap();
        assert!(matches!(p, ArrayPermutation::Short(_)));
    }

    #[test]
    fn round_trips_a_wide_permutation() {
        let mut images: Vec<usize> = (0..500).collect();
        images.swap(17, 483);
        let p = ArrayPermutation::from_images(&images).unwrap();
        let inv = p.inverse();
        for k in 0..500 {
            assert_eq!(inv.image(p.image(k)), k);
        }
    }
}
