//! The wide bit-packed encoding: three 64-bit words holding, for each of
//! the 32 points `[0, 32)`, the 5-bit quantity `(image - preimage) mod 32`.
//!
//! The 32 slots are split 12/12/8 across the three words (`12*5 = 60`,
//! `8*5 = 40`, both comfortably under 64 bits per word).

use crate::{
    error::Error,
    perm::Permutation,
};

const SLOTS: usize = 32;
const WIDTH: u32 = 5;
const MASK: u64 = 0x1F;
const WORD_SLOTS: [usize; 3] = [12, 12, 8];
const WORD_BASE: [usize; 3] = [0, 12, 24];

/// A permutation with `support_max <= 31`, packed into three 64-bit words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Perm32 {
    words: [u64; 3],
}

impl Perm32 {
    pub(crate) fn from_words(words: [u64; 3]) -> Self {
        Self { words }
    }

    pub(crate) fn words(&self) -> [u64; 3] {
        self.words
    }

    pub(crate) fn fits(images: &[usize]) -> bool {
        images.len() <= SLOTS && images.iter().enumerate().all(|(k, &v)| v < SLOTS || v == k)
    }

    fn slot_location(k: usize) -> (usize, u32) {
        for word_idx in 0..3 {
            let base = WORD_BASE[word_idx];
            if k < base + WORD_SLOTS[word_idx] {
                return (word_idx, (k - base) as u32 * WIDTH);
            }
        }
        unreachable!("k must be < 32")
    }

    fn decode(&self, k: usize) -> usize {
        debug_assert!(k < SLOTS);
        let (word_idx, shift) = Self::slot_location(k);
        let delta = (self.words[word_idx] >> shift) & MASK;
        (k as u64 + delta) as usize % SLOTS
    }

    fn encode_delta(preimage: usize, image: usize) -> u64 {
        let delta = (image as i64 - preimage as i64).rem_euclid(SLOTS as i64) as u64;
        delta & MASK
    }

    /// Build from a caller-guaranteed-valid image table, skipping the
    /// bijection check.
    pub(crate) fn from_images_unchecked(images: &[usize]) -> Self {
        let mut words = [0u64; 3];
        for (preimage, &image) in images.iter().enumerate() {
            let (word_idx, shift) = Self::slot_location(preimage);
            words[word_idx] |= Self::encode_delta(preimage, image) << shift;
        }
        Self { words }
    }
}

impl Permutation for Perm32 {
    fn id() -> Self {
        Self { words: [0; 3] }
    }

    fn from_images(images: &[usize]) -> Result<Self, Error> {
        crate::perm::valid_images(images)?;
        if !Self::fits(images) {
            return Err(Error::DomainOverflow {
                point: images.iter().copied().max().unwrap_or(0),
                capacity: SLOTS - 1,
            });
        }
        let mut words = [0u64; 3];
        for (preimage, &image) in images.iter().enumerate() {
            let (word_idx, shift) = Self::slot_location(preimage);
            words[word_idx] |= Self::encode_delta(preimage, image) << shift;
        }
        Ok(Self { words })
    }

    fn image(&self, k: usize) -> usize {
        if k >= SLOTS {
            k
        } else {
            self.decode(k)
        }
    }

    fn inv_image(&self, k: usize) -> usize {
        if k >= SLOTS {
            return k;
        }
        (0..SLOTS).find(|&p| self.decode(p) == k).unwrap_or(k)
    }

    fn op(&self, other: &Self) -> Self {
        let mut words = [0u64; 3];
        for preimage in 0..SLOTS {
            let mid = self.decode(preimage);
            let image = other.decode(mid);
            let (word_idx, shift) = Self::slot_location(preimage);
            words[word_idx] |= Self::encode_delta(preimage, image) << shift;
        }
        Self { words }
    }

    fn inverse(&self) -> Self {
        let mut words = [0u64; 3];
        for preimage in 0..SLOTS {
            let image = self.decode(preimage);
            let (word_idx, shift) = Self::slot_location(image);
            words[word_idx] |= Self::encode_delta(image, preimage) << shift;
        }
        Self { words }
    }

    fn support_max(&self) -> Option<usize> {
        (0..SLOTS).rev().find(|&k| self.decode(k) != k)
    }

    fn support_max_element(&self) -> usize {
        SLOTS - 1
    }

    fn support_min(&self) -> Option<usize> {
        (0..SLOTS).find(|&k| self.decode(k) != k)
    }
}
