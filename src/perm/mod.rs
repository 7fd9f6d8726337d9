//! The permutation value type, its encodings, and the generic action trait
//! used to abstract over "a group element acting on an integer point".

pub mod action;
pub mod builder;
pub mod export;
pub mod impls;

use std::{
    fmt,
    hash::{
        Hash,
        Hasher,
    },
};

pub use action::{
    Action,
    SimpleApplication,
};
pub use impls::Perm as DefaultPermutation;

use crate::error::Error;

/// A permutation of a finite prefix of the non-negative integers, extended
/// to the identity everywhere else.
///
/// Implementors choose their own backing storage; equality, hashing, sign,
/// and order are all derivable from `image`/`inv_image`/`support_max` alone,
/// so every encoding gets them for free and agrees with every other
/// encoding.
pub trait Permutation: Clone + fmt::Debug {
    /// The identity permutation.
    fn id() -> Self;

    /// Build a permutation from a length-`n` image table: `images[k]` is the
    /// image of point `k`. Fails if `images` is not a permutation of
    /// `[0, n)`.
    fn from_images(images: &[usize]) -> Result<Self, Error>;

    /// Whether this is the identity.
    fn is_id(&self) -> bool {
        self.support_max().is_none()
    }

    /// Image of point `k`. Points beyond the support map to themselves.
    fn image(&self, k: usize) -> usize;

    /// Preimage of point `k`: the unique `j` with `image(j) == k`.
    fn inv_image(&self, k: usize) -> usize;

    /// Composition in right-action convention: `k · (g.op(h)) = (k · g) · h`.
    fn op(&self, other: &Self) -> Self;

    /// The group inverse.
    fn inverse(&self) -> Self;

    /// Largest moved point, or `None` if this is the identity.
    fn support_max(&self) -> Option<usize>;

    /// Upper bound on `support_max` this encoding can represent without
    /// widening. `usize::MAX` for encodings with no practical ceiling.
    fn support_max_element(&self) -> usize;

    /// Smallest moved point, or `None` if this is the identity.
    fn support_min(&self) -> Option<usize> {
        let max = self.support_max()?;
        (0..=max).find(|&k| self.image(k) != k)
    }

    /// The set of moved points, in ascending order.
    fn support(&self) -> Vec<usize> {
        match self.support_max() {
            None => Vec::new(),
            Some(max) => (0..=max).filter(|&k| self.image(k) != k).collect(),
        }
    }

    /// `+1` if this is an even product of transpositions, `-1` otherwise.
    /// `sign(id) = 1`.
    fn sign(&self) -> i8 {
        let max = match self.support_max() {
            None => return 1,
            Some(max) => max,
        };
        let mut seen = vec![false; max + 1];
        let mut parity = 1i8;
        for start in 0..=max {
            if seen[start] || self.image(start) == start {
                continue;
            }
            let mut current = start;
            let mut len = 0usize;
            while !seen[current] {
                seen[current] = true;
                current = self.image(current);
                len += 1;
            }
            // A cycle of length `len` is `len - 1` transpositions.
            if (len - 1) % 2 == 1 {
                parity = -parity;
            }
        }
        parity
    }

    /// Composes `self` with its own inverse `pow - 1` times (or the inverse
    /// that many times for negative `pow`).
    fn pow(&self, pow: isize) -> Self {
        if pow == 0 || self.is_id() {
            return Self::id();
        }
        let (base, mut exp) = if pow < 0 {
            (self.inverse(), (-pow) as usize)
        } else {
            (self.clone(), pow as usize)
        };
        // Exponentiation by squaring.
        let mut result = Self::id();
        let mut square = base;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.op(&square);
            }
            square = square.op(&square.clone());
            exp >>= 1;
        }
        result
    }

    /// `self * other^-1`.
    fn divide(&self, other: &Self) -> Self {
        self.op(&other.inverse())
    }

    /// The order of this single permutation: the lcm of its cycle lengths.
    fn order(&self) -> usize {
        let max = match self.support_max() {
            None => return 1,
            Some(max) => max,
        };
        let mut seen = vec![false; max + 1];
        let mut order = 1usize;
        for start in 0..=max {
            if seen[start] {
                continue;
            }
            let mut current = start;
            let mut len = 0usize;
            while !seen[current] {
                seen[current] = true;
                current = self.image(current);
                len += 1;
            }
            order = num::integer::lcm(order, len);
        }
        order
    }
}

/// Function-level equality shared by every encoding: two permutations are
/// equal iff they agree pointwise on `[0, max(supportMax)+1)`. Permutations
/// differing only in trailing identity compare and hash equal.
pub fn perm_eq<P: Permutation>(a: &P, b: &P) -> bool {
    let max = match (a.support_max(), b.support_max()) {
        (None, None) => return true,
        (Some(m), None) | (None, Some(m)) => m,
        (Some(m1), Some(m2)) => m1.max(m2),
    };
    (0..=max).all(|k| a.image(k) == b.image(k))
}

/// Hash consistent with [`perm_eq`]: mixes image values over
/// `[0, supportMax+1)` with a stable seed.
pub fn perm_hash<P: Permutation, H: Hasher>(p: &P, state: &mut H) {
    match p.support_max() {
        None => 0u8.hash(state),
        Some(max) => {
            for k in 0..=max {
                p.image(k).hash(state);
            }
        }
    }
}

pub(crate) fn valid_images(images: &[usize]) -> Result<(), Error> {
    let n = images.len();
    let mut seen = vec![false; n];
    for &image in images {
        if image >= n || seen[image] {
            return Err(Error::invalid(format!(
                "images {:?} are not a permutation of [0, {})",
                images, n
            )));
        }
        seen[image] = true;
    }
    Ok(())
}
