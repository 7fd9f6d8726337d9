//! Points that a permutation group acts on, and the user-facing 0-/1-based
//! convention for talking about them.
//!
//! Internally everything is 0-based: point `k` of a permutation moves under
//! composition and image lookups as a plain `usize`. [`PointConvention`] is
//! the single place a caller opts into 1-based literals for input/output.

mod point;

pub use point::{
    Point,
    PointConvention,
};
