//! Textual/interchange representation of a permutation (§6 "exposed"
//! interfaces): the canonical disjoint-cycle form, and building a
//! permutation from an explicit list of cycles.

pub mod cycles;

pub use cycles::CyclePermutation;
