//! Computational finite group theory over permutation groups.
//!
//! A permutation group is represented implicitly by a small generating set
//! and computed with via a stabilizer chain (base and strong generating set,
//! BSGS): a factorization along a chosen sequence of base points that turns
//! an exponentially large group into a polynomially sized description.
//!
//! The crate is organized bottom-up:
//!
//! - [`domain`] — points the group acts on, and the 0-/1-based convention.
//! - [`perm`] — the permutation value type, its encodings, and the action
//!   trait used to generalize over it.
//! - [`group`] — orbits, transversals, stabilizer chains, Schreier-Sims,
//!   base change, subgroup search, partition stabilizers, and the
//!   user-facing [`group::Grp`] handle.

pub mod domain;
pub mod error;
pub mod group;
pub mod perm;

use std::{
    collections::{
        hash_map::{
            DefaultHasher,
            HashMap,
        },
        HashSet,
    },
    hash::BuildHasherDefault,
};

/// A type of HashMap that uses a determined seed
pub type DetHashMap<K, V> = HashMap<K, V, BuildHasherDefault<DefaultHasher>>;

/// A type of DetHashSet that uses a determined seed
pub type DetHashSet<K> = HashSet<K, BuildHasherDefault<DefaultHasher>>;

pub use error::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
