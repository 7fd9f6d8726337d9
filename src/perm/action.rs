//! The "group element acts on an integer point" capability, kept separate
//! from [`super::Permutation`] so the stabilizer chain and subgroup search
//! machinery can be generic in how an element is applied to a point, not
//! just in which permutation encoding is used.

use std::marker::PhantomData;

use super::Permutation;

/// A capability describing how a value of type `P` acts on points of type
/// `Self::OrbitT`.
///
/// A faithful action additionally guarantees injectivity: two elements are
/// equal iff they agree on every point ([`Action::faithful_eq`]'s contract,
/// upheld by [`SimpleApplication`]).
pub trait Action<P>: Default + Clone + std::fmt::Debug {
    /// The type of point this action moves. Almost always `usize`.
    type OrbitT: Clone + Eq + std::hash::Hash + Ord + std::fmt::Debug;

    /// `k · g`: the right action of `g` on point `k`.
    fn apply(&self, g: &P, k: Self::OrbitT) -> Self::OrbitT;

    /// `g · k`: the left action of `g` on point `k`. Distinct from `apply`
    /// in general: it is the action for which `(g.op(h))·k = g·(h·k)` holds
    /// under the same (right-action-convention) group multiplication `op`,
    /// whereas `apply`'s law runs the other way, `k·(g.op(h)) = (k·g)·h`.
    fn apply_left(&self, g: &P, k: Self::OrbitT) -> Self::OrbitT;
}

/// The direct action of a [`Permutation`] on `usize` points: `k · g =
/// g.image(k)`.
#[derive(Debug, Clone, Default)]
pub struct SimpleApplication<P>(PhantomData<P>);

impl<P: Permutation> Action<P> for SimpleApplication<P> {
    type OrbitT = usize;

    fn apply(&self, g: &P, k: usize) -> usize {
        g.image(k)
    }

    /// `g · k = g.inv_image(k)`: with this choice, `(g.op(h))·k =
    /// g·(h·k)` genuinely holds (unlike re-using `apply`'s image lookup),
    /// since `g.op(h)` applies `g` first and `h` second.
    fn apply_left(&self, g: &P, k: usize) -> usize {
        g.inv_image(k)
    }
}
