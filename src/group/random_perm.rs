//! Random element generation: the product-replacement algorithm (Celler,
//! Leedham-Green, Murray, Niemeyer, O'Brien), and a simpler Cayley-walk
//! alternative used by the randomized chain builder.

use std::cmp::max;

use rand::{
    prelude::SliceRandom,
    rngs::ThreadRng,
    Rng,
};

use super::Group;
use crate::perm::{
    impls::word::WordPermutation,
    DefaultPermutation,
    Permutation,
};

/// Product-replacement random element generator: keeps a pool of
/// generator-derived elements and repeatedly replaces one with a product
/// of two others, accumulating the replaced element into a running
/// product. After enough replacements the accumulated product is close to
/// uniform over the group.
#[derive(Debug)]
pub struct RandPerm<P = DefaultPermutation, R = ThreadRng> {
    size: usize,
    rng: R,
    gen_elements: Vec<P>,
    accum: P,
}

impl<P, R> RandPerm<P, R>
where
    P: Permutation,
    R: Rng,
{
    /// Creates a generator seeded with an explicit source of randomness.
    pub fn new(min_size: usize, g: &Group<P>, initial_runs: usize, rng: R) -> Self {
        let mut gen_elements: Vec<_> = if !g.generators().is_empty() {
            g.generators().to_vec()
        } else {
            vec![P::id()]
        };
        let k = gen_elements.len();
        // Repeat elements if there aren't enough generators to fill the pool.
        for i in k..min_size {
            gen_elements.push(gen_elements[(i - k) % k].clone());
        }
        let accum = P::id();
        let size = max(min_size, k);
        let mut rand = Self { size, rng, gen_elements, accum };
        for _ in 0..initial_runs {
            rand.random_permutation();
        }
        rand
    }

    /// Generate the next random permutation in the pool's walk.
    pub fn random_permutation(&mut self) -> P {
        let s = self.rng.gen_range(0..self.size);
        let mut t = s;
        while t == s {
            t = self.rng.gen_range(0..self.size);
        }
        let e = if self.rng.gen::<bool>() { 1 } else { -1 };
        if self.rng.gen::<bool>() {
            self.gen_elements[s] = self.gen_elements[s].op(&self.gen_elements[t].pow(e));
            self.accum = self.accum.op(&self.gen_elements[s]);
        } else {
            self.gen_elements[s] = self.gen_elements[t].pow(e).op(&self.gen_elements[s]);
            self.accum = self.gen_elements[s].op(&self.accum);
        }
        self.accum.clone()
    }
}

impl<P> RandPerm<P>
where
    P: Permutation,
{
    /// Construct and initialise a random permutation generator using the
    /// thread-local RNG.
    pub fn from_generators(min_size: usize, g: &Group<P>, initial_runs: usize) -> Self {
        Self::new(min_size, g, initial_runs, rand::thread_rng())
    }
}

/// A random walk of the Cayley graph of a group: the product of `iters`
/// generators or their inverses, chosen uniformly at random.
pub fn random_cayley_walk<P, R>(g: &Group<P>, iters: usize, rng: &mut R) -> P
where
    P: Permutation,
    R: Rng,
{
    if g.generators().is_empty() {
        return P::id();
    }
    // Build the product as a word to avoid materializing every partial
    // product, only collapsing once at the end.
    let mut p = WordPermutation::<P>::id_with_capacity(iters);
    for _ in 0..iters {
        let elem = g.generators().choose(rng).expect("generator set is non-empty");
        let inv = elem.inverse();
        p.multiply_mut(if rng.gen() { elem } else { &inv });
    }
    p.evaluate()
}

/// As [`random_cayley_walk`], but each step either multiplies by a random
/// generator or leaves the running product unchanged ("lazy" walk). Used
/// where a slower-mixing but cheaper-per-step walk is preferable.
pub fn random_lazy_cayley_walk<P, R>(g: &Group<P>, iters: usize, rng: &mut R) -> P
where
    P: Permutation,
    R: Rng,
{
    if g.generators().is_empty() {
        return P::id();
    }
    let mut p = WordPermutation::<P>::id_with_capacity(iters);
    for _ in 0..iters {
        if rng.gen() {
            let elem = g.generators().choose(rng).expect("generator set is non-empty");
            p.multiply_mut(elem);
        }
    }
    p.evaluate()
}
