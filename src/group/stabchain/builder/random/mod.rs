//! Randomized ("Monte Carlo") stabilizer chain construction: extend the
//! chain with random group elements instead of enumerating every Schreier
//! generator, trading a small tunable probability of an incomplete chain
//! for much better practical performance on large orbits (Seress §4.2).

use std::fmt::Debug;

use num::BigUint;
use rand::{
    rngs::ThreadRng,
    Rng,
};
use tracing::{
    debug,
    warn,
};

use crate::{
    group::{
        random_perm::random_cayley_walk,
        stabchain::{
            builder::SchreierSimsBuilder,
            Stabchain,
        },
        Group,
    },
    perm::{
        action::SimpleApplication,
        Action,
        Permutation,
    },
};

/// Tuning constants for the randomized builder.
#[derive(Debug, Clone)]
pub struct RandomAlgoParameters {
    /// Random walk length used to generate each candidate group element.
    pub walk_length: usize,
    /// Number of consecutive random elements that must sift to the
    /// identity before the chain is accepted, when `order` isn't known.
    pub consecutive_successes: usize,
    /// The group's order, if known in advance: lets construction stop as
    /// soon as the chain's computed order matches, which is exact rather
    /// than merely probabilistic.
    pub order: Option<BigUint>,
    /// Hard cap on random trials, so a mis-specified `order` or an
    /// unluckily persistent run can't loop forever.
    pub max_iterations: usize,
}

impl Default for RandomAlgoParameters {
    fn default() -> Self {
        Self {
            walk_length: 30,
            consecutive_successes: 20,
            order: None,
            max_iterations: 10_000,
        }
    }
}

/// Randomized stabilizer chain builder.
#[derive(Debug)]
pub struct RandomizedBuilder<P, A = SimpleApplication<P>, R = ThreadRng>
where
    P: Permutation,
    A: Action<P, OrbitT = usize>,
{
    action: A,
    params: RandomAlgoParameters,
    rng: R,
}

impl<P, A, R> RandomizedBuilder<P, A, R>
where
    P: Permutation,
    A: Action<P, OrbitT = usize>,
    R: Rng + Debug,
{
    pub fn new(action: A, params: RandomAlgoParameters, rng: R) -> Self {
        Self { action, params, rng }
    }

    /// Build a chain that is correct with high probability (or exactly
    /// correct, if `params.order` is given): start from the trivial chain,
    /// then keep throwing random group elements at it, extending the chain
    /// with whatever residue survives sifting. Never runs the deterministic
    /// Schreier-generator enumeration over `generators` itself — that's the
    /// whole point of sampling instead.
    pub fn build(mut self, generators: &Group<P>) -> Stabchain<P, A> {
        if generators.generators().is_empty() {
            return Stabchain::trivial(self.action.clone());
        }

        let mut chain = Stabchain::trivial(self.action.clone());
        let mut streak = 0usize;
        for iteration in 0..self.params.max_iterations {
            if let Some(order) = &self.params.order {
                if chain.order() == *order {
                    debug!(iteration, "chain order matches known order, stopping");
                    return chain;
                }
            } else if streak >= self.params.consecutive_successes {
                debug!(iteration, streak, "enough consecutive trivial sifts, stopping");
                return chain;
            }

            let candidate = random_cayley_walk(generators, self.params.walk_length, &mut self.rng);
            let (residue, _) = chain.basic_sift(&candidate);
            if residue.is_id() {
                streak += 1;
                continue;
            }

            streak = 0;
            let mut all_gens = chain.strong_generating_set();
            all_gens.push(residue);
            chain = SchreierSimsBuilder::new(self.action.clone()).build(&Group::from_list(all_gens));
        }

        warn!(max_iterations = self.params.max_iterations, "randomized builder exhausted its iteration budget");
        chain
    }
}
