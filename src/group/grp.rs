//! [`Grp`]: the user-facing handle on a permutation group, combining a
//! generating set with its stabilizer chain.

use num::BigUint;
use rand::{
    rngs::ThreadRng,
    Rng,
};

use crate::{
    group::{
        cancel::CancellationToken,
        partition::{
            self,
            Partition,
        },
        search::{
            self,
            SubgroupDefinition,
            Test,
        },
        stabchain::{
            base_change::{
                change_base,
                ExplicitBase,
            },
            builder::{
                random::{
                    RandomAlgoParameters,
                    RandomizedBuilder,
                },
                SchreierSimsBuilder,
            },
            Stabchain,
        },
        Group,
    },
    perm::{
        action::SimpleApplication,
        Action,
        DefaultPermutation,
        Permutation,
    },
};

/// A permutation group: a generating set paired with a stabilizer chain
/// that makes membership, order, and random-element queries tractable
/// without ever enumerating the group.
#[derive(Debug, Clone)]
pub struct Grp<P = DefaultPermutation, A = SimpleApplication<P>>
where
    P: Permutation,
    A: Action<P, OrbitT = usize>,
{
    generators: Group<P>,
    chain: Stabchain<P, A>,
    action: A,
}

impl<P, A> Grp<P, A>
where
    P: Permutation,
    A: Action<P, OrbitT = usize>,
{
    /// The trivial group.
    pub fn trivial() -> Self {
        let action = A::default();
        Self { generators: Group::trivial(), chain: Stabchain::trivial(action.clone()), action }
    }

    /// Build the group generated by `generators`, deriving its stabilizer
    /// chain deterministically.
    pub fn from_generators(generators: &[P]) -> Self {
        let group = Group::new(generators);
        let action = A::default();
        let chain = SchreierSimsBuilder::new(action.clone()).build(&group);
        Self { generators: group, chain, action }
    }

    /// As [`Grp::from_generators`], but taking an externally known group
    /// order: construction stops as soon as a randomized search confirms
    /// the chain accounts for the whole group, which is usually much
    /// cheaper than full deterministic Schreier-Sims on a large group.
    pub fn from_generators_and_order(generators: &[P], order: BigUint) -> Self {
        let group = Group::new(generators);
        let action = A::default();
        let params = RandomAlgoParameters { order: Some(order), ..Default::default() };
        let chain = RandomizedBuilder::new(action.clone(), params, rand::thread_rng()).build(&group);
        Self { generators: group, chain, action }
    }

    /// The group's order. Exact, not an estimate.
    pub fn order(&self) -> BigUint {
        self.chain.order()
    }

    /// Whether `p` is a member of this group.
    pub fn contains(&self, p: &P) -> bool {
        self.chain.is_member(p)
    }

    /// A uniformly random element.
    pub fn random_element<R: Rng>(&self, rng: &mut R) -> P {
        self.chain.random_element(rng)
    }

    /// The generating set this group was constructed from. Not
    /// necessarily the strong generating set backing the chain.
    pub fn generators(&self) -> &[P] {
        self.generators.generators()
    }

    /// The chain's base, in order.
    pub fn base(&self) -> Vec<usize> {
        self.chain.base()
    }

    /// The point stabilizer of `point`: the subgroup of elements fixing
    /// it. Implemented by changing the chain's base to start at `point`
    /// and reading off every level below the top as a generating set.
    pub fn stabilizer(&self, point: usize) -> Self {
        let mut rng = rand::thread_rng();
        let guide = ExplicitBase(vec![point]);
        let moved_chain = change_base(&self.chain, &guide, &mut rng);
        if moved_chain.levels().is_empty() {
            return Self::trivial();
        }
        let stab_gens: Vec<P> =
            moved_chain.levels()[1..].iter().flat_map(|l| l.generators().generators().to_vec()).collect();
        Self::from_generators(&stab_gens)
    }

    /// The intersection of this group with `other`, found by backtracking
    /// search over this group's chain for elements that are also members
    /// of `other`.
    pub fn intersection(&self, other: &Self) -> Self {
        struct MemberOf<'o, P, A>
        where
            P: Permutation,
            A: Action<P, OrbitT = usize>,
        {
            other: &'o Grp<P, A>,
        }

        impl<'o, P, A> Test<P> for MemberOf<'o, P, A>
        where
            P: Permutation,
            A: Action<P, OrbitT = usize>,
        {
            fn test(&self, _level: usize, _partial: &P) -> bool {
                true
            }
        }

        impl<'o, P, A> SubgroupDefinition<P> for MemberOf<'o, P, A>
        where
            P: Permutation,
            A: Action<P, OrbitT = usize>,
        {
            fn complete(&self, candidate: &P) -> bool {
                self.other.contains(candidate)
            }
        }

        let cancel = CancellationToken::new();
        let definition = MemberOf { other };
        let found = search::search(&self.chain, &definition, &cancel)
            .expect("a freshly created cancellation token never reports cancelled");
        Self::from_generators(found.generators())
    }

    /// The subgroup stabilizing `partition` as an unordered set of cells.
    pub fn unordered_partition_stabilizer(&self, partition_to_stabilize: &Partition) -> Self {
        let cancel = CancellationToken::new();
        let found = partition::unordered_partition_stabilizer(&self.chain, partition_to_stabilize, &cancel)
            .expect("a freshly created cancellation token never reports cancelled");
        Self::from_generators(found.generators())
    }

    pub(crate) fn action(&self) -> &A {
        &self.action
    }
}

impl<P, A> Default for Grp<P, A>
where
    P: Permutation,
    A: Action<P, OrbitT = usize>,
{
    fn default() -> Self {
        Self::trivial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perm::impls::Perm;

    #[test]
    fn symmetric_group_of_five_has_order_120() {
        let group: Grp<Perm> = Grp::from_generators(Group::<Perm>::symmetric(5).generators());
        assert_eq!(group.order(), BigUint::from(120u32));
    }

    #[test]
    fn trivial_group_contains_only_identity() {
        let group: Grp<Perm> = Grp::trivial();
        assert_eq!(group.order(), BigUint::from(1u8));
        assert!(group.contains(&Perm::id()));
        let non_id: Perm = Perm::from_images(&[1, 0]).unwrap();
        assert!(!group.contains(&non_id));
    }

    #[test]
    fn point_stabilizer_of_symmetric_group_has_expected_order() {
        let group: Grp<Perm> = Grp::from_generators(Group::<Perm>::symmetric(5).generators());
        let stabilizer = group.stabilizer(0);
        assert_eq!(stabilizer.order(), BigUint::from(24u32));
    }

    #[test]
    fn intersection_of_symmetric_group_with_itself_is_itself() {
        let group: Grp<Perm> = Grp::from_generators(Group::<Perm>::symmetric(4).generators());
        let intersection = group.intersection(&group);
        assert_eq!(intersection.order(), group.order());
    }

    #[test]
    fn unordered_partition_stabilizer_has_expected_order() {
        let group: Grp<Perm> = Grp::from_generators(Group::<Perm>::symmetric(4).generators());
        let partition = Partition::from_cells(&[vec![0, 1], vec![2, 3]]).unwrap();
        let stabilizer = group.unordered_partition_stabilizer(&partition);
        assert_eq!(stabilizer.order(), BigUint::from(8u8));
    }
}
