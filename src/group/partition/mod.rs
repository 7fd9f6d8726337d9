//! Ordered-cell partitions of the domain, and the subgroup of a
//! permutation group that stabilizes one as an unordered set of cells.
//!
//! A [`Partition`] is stored the way partition-backtrack implementations
//! typically do: cells are laid out contiguously in `index_array`,
//! `start_array` maps a point to where its cell begins, and `link_array`
//! threads each cell as a singly linked list so a cell can be walked
//! without scanning the whole array.

use crate::{
    group::{
        cancel::CancellationToken,
        search::{
            search,
            SubgroupDefinition,
            Test,
        },
        stabchain::Stabchain,
        Group,
    },
    perm::{
        Action,
        Permutation,
    },
    Result,
};

/// A partition of `[0, n)` into disjoint, non-empty cells.
#[derive(Debug, Clone)]
pub struct Partition {
    index_array: Vec<usize>,
    start_array: Vec<usize>,
    link_array: Vec<Option<usize>>,
}

impl Partition {
    /// Build a partition from an explicit list of cells. Every point in
    /// `[0, n)` (`n` being the total number of points across all cells)
    /// must appear in exactly one cell.
    pub fn from_cells(cells: &[Vec<usize>]) -> crate::Result<Self> {
        let n: usize = cells.iter().map(|c| c.len()).sum();
        let mut index_array = vec![usize::MAX; n];
        let mut start_array = vec![usize::MAX; n];
        let mut link_array = vec![None; n];
        let mut seen = vec![false; n];

        let mut pos = 0;
        for cell in cells {
            if cell.is_empty() {
                return Err(crate::Error::invalid("partition cells must be non-empty"));
            }
            let cell_start = pos;
            for (i, &point) in cell.iter().enumerate() {
                if point >= n || seen[point] {
                    return Err(crate::Error::invalid(format!(
                        "point {} is missing or repeated across partition cells",
                        point
                    )));
                }
                seen[point] = true;
                index_array[pos] = point;
                start_array[point] = cell_start;
                link_array[pos] = if i + 1 < cell.len() { Some(pos + 1) } else { None };
                pos += 1;
            }
        }
        Ok(Self { index_array, start_array, link_array })
    }

    /// A stable identifier for the cell containing `point`: equal for two
    /// points iff they lie in the same cell.
    fn cell_id(&self, point: usize) -> usize {
        self.start_array[point]
    }

    /// The cell containing `point`.
    pub fn cell_of(&self, point: usize) -> Vec<usize> {
        let mut cursor = self.start_array[point];
        let mut cell = Vec::new();
        loop {
            cell.push(self.index_array[cursor]);
            match self.link_array[cursor] {
                Some(next) => cursor = next,
                None => break,
            }
        }
        cell
    }

    /// Every cell, as an explicit list of points.
    pub fn cells(&self) -> Vec<Vec<usize>> {
        let mut seen = vec![false; self.index_array.len()];
        let mut result = Vec::new();
        for &point in &self.index_array {
            if seen[point] {
                continue;
            }
            let cell = self.cell_of(point);
            for &p in &cell {
                seen[p] = true;
            }
            result.push(cell);
        }
        result
    }

    /// Whether `g` maps this partition onto itself as an unordered set of
    /// cells: every cell's image under `g` is, in its entirety, some
    /// (possibly different) cell of the partition.
    pub fn is_invariant_under<P: Permutation>(&self, g: &P) -> bool {
        let cells = self.cells();
        let mut cell_id = vec![0usize; self.index_array.len()];
        for (id, cell) in cells.iter().enumerate() {
            for &p in cell {
                cell_id[p] = id;
            }
        }
        cells.iter().all(|cell| {
            let mut images = cell.iter().map(|&p| g.image(p));
            let first_id = cell_id[images.next().unwrap()];
            images.all(|im| cell_id[im] == first_id)
        })
    }
}

/// [`Test`]/[`SubgroupDefinition`] wrapper realizing the stabilizer of a
/// partition (as an unordered set of cells) as a search predicate.
///
/// The partial test only looks at base points the search has already
/// committed to (`base[..level]`): the driver composes each level's
/// representative onto the front of the partial product, so those points'
/// images are final by the time `level` is reached, but every other point
/// can still move freely before the candidate is complete. Checking full
/// invariance against an incomplete candidate would reject extensions that
/// are perfectly good, or accept ones that aren't, so the prune instead
/// only requires that base points already known to share a cell still map
/// into a common cell.
pub struct PartitionStabilizer<'a> {
    partition: &'a Partition,
    base: Vec<usize>,
}

impl<'a> PartitionStabilizer<'a> {
    pub fn new(partition: &'a Partition, base: Vec<usize>) -> Self {
        Self { partition, base }
    }
}

impl<'a, P: Permutation> Test<P> for PartitionStabilizer<'a> {
    fn test(&self, level: usize, partial: &P) -> bool {
        let mut image_cell_of: crate::DetHashMap<usize, usize> = crate::DetHashMap::default();
        for &beta in self.base.iter().take(level) {
            let cell = self.partition.cell_id(beta);
            let image_cell = self.partition.cell_id(partial.image(beta));
            match image_cell_of.get(&cell) {
                Some(&expected) if expected != image_cell => return false,
                _ => {
                    image_cell_of.insert(cell, image_cell);
                }
            }
        }
        true
    }
}

impl<'a, P: Permutation> SubgroupDefinition<P> for PartitionStabilizer<'a> {
    fn complete(&self, candidate: &P) -> bool {
        self.partition.is_invariant_under(candidate)
    }
}

/// Compute the subgroup of `chain`'s group stabilizing `partition` as an
/// unordered set of cells.
pub fn unordered_partition_stabilizer<P, A>(
    chain: &Stabchain<P, A>,
    partition: &Partition,
    cancel: &CancellationToken,
) -> Result<Group<P>>
where
    P: Permutation,
    A: Action<P, OrbitT = usize>,
{
    let definition = PartitionStabilizer::new(partition, chain.base());
    search(chain, &definition, cancel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        group::stabchain::builder::SchreierSimsBuilder,
        perm::{
            action::SimpleApplication,
            impls::Perm,
        },
    };

    #[test]
    fn cells_round_trip_through_from_cells() {
        let partition = Partition::from_cells(&[vec![0, 2], vec![1, 3]]).unwrap();
        let mut cells = partition.cells();
        cells.sort();
        assert_eq!(cells, vec![vec![0, 2], vec![1, 3]]);
    }

    #[test]
    fn rejects_partitions_missing_a_point() {
        assert!(Partition::from_cells(&[vec![0], vec![0]]).is_err());
    }

    #[test]
    fn transposition_respecting_a_two_block_partition_is_invariant() {
        let partition = Partition::from_cells(&[vec![0, 1], vec![2, 3]]).unwrap();
        let swap_within_blocks: Perm = Perm::from_images(&[1, 0, 3, 2]).unwrap();
        assert!(partition.is_invariant_under(&swap_within_blocks));
        let cross_block: Perm = Perm::from_images(&[2, 1, 0, 3]).unwrap();
        assert!(!partition.is_invariant_under(&cross_block));
    }

    #[test]
    fn partition_stabilizer_of_sym4_on_two_blocks_has_order_eight() {
        // Stabilizer of {{0,1},{2,3}} in Sym(4) as an unordered partition
        // has order 2*2*2 = 8: swap within each block, and swap the blocks.
        let group: Group<Perm> = Group::symmetric(4);
        let chain = SchreierSimsBuilder::new(SimpleApplication::default()).build(&group);
        let partition = Partition::from_cells(&[vec![0, 1], vec![2, 3]]).unwrap();
        let cancel = CancellationToken::new();
        let stabilizer = unordered_partition_stabilizer(&chain, &partition, &cancel).unwrap();
        let stabilizer_chain = SchreierSimsBuilder::new(SimpleApplication::default()).build(&stabilizer);
        assert_eq!(stabilizer_chain.order(), num::BigUint::from(8u8));
    }
}
