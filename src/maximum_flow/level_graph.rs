use crate::maximum_flow::residual_network::{InsideEdge, ResidualNetwork};
use num_traits::{Bounded, NumAssign};
use std::collections::VecDeque;
use std::fmt::Debug;
use std::ops::Neg;

const UNREACHED: usize = usize::MAX;

/// Breadth-first distances from the source over positive-residual records.
#[derive(Default)]
pub struct LevelGraph {
    levels: Vec<usize>,
    que: VecDeque<usize>,
}

impl LevelGraph {
    // O(n + m)
    // levels[v] becomes the residual distance from source to v, or UNREACHED
    pub fn build<Flow>(&mut self, network: &ResidualNetwork<Flow>, source: usize)
    where
        Flow: NumAssign + Bounded + Neg<Output = Flow> + Ord + Copy + Debug,
    {
        self.levels.clear();
        self.levels.resize(network.num_nodes(), UNREACHED);
        self.levels[source] = 0;
        self.que.clear();
        self.que.push_back(source);

        while let Some(u) = self.que.pop_front() {
            for e in network.neighbors(u) {
                if e.residual_capacity() > Flow::zero() && self.levels[e.to] == UNREACHED {
                    self.levels[e.to] = self.levels[u] + 1;
                    self.que.push_back(e.to);
                }
            }
        }
    }

    #[inline]
    pub fn is_reached(&self, u: usize) -> bool {
        self.levels[u] != UNREACHED
    }

    #[inline]
    pub fn level(&self, u: usize) -> Option<usize> {
        self.is_reached(u).then(|| self.levels[u])
    }

    pub fn snapshot(&self) -> Vec<Option<usize>> {
        (0..self.levels.len()).map(|u| self.level(u)).collect()
    }

    #[inline]
    pub fn is_admissible_edge<Flow>(&self, from: usize, e: &InsideEdge<Flow>) -> bool
    where
        Flow: NumAssign + Ord + Copy,
    {
        self.is_reached(from) && self.levels[e.to] == self.levels[from] + 1 && e.residual_capacity() > Flow::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_residual_distances() {
        let mut network = ResidualNetwork::<i64>::new(5);
        network.add_edge(0, 1, 1).unwrap();
        network.add_edge(1, 2, 1).unwrap();
        network.add_edge(0, 2, 1).unwrap();
        network.add_edge(2, 3, 0).unwrap();
        network.add_edge(4, 0, 3).unwrap();

        let mut levels = LevelGraph::default();
        levels.build(&network, 0);
        assert_eq!(levels.snapshot(), vec![Some(0), Some(1), Some(1), None, None]);
    }

    #[test]
    fn saturated_edges_are_skipped_and_reverse_edges_open() {
        let mut network = ResidualNetwork::<i64>::new(3);
        network.add_edge(0, 1, 2).unwrap();
        network.add_edge(1, 2, 2).unwrap();
        network.push_flow(0, 0, 2);

        let mut levels = LevelGraph::default();
        levels.build(&network, 1);
        assert_eq!(levels.snapshot(), vec![Some(1), Some(0), Some(1)]);

        levels.build(&network, 0);
        assert_eq!(levels.snapshot(), vec![Some(0), None, None]);
    }

    #[test]
    fn admissible_edges_climb_one_level() {
        let mut network = ResidualNetwork::<i64>::new(3);
        network.add_edge(0, 1, 1).unwrap();
        network.add_edge(1, 2, 1).unwrap();
        network.add_edge(0, 2, 1).unwrap();

        let mut levels = LevelGraph::default();
        levels.build(&network, 0);
        let from_zero: Vec<bool> = network.neighbors(0).map(|e| levels.is_admissible_edge(0, e)).collect();
        assert_eq!(from_zero, vec![true, true]);
        let from_one: Vec<bool> = network.neighbors(1).map(|e| levels.is_admissible_edge(1, e)).collect();
        assert_eq!(from_one, vec![false, false]);
    }
}
