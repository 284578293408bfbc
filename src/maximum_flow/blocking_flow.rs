use crate::maximum_flow::level_graph::LevelGraph;
use crate::maximum_flow::residual_network::ResidualNetwork;
use num_traits::{Bounded, NumAssign};
use std::fmt::Debug;
use std::ops::Neg;

// `bound` is the least residual capacity along the path up to `node`
#[derive(Debug, Clone, Copy)]
struct Frame<Flow> {
    node: usize,
    bound: Flow,
}

// iterative dfs over the level graph, current_edge[u] only moves forward within a phase
pub struct BlockingFlow<Flow> {
    current_edge: Vec<usize>,
    stack: Vec<Frame<Flow>>,
}

impl<Flow> Default for BlockingFlow<Flow> {
    fn default() -> Self {
        Self { current_edge: Vec::new(), stack: Vec::new() }
    }
}

impl<Flow> BlockingFlow<Flow>
where
    Flow: NumAssign + Bounded + Neg<Output = Flow> + Ord + Copy + Debug,
{
    pub fn reset(&mut self, num_nodes: usize) {
        self.current_edge.clear();
        self.current_edge.resize(num_nodes, 0);
        self.stack.clear();
    }

    #[inline]
    pub fn current_edge(&self, u: usize) -> usize {
        self.current_edge[u]
    }

    // push along one augmenting path, 0 when the phase is exhausted
    pub fn augment(&mut self, network: &mut ResidualNetwork<Flow>, levels: &LevelGraph, source: usize, sink: usize, upper: Flow) -> Flow {
        self.stack.clear();
        self.stack.push(Frame { node: source, bound: upper });

        while let Some(&Frame { node: u, bound }) = self.stack.last() {
            if u == sink {
                self.apply(network, bound);
                return bound;
            }

            while self.current_edge[u] < network.degree(u) && !levels.is_admissible_edge(u, network.inside_edge(u, self.current_edge[u])) {
                self.current_edge[u] += 1;
            }

            if self.current_edge[u] < network.degree(u) {
                let e = network.inside_edge(u, self.current_edge[u]);
                self.stack.push(Frame { node: e.to, bound: bound.min(e.residual_capacity()) });
                continue;
            }

            // dead end: no edge out of u reaches the sink in this phase
            self.stack.pop();
            if let Some(parent) = self.stack.last() {
                self.current_edge[parent.node] += 1;
            }
        }

        Flow::zero()
    }

    // every frame below the top descended through its current arc
    fn apply(&mut self, network: &mut ResidualNetwork<Flow>, delta: Flow) {
        for frame in &self.stack[..self.stack.len() - 1] {
            network.push_flow(frame.node, self.current_edge[frame.node], delta);
        }
        self.stack.clear();
    }
}
