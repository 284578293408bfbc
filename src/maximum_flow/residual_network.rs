use crate::error::FlowError;
use crate::maximum_flow::dinic::Dinic;
use crate::maximum_flow::level_graph::LevelGraph;
use num_traits::{Bounded, NumAssign};
use std::fmt::Debug;
use std::ops::{Neg, Sub};

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
}

// rev: position of the mirrored record in to's list
#[derive(Default, PartialEq, Debug, Clone)]
pub struct InsideEdge<Flow> {
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
    pub rev: usize,
}

impl<Flow> InsideEdge<Flow>
where
    Flow: Sub<Output = Flow> + Copy,
{
    #[inline]
    pub fn residual_capacity(&self) -> Flow {
        self.upper - self.flow
    }
}

#[derive(Default, Clone, Debug)]
pub struct ResidualNetwork<Flow> {
    num_nodes: usize,
    adjacency: Vec<Vec<InsideEdge<Flow>>>,
    // edge id -> (tail, position in tail's list)
    edge_positions: Vec<(usize, usize)>,
}

impl<Flow> ResidualNetwork<Flow>
where
    Flow: NumAssign + Bounded + Neg<Output = Flow> + Ord + Copy + Debug,
{
    pub fn new(num_nodes: usize) -> Self {
        Self { num_nodes, adjacency: (0..num_nodes).map(|_| Vec::new()).collect(), edge_positions: Vec::new() }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edge_positions.len()
    }

    pub(crate) fn check_node(&self, node: usize) -> Result<(), FlowError> {
        if node >= self.num_nodes {
            return Err(FlowError::NodeOutOfRange { node, num_nodes: self.num_nodes });
        }
        Ok(())
    }

    // return edge index
    pub fn add_edge(&mut self, from: usize, to: usize, upper: Flow) -> Result<usize, FlowError> {
        self.check_node(from)?;
        self.check_node(to)?;

        let forward_index = self.adjacency[from].len();
        // a self-loop puts both records in the same list, the reverse one lands after the forward one
        let reverse_index = if from == to { forward_index + 1 } else { self.adjacency[to].len() };

        self.adjacency[from].push(InsideEdge { to, flow: Flow::zero(), upper, rev: reverse_index });
        self.adjacency[to].push(InsideEdge { to: from, flow: Flow::zero(), upper: Flow::zero(), rev: forward_index });

        self.edge_positions.push((from, forward_index));
        Ok(self.edge_positions.len() - 1)
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<Edge<Flow>> {
        let &(from, index) = self.edge_positions.get(edge_id)?;
        let edge = &self.adjacency[from][index];
        Some(Edge { from, to: edge.to, flow: edge.flow, upper: edge.upper })
    }

    pub fn reverse_flow(&self, edge_id: usize) -> Option<Flow> {
        let &(from, index) = self.edge_positions.get(edge_id)?;
        let edge = &self.adjacency[from][index];
        Some(self.adjacency[edge.to][edge.rev].flow)
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge<Flow>> + '_ {
        (0..self.num_edges()).filter_map(|edge_id| self.get_edge(edge_id))
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> std::slice::Iter<InsideEdge<Flow>> {
        self.adjacency[u].iter()
    }

    #[inline]
    pub(crate) fn inside_edge(&self, u: usize, i: usize) -> &InsideEdge<Flow> {
        &self.adjacency[u][i]
    }

    #[inline]
    pub(crate) fn degree(&self, u: usize) -> usize {
        self.adjacency[u].len()
    }

    #[inline]
    pub fn push_flow(&mut self, u: usize, i: usize, flow: Flow) {
        let (to, rev) = {
            let edge = &self.adjacency[u][i];
            (edge.to, edge.rev)
        };

        // update flow
        self.adjacency[u][i].flow += flow;
        self.adjacency[to][rev].flow -= flow;
    }

    pub fn flow_out_of(&self, source: usize) -> Flow {
        self.edges().fold(Flow::zero(), |mut flow, edge| {
            if edge.from == source && edge.to != source {
                flow += edge.flow;
            } else if edge.to == source && edge.from != source {
                flow -= edge.flow;
            }
            flow
        })
    }

    pub fn max_flow(&mut self, source: usize, sink: usize) -> Result<Flow, FlowError> {
        Dinic::default().solve(source, sink, self)
    }

    // nodes reachable from source in the residual network
    // a minimum cut only after max_flow has run
    pub fn minimum_cut(&self, source: usize) -> Result<Vec<usize>, FlowError> {
        self.check_node(source)?;
        let mut levels = LevelGraph::default();
        levels.build(self, source);
        Ok((0..self.num_nodes).filter(|&u| levels.is_reached(u)).collect())
    }

    pub fn cut_capacity(&self, side: &[usize]) -> Flow {
        let mut inside = vec![false; self.num_nodes];
        side.iter().filter(|&&u| u < self.num_nodes).for_each(|&u| inside[u] = true);
        self.edges().filter(|e| inside[e.from] && !inside[e.to]).fold(Flow::zero(), |sum, e| sum + e.upper)
    }
}
