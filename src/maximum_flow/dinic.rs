use crate::error::FlowError;
use crate::maximum_flow::blocking_flow::BlockingFlow;
use crate::maximum_flow::level_graph::LevelGraph;
use crate::maximum_flow::residual_network::ResidualNetwork;
use crate::maximum_flow::trace::{PathPush, PhaseTrace};
use log::{debug, trace};
use num_traits::{Bounded, NumAssign};
use std::fmt::Debug;
use std::ops::Neg;

/// Dinic's maximum flow. Level and current-arc state are reset on every `solve`.
pub struct Dinic<Flow> {
    levels: LevelGraph,
    blocking_flow: BlockingFlow<Flow>,
    num_phases: usize,
    record_trace: bool,
    traces: Vec<PhaseTrace<Flow>>,
}

impl<Flow> Default for Dinic<Flow> {
    fn default() -> Self {
        Self { levels: LevelGraph::default(), blocking_flow: BlockingFlow::default(), num_phases: 0, record_trace: false, traces: Vec::new() }
    }
}

impl<Flow> Dinic<Flow>
where
    Flow: NumAssign + Bounded + Neg<Output = Flow> + Ord + Copy + Debug,
{
    pub fn with_trace() -> Self {
        Self { record_trace: true, ..Default::default() }
    }

    #[inline]
    pub fn num_phases(&self) -> usize {
        self.num_phases
    }

    pub fn traces(&self) -> &[PhaseTrace<Flow>] {
        &self.traces
    }

    pub fn solve(&mut self, source: usize, sink: usize, network: &mut ResidualNetwork<Flow>) -> Result<Flow, FlowError> {
        network.check_node(source)?;
        network.check_node(sink)?;
        self.num_phases = 0;
        self.traces.clear();

        if source == sink {
            return Ok(Flow::zero());
        }

        // stands in for infinity, each path is clipped to its bottleneck
        let upper = Flow::max_value();
        let mut flow = Flow::zero();

        loop {
            self.levels.build(network, source);

            // no s-t path
            if !self.levels.is_reached(sink) {
                break;
            }

            self.num_phases += 1;
            debug!("phase {}: levels {:?}", self.num_phases, self.levels.snapshot());
            if self.record_trace {
                self.traces.push(PhaseTrace::new(self.num_phases, self.levels.snapshot()));
            }

            self.blocking_flow.reset(network.num_nodes());
            loop {
                let delta = self.blocking_flow.augment(network, &self.levels, source, sink, upper);
                if delta == Flow::zero() {
                    break;
                }
                flow += delta;
                trace!("phase {}: pushed {:?}, total {:?}", self.num_phases, delta, flow);
                if let Some(phase) = self.traces.last_mut() {
                    phase.pushes.push(PathPush { amount: delta, total: flow });
                }
            }
        }

        debug!("maximum flow {:?} after {} phases", flow, self.num_phases);
        Ok(flow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_rejects_bad_terminals_before_touching_flow() {
        let mut network = ResidualNetwork::<i64>::new(2);
        network.add_edge(0, 1, 3).unwrap();
        let mut dinic = Dinic::default();
        assert_eq!(dinic.solve(0, 2, &mut network), Err(FlowError::NodeOutOfRange { node: 2, num_nodes: 2 }));
        assert_eq!(dinic.solve(7, 1, &mut network), Err(FlowError::NodeOutOfRange { node: 7, num_nodes: 2 }));
        assert_eq!(network.get_edge(0).unwrap().flow, 0);
    }

    #[test]
    fn same_source_and_sink_is_zero() {
        let mut network = ResidualNetwork::<i64>::new(2);
        network.add_edge(0, 1, 3).unwrap();
        let mut dinic = Dinic::default();
        assert_eq!(dinic.solve(1, 1, &mut network), Ok(0));
        assert_eq!(dinic.num_phases(), 0);
    }

    #[test]
    fn trace_records_levels_and_running_totals() {
        let mut network = ResidualNetwork::<i64>::new(4);
        network.add_edge(0, 1, 3).unwrap();
        network.add_edge(0, 2, 2).unwrap();
        network.add_edge(1, 2, 5).unwrap();
        network.add_edge(1, 3, 2).unwrap();
        network.add_edge(2, 3, 3).unwrap();

        let mut dinic = Dinic::with_trace();
        assert_eq!(dinic.solve(0, 3, &mut network), Ok(5));
        assert_eq!(dinic.num_phases(), dinic.traces().len());

        let first = &dinic.traces()[0];
        assert_eq!(first.phase, 1);
        assert_eq!(first.levels, vec![Some(0), Some(1), Some(1), Some(2)]);
        assert_eq!(first.pushes, vec![PathPush { amount: 2, total: 2 }, PathPush { amount: 2, total: 4 }]);

        let last = dinic.traces().last().unwrap();
        assert_eq!(last.pushes.last().map(|p| p.total), Some(5));
    }

    #[test]
    fn wide_source_edges_do_not_overflow_the_bound() {
        let mut network = ResidualNetwork::<i32>::new(3);
        network.add_edge(0, 1, i32::MAX).unwrap();
        network.add_edge(0, 1, i32::MAX).unwrap();
        network.add_edge(0, 2, i32::MAX - 5).unwrap();
        network.add_edge(1, 2, 5).unwrap();
        let mut dinic = Dinic::default();
        assert_eq!(dinic.solve(0, 2, &mut network), Ok(i32::MAX));
        assert!(network.edges().all(|e| 0 <= e.flow && e.flow <= e.upper));
    }

    #[test]
    fn traces_are_off_by_default() {
        let mut network = ResidualNetwork::<i64>::new(2);
        network.add_edge(0, 1, 3).unwrap();
        let mut dinic = Dinic::default();
        assert_eq!(dinic.solve(0, 1, &mut network), Ok(3));
        assert_eq!(dinic.num_phases(), 1);
        assert!(dinic.traces().is_empty());
    }
}
