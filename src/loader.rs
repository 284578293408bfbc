//! Reads networks in the adjacency text format.
//!
//! The first line holds the node count `n`. Each of the next `n` lines describes the edges
//! leaving one node, in node order: an edge count `k` followed by `k` pairs `v cap`, where `v`
//! is a 1-based destination and `cap` a non-negative capacity.
//!
//! ```text
//! 4
//! 2 2 10 3 10
//! 2 3 2 4 15
//! 1 4 10
//! 0
//! ```

use crate::error::LoadError;
use crate::maximum_flow::residual_network::ResidualNetwork;
use num_traits::{Bounded, NumAssign};
use std::fmt::Debug;
use std::fs::read_to_string;
use std::ops::Neg;
use std::path::Path;
use std::str::FromStr;

pub fn load_network<Flow>(file_path: impl AsRef<Path>) -> Result<ResidualNetwork<Flow>, LoadError>
where
    Flow: NumAssign + Bounded + Neg<Output = Flow> + Ord + Copy + Debug + FromStr,
{
    let data = read_to_string(file_path)?;
    parse_network(&data)
}

pub fn parse_network<Flow>(data: &str) -> Result<ResidualNetwork<Flow>, LoadError>
where
    Flow: NumAssign + Bounded + Neg<Output = Flow> + Ord + Copy + Debug + FromStr,
{
    let mut lines = data.lines().enumerate().map(|(i, line)| (i + 1, line.trim()));

    let num_nodes: usize = match lines.next() {
        Some((line_number, line)) => parse_token(line_number, line, "node count")?,
        None => return Err(LoadError::parse(1, "missing node count")),
    };

    let mut network = ResidualNetwork::new(num_nodes);
    for u in 0..num_nodes {
        let (line_number, line) = lines.next().ok_or_else(|| LoadError::parse(u + 2, format!("missing edge list for node {}", u + 1)))?;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let (count, pairs) = match tokens.split_first() {
            Some((count, pairs)) => (parse_token::<usize>(line_number, count, "edge count")?, pairs),
            None => return Err(LoadError::parse(line_number, "empty edge list")),
        };
        if pairs.len() != 2 * count {
            return Err(LoadError::parse(line_number, format!("expected {} destination/capacity pairs, found {} tokens", count, pairs.len())));
        }

        for pair in pairs.chunks_exact(2) {
            let to: usize = parse_token(line_number, pair[0], "destination")?;
            let upper: Flow = parse_token(line_number, pair[1], "capacity")?;
            if to == 0 {
                return Err(LoadError::parse(line_number, "destinations are numbered from 1"));
            }
            if upper < Flow::zero() {
                return Err(LoadError::parse(line_number, format!("negative capacity {:?}", upper)));
            }
            network.add_edge(u, to - 1, upper)?;
        }
    }

    if let Some((line_number, _)) = lines.find(|(_, line)| !line.is_empty()) {
        return Err(LoadError::parse(line_number, "unexpected line after the last node"));
    }

    Ok(network)
}

fn parse_token<T: FromStr>(line_number: usize, token: &str, what: &str) -> Result<T, LoadError> {
    token.parse().map_err(|_| LoadError::parse(line_number, format!("invalid {} `{}`", what, token)))
}
