pub mod blocking_flow;
pub mod dinic;
pub mod level_graph;
pub mod residual_network;
pub mod trace;
