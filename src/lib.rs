pub mod error;
pub mod loader;
pub mod maximum_flow;

pub use error::{FlowError, LoadError};
pub use maximum_flow::dinic::Dinic;
pub use maximum_flow::residual_network::{Edge, ResidualNetwork};
