use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("node {node} is out of range for a network with {num_nodes} nodes")]
    NodeOutOfRange { node: usize, num_nodes: usize },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read graph file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Flow(#[from] FlowError),
}

impl LoadError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        LoadError::Parse { line, message: message.into() }
    }
}
