use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error("{kind} value is neither a scalar nor a container")]
    Unclassifiable { kind: &'static str },
    #[error("nesting exceeds the depth limit of {limit}")]
    DepthLimit { limit: usize },
}
