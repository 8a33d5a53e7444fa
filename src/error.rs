use thiserror::Error;

/// Failures raised while validating a single advice request.
///
/// Every variant is fatal for the request in progress; nothing is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdvisorError {
    #[error("invalid hand: {0}")]
    InvalidHand(String),
    #[error("trial count must be positive, got {0}")]
    InvalidTrialCount(u32),
    #[error("pot must be positive, got {0}")]
    InvalidPot(f64),
    #[error("unknown card token '{0}'")]
    UnknownCardToken(String),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
