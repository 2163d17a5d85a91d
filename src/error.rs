use thiserror::Error;
/// Caller contract violations. None of these are recoverable runtime
/// conditions; every operation rejects before mutating any channel.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("channel index {index} out of range (buffer has {count} channels)")]
    ChannelOutOfRange { index: usize, count: usize },
    #[error("channel count mismatch: expected {expected}, got {actual}")]
    ChannelMismatch { expected: usize, actual: usize },
    #[error("timestamp {got} is behind channel {channel}'s last sample at {last}")]
    BackwardsTimestamp { channel: usize, last: f64, got: f64 },
    #[error("feature index {index} out of range (have {count} features)")]
    FeatureOutOfRange { index: usize, count: usize },
}
