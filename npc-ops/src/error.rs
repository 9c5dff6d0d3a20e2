use thiserror::Error;

/// Authoring-time configuration failures.
///
/// Rejected when a precondition/operator is constructed, before any tick
/// runs; a bad parameter is never discovered mid-simulation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tag filter requires at least one tag")]
    EmptyTags,

    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    #[error("parameter `{0}` must be positive")]
    NonPositiveParameter(&'static str),
}
