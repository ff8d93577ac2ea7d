//! Error types for anchortip.

use anchortip_core::HostError;
use thiserror::Error;

/// Errors raised while building or showing a tooltip.
///
/// The gate never surfaces these to its callers; they are traced and
/// dropped at the gate boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TooltipError {
    /// The target view is not attached to a window.
    #[error("target view is not attached")]
    TargetDetached,

    /// The target view has no visible area.
    #[error("target view has an empty rectangle ({width}x{height})")]
    EmptyTarget {
        /// Measured width
        width: i32,
        /// Measured height
        height: i32,
    },

    /// The requested content width is not positive.
    #[error("invalid content width: {0}px")]
    InvalidContentWidth(i32),

    /// The target or the popup does not fit in `i32` screen coordinates.
    #[error("tooltip geometry out of range")]
    OutOfRange,

    /// The tooltip window was already shown once.
    #[error("tooltip window already shown")]
    AlreadyShown,

    /// A host collaborator failed.
    #[error("host error: {0}")]
    Host(#[from] HostError),
}

/// Errors raised while loading tooltip configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Failed to parse TOML
    #[error("parse error: {0}")]
    Parse(String),

    /// Failed to read file
    #[error("IO error: {0}")]
    Io(String),

    /// Invalid configuration value
    #[error("invalid value: {0}")]
    InvalidValue(String),
}
