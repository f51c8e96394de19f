use thiserror::Error;

/// Errors that can occur when configuring or attaching a jog widget.
///
/// Rendering and click handling never fail; only the edges where the host
/// hands us untyped input do.
#[derive(Debug, Error)]
pub enum JogError {
    /// A numeric step value outside the fixed step set.
    #[error("{0} is not a selectable step size (expected one of 100, 50, 10, 1, 0.5, 0.05)")]
    UnknownStep(f64),

    /// The JSON configuration could not be parsed.
    #[error("invalid jog configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// No element matched the selector given as mount point.
    #[error("no mount element matches selector '{0}'")]
    MountNotFound(String),
}
