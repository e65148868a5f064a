use std::fmt;

/// Convenience result type used across the crate.
pub type GlassResult<T> = Result<T, GlassError>;

/// Error taxonomy for the fallible (non-runtime) surfaces of the engine.
///
/// The effect runtime itself never returns these; see [`Recovery`].
#[derive(thiserror::Error, Debug)]
pub enum GlassError {
    /// Invalid caller-provided data (ids, tokens, sizes).
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown option keys or malformed option values.
    #[error("config error: {0}")]
    Config(String),

    /// Failures while rasterizing or encoding a displacement map.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlassError {
    /// Build a [`GlassError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlassError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`GlassError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GlassError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

/// A failure the engine absorbed instead of surfacing.
///
/// The glass effect is cosmetic: every one of these degrades to "effect not yet
/// visible" and is reported through `tracing` and [`crate::EngineStats`] only.
#[derive(Clone, Debug, PartialEq)]
pub enum Recovery {
    /// A size field was unset after merge and was substituted.
    ConfigurationGap {
        /// Field that was missing (`width` or `height`).
        field: &'static str,
        /// Value used instead.
        substituted: f64,
    },
    /// Filter nodes were not attached when a bind was attempted.
    BindTargetMissing {
        /// Ids of the nodes that were absent.
        missing: Vec<String>,
    },
    /// Non-positive or non-finite geometry was clamped.
    DegenerateGeometry {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
}

impl fmt::Display for Recovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigurationGap { field, substituted } => {
                write!(f, "configuration gap: {field} unset, using {substituted}")
            }
            Self::BindTargetMissing { missing } => {
                write!(f, "bind target missing: {}", missing.join(", "))
            }
            Self::DegenerateGeometry { width, height } => {
                write!(f, "degenerate geometry {width}x{height}, clamped")
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
