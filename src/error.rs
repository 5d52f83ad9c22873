//! Setup-time errors
//!
//! The per-frame update never fails. Everything that can go wrong is caught
//! when settings are loaded or a world is set up.

/// Errors produced while loading settings or setting up a world.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// The play field has a zero (or negative / non-finite) dimension.
    #[error("play field must have positive finite size, got {width}x{height}")]
    EmptyField { width: f32, height: f32 },

    /// The brick grid has no cells.
    #[error("brick board must have at least one cell, got {columns}x{rows}")]
    EmptyBoard { columns: usize, rows: usize },

    /// An object pool was configured with no slots.
    #[error("pool '{pool}' must have a non-zero capacity")]
    ZeroPoolCapacity { pool: &'static str },

    /// An entity was configured with a zero or negative size.
    #[error("{what} must have positive size, got {width}x{height}")]
    DegenerateEntity {
        what: &'static str,
        width: f32,
        height: f32,
    },

    /// A paddle cannot fit inside the field on its constrained axis.
    #[error("{what} of extent {extent} does not fit a field of {field}")]
    PaddleWiderThanField {
        what: &'static str,
        extent: f32,
        field: f32,
    },

    /// A count that ends the game (lives, kill target) was set to zero.
    #[error("{what} must be at least 1")]
    ZeroCount { what: &'static str },

    /// A timer interval or speed is negative or not finite.
    #[error("{what} must be a finite non-negative number, got {value}")]
    InvalidValue { what: &'static str, value: f32 },

    /// Settings JSON could not be parsed.
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SetupError>;
