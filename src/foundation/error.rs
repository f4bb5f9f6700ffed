use crate::carousel::slide::SlideId;

/// Convenience result type used across Glissade.
pub type GlissadeResult<T> = Result<T, GlissadeError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum GlissadeError {
    /// A slide with this identity is already owned by the registry.
    #[error("slide {0:?} is already registered")]
    DuplicateSlide(SlideId),

    /// A navigation or insertion target outside the registry bounds.
    #[error("position {index} is out of range for {len} slide(s)")]
    IndexOutOfRange {
        /// Requested position.
        index: i32,
        /// Registry size at the time of the request.
        len: usize,
    },

    /// The operation requires at least one slide.
    #[error("carousel has no slides")]
    NoSlides,

    /// Invalid user-provided data or a broken caller contract.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlissadeError {
    /// Build a [`GlissadeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlissadeError::IndexOutOfRange`] value.
    pub fn out_of_range(index: i32, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}
