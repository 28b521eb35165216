/// Convenience result type used across slidemorph.
pub type SlidemorphResult<T> = Result<T, SlidemorphError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum SlidemorphError {
    /// Raw parameter text that does not parse as a finite number.
    #[error("parse error: {0}")]
    Parse(String),

    /// Slide index outside `[0, len)`.
    #[error("index out of range: {index} (slide count {len})")]
    IndexOutOfRange {
        /// Rejected index.
        index: usize,
        /// Slide count at the time of the call.
        len: usize,
    },

    /// A morph step references a slide without loaded vector geometry.
    #[error("missing content: slide {slide} has no vector geometry")]
    MissingContent {
        /// Index of the slide lacking content.
        slide: usize,
    },

    /// Parameter id that is not part of the registry.
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    /// The slide store holds no slides.
    #[error("slide store is empty")]
    NoSlides,

    /// Content loader failures.
    #[error("load error: {0}")]
    Load(String),

    /// Invalid configuration, options or driver preconditions.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlidemorphError {
    /// Build a [`SlidemorphError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`SlidemorphError::IndexOutOfRange`] value.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Build a [`SlidemorphError::MissingContent`] value.
    pub fn missing_content(slide: usize) -> Self {
        Self::MissingContent { slide }
    }

    /// Build a [`SlidemorphError::UnknownParameter`] value.
    pub fn unknown_parameter(id: impl Into<String>) -> Self {
        Self::UnknownParameter(id.into())
    }

    /// Build a [`SlidemorphError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`SlidemorphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Return `true` for errors the caller is expected to recover from locally.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Parse(_) | Self::IndexOutOfRange { .. } | Self::MissingContent { .. }
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
