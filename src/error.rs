//! Error type for card composition.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a card render.
///
/// Only three things can fail at runtime: loading the logo, creating the
/// output file, and encoding the PNG. Font problems are not errors; they
/// degrade to the bitmap face instead. `MissingLayout` indicates a pipeline
/// assembled in the wrong order, which the standard pipeline never produces.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("failed to load logo image at {path}")]
    LogoLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to create output file {path}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode PNG to {path}")]
    PngEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("drawing step '{step}' ran before the step that produces its layout input")]
    MissingLayout { step: &'static str },
}
