//! The ordered pipeline of named drawing steps.
//!
//! Each step implements [`DrawStep`] and mutates the shared canvas inside a
//! [`ComposeContext`]. Steps communicate layout values through a typed
//! property bag on the context: a step that positions itself relative to an
//! earlier element consumes the property that element's step emitted, so the
//! ordering dependencies are visible in the step signatures instead of being
//! implicit in a call sequence.
//!
//! # Dependency Graph
//!
//! ```text
//! Gradient ── no inputs
//!     │
//! Card ────── no inputs, emits CardBox
//!     │
//! Logo ────── consumes CardBox, emits TextColumn
//!     │
//! Heading ─── consumes CardBox + TextColumn, emits DividerLine
//!     │
//! TagRow ──── consumes TextColumn + DividerLine, emits TagRow
//!     │
//! Caption ─── consumes TextColumn + TagRow
//! ```

pub mod caption;
pub mod card;
pub mod gradient;
pub mod heading;
pub mod logo;
pub mod tags;

pub use caption::CaptionStep;
pub use card::CardStep;
pub use gradient::GradientStep;
pub use heading::HeadingStep;
pub use logo::LogoStep;
pub use tags::TagRowStep;

use std::any::{Any, TypeId};
use std::collections::HashMap;

use image::RgbImage;

use crate::config::CardConfig;
use crate::error::ComposeError;
use crate::geometry::RectPx;
use crate::text::TextRenderer;

// ============================================================================
// Compose Context
// ============================================================================

/// Context that flows through the drawing pipeline.
///
/// Holds the canvas being drawn into, plus the typed layout properties
/// earlier steps have emitted for later steps to consume.
pub struct ComposeContext<'a> {
    /// The canvas every step draws into.
    pub canvas: RgbImage,

    /// The card configuration; read-only for every step.
    pub config: &'a CardConfig,

    /// Shared text renderer (fonts are loaded once per composer).
    pub text: &'a TextRenderer,

    /// Typed property bag for inter-step layout flow.
    properties: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl<'a> ComposeContext<'a> {
    /// Creates a context with a fresh canvas sized from the config.
    pub fn new(config: &'a CardConfig, text: &'a TextRenderer) -> Self {
        Self {
            canvas: RgbImage::new(config.canvas.width, config.canvas.height),
            config,
            text,
            properties: HashMap::new(),
        }
    }

    /// Emits a typed layout property for downstream steps.
    pub fn set<T: Any + Send + Sync>(&mut self, value: T) {
        self.properties.insert(TypeId::of::<T>(), Box::new(value));
    }

    /// Reads a layout property emitted by an upstream step.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.properties
            .get(&TypeId::of::<T>())
            .and_then(|b| b.downcast_ref())
    }

    /// Reads a layout property, failing if the producing step has not run.
    pub fn require<T: Any + Send + Sync>(
        &self,
        step: &'static str,
    ) -> Result<&T, ComposeError> {
        self.get::<T>().ok_or(ComposeError::MissingLayout { step })
    }

    /// Consumes the context, returning the finished canvas.
    pub fn into_canvas(self) -> RgbImage {
        self.canvas
    }
}

// ============================================================================
// Layout Properties
// ============================================================================

/// The card's bounding box. Emitted by [`CardStep`].
#[derive(Debug, Clone, Copy)]
pub struct CardBox(pub RectPx);

/// Horizontal center of the text column to the right of the logo.
/// Emitted by [`LogoStep`].
#[derive(Debug, Clone, Copy)]
pub struct TextColumn {
    pub center_x: i64,
}

/// Vertical position of the divider bar. Emitted by [`HeadingStep`].
#[derive(Debug, Clone, Copy)]
pub struct DividerLine {
    pub y: i64,
}

/// Extent of the tag row. Emitted by [`TagRowStep`].
#[derive(Debug, Clone, Copy)]
pub struct TagRow {
    /// Bottom edge of the pills; the caption hangs below this.
    pub bottom: i64,
}

// ============================================================================
// DrawStep and DrawPipeline
// ============================================================================

/// A named drawing step in the card pipeline.
pub trait DrawStep {
    /// The step's name, used in error reporting.
    fn name(&self) -> &'static str;

    /// Draws this step's element onto the context canvas.
    ///
    /// Implementations read their layout inputs with
    /// [`ComposeContext::require`] and emit outputs with
    /// [`ComposeContext::set`].
    fn draw(&self, ctx: &mut ComposeContext<'_>) -> Result<(), ComposeError>;
}

/// An ordered sequence of drawing steps.
pub struct DrawPipeline {
    steps: Vec<Box<dyn DrawStep>>,
}

impl DrawPipeline {
    /// The standard card pipeline, in dependency order.
    pub fn standard() -> Self {
        Self {
            steps: vec![
                Box::new(GradientStep),
                Box::new(CardStep),
                Box::new(LogoStep),
                Box::new(HeadingStep),
                Box::new(TagRowStep),
                Box::new(CaptionStep),
            ],
        }
    }

    /// Builds a pipeline from an explicit step sequence.
    pub fn from_steps(steps: Vec<Box<dyn DrawStep>>) -> Self {
        Self { steps }
    }

    /// Runs every step in order, stopping at the first failure.
    pub fn run(&self, ctx: &mut ComposeContext<'_>) -> Result<(), ComposeError> {
        for step in &self.steps {
            step.draw(ctx)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
