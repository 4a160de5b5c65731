//! Data passed from the extractor to the generator.
//!
//! Sizes are validated on construction, so an [`ExtractedGraphic`] that
//! exists always carries finite numbers and the generator never has to
//! check them again.

use std::fmt;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
        }
    }
}

impl std::error::Error for NumericError {}

#[inline]
fn finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// The user-space rectangle of an SVG image.
///
/// `width` and `height` are always present. The offsets are optional: a box
/// built from a size alone has no origin and renders as `0 0 w h`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    x: Option<f64>,
    y: Option<f64>,
    width: f64,
    height: f64,
}

impl ViewBox {
    /// Create a box from all four components (rejects NaN/infinite).
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<ViewBox, NumericError> {
        Ok(ViewBox {
            x: Some(finite(x)?),
            y: Some(finite(y)?),
            width: finite(width)?,
            height: finite(height)?,
        })
    }

    /// Create a box anchored at `0 0`.
    pub fn try_at_origin(width: f64, height: f64) -> Result<ViewBox, NumericError> {
        ViewBox::try_new(0.0, 0.0, width, height)
    }

    /// Create a box with no offsets at all.
    pub fn try_sized(width: f64, height: f64) -> Result<ViewBox, NumericError> {
        Ok(ViewBox {
            x: None,
            y: None,
            width: finite(width)?,
            height: finite(height)?,
        })
    }

    #[inline]
    pub fn x(&self) -> Option<f64> {
        self.x
    }

    #[inline]
    pub fn y(&self) -> Option<f64> {
        self.y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Both offsets, if both are defined.
    pub fn origin(&self) -> Option<(f64, f64)> {
        self.x.zip(self.y)
    }
}

/// Geometry plus renderable markup recovered from one SVG document.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractedGraphic {
    view_box: ViewBox,
    inner_content: String,
}

impl ExtractedGraphic {
    pub fn new(view_box: ViewBox, inner_content: impl Into<String>) -> Self {
        Self {
            view_box,
            inner_content: inner_content.into(),
        }
    }

    pub fn view_box(&self) -> &ViewBox {
        &self.view_box
    }

    /// Markup between the root element's tags, trimmed, otherwise untouched.
    pub fn inner_content(&self) -> &str {
        &self.inner_content
    }
}

/// A finished conversion: what the host writes, and where.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversion {
    /// Output file name, e.g. `HomeFilledIcon.tsx`
    pub file_name: String,
    /// Generated component source
    pub source: String,
}

impl Conversion {
    /// Confirmation shown once the host has written the file.
    pub fn success_message(&self) -> String {
        format!("Successfully created React component: {}", self.file_name)
    }
}
