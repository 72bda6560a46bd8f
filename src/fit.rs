//! Aspect-preserving fit of content into a fixed-size container.
//!
//! Computes the rendered size and top-left offset of an image drawn onto a
//! canvas. Pure geometry with no pixel operations or allocations; `no_std`
//! compatible.
//!
//! # Example
//!
//! ```
//! use memelayout::fit_content;
//!
//! // 2:1 image on a 400×300 canvas: width constrains, letterboxed vertically.
//! let fit = fit_content(400.0, 300.0, 800.0, 400.0).unwrap();
//! assert_eq!((fit.width, fit.height), (400.0, 200.0));
//! assert_eq!((fit.start_x, fit.start_y), (0.0, 50.0));
//! ```

use core::fmt;

use num_traits::Float;

/// Relative slack allowed when checking containment.
const EDGE_TOLERANCE: f64 = 1e-9;

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A point in canvas coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which container edge pair the fitted content touches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Content spans the full container width; centered vertically.
    Width,
    /// Content spans the full container height; centered horizontally.
    Height,
}

/// Placement of fitted content within a container.
///
/// `width / height` equals the content aspect ratio. The rectangle
/// `[start_x, start_x + width] × [start_y, start_y + height]` is where the
/// content should be drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FitResult {
    /// Rendered content width.
    pub width: f64,
    /// Rendered content height.
    pub height: f64,
    /// Left edge of the rendered content.
    pub start_x: f64,
    /// Top edge of the rendered content.
    pub start_y: f64,
}

impl FitResult {
    /// Aspect ratio of the rendered content.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Right edge of the rendered content.
    pub fn end_x(&self) -> f64 {
        self.start_x + self.width
    }

    /// Bottom edge of the rendered content.
    pub fn end_y(&self) -> f64 {
        self.start_y + self.height
    }

    /// The axis along which the content touches the container edges.
    ///
    /// Content with `start_x == 0` was fit to the width (this includes the
    /// case where both offsets are zero).
    pub fn constraining_axis(&self) -> Axis {
        if self.start_x == 0.0 {
            Axis::Width
        } else {
            Axis::Height
        }
    }

    /// Whether the rendered content lies entirely inside the container.
    ///
    /// Edges may overshoot by a relative `1e-9` to absorb rounding in the
    /// centering arithmetic.
    pub fn is_within(&self, container_w: f64, container_h: f64) -> bool {
        let slack_x = container_w * EDGE_TOLERANCE;
        let slack_y = container_h * EDGE_TOLERANCE;
        self.start_x >= -slack_x
            && self.start_y >= -slack_y
            && self.end_x() <= container_w + slack_x
            && self.end_y() <= container_h + slack_y
    }

    /// Snap each edge to the nearest whole pixel and clip to the container.
    ///
    /// The result is the visible part of the content. Content overflowing
    /// the container loses the overflow on every side.
    pub fn to_pixel_rect(&self, container: Size) -> Rect {
        let max_x = container.width as f64;
        let max_y = container.height as f64;
        let x0 = Float::round(self.start_x).clamp(0.0, max_x);
        let y0 = Float::round(self.start_y).clamp(0.0, max_y);
        let x1 = Float::round(self.end_x()).clamp(x0, max_x);
        let y1 = Float::round(self.end_y()).clamp(y0, max_y);
        Rect {
            x: x0 as u32,
            y: y0 as u32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        }
    }
}

/// Names one input of a fit computation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Argument {
    ContainerWidth,
    ContainerHeight,
    ContentWidth,
    ContentHeight,
}

impl Argument {
    fn name(self) -> &'static str {
        match self {
            Self::ContainerWidth => "container width",
            Self::ContainerHeight => "container height",
            Self::ContentWidth => "content width",
            Self::ContentHeight => "content height",
        }
    }
}

/// Fit computation error.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FitError {
    /// An input dimension is zero, negative, NaN, or infinite.
    InvalidArgument {
        /// The first offending input.
        argument: Argument,
        /// The value that was supplied.
        value: f64,
    },
    /// Inputs are valid but so extreme that the rendered size is not a
    /// positive finite number.
    Degenerate,
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { argument, value } => write!(
                f,
                "invalid {}: {value} (must be positive and finite)",
                argument.name()
            ),
            Self::Degenerate => f.write_str("fitted size is not representable"),
        }
    }
}

impl core::error::Error for FitError {}

fn check(argument: Argument, value: f64) -> Result<(), FitError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FitError::InvalidArgument { argument, value })
    }
}

fn validate(
    container_w: f64,
    container_h: f64,
    content_w: f64,
    content_h: f64,
) -> Result<(), FitError> {
    check(Argument::ContainerWidth, container_w)?;
    check(Argument::ContainerHeight, container_h)?;
    check(Argument::ContentWidth, content_w)?;
    check(Argument::ContentHeight, content_h)?;
    Ok(())
}

fn finish(fit: FitResult) -> Result<FitResult, FitError> {
    let sized = fit.width.is_finite() && fit.height.is_finite();
    if !sized || fit.width <= 0.0 || fit.height <= 0.0 {
        return Err(FitError::Degenerate);
    }
    Ok(fit)
}

/// Fit content into a container, preserving aspect ratio.
///
/// Portrait content (aspect ratio below 1) takes the full container height
/// and is centered horizontally. Everything else, square content included,
/// takes the full container width and is centered vertically.
///
/// The branch is chosen from the content shape alone, so content can
/// overflow a container whose own shape disagrees with it (for example
/// nearly square content on a wide canvas still spans the full width). Use
/// [`fit_inside`] when containment must hold for every container shape.
///
/// # Errors
///
/// [`FitError::InvalidArgument`] naming the first input that is not a
/// positive finite number, checked in parameter order.
pub fn fit_content(
    container_w: f64,
    container_h: f64,
    content_w: f64,
    content_h: f64,
) -> Result<FitResult, FitError> {
    validate(container_w, container_h, content_w, content_h)?;

    let aspect_ratio = content_w / content_h;
    let fit = if aspect_ratio < 1.0 {
        let width = container_h * aspect_ratio;
        FitResult {
            width,
            height: container_h,
            start_x: (container_w - width) / 2.0,
            start_y: 0.0,
        }
    } else {
        let height = container_w / aspect_ratio;
        FitResult {
            width: container_w,
            height,
            start_x: 0.0,
            start_y: (container_h - height) / 2.0,
        }
    };
    tracing::trace!(
        container_w,
        container_h,
        content_w,
        content_h,
        width = fit.width,
        height = fit.height,
        "fit content"
    );
    finish(fit)
}

/// Fit content into a container so that it is always fully contained.
///
/// Unlike [`fit_content`], the constraining axis comes from comparing the
/// container and content aspect ratios: width constrains when the content is
/// at least as wide, relative to its height, as the container. On a square
/// container the result is identical to [`fit_content`].
///
/// # Errors
///
/// [`FitError::InvalidArgument`] as for [`fit_content`];
/// [`FitError::Degenerate`] when the magnitudes are so far apart that the
/// fitted size over- or underflows.
pub fn fit_inside(
    container_w: f64,
    container_h: f64,
    content_w: f64,
    content_h: f64,
) -> Result<FitResult, FitError> {
    validate(container_w, container_h, content_w, content_h)?;

    let aspect_ratio = content_w / content_h;
    let container_ratio = container_w / container_h;
    let fit = if container_ratio <= aspect_ratio {
        let height = container_w / aspect_ratio;
        FitResult {
            width: container_w,
            height,
            start_x: 0.0,
            start_y: (container_h - height) / 2.0,
        }
    } else {
        let width = container_h * aspect_ratio;
        FitResult {
            width,
            height: container_h,
            start_x: (container_w - width) / 2.0,
            start_y: 0.0,
        }
    };
    finish(fit)
}

/// [`fit_content`] for integer pixel sizes, as reported by image decoders
/// and canvas elements.
pub fn fit_size(container: Size, content: Size) -> Result<FitResult, FitError> {
    fit_content(
        container.width as f64,
        container.height as f64,
        content.width as f64,
        content.height as f64,
    )
}
