//! Meme rendering configuration: background, caption font, caption placement.
//!
//! # Example
//!
//! ```
//! use memelayout::{CaptionStyle, Color, MemeStyle, Size};
//!
//! let style = MemeStyle::default()
//!     .background(Color::white())
//!     .caption(CaptionStyle::default().font_px(40).stroke(Color::black()));
//!
//! let (top, bottom) = style.caption_anchors(Size::new(400, 400));
//! assert_eq!((top.x, top.y), (200.0, 50.0));
//! assert_eq!((bottom.x, bottom.y), (200.0, 370.0));
//! ```

use core::fmt;

use crate::fit::{Point, Size};

/// sRGB color with alpha (8-bit per channel).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// White, fully opaque.
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Black, fully opaque.
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// CSS representation: `#rrggbb` when opaque, `rgba(...)` otherwise.
    pub fn css(self) -> Css {
        Css(self)
    }
}

/// Display adapter returned by [`Color::css`].
pub struct Css(Color);

impl fmt::Display for Css {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Color { r, g, b, a } = self.0;
        if a == 255 {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "rgba({r}, {g}, {b}, {:.3})", a as f64 / 255.0)
        }
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    /// SVG `text-anchor` value.
    pub fn text_anchor(self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "middle",
            Self::Right => "end",
        }
    }
}

/// How caption text is stroked onto the canvas.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CaptionStyle {
    /// Font size in pixels.
    pub font_px: u32,
    /// CSS font family.
    pub font_family: &'static str,
    /// Outline color.
    pub stroke: Color,
    pub align: TextAlign,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font_px: 50,
            font_family: "arial",
            stroke: Color::white(),
            align: TextAlign::Center,
        }
    }
}

impl CaptionStyle {
    /// Set the font size in pixels.
    pub fn font_px(mut self, px: u32) -> Self {
        self.font_px = px;
        self
    }

    /// Set the font family.
    pub fn font_family(mut self, family: &'static str) -> Self {
        self.font_family = family;
        self
    }

    /// Set the outline color.
    pub fn stroke(mut self, color: Color) -> Self {
        self.stroke = color;
        self
    }

    /// Set the horizontal alignment.
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// CSS font shorthand, e.g. `50px arial`.
    pub fn font(&self) -> Font<'_> {
        Font(self)
    }
}

/// Display adapter returned by [`CaptionStyle::font`].
pub struct Font<'a>(&'a CaptionStyle);

impl fmt::Display for Font<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.0.font_px, self.0.font_family)
    }
}

/// Full meme rendering configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MemeStyle {
    /// Fill behind the image; visible as borders around non-matching shapes.
    pub background: Color,
    pub caption: CaptionStyle,
    /// Baseline of the top caption, from the top edge.
    pub top_baseline: f64,
    /// Baseline of the bottom caption, from the bottom edge.
    pub bottom_inset: f64,
}

impl Default for MemeStyle {
    fn default() -> Self {
        Self {
            background: Color::black(),
            caption: CaptionStyle::default(),
            top_baseline: 50.0,
            bottom_inset: 30.0,
        }
    }
}

impl MemeStyle {
    /// Set the background fill.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the caption style.
    pub fn caption(mut self, caption: CaptionStyle) -> Self {
        self.caption = caption;
        self
    }

    /// Set the top caption baseline.
    pub fn top_baseline(mut self, y: f64) -> Self {
        self.top_baseline = y;
        self
    }

    /// Set the bottom caption distance from the bottom edge.
    pub fn bottom_inset(mut self, inset: f64) -> Self {
        self.bottom_inset = inset;
        self
    }

    /// Anchor points for the top and bottom captions on a canvas.
    ///
    /// Both are horizontally centered; the bottom anchor can sit above the
    /// top one on very short canvases.
    pub fn caption_anchors(&self, canvas: Size) -> (Point, Point) {
        let x = canvas.width as f64 / 2.0;
        let top = Point::new(x, self.top_baseline);
        let bottom = Point::new(x, canvas.height as f64 - self.bottom_inset);
        (top, bottom)
    }
}
