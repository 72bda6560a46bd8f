//! Meme canvas layout: aspect-preserving image fitting, caption placement,
//! and event dispatch for a meme generator.
//!
//! The geometry core is pure and `no_std` compatible; the event layer needs
//! `alloc`. Nothing here touches pixels, audio, or a UI toolkit. The host
//! performs the [`Effect`]s that [`dispatch`] returns.
//!
//! # Modules
//!
//! - [`fit`]: Fit content into a container, preserving aspect ratio
//! - [`style`]: Background, caption font, and caption placement configuration
//! - [`volume`]: Read-aloud volume and icon levels
//! - [`speech`]: Voice labels and utterance composition (`alloc`)
//! - [`app`]: Application state, events, and effects (`alloc`)
//! - [`svg`]: SVG rendering of draw effects (`svg` feature)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

pub mod fit;
pub mod style;
pub mod volume;

#[cfg(feature = "alloc")]
pub mod app;
#[cfg(feature = "alloc")]
pub mod speech;
#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types from fit module
pub use fit::{
    Argument, Axis, FitError, FitResult, Point, Rect, Size, fit_content, fit_inside, fit_size,
};
pub use style::{CaptionStyle, Color, MemeStyle, TextAlign};
pub use volume::{Volume, VolumeLevel};

#[cfg(feature = "alloc")]
pub use app::{AppState, Controls, Effect, Event, LoadedImage, Transition, dispatch};
#[cfg(feature = "alloc")]
pub use speech::{Utterance, Voice, compose_utterance};
