//! Meme generator state and event dispatch.
//!
//! Every user interaction is an [`Event`]. [`dispatch`] maps the current
//! [`AppState`] and one event to the next state plus a list of [`Effect`]s.
//! The host performs the effects (drawing, enabling buttons, speaking) and
//! keeps the returned state for the next event.
//!
//! # Example
//!
//! ```
//! use memelayout::{AppState, Effect, Event, Size, dispatch};
//!
//! let state = AppState::new(Size::new(400, 400));
//! let step = dispatch(&state, Event::ImageSelected {
//!     file_name: "cat.png".into(),
//!     width: 800,
//!     height: 400,
//! })
//! .unwrap();
//!
//! let placed = step.effects.iter().find_map(|e| match e {
//!     Effect::DrawImage { placement, .. } => Some(*placement),
//!     _ => None,
//! });
//! assert_eq!(placed.map(|p| (p.start_y, p.height)), Some((100.0, 200.0)));
//! ```

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::fit::{FitError, FitResult, Point, Size, fit_size};
use crate::speech::{Utterance, Voice, compose_utterance};
use crate::style::{CaptionStyle, Color, MemeStyle};
use crate::volume::{Volume, VolumeLevel};

/// A user or host notification.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// An image file finished loading.
    ImageSelected {
        file_name: String,
        /// Decoded width in pixels.
        width: u32,
        /// Decoded height in pixels.
        height: u32,
    },
    /// The caption form was submitted.
    FormSubmitted { top: String, bottom: String },
    /// The clear button was pressed.
    ResetClicked,
    /// The read-aloud button was pressed.
    ReadAloudClicked {
        top: String,
        bottom: String,
        /// Name of the voice currently selected, if any.
        voice: Option<String>,
    },
    /// The volume slider moved.
    VolumeChanged(u8),
    /// The host's voice list became available or changed.
    VoicesChanged(Vec<Voice>),
}

impl Event {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ImageSelected { .. } => "image_selected",
            Self::FormSubmitted { .. } => "form_submitted",
            Self::ResetClicked => "reset_clicked",
            Self::ReadAloudClicked { .. } => "read_aloud_clicked",
            Self::VolumeChanged(_) => "volume_changed",
            Self::VoicesChanged(_) => "voices_changed",
        }
    }
}

/// Which controls are enabled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Controls {
    pub submit: bool,
    pub reset: bool,
    pub read_aloud: bool,
    pub voice_select: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            submit: true,
            reset: false,
            read_aloud: false,
            voice_select: false,
        }
    }
}

impl Controls {
    /// Ready for captions: submit enabled, reset and read-aloud disabled.
    fn editing(self) -> Self {
        Self {
            submit: true,
            reset: false,
            read_aloud: false,
            ..self
        }
    }

    /// Captions drawn: submit disabled, reset and read-aloud enabled.
    fn generated(self) -> Self {
        Self {
            submit: false,
            reset: true,
            read_aloud: true,
            ..self
        }
    }
}

/// An image currently drawn on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedImage {
    pub file_name: String,
    pub size: Size,
    pub placement: FitResult,
}

/// Everything the generator remembers between events.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    /// Fixed canvas size.
    pub canvas: Size,
    pub style: MemeStyle,
    pub image: Option<LoadedImage>,
    pub voices: Vec<Voice>,
    pub volume: Volume,
    pub controls: Controls,
}

impl AppState {
    /// Initial state for a canvas of the given size.
    pub fn new(canvas: Size) -> Self {
        Self {
            canvas,
            style: MemeStyle::default(),
            image: None,
            voices: Vec::new(),
            volume: Volume::default(),
            controls: Controls::default(),
        }
    }

    /// Replace the rendering style.
    pub fn with_style(mut self, style: MemeStyle) -> Self {
        self.style = style;
        self
    }
}

/// A side effect for the host to perform, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Erase the whole canvas.
    ClearCanvas,
    /// Fill the whole canvas.
    FillCanvas(Color),
    /// Draw the loaded image at the given placement.
    DrawImage {
        file_name: String,
        placement: FitResult,
    },
    /// Stroke caption text centered on an anchor.
    StrokeText {
        text: String,
        at: Point,
        style: CaptionStyle,
    },
    /// Update which controls are enabled.
    SetControls(Controls),
    /// Set the image's accessible description.
    SetImageAlt(String),
    /// Replace the voice selection list.
    ShowVoiceOptions(Vec<String>),
    /// Swap the volume icon.
    SetVolumeIcon(VolumeLevel),
    /// Speak text aloud.
    Speak(Utterance),
}

/// Result of dispatching one event.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: AppState,
    pub effects: Vec<Effect>,
}

/// Apply one event to the current state.
///
/// # Errors
///
/// An [`Event::ImageSelected`] whose dimensions cannot be fitted into the
/// canvas returns the [`FitError`]. The caller's state is left untouched.
pub fn dispatch(state: &AppState, event: Event) -> Result<Transition, FitError> {
    tracing::debug!(event = event.kind(), "dispatch");
    let mut next = state.clone();
    let effects = match event {
        Event::ImageSelected {
            file_name,
            width,
            height,
        } => {
            let size = Size::new(width, height);
            let placement = fit_size(state.canvas, size).inspect_err(|err| {
                tracing::warn!(%err, file = %file_name, width, height, "cannot place image");
            })?;
            next.image = Some(LoadedImage {
                file_name: file_name.clone(),
                size,
                placement,
            });
            next.controls = state.controls.editing();
            vec![
                Effect::SetImageAlt(file_name.clone()),
                Effect::ClearCanvas,
                Effect::FillCanvas(state.style.background),
                Effect::DrawImage {
                    file_name,
                    placement,
                },
                Effect::SetControls(next.controls),
            ]
        }

        Event::FormSubmitted { top, bottom } => {
            let (top_at, bottom_at) = state.style.caption_anchors(state.canvas);
            next.controls = state.controls.generated();
            vec![
                Effect::StrokeText {
                    text: top,
                    at: top_at,
                    style: state.style.caption,
                },
                Effect::StrokeText {
                    text: bottom,
                    at: bottom_at,
                    style: state.style.caption,
                },
                Effect::SetControls(next.controls),
            ]
        }

        Event::ResetClicked => {
            next.image = None;
            next.controls = state.controls.editing();
            vec![Effect::ClearCanvas, Effect::SetControls(next.controls)]
        }

        Event::ReadAloudClicked { top, bottom, voice } => {
            let utterance =
                compose_utterance(&top, &bottom, &state.voices, voice.as_deref(), state.volume);
            vec![Effect::Speak(utterance)]
        }

        Event::VolumeChanged(value) => {
            next.volume = Volume::new(value);
            vec![Effect::SetVolumeIcon(next.volume.level())]
        }

        Event::VoicesChanged(voices) => {
            let labels = voices.iter().map(Voice::option_label).collect();
            next.voices = voices;
            next.controls.voice_select = true;
            vec![
                Effect::ShowVoiceOptions(labels),
                Effect::SetControls(next.controls),
            ]
        }
    };
    Ok(Transition {
        state: next,
        effects,
    })
}
