//! Voice descriptors and read-aloud requests.
//!
//! The host enumerates voices and plays utterances; this module only builds
//! the labels shown to the user and the request handed back to the host.

use alloc::format;
use alloc::string::String;

use crate::volume::Volume;

/// A speech synthesis voice offered by the host.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Voice {
    /// Unique voice name, used to match the user's selection.
    pub name: String,
    /// BCP 47 language tag.
    pub lang: String,
    /// Whether the host marks this as its default voice.
    pub is_default: bool,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
            is_default: false,
        }
    }

    /// Mark as the host's default voice.
    pub fn default_voice(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Text for this voice's entry in a selection list.
    pub fn option_label(&self) -> String {
        if self.is_default {
            format!("{} ({}) -- DEFAULT", self.name, self.lang)
        } else {
            format!("{} ({})", self.name, self.lang)
        }
    }
}

/// A request to speak text aloud.
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// Voice to use; `None` leaves the choice to the host.
    pub voice: Option<Voice>,
    /// Gain in `0.0..=1.0`.
    pub volume: f32,
}

/// Build the utterance for reading both captions aloud.
///
/// The captions are joined with a single space. When several voices share
/// the selected name the last one wins.
pub fn compose_utterance(
    top: &str,
    bottom: &str,
    voices: &[Voice],
    selected: Option<&str>,
    volume: Volume,
) -> Utterance {
    let voice = selected.and_then(|name| voices.iter().rev().find(|v| v.name == name));
    Utterance {
        text: format!("{top} {bottom}"),
        voice: voice.cloned(),
        volume: volume.gain(),
    }
}
