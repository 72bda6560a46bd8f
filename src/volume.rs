//! Read-aloud volume and its icon level.

/// Slider value in `0..=100`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Volume(u8);

impl Default for Volume {
    /// Level before the slider is first moved.
    fn default() -> Self {
        Self(1)
    }
}

impl Volume {
    pub const MAX: Self = Self(100);

    /// Create from a slider value, clamped to 100.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Raw slider value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Playback gain in `0.0..=1.0`.
    pub fn gain(self) -> f32 {
        self.0 as f32 / 100.0
    }

    /// Icon level shown next to the slider.
    pub fn level(self) -> VolumeLevel {
        match self.0 {
            67..=100 => VolumeLevel::Level3,
            34..=66 => VolumeLevel::Level2,
            1..=33 => VolumeLevel::Level1,
            _ => VolumeLevel::Muted,
        }
    }
}

/// One of the four volume icons.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VolumeLevel {
    Muted,
    Level1,
    Level2,
    Level3,
}

impl VolumeLevel {
    /// Icon index, 0 for muted.
    pub fn index(self) -> u8 {
        match self {
            Self::Muted => 0,
            Self::Level1 => 1,
            Self::Level2 => 2,
            Self::Level3 => 3,
        }
    }

    /// Relative path of the icon image.
    pub fn icon_path(self) -> &'static str {
        match self {
            Self::Muted => "icons/volume-level-0.svg",
            Self::Level1 => "icons/volume-level-1.svg",
            Self::Level2 => "icons/volume-level-2.svg",
            Self::Level3 => "icons/volume-level-3.svg",
        }
    }

    /// Alt text of the icon image.
    pub fn alt_text(self) -> &'static str {
        match self {
            Self::Muted => "Volume Level 0",
            Self::Level1 => "Volume Level 1",
            Self::Level2 => "Volume Level 2",
            Self::Level3 => "Volume Level 3",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn level_boundaries() {
        let cases = [
            (0, VolumeLevel::Muted),
            (1, VolumeLevel::Level1),
            (33, VolumeLevel::Level1),
            (34, VolumeLevel::Level2),
            (66, VolumeLevel::Level2),
            (67, VolumeLevel::Level3),
            (100, VolumeLevel::Level3),
        ];
        for (value, expected) in cases {
            assert_eq!(Volume::new(value).level(), expected, "value {value}");
        }
    }

    #[test]
    fn clamps_above_max() {
        assert_eq!(Volume::new(250), Volume::MAX);
        assert_eq!(Volume::new(250).level(), VolumeLevel::Level3);
    }

    #[test]
    fn gain_scales_to_unit() {
        assert_eq!(Volume::default().gain(), 0.01);
        assert_eq!(Volume::MAX.gain(), 1.0);
        assert_eq!(Volume::new(0).gain(), 0.0);
    }

    #[test]
    fn icon_paths_match_index() {
        for level in [
            VolumeLevel::Muted,
            VolumeLevel::Level1,
            VolumeLevel::Level2,
            VolumeLevel::Level3,
        ] {
            let n = level.index();
            assert_eq!(level.icon_path(), format!("icons/volume-level-{n}.svg"));
            assert_eq!(level.alt_text(), format!("Volume Level {n}"));
        }
    }
}
