//! Sound cues
//!
//! The game only ever asks for a named cue. Whether anything is audible is
//! decided once at startup: if the backend isn't available, the manager
//! drops it and every later call is a no-op.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Item placed in the right bin
    Correct,
    /// Wrong bin or missed item
    Wrong,
    /// Level advanced
    LevelUp,
}

/// A short beep handed to the backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq_hz: f32,
    pub duration_ms: u32,
}

impl Cue {
    pub fn tone(&self) -> Tone {
        let freq_hz = match self {
            Cue::Correct => 800.0,
            Cue::Wrong => 200.0,
            Cue::LevelUp => 1100.0,
        };
        Tone {
            freq_hz,
            duration_ms: 120,
        }
    }
}

/// Something that can make a noise. Playback is fire-and-forget.
pub trait AudioBackend {
    /// Whether the device is usable. Checked once, when the manager is built.
    fn available(&self) -> bool;

    fn play(&mut self, cue: Cue, tone: Tone);
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn AudioBackend>>,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::disabled()
    }
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        let backend = if backend.available() {
            Some(backend)
        } else {
            log::warn!("Audio device unavailable - audio disabled");
            None
        };
        Self {
            backend,
            muted: false,
        }
    }

    /// Silent manager with no backend
    pub fn disabled() -> Self {
        Self {
            backend: None,
            muted: false,
        }
    }

    pub fn enabled(&self) -> bool {
        self.backend.is_some()
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Play a sound effect
    pub fn play(&mut self, cue: Cue) {
        if self.muted {
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        backend.play(cue, cue.tone());
    }
}
