// Panel-side state that does not touch the browser.
//
// The web frontend owns the DOM controls and implements [`ControlSurface`]
// over them; everything here only decides *what* to write or send.

use thiserror::Error;

use super::constants::{DEFAULT_RADIUS, DEFAULT_VOLUME_PERCENT};
use super::messages::{PlayRequest, StateSync};
use super::notify::Notification;
use super::spatial::effective_radius;

/// What the audio engine is currently doing.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    pub url: String,
    pub playing: bool,
    pub radius: f32,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            url: String::new(),
            playing: false,
            radius: DEFAULT_RADIUS,
        }
    }
}

/// Resolved PLAY parameters, defaults applied.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayCommand {
    pub url: String,
    pub looped: bool,
    pub radius: f32,
    pub gain: f32,
}

impl PlayCommand {
    pub fn from_request(req: &PlayRequest) -> Self {
        let radius = req.radius.map(|r| r as f32).unwrap_or(DEFAULT_RADIUS);
        let volume = req.volume.map(|v| v as f32).unwrap_or(DEFAULT_VOLUME_PERCENT);
        Self {
            url: req.url.clone().unwrap_or_default(),
            looped: req.looped,
            radius: effective_radius(radius),
            gain: volume / 100.0,
        }
    }
}

impl PlaybackState {
    pub fn begin(&mut self, cmd: &PlayCommand) {
        self.url = cmd.url.clone();
        self.radius = cmd.radius;
        self.playing = true;
    }

    pub fn end(&mut self) {
        self.playing = false;
    }
}

/// Write access to the panel's form controls.
pub trait ControlSurface {
    fn set_url(&mut self, url: &str);
    fn set_looped(&mut self, looped: bool);
    /// Moves the volume slider and its readout together.
    fn set_volume_text(&mut self, text: &str);
    /// Moves the radius slider and its readout together.
    fn set_radius_text(&mut self, text: &str);
}

/// Refusal shown to the user when no speaker has been placed yet.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("Bitte zuerst /djplace ausführen.")]
pub struct PlayRefused;

#[derive(Clone, Debug, Default)]
pub struct PanelModel {
    pub has_speaker: bool,
}

impl PanelModel {
    /// Push the present fields of a STATE message into the controls.
    pub fn apply_state(&mut self, sync: &StateSync, controls: &mut impl ControlSurface) {
        if let Some(url) = &sync.url {
            controls.set_url(url);
        }
        if let Some(looped) = sync.looped {
            controls.set_looped(looped);
        }
        if let Some(volume) = sync.volume {
            controls.set_volume_text(&format_number(volume));
        }
        if let Some(radius) = sync.radius {
            controls.set_radius_text(&format_number(radius));
        }
        if let Some(has) = sync.has_speaker {
            self.has_speaker = has;
        }
    }

    /// Play button: only allowed once a speaker is placed.
    pub fn request_play(&self, url: &str, looped: bool) -> Result<Notification, PlayRefused> {
        if !self.has_speaker {
            return Err(PlayRefused);
        }
        Ok(Notification::Play {
            url: url.trim().to_string(),
            looped,
        })
    }
}

/// Formats a number the way the browser prints it into a text node.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
