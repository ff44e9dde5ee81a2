// Playback and spatialisation defaults shared by the panel and the audio engine.

// Hearing radius used when the host does not provide one (or sends 0)
pub const DEFAULT_RADIUS: f32 = 30.0;

// Volume in percent used when a PLAY message omits it
pub const DEFAULT_VOLUME_PERCENT: f32 = 60.0;

// Panner node tuning
pub const PANNER_REF_DISTANCE: f64 = 1.0;
pub const PANNER_MAX_DISTANCE: f64 = 200.0;
pub const PANNER_ROLLOFF: f64 = 1.0;
