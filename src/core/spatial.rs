// Distance-based attenuation for the positional source.
//
// Pure math only. The web frontend feeds host coordinates through
// [`attenuate`] and applies the result to its gain and panner nodes.

use glam::Vec3;

use super::constants::DEFAULT_RADIUS;

/// World-space position as the host sends it (`{x, y, z}`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<Vector3> for Vec3 {
    fn from(v: Vector3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

/// Outcome of one position update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Attenuation {
    /// Listener is outside the radius: silence, leave the panner alone.
    OutOfRange,
    /// Listener is inside the radius: apply `gain` and move the panner.
    InRange { gain: f32 },
}

impl Attenuation {
    #[inline]
    pub fn gain(&self) -> f32 {
        match self {
            Attenuation::OutOfRange => 0.0,
            Attenuation::InRange { gain } => *gain,
        }
    }
}

/// Radius actually used as a divisor. Zero and NaN fall back to the default.
#[inline]
pub fn effective_radius(radius: f32) -> f32 {
    if radius == 0.0 || radius.is_nan() {
        DEFAULT_RADIUS
    } else {
        radius
    }
}

#[inline]
pub fn distance(listener: Vector3, source: Vector3) -> f32 {
    Vec3::from(source).distance(Vec3::from(listener))
}

/// Linear fall-off inside `radius`, scaled by the slider volume (0..=100).
pub fn attenuate(
    listener: Vector3,
    source: Vector3,
    radius: f32,
    volume_percent: f32,
) -> Attenuation {
    let radius = effective_radius(radius);
    let dist = distance(listener, source);
    // A NaN coordinate makes the whole distance NaN; treat it as out of range.
    if dist.is_nan() || dist > radius {
        return Attenuation::OutOfRange;
    }
    let base = (1.0 - dist / radius).max(0.0);
    Attenuation::InRange {
        gain: base * (volume_percent / 100.0),
    }
}

/// What one POS update does to the audio graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PositionPlan {
    /// Graph not built yet or an endpoint missing: touch nothing.
    Skip,
    /// Out of range: zero the gain, leave panner and listener where they are.
    Mute,
    /// Set the gain and move panner and listener to the raw coordinates.
    Place {
        gain: f32,
        listener: Vector3,
        source: Vector3,
    },
}

impl PositionPlan {
    /// Gain to apply, if any.
    pub fn gain(&self) -> Option<f32> {
        match self {
            PositionPlan::Skip => None,
            PositionPlan::Mute => Some(0.0),
            PositionPlan::Place { gain, .. } => Some(*gain),
        }
    }
}

pub fn plan_position(
    graph_ready: bool,
    listener: Option<Vector3>,
    source: Option<Vector3>,
    radius: f32,
    volume_percent: f32,
) -> PositionPlan {
    if !graph_ready {
        return PositionPlan::Skip;
    }
    let (Some(listener), Some(source)) = (listener, source) else {
        return PositionPlan::Skip;
    };
    match attenuate(listener, source, radius, volume_percent) {
        Attenuation::OutOfRange => PositionPlan::Mute,
        Attenuation::InRange { gain } => PositionPlan::Place {
            gain,
            listener,
            source,
        },
    }
}
