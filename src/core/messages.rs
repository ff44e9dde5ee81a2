// Messages the host posts into the panel.
//
// The host sends loosely typed JSON objects with a `type` discriminator.
// Fields that are missing or carry the wrong JSON type are treated as absent
// rather than failing the whole message, so partial updates always apply.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

use super::spatial::Vector3;

#[derive(Debug, Error)]
pub enum MessageError {
    #[error("message payload is not JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("message payload is empty")]
    Empty,
}

/// Every message the host can post, keyed by its `type` field.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HostMessage {
    Open,
    State(StateSync),
    Play(PlayRequest),
    Stop,
    Pos(PositionUpdate),
    HasSpeaker(SpeakerPresence),
    #[serde(other)]
    Unknown,
}

impl HostMessage {
    pub fn from_json(text: &str) -> Result<Self, MessageError> {
        if text.trim().is_empty() {
            return Err(MessageError::Empty);
        }
        Ok(serde_json::from_str(text)?)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            HostMessage::Open => "OPEN",
            HostMessage::State(_) => "STATE",
            HostMessage::Play(_) => "PLAY",
            HostMessage::Stop => "STOP",
            HostMessage::Pos(_) => "POS",
            HostMessage::HasSpeaker(_) => "HAS_SPEAKER",
            HostMessage::Unknown => "UNKNOWN",
        }
    }
}

/// Partial snapshot of the server-side speaker state.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StateSync {
    #[serde(default, deserialize_with = "string_if_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "bool_if_bool")]
    pub looped: Option<bool>,
    #[serde(default, deserialize_with = "number_if_number")]
    pub volume: Option<f64>,
    #[serde(default, deserialize_with = "number_if_number")]
    pub radius: Option<f64>,
    #[serde(default, rename = "hasSpeaker", deserialize_with = "bool_if_bool")]
    pub has_speaker: Option<bool>,
}

/// PLAY parameters. Numbers are coerced the way the host page would:
/// `"50"` is 50, a falsy radius is absent, a null volume is absent.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PlayRequest {
    #[serde(default, deserialize_with = "string_if_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "number_if_truthy")]
    pub radius: Option<f64>,
    #[serde(default, deserialize_with = "truthy")]
    pub looped: bool,
    #[serde(default, deserialize_with = "number_unless_null")]
    pub volume: Option<f64>,
}

/// Endpoints of a POS message. A falsy endpoint is absent; a present one
/// with missing or non-numeric coordinates carries NaN, which mutes.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PositionUpdate {
    #[serde(default, deserialize_with = "vector_if_truthy")]
    pub listener: Option<Vector3>,
    #[serde(default, deserialize_with = "vector_if_truthy")]
    pub source: Option<Vector3>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SpeakerPresence {
    #[serde(default, deserialize_with = "truthy")]
    pub has: bool,
}

fn string_if_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn bool_if_bool<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    Ok(Value::deserialize(d)?.as_bool())
}

fn number_if_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(Value::deserialize(d)?.as_f64())
}

fn number_if_truthy<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let v = Value::deserialize(d)?;
    Ok(is_truthy(&v).then(|| js_number(&v)))
}

fn number_unless_null<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Null => None,
        v => Some(js_number(&v)),
    })
}

fn vector_if_truthy<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vector3>, D::Error> {
    let v = Value::deserialize(d)?;
    if !is_truthy(&v) {
        return Ok(None);
    }
    let coord = |key: &str| v.get(key).map(js_number).unwrap_or(f64::NAN) as f32;
    Ok(Some(Vector3::new(coord("x"), coord("y"), coord("z"))))
}

fn truthy<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(is_truthy(&Value::deserialize(d)?))
}

// Same rules as a JS `!!value`.
fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// Same rules as a JS `Number(value)` for the shapes JSON can carry.
fn js_number(v: &Value) -> f64 {
    match v {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let t = s.trim();
            if t.is_empty() {
                0.0
            } else {
                t.parse().unwrap_or(f64::NAN)
            }
        }
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}
