// One-way notifications the panel sends back to the host.

use serde::Serialize;

/// Each variant maps to one host callback (`https://<resource>/<action>`).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Notification {
    SetVolume { volume: f64 },
    SetRadius { radius: f64 },
    Play { url: String, looped: bool },
    Stop {},
    Close {},
}

impl Notification {
    pub fn action(&self) -> &'static str {
        match self {
            Notification::SetVolume { .. } => "setVolume",
            Notification::SetRadius { .. } => "setRadius",
            Notification::Play { .. } => "play",
            Notification::Stop {} => "stop",
            Notification::Close {} => "close",
        }
    }

    pub fn endpoint(&self, resource: &str) -> String {
        format!("https://{}/{}", resource, self.action())
    }

    pub fn body(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Reads a slider value the way `Number(value)` would; blank means zero.
pub fn slider_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
