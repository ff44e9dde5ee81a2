use crate::constants::NOTIFY_CONTENT_TYPE;
use crate::core::Notification;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;

/// Fire-and-forget callbacks into the host resource.
///
/// Nothing reads the response and failures never reach the user.
#[derive(Clone, Debug)]
pub struct HostChannel {
    resource: String,
}

impl HostChannel {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
        }
    }

    pub fn notify(&self, note: Notification) {
        let action = note.action();
        let url = note.endpoint(&self.resource);
        log::debug!("[host] -> {} {:?}", action, note);
        spawn_local(async move {
            if let Err(e) = post(&url, &note).await {
                log::debug!("[host] {} failed: {:#}", action, e);
            }
        });
    }
}

async fn post(url: &str, note: &Notification) -> anyhow::Result<()> {
    let body = note.body()?;
    Request::post(url)
        .header("Content-Type", NOTIFY_CONTENT_TYPE)
        .body(body)?
        .send()
        .await?;
    Ok(())
}
