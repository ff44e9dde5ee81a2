use crate::core::{HostMessage, MessageError};
use crate::panel::Panel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn decode(data: &JsValue) -> Result<HostMessage, MessageError> {
    if data.is_undefined() || data.is_null() {
        return Err(MessageError::Empty);
    }
    let text = js_sys::JSON::stringify(data)
        .ok()
        .and_then(|s| s.as_string())
        .ok_or(MessageError::Empty)?;
    HostMessage::from_json(&text)
}

/// Route `window.postMessage` traffic from the host into the panel.
pub fn wire_host_messages(panel: Rc<RefCell<Panel>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::MessageEvent| {
            match decode(&ev.data()) {
                Ok(msg) => panel.borrow_mut().handle_message(msg),
                Err(e) => log::debug!("[panel] ignoring host message: {}", e),
            }
        }) as Box<dyn FnMut(_)>);
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            log::error!("[panel] cannot listen for host messages: {:?}", e);
        }
        closure.forget();
    }
}
