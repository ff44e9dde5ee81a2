use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up an element by id and cast it to the expected element type.
pub fn element<T: JsCast>(document: &web::Document, element_id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", element_id, e))
}

#[inline]
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("[panel] cannot listen for {}: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    add_listener(target, "click", move |_| handler());
}

/// The whole page is the panel; hiding the body hides everything.
pub fn set_visible(document: &web::Document, visible: bool) {
    if let Some(body) = document.body() {
        let display = if visible { "block" } else { "none" };
        if let Err(e) = body.style().set_property("display", display) {
            log::debug!("[panel] visibility change failed: {:?}", e);
        }
    }
}

/// Run `f` once after `delay_ms`. The timer cannot be cancelled.
pub fn after(delay_ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms,
    ) {
        log::debug!("[toast] setTimeout failed: {:?}", e);
    }
}
