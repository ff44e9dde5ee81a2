use crate::constants::{
    TOAST_CLASS, TOAST_HIDE_AFTER_MS, TOAST_REMOVE_AFTER_MS, TOAST_SHOW_AFTER_MS,
    TOAST_SHOW_CLASS,
};
use crate::dom;
use web_sys as web;

/// Show a short-lived message at the bottom of the panel.
///
/// Each call gets its own element and timers; toasts are neither queued nor
/// cancellable, so rapid calls simply overlap.
pub fn flash(document: &web::Document, message: &str) {
    let Some(body) = document.body() else {
        return;
    };
    let toast = match document.create_element("div") {
        Ok(el) => el,
        Err(e) => {
            log::debug!("[toast] create failed: {:?}", e);
            return;
        }
    };
    toast.set_class_name(TOAST_CLASS);
    toast.set_text_content(Some(message));
    if let Err(e) = body.append_child(&toast) {
        log::debug!("[toast] append failed: {:?}", e);
        return;
    }
    log::info!("[toast] {}", message);

    let shown = toast.clone();
    dom::after(TOAST_SHOW_AFTER_MS, move || {
        _ = shown.class_list().add_1(TOAST_SHOW_CLASS);
    });
    let fading = toast.clone();
    dom::after(TOAST_HIDE_AFTER_MS, move || {
        _ = fading.class_list().remove_1(TOAST_SHOW_CLASS);
    });
    dom::after(TOAST_REMOVE_AFTER_MS, move || toast.remove());
}
