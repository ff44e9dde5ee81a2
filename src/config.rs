use crate::constants::{DEFAULT_RESOURCE, RESOURCE_NAME_GLOBAL};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Startup configuration resolved from the hosting page.
#[derive(Clone, Debug)]
pub struct PanelConfig {
    /// Name of the host resource that receives our callbacks.
    pub resource: String,
}

impl PanelConfig {
    pub fn from_window(window: &web::Window) -> Self {
        let resource = host_resource_name(window).unwrap_or_else(|| {
            log::debug!(
                "[panel] {} unavailable, using {}",
                RESOURCE_NAME_GLOBAL,
                DEFAULT_RESOURCE
            );
            DEFAULT_RESOURCE.to_string()
        });
        Self { resource }
    }
}

// The host injects a global function returning the resource name.
fn host_resource_name(window: &web::Window) -> Option<String> {
    let func = js_sys::Reflect::get(window, &JsValue::from_str(RESOURCE_NAME_GLOBAL)).ok()?;
    let func = func.dyn_into::<js_sys::Function>().ok()?;
    func.call0(&JsValue::NULL)
        .ok()?
        .as_string()
        .filter(|name| !name.is_empty())
}
