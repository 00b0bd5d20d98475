use std::collections::BTreeMap;

use leptos::{mount_to, view};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::{
    architecture::{ComponentDescriptor, descriptors},
    errors::{AppError, AppResult},
    logging::LogComponent,
};

/// Mount the diagram into the element with id `element_id`.
#[wasm_bindgen(js_name = mountArchitecture)]
pub fn mount_architecture(element_id: &str) -> Result<(), JsValue> {
    mount_into(element_id).map_err(|e| {
        crate::log_error!(LogComponent::Presentation("Mount"), "{}", e);
        JsValue::from_str(&e.to_string())
    })
}

/// Descriptor registry as a JSON object keyed by component id.
#[wasm_bindgen(js_name = architectureJson)]
pub fn architecture_json() -> Result<String, JsValue> {
    registry_json().map_err(|e| JsValue::from_str(&e.to_string()))
}

pub fn mount_into(element_id: &str) -> AppResult<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| AppError::BrowserUnavailable("document not available".to_string()))?;
    let host = document
        .get_element_by_id(element_id)
        .ok_or_else(|| AppError::MountTargetNotFound(element_id.to_string()))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| AppError::MountTargetNotFound(element_id.to_string()))?;

    mount_to(host, || view! { <App/> });

    crate::log_info!(LogComponent::Presentation("Mount"), "mounted into #{}", element_id);
    Ok(())
}

/// Registry keyed by component key. Keys sort into display order.
pub fn registry_map() -> BTreeMap<&'static str, &'static ComponentDescriptor> {
    descriptors().map(|(id, descriptor)| (id.key(), descriptor)).collect()
}

pub fn registry_json() -> AppResult<String> {
    Ok(serde_json::to_string_pretty(&registry_map())?)
}
