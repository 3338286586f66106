//! Access to the hosting page: CSRF meta tag, origin, native form submission.
//!
//! On WASM these go through `web_sys`; native builds (tests, tooling) have no
//! page and fall back to empty values.

/// Origin used when there is no browser window to ask.
pub const FALLBACK_ORIGIN: &str = "http://localhost:8080";

/// Read the `content` of `<meta name="{meta_name}">`.
#[cfg(target_arch = "wasm32")]
pub fn csrf_token(meta_name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{meta_name}\"]");
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn csrf_token(_meta_name: &str) -> Option<String> {
    None
}

/// `window.location.origin`, e.g. `https://example.com`.
#[cfg(target_arch = "wasm32")]
pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| FALLBACK_ORIGIN.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn origin() -> String {
    FALLBACK_ORIGIN.to_string()
}

/// Submit the first form matching `selector` without firing its submit event.
#[cfg(target_arch = "wasm32")]
pub fn submit_form(selector: &str) {
    use wasm_bindgen::JsCast;

    let form = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok());

    match form {
        Some(form) => {
            if let Err(e) = form.submit() {
                tracing::error!("Failed to submit {selector}: {e:?}");
            }
        }
        None => tracing::error!("No form matches {selector}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn submit_form(selector: &str) {
    tracing::debug!("No page to submit {selector} on");
}

/// Set the custom validity message of the `<input id="{id}">`; an empty message
/// clears the custom error.
#[cfg(target_arch = "wasm32")]
pub fn set_custom_validity(id: &str, message: &str) {
    use wasm_bindgen::JsCast;

    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok());

    match input {
        Some(input) => input.set_custom_validity(message),
        None => tracing::debug!("No input with id {id}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_custom_validity(id: &str, _message: &str) {
    tracing::debug!("No page holding input {id}");
}
