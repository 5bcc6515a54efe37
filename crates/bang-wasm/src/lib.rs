//! WebAssembly bindings for Bangroute
//!
//! Used by the search page and the engine userscripts. Call `init` once at
//! startup; every other entry point errors until then.

use std::sync::OnceLock;

use bang_core::{
    intercept::intercept,
    redirect::{self, RouterConfig},
    MatchedSearch, SearchHandler,
};
use wasm_bindgen::prelude::*;

struct RouterState {
    handler: SearchHandler,
    router: RouterConfig,
}

static ROUTER_STATE: OnceLock<RouterState> = OnceLock::new();

fn state() -> Result<&'static RouterState, JsValue> {
    ROUTER_STATE.get().ok_or_else(|| {
        web_sys::console::error_1(&"bang-wasm used before init()".into());
        JsValue::from_str("Not initialized. Call init() first.")
    })
}

#[wasm_bindgen]
pub fn init(router_url: Option<String>) -> Result<(), JsValue> {
    if ROUTER_STATE.get().is_some() {
        return Err(JsValue::from_str("Already initialized. Reload the page to reinitialize."));
    }

    let handler = SearchHandler::builtin()
        .map_err(|e| JsValue::from_str(&format!("Failed to build provider chain: {}", e)))?;
    let router = match router_url.as_deref() {
        Some(url) => RouterConfig::new(url),
        None => RouterConfig::default_router(),
    }
    .map_err(|e| JsValue::from_str(&format!("Failed to configure router: {}", e)))?;

    ROUTER_STATE
        .set(RouterState { handler, router })
        .map_err(|_| JsValue::from_str("Failed to set router state"))?;

    Ok(())
}

#[wasm_bindgen]
pub fn is_initialized() -> bool {
    ROUTER_STATE.get().is_some()
}

/// Route a query. Returns `{ url, providerName, providerDescription }`.
#[wasm_bindgen]
pub fn search(query: &str) -> Result<JsValue, JsValue> {
    let result = state()?.handler.search(query);
    Ok(matched_search_to_js(&result))
}

/// Destination URL only, for form submission.
#[wasm_bindgen]
pub fn resolve_url(query: &str) -> Result<String, JsValue> {
    Ok(state()?.handler.search(query).url)
}

/// Help listing as `[{ key, description }]` in chain order.
#[wasm_bindgen]
pub fn providers_help() -> Result<JsValue, JsValue> {
    let help = state()?.handler.providers_help();
    let list = js_sys::Array::new_with_length(help.len() as u32);
    for (i, entry) in help.iter().enumerate() {
        let item = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&item, &"key".into(), &JsValue::from_str(&entry.key));
        let _ = js_sys::Reflect::set(&item, &"description".into(), &JsValue::from_str(&entry.description));
        list.set(i as u32, item.into());
    }
    Ok(list.into())
}

#[wasm_bindgen]
pub fn router_link(query: &str) -> Result<Option<String>, JsValue> {
    Ok(state()?.router.link(query))
}

/// Router link for the search on an engine page, if it is one we redirect.
#[wasm_bindgen]
pub fn intercept_url(href: &str) -> Result<Option<String>, JsValue> {
    Ok(intercept(href, &state()?.router))
}

#[wasm_bindgen]
pub fn query_from_location(href: &str) -> Option<String> {
    redirect::query_from_location(href)
}

#[wasm_bindgen]
pub fn location_with_query(href: &str, query: &str) -> Result<String, JsValue> {
    redirect::location_with_query(href, query).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn matched_search_to_js(result: &MatchedSearch) -> JsValue {
    let js_result = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&js_result, &"url".into(), &JsValue::from_str(&result.url));
    let _ = js_sys::Reflect::set(&js_result, &"providerName".into(), &JsValue::from_str(&result.provider_name));
    let _ = js_sys::Reflect::set(
        &js_result,
        &"providerDescription".into(),
        &JsValue::from_str(&result.provider_description),
    );
    js_result.into()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_search_after_init() {
        if !is_initialized() {
            init(None).unwrap();
        }
        assert_eq!(resolve_url("#g cats").unwrap(), "https://www.google.com/search?udm=14&q=cats");
        assert_eq!(
            router_link(" !mw bones ").unwrap(),
            Some("https://search.tschall.dev/?q=%21mw%20bones".to_string())
        );
    }

    #[wasm_bindgen_test]
    fn test_location_helpers() {
        assert_eq!(query_from_location("https://search.tschall.dev/?q=%21g"), Some("!g".to_string()));
        assert_eq!(location_with_query("https://search.tschall.dev/", "").unwrap(), "https://search.tschall.dev/");
    }
}
