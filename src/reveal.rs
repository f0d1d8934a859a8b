//! Bindings for the AOS reveal-on-scroll library loaded from index.html.

use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = AOS, js_name = init)]
    fn aos_init(options: &JsValue) -> Result<(), JsValue>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealOptions {
    pub duration: u32,
    pub once: bool,
    pub offset: u32,
    pub easing: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            duration: config::REVEAL_DURATION_MS,
            once: config::REVEAL_ONCE,
            offset: config::REVEAL_OFFSET_PX,
            easing: config::REVEAL_EASING,
        }
    }
}

/// Starts reveal-on-scroll animations. The page still works without the
/// library, so failures are only logged.
pub fn init_reveal(options: &RevealOptions) {
    let options = match serde_wasm_bindgen::to_value(options) {
        Ok(options) => options,
        Err(e) => {
            warn!("Could not build reveal options: {}", e);
            return;
        }
    };
    match aos_init(&options) {
        Ok(()) => debug!("Reveal-on-scroll initialized"),
        Err(e) => warn!("Reveal-on-scroll unavailable: {:?}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_page_settings() {
        let json = serde_json::to_value(RevealOptions::default()).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({
                "duration": 1000,
                "once": true,
                "offset": 100,
                "easing": "ease-in-out",
            })
        );
    }
}
