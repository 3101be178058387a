//! Host-side runtime helpers for executing reducer effects and querying browser state.
//!
//! Every browser call is gated on `wasm32`; native builds (unit tests, tooling) get fixed
//! fallbacks so the reducer and geometry code stay testable without a DOM.

use leptos::logging;
use thiserror::Error;

use crate::model::{AssetLink, ViewportSize};
use crate::reducer::RuntimeEffect;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("browser document is unavailable")]
    NoDocument,
    #[error("dom call failed: {0}")]
    Dom(String),
}

/// Executes a single [`RuntimeEffect`] emitted by the reducer.
pub fn run_runtime_effect(effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::DownloadAsset(asset) => {
            if let Err(err) = download_asset(asset) {
                logging::warn!("download of `{}` failed: {err}", asset.href);
            }
        }
    }
}

/// Starts a browser download of `asset` through a transient anchor element.
pub fn download_asset(asset: AssetLink) -> Result<(), HostError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let document = window.document().ok_or(HostError::NoDocument)?;
        let anchor = document
            .create_element("a")
            .map_err(|err| HostError::Dom(format!("{err:?}")))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| HostError::Dom("created element is not an anchor".to_string()))?;
        anchor.set_href(asset.href);
        anchor.set_download(asset.download_name);
        anchor.click();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        logging::log!(
            "download `{}` as `{}` skipped outside the browser",
            asset.href,
            asset.download_name
        );
        Ok(())
    }
}

/// Current browser viewport, or 1024x768 when no window is available.
pub fn viewport_size() -> ViewportSize {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1024);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(768);
            return ViewportSize::new(width, height);
        }
    }

    ViewportSize::default()
}

/// Unit jitter sample in `[0, 1)` used to scatter new windows.
pub fn random_unit() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0.5
    }
}

/// Local hour of day, 0..=23.
pub fn local_hour() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().get_hours()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};

        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        ((secs / 3600) % 24) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_fallbacks_are_stable() {
        assert_eq!(viewport_size(), ViewportSize::new(1024, 768));
        assert_eq!(random_unit(), 0.5);
        assert!(local_hour() < 24);
    }

    #[test]
    fn native_download_is_a_logged_no_op() {
        let asset = AssetLink {
            href: "/Resume.pdf",
            download_name: "resume.pdf",
        };
        assert_eq!(download_asset(asset), Ok(()));
    }
}
