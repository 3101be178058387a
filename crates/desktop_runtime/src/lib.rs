//! Portfolio desktop runtime: window stack reducer, launcher manifest, drag geometry and the
//! Leptos shell that renders them.

pub mod apps;
pub mod components;
pub mod deep_link;
pub mod drag;
pub mod host;
pub mod manifest;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use deep_link::{parse_deep_link_from_query, DeepLinkError, ParsedDeepLink};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
