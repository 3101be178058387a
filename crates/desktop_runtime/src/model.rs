use serde::{Deserialize, Serialize};
use system_ui::IconName;

/// Viewport widths below this use the compact (phone) layout.
pub const COMPACT_BREAKPOINT_PX: i32 = 640;
/// Height of the bottom strip reserved for the dock while a window is maximized.
pub const DOCK_RESERVED_HEIGHT_PX: i32 = 80;
pub const FLOATING_WINDOW_WIDTH: i32 = 600;
pub const FLOATING_WINDOW_HEIGHT: i32 = 450;
/// Floating windows never exceed this fraction of the viewport height.
pub const FLOATING_HEIGHT_RATIO: f64 = 0.7;
/// Horizontal margin kept on each side of a window in the compact layout.
pub const COMPACT_WINDOW_GUTTER_PX: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowId {
    About,
    Projects,
    Experience,
    Skills,
    Contact,
    Pet,
}

impl WindowId {
    pub const ALL: [WindowId; 6] = [
        WindowId::About,
        WindowId::Projects,
        WindowId::Experience,
        WindowId::Skills,
        WindowId::Contact,
        WindowId::Pet,
    ];

    /// Stable token used by deep links, the desktop manifest and DOM hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Contact => "contact",
            Self::Pet => "pet",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|window_id| window_id.token() == token)
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::About => "About Me",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
            Self::Pet => "Pixel Pet 🐾",
        }
    }

    pub const fn icon(self) -> IconName {
        match self {
            Self::About => IconName::Person,
            Self::Projects => IconName::FolderOpen,
            Self::Experience => IconName::Briefcase,
            Self::Skills => IconName::Sparkle,
            Self::Contact => IconName::Mail,
            Self::Pet => IconName::Heart,
        }
    }

    /// DOM id of the rendered window frame.
    pub fn dom_id(self) -> String {
        format!("window-{}", self.token())
    }
}

/// One open window and its position in the stack. Higher `stack_order` renders on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWindowEntry {
    pub id: WindowId,
    pub stack_order: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    /// Open windows in insertion order. At most one entry per [`WindowId`].
    pub windows: Vec<OpenWindowEntry>,
    /// Last stack order handed out; the next open/focus receives `stack_counter + 1`.
    pub stack_counter: u64,
}

impl DesktopState {
    pub fn entry(&self, window_id: WindowId) -> Option<&OpenWindowEntry> {
        self.windows.iter().find(|entry| entry.id == window_id)
    }

    pub fn is_open(&self, window_id: WindowId) -> bool {
        self.entry(window_id).is_some()
    }

    pub fn stack_order(&self, window_id: WindowId) -> Option<u64> {
        self.entry(window_id).map(|entry| entry.stack_order)
    }

    /// Window with the greatest stack order, if any window is open.
    pub fn topmost(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .max_by_key(|entry| entry.stack_order)
            .map(|entry| entry.id)
    }

    pub fn open_ids(&self) -> Vec<WindowId> {
        self.windows.iter().map(|entry| entry.id).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: i32,
    pub height: i32,
}

impl ViewportSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn is_compact(self) -> bool {
        self.width < COMPACT_BREAKPOINT_PX
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(1024, 768)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    /// Inline CSS placing the frame at this rect.
    pub fn to_style(self) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;",
            self.x, self.y, self.w, self.h
        )
    }
}

/// Static download link served next to the site bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetLink {
    pub href: &'static str,
    pub download_name: &'static str,
}

/// What a desktop icon does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherTarget {
    OpenWindow(WindowId),
    Download(AssetLink),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LauncherEntry {
    pub label: &'static str,
    pub target: LauncherTarget,
}

impl LauncherEntry {
    pub const fn icon(self) -> IconName {
        match self.target {
            LauncherTarget::OpenWindow(window_id) => window_id.icon(),
            LauncherTarget::Download(_) => IconName::DocumentText,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockEntry {
    pub label: &'static str,
    pub window_id: WindowId,
}

/// Windows requested through the `?open=` query at boot, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepLinkState {
    pub open: Vec<WindowId>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_tokens_round_trip_and_match_serde_names() {
        for window_id in WindowId::ALL {
            assert_eq!(WindowId::from_token(window_id.token()), Some(window_id));
            let json = serde_json::to_string(&window_id).expect("serialize window id");
            assert_eq!(json, format!("\"{}\"", window_id.token()));
        }
        assert_eq!(WindowId::from_token("About"), None);
        assert_eq!(WindowId::from_token(""), None);
    }

    #[test]
    fn topmost_is_the_greatest_stack_order() {
        let state = DesktopState {
            windows: vec![
                OpenWindowEntry {
                    id: WindowId::Skills,
                    stack_order: 4,
                },
                OpenWindowEntry {
                    id: WindowId::About,
                    stack_order: 2,
                },
            ],
            stack_counter: 4,
        };
        assert_eq!(state.topmost(), Some(WindowId::Skills));
        assert_eq!(state.stack_order(WindowId::About), Some(2));
        assert!(!state.is_open(WindowId::Pet));
        assert_eq!(DesktopState::default().topmost(), None);
    }

    #[test]
    fn compact_layout_starts_below_breakpoint() {
        assert!(ViewportSize::new(639, 800).is_compact());
        assert!(!ViewportSize::new(640, 800).is_compact());
    }
}
