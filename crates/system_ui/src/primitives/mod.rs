//! Shared structural, shell, overlay, data-display, control, and layout primitives.

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod layout;
mod navigation;
mod overlays;
mod shell;

pub use controls::{
    Button, FieldGroup, FormSurface, IconButton, ProgressBar, SegmentedControl,
    SegmentedControlOption, TextArea, TextField,
};
pub use data_display::{Badge, Card, Heading, Text};
pub use layout::{Cluster, Grid, Stack};
pub use navigation::{Tab, TabList};
pub use overlays::{Modal, Toast};
pub use shell::{
    DesktopBackdrop, DesktopIconButton, DesktopIconColumn, DesktopRoot, DesktopWindowLayer, Dock,
    DockButton, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Semantic surface variants for structural primitives.
pub enum SurfaceVariant {
    /// Primary surface.
    #[default]
    Standard,
    /// Secondary or muted surface.
    Muted,
    /// Translucent glass surface used over the wallpaper.
    Glass,
}

impl SurfaceVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Muted => "muted",
            Self::Glass => "glass",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Semantic elevation levels for shared primitives.
pub enum Elevation {
    /// Flat surface.
    #[default]
    Flat,
    /// Raised surface.
    Raised,
    /// Overlay surface.
    Overlay,
}

impl Elevation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Raised => "raised",
            Self::Overlay => "overlay",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/toggle style button.
    Quiet,
    /// Filter pill used by segmented controls.
    Segmented,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Segmented => "segmented",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Shared button shape tokens.
pub enum ButtonShape {
    /// Rounded rectangle.
    #[default]
    Standard,
    /// Fully rounded pill.
    Pill,
    /// Circle, used for icon-only buttons and titlebar lights.
    Circle,
}

impl ButtonShape {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Pill => "pill",
            Self::Circle => "circle",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Shared input-field variants.
pub enum FieldVariant {
    /// Standard input.
    #[default]
    Standard,
    /// Inset input with a recessed background.
    Inset,
}

impl FieldVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Inset => "inset",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Shared text roles.
pub enum TextRole {
    /// Body text.
    #[default]
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Title text.
    Title,
    /// Oversized hero text.
    Display,
    /// Monospace/code text.
    Code,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
            Self::Display => "display",
            Self::Code => "code",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    #[default]
    Primary,
    /// Secondary text.
    Secondary,
    /// Accent text.
    Accent,
    /// Success/status tone.
    Success,
    /// Warning tone.
    Warning,
    /// Danger tone.
    Danger,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    #[default]
    Md,
    /// Large gap.
    Lg,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Shared layout padding tokens.
pub enum LayoutPadding {
    /// No padding.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    #[default]
    Md,
    /// Spacious padding.
    Lg,
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Shared layout alignment tokens.
pub enum LayoutAlign {
    /// Stretch/fill alignment.
    #[default]
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
    /// End alignment.
    End,
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Shared layout justification tokens.
pub enum LayoutJustify {
    /// Start justification.
    #[default]
    Start,
    /// Center justification.
    Center,
    /// Space between items.
    Between,
    /// End justification.
    End,
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Fill tones for linear progress meters.
pub enum ProgressTone {
    /// Accent gradient (skill levels, happiness).
    #[default]
    Accent,
    /// Warm tone (hunger).
    Warm,
    /// Bright tone (energy).
    Bright,
}

impl ProgressTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Accent => "accent",
            Self::Warm => "warm",
            Self::Bright => "bright",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which side of the desktop a launcher column is anchored to.
pub enum DesktopSide {
    /// Left edge column.
    Left,
    /// Right edge column.
    Right,
}

impl DesktopSide {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Titlebar control kinds, rendered as colored traffic lights.
pub enum WindowControlKind {
    /// Close control.
    Close,
    /// Minimize control (decorative).
    Minimize,
    /// Maximize / restore toggle.
    Maximize,
}

impl WindowControlKind {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn percent_of(value: u16, max: u16) -> u16 {
    if max == 0 {
        return 0;
    }
    let capped = u32::from(value.min(max));
    ((capped * 100) / u32::from(max)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-card", Some("post")), "ui-card post");
        assert_eq!(merge_layout_class("ui-card", Some("")), "ui-card");
        assert_eq!(merge_layout_class("ui-card", None), "ui-card");
    }

    #[test]
    fn percent_is_capped_and_safe_for_zero_max() {
        assert_eq!(percent_of(45, 100), 45);
        assert_eq!(percent_of(150, 100), 100);
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(10, 0), 0);
    }
}
