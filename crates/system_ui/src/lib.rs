//! Shared UI primitive library for the portfolio desktop shell and its content windows.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable
//! `data-ui-*` DOM contract consumed by the desktop stylesheet. Content apps compose these
//! primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, ButtonShape, ButtonSize, ButtonVariant, Card, Cluster, DesktopBackdrop,
    DesktopIconButton, DesktopIconColumn, DesktopRoot, DesktopSide, DesktopWindowLayer, Dock,
    DockButton, Elevation, FieldGroup, FieldVariant, FormSurface, Grid, Heading, IconButton,
    LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, Modal, ProgressBar, ProgressTone,
    SegmentedControl, SegmentedControlOption, Stack, SurfaceVariant, Tab, TabList, Text,
    TextArea, TextField, TextRole, TextTone, Toast, WindowBody, WindowControlButton,
    WindowControlKind, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonShape, ButtonSize, ButtonVariant, Card, Cluster, Elevation,
        FieldGroup, FieldVariant, FormSurface, Grid, Heading, Icon, IconButton, IconName,
        IconSize, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, Modal, ProgressBar,
        ProgressTone, SegmentedControl, SegmentedControlOption, Stack, SurfaceVariant,
        Tab, TabList, Text, TextArea, TextField, TextRole, TextTone, Toast,
    };
}
