//! Centralized icon abstraction for the portfolio desktop.
//!
//! Shell and app crates reference icons through [`IconName`] so no component embeds raw SVG
//! markup. Glyphs are 24px regular-weight outlines rendered with `currentColor`.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell and app components.
pub enum IconName {
    /// Profile / about window icon.
    Person,
    /// Projects window icon.
    FolderOpen,
    /// Experience window icon.
    Briefcase,
    /// Skills window icon.
    Sparkle,
    /// Contact window and email link icon.
    Mail,
    /// Pet window and like icon.
    Heart,
    /// Resume document icon.
    DocumentText,
    /// External link icon.
    Open,
    /// Location pin icon.
    Location,
    /// Calendar icon.
    Calendar,
    /// Hyperlink icon.
    Link,
    /// Send / submit icon.
    Send,
    /// Company / office icon.
    Building,
    /// Post grid tab icon.
    Grid,
    /// Saved tab and bookmark icon.
    Bookmark,
    /// Tagged tab icon.
    PersonTag,
    /// Comment count icon.
    Chat,
    /// Tech stack post icon.
    Code,
    /// Education post icon.
    HatGraduation,
    /// About post icon.
    Drink,
    /// Pet hunger / feed icon.
    Food,
    /// Pet energy icon.
    Flash,
    /// Pet sleep icon.
    WeatherMoon,
    /// GitHub profile link icon.
    BranchFork,
    /// LinkedIn profile link icon.
    PeopleTeam,
    /// Window minimize control icon.
    WindowMinimize,
    /// Window maximize control icon.
    WindowMaximize,
    /// Window restore control icon.
    WindowRestore,
    /// Dismiss/close icon.
    Dismiss,
    /// Checkmark icon.
    Checkmark,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::FolderOpen => "folder-open",
            Self::Briefcase => "briefcase",
            Self::Sparkle => "sparkle",
            Self::Mail => "mail",
            Self::Heart => "heart",
            Self::DocumentText => "document-text",
            Self::Open => "open",
            Self::Location => "location",
            Self::Calendar => "calendar",
            Self::Link => "link",
            Self::Send => "send",
            Self::Building => "building",
            Self::Grid => "grid",
            Self::Bookmark => "bookmark",
            Self::PersonTag => "person-tag",
            Self::Chat => "chat",
            Self::Code => "code",
            Self::HatGraduation => "hat-graduation",
            Self::Drink => "drink",
            Self::Food => "food",
            Self::Flash => "flash",
            Self::WeatherMoon => "weather-moon",
            Self::BranchFork => "branch-fork",
            Self::PeopleTeam => "people-team",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
            Self::Checkmark => "checkmark",
        }
    }

    /// Raw SVG body markup for the icon.
    fn svg_body(self) -> &'static str {
        match self {
            Self::Person => {
                r#"<path d="M12 2a5 5 0 1 1 0 10 5 5 0 0 1 0-10Zm0 1.5a3.5 3.5 0 1 0 0 7 3.5 3.5 0 0 0 0-7ZM6.25 14h11.5C19 14 20 15 20 16.25v.72c0 .56-.18 1.1-.5 1.55C17.95 20.7 15.4 22 12 22s-5.95-1.3-7.5-3.48a2.7 2.7 0 0 1-.5-1.55v-.72C4 15 5 14 6.25 14Zm0 1.5a.75.75 0 0 0-.75.75v.72c0 .24.08.47.22.67C6.95 19.4 9.02 20.5 12 20.5s5.05-1.1 6.28-2.86c.14-.2.22-.43.22-.67v-.72a.75.75 0 0 0-.75-.75H6.25Z"/>"#
            }
            Self::FolderOpen => {
                r#"<path d="M3.5 6.25c0-.97.78-1.75 1.75-1.75h2.88c.2 0 .39.08.53.22l2.06 2.06c.14.14.33.22.53.22h5.5c.97 0 1.75.78 1.75 1.75V9H8.72c-1.34 0-2.58.71-3.25 1.87L3.5 14.28V6.25ZM2 17.79A3.25 3.25 0 0 0 5.25 21h11.04c1.33 0 2.57-.72 3.24-1.88l3.03-5.25A3.25 3.25 0 0 0 20 9.03V8.75c0-1.8-1.45-3.25-3.25-3.25h-5.19L9.72 3.66A2.25 2.25 0 0 0 8.12 3H5.25A3.25 3.25 0 0 0 2 6.25v11.54Zm6.72-7.3h11.03a1.75 1.75 0 0 1 1.51 2.63l-3.03 5.25c-.4.7-1.14 1.13-1.95 1.13H5.25a1.75 1.75 0 0 1-1.51-2.63l3.03-5.25c.4-.7 1.14-1.12 1.95-1.12Z"/>"#
            }
            Self::Briefcase => {
                r#"<path d="M8.5 5.25C8.5 4.01 9.51 3 10.75 3h2.5c1.24 0 2.25 1 2.25 2.25V6h2.25C19.55 6 21 7.46 21 9.25v8.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75v-8.5C3 7.45 4.46 6 6.25 6H8.5v-.75ZM10 6h4v-.75a.75.75 0 0 0-.75-.75h-2.5a.75.75 0 0 0-.75.75V6ZM6.25 7.5c-.97 0-1.75.78-1.75 1.75v8.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75v-8.5c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
            Self::Sparkle => {
                r#"<path d="M8.66 15.23a1 1 0 0 1 .64.64l.85 2.62c.15.45.79.45.94 0l.85-2.62a1 1 0 0 1 .64-.64l2.62-.85c.45-.15.45-.79 0-.94l-2.62-.85a1 1 0 0 1-.64-.64l-.85-2.62a.5.5 0 0 0-.94 0l-.85 2.62a1 1 0 0 1-.64.64l-2.62.85c-.45.15-.45.79 0 .94l2.62.85ZM17.7 6.3a.6.6 0 0 1 .38.38l.5 1.54c.1.27.48.27.57 0l.5-1.54a.6.6 0 0 1 .38-.38l1.54-.5c.27-.1.27-.48 0-.57l-1.54-.5a.6.6 0 0 1-.38-.38l-.5-1.54a.3.3 0 0 0-.57 0l-.5 1.54a.6.6 0 0 1-.38.38l-1.54.5c-.27.1-.27.48 0 .57l1.54.5Z"/>"#
            }
            Self::Mail => {
                r#"<path d="M5.25 4h13.5a3.25 3.25 0 0 1 3.25 3.25v9.5A3.25 3.25 0 0 1 18.75 20H5.25A3.25 3.25 0 0 1 2 16.75v-9.5A3.25 3.25 0 0 1 5.25 4ZM20.5 9.37l-8.15 4.3a.75.75 0 0 1-.7 0L3.5 9.37v7.38c0 .97.78 1.75 1.75 1.75h13.5c.97 0 1.75-.78 1.75-1.75V9.37ZM18.75 5.5H5.25c-.97 0-1.75.78-1.75 1.75v.43L12 12.15l8.5-4.47v-.43c0-.97-.78-1.75-1.75-1.75Z"/>"#
            }
            Self::Heart => {
                r#"<path d="m12.82 5.58-.82.82-.82-.82a5.37 5.37 0 0 0-7.6 7.6l7.89 7.89c.3.3.77.3 1.06 0l7.9-7.9a5.38 5.38 0 1 0-7.61-7.59Zm6.55 6.53L12 19.48l-7.37-7.37a3.87 3.87 0 0 1 5.48-5.47l1.36 1.36c.3.3.79.29 1.08-.02l1.33-1.34a3.88 3.88 0 0 1 5.49 5.47Z"/>"#
            }
            Self::DocumentText => {
                r#"<path d="M8.75 11.5a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm4.84-14.41L19.4 8.4A2 2 0 0 1 20 9.83V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2h6.17c.52 0 1.05.22 1.42.59ZM18 20.5a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6a.5.5 0 0 0-.5.5v16c0 .27.22.5.5.5h12Zm-.62-12L13.5 4.62V8c0 .28.22.5.5.5h3.38Z"/>"#
            }
            Self::Open => {
                r#"<path d="M6.25 4.5A1.75 1.75 0 0 0 4.5 6.25v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75v-4a.75.75 0 0 1 1.5 0v4A3.25 3.25 0 0 1 17.75 21H6.25A3.25 3.25 0 0 1 3 17.75V6.25A3.25 3.25 0 0 1 6.25 3h4a.75.75 0 0 1 0 1.5h-4ZM13 3.75c0-.41.34-.75.75-.75h6.5c.41 0 .75.34.75.75v6.5a.75.75 0 0 1-1.5 0V5.56l-5.22 5.22a.75.75 0 0 1-1.06-1.06l5.22-5.22h-4.69a.75.75 0 0 1-.75-.75Z"/>"#
            }
            Self::Location => {
                r#"<path d="M5.84 5.57a8.7 8.7 0 0 1 12.32 0 8.78 8.78 0 0 1 .1 12.3l-.1.1-1.17 1.16-2.9 2.82a2.72 2.72 0 0 1-3.68.09l-.1-.09-3.42-3.34-.58-.57a8.78 8.78 0 0 1-.47-11.95ZM17.1 6.63a7.2 7.2 0 0 0-10.2 0 7.28 7.28 0 0 0-.08 10.2l.08.08 1.29 1.27 2.57 2.5.1.07c.46.36 1.1.35 1.56-.02l.1-.08 2.99-2.91 1.59-1.58a7.28 7.28 0 0 0 0-10.53ZM12 7.99a3 3 0 1 1 0 6 3 3 0 0 1 0-6Zm0 1.5a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3Z"/>"#
            }
            Self::Calendar => {
                r#"<path d="M17.75 3A3.25 3.25 0 0 1 21 6.25v11.5A3.25 3.25 0 0 1 17.75 21H6.25A3.25 3.25 0 0 1 3 17.75V6.25A3.25 3.25 0 0 1 6.25 3h11.5Zm1.75 5.5h-15v9.25c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V8.5Zm-1.75-4H6.25c-.97 0-1.75.78-1.75 1.75V7h15v-.75c0-.97-.78-1.75-1.75-1.75Z"/>"#
            }
            Self::Link => {
                r#"<path d="M9.25 7a.75.75 0 0 1 0 1.5H7a3.5 3.5 0 0 0-.19 7H9.25a.75.75 0 0 1 0 1.5H7a5 5 0 0 1-.25-10H9.25ZM17 7a5 5 0 0 1 .25 10H14.75a.75.75 0 0 1 0-1.5H17a3.5 3.5 0 0 0 .19-7H14.75a.75.75 0 0 1 0-1.5H17ZM7 11.25h10a.75.75 0 0 1 .1 1.5H7a.75.75 0 0 1-.1-1.5H17 7Z"/>"#
            }
            Self::Send => {
                r#"<path d="M5.7 12 2.3 3.27a.75.75 0 0 1 .94-.98l.1.04 18 9a.75.75 0 0 1 .1 1.29l-.1.05-18 9a.75.75 0 0 1-1.07-.85l.03-.1L5.7 12 2.3 3.27 5.7 12Zm-1.6-7.3 2.68 6.55h6.57a.75.75 0 0 1 .1 1.5H6.78l-2.7 6.56L19.32 12 4.1 4.7Z"/>"#
            }
            Self::Building => {
                r#"<path d="M6.75 6.5a.75.75 0 1 0 0 1.5.75.75 0 0 0 0-1.5Zm0 3.5a.75.75 0 1 0 0 1.5.75.75 0 0 0 0-1.5Zm0 3.5a.75.75 0 1 0 0 1.5.75.75 0 0 0 0-1.5Zm3-7a.75.75 0 1 0 0 1.5.75.75 0 0 0 0-1.5Zm0 3.5a.75.75 0 1 0 0 1.5.75.75 0 0 0 0-1.5ZM4 4.25C4 3.01 5 2 6.25 2h5.5C12.99 2 14 3 14 4.25V8h3.75C18.99 8 20 9 20 10.25v10.5c0 .41-.34.75-.75.75H4.75a.75.75 0 0 1-.75-.75V4.25Zm1.5 0V20h3v-3.25c0-.41.34-.75.75-.75h1.5c.41 0 .75.34.75.75V20h7v-9.75a.75.75 0 0 0-.75-.75h-4.5a.75.75 0 0 1-.75-.75V4.25a.75.75 0 0 0-.75-.75h-5.5a.75.75 0 0 0-.75.75Z"/>"#
            }
            Self::Grid => {
                r#"<path d="M4.5 3h4A1.5 1.5 0 0 1 10 4.5v4A1.5 1.5 0 0 1 8.5 10h-4A1.5 1.5 0 0 1 3 8.5v-4A1.5 1.5 0 0 1 4.5 3Zm0 1.5v4h4v-4h-4ZM15.5 3h4A1.5 1.5 0 0 1 21 4.5v4a1.5 1.5 0 0 1-1.5 1.5h-4A1.5 1.5 0 0 1 14 8.5v-4A1.5 1.5 0 0 1 15.5 3Zm0 1.5v4h4v-4h-4ZM4.5 14h4a1.5 1.5 0 0 1 1.5 1.5v4A1.5 1.5 0 0 1 8.5 21h-4A1.5 1.5 0 0 1 3 19.5v-4A1.5 1.5 0 0 1 4.5 14Zm0 1.5v4h4v-4h-4ZM15.5 14h4a1.5 1.5 0 0 1 1.5 1.5v4a1.5 1.5 0 0 1-1.5 1.5h-4a1.5 1.5 0 0 1-1.5-1.5v-4a1.5 1.5 0 0 1 1.5-1.5Zm0 1.5v4h4v-4h-4Z"/>"#
            }
            Self::Bookmark => {
                r#"<path d="M6.19 21.85A.75.75 0 0 1 5 21.25V6.25C5 4.45 6.46 3 8.25 3h7.5C17.55 3 19 4.46 19 6.25v15a.75.75 0 0 1-1.19.6L12 17.67l-5.81 4.18ZM17.5 6.25c0-.97-.78-1.75-1.75-1.75h-7.5c-.97 0-1.75.78-1.75 1.75v13.54l5.06-3.64a.75.75 0 0 1 .88 0l5.06 3.64V6.25Z"/>"#
            }
            Self::PersonTag => {
                r#"<path d="M12 2a4.5 4.5 0 1 1 0 9 4.5 4.5 0 0 1 0-9Zm0 1.5a3 3 0 1 0 0 6 3 3 0 0 0 0-6ZM6.25 13h6.15a5.5 5.5 0 0 0-.83 1.5H6.25a.75.75 0 0 0-.75.75v.58c0 .2.07.4.19.56 1.06 1.42 2.8 2.24 5.31 2.56v1.5c-2.97-.35-5.17-1.35-6.5-3.16A2.4 2.4 0 0 1 4 15.83v-.58C4 14 5 13 6.25 13Zm10.25 0h3.75c.41 0 .75.34.75.75v3.75c0 .2-.08.39-.22.53l-3.5 3.5a.75.75 0 0 1-1.06 0l-3.75-3.75a.75.75 0 0 1 0-1.06l3.5-3.5c.14-.14.33-.22.53-.22Zm1.75 1.75a.75.75 0 1 0 0 1.5.75.75 0 0 0 0-1.5Z"/>"#
            }
            Self::Chat => {
                r#"<path d="M12 2a10 10 0 1 1-4.59 18.89L3.6 21.96a1.25 1.25 0 0 1-1.54-1.54l1.06-3.83A10 10 0 0 1 12 2Zm0 1.5a8.5 8.5 0 0 0-7.43 12.64l.15.27-1.1 3.97 3.98-1.1.27.15A8.5 8.5 0 1 0 12 3.5Z"/>"#
            }
            Self::Code => {
                r#"<path d="M8.06 6.5a.75.75 0 0 1 .44.97L4.4 18.45a.75.75 0 0 1-1.4-.53L7.08 6.94a.75.75 0 0 1 .98-.44Zm7.16 1.72a.75.75 0 0 1 1.06 0l3.5 3.5c.3.3.3.77 0 1.06l-3.5 3.5a.75.75 0 1 1-1.06-1.06l2.97-2.97-2.97-2.97a.75.75 0 0 1 0-1.06Zm-4.44 0a.75.75 0 0 1 0 1.06l-2.97 2.97 2.97 2.97a.75.75 0 1 1-1.06 1.06l-3.5-3.5a.75.75 0 0 1 0-1.06l3.5-3.5a.75.75 0 0 1 1.06 0Z"/>"#
            }
            Self::HatGraduation => {
                r#"<path d="M9.91 4.29a3.75 3.75 0 0 1 4.18 0l7.59 5.1a.75.75 0 0 1 .32.62v5.24a.75.75 0 0 1-1.5 0v-3.87l-1.5 1.01v4.36c0 .25-.12.48-.32.62l-3.6 2.42a3.75 3.75 0 0 1-4.18 0l-3.6-2.42a.75.75 0 0 1-.33-.62v-4.36L2.32 10.6a.75.75 0 0 1 0-1.24l7.59-5.07ZM6.5 13.3v3.4l3.26 2.2a2.25 2.25 0 0 0 2.48 0l3.26-2.2v-3.4l-3.41 2.3a3.75 3.75 0 0 1-4.18 0L6.5 13.3Zm6.75-7.76a2.25 2.25 0 0 0-2.5 0L4.1 10l6.65 4.46a2.25 2.25 0 0 0 2.5 0L19.9 10l-6.65-4.46Z"/>"#
            }
            Self::Drink => {
                r#"<path d="M5.75 7h10.5c.41 0 .75.34.75.75V9h1.25a2.75 2.75 0 0 1 0 5.5H17v1.25A4.25 4.25 0 0 1 12.75 20h-3.5A4.25 4.25 0 0 1 5 15.75v-8c0-.41.34-.75.75-.75ZM17 13h1.25a1.25 1.25 0 0 0 0-2.5H17V13ZM6.5 8.5v7.25c0 1.52 1.23 2.75 2.75 2.75h3.5c1.52 0 2.75-1.23 2.75-2.75V8.5h-9ZM8.75 2c.41 0 .75.34.75.75v2.5a.75.75 0 0 1-1.5 0v-2.5c0-.41.34-.75.75-.75Zm3.5 0c.41 0 .75.34.75.75v2.5a.75.75 0 0 1-1.5 0v-2.5c0-.41.34-.75.75-.75Z"/>"#
            }
            Self::Food => {
                r#"<path d="M18.25 2c.38 0 .7.28.74.65l.01.1V21.25a.75.75 0 0 1-1.5.1V15h-1.75a.75.75 0 0 1-.74-.65l-.01-.1V6.5A4.5 4.5 0 0 1 18.25 2ZM12.25 2c.38 0 .7.28.74.65l.01.1V8c0 1.86-1.28 3.42-3 3.87v9.38a.75.75 0 0 1-1.5.1V11.87a4 4 0 0 1-3-3.7V2.75a.75.75 0 0 1 1.5-.1V8a2.5 2.5 0 0 0 1.5 2.29V2.75a.75.75 0 0 1 1.5-.1v7.64a2.5 2.5 0 0 0 1.5-2.1V2.75c0-.41.34-.75.75-.75ZM17.5 13.5V3.75a3 3 0 0 0-1.5 2.6v7.15h1.5Z"/>"#
            }
            Self::Flash => {
                r#"<path d="M7.43 2.83A1.25 1.25 0 0 1 8.6 2h6.5c.85 0 1.45.84 1.18 1.65L14.83 8h3.95c1.1 0 1.67 1.32.9 2.12l-9.18 9.5c-1.06 1.09-2.88.1-2.55-1.37l1.27-5.67-1.58-.01c-1.2 0-2.04-1.2-1.64-2.34l3.43-7.4Zm1.35.67-3.2 6.99c-.06.17.06.34.23.34l2.5.01c.48 0 .84.45.73.91l-1.47 6.56L18.2 9.5h-4.42a.75.75 0 0 1-.71-.99L14.76 3.5H8.78Z"/>"#
            }
            Self::WeatherMoon => {
                r#"<path d="M20.03 15.32a.75.75 0 0 0-.92-.48 7.5 7.5 0 0 1-9.5-9.74.75.75 0 0 0-.89-.98A9 9 0 1 0 20.1 16.2a.75.75 0 0 0-.07-.88ZM12 20.5a7.5 7.5 0 0 1-4.9-13.17 9 9 0 0 0 11.02 10.43A7.47 7.47 0 0 1 12 20.5Z"/>"#
            }
            Self::BranchFork => {
                r#"<path d="M6 3.5a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3ZM3 5a3 3 0 1 1 3.75 2.9v1.35c0 .97.78 1.75 1.75 1.75h7c.97 0 1.75-.78 1.75-1.75V7.9a3 3 0 1 1 1.5 0v1.35A3.25 3.25 0 0 1 15.5 12.5h-2.75v3.6a3 3 0 1 1-1.5 0v-3.6H8.5a3.25 3.25 0 0 1-3.25-3.25V7.9A3 3 0 0 1 3 5Zm15-1.5a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3Zm-6 14a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3Z"/>"#
            }
            Self::PeopleTeam => {
                r#"<path d="M14.75 10c.97 0 1.75.78 1.75 1.75v4.75a4.5 4.5 0 0 1-9 0v-4.75c0-.97.78-1.75 1.75-1.75h5.5Zm0 1.5h-5.5a.25.25 0 0 0-.25.25v4.75a3 3 0 0 0 6 0v-4.75a.25.25 0 0 0-.25-.25ZM12 3a3 3 0 1 1 0 6 3 3 0 0 1 0-6Zm0 1.5a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3ZM5 5a2.5 2.5 0 1 1 0 5 2.5 2.5 0 0 1 0-5Zm14 0a2.5 2.5 0 1 1 0 5 2.5 2.5 0 0 1 0-5Z"/>"#
            }
            Self::WindowMinimize => {
                r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::WindowMaximize => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM6.25 4.5c-.97 0-1.75.78-1.75 1.75v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V6.25c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
            Self::WindowRestore => {
                r#"<path d="M7.52 5H6c.13-1.68 1.53-3 3.24-3h8A4.75 4.75 0 0 1 22 6.75v8a3.25 3.25 0 0 1-3 3.24v-1.5c.85-.13 1.5-.86 1.5-1.74v-8c0-1.8-1.46-3.25-3.25-3.25h-8c-.88 0-1.61.65-1.73 1.5ZM5.25 6A3.25 3.25 0 0 0 2 9.25v9.5C2 20.55 3.46 22 5.25 22h9.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C18 7.45 16.55 6 14.75 6h-9.5ZM3.5 9.25c0-.97.78-1.75 1.75-1.75h9.5c.97 0 1.75.78 1.75 1.75v9.5c0 .97-.78 1.75-1.75 1.75h-9.5c-.97 0-1.75-.78-1.75-1.75v-9.5Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
            Self::Checkmark => {
                r#"<path d="M4.53 12.97a.75.75 0 0 0-1.06 1.06l4.5 4.5c.3.3.77.3 1.06 0l11-11a.75.75 0 0 0-1.06-1.06L8.5 16.94l-3.97-3.97Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 12px compact icon (titlebar controls, inline metadata).
    Xs,
    /// 16px standard icon (chips, buttons).
    #[default]
    Sm,
    /// 20px medium icon (dock entries, stat rows).
    Md,
    /// 32px large icon (desktop launchers).
    Lg,
    /// 48px hero icon (post detail header).
    Xl,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 32,
            Self::Xl => 48,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[component]
/// Renders an SVG glyph from the centralized icon catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [IconName; 30] = [
        IconName::Person,
        IconName::FolderOpen,
        IconName::Briefcase,
        IconName::Sparkle,
        IconName::Mail,
        IconName::Heart,
        IconName::DocumentText,
        IconName::Open,
        IconName::Location,
        IconName::Calendar,
        IconName::Link,
        IconName::Send,
        IconName::Building,
        IconName::Grid,
        IconName::Bookmark,
        IconName::PersonTag,
        IconName::Chat,
        IconName::Code,
        IconName::HatGraduation,
        IconName::Drink,
        IconName::Food,
        IconName::Flash,
        IconName::WeatherMoon,
        IconName::BranchFork,
        IconName::PeopleTeam,
        IconName::WindowMinimize,
        IconName::WindowMaximize,
        IconName::WindowRestore,
        IconName::Dismiss,
        IconName::Checkmark,
    ];

    #[test]
    fn icon_tokens_are_unique() {
        let mut tokens: Vec<_> = ALL.iter().map(|icon| icon.token()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), ALL.len());
    }

    #[test]
    fn every_icon_renders_a_path() {
        for icon in ALL {
            let body = icon.svg_body();
            assert!(body.starts_with("<path d=\""), "{} has no path", icon.token());
            assert!(body.ends_with("\"/>"), "{} path is not closed", icon.token());
        }
    }
}
