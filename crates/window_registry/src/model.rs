use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Stable key of a registered window. Unique within a registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowName(String);

impl WindowName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for WindowName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for WindowName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for WindowName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WindowName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowCategory {
    Games,
    Development,
    Personal,
    Internet,
}

impl WindowCategory {
    /// Display order used by the start menu.
    pub const ALL: [WindowCategory; 4] = [
        Self::Games,
        Self::Development,
        Self::Personal,
        Self::Internet,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Games => "Games",
            Self::Development => "Development",
            Self::Personal => "Personal",
            Self::Internet => "Internet",
        }
    }

    pub fn icon_id(self) -> &'static str {
        match self {
            Self::Games => "gamepad",
            Self::Development => "gears",
            Self::Personal => "user",
            Self::Internet => "globe",
        }
    }
}

/// Minimize state recorded for a window frame. `None` on the descriptor means the frame has
/// never been minimized or restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinimizeMode {
    /// The frame is collapsed into the taskbar.
    Enabled,
    /// The frame has been restored from the taskbar.
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPos {
    pub x: i32,
    pub y: i32,
}

/// Per-surface hide flags. Orthogonal to whether the window is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HiddenSurfaces {
    pub desktop: bool,
    pub start_menu: bool,
    pub task_bar: bool,
}

impl HiddenSurfaces {
    pub const NONE: Self = Self {
        desktop: false,
        start_menu: false,
        task_bar: false,
    };

    pub const ALL: Self = Self {
        desktop: true,
        start_menu: true,
        task_bar: true,
    };
}

/// Extra line of live information shown in a window's taskbar preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskbarBadge {
    /// Title scrolls the currently playing track.
    NowPlaying,
    /// Subtitle shows the last command typed into a terminal.
    LastCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowDescriptor {
    pub name: WindowName,
    pub title: Option<String>,
    pub category: WindowCategory,
    pub icon_id: String,
    pub open: bool,
    pub minimize: Option<MinimizeMode>,
    pub fullscreen: bool,
    /// Recency rank: `0` for the active window, strictly positive otherwise.
    pub order: u64,
    pub size: Option<WindowSize>,
    pub pos: Option<WindowPos>,
    pub hidden: HiddenSurfaces,
    pub badge: Option<TaskbarBadge>,
    /// Rendered without shell chrome; the content draws its own frame.
    pub frameless: bool,
    pub small_task: bool,
    pub hover_small_task: bool,
}

impl WindowDescriptor {
    pub fn new(name: impl Into<WindowName>, category: WindowCategory, icon_id: &str) -> Self {
        Self {
            name: name.into(),
            title: None,
            category,
            icon_id: icon_id.to_string(),
            open: false,
            minimize: None,
            fullscreen: false,
            order: 1,
            size: None,
            pos: None,
            hidden: HiddenSurfaces::NONE,
            badge: None,
            frameless: false,
            small_task: false,
            hover_small_task: false,
        }
    }

    pub fn with_hidden(mut self, hidden: HiddenSurfaces) -> Self {
        self.hidden = hidden;
        self
    }

    /// Title shown in chrome; falls back to the capitalized window name.
    pub fn display_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        capitalize(self.name.as_str())
    }

    pub fn is_minimized(&self) -> bool {
        self.minimize == Some(MinimizeMode::Enabled)
    }
}

/// What currently holds focus in the shell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActiveTarget {
    Window(WindowName),
    /// The start menu is open; no window is active.
    StartMenu,
}

impl ActiveTarget {
    pub fn window(name: impl Into<WindowName>) -> Self {
        Self::Window(name.into())
    }

    pub fn window_name(&self) -> Option<&WindowName> {
        match self {
            Self::Window(name) => Some(name),
            Self::StartMenu => None,
        }
    }
}

pub(crate) fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_title_prefers_explicit_title() {
        let mut descriptor =
            WindowDescriptor::new("pdfviewer", WindowCategory::Personal, "file-pdf");
        assert_eq!(descriptor.display_title(), "Pdfviewer");

        descriptor.title = Some("PDF Viewer".to_string());
        assert_eq!(descriptor.display_title(), "PDF Viewer");
    }

    #[test]
    fn categories_round_trip_through_lowercase_names() {
        let parsed: WindowCategory = serde_json::from_str("\"development\"").unwrap();
        assert_eq!(parsed, WindowCategory::Development);
        assert_eq!(
            serde_json::to_string(&TaskbarBadge::NowPlaying).unwrap(),
            "\"now-playing\""
        );
    }
}
