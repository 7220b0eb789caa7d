//! Title and subtitle shown at the top of a taskbar preview popover.

use crate::model::{TaskbarBadge, WindowDescriptor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmallTaskCaption {
    pub title: String,
    pub subtitle: Option<String>,
    /// Title is long-running media info and should scroll.
    pub marquee: bool,
}

pub fn small_task_caption(
    window: &WindowDescriptor,
    now_playing: Option<&str>,
    last_command: Option<&str>,
) -> SmallTaskCaption {
    let fallback = window.name.to_string();
    match window.badge {
        Some(TaskbarBadge::NowPlaying) => SmallTaskCaption {
            title: now_playing
                .filter(|track| !track.trim().is_empty())
                .map(str::to_string)
                .unwrap_or(fallback),
            subtitle: None,
            marquee: true,
        },
        Some(TaskbarBadge::LastCommand) => SmallTaskCaption {
            title: fallback,
            subtitle: last_command
                .filter(|command| !command.trim().is_empty())
                .map(str::to_string),
            marquee: false,
        },
        None => SmallTaskCaption {
            title: fallback,
            subtitle: None,
            marquee: false,
        },
    }
}
