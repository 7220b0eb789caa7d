//! Reducer actions, side-effect intents, and transition logic for the desktop shell.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    catalog::Catalog,
    model::{ActiveTarget, MinimizeMode, TaskbarBadge, WindowName, WindowPos, WindowSize},
    registry::WindowRegistry,
    small_task::{self, PreviewDebounce, SmallTaskTicket, SMALL_TASK_CLOSE_DELAY},
};

/// Command a terminal launched from the taskbar runs on startup.
const TERMINAL_SEED_COMMAND: &str = "help";

/// Everything the shell renders from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DesktopState {
    pub registry: WindowRegistry,
    pub previews: PreviewDebounce,
    /// Track name reported by the media player, shown by `now-playing` taskbar badges.
    pub now_playing: Option<String>,
    /// Last terminal command, shown by `last-command` taskbar badges.
    pub last_command: Option<String>,
}

impl DesktopState {
    pub fn new(registry: WindowRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(WindowRegistry::from_catalog(catalog))
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open or close a window without touching focus.
    SetOpen {
        /// Window to update.
        name: WindowName,
        /// Whether the window is open.
        open: bool,
    },
    /// Set or clear the window's minimize mode.
    SetMinimizeMode {
        /// Window to update.
        name: WindowName,
        /// New minimize mode, `None` when the frame has never been minimized.
        mode: Option<MinimizeMode>,
    },
    /// Enter or leave fullscreen.
    SetFullscreen {
        /// Window to update.
        name: WindowName,
        /// Whether the frame fills the desktop.
        fullscreen: bool,
    },
    /// Record the frame size.
    SetSize {
        /// Window to update.
        name: WindowName,
        /// New frame size in CSS pixels.
        size: WindowSize,
    },
    /// Record the frame position.
    SetPos {
        /// Window to update.
        name: WindowName,
        /// New top-left corner in CSS pixels.
        pos: WindowPos,
    },
    /// Show or hide the taskbar preview popover.
    SetSmallTaskVisible {
        /// Window whose popover changes.
        name: WindowName,
        /// Whether the popover is shown.
        visible: bool,
    },
    /// Record whether the pointer is over the popover region.
    SetHoverSmallTask {
        /// Window whose popover changes.
        name: WindowName,
        /// Whether the pointer is inside the region.
        hovered: bool,
    },
    /// Focus a window or the start menu, or clear focus with `None`.
    SetActiveWindow {
        /// New focus target.
        target: Option<ActiveTarget>,
    },
    /// Open a window and focus it in one step.
    ///
    /// A minimized window is restored.
    OpenAndFocus {
        /// Window to open.
        name: WindowName,
    },
    /// Open or dismiss the start menu.
    ToggleStartMenu,
    /// Primary click on a taskbar button.
    TaskbarButtonClick {
        /// Window the button stands for.
        name: WindowName,
    },
    /// Pointer entered a taskbar button.
    TaskbarButtonPointerEnter {
        /// Window the button stands for.
        name: WindowName,
    },
    /// Pointer left a taskbar button.
    TaskbarButtonPointerLeave {
        /// Window the button stands for.
        name: WindowName,
    },
    /// Pointer entered the region spanning a taskbar button and its preview popover.
    PreviewRegionPointerEnter {
        /// Window the region belongs to.
        name: WindowName,
    },
    /// Pointer left the region spanning a taskbar button and its preview popover.
    PreviewRegionPointerLeave {
        /// Window the region belongs to.
        name: WindowName,
    },
    /// A delayed popover close came due.
    ExpireSmallTask {
        /// Ticket issued when the close was scheduled.
        ticket: SmallTaskTicket,
    },
    /// Click on the preview body inside the popover.
    PreviewClick {
        /// Window the popover belongs to.
        name: WindowName,
    },
    /// Click on the close button inside the popover.
    PreviewCloseClick {
        /// Window the popover belongs to.
        name: WindowName,
    },
    /// Window frame collapsed to or restored from the taskbar.
    ToggleMinimize {
        /// Window whose frame toggled.
        name: WindowName,
    },
    /// Window frame closed.
    CloseWindow {
        /// Window whose frame closed.
        name: WindowName,
    },
    /// Media player reported its current track.
    SetNowPlaying {
        /// Track name, `None` when playback stopped.
        track: Option<String>,
    },
    /// Terminal reported the last command it ran.
    SetLastCommand {
        /// Command line, `None` when the history is empty.
        command: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Dispatch [`DesktopAction::ExpireSmallTask`] with `ticket` once `delay` has elapsed.
    ScheduleSmallTaskClose {
        /// Ticket to hand back on expiry.
        ticket: SmallTaskTicket,
        /// Time to wait before dispatching.
        delay: Duration,
    },
    /// Drop any timer scheduled for the window's popover.
    CancelSmallTaskClose(WindowName),
    /// Call the minimize callback the window's frame registered.
    InvokeFrameMinimize(WindowName),
    /// Call the close callback the window's frame registered.
    InvokeFrameClose(WindowName),
    /// Move keyboard focus into the window's frame.
    FocusWindowInput(WindowName),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Actions naming an unknown window leave the state untouched and produce no effects.
pub fn reduce_desktop(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    let registry = &mut state.registry;
    match action {
        DesktopAction::SetOpen { name, open } => {
            registry.set_open(name.as_str(), open);
        }
        DesktopAction::SetMinimizeMode { name, mode } => {
            registry.set_minimize_mode(name.as_str(), mode);
        }
        DesktopAction::SetFullscreen { name, fullscreen } => {
            registry.set_fullscreen(name.as_str(), fullscreen);
        }
        DesktopAction::SetSize { name, size } => {
            registry.set_size(name.as_str(), size);
        }
        DesktopAction::SetPos { name, pos } => {
            registry.set_pos(name.as_str(), pos);
        }
        DesktopAction::SetSmallTaskVisible { name, visible } => {
            registry.set_small_task_visible(name.as_str(), visible);
        }
        DesktopAction::SetHoverSmallTask { name, hovered } => {
            registry.set_hover_small_task(name.as_str(), hovered);
        }
        DesktopAction::SetActiveWindow { target } => {
            let focused = target.as_ref().and_then(ActiveTarget::window_name).cloned();
            if registry.set_active_window(target) {
                if let Some(name) = focused {
                    effects.push(RuntimeEffect::FocusWindowInput(name));
                }
            }
        }
        DesktopAction::OpenAndFocus { name } => {
            let Some(minimized) = registry.get(name.as_str()).map(|w| w.is_minimized()) else {
                return effects;
            };
            if minimized {
                registry.set_minimize_mode(name.as_str(), Some(MinimizeMode::Disabled));
            }
            registry.open_and_focus(name.as_str());
            effects.push(RuntimeEffect::FocusWindowInput(name));
        }
        DesktopAction::ToggleStartMenu => registry.toggle_start_menu(),
        DesktopAction::TaskbarButtonClick { name } => {
            match registry.get(name.as_str()).map(|w| (w.open, w.badge)) {
                Some((false, badge)) => {
                    registry.open_and_focus(name.as_str());
                    if badge == Some(TaskbarBadge::LastCommand) && state.last_command.is_none() {
                        state.last_command = Some(TERMINAL_SEED_COMMAND.to_string());
                    }
                    effects.push(RuntimeEffect::FocusWindowInput(name));
                }
                Some((true, _)) => effects.push(RuntimeEffect::InvokeFrameMinimize(name)),
                None => {}
            }
        }
        DesktopAction::TaskbarButtonPointerEnter { name } => {
            if small_task::button_pointer_enter(registry, &mut state.previews, &name) {
                effects.push(RuntimeEffect::CancelSmallTaskClose(name));
            }
        }
        DesktopAction::TaskbarButtonPointerLeave { name } => {
            if let Some(ticket) =
                small_task::button_pointer_leave(registry, &mut state.previews, &name)
            {
                effects.push(RuntimeEffect::ScheduleSmallTaskClose {
                    ticket,
                    delay: SMALL_TASK_CLOSE_DELAY,
                });
            }
        }
        DesktopAction::PreviewRegionPointerEnter { name } => {
            small_task::region_pointer_enter(registry, &name);
        }
        DesktopAction::PreviewRegionPointerLeave { name } => {
            if small_task::region_pointer_leave(registry, &mut state.previews, &name) {
                effects.push(RuntimeEffect::CancelSmallTaskClose(name));
            }
        }
        DesktopAction::ExpireSmallTask { ticket } => {
            small_task::expire(registry, &state.previews, &ticket);
        }
        DesktopAction::PreviewClick { name } => {
            let Some(minimized) = registry.get(name.as_str()).map(|w| w.is_minimized()) else {
                return effects;
            };
            if minimized {
                effects.push(RuntimeEffect::InvokeFrameMinimize(name.clone()));
            }
            registry.set_active_window(Some(ActiveTarget::Window(name.clone())));
            registry.set_hover_small_task(name.as_str(), false);
            registry.set_small_task_visible(name.as_str(), false);
            state.previews.cancel(&name);
            effects.push(RuntimeEffect::CancelSmallTaskClose(name.clone()));
            effects.push(RuntimeEffect::FocusWindowInput(name));
        }
        DesktopAction::PreviewCloseClick { name } => {
            if registry.contains(name.as_str()) {
                effects.push(RuntimeEffect::InvokeFrameClose(name));
            }
        }
        DesktopAction::ToggleMinimize { name } => {
            let Some(minimized) = registry.get(name.as_str()).map(|w| w.is_minimized()) else {
                return effects;
            };
            if minimized {
                registry.set_minimize_mode(name.as_str(), Some(MinimizeMode::Disabled));
                registry.set_active_window(Some(ActiveTarget::Window(name.clone())));
                effects.push(RuntimeEffect::FocusWindowInput(name));
            } else {
                registry.set_minimize_mode(name.as_str(), Some(MinimizeMode::Enabled));
                if registry.is_active_window(name.as_str()) {
                    registry.set_active_window(None);
                }
            }
        }
        DesktopAction::CloseWindow { name } => {
            if !registry.set_open(name.as_str(), false) {
                return effects;
            }
            registry.set_minimize_mode(name.as_str(), None);
            registry.set_small_task_visible(name.as_str(), false);
            registry.set_hover_small_task(name.as_str(), false);
            if registry.is_active_window(name.as_str()) {
                registry.set_active_window(None);
            }
            state.previews.cancel(&name);
            effects.push(RuntimeEffect::CancelSmallTaskClose(name));
        }
        DesktopAction::SetNowPlaying { track } => state.now_playing = track,
        DesktopAction::SetLastCommand { command } => state.last_command = command,
    }

    effects
}
