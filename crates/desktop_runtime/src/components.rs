//! Desktop shell UI composition and interaction surfaces.

mod a11y;
mod start_menu;
mod taskbar;
mod window;

use std::time::Duration;

use leptos::*;
use window_registry::{visibility, DesktopAction, DesktopState, WindowDescriptor, WindowName};

use self::{
    a11y::focus_element_by_id, start_menu::StartMenu, taskbar::Taskbar, window::DesktopWindow,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn window_frame_dom_id(name: &WindowName) -> String {
    format!("desktop-window-{name}")
}

fn icon_class(icon_id: &str) -> String {
    format!("fa-solid fa-{icon_id}")
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

/// Open windows in registry order. Stacking is applied through each frame's z-index so frames
/// keep their DOM position across focus changes.
fn open_window_names(desktop: &DesktopState) -> Vec<WindowName> {
    desktop
        .registry
        .windows()
        .iter()
        .filter(|w| w.open)
        .map(|w| w.name.clone())
        .collect()
}

/// Moves keyboard focus into a window frame once the current render pass has settled.
pub(crate) fn focus_window_frame(name: &WindowName) {
    let id = window_frame_dom_id(name);
    set_timeout(
        move || {
            let _ = focus_element_by_id(&id);
        },
        Duration::ZERO,
    );
}

#[component]
fn DesktopIcon(window: WindowDescriptor) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let name = window.name.clone();
    let title = window.display_title();

    view! {
        <button
            class="desktop-icon"
            title=title.clone()
            data-window=window.name.to_string()
            on:mousedown=move |ev| ev.stop_propagation()
            on:dblclick=move |ev| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(DesktopAction::OpenAndFocus { name: name.clone() });
            }
        >
            <i class=icon_class(&window.icon_id) aria-hidden="true"></i>
            <span class="desktop-icon-label">{title}</span>
        </button>
    }
}

#[component]
/// Renders the full desktop shell UI and processes queued [`crate::RuntimeEffect`] values.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <div id="desktop-shell-root" class="desktop-shell" tabindex="-1">
            <main
                class="desktop-surface"
                on:mousedown=move |_| {
                    runtime.dispatch_action(DesktopAction::SetActiveWindow { target: None });
                }
            >
                <div class="desktop-icon-grid" role="group" aria-label="Desktop">
                    <For
                        each=move || {
                            visibility::desktop_icons(&state.get().registry)
                                .into_iter()
                                .cloned()
                                .collect::<Vec<_>>()
                        }
                        key=|window| window.name.clone()
                        let:window
                    >
                        <DesktopIcon window />
                    </For>
                </div>

                <div class="desktop-window-layer">
                    <For each=move || open_window_names(&state.get()) key=|name| name.clone() let:name>
                        <DesktopWindow name />
                    </For>
                </div>
            </main>

            <StartMenu />
            <Taskbar />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use window_registry::builtin_catalog;

    use super::*;

    #[test]
    fn open_windows_follow_registry_order() {
        let mut desktop = DesktopState::from_catalog(&builtin_catalog().expect("builtin catalog"));
        desktop.registry.open_and_focus("pacman");
        desktop.registry.open_and_focus("blog");

        assert_eq!(
            open_window_names(&desktop),
            vec![WindowName::new("blog"), WindowName::new("pacman")]
        );
    }

    #[test]
    fn dom_ids_and_icon_classes() {
        assert_eq!(window_frame_dom_id(&WindowName::new("konsole")), "desktop-window-konsole");
        assert_eq!(icon_class("dice-d6"), "fa-solid fa-dice-d6");
    }
}
