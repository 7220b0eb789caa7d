use super::*;
use window_registry::{small_task_caption, SmallTaskCaption};

const START_BUTTON_ICON: &str = "hat-wizard";

fn taskbar_button_class(window: &WindowDescriptor, active: bool) -> String {
    let mut class = String::from("taskbar-button");
    if window.open {
        class.push_str(" open");
    }
    if window.open && active {
        class.push_str(" active");
    }
    class
}

fn taskbar_entry_names(desktop: &DesktopState) -> Vec<WindowName> {
    visibility::taskbar_entries(&desktop.registry)
        .into_iter()
        .map(|w| w.name.clone())
        .collect()
}

fn dispatcher(
    runtime: DesktopRuntimeContext,
    name: WindowName,
    action: fn(WindowName) -> DesktopAction,
) -> impl Fn() + Clone + 'static {
    move || runtime.dispatch_action(action(name.clone()))
}

fn entry_caption(desktop: &DesktopState, name: &WindowName) -> Option<SmallTaskCaption> {
    desktop.registry.get(name.as_str()).map(|window| {
        small_task_caption(
            window,
            desktop.now_playing.as_deref(),
            desktop.last_command.as_deref(),
        )
    })
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let start_menu_open = Signal::derive(move || state.get().registry.start_menu_open());
    let recent_icon = Signal::derive(move || {
        state
            .get()
            .registry
            .active_window_icon()
            .map(str::to_string)
    });

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Desktop taskbar"
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <button
                id="taskbar-start-button"
                class="start-button"
                class:active=move || start_menu_open.get()
                aria-label="Open application launcher"
                aria-haspopup="menu"
                aria-controls="desktop-launcher-menu"
                aria-expanded=move || start_menu_open.get().to_string()
                on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleStartMenu)
            >
                <span class="start-button-indicator" aria-hidden="true"></span>
                <i class=icon_class(START_BUTTON_ICON) aria-hidden="true"></i>
                {move || {
                    recent_icon
                        .get()
                        .map(|icon| {
                            view! {
                                <i
                                    class=format!("start-button-recent {}", icon_class(&icon))
                                    aria-hidden="true"
                                ></i>
                            }
                        })
                }}
            </button>

            <div class="taskbar-entries" role="group" aria-label="Windows">
                <For each=move || taskbar_entry_names(&state.get()) key=|name| name.clone() let:name>
                    <TaskbarEntry name />
                </For>
            </div>
        </footer>
    }
}

#[component]
fn TaskbarEntry(name: WindowName) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let window = {
        let name = name.clone();
        Signal::derive(move || state.get().registry.get(name.as_str()).cloned())
    };
    let caption = {
        let name = name.clone();
        Signal::derive(move || entry_caption(&state.get(), &name))
    };
    let is_open = Signal::derive(move || window.get().is_some_and(|w| w.open));
    let popover_expanded = Signal::derive(move || window.get().is_some_and(|w| w.small_task));

    let region_enter = dispatcher(runtime, name.clone(), |name| {
        DesktopAction::PreviewRegionPointerEnter { name }
    });
    let region_leave = dispatcher(runtime, name.clone(), |name| {
        DesktopAction::PreviewRegionPointerLeave { name }
    });
    let button_enter = dispatcher(runtime, name.clone(), |name| {
        DesktopAction::TaskbarButtonPointerEnter { name }
    });
    let button_leave = dispatcher(runtime, name.clone(), |name| {
        DesktopAction::TaskbarButtonPointerLeave { name }
    });
    let button_click = dispatcher(runtime, name.clone(), |name| {
        DesktopAction::TaskbarButtonClick { name }
    });
    let preview_click = dispatcher(runtime, name.clone(), |name| DesktopAction::PreviewClick { name });
    let close_click = dispatcher(runtime, name.clone(), |name| {
        DesktopAction::PreviewCloseClick { name }
    });

    view! {
        <div
            class="taskbar-entry"
            on:mouseenter=move |_| region_enter()
            on:mouseleave=move |_| region_leave()
        >
            <Show when=move || is_open.get() fallback=|| ()>
                <div class="small-task" class:expanded=move || popover_expanded.get()>
                    <div class="small-task-header">
                        {move || {
                            caption
                                .get()
                                .map(|caption| {
                                    view! {
                                        <div class="small-task-caption">
                                            <span class="small-task-title" class:marquee=caption.marquee>
                                                {caption.title}
                                            </span>
                                            {caption
                                                .subtitle
                                                .map(|subtitle| {
                                                    view! {
                                                        <span class="small-task-separator">"-"</span>
                                                        <span class="small-task-subtitle">{subtitle}</span>
                                                    }
                                                })}
                                        </div>
                                    }
                                })
                        }}
                        <button
                            class="small-task-close"
                            aria-label="Close window"
                            on:click={
                                let close_click = close_click.clone();
                                move |ev| {
                                    stop_mouse_event(&ev);
                                    close_click();
                                }
                            }
                        >
                            <i class=icon_class("xmark") aria-hidden="true"></i>
                        </button>
                    </div>
                    <button
                        class="small-task-preview"
                        aria-label="Show window"
                        on:click={
                            let preview_click = preview_click.clone();
                            move |ev| {
                                stop_mouse_event(&ev);
                                preview_click();
                            }
                        }
                    >
                        <i
                            class=move || {
                                window.get().map(|w| icon_class(&w.icon_id)).unwrap_or_default()
                            }
                            aria-hidden="true"
                        ></i>
                    </button>
                </div>
            </Show>

            <button
                class=move || {
                    let desktop = state.get();
                    let active = desktop.registry.is_active_window(name.as_str());
                    desktop
                        .registry
                        .get(name.as_str())
                        .map(|w| taskbar_button_class(w, active))
                        .unwrap_or_default()
                }
                title=move || window.get().map(|w| w.display_title()).unwrap_or_default()
                aria-pressed=move || is_open.get().to_string()
                on:mouseenter=move |_| button_enter()
                on:mouseleave=move |_| button_leave()
                on:click=move |_| button_click()
            >
                <span class="taskbar-button-indicator" aria-hidden="true"></span>
                <i
                    class=move || {
                        window.get().map(|w| icon_class(&w.icon_id)).unwrap_or_default()
                    }
                    aria-hidden="true"
                ></i>
            </button>
        </div>
    }
}
