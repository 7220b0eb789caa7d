use super::*;
use window_registry::{ActiveTarget, WindowFunctions};

fn window_frame_class(window: &WindowDescriptor, active: bool) -> String {
    let mut class = String::from("desktop-window");
    if active {
        class.push_str(" focused");
    }
    if window.is_minimized() {
        class.push_str(" minimized");
    }
    if window.fullscreen {
        class.push_str(" fullscreen");
    }
    if window.frameless {
        class.push_str(" frameless");
    }
    class
}

fn window_frame_style(window: &WindowDescriptor, z_index: u32) -> String {
    let mut style = String::new();
    if !window.fullscreen {
        if let Some(pos) = window.pos {
            style.push_str(&format!("left:{}px;top:{}px;", pos.x, pos.y));
        }
        if let Some(size) = window.size {
            style.push_str(&format!("width:{}px;height:{}px;", size.width, size.height));
        }
    }
    style.push_str(&format!("z-index:{z_index};"));
    style
}

/// Registers this frame's minimize/close behavior for taskbar-driven requests.
fn attach_frame_functions(runtime: DesktopRuntimeContext, name: &WindowName) {
    let functions = WindowFunctions::new(
        {
            let name = name.clone();
            move || runtime.dispatch_action(DesktopAction::ToggleMinimize { name: name.clone() })
        },
        {
            let name = name.clone();
            move || runtime.dispatch_action(DesktopAction::CloseWindow { name: name.clone() })
        },
    );
    runtime.frames.update_value(|frames| {
        frames.attach(name.clone(), functions);
    });

    let name = name.clone();
    on_cleanup(move || {
        runtime.frames.update_value(|frames| {
            frames.detach(name.as_str());
        });
    });
}

#[component]
pub(super) fn DesktopWindow(name: WindowName) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    attach_frame_functions(runtime, &name);

    let window = {
        let name = name.clone();
        Signal::derive(move || state.get().registry.get(name.as_str()).cloned())
    };
    let is_active = {
        let name = name.clone();
        Signal::derive(move || state.get().registry.is_active_window(name.as_str()))
    };
    let z_index = {
        let name = name.clone();
        Signal::derive(move || state.get().registry.z_index_for(name.as_str()).unwrap_or(0))
    };

    let focus = {
        let name = name.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            if !is_active.get_untracked() {
                runtime.dispatch_action(DesktopAction::SetActiveWindow {
                    target: Some(ActiveTarget::Window(name.clone())),
                });
            }
        }
    };
    let minimize = {
        let name = name.clone();
        move || runtime.dispatch_action(DesktopAction::ToggleMinimize { name: name.clone() })
    };
    let close = {
        let name = name.clone();
        move || runtime.dispatch_action(DesktopAction::CloseWindow { name: name.clone() })
    };
    let toggle_fullscreen = {
        let name = name.clone();
        move || {
            if let Some(win) = window.get_untracked() {
                runtime.dispatch_action(DesktopAction::SetFullscreen {
                    name: name.clone(),
                    fullscreen: !win.fullscreen,
                });
            }
        }
    };
    let frame_id = window_frame_dom_id(&name);

    view! {
        <Show when=move || window.get().is_some() fallback=|| ()>
            {
                let focus = focus.clone();
                let minimize = minimize.clone();
                let close = close.clone();
                let toggle_fullscreen = toggle_fullscreen.clone();
                let frame_id = frame_id.clone();
                move || {
                    let Some(win) = window.get() else {
                        return ().into_view();
                    };
                    let class = window_frame_class(&win, is_active.get());
                    let style = window_frame_style(&win, z_index.get());
                    let title = win.display_title();
                    let titlebar = (!win.frameless).then(|| {
                        let minimize = minimize.clone();
                        let close = close.clone();
                        let toggle_fullscreen = toggle_fullscreen.clone();
                        let toggle_on_dblclick = toggle_fullscreen.clone();
                        view! {
                            <header
                                class="titlebar"
                                on:dblclick=move |ev| {
                                    stop_mouse_event(&ev);
                                    toggle_on_dblclick();
                                }
                            >
                                <div class="titlebar-title">
                                    <i class=icon_class(&win.icon_id) aria-hidden="true"></i>
                                    <span>{title.clone()}</span>
                                </div>
                                <div class="titlebar-controls">
                                    <button
                                        aria-label="Minimize window"
                                        on:mousedown=move |ev| stop_mouse_event(&ev)
                                        on:click=move |ev| {
                                            stop_mouse_event(&ev);
                                            minimize();
                                        }
                                    >
                                        <i class=icon_class("window-minimize") aria-hidden="true"></i>
                                    </button>
                                    <button
                                        aria-label=if win.fullscreen {
                                            "Restore window"
                                        } else {
                                            "Maximize window"
                                        }
                                        on:mousedown=move |ev| stop_mouse_event(&ev)
                                        on:click=move |ev| {
                                            stop_mouse_event(&ev);
                                            toggle_fullscreen();
                                        }
                                    >
                                        <i
                                            class=icon_class(if win.fullscreen {
                                                "window-restore"
                                            } else {
                                                "window-maximize"
                                            })
                                            aria-hidden="true"
                                        ></i>
                                    </button>
                                    <button
                                        aria-label="Close window"
                                        on:mousedown=move |ev| stop_mouse_event(&ev)
                                        on:click=move |ev| {
                                            stop_mouse_event(&ev);
                                            close();
                                        }
                                    >
                                        <i class=icon_class("xmark") aria-hidden="true"></i>
                                    </button>
                                </div>
                            </header>
                        }
                    });

                    view! {
                        <section
                            id=frame_id.clone()
                            class=class
                            style=style
                            tabindex="-1"
                            role="dialog"
                            aria-label=title
                            on:mousedown=focus.clone()
                        >
                            {titlebar}
                            <div class="window-body" data-window=win.name.to_string()></div>
                        </section>
                    }
                        .into_view()
                }
            }
        </Show>
    }
}
