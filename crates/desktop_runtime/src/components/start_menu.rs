use super::*;
use window_registry::WindowCategory;

#[derive(Debug, Clone, PartialEq, Eq)]
struct StartMenuItem {
    name: WindowName,
    title: String,
    icon_id: String,
}

fn start_menu_sections(desktop: &DesktopState) -> Vec<(WindowCategory, Vec<StartMenuItem>)> {
    visibility::start_menu_groups(&desktop.registry)
        .into_iter()
        .map(|group| {
            let items = group
                .windows
                .into_iter()
                .map(|w| StartMenuItem {
                    name: w.name.clone(),
                    title: w.display_title(),
                    icon_id: w.icon_id.clone(),
                })
                .collect();
            (group.category, items)
        })
        .collect()
}

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <Show when=move || state.get().registry.start_menu_open() fallback=|| ()>
            <nav
                id="desktop-launcher-menu"
                class="start-menu"
                role="menu"
                aria-label="Applications"
                on:mousedown=move |ev| ev.stop_propagation()
            >
                <For
                    each=move || start_menu_sections(&state.get())
                    key=|(category, _)| *category
                    let:section
                >
                    <section class="start-menu-group" data-category=section.0.label()>
                        <h2 class="start-menu-group-title">
                            <i class=icon_class(section.0.icon_id()) aria-hidden="true"></i>
                            <span>{section.0.label()}</span>
                        </h2>
                        {section
                            .1
                            .into_iter()
                            .map(|item| {
                                let name = item.name.clone();
                                view! {
                                    <button
                                        class="start-menu-item"
                                        role="menuitem"
                                        on:click=move |ev| {
                                            stop_mouse_event(&ev);
                                            runtime.dispatch_action(DesktopAction::OpenAndFocus {
                                                name: name.clone(),
                                            });
                                        }
                                    >
                                        <i class=icon_class(&item.icon_id) aria-hidden="true"></i>
                                        <span>{item.title}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </section>
                </For>
            </nav>
        </Show>
    }
}
