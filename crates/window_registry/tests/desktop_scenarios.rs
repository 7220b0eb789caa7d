use pretty_assertions::assert_eq;
use window_registry::{
    builtin_catalog, reduce_desktop, visibility, ActiveTarget, DesktopAction, DesktopState,
    HiddenSurfaces, MinimizeMode, RuntimeEffect, SmallTaskTicket, WindowCategory,
    WindowDescriptor, WindowName, WindowPos, WindowRegistry, WindowSize,
};

fn two_window_registry() -> WindowRegistry {
    WindowRegistry::new(vec![
        WindowDescriptor::new("a", WindowCategory::Personal, "user"),
        WindowDescriptor::new("b", WindowCategory::Personal, "film").with_hidden(HiddenSurfaces {
            task_bar: true,
            ..HiddenSurfaces::NONE
        }),
    ])
}

fn names<'a>(windows: impl IntoIterator<Item = &'a WindowDescriptor>) -> Vec<&'a str> {
    windows.into_iter().map(|w| w.name.as_str()).collect()
}

fn orders(registry: &WindowRegistry) -> Vec<u64> {
    registry.windows().iter().map(|w| w.order).collect()
}

/// Drives the pointer through a single leave and returns the ticket the runtime would schedule.
fn leave_button(state: &mut DesktopState, name: &str) -> SmallTaskTicket {
    let effects = reduce_desktop(
        state,
        DesktopAction::TaskbarButtonPointerLeave {
            name: WindowName::new(name),
        },
    );
    match effects.as_slice() {
        [RuntimeEffect::ScheduleSmallTaskClose { ticket, .. }] => ticket.clone(),
        other => panic!("expected a single scheduled close, got {other:?}"),
    }
}

#[test]
fn transient_taskbar_entries_follow_open_state() {
    let mut registry = two_window_registry();

    assert_eq!(names(visibility::taskbar_transient(&registry)), Vec::<&str>::new());
    assert_eq!(names(visibility::taskbar_pinned(&registry)), vec!["a"]);

    registry.set_open("b", true);
    assert_eq!(names(visibility::taskbar_transient(&registry)), vec!["b"]);
    assert_eq!(names(visibility::taskbar_entries(&registry)), vec!["a", "b"]);

    registry.set_open("b", false);
    assert_eq!(names(visibility::taskbar_transient(&registry)), Vec::<&str>::new());
}

#[test]
fn focusing_a_then_b_ranks_b_first() {
    let mut registry = two_window_registry();

    registry.set_active_window(Some(ActiveTarget::window("a")));
    assert_eq!(registry.get("a").unwrap().order, 0);

    registry.set_active_window(Some(ActiveTarget::window("b")));
    assert_eq!(registry.get("b").unwrap().order, 0);
    assert_eq!(registry.get("a").unwrap().order, 1);
    assert_eq!(registry.active_window(), Some(&WindowName::new("b")));
}

#[test]
fn every_focus_leaves_exactly_one_window_at_order_zero() {
    let catalog = builtin_catalog().expect("builtin catalog");
    let mut registry = WindowRegistry::from_catalog(&catalog);
    let all: Vec<String> = registry
        .windows()
        .iter()
        .map(|w| w.name.to_string())
        .collect();

    for step in 0..200usize {
        let target = &all[(step * 7 + step / 3) % all.len()];
        let before = orders(&registry);

        assert!(registry.set_active_window(Some(ActiveTarget::window(target.as_str()))));

        let after = orders(&registry);
        assert_eq!(after.iter().filter(|order| **order == 0).count(), 1);
        for (idx, window) in registry.windows().iter().enumerate() {
            if window.name == target.as_str() {
                assert_eq!(after[idx], 0);
            } else {
                assert!(after[idx] > before[idx], "order of {} decreased", window.name);
            }
        }
    }
}

#[test]
fn clearing_focus_never_touches_orders() {
    let mut registry = two_window_registry();
    registry.set_active_window(Some(ActiveTarget::window("a")));
    registry.set_active_window(Some(ActiveTarget::window("b")));
    let before = orders(&registry);

    assert!(registry.set_active_window(None));

    assert_eq!(orders(&registry), before);
    assert_eq!(registry.active(), None);
}

#[test]
fn setters_change_only_their_field_and_ignore_unknown_names() {
    let mut registry = two_window_registry();
    let pristine = registry.clone();

    assert!(!registry.set_open("zzz", true));
    assert!(!registry.set_minimize_mode("zzz", Some(MinimizeMode::Enabled)));
    assert!(!registry.set_fullscreen("zzz", true));
    assert!(!registry.set_size("zzz", WindowSize { width: 1, height: 1 }));
    assert!(!registry.set_pos("zzz", WindowPos { x: 1, y: 1 }));
    assert!(!registry.set_small_task_visible("zzz", true));
    assert!(!registry.set_hover_small_task("zzz", true));
    assert_eq!(registry, pristine);

    registry.set_size("b", WindowSize { width: 640, height: 480 });
    let mut expected = pristine.windows()[1].clone();
    expected.size = Some(WindowSize { width: 640, height: 480 });
    assert_eq!(registry.windows()[1], expected);
    assert_eq!(registry.windows()[0], pristine.windows()[0]);
}

#[test]
fn visibility_views_are_pure() {
    let mut registry = WindowRegistry::from_catalog(&builtin_catalog().expect("builtin catalog"));
    registry.open_and_focus("video");

    assert_eq!(
        visibility::taskbar_entries(&registry),
        visibility::taskbar_entries(&registry)
    );
    assert_eq!(
        visibility::desktop_icons(&registry),
        visibility::desktop_icons(&registry)
    );
    assert_eq!(
        visibility::start_menu_groups(&registry),
        visibility::start_menu_groups(&registry)
    );
}

#[test]
fn popover_closes_after_the_delay_when_the_pointer_leaves() {
    let mut state = DesktopState::new(two_window_registry());
    reduce_desktop(
        &mut state,
        DesktopAction::OpenAndFocus {
            name: WindowName::new("a"),
        },
    );

    reduce_desktop(
        &mut state,
        DesktopAction::TaskbarButtonPointerEnter {
            name: WindowName::new("a"),
        },
    );
    assert!(state.registry.get("a").unwrap().small_task);

    let ticket = leave_button(&mut state, "a");
    assert!(state.registry.get("a").unwrap().small_task);

    reduce_desktop(&mut state, DesktopAction::ExpireSmallTask { ticket });
    assert!(!state.registry.get("a").unwrap().small_task);
}

#[test]
fn hovering_the_popover_before_expiry_keeps_it_open() {
    let mut state = DesktopState::new(two_window_registry());
    let a = WindowName::new("a");
    reduce_desktop(&mut state, DesktopAction::OpenAndFocus { name: a.clone() });
    reduce_desktop(
        &mut state,
        DesktopAction::TaskbarButtonPointerEnter { name: a.clone() },
    );
    let ticket = leave_button(&mut state, "a");

    reduce_desktop(
        &mut state,
        DesktopAction::PreviewRegionPointerEnter { name: a.clone() },
    );
    reduce_desktop(&mut state, DesktopAction::ExpireSmallTask { ticket });

    let window = state.registry.get("a").unwrap();
    assert!(window.small_task);
    assert!(window.hover_small_task);

    let effects = reduce_desktop(
        &mut state,
        DesktopAction::PreviewRegionPointerLeave { name: a.clone() },
    );
    assert_eq!(effects, vec![RuntimeEffect::CancelSmallTaskClose(a)]);
    assert!(!state.registry.get("a").unwrap().small_task);
}

#[test]
fn start_menu_and_windows_share_focus() {
    let mut state =
        DesktopState::from_catalog(&builtin_catalog().expect("builtin catalog"));
    reduce_desktop(
        &mut state,
        DesktopAction::OpenAndFocus {
            name: WindowName::new("konsole"),
        },
    );

    reduce_desktop(&mut state, DesktopAction::ToggleStartMenu);
    assert!(state.registry.start_menu_open());
    assert_eq!(state.registry.active_window_icon(), Some("terminal"));
    assert_eq!(
        state
            .registry
            .windows()
            .iter()
            .filter(|w| w.order == 0)
            .count(),
        0
    );

    reduce_desktop(
        &mut state,
        DesktopAction::TaskbarButtonClick {
            name: WindowName::new("blog"),
        },
    );
    assert!(!state.registry.start_menu_open());
    assert!(state.registry.is_active_window("blog"));
    assert_eq!(
        state.registry.stacking_order().last().map(|w| w.name.as_str()),
        Some("blog")
    );
    assert_eq!(state.registry.z_index_for("blog"), Some(2));
    assert_eq!(state.registry.z_index_for("konsole"), Some(1));
}
