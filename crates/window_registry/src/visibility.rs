//! Per-surface views of the registry. Pure functions; nothing here is stored.

use crate::{
    model::{WindowCategory, WindowDescriptor},
    registry::WindowRegistry,
};

pub fn desktop_icons(registry: &WindowRegistry) -> Vec<&WindowDescriptor> {
    registry
        .windows()
        .iter()
        .filter(|w| !w.hidden.desktop)
        .collect()
}

/// Taskbar buttons that are always shown, running or not.
pub fn taskbar_pinned(registry: &WindowRegistry) -> Vec<&WindowDescriptor> {
    registry
        .windows()
        .iter()
        .filter(|w| !w.hidden.task_bar)
        .collect()
}

/// Taskbar buttons for windows normally hidden from the bar, shown only while open.
pub fn taskbar_transient(registry: &WindowRegistry) -> Vec<&WindowDescriptor> {
    registry
        .windows()
        .iter()
        .filter(|w| w.hidden.task_bar && w.open)
        .collect()
}

/// Full taskbar strip: pinned buttons followed by transient ones.
pub fn taskbar_entries(registry: &WindowRegistry) -> Vec<&WindowDescriptor> {
    let mut entries = taskbar_pinned(registry);
    entries.extend(taskbar_transient(registry));
    entries
}

pub fn start_menu(registry: &WindowRegistry) -> Vec<&WindowDescriptor> {
    registry
        .windows()
        .iter()
        .filter(|w| !w.hidden.start_menu)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartMenuGroup<'a> {
    pub category: WindowCategory,
    pub windows: Vec<&'a WindowDescriptor>,
}

/// Start menu entries grouped by category in [`WindowCategory::ALL`] order. Empty groups are
/// omitted.
pub fn start_menu_groups(registry: &WindowRegistry) -> Vec<StartMenuGroup<'_>> {
    let entries = start_menu(registry);
    WindowCategory::ALL
        .iter()
        .filter_map(|category| {
            let windows: Vec<&WindowDescriptor> = entries
                .iter()
                .copied()
                .filter(|w| w.category == *category)
                .collect();
            (!windows.is_empty()).then_some(StartMenuGroup {
                category: *category,
                windows,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        catalog::builtin_catalog,
        model::{HiddenSurfaces, WindowCategory},
    };

    fn names(windows: &[&WindowDescriptor]) -> Vec<String> {
        windows.iter().map(|w| w.name.to_string()).collect()
    }

    fn builtin() -> WindowRegistry {
        WindowRegistry::from_catalog(&builtin_catalog().expect("builtin catalog"))
    }

    #[test]
    fn builtin_desktop_hides_media_windows() {
        let registry = builtin();

        assert_eq!(
            names(&desktop_icons(&registry)),
            vec!["blog", "portfolio", "konsole", "icefox", "pacman", "explorer", "editor"]
        );
    }

    #[test]
    fn builtin_start_menu_also_hides_explorer() {
        let registry = builtin();

        assert_eq!(
            names(&start_menu(&registry)),
            vec!["blog", "portfolio", "konsole", "icefox", "pacman", "editor"]
        );
    }

    #[test]
    fn transient_buttons_follow_the_open_flag() {
        let mut registry = builtin();
        assert!(taskbar_transient(&registry).is_empty());

        registry.set_open("pdfviewer", true);
        assert_eq!(names(&taskbar_transient(&registry)), vec!["pdfviewer"]);
        assert_eq!(taskbar_entries(&registry).last().unwrap().name, "pdfviewer");

        registry.set_open("pdfviewer", false);
        assert!(taskbar_transient(&registry).is_empty());
    }

    #[test]
    fn pinned_buttons_ignore_the_open_flag() {
        let mut registry = builtin();
        let before = names(&taskbar_pinned(&registry));

        registry.set_open("blog", true);

        assert_eq!(names(&taskbar_pinned(&registry)), before);
        assert!(taskbar_transient(&registry).is_empty());
    }

    #[test]
    fn start_menu_groups_follow_category_order_and_skip_empty_groups() {
        let registry = WindowRegistry::new(vec![
            WindowDescriptor::new("notes", WindowCategory::Personal, "notepad"),
            WindowDescriptor::new("chess", WindowCategory::Games, "chess"),
            WindowDescriptor::new("secret", WindowCategory::Internet, "globe")
                .with_hidden(HiddenSurfaces {
                    start_menu: true,
                    ..HiddenSurfaces::NONE
                }),
            WindowDescriptor::new("solitaire", WindowCategory::Games, "cards"),
        ]);

        let groups = start_menu_groups(&registry);
        let summary: Vec<(WindowCategory, Vec<String>)> = groups
            .iter()
            .map(|group| (group.category, names(&group.windows)))
            .collect();

        assert_eq!(
            summary,
            vec![
                (
                    WindowCategory::Games,
                    vec!["chess".to_string(), "solitaire".to_string()]
                ),
                (WindowCategory::Personal, vec!["notes".to_string()]),
            ]
        );
    }

    #[test]
    fn views_are_pure() {
        let registry = builtin();

        assert_eq!(desktop_icons(&registry), desktop_icons(&registry));
        assert_eq!(taskbar_entries(&registry), taskbar_entries(&registry));
        assert_eq!(start_menu_groups(&registry), start_menu_groups(&registry));
    }
}
