//! The window registry store: a fixed list of descriptors with field-level setters.
//!
//! Every setter looks the descriptor up by name, replaces exactly one field, and reports whether
//! a descriptor was found. Unknown names leave the registry untouched.

use serde::{Deserialize, Serialize};

use crate::{
    catalog::Catalog,
    model::{ActiveTarget, MinimizeMode, WindowDescriptor, WindowName, WindowPos, WindowSize},
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowRegistry {
    pub(crate) windows: Vec<WindowDescriptor>,
    pub(crate) active: Option<ActiveTarget>,
    pub(crate) active_window_icon: Option<String>,
}

impl WindowRegistry {
    /// Creates a registry from a seed list. Later entries with an already-seen name are dropped.
    pub fn new(seed: Vec<WindowDescriptor>) -> Self {
        let mut windows: Vec<WindowDescriptor> = Vec::with_capacity(seed.len());
        for descriptor in seed {
            if windows.iter().all(|w| w.name != descriptor.name) {
                windows.push(descriptor);
            }
        }
        Self {
            windows,
            active: None,
            active_window_icon: None,
        }
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.descriptors())
    }

    pub fn windows(&self) -> &[WindowDescriptor] {
        &self.windows
    }

    pub fn get(&self, name: &str) -> Option<&WindowDescriptor> {
        self.windows.iter().find(|w| w.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn active(&self) -> Option<&ActiveTarget> {
        self.active.as_ref()
    }

    /// Name of the active window, if a window (rather than shell chrome) holds focus.
    pub fn active_window(&self) -> Option<&WindowName> {
        self.active.as_ref().and_then(ActiveTarget::window_name)
    }

    pub fn is_active_window(&self, name: &str) -> bool {
        self.active_window().is_some_and(|active| active == name)
    }

    pub fn start_menu_open(&self) -> bool {
        self.active == Some(ActiveTarget::StartMenu)
    }

    /// Icon of the window that held focus before the latest focus change.
    pub fn active_window_icon(&self) -> Option<&str> {
        self.active_window_icon.as_deref()
    }

    pub fn set_open(&mut self, name: &str, open: bool) -> bool {
        self.update(name, |w| w.open = open)
    }

    pub fn set_minimize_mode(&mut self, name: &str, mode: Option<MinimizeMode>) -> bool {
        self.update(name, |w| w.minimize = mode)
    }

    pub fn set_fullscreen(&mut self, name: &str, fullscreen: bool) -> bool {
        self.update(name, |w| w.fullscreen = fullscreen)
    }

    pub fn set_size(&mut self, name: &str, size: WindowSize) -> bool {
        self.update(name, |w| w.size = Some(size))
    }

    pub fn set_pos(&mut self, name: &str, pos: WindowPos) -> bool {
        self.update(name, |w| w.pos = Some(pos))
    }

    pub fn set_small_task_visible(&mut self, name: &str, visible: bool) -> bool {
        self.update(name, |w| w.small_task = visible)
    }

    pub fn set_hover_small_task(&mut self, name: &str, hovered: bool) -> bool {
        self.update(name, |w| w.hover_small_task = hovered)
    }

    fn update(&mut self, name: &str, apply: impl FnOnce(&mut WindowDescriptor)) -> bool {
        let Some(window) = self.windows.iter_mut().find(|w| w.name == name) else {
            return false;
        };
        apply(window);
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{HiddenSurfaces, WindowCategory};

    fn registry() -> WindowRegistry {
        WindowRegistry::new(vec![
            WindowDescriptor::new("a", WindowCategory::Personal, "user"),
            WindowDescriptor::new("b", WindowCategory::Games, "ghost")
                .with_hidden(HiddenSurfaces::ALL),
            WindowDescriptor::new("c", WindowCategory::Internet, "globe"),
        ])
    }

    #[test]
    fn duplicate_seed_names_keep_the_first_descriptor() {
        let registry = WindowRegistry::new(vec![
            WindowDescriptor::new("a", WindowCategory::Personal, "user"),
            WindowDescriptor::new("a", WindowCategory::Games, "ghost"),
        ]);

        assert_eq!(registry.windows().len(), 1);
        assert_eq!(registry.windows()[0].icon_id, "user");
    }

    #[test]
    fn unknown_names_are_silent_noops() {
        let mut registry = registry();
        let before = registry.clone();

        assert!(!registry.set_open("zzz", true));
        assert!(!registry.set_minimize_mode("zzz", Some(MinimizeMode::Enabled)));
        assert!(!registry.set_fullscreen("zzz", true));
        assert!(!registry.set_size("zzz", WindowSize { width: 1, height: 1 }));
        assert!(!registry.set_pos("zzz", WindowPos { x: 1, y: 1 }));
        assert!(!registry.set_small_task_visible("zzz", true));
        assert!(!registry.set_hover_small_task("zzz", true));

        assert_eq!(registry, before);
    }

    #[test]
    fn setters_replace_only_the_targeted_field() {
        let mut registry = registry();
        let before = registry.clone();

        assert!(registry.set_size("b", WindowSize { width: 640, height: 480 }));
        assert!(registry.set_pos("b", WindowPos { x: 10, y: 20 }));
        assert!(registry.set_fullscreen("b", true));

        let mut expected = before.windows[1].clone();
        expected.size = Some(WindowSize { width: 640, height: 480 });
        expected.pos = Some(WindowPos { x: 10, y: 20 });
        expected.fullscreen = true;

        assert_eq!(registry.windows()[0], before.windows[0]);
        assert_eq!(registry.windows()[1], expected);
        assert_eq!(registry.windows()[2], before.windows[2]);
        assert_eq!(registry.active(), None);
    }

    #[test]
    fn setters_keep_list_positions_stable() {
        let mut registry = registry();

        registry.set_open("c", true);
        registry.set_minimize_mode("a", Some(MinimizeMode::Disabled));
        registry.set_small_task_visible("c", true);
        registry.set_hover_small_task("c", true);

        let names: Vec<&str> = registry.windows().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        let c = registry.get("c").unwrap();
        assert!(c.open && c.small_task && c.hover_small_task);
        assert_eq!(registry.get("a").unwrap().minimize, Some(MinimizeMode::Disabled));
    }

    #[test]
    fn minimize_mode_can_be_unset_again() {
        let mut registry = registry();

        registry.set_minimize_mode("a", Some(MinimizeMode::Enabled));
        assert!(registry.get("a").unwrap().is_minimized());
        registry.set_minimize_mode("a", None);
        assert_eq!(registry.get("a").unwrap().minimize, None);
    }
}
