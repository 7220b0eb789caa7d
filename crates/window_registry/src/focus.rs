//! Focus and z-order policy.
//!
//! Focusing a window gives it `order = 0` and bumps every other descriptor's order by one, so
//! orders form a recency ranking that only ever grows for windows that are not being focused.
//! Stacking consumers should use [`WindowRegistry::stacking_order`] or
//! [`WindowRegistry::z_index_for`] rather than raw order values.

use crate::{
    model::{ActiveTarget, WindowDescriptor},
    registry::WindowRegistry,
};

impl WindowRegistry {
    /// Moves focus to `target`, or clears focus when `target` is `None`.
    ///
    /// Returns `false` without touching anything when the target names an unknown window.
    /// Clearing focus never changes any descriptor's order.
    pub fn set_active_window(&mut self, target: Option<ActiveTarget>) -> bool {
        let Some(target) = target else {
            self.active = None;
            return true;
        };

        let focused_name = match &target {
            ActiveTarget::Window(name) => {
                if !self.contains(name.as_str()) {
                    return false;
                }
                Some(name.clone())
            }
            ActiveTarget::StartMenu => None,
        };

        let previous_icon = self
            .active_window()
            .filter(|previous| Some(*previous) != focused_name.as_ref())
            .and_then(|previous| self.get(previous.as_str()))
            .map(|previous| previous.icon_id.clone());

        for window in &mut self.windows {
            if Some(&window.name) == focused_name.as_ref() {
                window.order = 0;
            } else {
                window.order = window.order.saturating_add(1);
            }
        }

        if focused_name.is_none() || previous_icon.is_some() {
            self.active_window_icon = previous_icon;
        }
        self.active = Some(target);
        true
    }

    /// Opens and focuses a window as one step.
    pub fn open_and_focus(&mut self, name: &str) -> bool {
        if !self.set_open(name, true) {
            return false;
        }
        self.set_active_window(Some(ActiveTarget::window(name)))
    }

    /// Opens the start menu when it is closed, otherwise clears focus.
    pub fn toggle_start_menu(&mut self) {
        if self.start_menu_open() {
            self.set_active_window(None);
        } else {
            self.set_active_window(Some(ActiveTarget::StartMenu));
        }
    }

    /// Open windows from bottom to top: highest order first, ties broken by list position.
    pub fn stacking_order(&self) -> Vec<&WindowDescriptor> {
        let mut open: Vec<(usize, &WindowDescriptor)> = self
            .windows
            .iter()
            .enumerate()
            .filter(|(_, w)| w.open)
            .collect();
        open.sort_by(|(a_idx, a), (b_idx, b)| b.order.cmp(&a.order).then(a_idx.cmp(b_idx)));
        open.into_iter().map(|(_, w)| w).collect()
    }

    /// 1-based stacking rank of an open window; `None` for closed or unknown windows.
    pub fn z_index_for(&self, name: &str) -> Option<u32> {
        self.stacking_order()
            .iter()
            .position(|w| w.name == name)
            .map(|idx| idx as u32 + 1)
    }
}
