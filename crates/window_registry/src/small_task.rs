//! Taskbar preview popover ("small task") open/close policy.
//!
//! Two pointer regions drive the popover of each taskbar button:
//!
//! - the button itself: entering it opens the popover of an open window at once, leaving it
//!   requests a close after [`SMALL_TASK_CLOSE_DELAY`];
//! - the surrounding region (button plus popover): the pointer being inside it is tracked as
//!   `hover_small_task`, and leaving it collapses the popover immediately.
//!
//! A delayed close is represented by a [`SmallTaskTicket`]. Any later cancellation bumps the
//! window's generation, so a stale ticket can never close a popover that was reopened or already
//! collapsed. A current ticket still only closes the popover when the pointer is outside the
//! surrounding region at expiry.

use std::{collections::BTreeMap, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{model::WindowName, registry::WindowRegistry};

pub const SMALL_TASK_CLOSE_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SmallTaskTicket {
    pub window: WindowName,
    pub generation: u64,
}

/// Pending-close generations per window.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PreviewDebounce {
    generations: BTreeMap<WindowName, u64>,
}

impl PreviewDebounce {
    /// Issues a ticket for a new delayed close, invalidating any earlier one.
    pub fn issue(&mut self, window: &WindowName) -> SmallTaskTicket {
        let generation = self.bump(window);
        SmallTaskTicket {
            window: window.clone(),
            generation,
        }
    }

    /// Invalidates every outstanding ticket for `window`.
    pub fn cancel(&mut self, window: &WindowName) {
        self.bump(window);
    }

    pub fn is_current(&self, ticket: &SmallTaskTicket) -> bool {
        self.generations.get(&ticket.window) == Some(&ticket.generation)
    }

    fn bump(&mut self, window: &WindowName) -> u64 {
        let generation = self.generations.entry(window.clone()).or_insert(0);
        *generation = generation.wrapping_add(1);
        *generation
    }
}

/// Pointer entered a taskbar button. Returns `true` when the popover was opened.
pub fn button_pointer_enter(
    registry: &mut WindowRegistry,
    debounce: &mut PreviewDebounce,
    name: &WindowName,
) -> bool {
    if !registry.get(name.as_str()).is_some_and(|w| w.open) {
        return false;
    }
    debounce.cancel(name);
    registry.set_small_task_visible(name.as_str(), true)
}

/// Pointer left a taskbar button. Returns the ticket to expire after [`SMALL_TASK_CLOSE_DELAY`].
pub fn button_pointer_leave(
    registry: &WindowRegistry,
    debounce: &mut PreviewDebounce,
    name: &WindowName,
) -> Option<SmallTaskTicket> {
    registry
        .get(name.as_str())
        .filter(|w| w.open)
        .map(|_| debounce.issue(name))
}

pub fn region_pointer_enter(registry: &mut WindowRegistry, name: &WindowName) -> bool {
    registry.set_hover_small_task(name.as_str(), true)
}

/// Pointer left the button-plus-popover region: the popover collapses now and any pending
/// close is cancelled.
pub fn region_pointer_leave(
    registry: &mut WindowRegistry,
    debounce: &mut PreviewDebounce,
    name: &WindowName,
) -> bool {
    if !registry.set_hover_small_task(name.as_str(), false) {
        return false;
    }
    registry.set_small_task_visible(name.as_str(), false);
    debounce.cancel(name);
    true
}

/// Applies an expired delayed close. Returns `true` when the popover was closed.
pub fn expire(
    registry: &mut WindowRegistry,
    debounce: &PreviewDebounce,
    ticket: &SmallTaskTicket,
) -> bool {
    if !debounce.is_current(ticket) {
        return false;
    }
    let still_hovered = registry
        .get(ticket.window.as_str())
        .map(|w| w.hover_small_task)
        .unwrap_or(true);
    if still_hovered {
        return false;
    }
    registry.set_small_task_visible(ticket.window.as_str(), false)
}
