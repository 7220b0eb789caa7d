//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use std::{collections::HashMap, time::Duration};

use leptos::{leptos_dom::helpers::TimeoutHandle, *};
use window_registry::{DesktopAction, RuntimeEffect, SmallTaskTicket, WindowName};

use crate::{components::focus_window_frame, runtime_context::DesktopRuntimeContext};

/// Timeout handles for scheduled popover closes, one per window, keyed with the ticket
/// generation they will hand back.
#[derive(Debug, Default)]
pub struct PreviewTimers {
    by_window: HashMap<WindowName, (u64, TimeoutHandle)>,
}

impl PreviewTimers {
    fn replace(
        &mut self,
        ticket: &SmallTaskTicket,
        handle: TimeoutHandle,
    ) -> Option<TimeoutHandle> {
        self.by_window
            .insert(ticket.window.clone(), (ticket.generation, handle))
            .map(|(_, previous)| previous)
    }

    fn take(&mut self, window: &WindowName) -> Option<TimeoutHandle> {
        self.by_window.remove(window).map(|(_, handle)| handle)
    }

    /// Forgets the handle of a timer that has fired. A newer timer for the same window is kept.
    fn take_fired(&mut self, ticket: &SmallTaskTicket) -> bool {
        match self.by_window.get(&ticket.window) {
            Some((generation, _)) if *generation == ticket.generation => {
                self.by_window.remove(&ticket.window);
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.by_window.len()
    }
}

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the current queue before processing so nested dispatches enqueue a fresh batch instead
    // of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(runtime, effect);
        }
    });
}

fn run_runtime_effect(runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::ScheduleSmallTaskClose { ticket, delay } => {
            schedule_small_task_close(runtime, ticket, delay)
        }
        RuntimeEffect::CancelSmallTaskClose(window) => {
            let pending = runtime
                .preview_timers
                .try_update_value(|t| t.take(&window))
                .flatten();
            if let Some(handle) = pending {
                handle.clear();
            }
        }
        RuntimeEffect::InvokeFrameMinimize(window) => {
            if !runtime.frames.get_value().invoke_minimize(window.as_str()) {
                logging::warn!("no frame attached to minimize `{window}`");
            }
        }
        RuntimeEffect::InvokeFrameClose(window) => {
            if !runtime.frames.get_value().invoke_close(window.as_str()) {
                logging::warn!("no frame attached to close `{window}`");
            }
        }
        RuntimeEffect::FocusWindowInput(window) => focus_window_frame(&window),
    }
}

fn schedule_small_task_close(
    runtime: DesktopRuntimeContext,
    ticket: SmallTaskTicket,
    delay: Duration,
) {
    let window = ticket.window.clone();
    let key = ticket.clone();
    let scheduled = set_timeout_with_handle(
        move || {
            runtime.preview_timers.update_value(|timers| {
                timers.take_fired(&ticket);
            });
            runtime.dispatch_action(DesktopAction::ExpireSmallTask { ticket });
        },
        delay,
    );
    match scheduled {
        Ok(handle) => {
            let replaced = runtime
                .preview_timers
                .try_update_value(|t| t.replace(&key, handle))
                .flatten();
            if let Some(previous) = replaced {
                previous.clear();
            }
        }
        Err(err) => logging::warn!("failed to schedule popover close for `{window}`: {err:?}"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ticket(window: &str, generation: u64) -> SmallTaskTicket {
        SmallTaskTicket {
            window: WindowName::new(window),
            generation,
        }
    }

    #[test]
    fn fired_timers_are_forgotten() {
        let mut timers = PreviewTimers::default();
        timers.replace(&ticket("blog", 1), TimeoutHandle(7));
        timers.replace(&ticket("editor", 1), TimeoutHandle(8));

        assert!(timers.take_fired(&ticket("blog", 1)));

        assert_eq!(timers.len(), 1);
        assert!(timers.take(&WindowName::new("blog")).is_none());
    }

    #[test]
    fn a_stale_firing_keeps_the_newer_timer() {
        let mut timers = PreviewTimers::default();
        timers.replace(&ticket("blog", 1), TimeoutHandle(7));
        let previous = timers.replace(&ticket("blog", 2), TimeoutHandle(9));
        assert_eq!(previous, Some(TimeoutHandle(7)));

        assert!(!timers.take_fired(&ticket("blog", 1)));

        assert_eq!(timers.take(&WindowName::new("blog")), Some(TimeoutHandle(9)));
        assert_eq!(timers.len(), 0);
    }
}
