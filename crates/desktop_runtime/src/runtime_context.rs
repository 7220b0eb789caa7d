//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, the frame callback
//! table, and the pending popover timers. UI composition stays in [`crate::components`].

use leptos::*;
use window_registry::{
    builtin_catalog, reduce_desktop, DesktopAction, DesktopState, FrameFunctions, RuntimeEffect,
};

use crate::effect_executor::{self, PreviewTimers};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Minimize/close callbacks attached by mounted window frames.
    pub frames: StoredValue<FrameFunctions>,
    /// Delayed popover closes that have not fired yet.
    pub preview_timers: StoredValue<PreviewTimers>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn initial_state() -> DesktopState {
    match builtin_catalog() {
        Ok(catalog) => DesktopState::from_catalog(&catalog),
        Err(err) => {
            logging::warn!("window catalog failed to load, starting empty: {err}");
            DesktopState::default()
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components, seeded from the built-in catalog.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let state = create_rw_signal(initial_state());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let frames = store_value(FrameFunctions::default());
    let preview_timers = store_value(PreviewTimers::default());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let previous = desktop.clone();

        let new_effects = reduce_desktop(&mut desktop, action);
        if desktop != previous {
            state.set(desktop);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DesktopRuntimeContext {
        state,
        effects,
        frames,
        preview_timers,
        dispatch,
    };

    provide_context(runtime);

    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
