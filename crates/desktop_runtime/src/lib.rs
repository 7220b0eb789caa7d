pub mod components;
mod effect_executor;
mod runtime_context;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use window_registry::{reduce_desktop, DesktopAction, DesktopState, RuntimeEffect};
