//! Window registry, focus policy, and taskbar popover logic for the desktop shell.
//!
//! Every mutation is addressed by window name and is a no-op for names the registry does not
//! know. [`reduce_desktop`] is the single entry point the UI runtime uses; the free functions and
//! registry methods it builds on are public for hosts that drive the registry directly.

pub mod caption;
pub mod catalog;
pub mod focus;
pub mod functions;
pub mod model;
pub mod paginator;
pub mod reducer;
pub mod registry;
pub mod small_task;
pub mod visibility;

pub use caption::{small_task_caption, SmallTaskCaption};
pub use catalog::{builtin_catalog, Catalog, CatalogEntry, CatalogError, CATALOG_SCHEMA_VERSION};
pub use functions::{FrameFunctions, WindowFunctions};
pub use model::*;
pub use paginator::{DocumentPager, PageButton};
pub use reducer::{reduce_desktop, DesktopAction, DesktopState, RuntimeEffect};
pub use registry::WindowRegistry;
pub use small_task::{PreviewDebounce, SmallTaskTicket, SMALL_TASK_CLOSE_DELAY};
pub use visibility::StartMenuGroup;
