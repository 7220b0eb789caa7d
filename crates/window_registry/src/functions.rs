//! Minimize/close callbacks supplied by window frames.
//!
//! The registry only records intent. The frame that renders a window owns the actual minimize
//! and close behavior and attaches it here; the runtime resolves
//! [`crate::RuntimeEffect::InvokeFrameMinimize`] and [`crate::RuntimeEffect::InvokeFrameClose`]
//! against this table.

use std::{collections::HashMap, fmt, rc::Rc};

use crate::model::WindowName;

#[derive(Clone)]
pub struct WindowFunctions {
    minimize: Rc<dyn Fn()>,
    close: Rc<dyn Fn()>,
}

impl WindowFunctions {
    pub fn new(minimize: impl Fn() + 'static, close: impl Fn() + 'static) -> Self {
        Self {
            minimize: Rc::new(minimize),
            close: Rc::new(close),
        }
    }

    pub fn minimize(&self) {
        (self.minimize)();
    }

    pub fn close(&self) {
        (self.close)();
    }
}

impl fmt::Debug for WindowFunctions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowFunctions").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FrameFunctions {
    by_window: HashMap<WindowName, WindowFunctions>,
}

impl FrameFunctions {
    /// Attaches callbacks for `window`, returning the ones they replace.
    pub fn attach(
        &mut self,
        window: WindowName,
        functions: WindowFunctions,
    ) -> Option<WindowFunctions> {
        self.by_window.insert(window, functions)
    }

    pub fn detach(&mut self, window: &str) -> Option<WindowFunctions> {
        self.by_window.remove(window)
    }

    pub fn get(&self, window: &str) -> Option<&WindowFunctions> {
        self.by_window.get(window)
    }

    /// Runs the frame's minimize callback. `false` when no frame is attached.
    pub fn invoke_minimize(&self, window: &str) -> bool {
        self.get(window).map(WindowFunctions::minimize).is_some()
    }

    /// Runs the frame's close callback. `false` when no frame is attached.
    pub fn invoke_close(&self, window: &str) -> bool {
        self.get(window).map(WindowFunctions::close).is_some()
    }
}
