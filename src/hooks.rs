//! Extension hook dispatcher
//!
//! The catalog exposes a single extension point, [`COLOR_LIST_EXTENSION`]:
//! after the base color list is built (ordered and translated), every hook
//! registered for that point runs in registration order and may insert,
//! remove or reorder entries through the mutable reference it receives.

use std::collections::HashMap;

/// Ordered (identifier, label) pairs as consumed by selection widgets
///
/// The empty-string identifier is reserved for the "all colors" sentinel.
pub type ColorList = Vec<(String, String)>;

/// Hook callable mutating an in-progress color list
pub type ListHook = Box<dyn Fn(&mut ColorList) + Send + Sync>;

/// Extension point invoked by [`crate::catalog::ColorCatalog::list`]
pub const COLOR_LIST_EXTENSION: &str = "color-list-extension";

/// Named extension points, each with an ordered list of hooks
#[derive(Default)]
pub struct HookDispatcher {
    hooks: HashMap<String, Vec<ListHook>>,
}

impl HookDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook on the named extension point
    pub fn on<F>(&mut self, point: &str, hook: F)
    where
        F: Fn(&mut ColorList) + Send + Sync + 'static,
    {
        self.hooks
            .entry(point.to_string())
            .or_default()
            .push(Box::new(hook));
    }

    /// Run every hook registered on `point`, in registration order
    ///
    /// Unknown point names dispatch to nobody.
    pub fn dispatch(&self, point: &str, list: &mut ColorList) {
        if let Some(hooks) = self.hooks.get(point) {
            for hook in hooks {
                hook(list);
            }
        }
    }
}

impl std::fmt::Debug for HookDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let points: Vec<(&str, usize)> = self
            .hooks
            .iter()
            .map(|(point, hooks)| (point.as_str(), hooks.len()))
            .collect();
        f.debug_struct("HookDispatcher")
            .field("points", &points)
            .finish()
    }
}
