use std::collections::HashSet;
use std::sync::RwLock;

use tracing::debug;

use crate::application::interfaces::view_cache::ListViewCache;

/// In-process implementation of the list-view invalidation signal. A path
/// stays marked until the rendering side takes the flag.
#[derive(Debug, Default)]
pub struct InProcessViewCache {
    stale_paths: RwLock<HashSet<String>>,
}

impl InProcessViewCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListViewCache for InProcessViewCache {
    fn mark_stale(&self, path: &str) {
        debug!(path, "view_cache: marking path stale");
        self.stale_paths
            .write()
            .expect("view cache lock poisoned")
            .insert(path.to_string());
    }

    fn take_stale(&self, path: &str) -> bool {
        self.stale_paths
            .write()
            .expect("view cache lock poisoned")
            .remove(path)
    }
}
