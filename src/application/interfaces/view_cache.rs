use mockall::automock;

/// Invalidation port for pre-rendered list views. The pipeline only signals
/// staleness; it never owns cached data. The rendering side takes the flag
/// when it recomputes the view.
#[automock]
pub trait ListViewCache: Send + Sync {
    fn mark_stale(&self, path: &str);
    /// Clears and returns the stale flag for a path.
    fn take_stale(&self, path: &str) -> bool;
}
