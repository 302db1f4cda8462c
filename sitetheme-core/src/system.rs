/// Read-only view of the operating system's dark-mode preference.
pub trait SystemTheme {
    /// Subscription handle; dropping it stops further callbacks.
    type Watch;

    fn prefers_dark(&self) -> bool;

    /// Call `on_change` with the new preference each time it flips.
    ///
    /// Returns `None` when the host cannot report changes.
    fn watch(&self, on_change: Box<dyn Fn(bool)>) -> Option<Self::Watch>;
}
