//! Trait definitions for connection-like collaborators

/// Trait for anything that tracks a connected/disconnected state
///
/// Methods take `&self` so implementors can live in a `static` and be
/// shared by every caller in the process.
pub trait Connection: Send + Sync {
    /// Mark the connection as established
    fn connect(&self);

    /// Mark the connection as closed
    fn disconnect(&self);

    /// Check if the connection is currently established
    fn is_connected(&self) -> bool;

    /// Name of the backing resource, used in log output
    fn resource_name(&self) -> &'static str;
}
