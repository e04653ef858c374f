use thiserror::Error;

/// Errors reported by fallible table and map operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The key is not present and the caller supplied no default.
    #[error("key not found")]
    KeyNotFound,
    /// A probe walked every slot without reaching an empty slot or the key.
    ///
    /// The eager resize performed before each insert keeps at least one empty
    /// slot available, so seeing this means the table's bookkeeping is broken.
    #[error("probe sequence exhausted all {capacity} slots; table invariant broken")]
    InvariantViolation {
        /// Slot count of the table when the probe gave up.
        capacity: usize,
    },
}
