use thiserror::Error;

/// Errors raised by the store accessor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The accessor was called by code not nested under a `TimersProvider`.
    /// This is a wiring mistake, not a runtime condition to recover from.
    #[error("store accessed outside provider scope")]
    OutsideProvider,
}
