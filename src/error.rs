use thiserror::Error;

use crate::network::Network;

/// Errors surfaced by dyadic conversion, parsing, and the solvers.
///
/// All operations here are pure and deterministic, so none of these are
/// transient: an error aborts the whole solve and retrying cannot help.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum Error {
    /// A non-empty network is not of the form `[a*2^k, (a+1)*2^k)`.
    #[error("network {0} is not a power-of-two block")]
    InvalidBlock(Network),

    /// The block budget must be at least 1.
    #[error("block budget must be at least 1")]
    InvalidBudget,

    /// Malformed textual prefix notation.
    #[error("cannot parse network from {0:?}")]
    Parse(String),
}
