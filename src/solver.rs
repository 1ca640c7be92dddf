//! The solver seam.
//!
//! Two interchangeable implementations compute the provably minimal-footprint
//! cover: the dynamic-programming table solver ([`dp`](crate::dp)) and the
//! divide-and-conquer tree solver ([`tree`](crate::tree)). They satisfy the
//! same pre- and postconditions and always agree on the footprint, though not
//! necessarily on block boundaries when several covers are optimal.

use crate::error::Error;
use crate::network::Network;

/// A bounded-cover solver.
pub trait Solver {
    /// Compute an ordered cover of `input` with at most `m` blocks of
    /// minimal total footprint.
    ///
    /// Every input must be a valid power-of-two block; `m` must be at least
    /// 1 and may exceed the number of inputs.
    fn solve(&self, input: &[Network], m: usize) -> Result<Vec<Network>, Error>;
}

/// The dynamic-programming table solver.
#[derive(Debug, Default, Copy, Clone)]
pub struct DpSolver;

impl Solver for DpSolver {
    fn solve(&self, input: &[Network], m: usize) -> Result<Vec<Network>, Error> {
        crate::dp::solve(input, m)
    }
}

/// The divide-and-conquer tree solver.
#[derive(Debug, Default, Copy, Clone)]
pub struct TreeSolver;

impl Solver for TreeSolver {
    fn solve(&self, input: &[Network], m: usize) -> Result<Vec<Network>, Error> {
        crate::tree::solve(input, m)
    }
}
