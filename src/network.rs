//! The address/network model.
//!
//! A [`Network`] is a closed-open interval of addresses. It is *valid* when it
//! is empty or exactly a power-of-two block `[a*2^k, (a+1)*2^k)`, in which
//! case it has an alternate [`DyadicBlock`] representation that the solvers
//! use to climb the implicit binary subdivision of the address space.

use std::fmt;

use crate::error::Error;

/// An address in a flat linear address space.
///
/// Wide enough to represent one past the largest address of interest, so that
/// closed-open intervals can express the full space: the whole IPv4 range is
/// `[0, 2^32)`.
pub type Address = u64;

/// A network represented as a closed-open interval `[left, right)`.
///
/// # Invariants
///
/// - `left <= right` for any well-formed network; `left == right` is the
///   empty network.
/// - A network is *valid* iff it is empty or exactly expressible as
///   `[a*2^k, (a+1)*2^k)` — see [`Network::is_valid`].
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Network {
    pub left: Address,
    pub right: Address,
}

impl Network {
    pub const fn new(left: Address, right: Address) -> Self {
        Self { left, right }
    }

    /// The empty network `[0, 0)`.
    pub const fn empty() -> Self {
        Self { left: 0, right: 0 }
    }

    /// Number of addresses covered.
    pub const fn size(&self) -> u64 {
        self.right.saturating_sub(self.left)
    }

    pub const fn is_empty(&self) -> bool {
        self.left == self.right
    }

    /// Reduce to the form `(x, y, k)` with `self == [x*2^k, y*2^k)` for the
    /// largest possible `k`.
    fn reduced(&self) -> (u64, u64, u32) {
        if self.is_empty() {
            return (0, 0, 0);
        }
        let mut x = self.left;
        let mut y = self.right;
        let mut k = 0;
        while x != y && x % 2 == 0 && y % 2 == 0 {
            x >>= 1;
            y >>= 1;
            k += 1;
        }
        (x, y, k)
    }

    /// Check that this network is empty or a power-of-two block.
    pub fn is_valid(&self) -> bool {
        if self.right < self.left {
            return false;
        }
        if self.is_empty() {
            return true;
        }
        let (a, a1, _) = self.reduced();
        a + 1 == a1
    }

    /// Derive the dyadic view of a valid non-empty network.
    ///
    /// Fails with [`Error::InvalidBlock`] when the network is empty or not
    /// power-of-two aligned.
    pub fn to_dyadic(&self) -> Result<DyadicBlock, Error> {
        if self.is_empty() || !self.is_valid() {
            return Err(Error::InvalidBlock(*self));
        }
        let (a, _, k) = self.reduced();
        Ok(DyadicBlock { a, k })
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.left, self.right)
    }
}

/// The dyadic form `(a, k)` of a valid non-empty network `[a*2^k, (a+1)*2^k)`.
///
/// # Invariants
///
/// - `to_network()` round-trips: `n.to_dyadic()?.to_network() == n` for every
///   valid non-empty `n`.
/// - `parent()` is the enclosing block one level up the lattice; two blocks
///   are nested or disjoint, never partially overlapping.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DyadicBlock {
    pub a: u64,
    pub k: u32,
}

impl DyadicBlock {
    /// The enclosing block one level up the dyadic lattice.
    pub const fn parent(&self) -> Self {
        Self {
            a: self.a >> 1,
            k: self.k + 1,
        }
    }

    pub const fn to_network(&self) -> Network {
        Network {
            left: self.a << self.k,
            right: (self.a + 1) << self.k,
        }
    }
}

impl fmt::Display for DyadicBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*2^{}", self.a, self.k)
    }
}
