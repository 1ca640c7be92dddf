//! # boundnet: Bounded Network Aggregation in Rust
//!
//! **`boundnet`** collapses many fine-grained address ranges (e.g. firewall
//! rule prefixes) into at most `M` power-of-two-aligned blocks whose union
//! covers every input, while minimizing the total covered address space.
//!
//! ## The problem
//!
//! Given disjoint CIDR-style networks and a hard block budget `M`, find a
//! cover of at most `M` valid blocks with the smallest possible *footprint*
//! (total addresses covered). Valid blocks form a dyadic lattice --- every
//! block is `[a*2^k, (a+1)*2^k)` --- so two blocks are always nested or
//! disjoint, and the smallest block covering a span of inputs is their lowest
//! common ancestor in the implicit binary subdivision of the address space.
//!
//! ## Key Features
//!
//! - **Two provably minimal solvers**: a dynamic-programming table solver and
//!   a divide-and-conquer tree solver behind one [`Solver`][crate::solver::Solver]
//!   trait. Both compute the globally minimal footprint for any budget; covers
//!   may differ only when several are optimal.
//! - **Pure per-call state**: each solve owns its working list, least-block
//!   table, and DP table or tree; concurrent solves never interact.
//! - **Verification oracle**: general interval merging, subset testing, and
//!   footprint measurement ([`interval`]) for independently checking any
//!   candidate cover --- deliberately kept out of the solvers' hot path.
//!
//! ## Basic Usage
//!
//! ```rust
//! use boundnet::network::Network;
//! use boundnet::solver::{DpSolver, Solver};
//!
//! let input = [
//!     Network::new(0, 1),
//!     Network::new(1, 2),
//!     Network::new(32, 36),
//!     Network::new(60, 64),
//! ];
//!
//! // Collapse four blocks into at most two:
//! let cover = DpSolver.solve(&input, 2).unwrap();
//! assert_eq!(cover, vec![Network::new(0, 2), Network::new(32, 64)]);
//! ```
//!
//! ## Core Components
//!
//! - **[`network`]**: addresses, closed-open networks, and the dyadic block
//!   view with its round-trip invariant.
//! - **[`normalize`]**: reduces raw input to the ordered working list both
//!   solvers index.
//! - **[`least`]**: least covering blocks, precomputed for all spans.
//! - **[`dp`]** and **[`tree`]**: the two solvers; **[`solver`]** is the seam.
//! - **[`interval`]**: the verification oracle.
//! - **[`parse`]**: IPv4 CIDR prefix notation, for tools and tests.

pub mod dp;
pub mod error;
pub mod interval;
pub mod least;
pub mod network;
pub mod normalize;
pub mod parse;
pub mod solver;
pub mod tree;
