//! Divide-and-conquer tree solver.
//!
//! Builds a binary tree over the working list by recursive midpoint splits,
//! fills a budget-indexed array of minimal footprints per node bottom-up, and
//! recovers the cover by a symmetric top-down walk. Computes the same minimal
//! footprint as [`dp`](crate::dp) for any `(input, m)`, though it may pick
//! different block boundaries when several covers are optimal.

use log::debug;

use crate::error::Error;
use crate::least::LeastBlockTable;
use crate::network::Network;
use crate::normalize::normalize;

/// A node covering a contiguous range of the working list.
#[derive(Debug)]
struct TreeNode {
    /// Least block covering this node's whole range.
    network: Network,
    /// `min_size[b]` is the minimal footprint using at most `b + 1` blocks.
    /// Sized `max(0, m - depth)`: deeper nodes see fewer budget levels.
    min_size: Vec<u64>,
    /// Blocks assigned to the left child in the minimal cover of budget
    /// `b + 1`; 0 means the range is not split at this budget.
    left_solution: Vec<usize>,
    children: Children,
}

#[derive(Debug)]
enum Children {
    Leaf,
    Internal {
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

/// Compute a minimal-footprint cover of `input` using at most `m` blocks.
///
/// The result is ordered by address and may use fewer than `m` blocks.
pub fn solve(input: &[Network], m: usize) -> Result<Vec<Network>, Error> {
    if m == 0 {
        return Err(Error::InvalidBudget);
    }

    let input = normalize(input);
    if input.is_empty() {
        return Ok(Vec::new());
    }
    debug!("tree solve: n = {}, m = {}", input.len(), m);

    let least = LeastBlockTable::build(&input)?;
    let mut root = build(&input, &least, 0, input.len(), 0, m);
    fill(&mut root);

    let mut output = Vec::with_capacity(m);
    backtrack(&root, m, &mut output);
    Ok(output)
}

/// Build the tree over entries `[i, j)`, `j > i`.
fn build(
    input: &[Network],
    least: &LeastBlockTable,
    i: usize,
    j: usize,
    depth: usize,
    m: usize,
) -> TreeNode {
    let levels = m.saturating_sub(depth);
    let network = least.get(i, j);

    let children = if j - i > 1 {
        // First entry at or past the midpoint of this node's own block. The
        // block is the dyadic LCA of the range, so each half holds at least
        // one entry: a valid block never straddles its parent's midpoint.
        let mid_addr = network.left + network.size() / 2;
        let split = i + input[i..j].partition_point(|n| n.left < mid_addr);
        Children::Internal {
            left: Box::new(build(input, least, i, split, depth + 1, m)),
            right: Box::new(build(input, least, split, j, depth + 1, m)),
        }
    } else {
        Children::Leaf
    };

    TreeNode {
        network,
        min_size: vec![0; levels],
        left_solution: vec![0; levels],
        children,
    }
}

/// Fill budget arrays bottom-up, children before parents.
///
/// Children are filled only when this node holds more than one budget level;
/// a walk through a single-level node never descends.
fn fill(node: &mut TreeNode) {
    if node.min_size.len() > 1 {
        if let Children::Internal { left, right } = &mut node.children {
            fill(left);
            fill(right);
        }
    }

    node.min_size[0] = node.network.size();

    for b in 1..node.min_size.len() {
        node.min_size[b] = node.min_size[b - 1];
        node.left_solution[b] = 0;

        let Children::Internal { left, right } = &node.children else {
            continue;
        };
        for i in 1..=b {
            if i - 1 < left.min_size.len() && b - i < right.min_size.len() {
                let candidate = left.min_size[i - 1] + right.min_size[b - i];
                if candidate < node.min_size[b] {
                    node.min_size[b] = candidate;
                    node.left_solution[b] = i;
                }
            }
        }
    }
}

/// Emit the recorded cover for `budget` blocks, left to right.
fn backtrack(node: &TreeNode, budget: usize, output: &mut Vec<Network>) {
    if budget == 1 {
        output.push(node.network);
        return;
    }

    let split = node.left_solution[budget - 1];
    match &node.children {
        Children::Internal { left, right } if split > 0 => {
            backtrack(left, split, output);
            backtrack(right, budget - split, output);
        }
        // Not split at this budget: the cover is the one recorded for one
        // block fewer.
        _ => backtrack(node, budget - 1, output),
    }
}
