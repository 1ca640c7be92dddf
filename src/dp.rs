//! Dynamic-programming table solver.
//!
//! Fills an `M x N` table where cell `(m, k)` holds the minimal footprint of
//! a cover of the first `k + 1` working-list entries using at most `m + 1`
//! blocks, together with pointers to the subsolution it extends. The cover
//! itself is recovered afterwards by a pure walk over the finished table.

use log::debug;

use crate::error::Error;
use crate::least::LeastBlockTable;
use crate::network::Network;
use crate::normalize::normalize;

/// One cell of the dynamic programming table.
#[derive(Debug, Default, Copy, Clone)]
struct TableCell {
    /// Footprint of a minimal cover for this cell's entry/budget prefix.
    min_size: u64,
    /// Coordinates of the subsolution this cell extends.
    next_row: usize,
    next_col: usize,
    /// Rightmost block of the cover recorded at this cell.
    network: Network,
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
    debug!("dp solve: n = {}, m = {}", input.len(), m);

    let least = LeastBlockTable::build(&input)?;
    let table = compute_table(&least, input.len(), m);
    Ok(backtrack(&table, m, input.len()))
}

fn compute_table(least: &LeastBlockTable, n: usize, m: usize) -> Vec<Vec<TableCell>> {
    let mut table: Vec<Vec<TableCell>> = Vec::with_capacity(m);
    for row in 0..m {
        let mut cells = Vec::with_capacity(n);
        for col in 0..n {
            cells.push(compute_cell(&table, least, row, col));
        }
        table.push(cells);
    }
    table
}

fn compute_cell(
    table: &[Vec<TableCell>],
    least: &LeastBlockTable,
    row: usize,
    col: usize,
) -> TableCell {
    if row == 0 {
        let network = least.get(0, col + 1);
        return TableCell {
            min_size: network.size(),
            network,
            ..TableCell::default()
        };
    }

    // Split after entry `n`: one block covers (n, col] and the best cover
    // with one less budget handles the prefix. `n == col` leaves the budget
    // level unused (empty placeholder block). Ties keep the first minimizer.
    let mut best = TableCell {
        min_size: u64::MAX,
        ..TableCell::default()
    };
    for n in 0..=col {
        let network = least.get(n + 1, col + 1);
        let candidate = network.size() + table[row - 1][n].min_size;
        if candidate < best.min_size {
            best = TableCell {
                min_size: candidate,
                next_row: row - 1,
                next_col: n,
                network,
            };
        }
    }
    best
}

/// Recover the cover from the finished table, walking subsolution pointers
/// from `(m - 1, n - 1)` and skipping zero-size placeholder cells.
fn backtrack(table: &[Vec<TableCell>], m: usize, n: usize) -> Vec<Network> {
    let mut output = Vec::with_capacity(m);
    let (mut row, mut col) = (m - 1, n - 1);
    loop {
        let cell = table[row][col];
        if !cell.network.is_empty() {
            output.push(cell.network);
        }
        if row == 0 {
            break;
        }
        row = cell.next_row;
        col = cell.next_col;
    }
    output.reverse();
    output
}
