//! Least covering blocks over contiguous spans of the working list.

use log::debug;

use crate::error::Error;
use crate::network::Network;

/// Compute the smallest valid block covering working-list entries `[i, j)`.
///
/// Both endpoints are lifted to their dyadic form and climbed up the lattice
/// until they meet; the meeting point is the lowest common ancestor block in
/// the implicit binary subdivision of the address space. `i == j` yields the
/// empty network.
///
/// Every entry must be a valid non-empty block; otherwise the dyadic
/// conversion fails with [`Error::InvalidBlock`].
pub fn least_block(input: &[Network], i: usize, j: usize) -> Result<Network, Error> {
    if i == j {
        return Ok(Network::empty());
    }

    let mut left = input[i].to_dyadic()?;
    let mut right = input[j - 1].to_dyadic()?;
    while left != right {
        if right.k < left.k {
            right = right.parent();
        } else if left.k < right.k {
            left = left.parent();
        } else if left.a < right.a {
            right = right.parent();
        } else {
            left = left.parent();
        }
    }
    Ok(left.to_network())
}

/// Triangular table of [`least_block`] over all index pairs of one working
/// list.
///
/// Both solvers probe spans densely, so all `O(N^2)` pairs are computed up
/// front. The table is built fresh inside each solve and dropped with it.
pub struct LeastBlockTable {
    // rows[j][i] covers entries [i, j), 0 <= i <= j <= n.
    rows: Vec<Vec<Network>>,
}

impl LeastBlockTable {
    /// Precompute the least block of every contiguous span of `input`.
    pub fn build(input: &[Network]) -> Result<Self, Error> {
        debug!("building least-block table for {} entries", input.len());

        let mut rows = Vec::with_capacity(input.len() + 1);
        for j in 0..=input.len() {
            let mut row = Vec::with_capacity(j + 1);
            for i in 0..=j {
                row.push(least_block(input, i, j)?);
            }
            rows.push(row);
        }
        Ok(Self { rows })
    }

    /// The least block covering entries `[i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Network {
        self.rows[j][i]
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn net(left: u64, right: u64) -> Network {
        Network::new(left, right)
    }

    #[test]
    fn test_empty_span() {
        let input = [net(0, 1), net(1, 2)];
        assert_eq!(least_block(&input, 1, 1).unwrap(), Network::empty());
    }

    #[test]
    fn test_single_entry() {
        let input = [net(0, 1), net(32, 36)];
        assert_eq!(least_block(&input, 1, 2).unwrap(), net(32, 36));
    }

    #[test]
    fn test_siblings() {
        let input = [net(0, 1), net(1, 2)];
        assert_eq!(least_block(&input, 0, 2).unwrap(), net(0, 2));
    }

    #[test]
    fn test_spans() {
        let input = [net(0, 1), net(1, 2), net(32, 36), net(60, 64)];
        assert_eq!(least_block(&input, 0, 4).unwrap(), net(0, 64));
        assert_eq!(least_block(&input, 2, 4).unwrap(), net(32, 64));
        assert_eq!(least_block(&input, 0, 2).unwrap(), net(0, 2));
    }

    #[test]
    fn test_distant_blocks() {
        let input = [net(100 << 24, 101 << 24), net(200 << 24, 201 << 24)];
        assert_eq!(least_block(&input, 0, 2).unwrap(), net(0, 1 << 32));
    }

    #[test]
    fn test_invalid_entry() {
        let input = [net(0, 1), net(8, 11)];
        assert_eq!(
            least_block(&input, 0, 2),
            Err(Error::InvalidBlock(net(8, 11)))
        );
        assert!(LeastBlockTable::build(&input).is_err());
    }

    #[test]
    fn test_table() {
        let input = [net(0, 1), net(1, 2), net(32, 36), net(60, 64)];
        let table = LeastBlockTable::build(&input).unwrap();
        for j in 0..=input.len() {
            for i in 0..=j {
                assert_eq!(table.get(i, j), least_block(&input, i, j).unwrap());
            }
        }
        assert_eq!(table.get(0, 4), net(0, 64));
        assert_eq!(table.get(2, 2), Network::empty());
    }
}
