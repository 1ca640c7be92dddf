//! General interval arithmetic used to verify candidate covers.
//!
//! Unlike [`Network`], an [`Interval`] carries no alignment requirement, so
//! this module can measure and compare arbitrary unions of address ranges.
//! It is a diagnostic interface: the solvers never call it.

use crate::network::{Address, Network};

/// A closed-open address interval with no alignment requirement.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Interval {
    pub left: Address,
    pub right: Address,
}

impl Interval {
    pub const fn new(left: Address, right: Address) -> Self {
        Self { left, right }
    }

    pub const fn size(&self) -> u64 {
        self.right.saturating_sub(self.left)
    }

    pub const fn is_empty(&self) -> bool {
        self.left == self.right
    }
}

impl From<Network> for Interval {
    fn from(net: Network) -> Self {
        Self {
            left: net.left,
            right: net.right,
        }
    }
}

/// View a list of networks as plain intervals.
pub fn intervals(networks: &[Network]) -> Vec<Interval> {
    networks.iter().copied().map(Interval::from).collect()
}

/// Merge an arbitrary interval set into the minimal sorted sequence of
/// disjoint intervals with the same union.
///
/// Overlapping or adjacent intervals are merged by extending the right edge.
/// Note the contrast with [`normalize`](crate::normalize::normalize), which
/// *drops* entries overlapping the last kept one.
pub fn canonical(input: &[Interval]) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = input.iter().copied().filter(|iv| !iv.is_empty()).collect();
    sorted.sort_by(|a, b| a.left.cmp(&b.left).then(b.right.cmp(&a.right)));

    let mut out: Vec<Interval> = Vec::with_capacity(sorted.len());
    for iv in sorted {
        match out.last_mut() {
            Some(last) if iv.left <= last.right => {
                if iv.right > last.right {
                    last.right = iv.right;
                }
            }
            _ => out.push(iv),
        }
    }
    out
}

/// Check that every interval in `xs` is covered by the union of `ys`.
pub fn subset(xs: &[Interval], ys: &[Interval]) -> bool {
    let canon = canonical(ys);
    xs.iter().filter(|iv| !iv.is_empty()).all(|iv| {
        // The only candidate is the rightmost interval starting at or
        // before iv.left: canonical intervals are disjoint and sorted.
        let idx = canon.partition_point(|c| c.left <= iv.left);
        idx > 0 && canon[idx - 1].right >= iv.right
    })
}

/// Total address space covered by the union of `input`.
pub fn footprint_size(input: &[Interval]) -> u64 {
    canonical(input).iter().map(Interval::size).sum()
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn iv(left: Address, right: Address) -> Interval {
        Interval::new(left, right)
    }

    #[test]
    fn test_canonical() {
        let cases: &[(&str, &[Interval], &[Interval])] = &[
            ("empty", &[], &[]),
            ("singleton", &[iv(1, 2)], &[iv(1, 2)]),
            ("reverse", &[iv(4, 5), iv(1, 2)], &[iv(1, 2), iv(4, 5)]),
            ("adjacent", &[iv(1, 2), iv(2, 3)], &[iv(1, 3)]),
            ("adjacent_reverse", &[iv(2, 3), iv(1, 2)], &[iv(1, 3)]),
            ("contains", &[iv(1, 3), iv(1, 2)], &[iv(1, 3)]),
            ("contains_reverse", &[iv(1, 2), iv(1, 3)], &[iv(1, 3)]),
            ("overlaps", &[iv(1, 3), iv(2, 4)], &[iv(1, 4)]),
            ("overlaps_reverse", &[iv(2, 4), iv(1, 3)], &[iv(1, 4)]),
            (
                "three",
                &[iv(2, 4), iv(1, 3), iv(5, 8)],
                &[iv(1, 4), iv(5, 8)],
            ),
            (
                "overlaps_overlaps",
                &[iv(2, 4), iv(1, 3), iv(6, 8), iv(5, 7)],
                &[iv(1, 4), iv(5, 8)],
            ),
            (
                "overlaps_merge",
                &[iv(2, 4), iv(1, 3), iv(6, 8), iv(4, 7)],
                &[iv(1, 8)],
            ),
        ];
        for (name, input, expected) in cases {
            assert_eq!(&canonical(input), expected, "case {}", name);
        }
    }

    #[test]
    fn test_subset() {
        let cases: &[(&str, &[Interval], &[Interval], bool)] = &[
            ("reflexive_0", &[], &[], true),
            ("empty1", &[], &[iv(1, 2)], true),
            ("empty2", &[iv(1, 2)], &[], false),
            ("reflexive_1", &[iv(1, 2)], &[iv(1, 2)], true),
            (
                "reflexive_2",
                &[iv(1, 2), iv(3, 4)],
                &[iv(1, 2), iv(3, 4)],
                true,
            ),
            (
                "reflexive_2_reverse",
                &[iv(3, 4), iv(1, 2)],
                &[iv(1, 2), iv(3, 4)],
                true,
            ),
            ("hole2", &[iv(2, 5)], &[iv(1, 3), iv(4, 6)], false),
            ("adjacent1", &[iv(2, 4), iv(4, 5)], &[iv(1, 6)], true),
            ("overlap2", &[iv(2, 5)], &[iv(1, 5), iv(4, 6)], true),
            (
                "hole1_hole2",
                &[iv(2, 3), iv(6, 7)],
                &[iv(1, 4), iv(5, 8)],
                true,
            ),
            ("less12", &[iv(1, 2)], &[iv(2, 4), iv(5, 8)], false),
        ];
        for (name, xs, ys, expected) in cases {
            assert_eq!(subset(xs, ys), *expected, "case {}", name);
        }
    }

    #[test]
    fn test_footprint_size() {
        let cases: &[(&str, &[Interval], u64)] = &[
            ("empty0", &[], 0),
            ("empty1", &[iv(1, 1)], 0),
            ("empty2", &[iv(1, 1), iv(2, 2)], 0),
            ("two", &[iv(1, 4), iv(6, 7)], 4),
            ("overlap", &[iv(1, 4), iv(3, 7)], 6),
        ];
        for (name, input, expected) in cases {
            assert_eq!(footprint_size(input), *expected, "case {}", name);
        }
    }

    #[test]
    fn test_interval_slice() {
        let input = [Network::new(1, 2), Network::new(3, 4)];
        assert_eq!(intervals(&input), vec![iv(1, 2), iv(3, 4)]);
    }
}
