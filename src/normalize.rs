//! Input normalization for the solvers.

use crate::network::Network;

/// Sort and reduce raw input networks into the ordered working list that both
/// solvers index.
///
/// Entries are stable-sorted by `(left asc, right desc)`; an entry is kept
/// only if the previously kept entry ends at or before it starts. An entry
/// overlapping the last kept one is dropped outright, even when its right
/// edge extends further — this is a reduction rule, not a union merge (see
/// [`canonical`](crate::interval::canonical) for the latter). Zero-size
/// networks cover no addresses and are discarded up front.
pub fn normalize(input: &[Network]) -> Vec<Network> {
    let mut sorted: Vec<Network> = input.iter().copied().filter(|n| !n.is_empty()).collect();
    sorted.sort_by(|a, b| a.left.cmp(&b.left).then(b.right.cmp(&a.right)));

    let mut out: Vec<Network> = Vec::with_capacity(sorted.len());
    for net in sorted {
        match out.last() {
            Some(last) if net.left < last.right => {} // overlaps the last kept entry
            _ => out.push(net),
        }
    }
    out
}
