//! Textual IPv4 prefix notation.
//!
//! Pure format conversion between `a.b.c.d/p` strings and [`Network`]
//! intervals; the solvers themselves only ever see numeric intervals.

use std::net::Ipv4Addr;

use crate::error::Error;
use crate::network::{Address, Network};

/// Parse IPv4 CIDR prefix notation, e.g. `192.168.1.0/24`, into a network.
///
/// The base address must be aligned to the prefix length; otherwise the
/// resulting interval is not a power-of-two block and [`Error::InvalidBlock`]
/// is returned.
pub fn parse_network(s: &str) -> Result<Network, Error> {
    let malformed = || Error::Parse(s.to_string());

    let (addr, prefix) = s.split_once('/').ok_or_else(|| malformed())?;
    let addr: Ipv4Addr = addr.parse().map_err(|_| malformed())?;
    let prefix: u32 = prefix.parse().map_err(|_| malformed())?;
    if prefix > 32 {
        return Err(malformed());
    }

    let left = u32::from(addr) as Address;
    let network = Network::new(left, left + (1u64 << (32 - prefix)));
    if !network.is_valid() {
        return Err(Error::InvalidBlock(network));
    }
    Ok(network)
}

/// Format a valid non-empty network inside the IPv4 space back into CIDR
/// prefix notation.
pub fn to_cidr(network: Network) -> Result<String, Error> {
    let block = network.to_dyadic()?;
    if block.k > 32 || network.right > 1 << 32 {
        return Err(Error::InvalidBlock(network));
    }
    let addr = Ipv4Addr::from(network.left as u32);
    Ok(format!("{}/{}", addr, 32 - block.k))
}
