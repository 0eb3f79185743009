//! Node topology: IP per slot and the port pair each node listens on.

use std::net::IpAddr;

use shared_types::{LOOPBACK_IP, MAX_NODE_COUNT};
use tracing::debug;

use crate::error::TopologyError;

/// Longest hostname accepted (RFC 1123, without trailing dot).
const MAX_HOSTNAME_LEN: usize = 253;

/// Longest single DNS label.
const MAX_LABEL_LEN: usize = 63;

/// Where one node listens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeEndpoint {
    /// 1-based node slot.
    pub index: usize,
    pub ip: String,
    pub node_port: u16,
    pub client_port: u16,
}

/// Endpoints of every node, ascending by slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topology {
    pub endpoints: Vec<NodeEndpoint>,
}

impl Topology {
    /// Resolve IPs and ports for `node_count` nodes.
    pub fn resolve(
        requested_ips: Option<&[String]>,
        node_count: usize,
        base_port: u16,
    ) -> Result<Self, TopologyError> {
        let ips = assign_ips(requested_ips, node_count)?;
        let endpoints = ips
            .into_iter()
            .enumerate()
            .map(|(offset, ip)| {
                let index = offset + 1;
                let (node_port, client_port) = port_pair(base_port, index).ok_or(
                    TopologyError::PortOverflow {
                        base: base_port,
                        nodes: node_count,
                    },
                )?;
                Ok(NodeEndpoint {
                    index,
                    ip,
                    node_port,
                    client_port,
                })
            })
            .collect::<Result<Vec<_>, TopologyError>>()?;
        Ok(Self { endpoints })
    }

    /// Endpoint of slot `index` (1-based).
    pub fn endpoint(&self, index: usize) -> Option<&NodeEndpoint> {
        index.checked_sub(1).and_then(|i| self.endpoints.get(i))
    }
}

/// Assign one IP or hostname to each of `node_count` slots.
///
/// Missing entries fall back to loopback, surplus entries are dropped. Only
/// the entries that end up assigned are validated.
pub fn assign_ips(
    requested: Option<&[String]>,
    node_count: usize,
) -> Result<Vec<String>, TopologyError> {
    if node_count == 0 || node_count > MAX_NODE_COUNT {
        return Err(TopologyError::NodeCount {
            count: node_count,
            max: MAX_NODE_COUNT,
        });
    }

    let requested = requested.unwrap_or(&[]);
    if requested.len() > node_count {
        debug!(
            supplied = requested.len(),
            node_count, "Ignoring surplus node addresses"
        );
    }

    let mut ips = Vec::with_capacity(node_count);
    for (offset, value) in requested.iter().take(node_count).enumerate() {
        if !is_valid_host(value) {
            return Err(TopologyError::InvalidHost {
                index: offset + 1,
                value: value.clone(),
            });
        }
        ips.push(value.clone());
    }
    ips.resize(node_count, LOOPBACK_IP.to_string());
    Ok(ips)
}

/// Node and client port of slot `index`: `base + 2i - 1`, `base + 2i`.
///
/// `None` if the pair does not fit in `u16` or `index` is 0.
pub fn port_pair(base_port: u16, index: usize) -> Option<(u16, u16)> {
    if index == 0 {
        return None;
    }
    let node = usize::from(base_port).checked_add(index.checked_mul(2)? - 1)?;
    let client = node.checked_add(1)?;
    Some((u16::try_from(node).ok()?, u16::try_from(client).ok()?))
}

/// IP literal or RFC 1123 hostname.
pub fn is_valid_host(value: &str) -> bool {
    if value.parse::<IpAddr>().is_ok() {
        return true;
    }

    let host = value.strip_suffix('.').unwrap_or(value);
    if host.is_empty() || host.len() > MAX_HOSTNAME_LEN {
        return false;
    }

    let labels: Vec<&str> = host.split('.').collect();
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    });

    // An all-numeric last label is a mistyped IP, not a hostname.
    let tld_ok = labels
        .last()
        .map(|tld| !tld.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(false);

    labels_ok && tld_ok
}

/// True when a node on `ip` is only reachable from this machine.
pub fn is_loopback(ip: &str) -> bool {
    match ip.parse::<IpAddr>() {
        Ok(addr) => addr.is_loopback(),
        Err(_) => ip.eq_ignore_ascii_case("localhost"),
    }
}
