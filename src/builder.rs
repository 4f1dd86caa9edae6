use crate::Flaker;
use crate::allocator::Internals;
use crate::clock::{from_unix_nanos, to_unix_nanos};
use crate::flaker::SharedFlaker;
use crate::layout::DEFAULT_EPOCH_NANOS;
use chrono::prelude::*;
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};
use tracing::debug;

#[cfg(feature = "ip-fallback")]
use std::net::IpAddr;

/// A builder for building the [`Flaker`] generator.
#[derive(Debug, Clone)]
pub struct Builder {
    epoch_origin: i128,
    node_id: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

impl Builder {
    /// Construct a new builder with node id 0 and the default epoch origin.
    pub fn new() -> Self {
        Self {
            epoch_origin: i128::from(DEFAULT_EPOCH_NANOS),
            node_id: 0,
        }
    }

    /// Set the node id.
    /// It must be unique among Flakers running with the same epoch origin.
    pub fn node_id(mut self, node_id: u8) -> Self {
        self.node_id = node_id;
        self
    }

    /// Set the node id to the last octet of the first private IPv4 address of
    /// this host, or 0 if there is none.
    pub fn node_id_from_network(mut self) -> Self {
        self.node_id = network_node_id();
        self
    }

    /// Set the epoch origin.
    /// An origin in the future is accepted; the interval field simply wraps.
    pub fn epoch_origin(mut self, epoch_origin: DateTime<Utc>) -> Self {
        self.epoch_origin = to_unix_nanos(epoch_origin);
        self
    }

    pub(crate) fn epoch_origin_nanos(mut self, epoch_origin: i128) -> Self {
        self.epoch_origin = epoch_origin;
        self
    }

    /// Finish building and create a Flaker with fresh generation state.
    pub fn finalize(self) -> Flaker {
        debug!(
            node_id = self.node_id,
            epoch_origin = %from_unix_nanos(self.epoch_origin),
            "flaker configured"
        );
        let shared = Arc::new(SharedFlaker {
            epoch_origin: self.epoch_origin,
            node_id: self.node_id,
            internals: Mutex::new(Internals::default()),
        });
        Flaker::new_inner(shared)
    }
}

/// Get the node id from the private IPv4 address, falling back to 0.
fn network_node_id() -> u8 {
    if let Some(ipv4) = private_ipv4() {
        debug!(%ipv4, "node id derived from private ipv4 address");
        return ipv4.octets()[3];
    }
    debug!("no private ipv4 address found, using node id 0");
    0
}

#[cfg(feature = "ip-fallback")]
fn private_ipv4() -> Option<Ipv4Addr> {
    pnet_datalink::interfaces()
        .iter()
        .filter(|iface| iface.is_up() && !iface.is_loopback() && !iface.ips.is_empty())
        .flat_map(|iface| iface.ips.iter())
        .find_map(|network| match network.ip() {
            IpAddr::V4(ipv4) if is_private_ipv4(&ipv4) => Some(ipv4),
            _ => None,
        })
}

#[cfg(not(feature = "ip-fallback"))]
fn private_ipv4() -> Option<Ipv4Addr> {
    None
}

#[cfg(feature = "ip-fallback")]
pub(crate) fn is_private_ipv4(ip: &Ipv4Addr) -> bool {
    let octets = ip.octets();
    matches!(octets[0], 10)
        || (octets[0] == 172 && (16..=31).contains(&octets[1]))
        || (octets[0] == 192 && octets[1] == 168)
}
