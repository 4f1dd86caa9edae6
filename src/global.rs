//! Process-wide default Flaker and shorthand functions.
//!
//! The default Flaker is created on first use with the node id derived from the
//! host's private IPv4 address (0 if there is none) and the default epoch
//! origin. It is never torn down. Processes needing several node identities
//! must build explicit Flakers instead.

use crate::{Flake, Flaker};
use chrono::prelude::*;
use std::sync::OnceLock;

/// Returns the process-wide default Flaker, creating it if none exists.
pub fn default_flaker() -> &'static Flaker {
    static DEFAULT: OnceLock<Flaker> = OnceLock::new();
    DEFAULT.get_or_init(|| Flaker::builder().node_id_from_network().finalize())
}

/// Shorthand for `default_flaker().next()`.
pub fn next() -> Flake {
    default_flaker().next()
}

/// Shorthand for `default_flaker().next_raw()`.
pub fn next_raw() -> Flake {
    default_flaker().next_raw()
}

/// Shorthand for `default_flaker().with_node_id(node_id)`.
pub fn with_node_id(node_id: u8) -> Flaker {
    default_flaker().with_node_id(node_id)
}

/// Shorthand for `default_flaker().with_epoch_origin(epoch_origin)`.
pub fn with_epoch_origin(epoch_origin: DateTime<Utc>) -> Flaker {
    default_flaker().with_epoch_origin(epoch_origin)
}
