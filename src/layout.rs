//! Bit layout of a raw (unshuffled) flake.
//!
//! ```text
//! [interval (32 bit)][sequence/random (23 bit)][node id (8 bit)]
//! ```

/// bit length of the coarse time interval
pub(crate) const BIT_LEN_INTERVAL: u64 = 32;
/// bit length of the combined sequence/random field
pub(crate) const BIT_LEN_SEQUENCE: u64 = 23;
/// bit length of the node id
pub(crate) const BIT_LEN_NODE_ID: u64 = 8;
/// low bits of the nanosecond clock dropped to form one interval (~1.07 s)
pub(crate) const BIT_LEN_IGNORED_TIME: u64 = 30;

/// mask for the interval
pub(crate) const MASK_INTERVAL: u64 = (1 << BIT_LEN_INTERVAL) - 1;
/// mask for the node id
pub(crate) const MASK_NODE_ID: u64 = (1 << BIT_LEN_NODE_ID) - 1;
/// mask for a whole flake, bit 63 is never set
pub(crate) const MASK_FLAKE: u64 = (1 << (BIT_LEN_INTERVAL + BIT_LEN_SEQUENCE + BIT_LEN_NODE_ID)) - 1;

/// Counter value below which two random bytes follow the counter.
pub(crate) const LOW_LOAD_LIMIT: u64 = 0x20;
/// Counter value below which one random byte follows the counter.
pub(crate) const MEDIUM_LOAD_LIMIT: u64 = 0x2020;
/// First field value of the medium-load range.
pub(crate) const MEDIUM_LOAD_BASE: u64 = 0x20_0000;
/// First field value of the high-load range.
pub(crate) const HIGH_LOAD_BASE: u64 = 0x40_0000;

/// Default epoch origin in unix nanoseconds (2019-12-31T23:00:00Z).
pub const DEFAULT_EPOCH_NANOS: i64 = 1_577_833_200_000_000_000;
