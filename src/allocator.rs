use crate::clock::interval_field;
use crate::layout::{
    BIT_LEN_NODE_ID, BIT_LEN_SEQUENCE, HIGH_LOAD_BASE, LOW_LOAD_LIMIT, MASK_FLAKE, MASK_NODE_ID,
    MEDIUM_LOAD_BASE, MEDIUM_LOAD_LIMIT,
};

/// Interval marker for a generator that has not issued a flake yet.
const UNCLAIMED: i64 = i64::MIN;

/// Mutable generation state of a Flaker.
/// Always accessed under the Flaker's mutex.
#[derive(Debug)]
pub(crate) struct Internals {
    /// Elapsed interval count the sequence belongs to.
    pub(crate) current_interval: i64,
    /// Number of flakes issued in `current_interval` after the first one.
    pub(crate) sequence: u64,
}

impl Default for Internals {
    fn default() -> Self {
        Self {
            current_interval: UNCLAIMED,
            sequence: 0,
        }
    }
}

/// An (interval, sequence) pair handed out exactly once by [`Internals::claim`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Claim {
    pub(crate) interval: i64,
    pub(crate) sequence: u64,
}

impl Internals {
    /// Claim the next sequence value for a call observing `interval`.
    ///
    /// The loop guard is the number of intervals the high-load counter has
    /// already carried into. As long as the observed interval has not moved past
    /// the last carried-into interval, counting continues on `current_interval`;
    /// otherwise the state restarts on the observed interval with a zero counter.
    pub(crate) fn claim(&mut self, interval: i64) -> Claim {
        let loop_guard = (self.sequence + (HIGH_LOAD_BASE - MEDIUM_LOAD_LIMIT)) >> BIT_LEN_SEQUENCE;
        if self.current_interval != UNCLAIMED
            && interval.saturating_sub(loop_guard as i64) <= self.current_interval
        {
            self.sequence += 1;
        } else {
            self.current_interval = interval;
            self.sequence = 0;
        }
        Claim {
            interval: self.current_interval,
            sequence: self.sequence,
        }
    }
}

/// Build the 23 bit sequence/random field for a claimed sequence value.
///
/// The result exceeds 23 bits in the high-load range; the excess is meant to
/// carry into the interval field.
pub(crate) fn sequence_field(sequence: u64, random: u16) -> u64 {
    if sequence < LOW_LOAD_LIMIT {
        // 5 bit counter, 2 random bytes
        (sequence << 16) | u64::from(random)
    } else if sequence < MEDIUM_LOAD_LIMIT {
        // 13 bit counter, 1 random byte
        (MEDIUM_LOAD_BASE - (LOW_LOAD_LIMIT << 8) + (sequence << 8)) | u64::from(random & 0xff)
    } else {
        // counter only
        (HIGH_LOAD_BASE - MEDIUM_LOAD_LIMIT).wrapping_add(sequence)
    }
}

/// Concatenate interval, sequence/random field and node id into a raw flake.
pub(crate) fn compose(claim: Claim, random: u16, node_id: u8) -> u64 {
    // `+` so that a field overflow increments the interval
    let raw = (interval_field(claim.interval) << BIT_LEN_SEQUENCE)
        .wrapping_add(sequence_field(claim.sequence, random));
    ((raw << BIT_LEN_NODE_ID) | (u64::from(node_id) & MASK_NODE_ID)) & MASK_FLAKE
}
