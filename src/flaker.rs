use crate::allocator::{Internals, compose};
use crate::builder::Builder;
use crate::clock::{current_elapsed_intervals, from_unix_nanos};
use crate::flake::Flake;
use crate::shuffle::shuffle;
use chrono::prelude::*;
use rand::Rng;
use std::sync::{Arc, Mutex, PoisonError};

/// SharedFlaker is shared between clones of one Flaker.
/// This struct is not exposed to the public.
#[derive(Debug)]
pub(crate) struct SharedFlaker {
    /// epoch origin in unix nanoseconds
    pub(crate) epoch_origin: i128,
    pub(crate) node_id: u8,
    pub(crate) internals: Mutex<Internals>,
}

/// Flaker is a coordination-free unique ID generator.
///
/// It is thread-safe and never blocks beyond a short critical section. Clones
/// share one generation state, while [`with_node_id`] and [`with_epoch_origin`]
/// return an independent Flaker with fresh state.
///
/// Run at most one Flaker per node id and epoch origin; two instances with the
/// same configuration may hand out the same flake.
///
/// [`with_node_id`]: Flaker::with_node_id
/// [`with_epoch_origin`]: Flaker::with_epoch_origin
#[derive(Debug)]
pub struct Flaker(pub(crate) Arc<SharedFlaker>);

impl Flaker {
    /// Create a new Flaker with node id 0 and the default epoch origin.
    /// For custom configuration see [`builder`].
    ///
    /// [`builder`]: Flaker::builder
    pub fn new() -> Self {
        Builder::new().finalize()
    }

    /// Create a new [`Builder`] to construct a Flaker.
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub(crate) fn new_inner(shared: Arc<SharedFlaker>) -> Self {
        Self(shared)
    }

    /// Returns the node id stored in the low 8 bits of every raw flake.
    pub fn node_id(&self) -> u8 {
        self.0.node_id
    }

    /// Returns the instant interval counting starts from.
    pub fn epoch_origin(&self) -> DateTime<Utc> {
        from_unix_nanos(self.0.epoch_origin)
    }

    /// Generate the next unique flake in shuffled, hash-like form.
    ///
    /// Flakes are unique within a ~146 year epoch. More than 4,000,000 flakes
    /// per second are possible; beyond that the interval field is borrowed from
    /// the future, which stays unique as long as a restarted process waits
    /// `generated / 4,000,000` seconds.
    pub fn next(&self) -> Flake {
        Flake::from_raw(shuffle(self.next_raw_value()))
    }

    /// Generate the next unique flake without shuffling its bits.
    ///
    /// Raw flakes of one Flaker never decrease until the interval field wraps at
    /// the end of the epoch. A wall clock moving backwards does not break
    /// uniqueness, but the interval then no longer reflects the real time.
    pub fn next_raw(&self) -> Flake {
        Flake::from_raw(self.next_raw_value())
    }

    fn next_raw_value(&self) -> u64 {
        let random: u16 = rand::rng().random();
        let interval = current_elapsed_intervals(self.0.epoch_origin);
        let claim = self
            .0
            .internals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .claim(interval);
        compose(claim, random, self.0.node_id)
    }

    /// Returns a new Flaker with the given node id, the same epoch origin and
    /// fresh generation state. `self` is left untouched.
    pub fn with_node_id(&self, node_id: u8) -> Flaker {
        self.to_builder().node_id(node_id).finalize()
    }

    /// Returns a new Flaker with the given epoch origin, the same node id and
    /// fresh generation state. `self` is left untouched.
    ///
    /// The epoch origin only matters for the ordering of raw flakes; uniqueness
    /// holds for any origin.
    pub fn with_epoch_origin(&self, epoch_origin: DateTime<Utc>) -> Flaker {
        self.to_builder().epoch_origin(epoch_origin).finalize()
    }

    fn to_builder(&self) -> Builder {
        Builder::new()
            .node_id(self.0.node_id)
            .epoch_origin_nanos(self.0.epoch_origin)
    }
}

impl Default for Flaker {
    fn default() -> Self {
        Flaker::new()
    }
}

/// Returns a new `Flaker` referencing the same state as `self`.
/// This is used for concurrent use.
impl Clone for Flaker {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
