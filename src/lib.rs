//! A coordination-free generator of unique 63 bit IDs ("flakes").
//!
//! A raw flake is laid out as
//!
//! ```text
//! [interval (32 bit)][sequence/random (23 bit)][node id (8 bit)]
//! ```
//!
//! where the interval counts ~1.07 s units since the epoch origin, giving an
//! epoch of ~146 years. Under light load most of the middle field is random;
//! as more flakes are issued within one interval, the counter takes over
//! until the field is a plain counter. Generation never blocks and never fails.
//!
//! By default flakes are bit-shuffled to look like hashes. Use
//! [`Flaker::next_raw`] for sortable output.
//!
//! ## Quickstart
//!
//! ```
//! let id = flake_me::next();
//! println!("{} {} {} {}", id, id.to_hex(), id.to_base32(), id.to_base64());
//!
//! let decoded = flake_me::Flake::decode(&id.to_base64()).unwrap();
//! assert_eq!(decoded, id);
//! ```
//!
//! ## Concurrent use
//!
//! Flaker is thread-safe. `clone` it before moving to another thread; clones
//! share one generation state:
//!
//! ```
//! use flake_me::Flaker;
//! use std::thread;
//!
//! let flaker = Flaker::builder().node_id(7).finalize();
//!
//! let mut children = Vec::new();
//! for _ in 0..10 {
//!     let thread_flaker = flaker.clone();
//!     children.push(thread::spawn(move || {
//!         println!("{}", thread_flaker.next());
//!     }));
//! }
//!
//! for child in children {
//!     child.join().unwrap();
//! }
//! ```

mod allocator;
mod builder;
mod clock;
mod error;
mod flake;
mod flaker;
mod global;
mod layout;
mod shuffle;

pub use crate::flaker::*;
pub use builder::*;
pub use error::*;
pub use flake::*;
pub use global::*;
pub use layout::DEFAULT_EPOCH_NANOS;
