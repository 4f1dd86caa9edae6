// Copyright 2022 houseme
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

/// Convenience type alias for usage within flake_me tests.
#[cfg(test)]
pub(crate) type BoxDynError = Box<dyn std::error::Error + 'static + Send + Sync>;

/// The error type for this crate.
///
/// Only decoding can fail and every variant is a format error; generating a
/// flake never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown format: {len} characters is neither base64 (11), base32 (13) nor hex (16)")]
    UnknownFormat { len: usize },
    #[error("invalid encoding: {0}")]
    InvalidEncoding(#[from] data_encoding::DecodeError),
    #[error("unknown format: a flake is 8 bytes, got {len}")]
    InvalidByteLength { len: usize },
}
