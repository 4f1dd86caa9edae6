use crate::error::Error;
use data_encoding::{BASE32HEX_NOPAD, BASE64URL_NOPAD, Encoding, HEXLOWER, HEXLOWER_PERMISSIVE};
use std::{fmt, str::FromStr, sync::LazyLock};

/// Length of a base64 encoded flake.
const BASE64_LEN: usize = 11;
/// Length of a base32 encoded flake.
const BASE32_LEN: usize = 13;
/// Length of a hex encoded flake.
const HEX_LEN: usize = 16;

/// Unpadded URL-safe base64 that ignores the 2 unused trailing bits.
static BASE64_DECODING: LazyLock<Encoding> = LazyLock::new(|| lenient(&BASE64URL_NOPAD));
/// Unpadded extended-hex base32 that ignores the unused trailing bit.
static BASE32_DECODING: LazyLock<Encoding> = LazyLock::new(|| lenient(&BASE32HEX_NOPAD));

fn lenient(encoding: &Encoding) -> Encoding {
    let mut spec = encoding.specification();
    spec.check_trailing_bits = false;
    spec.encoding()
        .expect("flake_me: disabling trailing bit checks keeps the encoding valid")
}

/// Flake is a unique 63 bit ID.
///
/// Whether a flake is shuffled or raw is not recorded in the value; it is
/// up to the caller to remember which `Flaker` method produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Flake(u64);

impl Flake {
    pub(crate) fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the flake as `i64`.
    pub fn as_i64(self) -> i64 {
        self.0 as i64
    }

    /// Returns the flake as `u64`.
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns the flake as 8 big-endian bytes.
    pub fn to_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Encodes the flake as 16 lowercase hex characters.
    pub fn to_hex(self) -> String {
        HEXLOWER.encode(&self.to_bytes())
    }

    /// Encodes the flake as 13 characters of unpadded base32 (extended hex alphabet).
    pub fn to_base32(self) -> String {
        BASE32HEX_NOPAD.encode(&self.to_bytes())
    }

    /// Encodes the flake as 11 characters of unpadded URL-safe base64.
    pub fn to_base64(self) -> String {
        BASE64URL_NOPAD.encode(&self.to_bytes())
    }

    /// Decodes a flake from exactly 8 big-endian bytes.
    /// Like [`decode`](Flake::decode), bit 63 is taken as is.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let bytes: [u8; 8] = bytes
            .try_into()
            .map_err(|_| Error::InvalidByteLength { len: bytes.len() })?;
        Ok(Self(u64::from_be_bytes(bytes)))
    }

    /// Decodes a hex, base32 or base64 encoded flake.
    ///
    /// The encoding is picked by length alone: 11 is base64, 13 is base32 and
    /// 16 is hex. Any other length is rejected without decoding. Unused
    /// trailing bits of base32 and base64 input are ignored.
    ///
    /// Any 8 bytes are accepted, including values with bit 63 set that no
    /// Flaker produces; [`as_i64`](Flake::as_i64) is negative for those.
    pub fn decode(s: &str) -> Result<Self, Error> {
        let bytes = match s.len() {
            BASE64_LEN => BASE64_DECODING.decode(s.as_bytes())?,
            BASE32_LEN => BASE32_DECODING.decode(s.as_bytes())?,
            HEX_LEN => HEXLOWER_PERMISSIVE.decode(s.as_bytes())?,
            len => return Err(Error::UnknownFormat { len }),
        };
        Self::from_bytes(&bytes)
    }
}

impl fmt::Display for Flake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Flake {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl TryFrom<&[u8]> for Flake {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl From<Flake> for u64 {
    fn from(flake: Flake) -> Self {
        flake.0
    }
}

impl From<Flake> for i64 {
    fn from(flake: Flake) -> Self {
        flake.0 as i64
    }
}
