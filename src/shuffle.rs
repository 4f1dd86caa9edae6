/// Destination bit for every source bit of a raw flake.
///
/// Bit `b` of source byte `i` moves to bit `i` of destination byte `b`, so
/// every source byte contributes one bit to every destination byte.
const SHUFFLE_TABLE: [u8; 64] = shuffle_table();

const fn shuffle_table() -> [u8; 64] {
    let mut table = [0u8; 64];
    let mut byte = 0;
    while byte < 8 {
        let mut bit = 0;
        while bit < 8 {
            table[byte * 8 + bit] = (bit * 8 + byte) as u8;
            bit += 1;
        }
        byte += 1;
    }
    table
}

/// Spread the bits of a raw flake to get hash-like output.
///
/// Bit 63 maps onto itself, so a 63 bit input stays within 63 bits.
pub(crate) fn shuffle(raw: u64) -> u64 {
    SHUFFLE_TABLE
        .iter()
        .enumerate()
        .fold(0, |shuffled, (source, &destination)| {
            shuffled | (((raw >> source) & 1) << destination)
        })
}
