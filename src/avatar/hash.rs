//! cyrb53 string hashing.
//!
//! The output feeds every pool-mode avatar assignment that has ever been
//! handed out, so the arithmetic below has to stay bit-for-bit identical.

/// Largest value the hash can produce, exclusive.
pub const HASH_LIMIT: u64 = 1 << 53;

/// Hash a string by its UTF-16 code units.
pub fn cyrb53(input: &str, salt: u32) -> u64 {
    cyrb53_utf16(input.encode_utf16(), salt)
}

/// Hash raw UTF-16 code units. Unpaired surrogates are hashed as-is.
pub fn cyrb53_utf16<I>(units: I, salt: u32) -> u64
where
    I: IntoIterator<Item = u16>,
{
    let mut h1: u32 = 0xdead_beef ^ salt;
    let mut h2: u32 = 0x41c6_ce57 ^ salt;

    for unit in units {
        let ch = u32::from(unit);
        h1 = (h1 ^ ch).wrapping_mul(2_654_435_761);
        h2 = (h2 ^ ch).wrapping_mul(1_597_334_677);
    }

    h1 = (h1 ^ (h1 >> 16)).wrapping_mul(2_246_822_507);
    h2 = (h2 ^ (h2 >> 13)).wrapping_mul(3_266_489_909);

    (u64::from(h2 & 0x001f_ffff) << 32) | u64::from(h1)
}

/// Unsalted seed hash used for pool selection.
pub fn hash_seed(seed: &str) -> u64 {
    cyrb53(seed, 0)
}
