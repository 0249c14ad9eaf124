//! Deterministic random stream derived from a seed string.
//!
//! This is the ARC4 based `seedrandom` construction: the seed's UTF-16 units
//! are folded into a key of at most 256 bytes, the ARC4 keystream drops its
//! first 256 bytes, and every float carries 52 significant bits.

use super::error::AvatarError;

const WIDTH: f64 = 256.0;
const CHUNKS: usize = 6;
const START_DENOM: f64 = 281_474_976_710_656.0; // 256^6
const SIGNIFICANCE: f64 = 4_503_599_627_370_496.0; // 2^52
const OVERFLOW: f64 = 9_007_199_254_740_992.0; // 2^53

struct Arc4 {
    i: u8,
    j: u8,
    s: [u8; 256],
}

impl Arc4 {
    fn new(key: &[u8]) -> Self {
        let key: &[u8] = if key.is_empty() { &[0] } else { key };

        let mut s = [0u8; 256];
        for (i, slot) in s.iter_mut().enumerate() {
            *slot = i as u8;
        }

        let mut j: u8 = 0;
        for i in 0..256 {
            j = j.wrapping_add(key[i % key.len()]).wrapping_add(s[i]);
            s.swap(i, j as usize);
        }

        let mut arc4 = Self { i: 0, j: 0, s };
        for _ in 0..256 {
            arc4.next_byte();
        }
        arc4
    }

    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        let t = self.s[self.i as usize];
        self.j = self.j.wrapping_add(t);
        self.s[self.i as usize] = self.s[self.j as usize];
        self.s[self.j as usize] = t;
        self.s[self.s[self.i as usize].wrapping_add(t) as usize]
    }

    /// Next `count` bytes as a big-endian integer. `count` stays within 6.
    fn take(&mut self, count: usize) -> u64 {
        (0..count).fold(0u64, |acc, _| acc * 256 + u64::from(self.next_byte()))
    }
}

fn mix_key(seed: &str) -> Vec<u8> {
    let mut key: Vec<u8> = Vec::with_capacity(256);
    let mut smear: u32 = 0;

    for (j, unit) in seed.encode_utf16().enumerate() {
        let slot = j & 0xff;
        if let Some(&previous) = key.get(slot) {
            smear ^= u32::from(previous) * 19;
        }
        let mixed = (smear.wrapping_add(u32::from(unit)) & 0xff) as u8;
        if slot < key.len() {
            key[slot] = mixed;
        } else {
            key.push(mixed);
        }
    }

    key
}

/// A reproducible stream of floats in `[0, 1)`.
pub struct SeededRandom {
    arc4: Arc4,
}

impl SeededRandom {
    pub fn new(seed: &str) -> Self {
        Self {
            arc4: Arc4::new(&mix_key(seed)),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        let mut n = self.arc4.take(CHUNKS) as f64;
        let mut d = START_DENOM;
        let mut x: u64 = 0;

        while n < SIGNIFICANCE {
            n = (n + x as f64) * WIDTH;
            d *= WIDTH;
            x = self.arc4.take(1);
        }

        while n >= OVERFLOW {
            n /= 2.0;
            d /= 2.0;
            x >>= 1;
        }

        (n + x as f64) / d
    }

    /// Index in `0..len` drawn from one float of the stream.
    pub fn index(&mut self, len: usize) -> Result<usize, AvatarError> {
        if len == 0 {
            return Err(AvatarError::invalid_argument(
                "cannot pick from an empty list",
            ));
        }

        Ok(((self.next() * len as f64).floor() as usize).min(len - 1))
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, AvatarError> {
        let idx = self.index(items.len())?;
        Ok(&items[idx])
    }
}
