use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

const ALPHANUMERIC_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const STRING_MIN_LEN: usize = 5;
const STRING_MAX_LEN: usize = 10;
const NUMBER_MIN: i64 = 1;
const NUMBER_MAX: i64 = 100;
const COLOR_BYTES: usize = 3;

/// Alphanumeric string with a length in `[5, 10)`.
pub fn random_alphanumeric(rng: &mut dyn RngCore) -> String {
    let len = rng.random_range(STRING_MIN_LEN..STRING_MAX_LEN);
    let mut value = String::with_capacity(len);
    for _ in 0..len {
        let idx = rng.random_range(0..ALPHANUMERIC_CHARSET.len());
        value.push(char::from(ALPHANUMERIC_CHARSET[idx]));
    }
    value
}

/// Integer in `[1, 100)`.
pub fn random_number(rng: &mut dyn RngCore) -> i64 {
    rng.random_range(NUMBER_MIN..NUMBER_MAX)
}

/// `bytes` random bytes as lowercase hex, two characters per byte.
pub fn random_hex(rng: &mut dyn RngCore, bytes: usize) -> String {
    let mut buf = vec![0_u8; bytes];
    rng.fill_bytes(&mut buf);
    hex::encode(buf)
}

pub fn random_color(rng: &mut dyn RngCore) -> String {
    format!("#{}", random_hex(rng, COLOR_BYTES))
}

/// Uniform pick among `items`; an empty list yields an empty string.
pub fn pick(items: &[String], rng: &mut dyn RngCore) -> String {
    items.choose(rng).cloned().unwrap_or_default()
}
