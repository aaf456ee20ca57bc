// String hashing and bucket index computation

/// Multiplier of the polynomial rolling hash.
pub const HASH_PRIME: i64 = 31;

/// Polynomial rolling hash over the UTF-8 bytes of `item`.
///
/// Computes `sum(byte[i] * 31^(len - 1 - i))` in 64-bit signed arithmetic.
/// Overflow wraps silently: the hash only has to be deterministic, so long
/// words routinely produce negative values. Horner evaluation gives the same
/// result modulo 2^64 as summing explicit powers.
pub fn string_hash(item: &str) -> i64 {
    item.bytes().fold(0i64, |hash, byte| {
        hash.wrapping_mul(HASH_PRIME).wrapping_add(i64::from(byte))
    })
}

/// Map a hash onto a bucket in `[0, capacity)`.
///
/// Negative hashes are folded back into range (Euclidean remainder), so the
/// result never depends on the sign of the hash. Returns `None` when there
/// are no buckets to map onto.
pub fn bucket_index(hash: i64, capacity: usize) -> Option<usize> {
    let modulus = i64::try_from(capacity).ok().filter(|&m| m > 0)?;
    Some(hash.rem_euclid(modulus) as usize)
}
