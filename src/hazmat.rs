use bc_crypto::memzero;
use bc_rand::RandomNumberGenerator;
use num_bigint::BigUint;

/// Overwrite the limbs of `value` with zeros in place, leaving it equal to 0.
///
/// Assigning a zero slice of the same digit length writes over the existing
/// allocation before normalization shrinks it, so the old value does not
/// linger in the freed buffer.
pub fn scrub(value: &mut BigUint) {
    let digits = value.bits().div_ceil(32) as usize;
    let zeros = vec![0u32; digits];
    value.assign_from_slice(&zeros);
}

/// Scrub every element of `values`, then empty the vector.
pub fn scrub_all(values: &mut Vec<BigUint>) {
    values.iter_mut().for_each(scrub);
    values.clear();
}

/// Draw an integer uniformly from `[0, bound)` by rejection sampling.
///
/// Each draw masks the candidate to the bit length of `bound`, so at least
/// half of all draws are accepted.
pub fn random_below(bound: &BigUint, random_generator: &mut impl RandomNumberGenerator) -> BigUint {
    let bits = bound.bits();
    let byte_len = bits.div_ceil(8) as usize;
    let excess_bits = (byte_len as u64) * 8 - bits;
    let top_mask = 0xffu8 >> excess_bits;
    let mut buf = vec![0u8; byte_len];

    loop {
        random_generator.fill_random_data(&mut buf);
        buf[0] &= top_mask;
        let mut candidate = BigUint::from_bytes_be(&buf);
        memzero(&mut buf);
        if candidate < *bound {
            return candidate;
        }
        scrub(&mut candidate);
    }
}
