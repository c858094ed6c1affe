use num_bigint::BigUint;

use crate::{FieldContext, Result, VssError};

/// Number of secret bytes packed into one field element. Chosen so that
/// every `width`-byte big-endian value is strictly below `q`.
pub fn element_width(ctx: &FieldContext) -> Result<usize> {
    let width = ((ctx.order().bits() - 1) / 8) as usize;
    if width == 0 {
        return Err(VssError::SubgroupTooSmallForCodec);
    }
    Ok(width)
}

/// Number of elements a secret of `secret_length` bytes encodes to.
pub fn element_count(secret_length: usize, ctx: &FieldContext) -> Result<usize> {
    Ok(secret_length.div_ceil(element_width(ctx)?))
}

/// Split `secret` into big-endian chunks of `element_width` bytes, each read
/// as one field element. The final chunk may be shorter.
pub fn encode_secret(secret: &[u8], ctx: &FieldContext) -> Result<Vec<BigUint>> {
    if secret.is_empty() {
        return Err(VssError::EmptySecret);
    }
    let width = element_width(ctx)?;
    Ok(secret.chunks(width).map(BigUint::from_bytes_be).collect())
}

/// Reassemble a secret of `secret_length` bytes from its elements.
pub fn decode_secret(
    elements: &[BigUint],
    secret_length: usize,
    ctx: &FieldContext,
) -> Result<Vec<u8>> {
    let expected = element_count(secret_length, ctx)?;
    if elements.len() != expected {
        return Err(VssError::ElementCountMismatch {
            expected,
            found: elements.len(),
        });
    }
    let width = element_width(ctx)?;

    let mut secret = vec![0u8; secret_length];
    for (chunk, element) in secret.chunks_mut(width).zip(elements) {
        let chunk_bits = chunk.len() as u64 * 8;
        if element.bits() > chunk_bits {
            bc_crypto::memzero(&mut secret);
            return Err(VssError::MalformedElement);
        }
        let mut bytes = element.to_bytes_be();
        // to_bytes_be yields [0] for zero
        let significant = bytes.len().min(chunk.len());
        let offset = chunk.len() - significant;
        chunk[offset..].copy_from_slice(&bytes[bytes.len() - significant..]);
        bc_crypto::memzero(&mut bytes);
    }
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn context(order: u64) -> FieldContext {
        FieldContext::from_subgroup_order(&BigUint::from(order)).unwrap()
    }

    #[test]
    fn test_element_width() {
        assert_eq!(element_width(&context(257)), Ok(1));
        assert_eq!(element_width(&context(65_537)), Ok(2));
        assert_eq!(element_width(&context(crate::DEFAULT_SUBGROUP_ORDER)), Ok(7));
        assert_eq!(element_width(&context(127)), Err(VssError::SubgroupTooSmallForCodec));
    }

    #[test]
    fn test_encode() {
        let ctx = context(65_537);
        let elements = encode_secret(&hex!("0102030405"), &ctx).unwrap();
        assert_eq!(
            elements,
            vec![BigUint::from(0x0102u32), BigUint::from(0x0304u32), BigUint::from(0x05u32)]
        );
        assert!(elements.iter().all(|e| ctx.contains_scalar(e)));
        assert_eq!(encode_secret(&[], &ctx), Err(VssError::EmptySecret));
    }

    #[test]
    fn test_decode_keeps_leading_zeros() {
        let ctx = context(crate::DEFAULT_SUBGROUP_ORDER);
        let secret = hex!("00000000000000ff00000000000000000001");
        let elements = encode_secret(&secret, &ctx).unwrap();
        assert_eq!(elements.len(), 3);
        assert_eq!(decode_secret(&elements, secret.len(), &ctx).unwrap(), secret.to_vec());
    }

    #[test]
    fn test_decode_rejects_malformed() {
        let ctx = context(65_537);
        assert_eq!(
            decode_secret(&[BigUint::from(1u32)], 3, &ctx),
            Err(VssError::ElementCountMismatch { expected: 2, found: 1 })
        );
        // final chunk is one byte wide
        assert_eq!(
            decode_secret(&[BigUint::from(1u32), BigUint::from(0x100u32)], 3, &ctx),
            Err(VssError::MalformedElement)
        );
    }
}
