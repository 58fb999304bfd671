//! String codec for whole-sequence serialization.
//!
//! Elements are packed with MessagePack and carried as base64 text, so the
//! serialized form can be embedded in JSON documents or configuration files
//! without escaping concerns. Both directions fail with
//! [`CollectionError::Codec`] and never touch collection state.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::trace;

use crate::core::Result;

/// Pack an element sequence into its transport string.
pub fn encode<T: Serialize>(elements: &[T]) -> Result<String> {
    let packed = rmp_serde::to_vec(elements)?;
    trace!(elements = elements.len(), bytes = packed.len(), "encoded sequence");
    Ok(STANDARD.encode(packed))
}

/// Unpack a transport string produced by [`encode`].
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
    let packed = STANDARD.decode(text.trim())?;
    Ok(rmp_serde::from_slice(&packed)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CollectionError;

    #[test]
    fn test_round_trip() {
        let elements = vec!["one".to_string(), "two".to_string()];
        let text = encode(&elements).unwrap();
        let decoded: Vec<String> = decode(&text).unwrap();
        assert_eq!(decoded, elements);
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let result = decode::<i64>("not a transport string!");
        assert!(matches!(result, Err(CollectionError::Codec(_))));
    }

    #[test]
    fn test_decode_rejects_malformed_payload() {
        // Valid base64, not a MessagePack sequence.
        let text = STANDARD.encode([0xc1u8, 0xc1, 0xc1]);
        let result = decode::<i64>(&text);
        assert!(matches!(result, Err(CollectionError::Codec(_))));
    }

    #[test]
    fn test_decode_tolerates_surrounding_whitespace() {
        let text = encode(&[1i64, 2, 3]).unwrap();
        let decoded: Vec<i64> = decode(&format!("  {text}\n")).unwrap();
        assert_eq!(decoded, vec![1, 2, 3]);
    }
}
