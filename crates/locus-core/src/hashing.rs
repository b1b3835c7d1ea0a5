//! Hashing scheme for object storage prefixes
//!
//! Object storage locations are prefixed with a short hash of the
//! (partition-qualified) file name so consecutive writes spread across key
//! prefixes. The digest is part of persisted paths: changing any step here
//! breaks existing tables.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

/// Seed used for object storage prefixes
pub const OBJECT_STORE_HASH_SEED: u32 = 0;

/// MurmurHash3 x86 32-bit
pub fn murmur3_32(data: &[u8], seed: u32) -> u32 {
    let mut hash = seed;
    let mut chunks = data.chunks_exact(4);
    for chunk in &mut chunks {
        let k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        hash ^= mix_k1(k);
        hash = hash.rotate_left(13);
        hash = hash.wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    let tail = chunks.remainder();
    if !tail.is_empty() {
        let mut k = 0u32;
        for (i, byte) in tail.iter().enumerate() {
            k ^= u32::from(*byte) << (8 * i);
        }
        hash ^= mix_k1(k);
    }

    // Length is mixed in as u32, matching the reference implementation.
    hash ^= data.len() as u32;
    fmix32(hash)
}

fn mix_k1(k: u32) -> u32 {
    k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// Hash prefix for an object storage file name
///
/// `murmur3_32` over the UTF-8 bytes, written little-endian into a
/// stack-local 4 byte buffer and encoded as unpadded URL-safe base64.
///
/// ```
/// use locus_core::hashing::object_store_hash;
///
/// assert_eq!(object_store_hash("data.parquet"), "kxgs8w");
/// ```
pub fn object_store_hash(name: &str) -> String {
    let bytes: [u8; 4] = murmur3_32(name.as_bytes(), OBJECT_STORE_HASH_SEED).to_le_bytes();
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_murmur3_reference_vectors() {
        assert_eq!(murmur3_32(b"", 0), 0);
        assert_eq!(murmur3_32(b"iceberg", 0), 1_210_000_089);
        assert_eq!(murmur3_32(b"a", 0), 1_009_084_850);
        assert_eq!(murmur3_32(b"ab", 0), 2_613_040_991);
        assert_eq!(murmur3_32(b"abc", 0), 3_017_643_002);
        assert_eq!(murmur3_32(b"data.parquet", 0), 4_079_753_363);
    }

    #[test]
    fn test_object_store_hash_vectors() {
        assert_eq!(object_store_hash(""), "AAAAAA");
        assert_eq!(object_store_hash("iceberg"), "2SIfSA");
        assert_eq!(object_store_hash("data.parquet"), "kxgs8w");
        assert_eq!(object_store_hash("ab"), "X9e_mw");
        assert_eq!(object_store_hash("abc"), "-pPdsw");
        assert_eq!(object_store_hash("id=1/test.parquet"), "-KduVQ");
    }

    #[test]
    fn test_object_store_hash_uses_utf8_bytes() {
        assert_eq!(murmur3_32("é".as_bytes(), 0), 269_551_495);
        assert_eq!(object_store_hash("é"), "hwcREA");
        assert_eq!(object_store_hash("测试.parquet"), "oW36wQ");
    }

    #[test]
    fn test_hash_is_six_url_safe_chars() {
        for name in ["a", "file.parquet", "x/y/z.orc", "00000-0-abc.parquet"] {
            let hash = object_store_hash(name);
            assert_eq!(hash.len(), 6);
            assert!(hash
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        }
    }
}
