//! Stable identity for bound functions.
//!
//! A [`BindingHash`] is derived from the namespace, the script-visible name and
//! the parameter tags of a function. The same binding always hashes the same,
//! across runs and regardless of registration order, which makes it usable as
//! a log correlation key and a map key for adapters.

use std::fmt;

use xxhash_rust::xxh64::xxh64;

use crate::type_tag::TypeTag;

/// Mixing constants keeping the namespace, name and parameter parts of a
/// hash apart.
mod mix {
    pub const NAMESPACE: u64 = 0x6a09e667f3bcc908;
    pub const FUNCTION: u64 = 0xbb67ae8584caa73b;
    pub const STEP: u64 = 0x3c6ef372fe94f82b;

    /// One marker per parameter position so that `(u8, text)` and
    /// `(text, u8)` differ.
    pub const POSITION: [u64; 8] = [
        0xa54ff53a5f1d36f1,
        0x510e527fade682d1,
        0x9b05688c2b3e6c1f,
        0x1f83d9abfb41bd6b,
        0x5be0cd19137e2179,
        0xcbbb9d5dc1059ed8,
        0x629a292a367cd507,
        0x9159015a3070dd17,
    ];
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct BindingHash(pub u64);

impl BindingHash {
    /// Hash a namespace name on its own.
    #[inline]
    pub fn from_namespace(namespace: &str) -> Self {
        BindingHash(mix::NAMESPACE ^ xxh64(namespace.as_bytes(), 0))
    }

    /// Hash a function binding from its namespace, name and parameter tags.
    pub fn from_function(namespace: &str, name: &str, params: &[TypeTag]) -> Self {
        let mut hash = Self::from_namespace(namespace).0 ^ mix::FUNCTION ^ xxh64(name.as_bytes(), 0);
        for (i, tag) in params.iter().enumerate() {
            let marker = mix::POSITION
                .get(i)
                .copied()
                .unwrap_or_else(|| mix::POSITION[0].wrapping_add(i as u64));
            let tag_hash = xxh64(tag.to_string().as_bytes(), 0);
            hash = hash.wrapping_mul(mix::STEP).wrapping_add(marker ^ tag_hash);
        }
        BindingHash(hash)
    }
}

impl fmt::Debug for BindingHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BindingHash({:#018x})", self.0)
    }
}

impl fmt::Display for BindingHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
