//! Widget / window ID system using 64-bit FNV-1a hashing.

use std::hash::{Hash, Hasher};

/// A cheap, copyable widget identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Id(pub u64);

impl Id {
    /// Hash a label (FNV-1a).
    pub fn new(s: &str) -> Self {
        Self(fnv1a(s.as_bytes()))
    }

    /// Create from any `Hash`-able value.
    pub fn from_hash<T: Hash>(v: &T) -> Self {
        let mut h = FnvHasher::default();
        v.hash(&mut h);
        Self(h.finish())
    }

    /// Combine a parent scope with a child ID.
    #[inline]
    pub fn combine(self, child: Self) -> Self {
        let x = self.0 ^ child.0.wrapping_add(0x9e3779b9)
            .wrapping_add(self.0 << 6)
            .wrapping_add(self.0 >> 2);
        Self(x)
    }

    #[inline]
    pub fn with(self, suffix: &str) -> Self { self.combine(Self::new(suffix)) }
}

/// Split a Dear ImGui-style label into `(display_text, id_source)`.
///
/// * `"Label"`         → shown and hashed as `"Label"`
/// * `"Label##hidden"` → shows `"Label"`, hashes the whole string
/// * `"Label###fixed"` → shows `"Label"`, hashes only `"fixed"`
pub fn parse_label(label: &str) -> (&str, &str) {
    match label.find("##") {
        None      => (label, label),
        Some(pos) => {
            let display = &label[..pos];
            match label[pos..].find("###") {
                Some(fixed) => (display, &label[pos + fixed + 3..]),
                None        => (display, label),
            }
        }
    }
}

// ─── FNV-1a helpers ──────────────────────────────────────────────────────────

const FNV_OFFSET: u64 = 14695981039346656037;
const FNV_PRIME:  u64 = 1099511628211;

fn fnv1a(data: &[u8]) -> u64 {
    data.iter().fold(FNV_OFFSET, |h, &b| (h ^ b as u64).wrapping_mul(FNV_PRIME))
}

#[derive(Default)]
struct FnvHasher(Option<u64>);

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 { self.0.unwrap_or(FNV_OFFSET) }
    fn write(&mut self, bytes: &[u8]) {
        let seed = self.0.unwrap_or(FNV_OFFSET);
        self.0 = Some(bytes.iter().fold(seed, |h, &b| (h ^ b as u64).wrapping_mul(FNV_PRIME)));
    }
}
