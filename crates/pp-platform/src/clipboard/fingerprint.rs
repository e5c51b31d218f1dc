use std::sync::Mutex;

use pp_core::clipboard::{ChangeCount, ClipboardEntry, TypeCategory, TypeResolver, TypeTag};

/// Synthesized generation counter for platforms without a native one.
///
/// The counter advances whenever the content fingerprint differs from the last
/// one observed. Only textual payloads enter the fingerprint; a non-textual
/// representation contributes its type tag alone, so polling never has to
/// fetch image or file payloads.
#[derive(Debug, Default)]
pub struct FingerprintCounter {
    state: Mutex<CounterState>,
    resolver: TypeResolver,
}

#[derive(Debug, Default)]
struct CounterState {
    last: Option<blake3::Hash>,
    count: i64,
}

impl FingerprintCounter {
    pub fn new(resolver: TypeResolver) -> Self {
        Self {
            state: Mutex::default(),
            resolver,
        }
    }

    /// Whether payloads of this format are part of the fingerprint.
    pub fn hashes_payload(&self, tag: &TypeTag) -> bool {
        self.resolver.resolve(tag) != TypeCategory::Other
    }

    pub fn observe(&self, entries: &[ClipboardEntry]) -> ChangeCount {
        let hash = self.fingerprint(entries);
        let mut state = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if state.last != Some(hash) {
            state.last = Some(hash);
            state.count += 1;
        }
        ChangeCount(state.count)
    }

    fn fingerprint(&self, entries: &[ClipboardEntry]) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        for entry in entries {
            hasher.update(&(entry.representations.len() as u64).to_le_bytes());
            for rep in &entry.representations {
                let tag = rep.type_tag.as_str().as_bytes();
                hasher.update(&(tag.len() as u64).to_le_bytes());
                hasher.update(tag);
                if self.hashes_payload(&rep.type_tag) {
                    hasher.update(&(rep.bytes.len() as u64).to_le_bytes());
                    hasher.update(&rep.bytes);
                }
            }
        }
        hasher.finalize()
    }
}
