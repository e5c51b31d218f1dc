use crate::clipboard::{TypeCategory, TypeTag};

/// Structured type-identifier resolution (UTI conformance, MIME parsing).
///
/// `None` means "no answer"; callers fall back to the static table.
pub trait TypeLookupPort: Send + Sync {
    fn lookup(&self, tag: &TypeTag) -> Option<TypeCategory>;
}
