//! Clipboard domain models.
mod category;
mod change_count;
mod entry;
pub mod extraction;
pub mod line_breaks;
pub mod policy;
mod representation;
mod snapshot;
mod type_registry;
mod type_tag;


pub use category::TypeCategory;
pub use change_count::ChangeCount;
pub use entry::ClipboardEntry;
pub use extraction::{ExtractionResult, TextExtractor};
pub use policy::{ClassificationResult, SkipReason, TextEligibilityPolicyV1};
pub use representation::Representation;
pub use snapshot::ClipboardSnapshot;
pub use type_registry::{static_category, TypeResolver, UtiConformanceLookup};
pub use type_tag::{MarkerKind, TypeTag, MARKER_NAMESPACE};
