mod model;
mod v1;

pub use model::{ClassificationResult, SkipReason};
pub use v1::TextEligibilityPolicyV1;
