use super::model::{ClassificationResult, SkipReason};
use crate::clipboard::{ClipboardEntry, TypeCategory, TypeResolver};

/// v1 策略：保守
///
/// - markers win unless forced
/// - one non-textual representation anywhere makes the whole snapshot ineligible
/// - marker-namespaced tags are metadata and never count as content
#[derive(Debug, Clone, Default)]
pub struct TextEligibilityPolicyV1 {
    resolver: TypeResolver,
}

impl TextEligibilityPolicyV1 {
    pub fn new(resolver: TypeResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &TypeResolver {
        &self.resolver
    }

    pub fn classify(&self, entries: &[ClipboardEntry], force: bool) -> ClassificationResult {
        if !force {
            if let Some(tag) = entries.iter().find_map(|e| e.marker()) {
                tracing::debug!(marker = %tag, "snapshot carries a marker, skipping");
                return ClassificationResult::Skip(SkipReason::Marker(tag.clone()));
            }
        }

        if !entries.iter().any(|e| e.has_content()) {
            return ClassificationResult::Skip(SkipReason::Empty);
        }

        let foreign = entries
            .iter()
            .flat_map(|e| e.type_tags())
            .filter(|tag| !tag.is_marker_namespaced())
            .find(|tag| self.resolver.resolve(tag) == TypeCategory::Other);

        match foreign {
            Some(tag) => {
                tracing::debug!(type_tag = %tag, "non-textual representation present");
                ClassificationResult::Ineligible
            }
            None => ClassificationResult::Eligible,
        }
    }
}
