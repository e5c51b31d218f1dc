use objc2::rc::autoreleasepool;
use objc2_foundation::NSString;
use objc2_uniform_type_identifiers::UTType;
use pp_core::clipboard::{TypeCategory, TypeTag, UtiConformanceLookup};
use pp_core::ports::TypeLookupPort;
use tracing::trace;

/// Conformance roots checked against the system registry, most specific first.
/// `public.file-url` conforms to `public.url` and must be checked before it.
const CONFORMANCE_ROOTS: &[(&str, TypeCategory)] = &[
    ("public.file-url", TypeCategory::Other),
    ("com.apple.flat-rtfd", TypeCategory::Other),
    ("public.rtf", TypeCategory::Rtf),
    ("public.html", TypeCategory::Html),
    ("public.url", TypeCategory::UrlText),
    ("public.text", TypeCategory::PlainText),
];

/// Type lookup backed by the macOS Uniform Type Identifier registry.
///
/// 系统 UTType 注册表查询：
/// - declared types resolve by `conformsToType:` against [`CONFORMANCE_ROOTS`];
///   a declared type conforming to none of them is `Other`
/// - dynamic or undeclared identifiers and MIME strings go to the built-in
///   conformance table
#[derive(Debug, Default, Clone, Copy)]
pub struct MacOsTypeLookup {
    fallback: UtiConformanceLookup,
}

impl MacOsTypeLookup {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(unused_unsafe)]
    fn system_lookup(identifier: &str) -> Option<TypeCategory> {
        autoreleasepool(|_| {
            let ty = unsafe { UTType::typeWithIdentifier(&NSString::from_str(identifier)) }?;
            if unsafe { ty.isDynamic() } || !unsafe { ty.isDeclared() } {
                return None;
            }

            let category = CONFORMANCE_ROOTS
                .iter()
                .find(|(root, _)| {
                    unsafe { UTType::typeWithIdentifier(&NSString::from_str(root)) }
                        .is_some_and(|root_ty| unsafe { ty.conformsToType(&root_ty) })
                })
                .map_or(TypeCategory::Other, |(_, category)| *category);
            Some(category)
        })
    }
}

impl TypeLookupPort for MacOsTypeLookup {
    fn lookup(&self, tag: &TypeTag) -> Option<TypeCategory> {
        let raw = tag.as_str().trim();
        if raw.is_empty() || raw.contains('/') {
            return self.fallback.lookup(tag);
        }

        match Self::system_lookup(raw) {
            Some(category) => {
                trace!(type_tag = raw, %category, "resolved through UTType");
                Some(category)
            }
            None => self.fallback.lookup(tag),
        }
    }
}
