//! Target-language backend registry.
//!
//! Each supported output language is described by one immutable
//! [`LanguageDescriptor`]. Descriptors carry data only; lookup is a predicate
//! scan over a fixed slice, in declaration order, first match wins.

/// Describes one supported output-language backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDescriptor {
    /// Short identifier used in step files and on the tool command line.
    pub id: &'static str,
    /// One-letter language code accepted as an alias for the id.
    pub code: &'static str,
    /// Suffix appended to the output file's base name when an include file
    /// must be derived. Carries its own extension.
    pub include_suffix: &'static str,
}

/// All supported backends, in lookup order.
pub const LANGUAGES: &[LanguageDescriptor] = &[
    LanguageDescriptor {
        id: "c",
        code: "c",
        include_suffix: ".h",
    },
    LanguageDescriptor {
        id: "java",
        code: "j",
        include_suffix: "Intf.java",
    },
    LanguageDescriptor {
        id: "pascal",
        code: "p",
        include_suffix: ".inc",
    },
];

/// Looks up a backend by id or language code, case-insensitively.
///
/// Returns the first descriptor whose id or code matches, or `None` when the
/// token names no supported backend.
pub fn find_language(token: &str) -> Option<&'static LanguageDescriptor> {
    LANGUAGES
        .iter()
        .find(|l| l.id.eq_ignore_ascii_case(token) || l.code.eq_ignore_ascii_case(token))
}
