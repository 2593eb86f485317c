use super::placeholder::RESERVED_REGEX;
use crate::types::SpanClass;
use regex::Regex;
use std::sync::LazyLock;

/// Scan order, most specific first. Citations, references and labels must be
/// claimed before the generic command patterns, and commands with an argument
/// before bare commands, or a coarser pattern fragments the span.
pub const PROTECTION_ORDER: [SpanClass; 17] = [
    SpanClass::Reserved,
    SpanClass::DisplayMath,
    SpanClass::InlineMath,
    SpanClass::Citation,
    SpanClass::Reference,
    SpanClass::Label,
    SpanClass::EnvironmentBegin,
    SpanClass::EnvironmentEnd,
    SpanClass::Section,
    SpanClass::Subsection,
    SpanClass::Subsubsection,
    SpanClass::Bold,
    SpanClass::Italic,
    SpanClass::Caption,
    SpanClass::Graphics,
    SpanClass::CommandWithArgument,
    SpanClass::BareCommand,
];

static DISPLAY_MATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\$[\s\S]*?\$\$").unwrap());
static INLINE_MATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$[^$]+\$").unwrap());
static CITATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\cite\{[^}]+\}").unwrap());
static REFERENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\ref\{[^}]+\}").unwrap());
static LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\label\{[^}]+\}").unwrap());
static ENV_BEGIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\begin\{[^}]+\}").unwrap());
static ENV_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\end\{[^}]+\}").unwrap());
static SECTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\section\{[^}]+\}").unwrap());
static SUBSECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\subsection\{[^}]+\}").unwrap());
static SUBSUBSECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\subsubsection\{[^}]+\}").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\textbf\{[^}]+\}").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\textit\{[^}]+\}").unwrap());
static CAPTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\caption\{[^}]+\}").unwrap());
static GRAPHICS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\includegraphics\[[^\]]*\]\{[^}]+\}").unwrap());
static COMMAND_WITH_ARGUMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+\{[^}]*\}").unwrap());
static BARE_COMMAND: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+").unwrap());

impl SpanClass {
    pub fn pattern(&self) -> &'static Regex {
        match self {
            SpanClass::Reserved => &RESERVED_REGEX,
            SpanClass::DisplayMath => &DISPLAY_MATH,
            SpanClass::InlineMath => &INLINE_MATH,
            SpanClass::Citation => &CITATION,
            SpanClass::Reference => &REFERENCE,
            SpanClass::Label => &LABEL,
            SpanClass::EnvironmentBegin => &ENV_BEGIN,
            SpanClass::EnvironmentEnd => &ENV_END,
            SpanClass::Section => &SECTION,
            SpanClass::Subsection => &SUBSECTION,
            SpanClass::Subsubsection => &SUBSUBSECTION,
            SpanClass::Bold => &BOLD,
            SpanClass::Italic => &ITALIC,
            SpanClass::Caption => &CAPTION,
            SpanClass::Graphics => &GRAPHICS,
            SpanClass::CommandWithArgument => &COMMAND_WITH_ARGUMENT,
            SpanClass::BareCommand => &BARE_COMMAND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_covers_every_class_once() {
        let unique: std::collections::BTreeSet<_> = PROTECTION_ORDER.iter().collect();
        assert_eq!(unique.len(), PROTECTION_ORDER.len());
        // Declaration order of the enum mirrors scan order
        let mut sorted = PROTECTION_ORDER;
        sorted.sort();
        assert_eq!(sorted, PROTECTION_ORDER);
    }

    #[test]
    fn test_display_math_spans_lines() {
        let text = "before $$a\n+ b$$ after";
        let m = SpanClass::DisplayMath.pattern().find(text).unwrap();
        assert_eq!(m.as_str(), "$$a\n+ b$$");
    }

    #[test]
    fn test_display_math_is_lazy() {
        let text = "$$a$$ and $$b$$";
        let found: Vec<_> = SpanClass::DisplayMath
            .pattern()
            .find_iter(text)
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["$$a$$", "$$b$$"]);
    }

    #[test]
    fn test_graphics_with_options() {
        let text = r"\includegraphics[width=0.5\textwidth]{fig/plot.pdf}";
        let m = SpanClass::Graphics.pattern().find(text).unwrap();
        assert_eq!(m.as_str(), text);
    }

    #[test]
    fn test_command_with_empty_argument() {
        let m = SpanClass::CommandWithArgument
            .pattern()
            .find(r"\maketitle{}")
            .unwrap();
        assert_eq!(m.as_str(), r"\maketitle{}");
    }

    #[test]
    fn test_citation_requires_argument() {
        assert!(!SpanClass::Citation.pattern().is_match(r"\cite{}"));
        assert!(SpanClass::Citation.pattern().is_match(r"\cite{smith2020,doe2021}"));
    }
}
