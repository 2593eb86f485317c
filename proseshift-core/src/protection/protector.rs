use super::patterns::PROTECTION_ORDER;
use super::placeholder;
use crate::types::{MaskedDocument, PlaceholderTable, SpanClass};
use tracing::debug;

/// Mask every protected span in `text`.
///
/// Each class in [`PROTECTION_ORDER`] is one fold step over the text produced
/// by the previous step, so a coarser class only ever sees what the finer
/// classes left behind. Already-masked regions are tokens, and tokens match no
/// protection pattern except as opaque content inside a coarser span.
pub fn protect(text: &str) -> MaskedDocument {
    let mut table = PlaceholderTable::new();

    let masked = PROTECTION_ORDER
        .iter()
        .fold(text.to_string(), |current, &class| {
            mask_class(class, &current, &mut table)
        });

    debug!(
        spans = table.len(),
        input_bytes = text.len(),
        masked_bytes = masked.len(),
        "protection complete"
    );

    MaskedDocument {
        text: masked,
        table,
    }
}

/// Replace all non-overlapping matches of one class, left to right
fn mask_class(class: SpanClass, text: &str, table: &mut PlaceholderTable) -> String {
    let mut masked = String::with_capacity(text.len());
    let mut last = 0;
    let mut matched = 0;

    for m in class.pattern().find_iter(text) {
        masked.push_str(&text[last..m.start()]);
        let id = table.push(m.as_str(), class);
        masked.push_str(&placeholder::encode(id));
        last = m.end();
        matched += 1;
    }
    masked.push_str(&text[last..]);

    if matched > 0 {
        debug!(?class, matched, "masked spans");
    }
    masked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn originals(doc: &MaskedDocument) -> Vec<(&str, SpanClass)> {
        doc.table
            .iter()
            .map(|s| (s.original.as_str(), s.class))
            .collect()
    }

    #[test]
    fn test_plain_text_is_untouched() {
        let doc = protect("Nothing to see here.");
        assert_eq!(doc.text, "Nothing to see here.");
        assert!(doc.table.is_empty());
    }

    #[test]
    fn test_citation_claimed_before_generic_command() {
        let doc = protect(r"As \cite{foo2020} argued.");
        assert_eq!(originals(&doc), vec![(r"\cite{foo2020}", SpanClass::Citation)]);
        assert_eq!(doc.text, format!("As {} argued.", placeholder::encode(0)));
    }

    #[test]
    fn test_display_math_before_inline_math() {
        let doc = protect("$$x^2$$ and $y$");
        assert_eq!(
            originals(&doc),
            vec![
                ("$$x^2$$", SpanClass::DisplayMath),
                ("$y$", SpanClass::InlineMath),
            ]
        );
    }

    #[test]
    fn test_ids_follow_class_order_then_position() {
        let doc = protect(r"\textbf{b} then \label{l} then \cite{c}");
        let classes: Vec<_> = doc.table.iter().map(|s| s.class).collect();
        assert_eq!(
            classes,
            vec![SpanClass::Citation, SpanClass::Label, SpanClass::Bold]
        );
        assert_eq!(
            doc.text,
            format!(
                "{} then {} then {}",
                placeholder::encode(2),
                placeholder::encode(1),
                placeholder::encode(0)
            )
        );
    }

    #[test]
    fn test_command_with_argument_before_bare_command() {
        let doc = protect(r"\emph{word} and \noindent text");
        assert_eq!(
            originals(&doc),
            vec![
                (r"\emph{word}", SpanClass::CommandWithArgument),
                (r"\noindent", SpanClass::BareCommand),
            ]
        );
    }

    #[test]
    fn test_coarser_span_may_enclose_a_token() {
        let doc = protect(r"\footnote{see \cite{x}}");
        assert_eq!(doc.table.len(), 2);
        assert_eq!(doc.table.get(0).unwrap().class, SpanClass::Citation);
        let outer = doc.table.get(1).unwrap();
        assert_eq!(outer.class, SpanClass::CommandWithArgument);
        assert_eq!(outer.original, format!("\\footnote{{see {}}}", placeholder::encode(0)));
        assert_eq!(doc.text, placeholder::encode(1));
    }

    #[test]
    fn test_reserved_characters_are_protected_first() {
        let forged = placeholder::encode(0);
        let doc = protect(&format!("fake {forged} token"));
        assert_eq!(doc.table.get(0).unwrap().class, SpanClass::Reserved);
        assert_eq!(doc.table.get(0).unwrap().original, forged);
    }

    #[test]
    fn test_environment_markers() {
        let doc = protect("\\begin{figure}\n\\centering\n\\end{figure}");
        assert_eq!(
            originals(&doc),
            vec![
                (r"\begin{figure}", SpanClass::EnvironmentBegin),
                (r"\end{figure}", SpanClass::EnvironmentEnd),
                (r"\centering", SpanClass::BareCommand),
            ]
        );
    }
}
