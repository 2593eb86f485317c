use super::placeholder::{self, TOKEN_REGEX};
use crate::error::RestoreError;
use crate::types::{PlaceholderTable, SpanClass};

/// Splice every protected span back into `text`.
///
/// One left-to-right scan for token shapes; each token is replaced by its
/// span's original text. A span whose original encloses earlier tokens is
/// expanded recursively, but only for ids below its own, which bounds the
/// recursion. `Reserved` spans are literal input and are never expanded.
/// Tokens with ids outside the table are left as they are.
///
/// Fails if a span of the table never appears.
pub fn restore(text: &str, table: &PlaceholderTable) -> Result<String, RestoreError> {
    let mut consumed = vec![false; table.len()];
    let restored = expand(text, table, table.len(), &mut consumed);

    if let Some(id) = consumed.iter().position(|seen| !seen) {
        return Err(RestoreError::UnconsumedSpan { id });
    }
    Ok(restored)
}

/// Like [`restore`], but never fails: spans that did not reappear are simply
/// dropped from the accounting.
pub fn restore_lenient(text: &str, table: &PlaceholderTable) -> String {
    let mut consumed = vec![false; table.len()];
    expand(text, table, table.len(), &mut consumed)
}

fn expand(text: &str, table: &PlaceholderTable, limit: usize, consumed: &mut [bool]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in TOKEN_REGEX.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        last = m.end();

        let span = placeholder::decode(m.as_str())
            .filter(|id| *id < limit)
            .and_then(|id| table.get(id));
        match span {
            Some(span) => {
                consumed[span.id] = true;
                if span.class == SpanClass::Reserved {
                    out.push_str(&span.original);
                } else {
                    out.push_str(&expand(&span.original, table, span.id, consumed));
                }
            }
            None => out.push_str(m.as_str()),
        }
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protection::protect;

    #[test]
    fn test_roundtrip_plain_markup() {
        let original = r"See \cite{a} and \ref{fig:1} where $x=1$.";
        let doc = protect(original);
        assert_eq!(restore(&doc.text, &doc.table).unwrap(), original);
    }

    #[test]
    fn test_roundtrip_nested_spans() {
        let original = r"Text\footnote{as in \cite{b} with $y$} end.";
        let doc = protect(original);
        assert_eq!(restore(&doc.text, &doc.table).unwrap(), original);
    }

    #[test]
    fn test_roundtrip_forged_token_in_input() {
        let original = format!("a {} b \\cite{{c}}", placeholder::encode(0));
        let doc = protect(&original);
        assert_eq!(restore(&doc.text, &doc.table).unwrap(), original);
    }

    #[test]
    fn test_restore_follows_rewritten_positions() {
        let doc = protect(r"word \cite{a} word");
        let rewritten = doc.text.replace("word", "many words");
        assert_eq!(
            restore(&rewritten, &doc.table).unwrap(),
            r"many words \cite{a} many words"
        );
    }

    #[test]
    fn test_missing_span_is_an_error() {
        let doc = protect(r"\cite{a} and \ref{b}");
        let dropped = doc.text.replace(&placeholder::encode(1), "");
        assert_eq!(
            restore(&dropped, &doc.table),
            Err(RestoreError::UnconsumedSpan { id: 1 })
        );
    }

    #[test]
    fn test_lenient_restore_ignores_missing_spans() {
        let doc = protect(r"\footnote{see \cite{x}} and \ref{b}");
        let dropped = doc.text.replace(&placeholder::encode(1), "");
        assert_eq!(
            restore_lenient(&dropped, &doc.table),
            r"\footnote{see \cite{x}} and "
        );
    }

    #[test]
    fn test_unknown_token_left_verbatim() {
        let table = PlaceholderTable::new();
        let text = format!("x {} y", placeholder::encode(7));
        assert_eq!(restore(&text, &table).unwrap(), text);
    }
}
