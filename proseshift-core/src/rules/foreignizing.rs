use super::rule::{RewriteStage, RuleGroup};

// Syntactic "foreignizing" passes. Order inside and across these tables is
// part of the output: later passes re-match text produced by earlier ones.

/// General periphrastic rewrites: copula, genitive, quantities, time
/// expressions and reporting verbs.
pub const GENERAL: &[(&str, &str)] = &[
    (r"\bis (a|an|the) (\w+)", "makes itself sit as ${1} ${2}"),
    (r"\b(\w+) of the (\w+)", "${1} that belongs to the ${2}"),
    (r"\bmultiple\b", "bunch of"),
    (r"\bseveral\b", "quite a few"),
    (r"\bvarious\b", "different kinds of"),
    (r"\bcurrently\b", "at time that is now"),
    (r"\bnow\b", "at time that is now"),
    (r"\bin recent years\b", "in years that came not long back"),
    (r"showed that", "let see that"),
    (r"found that", "came to find that"),
    (r"proved that", "made proving that"),
];

/// Importance copula, applied line by line outside markup lines
pub const COPULA_IMPORTANCE: &[(&str, &str)] = &[
    (r"(\w+) is (important|essential|crucial|vital)", "${1} carries being ${2}"),
    (r"is the (\w+)", "makes itself sit as the ${1}"),
];

pub const POSSESSION: &[(&str, &str)] = &[
    (r"\bhas (\w+)\b", "carries having ${1}"),
    (r"\bhave (\w+)\b", "carry having ${1}"),
    (r"\bwith (\w+)\b", "bringing with itself ${1}"),
];

pub const CHANGE_OF_STATE: &[(&str, &str)] = &[
    (r"to improve", "to make coming better"),
    (r"to enhance", "to make coming better"),
    (r"to increase", "to make going up"),
    (r"to decrease", "to make going down"),
    (r"to develop", "to make coming to be"),
    (r"\bimprovement\b", "getting better"),
    (r"\bimprovements\b", "getting better"),
    (r"\bdevelopment\b", "coming to be"),
    (r"\bincrease\b", "going up"),
    (r"\bdecrease\b", "going down"),
];

/// Runs a rule group on each line separately, skipping lines that look like
/// markup: after trimming they start with `\`, or they contain `\begin` or
/// `\end` anywhere.
pub struct MarkupLineGuard {
    inner: RuleGroup,
}

impl MarkupLineGuard {
    pub fn new(inner: RuleGroup) -> Self {
        Self { inner }
    }

    pub fn is_markup_line(line: &str) -> bool {
        line.trim().starts_with('\\') || line.contains("\\begin") || line.contains("\\end")
    }
}

impl RewriteStage for MarkupLineGuard {
    fn apply(&self, text: &str) -> String {
        text.split('\n')
            .map(|line| {
                if Self::is_markup_line(line) {
                    line.to_string()
                } else {
                    self.inner.apply(line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn rule_count(&self) -> usize {
        self.inner.rule_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &'static str, table: &[(&str, &str)]) -> RuleGroup {
        RuleGroup::from_table(name, table).unwrap()
    }

    #[test]
    fn test_general_copula_keeps_noun_phrase() {
        let general = group("Foreignizing", GENERAL);
        assert_eq!(
            general.apply("It is a model"),
            "It makes itself sit as a model"
        );
    }

    #[test]
    fn test_time_expressions_cascade() {
        // "currently" becomes a phrase ending in "now", which the next rule
        // expands again
        let general = group("Foreignizing", GENERAL);
        assert_eq!(
            general.apply("currently"),
            "at time that is at time that is now"
        );
    }

    #[test]
    fn test_genitive() {
        let general = group("Foreignizing", GENERAL);
        assert_eq!(
            general.apply("the end of the road"),
            "the end that belongs to the road"
        );
    }

    #[test]
    fn test_importance_pass_skips_markup_lines() {
        let guard = MarkupLineGuard::new(group("CopulaImportance", COPULA_IMPORTANCE));
        let text = "Speed is important\n\\item Speed is important\n  \\begin{x} Speed is vital";
        assert_eq!(
            guard.apply(text),
            "Speed carries being important\n\\item Speed is important\n  \\begin{x} Speed is vital"
        );
    }

    #[test]
    fn test_importance_pass_keeps_line_structure() {
        let guard = MarkupLineGuard::new(group("CopulaImportance", COPULA_IMPORTANCE));
        assert_eq!(guard.apply("a\n\nb\n"), "a\n\nb\n");
    }

    #[test]
    fn test_markup_line_detection() {
        assert!(MarkupLineGuard::is_markup_line("   \\section{A}"));
        assert!(MarkupLineGuard::is_markup_line("text \\end{itemize}"));
        assert!(!MarkupLineGuard::is_markup_line("plain prose"));
    }

    #[test]
    fn test_possession() {
        let possession = group("Possession", POSSESSION);
        assert_eq!(
            possession.apply("It has merit and they have time"),
            "It carries having merit and they carry having time"
        );
        assert_eq!(
            possession.apply("with care"),
            "bringing with itself care"
        );
    }

    #[test]
    fn test_change_of_state_collapses_synonyms() {
        let change = group("ChangeOfState", CHANGE_OF_STATE);
        assert_eq!(change.apply("to improve"), change.apply("to enhance"));
        assert_eq!(change.apply("improvement"), change.apply("improvements"));
        assert_eq!(change.apply("an increase"), "an going up");
    }
}
