use regex::Regex;
use std::borrow::Cow;
use tracing::trace;

/// One substitution: a matcher and a replacement template.
///
/// Templates use `regex` expansion syntax (`${1}` for the first capture
/// group). A rule that does not match leaves the text untouched.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    template: String,
}

impl Rule {
    pub fn new(pattern: &str, template: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            template: template.to_string(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.template.as_str())
    }
}

/// A named, ordered list of rules applied one after another, each sweeping
/// the whole text produced by the previous rule.
#[derive(Debug, Clone)]
pub struct RuleGroup {
    name: &'static str,
    rules: Vec<Rule>,
}

impl RuleGroup {
    pub fn from_table(name: &'static str, table: &[(&str, &str)]) -> Result<Self, regex::Error> {
        let rules = table
            .iter()
            .map(|(pattern, template)| Rule::new(pattern, template))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { name, rules })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |current, rule| match rule.apply(&current) {
                Cow::Borrowed(_) => current,
                Cow::Owned(rewritten) => {
                    trace!(
                        group = self.name,
                        pattern = rule.pattern(),
                        template = rule.template(),
                        "rule fired"
                    );
                    rewritten
                }
            })
    }
}

/// A pass of the rule cascade
pub trait RewriteStage: Send + Sync {
    fn apply(&self, text: &str) -> String;
    fn name(&self) -> &str;
    fn rule_count(&self) -> usize;
}

impl RewriteStage for RuleGroup {
    fn apply(&self, text: &str) -> String {
        RuleGroup::apply(self, text)
    }

    fn name(&self) -> &str {
        self.name
    }

    fn rule_count(&self) -> usize {
        self.rules.len()
    }
}
