use super::foreignizing::{self, MarkupLineGuard};
use super::lexicon;
use super::rule::{RewriteStage, RuleGroup};
use super::sentence;
use crate::config::PipelineConfig;
use crate::protection::placeholder;
use regex::Regex;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Stage names in cascade order. Configuration refers to stages by these names.
pub const STAGE_NAMES: [&str; 9] = [
    "VerbLexicon",
    "AdjectiveLexicon",
    "ConjunctionLexicon",
    "AdverbLexicon",
    "SentencePatterns",
    "Foreignizing",
    "CopulaImportance",
    "Possession",
    "ChangeOfState",
];

// Debug configuration for pipeline tracing
#[derive(Debug, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub filter_patterns: Vec<String>,
}

impl DebugConfig {
    pub fn new(enabled: bool, filter_patterns: Vec<String>) -> Self {
        Self {
            enabled,
            filter_patterns,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            filter_patterns: Vec::new(),
        }
    }
}

/// 1-based numbers of the lines matching any pattern. A pattern that is not a
/// valid regex is matched as a plain substring.
pub fn matching_lines(text: &str, patterns: &[String]) -> Vec<usize> {
    let matchers: Vec<Box<dyn Fn(&str) -> bool>> = patterns
        .iter()
        .map(|pattern| -> Box<dyn Fn(&str) -> bool> {
            // Try regex first, fall back to simple string contains
            match Regex::new(pattern) {
                Ok(regex) => Box::new(move |line: &str| regex.is_match(line)),
                Err(_) => {
                    let needle = pattern.clone();
                    Box::new(move |line: &str| line.contains(&needle))
                }
            }
        })
        .collect();

    text.lines()
        .enumerate()
        .filter(|(_, line)| matchers.iter().any(|matches| matches(line)))
        .map(|(index, _)| index + 1)
        .collect()
}

/// Debug utility to trace lines matching a filter through the cascade
pub fn debug_pipeline_lines(stage_name: &str, text: &str, debug_config: &DebugConfig) {
    if !debug_config.enabled || debug_config.filter_patterns.is_empty() {
        return;
    }

    let lines: Vec<&str> = text.lines().collect();
    for number in matching_lines(text, &debug_config.filter_patterns) {
        debug!(
            stage = stage_name,
            line = number,
            text = %placeholder::display_form(lines[number - 1]),
            "trace"
        );
    }
}

/// Text and per-stage timings from one run of the cascade
#[derive(Debug, Clone)]
pub struct CascadeOutput {
    pub text: String,
    pub stage_timings: Vec<(String, Duration)>,
}

/// The rule cascade. Built once; stages are immutable afterwards and the engine
/// can be shared across threads.
pub struct RuleEngine {
    stages: Vec<Box<dyn RewriteStage>>,
    debug_config: DebugConfig,
}

impl RuleEngine {
    pub fn new() -> Result<Self, regex::Error> {
        let stages: Vec<Box<dyn RewriteStage>> = vec![
            Box::new(RuleGroup::from_table(STAGE_NAMES[0], lexicon::VERBS)?),
            Box::new(RuleGroup::from_table(STAGE_NAMES[1], lexicon::ADJECTIVES)?),
            Box::new(RuleGroup::from_table(STAGE_NAMES[2], lexicon::CONJUNCTIONS)?),
            Box::new(RuleGroup::from_table(STAGE_NAMES[3], lexicon::ADVERBS)?),
            Box::new(RuleGroup::from_table(
                STAGE_NAMES[4],
                sentence::SENTENCE_PATTERNS,
            )?),
            Box::new(RuleGroup::from_table(STAGE_NAMES[5], foreignizing::GENERAL)?),
            Box::new(MarkupLineGuard::new(RuleGroup::from_table(
                STAGE_NAMES[6],
                foreignizing::COPULA_IMPORTANCE,
            )?)),
            Box::new(RuleGroup::from_table(STAGE_NAMES[7], foreignizing::POSSESSION)?),
            Box::new(RuleGroup::from_table(
                STAGE_NAMES[8],
                foreignizing::CHANGE_OF_STATE,
            )?),
        ];

        Ok(Self {
            stages,
            debug_config: DebugConfig::disabled(),
        })
    }

    pub fn set_debug_config(&mut self, debug_config: DebugConfig) {
        self.debug_config = debug_config;
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// `(stage name, number of rules)` in cascade order
    pub fn stage_rule_counts(&self) -> Vec<(&str, usize)> {
        self.stages
            .iter()
            .map(|stage| (stage.name(), stage.rule_count()))
            .collect()
    }

    /// Run every enabled stage in cascade order
    pub fn apply_stages(&self, masked: &str, pipeline: &PipelineConfig) -> CascadeOutput {
        for unknown in pipeline.unknown_stages(&STAGE_NAMES) {
            warn!("Unknown stage in config: {unknown}. Ignoring...");
        }

        debug_pipeline_lines("Input", masked, &self.debug_config);

        let mut text = masked.to_string();
        let mut stage_timings = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            if !pipeline.is_enabled(stage.name()) {
                debug!(stage = stage.name(), "skipping disabled stage");
                continue;
            }

            let stage_start = Instant::now();
            text = stage.apply(&text);
            stage_timings.push((stage.name().to_string(), stage_start.elapsed()));

            debug!(stage = stage.name(), bytes = text.len(), "stage applied");
            debug_pipeline_lines(stage.name(), &text, &self.debug_config);
        }

        CascadeOutput {
            text,
            stage_timings,
        }
    }

    /// Run the whole cascade with every stage enabled
    pub fn apply(&self, masked: &str) -> String {
        self.apply_stages(masked, &PipelineConfig::default()).text
    }
}
