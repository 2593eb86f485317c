// Rule cascade
// This file coordinates the rule system but the tables live in:
// - lexicon.rs: verb, adjective, conjunction and adverb dictionaries
// - sentence.rs: multi-word sentence patterns
// - foreignizing.rs: copula, possession and change-of-state passes
// - rule.rs: Rule, RuleGroup and the RewriteStage trait
// - engine.rs: RuleEngine, which runs the stages in order

pub mod engine;
pub mod foreignizing;
pub mod lexicon;
pub mod rule;
pub mod sentence;

pub use engine::*;
pub use rule::{RewriteStage, Rule, RuleGroup};
