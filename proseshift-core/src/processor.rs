use crate::config::ShiftConfig;
use crate::error::ShiftResult;
use crate::protection::{self, placeholder};
use crate::rules::{engine::DebugConfig, RuleEngine};
use crate::types::*;
use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Captured intermediate outputs from each pipeline stage
/// Used for testing and diagnostics: inspect or compare each boundary
#[derive(Debug, Clone, serde::Serialize)]
pub struct PipelineStages {
    pub original: String,
    pub masked: String,
    pub placeholders: PlaceholderTable,
    pub rewritten: String,
    pub restored: String,
}

impl PipelineStages {
    /// Masked text with tokens shown as `⟦P{id}⟧`
    pub fn masked_display(&self) -> String {
        placeholder::display_form(&self.masked)
    }

    pub fn rewritten_display(&self) -> String {
        placeholder::display_form(&self.rewritten)
    }

    /// The span table as pretty JSON, for stage dumps
    pub fn placeholders_json(&self) -> ShiftResult<String> {
        Ok(serde_json::to_string_pretty(&self.placeholders)?)
    }
}

/// Simple profiler that collects timings for pipeline steps
pub struct StepProfiler {
    enabled: bool,
    timings: Vec<(String, Duration)>,
}

impl StepProfiler {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            timings: Vec::new(),
        }
    }

    pub fn time_step<F, R>(&mut self, step_name: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if !self.enabled {
            return f();
        }

        let start = Instant::now();
        let result = f();
        self.record(step_name, start.elapsed());
        result
    }

    pub fn record(&mut self, step_name: &str, elapsed: Duration) {
        if !self.enabled {
            return;
        }
        debug!(step = step_name, elapsed_us = elapsed.as_micros() as u64, "step timed");
        self.timings.push((step_name.to_string(), elapsed));
    }

    pub fn timings(&self) -> &[(String, Duration)] {
        &self.timings
    }

    pub fn print_summary(&self) {
        if !self.enabled || self.timings.is_empty() {
            return;
        }

        println!("\n📊 Performance Summary:");
        let total: Duration = self.timings.iter().map(|(_, d)| *d).sum();

        for (step, duration) in &self.timings {
            let percentage = if total.is_zero() {
                0.0
            } else {
                (duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            };
            println!(
                "   {:.<35} {:.2}ms ({:.1}%)",
                step,
                duration.as_secs_f64() * 1000.0,
                percentage
            );
        }
        println!("   {:.<35} {:.2}ms", "Total", total.as_secs_f64() * 1000.0);
    }
}

pub struct DocumentProcessor {
    rule_engine: RuleEngine,
    config: ShiftConfig,
}

impl DocumentProcessor {
    pub fn new(config: ShiftConfig) -> ShiftResult<Self> {
        Ok(Self {
            rule_engine: RuleEngine::new()?,
            config,
        })
    }

    pub fn with_defaults() -> ShiftResult<Self> {
        Self::new(ShiftConfig::default())
    }

    pub fn config(&self) -> &ShiftConfig {
        &self.config
    }

    pub fn set_debug_config(&mut self, debug_config: DebugConfig) {
        self.rule_engine.set_debug_config(debug_config);
    }

    /// Rewrite the prose of one document. Protected spans come back
    /// byte-identical.
    ///
    /// Never fails: a broken restoration (a rule swallowing a placeholder,
    /// which the token alphabet rules out) is logged and the best-effort text
    /// returned.
    pub fn transform(&self, text: &str) -> String {
        let masked = protection::protect(text);
        let rewritten = self.rewrite(&masked.text, &mut StepProfiler::new(false));
        match protection::restore(&rewritten, &masked.table) {
            Ok(restored) => restored,
            Err(e) => {
                warn!("{e}; returning partially restored text");
                protection::restore_lenient(&rewritten, &masked.table)
            }
        }
    }

    /// Same rewrite as [`transform`](Self::transform), with statistics and
    /// with restoration failures surfaced as errors
    pub fn transform_with_stats(&self, text: &str) -> ShiftResult<TransformOutcome> {
        self.transform_profiled(text, &mut StepProfiler::new(false))
    }

    pub fn transform_profiled(
        &self,
        text: &str,
        profiler: &mut StepProfiler,
    ) -> ShiftResult<TransformOutcome> {
        let masked = profiler.time_step("1. Protect", || protection::protect(text));
        let rewritten = self.rewrite(&masked.text, profiler);
        let restored =
            profiler.time_step("3. Restore", || protection::restore(&rewritten, &masked.table))?;

        let stats = TransformStats {
            original_chars: text.chars().count(),
            output_chars: restored.chars().count(),
            protected_spans: masked.table.len(),
            spans_by_class: masked.table.count_by_class(),
        };

        Ok(TransformOutcome {
            text: restored,
            stats,
        })
    }

    /// Run the pipeline and keep every intermediate text
    pub fn capture_stages(&self, text: &str) -> ShiftResult<PipelineStages> {
        let masked = protection::protect(text);
        debug!(spans = masked.table.len(), "stage 1: masked text captured");

        let rewritten = self.rewrite(&masked.text, &mut StepProfiler::new(false));
        debug!(bytes = rewritten.len(), "stage 2: rewritten text captured");

        let restored = protection::restore(&rewritten, &masked.table)?;
        debug!(bytes = restored.len(), "stage 3: restored text captured");

        Ok(PipelineStages {
            original: text.to_string(),
            masked: masked.text,
            placeholders: masked.table,
            rewritten,
            restored,
        })
    }

    fn rewrite(&self, masked: &str, profiler: &mut StepProfiler) -> String {
        if self.config.protect_only {
            debug!("protect-only mode - skipping rule cascade");
            return masked.to_string();
        }

        let output = self
            .rule_engine
            .apply_stages(masked, &self.config.pipeline);
        for (stage, elapsed) in &output.stage_timings {
            profiler.record(&format!("2. {stage}"), *elapsed);
        }
        output.text
    }

    /// Process one file. Without an explicit output path the result goes next
    /// to the input, named with the configured suffix.
    pub fn process_file(&self, input: &Path, output: Option<&Path>) -> Result<FileReport> {
        self.process_file_with_profiler(input, output, &mut StepProfiler::new(false))
    }

    pub fn process_file_with_profiler(
        &self,
        input: &Path,
        output: Option<&Path>,
        profiler: &mut StepProfiler,
    ) -> Result<FileReport> {
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input, None, &self.config.output_suffix));

        info!(input = %input.display(), "reading document");
        let content = std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?;

        let outcome = self
            .transform_profiled(&content, profiler)
            .with_context(|| format!("Failed to transform {}", input.display()))?;

        info!(output = %output.display(), "writing document");
        std::fs::write(&output, &outcome.text)
            .with_context(|| format!("Failed to write {}", output.display()))?;

        Ok(FileReport {
            input: input.to_path_buf(),
            output,
            stats: outcome.stats,
            input_sha256: sha256_hex(content.as_bytes()),
            output_sha256: sha256_hex(outcome.text.as_bytes()),
            processed_at: chrono::Utc::now(),
        })
    }

    /// Process several files independently. With an output directory (created
    /// if absent) outputs land there under the suffixed basename; otherwise
    /// next to each input.
    pub fn batch_process(
        &self,
        inputs: &[PathBuf],
        output_dir: Option<&Path>,
    ) -> Result<Vec<FileReport>> {
        if let Some(dir) = output_dir {
            if !dir.exists() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
                info!(dir = %dir.display(), "created output directory");
            }
        }

        inputs
            .iter()
            .map(|input| {
                let output = default_output_path(input, output_dir, &self.config.output_suffix);
                self.process_file(input, Some(&output))
            })
            .collect()
    }
}

/// `dir/paper.tex` → `dir/paper_humanized.tex`, or `out/paper_humanized.tex`
/// when an output directory is given
pub fn default_output_path(input: &Path, output_dir: Option<&Path>, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let file_name = match input.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };

    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
