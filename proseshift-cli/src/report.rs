use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use proseshift_core::{FileReport, PipelineStages, SpanClass, TransformStats};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Console summary for one processed file
pub fn format_report(report: &FileReport) -> Vec<String> {
    vec![
        format!("📄 {}", report.input.display()),
        format!("   ➜ {}", report.output.display()),
        format!("   Original length: {} chars", report.stats.original_chars),
        format!("   New length:      {} chars", report.stats.output_chars),
        format!("   Change:          {:+.1}%", report.stats.change_percent()),
    ]
}

/// One-line roll-up for batch runs
pub fn format_totals(reports: &[FileReport]) -> String {
    let totals = TransformStats {
        original_chars: reports.iter().map(|r| r.stats.original_chars).sum(),
        output_chars: reports.iter().map(|r| r.stats.output_chars).sum(),
        ..Default::default()
    };
    format!(
        "📊 {} file(s): {} → {} chars ({:+.1}%)",
        reports.len(),
        totals.original_chars,
        totals.output_chars,
        totals.change_percent()
    )
}

/// Contents of `summary.json` in a stage dump
#[derive(Debug, Serialize)]
pub struct StageSummary {
    pub input: String,
    pub captured_at: DateTime<Utc>,
    pub stage_counts: StageCounts,
}

#[derive(Debug, Serialize)]
pub struct StageCounts {
    pub original_chars: usize,
    pub protected_spans: usize,
    pub spans_by_class: BTreeMap<SpanClass, usize>,
    pub rewritten_chars: usize,
    pub restored_chars: usize,
}

/// Write every pipeline boundary to `output_dir`, plus a `summary.json`
/// with span counts per class. Returns the files written, in stage order.
pub fn save_stages(stages: &PipelineStages, input: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let mut written = Vec::new();
    let mut write = |name: &str, content: &str| -> Result<()> {
        let path = output_dir.join(name);
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
        Ok(())
    };

    // Stage 0: input as read
    write("stage0_original.tex", &stages.original)?;

    // Stage 1: masked text, tokens shown as ⟦P{id}⟧, and the span table
    write("stage1_masked.txt", &stages.masked_display())?;
    write("stage1_placeholders.json", &stages.placeholders_json()?)?;

    // Stage 2: cascade output, still masked
    write("stage2_rewritten.txt", &stages.rewritten_display())?;

    // Stage 3: restored document
    write("stage3_restored.tex", &stages.restored)?;

    // Summary file: quick reference for validation scripts
    let summary = StageSummary {
        input: input.display().to_string(),
        captured_at: Utc::now(),
        stage_counts: StageCounts {
            original_chars: stages.original.chars().count(),
            protected_spans: stages.placeholders.len(),
            spans_by_class: stages.placeholders.count_by_class(),
            rewritten_chars: stages.rewritten.chars().count(),
            restored_chars: stages.restored.chars().count(),
        },
    };
    write("summary.json", &serde_json::to_string_pretty(&summary)?)?;

    Ok(written)
}
