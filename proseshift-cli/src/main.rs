use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

// Import from proseshift-core
use proseshift_core::rules::DebugConfig;
use proseshift_core::{DocumentProcessor, RuleEngine, ShiftConfig, StepProfiler};

// Import CLI utilities
use proseshift::{format_report, format_totals, save_stages};

#[derive(Parser)]
#[command(name = "proseshift")]
#[command(about = "Rewrite the prose of LaTeX documents, leaving math, citations and markup untouched")]
struct Args {
    /// LaTeX files to process
    #[arg(required_unless_present = "show_configs")]
    input_files: Vec<PathBuf>,

    /// Output file path (single-file mode only; defaults to <stem>_humanized.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output directory (switches to batch mode)
    #[arg(short = 'd', long)]
    output_dir: Option<PathBuf>,

    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Protect and restore only (bypass the rule cascade)
    #[arg(long)]
    protect_only: bool,

    /// Dump all intermediate pipeline stage outputs for the first input
    /// Captures: original, masked text, placeholder table, rewritten text, restored text
    #[arg(long)]
    dump_stages: bool,

    /// Directory for stage dump output
    #[arg(long, default_value = "test_outputs/stages")]
    stages_dir: PathBuf,

    /// Log each line matching PATTERN after every cascade stage (regex, or plain substring)
    #[arg(long = "debug-filter", value_name = "PATTERN")]
    debug_filter: Vec<String>,

    /// Enable detailed profiling of all pipeline steps
    #[arg(long)]
    profile: bool,

    /// Show available config options and exit
    #[arg(long)]
    show_configs: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise warnings only, plus the traced lines when filtering
    let default_filter = if args.debug_filter.is_empty() {
        "warn"
    } else {
        "warn,proseshift_core::rules=debug"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("🦀 Proseshift LaTeX Rewriter");

    if args.show_configs {
        return show_help();
    }

    // Load config, then apply CLI overrides
    let mut config = ShiftConfig::load_with_fallback(args.config.as_deref());
    if let Some(config_path) = &args.config {
        println!("📋 Loaded config from: {config_path}");
    } else {
        println!("📋 Using default config");
    }
    if args.protect_only {
        config.protect_only = true;
    }

    let mut processor = DocumentProcessor::new(config)?;
    if processor.config().protect_only {
        println!("🛡️  Protect-only mode: the rule cascade is bypassed");
    }
    if !args.debug_filter.is_empty() {
        processor.set_debug_config(DebugConfig::new(true, args.debug_filter.clone()));
    }

    // Stage dump mode: capture and save all intermediates
    if args.dump_stages {
        println!("\n🔬 Pipeline stage dump mode");
        let input = &args.input_files[0];
        if let Err(e) = dump_stages(&processor, input, &args.stages_dir) {
            eprintln!("❌ Stage dump failed: {e:#}");
            std::process::exit(1);
        }
        println!("\n✅ All stages dumped to: {}", args.stages_dir.display());
        return Ok(());
    }

    let single_file = args.input_files.len() == 1 && args.output_dir.is_none();
    info!(
        mode = if single_file { "single" } else { "batch" },
        inputs = args.input_files.len(),
        "processing mode selected"
    );
    let result = if single_file {
        run_single(&processor, &args)
    } else {
        run_batch(&processor, &args)
    };

    if let Err(e) = result {
        eprintln!("❌ Processing failed: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_single(processor: &DocumentProcessor, args: &Args) -> Result<()> {
    let input = &args.input_files[0];
    let mut profiler = StepProfiler::new(args.profile);

    println!("📄 Processing: {}", input.display());
    let report = processor.process_file_with_profiler(input, args.output.as_deref(), &mut profiler)?;

    println!("✅ Successfully processed document");
    for line in format_report(&report) {
        println!("{line}");
    }
    profiler.print_summary();
    Ok(())
}

fn run_batch(processor: &DocumentProcessor, args: &Args) -> Result<()> {
    if args.output.is_some() {
        println!("⚠️  --output is ignored when processing several files; use --output-dir");
    }

    println!("📚 Processing {} file(s)", args.input_files.len());
    let mut profiler = StepProfiler::new(args.profile);
    let reports = profiler.time_step("Batch", || {
        processor.batch_process(&args.input_files, args.output_dir.as_deref())
    })?;

    for report in &reports {
        for line in format_report(report) {
            println!("{line}");
        }
    }
    println!("\n{}", format_totals(&reports));
    profiler.print_summary();
    Ok(())
}

fn dump_stages(processor: &DocumentProcessor, input: &Path, stages_dir: &Path) -> Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let stages = processor.capture_stages(&content)?;
    for path in save_stages(&stages, input, stages_dir)? {
        println!("  💾 {}", path.display());
    }
    Ok(())
}

fn show_help() -> Result<()> {
    println!("\n📋 Available Configuration Options:");
    println!("  --config <path>         Load custom config file");
    println!("  --output <path>         Output file (single input only)");
    println!("  --output-dir <dir>      Write every output into <dir> (batch mode)");
    println!("  --protect-only          Mask and restore without rewriting");
    println!("  --dump-stages           Write each pipeline boundary to --stages-dir");
    println!("  --debug-filter <pat>    Trace lines matching <pat> through the cascade");
    println!("  --profile               Time protect, every stage and restore");

    println!("\n🔧 Cascade stages (in order):");
    let engine = RuleEngine::new()?;
    for (name, rules) in engine.stage_rule_counts() {
        println!("  {name:<20} {rules} rules");
    }

    println!("\n📁 Config file (YAML):");
    println!("  output_suffix: _humanized");
    println!("  protect_only: false");
    println!("  pipeline:");
    println!("    stages:");
    println!("      - name: Possession");
    println!("        enabled: false");

    println!("\n📝 Usage Examples:");
    println!("  proseshift paper.tex");
    println!("  proseshift paper.tex -o rewritten.tex");
    println!("  proseshift chapters/*.tex -d out/ -c proseshift.yaml");
    println!("  proseshift paper.tex --debug-filter 'results' --profile");
    Ok(())
}
