use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Parser, ValueEnum};
use denorm_eval::{build_report, EvalConfig, EvaluatorBuilder, ReportContext};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

#[path = "denorm_eval/json_report_formatter.rs"]
mod json_report_formatter;
#[path = "denorm_eval/text_report_formatter.rs"]
mod text_report_formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    /// One JSON document; aligned errors are embedded when --print-errors is set.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "denorm_eval")]
#[command(about = "Sentence, word and category error rates of a hypothesis corpus")]
struct Args {
    /// Text file with reference sentences, one per line
    #[arg(long, short = 'r', env = "DENORM_EVAL_REFERENCE")]
    reference: PathBuf,
    /// Text file with hypothesis sentences, line-aligned with the reference
    #[arg(long, short = 'y', env = "DENORM_EVAL_HYPOTHESIS")]
    hypothesis: PathBuf,
    /// Language section to use from the category config
    #[arg(long, short = 'l', env = "DENORM_EVAL_LANG")]
    lang: String,
    /// JSON config with copy chars, punctuation and symbols per language
    #[arg(
        long,
        short = 'c',
        env = "DENORM_EVAL_CONFIG",
        default_value = EvalConfig::DEFAULT_CONFIG_PATH
    )]
    config: PathBuf,
    /// File for the evaluation report (default: stdout)
    #[arg(long, short = 'o', env = "DENORM_EVAL_OUTFILE")]
    outfile: Option<PathBuf>,
    /// Print aligned errors
    #[arg(long, default_value_t = false)]
    print_errors: bool,
    /// File for the aligned errors in text mode (default: stdout)
    #[arg(long, env = "DENORM_EVAL_OUTFILE_ERRORS")]
    outfile_errors: Option<PathBuf>,
    /// Overwrite existing output files
    #[arg(long, short = 'f', default_value_t = false)]
    force_overwrite: bool,
    #[arg(
        long,
        env = "DENORM_EVAL_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Text
    )]
    output_format: OutputFormat,
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), String> {
    let args = Args::parse();

    require_path_exists(&args.reference, "Missing reference file.")?;
    require_path_exists(
        &args.hypothesis,
        "Missing hypothesis file. Generate hypotheses before evaluating.",
    )?;

    let mut report_out = open_output(args.outfile.as_deref(), args.force_overwrite)?;
    let mut errors_out = match (args.print_errors, args.output_format) {
        (true, OutputFormat::Text) => {
            Some(open_output(args.outfile_errors.as_deref(), args.force_overwrite)?)
        }
        _ => None,
    };

    let evaluator = EvaluatorBuilder::new(EvalConfig {
        config_path: args.config.to_string_lossy().to_string(),
        lang: args.lang.clone(),
    })
    .build()
    .map_err(|err| format!("Failed to load category config: {err}"))?;

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {spinner} {pos} line pairs {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.set_message("evaluating...");
    let evaluation = evaluator
        .evaluate_files_with_progress(&args.reference, &args.hypothesis, |_| progress.inc(1))
        .map_err(|err| format!("Failed to evaluate corpus: {err}"))?;
    progress.finish_and_clear();

    let alignments = if args.print_errors {
        evaluator
            .alignments_from_files(&args.reference, &args.hypothesis)
            .map_err(|err| format!("Failed to align corpus: {err}"))?
    } else {
        Vec::new()
    };

    let reference_path = args.reference.display().to_string();
    let hypothesis_path = args.hypothesis.display().to_string();
    let context = ReportContext {
        generated_at: Utc::now().to_rfc3339(),
        reference_path: &reference_path,
        hypothesis_path: &hypothesis_path,
        lang: Some(&args.lang),
        category_config: evaluator.category_config(),
    };

    match args.output_format {
        OutputFormat::Text => {
            let report = build_report(context, &evaluation, Vec::new())
                .map_err(|err| format!("Failed to build report: {err}"))?;
            write_text(
                &mut report_out,
                &text_report_formatter::format_report(&report),
            )?;
            if let Some(errors_out) = errors_out.as_mut() {
                write_text(
                    errors_out,
                    &text_report_formatter::format_alignments(&alignments),
                )?;
            }
        }
        OutputFormat::Json => {
            let report = build_report(context, &evaluation, alignments)
                .map_err(|err| format!("Failed to build report: {err}"))?;
            json_report_formatter::write_report(&mut report_out, &report)?;
        }
    }

    report_out
        .flush()
        .map_err(|err| format!("Failed to flush report output: {err}"))?;
    if let Some(errors_out) = errors_out.as_mut() {
        errors_out
            .flush()
            .map_err(|err| format!("Failed to flush aligned errors output: {err}"))?;
    }
    Ok(())
}

/// Stdout when no path is given. Refuses to replace an existing file unless
/// `force` is set.
fn open_output(path: Option<&Path>, force: bool) -> Result<Box<dyn Write>, String> {
    let Some(path) = path else {
        return Ok(Box::new(io::stdout().lock()));
    };
    if path.is_file() && !force {
        return Err(format!(
            "File '{}' exists already. Choose another file name or use --force-overwrite.",
            path.display()
        ));
    }
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|err| {
            format!(
                "Failed to create output directory '{}': {err}",
                parent.display()
            )
        })?;
    }
    let file = File::create(path)
        .map_err(|err| format!("Failed to create output file '{}': {err}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

fn write_text(out: &mut Box<dyn Write>, text: &str) -> Result<(), String> {
    out.write_all(text.as_bytes())
        .map_err(|err| format!("Failed to write output: {err}"))
}

fn require_path_exists(path: &Path, message: &str) -> Result<(), String> {
    if path.exists() {
        return Ok(());
    }
    Err(format!("{message} Missing path: {}", path.display()))
}
