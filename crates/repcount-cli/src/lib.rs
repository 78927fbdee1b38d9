//! Repcount CLI - argument parsing and dispatch
//!
//! A file source runs one session; a directory source runs one session per
//! landmark file inside it.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use repcount_core::Side;
use repcount_exercise::ExerciseKind;
use repcount_runtime::{
    run_batch, run_batch_parallel, run_file, BatchReport, LogFormat, SessionConfig, SessionReport,
};

/// Count exercise repetitions in pose landmark streams
#[derive(Parser, Debug)]
#[command(name = "repcount", version, about)]
pub struct Cli {
    /// Exercise to count (curl, squat, raise)
    #[arg(long, default_value = "curl", value_parser = parse_exercise)]
    pub exercise: ExerciseKind,

    /// Side of the body to track (left, right)
    #[arg(long, default_value = "left", value_parser = parse_side)]
    pub side: Side,

    /// Landmark file (.jsonl) or a directory of them
    #[arg(long)]
    pub source: PathBuf,

    /// Directory for per-input session logs
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Process directory inputs on parallel threads
    #[arg(long)]
    pub parallel: bool,

    /// Log event format (pretty, json)
    #[arg(long, default_value = "pretty")]
    pub log_format: LogFormat,
}

fn parse_exercise(s: &str) -> Result<ExerciseKind, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_side(s: &str) -> Result<Side, String> {
    s.parse().map_err(|e| format!("{}", e))
}

impl Cli {
    /// Session settings shared by every input
    pub fn session_template(&self) -> SessionConfig {
        let config = SessionConfig::new(self.exercise, self.side);
        match &self.output {
            Some(dir) => config.with_log_dir(dir),
            None => config,
        }
    }
}

/// Outcome of a CLI run
#[derive(Debug)]
pub enum Outcome {
    Single(SessionReport),
    Batch(BatchReport),
}

/// Run the command described by `cli`
pub fn execute(cli: &Cli) -> anyhow::Result<Outcome> {
    let template = cli.session_template();

    if cli.source.is_dir() {
        let report = if cli.parallel {
            run_batch_parallel(&cli.source, &template)
        } else {
            run_batch(&cli.source, &template)
        }
        .with_context(|| format!("batch over {}", cli.source.display()))?;
        Ok(Outcome::Batch(report))
    } else {
        let report = run_file(&cli.source, &template)
            .with_context(|| format!("processing {}", cli.source.display()))?;
        Ok(Outcome::Single(report))
    }
}

/// Print a rep summary for `outcome`
pub fn print_summary(out: &mut impl Write, outcome: &Outcome) -> std::io::Result<()> {
    match outcome {
        Outcome::Single(report) => print_report(out, report),
        Outcome::Batch(batch) => {
            for entry in &batch.entries {
                match &entry.result {
                    Ok(report) => print_report(out, report)?,
                    Err(e) => writeln!(out, "{}: failed ({})", entry.input.display(), e)?,
                }
            }
            writeln!(out, "Total reps: {}", batch.total_reps())
        }
    }
}

fn print_report(out: &mut impl Write, report: &SessionReport) -> std::io::Result<()> {
    write!(
        out,
        "{}: {} reps ({} {}, {} frames, {} skipped)",
        report.input_name,
        report.reps(),
        report.exercise,
        report.side,
        report.stats.frames,
        report.stats.skipped
    )?;
    if let Some(path) = &report.log_path {
        write!(out, " -> {}", path.display())?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["repcount", "--source", "set.jsonl"]).unwrap();
        assert_eq!(cli.exercise, ExerciseKind::Curl);
        assert_eq!(cli.side, Side::Left);
        assert_eq!(cli.log_format, LogFormat::Pretty);
        assert!(!cli.parallel);
        assert_eq!(cli.session_template().log_dir, None);
    }

    #[test]
    fn test_parse_full() {
        let cli = Cli::try_parse_from([
            "repcount",
            "--exercise",
            "raise",
            "--side",
            "right",
            "--source",
            "videos",
            "--output",
            "out",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.exercise, ExerciseKind::LateralRaise);
        assert_eq!(cli.side, Side::Right);
        assert_eq!(cli.log_format, LogFormat::Json);
        assert_eq!(cli.session_template().log_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_rejects_unknown_exercise() {
        assert!(Cli::try_parse_from(["repcount", "--exercise", "plank", "--source", "x"]).is_err());
    }

    #[test]
    fn test_directory_source_runs_batch() {
        use repcount_exercise::synth::frame_for;
        use repcount_runtime::SourceFrame;

        let dir = tempfile::tempdir().unwrap();
        let lines: Vec<String> = [180.0, 80.0, 180.0, 80.0]
            .iter()
            .map(|&a| {
                SourceFrame::new(frame_for(ExerciseKind::Squat, Side::Left, a, None), Default::default())
                    .to_json_line()
                    .unwrap()
            })
            .collect();
        std::fs::write(dir.path().join("legs.jsonl"), lines.join("\n")).unwrap();

        let cli = Cli::try_parse_from([
            "repcount",
            "--exercise",
            "squat",
            "--parallel",
            "--source",
            dir.path().to_str().unwrap(),
        ])
        .unwrap();
        let outcome = execute(&cli).unwrap();

        let mut out = Vec::new();
        print_summary(&mut out, &outcome).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("legs: 2 reps (squat left, 4 frames, 0 skipped)"));
        assert!(text.ends_with("Total reps: 2\n"));
    }

    #[test]
    fn test_missing_source_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "repcount",
            "--source",
            dir.path().join("missing.jsonl").to_str().unwrap(),
        ])
        .unwrap();
        assert!(execute(&cli).is_err());
    }
}
