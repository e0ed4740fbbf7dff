//! Command-line surface: argument parsing and one handler per subcommand.
//!
//! Handlers read their input (file or stdin), enforce the configured size
//! limits, call the engine and return pretty-printed JSON. Nothing here
//! writes to stdout; `main` does.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::guidance::{evaluate_guidance, GuidanceSnapshot};
use crate::keywords::{extract_keywords, keyword_coverage, lookup_synonyms, rank_keywords};
use crate::layout::{analyze_layout_detailed, LayoutTolerances};
use crate::models::Page;

#[derive(Debug, Parser)]
#[command(name = "resume-signals", version, about = "Resume layout, keyword and guidance signals")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Column structure, header risk and text density from positioned page text (JSON array of pages)
    Layout {
        /// Size of the original document in bytes
        #[arg(long)]
        file_size: u64,
        /// Pages JSON file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Include per-page readings and tolerances version
        #[arg(long)]
        pages: bool,
    },
    /// Ranked keyword set from job-posting text
    Keywords {
        /// Job posting text file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Emit every scored term instead of the critical/optional/all partition
        #[arg(long)]
        ranked: bool,
    },
    /// Synonym group for a skill term
    Synonyms {
        term: String,
    },
    /// Which posting keywords a resume covers
    Coverage {
        /// Resume plain-text file
        #[arg(long)]
        resume: PathBuf,
        /// Job posting text file
        #[arg(long)]
        job: PathBuf,
    },
    /// Prioritized guidance from a score snapshot (JSON)
    Guidance {
        /// Snapshot JSON file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

/// Runs one subcommand and returns its JSON output.
pub fn run(command: Command, config: &Config, stdin: &mut dyn Read) -> Result<String, AppError> {
    match command {
        Command::Layout {
            file_size,
            input,
            pages,
        } => {
            if file_size > config.max_file_size_bytes {
                return Err(AppError::Validation(format!(
                    "file size {file_size} exceeds limit of {} bytes",
                    config.max_file_size_bytes
                )));
            }
            let raw = read_input(input.as_deref(), stdin)?;
            let doc_pages: Vec<Page> = serde_json::from_str(&raw)?;
            if doc_pages.len() > config.max_pages {
                return Err(AppError::Validation(format!(
                    "{} pages supplied, limit is {}",
                    doc_pages.len(),
                    config.max_pages
                )));
            }
            let tolerances = LayoutTolerances::v1();
            if doc_pages.len() > tolerances.max_pages {
                warn!(
                    supplied = doc_pages.len(),
                    analyzed = tolerances.max_pages,
                    version = %tolerances.version,
                    "Pages past the analysis window ignored"
                );
            }
            let analysis = analyze_layout_detailed(&doc_pages, file_size, &tolerances);
            info!(
                columns = analysis.signals.estimated_columns,
                "Layout analyzed"
            );
            if pages {
                to_json(&analysis)
            } else {
                to_json(&analysis.signals)
            }
        }
        Command::Keywords { input, ranked } => {
            let text = read_input(input.as_deref(), stdin)?;
            check_job_text(&text, config)?;
            if ranked {
                to_json(&rank_keywords(&text))
            } else {
                let set = extract_keywords(&text);
                info!(
                    critical = set.critical.len(),
                    total = set.all.len(),
                    "Keywords extracted"
                );
                to_json(&set)
            }
        }
        Command::Synonyms { term } => to_json(&lookup_synonyms(&term)),
        Command::Coverage { resume, job } => {
            let resume_text = read_input(Some(resume.as_path()), stdin)?;
            let job_text = read_input(Some(job.as_path()), stdin)?;
            check_job_text(&job_text, config)?;
            let coverage = keyword_coverage(&resume_text, &extract_keywords(&job_text));
            info!(
                matched = coverage.matched.len(),
                missing = coverage.missing.len(),
                "Keyword coverage computed"
            );
            to_json(&coverage)
        }
        Command::Guidance { input } => {
            let raw = read_input(input.as_deref(), stdin)?;
            let snapshot: GuidanceSnapshot = serde_json::from_str(&raw)?;
            to_json(&evaluate_guidance(&snapshot))
        }
    }
}

fn read_input(path: Option<&Path>, stdin: &mut dyn Read) -> Result<String, AppError> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Reading input file");
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn check_job_text(text: &str, config: &Config) -> Result<(), AppError> {
    let chars = text.chars().count();
    if chars > config.max_job_text_chars {
        return Err(AppError::Validation(format!(
            "job text is {chars} characters, limit is {}",
            config.max_job_text_chars
        )));
    }
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TextItem;

    fn run_with(args: &[&str], stdin: &str) -> Result<String, AppError> {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        run(cli.command, &Config::default(), &mut stdin.as_bytes())
    }

    fn json(output: &str) -> serde_json::Value {
        serde_json::from_str(output).unwrap()
    }

    #[test]
    fn test_keywords_from_stdin() {
        let out = run_with(
            &["resume-signals", "keywords"],
            "5+ years required experience with Kubernetes and AWS",
        )
        .unwrap();
        let critical = json(&out)["critical"].as_array().unwrap().clone();
        assert!(critical.contains(&serde_json::json!("kubernetes")));
    }

    #[test]
    fn test_keywords_ranked_output_has_scores() {
        let out = run_with(&["resume-signals", "keywords", "--ranked"], "Rust services").unwrap();
        let ranked = json(&out);
        assert!(ranked[0]["score"].is_number());
        assert!(ranked[0].get("inRequirementZone").is_some());
    }

    #[test]
    fn test_job_text_limit_is_enforced() {
        let cli = Cli::try_parse_from(["resume-signals", "keywords"]).unwrap();
        let config = Config {
            max_job_text_chars: 5,
            ..Config::default()
        };
        let err = run(cli.command, &config, &mut "far too long".as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_layout_rejects_oversized_file() {
        let err = run_with(
            &["resume-signals", "layout", "--file-size", "999999999999"],
            "[]",
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_layout_empty_document_defaults() {
        let out = run_with(&["resume-signals", "layout", "--file-size", "1000"], "[]").unwrap();
        let v = json(&out);
        assert_eq!(v["estimatedColumns"], 1);
        assert_eq!(v["columnMergeRisk"], "low");
        assert_eq!(v["textDensity"], "low");
    }

    #[test]
    fn test_layout_pages_flag_adds_readings() {
        let out = run_with(
            &["resume-signals", "layout", "--file-size", "1000", "--pages"],
            "[]",
        )
        .unwrap();
        let v = json(&out);
        assert!(v.get("signals").is_some());
        assert_eq!(v["tolerancesVersion"], "v1");
    }

    fn column_page(number: u32, columns: &[f32], rows: usize) -> Page {
        let mut items = Vec::new();
        for r in 0..rows {
            let y = 60.0 + 20.0 * r as f32;
            for &x in columns {
                items.push(TextItem::new("cell text", x, y, 100.0, 11.0));
            }
        }
        Page {
            page_number: number,
            items,
            width: 612.0,
            height: 792.0,
            text: String::new(),
        }
    }

    fn four_page_document() -> String {
        let pages = vec![
            column_page(1, &[72.0], 20),
            column_page(2, &[72.0], 20),
            column_page(3, &[72.0], 20),
            column_page(4, &[40.0, 240.0, 440.0], 10),
        ];
        serde_json::to_string(&pages).unwrap()
    }

    #[test]
    fn test_layout_window_stays_v1_when_page_limit_raised() {
        let cli = Cli::try_parse_from(["resume-signals", "layout", "--file-size", "50000", "--pages"])
            .unwrap();
        let config = Config {
            max_pages: 5,
            ..Config::default()
        };
        let out = run(cli.command, &config, &mut four_page_document().as_bytes()).unwrap();
        let v = json(&out);
        assert_eq!(v["tolerancesVersion"], "v1");
        assert_eq!(v["signals"]["estimatedColumns"], 1);
        assert_eq!(v["pages"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_layout_rejects_too_many_pages() {
        let err = run_with(
            &["resume-signals", "layout", "--file-size", "50000"],
            &four_page_document(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_layout_bad_json_is_json_error() {
        let err = run_with(&["resume-signals", "layout", "--file-size", "10"], "{not json").unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_synonyms_command() {
        let out = run_with(&["resume-signals", "synonyms", "K8s"], "").unwrap();
        assert_eq!(json(&out)["canonical"], "kubernetes");
    }

    #[test]
    fn test_guidance_command() {
        let out = run_with(
            &["resume-signals", "guidance"],
            r#"{"parseHealth": 30, "hasJobDescription": false, "hasApiKey": false, "hasAccess": false}"#,
        )
        .unwrap();
        assert_eq!(json(&out)[0]["id"], "parse-critical");
    }

    #[test]
    fn test_coverage_command_reads_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let resume = dir.path().join("resume.txt");
        let job = dir.path().join("job.txt");
        std::fs::write(&resume, "Platform engineer. Ran K8s clusters and Terraform modules.").unwrap();
        std::fs::write(
            &job,
            "Required: Kubernetes. Nice: Terraform. Kafka. We run Kubernetes, Terraform and Kafka daily.",
        )
        .unwrap();

        let out = run_with(
            &[
                "resume-signals",
                "coverage",
                "--resume",
                resume.to_str().unwrap(),
                "--job",
                job.to_str().unwrap(),
            ],
            "",
        )
        .unwrap();
        let v = json(&out);
        let matched = v["matched"].as_array().unwrap();
        assert!(matched.contains(&serde_json::json!("kubernetes")));
        assert!(matched.contains(&serde_json::json!("terraform")));
        assert!(v["missing"].as_array().unwrap().contains(&serde_json::json!("kafka")));
        let percent = v["coveragePercent"].as_f64().unwrap();
        assert!(percent > 0.0 && percent < 100.0, "{percent}");
    }

    #[test]
    fn test_missing_input_file_is_io_error() {
        let err = run_with(
            &[
                "resume-signals",
                "coverage",
                "--resume",
                "/nonexistent/resume.txt",
                "--job",
                "/nonexistent/job.txt",
            ],
            "",
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
