#![warn(clippy::pedantic)]
//! ** BRICS News studio **
//! Command-line companion for the news content schemas.

mod documents;
mod style;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use news_schema::schema::schema_json;
use news_schema::{Preview, ValidationReport, load_config, schema_types, slugify, validate_value};

use crate::documents::{entry_label, label, load_documents, read_entries};
use crate::style::StudioStyle;

#[derive(Parser)]
#[command(author, version, about = "Slugs, validation, previews and schema export for the BRICS News studio.")]
struct Cli {
    /// Studio configuration file.
    #[arg(long, global = true, value_name = "PATH", default_value = "studio.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the URL slug generated from a title.
    Slugify {
        /// Source text, usually the Portuguese title.
        text: String,
    },
    /// Validate JSON documents; exits non-zero if any non-draft document fails.
    Validate {
        /// Files holding one document object or an array of documents.
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },
    /// Print the list preview of each document in a file.
    Preview {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Dump schema descriptors as JSON.
    Schema {
        /// Only this document type (e.g. `newsArticle`).
        #[arg(long = "type", value_name = "NAME")]
        type_name: Option<String>,
    },
    /// Print the effective studio configuration.
    Config,
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Slugify { text } => {
            println!("{}", slugify(&text));
            Ok(ExitCode::SUCCESS)
        },
        Commands::Validate { files } => {
            let blocked = validate_files(&files)?;
            Ok(if blocked > 0 { ExitCode::FAILURE } else { ExitCode::SUCCESS })
        },
        Commands::Preview { file } => {
            preview_file(&file)?;
            Ok(ExitCode::SUCCESS)
        },
        Commands::Schema { type_name } => {
            print_schema(type_name.as_deref())?;
            Ok(ExitCode::SUCCESS)
        },
        Commands::Config => {
            print_config(&cli.config);
            Ok(ExitCode::SUCCESS)
        },
    }
}

/// Print a report for every document and return how many of them cannot be saved.
///
/// A document that does not fit the model is reported and counted as blocked; the
/// remaining documents and files are still checked.
fn validate_files(files: &[PathBuf]) -> Result<usize> {
    let mut blocked = 0usize;
    let mut total = 0usize;

    for path in files {
        let entries = read_entries(path)?;
        println!("{}", path.display().to_string().heading_style());
        for (index, entry) in entries.iter().enumerate() {
            total += 1;
            match validate_value(entry) {
                Ok((doc, report)) => {
                    print_report(&label(&doc, index), &report);
                    if report.blocks_save() {
                        blocked += 1;
                    }
                },
                Err(err) => {
                    warn!("skipping {} in '{}': {err}", entry_label(entry, index), path.display());
                    println!("  {}: {} {err}", entry_label(entry, index), "rejected".blocked_style());
                    blocked += 1;
                },
            }
        }
    }

    if blocked > 0 {
        warn!("{blocked} of {total} document(s) cannot be saved");
        println!("\n{}", format!("{blocked} of {total} document(s) blocked").blocked_style());
    } else {
        info!("all {total} document(s) can be saved");
        println!("\n{}", format!("{total} document(s) ok").ok_style());
    }
    Ok(blocked)
}

fn print_report(label: &str, report: &ValidationReport) {
    let verdict = if report.is_valid() {
        "ok".ok_style()
    } else if report.blocks_save() {
        "blocked".blocked_style()
    } else {
        "saved as draft".warning_style()
    };
    println!("  {label} [{}]: {verdict}", report.status);
    for (path, kind) in report.iter() {
        println!("    {}: {kind}", path.path_style());
    }
}

fn preview_file(path: &Path) -> Result<()> {
    for (index, doc) in load_documents(path)?.iter().enumerate() {
        let preview = doc.preview();
        println!("{}", label(doc, index).dim_style());
        println!("  {}", preview.title.heading_style());
        println!("  {}", preview.subtitle);
        if let Some(media) = &preview.media {
            println!("  {}", media.asset_ref().dim_style());
        }
    }
    Ok(())
}

fn print_schema(type_name: Option<&str>) -> Result<()> {
    let json = match type_name {
        Some(name) => schema_json(name).with_context(|| format!("exporting schema for '{name}'"))?,
        None => serde_json::Value::Array(
            schema_types()
                .iter()
                .map(|info| schema_json(info.name))
                .collect::<Result<Vec<_>, _>>()
                .context("exporting schemas")?,
        ),
    };
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn print_config(path: &Path) {
    let config = load_config(path);
    println!("{}", config.title.heading_style());
    println!("  name:       {}", config.name);
    println!("  project_id: {}", config.project_id);
    println!("  dataset:    {}", config.dataset);
    let plugins: Vec<String> = config.plugins.iter().map(ToString::to_string).collect();
    println!("  plugins:    {}", plugins.join(", "));
    let types: Vec<&str> = config.schema_types().iter().map(|info| info.name).collect();
    println!("  types:      {}", types.join(", "));
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_flag_defaults_to_studio_toml() {
        let cli = Cli::parse_from(["news_studio", "slugify", "BRICS Anuncia Nova Moeda"]);
        assert_eq!(cli.config, PathBuf::from("studio.toml"));
        assert!(matches!(cli.command, Commands::Slugify { ref text } if text == "BRICS Anuncia Nova Moeda"));
    }

    #[test]
    fn validate_requires_a_file() {
        assert!(Cli::try_parse_from(["news_studio", "validate"]).is_err());
        let cli = Cli::try_parse_from(["news_studio", "validate", "a.json", "b.json", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert!(matches!(cli.command, Commands::Validate { ref files } if files.len() == 2));
    }

    #[test]
    fn schema_type_filter_is_optional() {
        let cli = Cli::parse_from(["news_studio", "schema", "--type", "analysisArticle"]);
        assert!(matches!(cli.command, Commands::Schema { type_name: Some(ref name) } if name == "analysisArticle"));
        assert!(print_schema(Some("pressRelease")).is_err());
    }

    #[test]
    fn validate_counts_blocking_documents() {
        use std::io::Write;

        let mut ok = tempfile::NamedTempFile::new().unwrap();
        ok.write_all(br#"{"_type": "newsArticle", "status": "draft"}"#).unwrap();
        assert_eq!(validate_files(&[ok.path().to_path_buf()]).unwrap(), 0);

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        bad.write_all(br#"{"_type": "newsArticle"}"#).unwrap();
        assert_eq!(validate_files(&[ok.path().to_path_buf(), bad.path().to_path_buf()]).unwrap(), 1);
    }

    #[test]
    fn unlisted_option_does_not_stop_the_batch() {
        use std::io::Write;

        let mut batch = tempfile::NamedTempFile::new().unwrap();
        batch
            .write_all(br#"[{"_type": "newsArticle", "status": "draft"}, {"_type": "newsArticle", "country": "Marte"}]"#)
            .unwrap();
        let mut later = tempfile::NamedTempFile::new().unwrap();
        later.write_all(br#"{"_type": "pressRelease"}"#).unwrap();

        let (_, draft) = validate_value(&read_entries(batch.path()).unwrap()[0]).unwrap();
        assert!(!draft.blocks_save());
        assert_eq!(validate_files(&[batch.path().to_path_buf(), later.path().to_path_buf()]).unwrap(), 2);
    }

    #[test]
    fn unreadable_document_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_files(&[dir.path().join("missing.json")]).is_err());
        assert!(preview_file(&dir.path().join("missing.json")).is_err());
    }
}
