//! Command execution.

use crate::cli::ScrapeArgs;
use crate::error::{CliError, Result};
use termsheet_domain::FieldSpec;
use termsheet_extractor::{extract_text, Pipeline, PipelineConfig};
use termsheet_llm::{AzureOpenAiProvider, ServiceConfig};
use termsheet_sheet::render_record;
use tracing::info;

/// Run the full scrape pipeline: PDF → record → populated spreadsheet.
pub async fn execute_scrape(args: ScrapeArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)?;
            PipelineConfig::from_toml(&toml_str).map_err(CliError::Config)?
        }
        None => PipelineConfig::default(),
    };
    config.validate().map_err(CliError::Config)?;

    let service = ServiceConfig::from_env()?;
    let provider =
        AzureOpenAiProvider::new(service).with_max_tokens(config.max_completion_tokens);

    info!("extracting text from {}", args.pdf.display());
    let text = extract_text(&args.pdf)?;

    let pipeline = Pipeline::new(provider, config);
    let report = pipeline.run(&text).await?;

    println!(
        "Extracted {} fields from {} chunks in {} ms",
        report.record.len(),
        report.chunks_total,
        report.elapsed_ms
    );
    for (field, value) in report.record.iter() {
        println!("  {}: {}", field, value);
    }
    if report.chunks_failed > 0 {
        println!("Warning: {} chunks failed and were skipped", report.chunks_failed);
    }

    let summary = render_record(&report.record, &args.template, &args.output)?;
    println!(
        "Wrote {} cells ({} fields matched) to {}",
        summary.cells_written,
        summary.fields_matched,
        args.output.display()
    );

    Ok(())
}

/// Print the canonical field list.
pub fn execute_fields() {
    for field in FieldSpec::names() {
        println!("{}", field);
    }
}
