use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use clap::Args;
use viability::calculator::report::views::LineWeight;
use viability::calculator::{
    CalculatorReport, CalculatorService, CalculatorServiceError, IdentityField, ScoreReadout,
};
use viability::config::AppConfig;
use viability::error::AppError;

use crate::infra::{RecordingDocumentSink, TextFileSink};

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Name of the built-in preset to load (e.g. "WP Engine")
    #[arg(long)]
    pub(crate) preset: String,
    /// Override the generation timestamp (YYYY-MM-DD HH:MM:SS, UTC)
    #[arg(long, value_parser = crate::infra::parse_timestamp)]
    pub(crate) generated_at: Option<DateTime<Utc>>,
    /// Directory to write the plain-text report into (printed only when omitted)
    #[arg(long)]
    pub(crate) out_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Preset to start the walkthrough from (defaults to ConvertKit)
    #[arg(long)]
    pub(crate) preset: Option<String>,
    /// Override the generation timestamp (YYYY-MM-DD HH:MM:SS, UTC)
    #[arg(long, value_parser = crate::infra::parse_timestamp)]
    pub(crate) generated_at: Option<DateTime<Utc>>,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        preset,
        generated_at,
        out_dir,
    } = args;

    let config = AppConfig::load()?;
    let sink = Arc::new(TextFileSink::new(out_dir.clone()));
    let service = CalculatorService::new(sink, config.export.file_name.clone())
        .map_err(CalculatorServiceError::from)?;

    let readout = service.load_preset(&preset)?;
    println!("Preset: {preset}");
    print_readout(&readout);

    let report = service.export(generated_at.unwrap_or_else(Utc::now))?;
    println!();
    render_report_lines(&report);

    if let Some(dir) = out_dir {
        println!(
            "\nWrote {} (plain text) into {}",
            config.export.file_name,
            dir.display()
        );
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        preset,
        generated_at,
    } = args;
    let preset_name = preset.unwrap_or_else(|| "ConvertKit".to_string());

    let config = AppConfig::load()?;
    let sink = Arc::new(RecordingDocumentSink::default());
    let service = CalculatorService::new(sink.clone(), config.export.file_name.clone())
        .map_err(CalculatorServiceError::from)?;

    println!("Startup viability walkthrough");
    println!(
        "- {} categories, {} example presets",
        service.catalog().len(),
        service.presets().len()
    );

    let readout = service.load_preset(&preset_name)?;
    println!("\nLoaded preset '{preset_name}'");
    print_readout(&readout);

    // Loosen the liquidity assumption and watch the product move.
    let liquid_market = 3;
    let switch_label = "1.0: Always in the market, easy to switch";
    let readout = service.select_option(liquid_market, switch_label)?;
    println!("\nSelected '{switch_label}' for Liquid Market");
    print_readout(&readout);

    match service.select_option(liquid_market, "weekly-ish") {
        Ok(_) => println!("\nSelector accepted a label the catalog never offered"),
        Err(err) => println!("\nRejected malformed input: {err}"),
    }

    service.set_rationale(liquid_market, "buyers re-evaluate tooling constantly")?;
    service.set_identity(IdentityField::Name, "Demo Startup");

    let report = service.export(generated_at.unwrap_or_else(Utc::now))?;
    println!("\nExport handed to the document sink as {}", config.export.file_name);
    render_report_lines(&report);
    println!("\nDocuments delivered this session: {}", sink.documents().len());

    Ok(())
}

fn print_readout(readout: &ScoreReadout) {
    println!(
        "  Score {:.2} | Result {} | Tier {} ({})",
        readout.score,
        readout.verdict_label,
        readout.tier.label(),
        readout.tier_class
    );
}

fn render_report_lines(report: &CalculatorReport) {
    for line in report.lines() {
        match line.weight {
            LineWeight::Heading => println!("{}", line.text),
            LineWeight::Body => println!("  {}", line.text),
            LineWeight::Fine => println!("    {}", line.text),
        }
    }
}
