use anyhow::{Context, Result};
use clap::Parser;
use printcost_core::estimator;
use printcost_schemas::report::CostReport;

use crate::cli::{Cli, OutputFormat};
use crate::config::OrderSettings;

mod cli;
mod config;
mod logging;
mod report;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let settings = OrderSettings::resolve(&cli)?;
    let order = &settings.order;
    tracing::info!(
        quantity = order.quantity,
        crew = order.crew.len(),
        monthly_hours = settings.calendar.monthly_hours,
        "Quoting order"
    );

    let cost = quote(&settings)?;

    match cli.format {
        OutputFormat::Text => print!("{}", report::render_text(order.quantity, &cost)),
        OutputFormat::Json => println!("{}", report::render_json(order.quantity, &cost)?),
    }

    Ok(())
}

fn quote(settings: &OrderSettings) -> Result<CostReport> {
    let breakdown = estimator::breakdown(&settings.order, &settings.calendar)
        .context("Could not quote the order")?;
    tracing::debug!(?breakdown, "Unrounded estimate");
    Ok(breakdown.to_report())
}
