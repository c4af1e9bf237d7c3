mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::ComboboxWorkflow;

#[tokio::main]
async fn main() -> Result<()> {
	combobox::logging::initialize();
	let cli = parse_cli();

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_combobox(cli.output, resolved).await
}

/// Drive the combobox workflow and print output in the chosen format.
async fn run_combobox(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = ComboboxWorkflow::from_config(settings)?;
	let outcome = workflow.run().await?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
