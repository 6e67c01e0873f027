//! CLI entry point for okramp.

use std::io;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

use okramp::cli::{Cli, OutputFormat};
use okramp::config::RampConfig;
use okramp::generate::generate;
use okramp::logging::init_logging;
use okramp::renderer::apply_ramp;
use okramp::sheet::SlotSheet;

/// Entries printed by `--diagnose` before truncating.
const DIAGNOSE_MAX_LINES: usize = 600;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "okramp", &mut io::stdout());
        return Ok(());
    }

    let _guard = init_logging(cli.log_file.as_deref(), &cli.log_level);

    // CLI flags override the config file
    let config = RampConfig::layered(cli.config.as_deref(), &cli.to_config_overrides())
        .wrap_err("Failed to load configuration")?;

    if cli.diagnose {
        let sheet = SlotSheet::uniform(config.slot_count());
        for line in sheet.describe(DIAGNOSE_MAX_LINES) {
            println!("{line}");
        }
        return Ok(());
    }

    let request = config.to_request()?;

    let ramp = generate(&request)?;
    let requested = ramp.steps.len();

    let mut sheet = SlotSheet::uniform(config.slot_count());
    let header = ramp.header(config.ramp.name.as_deref());
    let report = apply_ramp(&mut sheet, &header, requested, &ramp.steps)?;

    if let Some(ref path) = cli.save_config {
        RampConfig::from_request(&request, config.ramp.name.as_deref(), config.slots.count)
            .save(path)
            .wrap_err_with(|| format!("Failed to save configuration to {}", path.display()))?;
        eprintln!("Saved configuration to {}", path.display());
    }

    let output = match cli.format {
        OutputFormat::Log => format!("{report}\n"),
        OutputFormat::Yaml => {
            eprintln!("{report}");
            serde_yaml::to_string(&sheet).wrap_err("Failed to serialize ramp to YAML")?
        }
        OutputFormat::Json => {
            eprintln!("{report}");
            let mut json =
                serde_json::to_string_pretty(&sheet).wrap_err("Failed to serialize ramp to JSON")?;
            json.push('\n');
            json
        }
    };

    if let Some(ref path) = cli.output {
        std::fs::write(path, &output)
            .wrap_err_with(|| format!("Failed to write to {}", path.display()))?;
        eprintln!("Wrote ramp to {}", path.display());
    } else {
        print!("{output}");
    }

    info!(base = %ramp.base_hex, applied = report.applied, "Done");
    Ok(())
}
