// src/bin/spanarg.rs

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::BTreeMap;

use spanarg::cli::{Cli, OutputFormat};
use spanarg::config;
use spanarg::core::spec_loader;

/// El punto de entrada principal de la aplicación.
fn main() {
    // Inicializar el logger. Para ver los logs, ejecuta con `RUST_LOG=debug spanarg ...`
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run_cli(cli) {
        eprintln!("\nError: {:?}", e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let spec_path = match cli.spec {
        Some(path) => path,
        None => config::get_default_spec_path().map_err(anyhow::Error::msg)?,
    };

    let registry = spec_loader::load_registry(&spec_path)
        .with_context(|| format!("No se pudo cargar la especificación '{}'", spec_path.display()))?;

    let parsed = registry
        .parse(&cli.tokens)
        .context("Los tokens no cumplen la especificación")?;

    print_bindings(&parsed.to_map(), cli.format)
}

fn print_bindings(bindings: &BTreeMap<String, Vec<String>>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Toml => {
            let toml_string = toml::to_string_pretty(bindings)?;
            print!("{}", toml_string);
        }
        OutputFormat::Lines => {
            for (name, values) in bindings {
                println!("{}={}", name, values.join(" "));
            }
        }
    }
    Ok(())
}
