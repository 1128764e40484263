// src/cli.rs

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "spanarg: interpreta tokens de línea de comandos según una especificación declarativa.", long_about = None)]
pub struct Cli {
    /// Archivo de especificación TOML. Por defecto, `<config>/spanarg/spec.toml`.
    #[arg(short, long)]
    pub spec: Option<PathBuf>,

    /// Formato de salida de los enlaces.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Toml)]
    pub format: OutputFormat,

    /// Tokens a interpretar. Conviene pasarlos tras `--`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tabla TOML con un arreglo por nombre.
    Toml,
    /// Una línea `nombre=v1 v2` por nombre.
    Lines,
}
