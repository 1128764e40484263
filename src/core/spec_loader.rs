// src/core/spec_loader.rs

use super::error::{ParseError, ParseResult};
use super::registry::Registry;
use crate::models::SpecFile;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecFileError {
    #[error("No se encontró el archivo de especificación en '{path}'.")]
    NotFound { path: String },
    #[error("No se pudo leer el archivo de especificación: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error al parsear TOML en '{path}': {source}")]
    TomlParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Declaración inválida en la especificación: {0}")]
    Declaration(#[from] ParseError),
}

impl SpecFile {
    /// Registra todas las declaraciones en orden: primero los switches, luego los posicionales.
    pub fn into_registry(self) -> ParseResult<Registry> {
        let mut registry = Registry::new();
        for switch in self.switches {
            registry.declare_switch(switch.into())?;
        }
        for positional in self.positionals {
            registry.declare_positional(positional.into())?;
        }
        Ok(registry)
    }
}

/// Deserializa una especificación desde texto TOML.
pub fn parse_spec(content: &str, origin: &str) -> Result<SpecFile, SpecFileError> {
    toml::from_str(content).map_err(|e| SpecFileError::TomlParse {
        path: origin.to_string(),
        source: e,
    })
}

/// Carga un `spec.toml` del disco.
pub fn load_spec_file(path: &Path) -> Result<SpecFile, SpecFileError> {
    if !path.is_file() {
        return Err(SpecFileError::NotFound {
            path: path.display().to_string(),
        });
    }
    log::info!("Cargando especificación desde: {:?}", path);
    let content = fs::read_to_string(path)?;
    parse_spec(&content, &path.display().to_string())
}

/// Atajo: carga el archivo y construye el registro.
pub fn load_registry(path: &Path) -> Result<Registry, SpecFileError> {
    Ok(load_spec_file(path)?.into_registry()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Arity;

    #[test]
    fn builds_registry_from_toml() {
        let spec = parse_spec(
            r#"
            [[switch]]
            short = "n"
            long = "count"
            nargs = 1
            check = "unsigned"

            [[switch]]
            short = "t"
            nargs = "+"
            allow_duplicates = true
            transform = "uppercase"

            [[positional]]
            name = "target"
            choices = ["debug", "release"]
            "#,
            "inline",
        )
        .unwrap();

        let registry = spec.into_registry().unwrap();
        assert_eq!(registry.switches()[0].arity, Arity::Exact(1));
        assert_eq!(registry.switches()[1].arity, Arity::AtLeastOne);
        assert!(registry.switches()[1].allow_duplicates);
        assert_eq!(registry.positionals()[0].name, "target");

        let parsed = registry
            .parse(&["release", "-t", "a", "-n", "3", "-t", "b"])
            .unwrap();
        assert_eq!(parsed.value("count"), Some("3"));
        assert_eq!(
            parsed.get("t"),
            Some(&["A".to_string(), "B".to_string()][..])
        );

        let err = registry.parse(&["release", "-n", "x"]).unwrap_err();
        assert!(matches!(err, ParseError::AssertionFailure { .. }));
    }

    #[test]
    fn unknown_check_is_a_toml_error() {
        let err = parse_spec("[[switch]]\nshort = \"a\"\ncheck = \"prime\"\n", "inline").unwrap_err();
        assert!(matches!(err, SpecFileError::TomlParse { .. }));
    }

    #[test]
    fn declaration_errors_surface_from_registry() {
        let spec = parse_spec("[[switch]]\nnargs = \"+\"\n", "inline").unwrap();
        assert_eq!(spec.into_registry().unwrap_err(), ParseError::MissingName);
    }
}
