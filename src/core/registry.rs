// src/core/registry.rs

use super::error::{ParseError, ParseResult};
use super::parsed::ParsedArgs;
use super::{extractor, scanner, validator};
use crate::models::{Arity, PositionalDef, PositionalSpec, SwitchDef, SwitchSpec};

/// Conjunto de switches y posicionales declarados.
/// Una vez construido no cambia: cada llamada a `parse` trabaja sobre su propio
/// contexto, así que el mismo registro puede reutilizarse sin arrastrar estado.
#[derive(Debug, Default)]
pub struct Registry {
    switches: Vec<SwitchDef>,
    positionals: Vec<PositionalDef>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un switch. El nombre resuelto es el alias largo, o el corto si no hay largo.
    pub fn declare_switch(&mut self, spec: SwitchSpec) -> ParseResult<&mut Self> {
        let short = non_empty(spec.short);
        let long = non_empty(spec.long);

        // Los alias van sin guiones: `-x` corto y `x` largo coincidirían ambos con `--x`.
        if short.iter().chain(long.iter()).any(|a| a.starts_with('-')) {
            return Err(ParseError::MissingName);
        }

        let name = long
            .clone()
            .or_else(|| short.clone())
            .ok_or(ParseError::MissingName)?;

        if self.name_taken(&name) {
            return Err(ParseError::NameConflict { name });
        }
        for alias in short.iter().chain(long.iter()) {
            if self.positionals.iter().any(|p| &p.name == alias) {
                return Err(ParseError::NameConflict {
                    name: alias.clone(),
                });
            }
        }
        if let Some(s) = &short {
            if self.switches.iter().any(|d| d.short.as_ref() == Some(s)) {
                return Err(ParseError::NameConflict { name: s.clone() });
            }
        }
        if let Some(l) = &long {
            if self.switches.iter().any(|d| d.long.as_ref() == Some(l)) {
                return Err(ParseError::NameConflict { name: l.clone() });
            }
        }

        let arity = Arity::parse(&spec.nargs).ok_or_else(|| ParseError::InvalidArity {
            name: name.clone(),
            nargs: spec.nargs.clone(),
        })?;

        log::debug!("Switch '{}' registrado con aridad '{}'", name, arity);
        self.switches.push(SwitchDef {
            name,
            short,
            long,
            arity,
            required: spec.required,
            allow_duplicates: spec.allow_duplicates,
            hooks: spec.hooks,
            requires: spec.requires,
            excludes: spec.excludes,
        });
        Ok(self)
    }

    /// Igual que `declare_switch`, marcando el switch como obligatorio.
    pub fn declare_required(&mut self, spec: SwitchSpec) -> ParseResult<&mut Self> {
        self.declare_switch(spec.required())
    }

    /// Registra un posicional. El orden de las llamadas es el orden de enlace.
    pub fn declare_positional(&mut self, spec: PositionalSpec) -> ParseResult<&mut Self> {
        if spec.name.is_empty() {
            return Err(ParseError::MissingName);
        }
        let taken_by_alias = self.switches.iter().any(|d| {
            d.short.as_deref() == Some(spec.name.as_str())
                || d.long.as_deref() == Some(spec.name.as_str())
        });
        if taken_by_alias || self.name_taken(&spec.name) {
            return Err(ParseError::NameConflict { name: spec.name });
        }

        log::debug!(
            "Posicional '{}' registrado en la posición {}",
            spec.name,
            self.positionals.len()
        );
        self.positionals.push(PositionalDef {
            name: spec.name,
            hooks: spec.hooks,
        });
        Ok(self)
    }

    pub fn switches(&self) -> &[SwitchDef] {
        &self.switches
    }

    pub fn positionals(&self) -> &[PositionalDef] {
        &self.positionals
    }

    pub fn switch_index(&self, name: &str) -> Option<usize> {
        self.switches.iter().position(|d| d.name == name)
    }

    fn name_taken(&self, name: &str) -> bool {
        self.switches.iter().any(|d| d.name == name)
            || self.positionals.iter().any(|p| p.name == name)
    }

    /// Interpreta un flujo de tokens completo: escaneo, extracción y validación.
    /// El primer fallo aborta el parseo; no hay resultados parciales.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> ParseResult<ParsedArgs> {
        let tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();
        log::debug!("Parseando {} tokens: {:?}", tokens.len(), tokens);

        let (argv, tail) = scanner::split_terminator(&tokens);
        let occurrences = scanner::scan(argv, &self.switches)?;
        let extraction = extractor::partition(argv, tail, occurrences, self)?;
        let bindings = validator::validate(self, extraction)?;

        Ok(ParsedArgs::new(self, bindings))
    }
}

fn non_empty(alias: String) -> Option<String> {
    if alias.is_empty() { None } else { Some(alias) }
}
