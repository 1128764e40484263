// src/models.rs

use serde::{Deserialize, Serialize};
use std::fmt;

// --- CONTRATO DE ARIDAD ---

/// Cuántos tokens puede poseer un switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactamente N tokens. `Exact(0)` es un flag simple.
    Exact(usize),
    /// `?`: cero o uno.
    Optional,
    /// `*`: cero o más.
    Any,
    /// `+`: uno o más.
    AtLeastOne,
}

/// Cómo una cantidad de tokens incumple una aridad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArityViolation {
    Less,
    Excess,
}

impl Arity {
    /// Interpreta la cadena de aridad de una declaración.
    /// La cadena vacía equivale a `Exact(0)`. Devuelve `None` si la forma no es válida.
    pub fn parse(nargs: &str) -> Option<Self> {
        match nargs {
            "" => Some(Arity::Exact(0)),
            "?" => Some(Arity::Optional),
            "*" => Some(Arity::Any),
            "+" => Some(Arity::AtLeastOne),
            digits if digits.bytes().all(|b| b.is_ascii_digit()) => {
                digits.parse().ok().map(Arity::Exact)
            }
            _ => None,
        }
    }

    /// Comprueba una cantidad de tokens contra el contrato.
    pub fn check(self, given: usize) -> Result<(), ArityViolation> {
        match self {
            Arity::Exact(n) if given < n => Err(ArityViolation::Less),
            Arity::Exact(n) if given > n => Err(ArityViolation::Excess),
            Arity::Optional if given > 1 => Err(ArityViolation::Excess),
            Arity::AtLeastOne if given == 0 => Err(ArityViolation::Less),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{}", n),
            Arity::Optional => f.write_str("?"),
            Arity::Any => f.write_str("*"),
            Arity::AtLeastOne => f.write_str("+"),
        }
    }
}

// --- MODELOS DE DECLARACIÓN (API de la librería) ---

/// Predicado por token. `Err` lleva el mensaje de diagnóstico.
pub type Assertion = Box<dyn Fn(&str) -> Result<(), String>>;

/// Transformación por token, aplicada después de validar.
pub type Mapping = Box<dyn Fn(&str) -> String>;

/// Ganchos comunes a switches y posicionales: enum, aserción y mapeo.
#[derive(Default)]
pub struct Hooks {
    /// `Some(vec![])` rechaza cualquier token; `None` no restringe.
    pub choices: Option<Vec<String>>,
    pub assert: Option<Assertion>,
    pub map: Option<Mapping>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("choices", &self.choices)
            .field("assert", &self.assert.is_some())
            .field("map", &self.map.is_some())
            .finish()
    }
}

/// Declaración de un switch (opción con nombre), construida con métodos encadenados.
#[derive(Debug, Default)]
pub struct SwitchSpec {
    pub short: String,
    pub long: String,
    pub nargs: String,
    pub required: bool,
    pub allow_duplicates: bool,
    pub hooks: Hooks,
    pub requires: Vec<String>,
    pub excludes: Vec<String>,
}

impl SwitchSpec {
    /// `short` y `long` van sin guiones; cualquiera de los dos puede estar vacío, no ambos.
    pub fn new(short: impl Into<String>, long: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            long: long.into(),
            ..Default::default()
        }
    }

    pub fn nargs(mut self, nargs: impl Into<String>) -> Self {
        self.nargs = nargs.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }

    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hooks.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    pub fn assert<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + 'static,
    {
        self.hooks.assert = Some(Box::new(predicate));
        self
    }

    pub fn map<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> String + 'static,
    {
        self.hooks.map = Some(Box::new(transform));
        self
    }

    pub fn requires<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn excludes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes = names.into_iter().map(Into::into).collect();
        self
    }
}

/// Declaración de un posicional. El orden de declaración decide a qué token se enlaza.
#[derive(Debug, Default)]
pub struct PositionalSpec {
    pub name: String,
    pub hooks: Hooks,
}

impl PositionalSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hooks: Hooks::default(),
        }
    }

    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hooks.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    pub fn assert<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + 'static,
    {
        self.hooks.assert = Some(Box::new(predicate));
        self
    }

    pub fn map<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> String + 'static,
    {
        self.hooks.map = Some(Box::new(transform));
        self
    }
}

// --- MODELOS DE `spec.toml` (Lo que se lee del archivo de especificación) ---

/// La aridad en TOML admite tanto `nargs = 2` como `nargs = "+"`.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum NargsConfig {
    Count(usize),
    Pattern(String),
}

impl Default for NargsConfig {
    fn default() -> Self {
        NargsConfig::Pattern(String::new())
    }
}

impl fmt::Display for NargsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NargsConfig::Count(n) => write!(f, "{}", n),
            NargsConfig::Pattern(s) => f.write_str(s),
        }
    }
}

/// Aserciones predefinidas disponibles desde un archivo de especificación.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Check {
    Integer,
    Unsigned,
    Number,
    NonEmpty,
}

impl Check {
    pub fn verify(self, value: &str) -> Result<(), String> {
        let ok = match self {
            Check::Integer => value.parse::<i64>().is_ok(),
            Check::Unsigned => value.parse::<u64>().is_ok(),
            Check::Number => value.parse::<f64>().is_ok(),
            Check::NonEmpty => !value.trim().is_empty(),
        };
        if ok {
            return Ok(());
        }
        Err(match self {
            Check::Integer => "se esperaba un número entero".to_string(),
            Check::Unsigned => "se esperaba un entero sin signo".to_string(),
            Check::Number => "se esperaba un número".to_string(),
            Check::NonEmpty => "el valor no puede estar vacío".to_string(),
        })
    }
}

/// Transformaciones predefinidas disponibles desde un archivo de especificación.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Transform {
    Lowercase,
    Uppercase,
    Trim,
}

impl Transform {
    pub fn apply(self, value: &str) -> String {
        match self {
            Transform::Lowercase => value.to_lowercase(),
            Transform::Uppercase => value.to_uppercase(),
            Transform::Trim => value.trim().to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SwitchConfig {
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub long: String,
    #[serde(default)]
    pub nargs: NargsConfig,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub allow_duplicates: bool,
    pub choices: Option<Vec<String>>,
    pub check: Option<Check>,
    pub transform: Option<Transform>,
    #[serde(default)]
    pub requires: Vec<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct PositionalConfig {
    pub name: String,
    pub choices: Option<Vec<String>>,
    pub check: Option<Check>,
    pub transform: Option<Transform>,
}

/// Representa la estructura deserializada de un archivo `spec.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SpecFile {
    #[serde(default, rename = "switch")]
    pub switches: Vec<SwitchConfig>,
    #[serde(default, rename = "positional")]
    pub positionals: Vec<PositionalConfig>,
}

// --- MODELOS EN MEMORIA (Definiciones registradas y estado efímero del parseo) ---

/// Un switch ya validado por el registro. Inmutable durante el parseo.
#[derive(Debug)]
pub struct SwitchDef {
    pub name: String,
    pub short: Option<String>,
    pub long: Option<String>,
    pub arity: Arity,
    pub required: bool,
    pub allow_duplicates: bool,
    pub hooks: Hooks,
    pub requires: Vec<String>,
    pub excludes: Vec<String>,
}

impl SwitchDef {
    /// Forma corta primero; la larga solo se prueba si la corta no coincidió.
    pub fn matches(&self, token: &str) -> bool {
        let short_matched = self
            .short
            .as_deref()
            .is_some_and(|s| token.strip_prefix('-') == Some(s));
        short_matched
            || self
                .long
                .as_deref()
                .is_some_and(|l| token.strip_prefix("--") == Some(l))
    }
}

#[derive(Debug)]
pub struct PositionalDef {
    pub name: String,
    pub hooks: Hooks,
}

/// Una coincidencia de un switch en una posición concreta del flujo de tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    /// Índice del switch dentro del registro.
    pub switch: usize,
    pub position: usize,
}

// --- LÓGICA DE CONVERSIÓN ENTRE MODELOS DE ARCHIVO Y DECLARACIONES ---

fn hooks_from_config(
    choices: Option<Vec<String>>,
    check: Option<Check>,
    transform: Option<Transform>,
) -> Hooks {
    Hooks {
        choices,
        assert: check.map(|c| Box::new(move |v: &str| c.verify(v)) as Assertion),
        map: transform.map(|t| Box::new(move |v: &str| t.apply(v)) as Mapping),
    }
}

impl From<SwitchConfig> for SwitchSpec {
    fn from(value: SwitchConfig) -> Self {
        Self {
            short: value.short,
            long: value.long,
            nargs: value.nargs.to_string(),
            required: value.required,
            allow_duplicates: value.allow_duplicates,
            hooks: hooks_from_config(value.choices, value.check, value.transform),
            requires: value.requires,
            excludes: value.excludes,
        }
    }
}

impl From<PositionalConfig> for PositionalSpec {
    fn from(value: PositionalConfig) -> Self {
        Self {
            name: value.name,
            hooks: hooks_from_config(value.choices, value.check, value.transform),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_parses_every_accepted_form() {
        assert_eq!(Arity::parse(""), Some(Arity::Exact(0)));
        assert_eq!(Arity::parse("3"), Some(Arity::Exact(3)));
        assert_eq!(Arity::parse("?"), Some(Arity::Optional));
        assert_eq!(Arity::parse("*"), Some(Arity::Any));
        assert_eq!(Arity::parse("+"), Some(Arity::AtLeastOne));
    }

    #[test]
    fn arity_rejects_malformed_forms() {
        for bad in ["++", "-1", "x", "1+", " 2"] {
            assert_eq!(Arity::parse(bad), None, "'{}' debería ser inválido", bad);
        }
    }

    #[test]
    fn arity_check_boundaries() {
        assert_eq!(Arity::Exact(2).check(1), Err(ArityViolation::Less));
        assert_eq!(Arity::Exact(2).check(2), Ok(()));
        assert_eq!(Arity::Exact(2).check(3), Err(ArityViolation::Excess));
        assert_eq!(Arity::Optional.check(1), Ok(()));
        assert_eq!(Arity::Optional.check(2), Err(ArityViolation::Excess));
        assert_eq!(Arity::AtLeastOne.check(0), Err(ArityViolation::Less));
        assert_eq!(Arity::Any.check(0), Ok(()));
        assert_eq!(Arity::Any.check(50), Ok(()));
    }

    #[test]
    fn switch_matches_short_and_long_forms() {
        let def = SwitchDef {
            name: "alpha".into(),
            short: Some("a".into()),
            long: Some("alpha".into()),
            arity: Arity::Any,
            required: false,
            allow_duplicates: false,
            hooks: Hooks::default(),
            requires: vec![],
            excludes: vec![],
        };
        assert!(def.matches("-a"));
        assert!(def.matches("--alpha"));
        assert!(!def.matches("--a"));
        assert!(!def.matches("-alpha"));
        assert!(!def.matches("a"));
    }

    #[test]
    fn builtin_checks_and_transforms() {
        assert!(Check::Integer.verify("-12").is_ok());
        assert!(Check::Unsigned.verify("-12").is_err());
        assert!(Check::Number.verify("1.5").is_ok());
        assert!(Check::NonEmpty.verify("  ").is_err());
        assert_eq!(Transform::Uppercase.apply("abc"), "ABC");
        assert_eq!(Transform::Trim.apply(" x "), "x");
    }
}
