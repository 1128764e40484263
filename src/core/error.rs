// src/core/error.rs

use crate::models::{Arity, ArityViolation};
use thiserror::Error;

/// Taxonomía completa de fallos de declaración y de parseo.
/// Cada variante lleva la identidad del switch/posicional afectado y los
/// valores esperados/recibidos, para que el llamador construya su propio mensaje.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Se esperaba un nombre corto y/o largo para el switch.")]
    MissingName,
    #[error("El nombre '{name}' ya está en uso por otro switch o posicional.")]
    NameConflict { name: String },
    #[error("Aridad inválida '{nargs}' para '{name}': se necesita '+', '?', '*' o un entero.")]
    InvalidArity { name: String, nargs: String },
    #[error("El switch obligatorio '{name}' no fue pasado.")]
    NoArgs { name: String },
    #[error("El switch '{name}' no puede pasarse más de una vez (encontrado {count} veces).")]
    Duplicate { name: String, count: usize },
    #[error("Argumentos insuficientes para '{name}': se esperaba {expected}, se recibieron {given}.")]
    LessArgs {
        name: String,
        expected: Arity,
        given: usize,
    },
    #[error("Demasiados argumentos para '{name}': se esperaba {expected}, se recibieron {given}.")]
    ExcessArgs {
        name: String,
        expected: Arity,
        given: usize,
    },
    #[error("Argumentos posicionales insuficientes: se esperaban {expected}, se recibieron {given}.")]
    LessPositionalArgs { expected: usize, given: usize },
    #[error("Valor inválido '{value}' para '{name}'. Opciones: {}", .choices.join(","))]
    InvalidChoice {
        name: String,
        value: String,
        choices: Vec<String>,
    },
    #[error("Falló la validación de '{name}' con el valor '{value}': {message}")]
    AssertionFailure {
        name: String,
        value: String,
        message: String,
    },
    #[error("El switch '{name}' requiere '{missing}', que no fue pasado.")]
    MissingDeps { name: String, missing: String },
    #[error("El switch '{name}' no puede usarse junto con '{conflicting}'.")]
    UnallowedDeps { name: String, conflicting: String },
}

pub type ParseResult<T> = Result<T, ParseError>;

impl ParseError {
    /// Construye el error de aridad correspondiente a una violación concreta.
    pub(crate) fn arity(name: &str, expected: Arity, given: usize, violation: ArityViolation) -> Self {
        let name = name.to_string();
        match violation {
            ArityViolation::Less => ParseError::LessArgs {
                name,
                expected,
                given,
            },
            ArityViolation::Excess => ParseError::ExcessArgs {
                name,
                expected,
                given,
            },
        }
    }
}
