// src/core/scanner.rs

use super::error::{ParseError, ParseResult};
use crate::constants::TERMINATOR;
use crate::models::{Occurrence, SwitchDef};

/// Separa el flujo en la parte escaneable y la cola inerte que sigue al primer `--`.
/// El propio `--` no pertenece a ninguna de las dos.
pub fn split_terminator(tokens: &[String]) -> (&[String], &[String]) {
    match tokens.iter().position(|t| t == TERMINATOR) {
        Some(idx) => (&tokens[..idx], &tokens[idx + 1..]),
        None => (tokens, &[]),
    }
}

/// Devuelve, en orden, las posiciones donde aparece un switch.
pub fn locate(argv: &[String], switch: &SwitchDef) -> ParseResult<Vec<usize>> {
    let positions: Vec<usize> = argv
        .iter()
        .enumerate()
        .filter(|(_, token)| switch.matches(token))
        .map(|(i, _)| i)
        .collect();

    if positions.is_empty() && switch.required {
        return Err(ParseError::NoArgs {
            name: switch.name.clone(),
        });
    }
    if positions.len() > 1 && !switch.allow_duplicates {
        return Err(ParseError::Duplicate {
            name: switch.name.clone(),
            count: positions.len(),
        });
    }

    log::trace!("Switch '{}' encontrado en {:?}", switch.name, positions);
    Ok(positions)
}

/// Escanea todos los switches y reúne sus ocurrencias en un único conjunto.
pub fn scan(argv: &[String], switches: &[SwitchDef]) -> ParseResult<Vec<Occurrence>> {
    let mut occurrences = Vec::new();
    for (idx, switch) in switches.iter().enumerate() {
        for position in locate(argv, switch)? {
            occurrences.push(Occurrence {
                switch: idx,
                position,
            });
        }
    }
    log::debug!("Escaneo completo: {} ocurrencias", occurrences.len());
    Ok(occurrences)
}
