// src/core/extractor.rs

use super::error::{ParseError, ParseResult};
use super::registry::Registry;
use crate::models::{Arity, ArityViolation, Occurrence, SwitchDef};

/// Resultado de repartir el flujo entre switches y posicionales, todavía sin validar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Valores acumulados por switch, indexados como en el registro.
    pub values: Vec<Vec<String>>,
    /// Cuántas veces coincidió cada switch.
    pub counts: Vec<usize>,
    /// Un token por posicional declarado, en orden de declaración.
    pub positionals: Vec<String>,
    /// Tokens sobrantes del pool, accesibles solo por índice.
    pub extras: Vec<String>,
}

/// Reparte `argv` (sin la cola tras `--`) entre las ocurrencias y los posicionales.
///
/// Cada ocurrencia posee los tokens que hay hasta la siguiente. La última es
/// especial: su tramo se ajusta a la aridad y lo que sobra vuelve al pool de
/// posicionales, junto con la cabecera y la cola inerte.
pub fn partition(
    argv: &[String],
    tail: &[String],
    mut occurrences: Vec<Occurrence>,
    registry: &Registry,
) -> ParseResult<Extraction> {
    occurrences.sort_by_key(|o| o.position);

    let switches = registry.switches();
    let mut values: Vec<Vec<String>> = vec![Vec::new(); switches.len()];
    let mut counts = vec![0usize; switches.len()];
    let mut pool: Vec<String> = Vec::new();

    match occurrences.last().copied() {
        None => pool.extend_from_slice(argv),
        Some(last) => {
            let head_end = occurrences[0].position;
            pool.extend_from_slice(&argv[..head_end]);

            for pair in occurrences.windows(2) {
                let (current, next) = (pair[0], pair[1]);
                counts[current.switch] += 1;
                values[current.switch].extend_from_slice(&argv[current.position + 1..next.position]);
            }

            counts[last.switch] += 1;
            let rest = &argv[last.position + 1..];
            let claimed = claim_trailing(&switches[last.switch], rest.len())?;
            values[last.switch].extend_from_slice(&rest[..claimed]);
            pool.extend_from_slice(&rest[claimed..]);

            log::trace!(
                "Cabecera de {} tokens; '{}' reclama {} de {} al final",
                head_end,
                switches[last.switch].name,
                claimed,
                rest.len()
            );
        }
    }
    pool.extend_from_slice(tail);

    let expected = registry.positionals().len();
    if pool.len() < expected {
        return Err(ParseError::LessPositionalArgs {
            expected,
            given: pool.len(),
        });
    }
    let extras = pool.split_off(expected);
    log::debug!(
        "Extracción completa: {} posicionales, {} extras",
        pool.len(),
        extras.len()
    );

    Ok(Extraction {
        values,
        counts,
        positionals: pool,
        extras,
    })
}

/// Cuántos de los `given` tokens finales se queda la última ocurrencia.
/// Una aridad exacta N > 0 se trunca a N; el resto de contratos se quedan todo o fallan.
fn claim_trailing(switch: &SwitchDef, given: usize) -> ParseResult<usize> {
    let violation = match switch.arity {
        Arity::Exact(0) if given > 0 => Some(ArityViolation::Excess),
        Arity::Exact(n) if given >= n => return Ok(n),
        Arity::Exact(_) => Some(ArityViolation::Less),
        arity => arity.check(given).err(),
    };
    match violation {
        Some(v) => Err(ParseError::arity(&switch.name, switch.arity, given, v)),
        None => Ok(given),
    }
}
