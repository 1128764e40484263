// src/core/validator.rs

use super::error::{ParseError, ParseResult};
use super::extractor::Extraction;
use super::registry::Registry;
use crate::models::{Hooks, SwitchDef};

/// Valida la extracción y aplica los mapeos. Devuelve la misma extracción ya transformada.
///
/// Orden: switches en orden de declaración (aridad, dependencias, enum/aserción,
/// mapeo) y después los posicionales. El primer fallo aborta todo.
pub fn validate(registry: &Registry, mut extraction: Extraction) -> ParseResult<Extraction> {
    for (idx, switch) in registry.switches().iter().enumerate() {
        if extraction.counts[idx] == 0 {
            continue;
        }
        let given = extraction.values[idx].len();
        if let Err(violation) = switch.arity.check(given) {
            return Err(ParseError::arity(&switch.name, switch.arity, given, violation));
        }
        check_dependencies(registry, switch, &extraction.counts)?;
        apply_hooks(&switch.name, &switch.hooks, &mut extraction.values[idx])?;
    }

    for (positional, value) in registry
        .positionals()
        .iter()
        .zip(extraction.positionals.iter_mut())
    {
        apply_hooks(
            &positional.name,
            &positional.hooks,
            std::slice::from_mut(value),
        )?;
    }

    log::debug!("Validación completa");
    Ok(extraction)
}

/// `requires` se cumple con un switch que coincidió o con cualquier posicional declarado;
/// `excludes` solo lo incumple un switch que coincidió.
fn check_dependencies(registry: &Registry, switch: &SwitchDef, counts: &[usize]) -> ParseResult<()> {
    let matched = |name: &str| {
        registry
            .switch_index(name)
            .is_some_and(|i| counts[i] > 0)
    };

    for dep in &switch.requires {
        let is_positional = registry.positionals().iter().any(|p| &p.name == dep);
        if !matched(dep.as_str()) && !is_positional {
            return Err(ParseError::MissingDeps {
                name: switch.name.clone(),
                missing: dep.clone(),
            });
        }
    }
    for excluded in &switch.excludes {
        if matched(excluded.as_str()) {
            return Err(ParseError::UnallowedDeps {
                name: switch.name.clone(),
                conflicting: excluded.clone(),
            });
        }
    }
    Ok(())
}

/// Comprueba cada token contra el enum (o la aserción, si no hay enum) y, solo
/// cuando todos pasan, los reemplaza por su valor mapeado.
fn apply_hooks(name: &str, hooks: &Hooks, values: &mut [String]) -> ParseResult<()> {
    for value in values.iter() {
        if let Some(choices) = &hooks.choices {
            if !choices.contains(value) {
                return Err(ParseError::InvalidChoice {
                    name: name.to_string(),
                    value: value.clone(),
                    choices: choices.clone(),
                });
            }
        } else if let Some(assert) = &hooks.assert {
            assert(value.as_str()).map_err(|message| ParseError::AssertionFailure {
                name: name.to_string(),
                value: value.clone(),
                message,
            })?;
        }
    }

    if let Some(map) = &hooks.map {
        for value in values.iter_mut() {
            let mapped = map(value.as_str());
            log::trace!("'{}': '{}' -> '{}'", name, value, mapped);
            *value = mapped;
        }
    }
    Ok(())
}
