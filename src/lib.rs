// src/lib.rs

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod models;

pub use crate::core::error::{ParseError, ParseResult};
pub use crate::core::parsed::ParsedArgs;
pub use crate::core::registry::Registry;
pub use crate::models::{Arity, PositionalSpec, SwitchSpec};
