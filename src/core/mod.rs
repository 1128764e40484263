// src/core/mod.rs

pub mod error;
pub mod extractor;
pub mod parsed;
pub mod registry;
pub mod scanner;
pub mod spec_loader;
pub mod validator;
