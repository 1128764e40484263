// src/constants.rs

/// El token que termina el escaneo de switches; lo que sigue es cola inerte.
pub const TERMINATOR: &str = "--";

/// El nombre del directorio de configuración de spanarg (dentro del directorio de config del sistema).
pub const CONFIG_DIR_NAME: &str = "spanarg";

/// El nombre del archivo de especificación por defecto (dentro del directorio de configuración).
pub const SPEC_FILENAME: &str = "spec.toml";
