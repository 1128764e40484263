// src/config.rs

use crate::constants::{CONFIG_DIR_NAME, SPEC_FILENAME};
use std::path::PathBuf;

/// Devuelve la ruta al directorio de configuración de spanarg.
/// A diferencia de un directorio de datos, no se crea: solo se lee de él.
pub fn get_config_dir() -> Result<PathBuf, String> {
    let config_path = dirs::config_dir()
        .ok_or("No se pudo encontrar el directorio de configuración del sistema.")?
        .join(CONFIG_DIR_NAME);
    log::debug!("Directorio de config: {:?}", config_path);
    Ok(config_path)
}

/// Devuelve la ruta al archivo spec.toml por defecto.
pub fn get_default_spec_path() -> Result<PathBuf, String> {
    get_config_dir().map(|dir| dir.join(SPEC_FILENAME))
}
