use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vitalcheck_export::styles::PdfStyles;
use vitalcheck_session::write_private_file;

pub const SESSION_DIR_ENV: &str = "VITALCHECK_SESSION_DIR";
pub const EXPORT_DIR_ENV: &str = "VITALCHECK_EXPORT_DIR";

/// Contents of `config.json`. Every field is optional, so a hand-written
/// file only needs the keys it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalcheckConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    /// Overrides for the PDF report; omitted fields keep their defaults.
    #[serde(default)]
    pub pdf: PdfStyles,
}

/// Effective settings after applying flags, environment and config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub session_dir: PathBuf,
    pub export_dir: PathBuf,
    pub pdf: PdfStyles,
}

impl Settings {
    /// Precedence: command-line flag, then environment, then config file,
    /// then the platform default.
    pub fn resolve(
        config: &VitalcheckConfig,
        session_dir_flag: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> eyre::Result<Self> {
        let session_dir = match session_dir_flag {
            Some(dir) => dir.to_path_buf(),
            None => match env_path(&env, SESSION_DIR_ENV).or_else(|| config.session_dir.clone()) {
                Some(dir) => dir,
                None => default_session_dir()?,
            },
        };
        let export_dir = env_path(&env, EXPORT_DIR_ENV)
            .or_else(|| config.export_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Settings {
            session_dir,
            export_dir,
            pdf: config.pdf.clone(),
        })
    }
}

fn env_path(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<PathBuf> {
    env(key).filter(|v| !v.trim().is_empty()).map(PathBuf::from)
}

fn default_session_dir() -> eyre::Result<PathBuf> {
    let base = dirs::data_local_dir().ok_or_else(|| eyre::eyre!("no local data directory found"))?;
    Ok(base.join("vitalcheck"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("vitalcheck").join("config.json"))
}

/// Load the config at `path`. A missing file is an empty config.
pub fn load_config(path: &Path) -> eyre::Result<VitalcheckConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(VitalcheckConfig::default());
        }
        Err(e) => {
            return Err(eyre::eyre!("failed to read config at {}: {e}", path.display()));
        }
    };

    serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("invalid config at {}: {e}", path.display()))
}

pub fn save_config(path: &Path, config: &VitalcheckConfig) -> eyre::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    write_private_file(path, &json)?;
    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
