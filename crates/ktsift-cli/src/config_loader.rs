use anyhow::Result;
use ktsift_config::{load_config, Config};
use std::path::PathBuf;

/// Effective config: defaults, then the file named by `KTSIFT_CONFIG`, then
/// the repo-level file (`--config` or `./ktsift.toml`). Later layers win.
pub fn load_effective_config(explicit_path: Option<&PathBuf>) -> Result<Config> {
    let mut config = Config::default();

    if let Some(env_cfg) = load_env_config()? {
        config.merge(env_cfg);
    }
    if let Some(repo_cfg) = load_repo_config(explicit_path)? {
        config.merge(repo_cfg);
    }

    Ok(config)
}

fn load_env_config() -> Result<Option<Config>> {
    if let Ok(env_path) = std::env::var("KTSIFT_CONFIG") {
        let path = PathBuf::from(&env_path);
        if path.exists() {
            match load_config(&path) {
                Ok(c) => return Ok(Some(c)),
                Err(e) => eprintln!("Warning: Failed to load config at {:?}: {}", path, e),
            }
        } else {
            eprintln!(
                "Warning: KTSIFT_CONFIG set to {:?} but file not found.",
                path
            );
        }
    }
    Ok(None)
}

fn load_repo_config(explicit_path: Option<&PathBuf>) -> Result<Option<Config>> {
    let config_file = explicit_path
        .cloned()
        .unwrap_or_else(|| PathBuf::from("ktsift.toml"));

    if !config_file.exists() {
        if explicit_path.is_some() {
            anyhow::bail!("Config file not found: {:?}", config_file);
        }
        return Ok(None);
    }

    load_config(&config_file).map(Some)
}
