use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_ROOT_URL: &str = "http://localhost:3000";
pub const DEFAULT_USER: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "vmi";
pub const DEFAULT_FOLDER: &str = "vmi-reference";
pub const DEFAULT_OUT_SUBDIR: &str = "dashboards";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TransferConfig {
    pub root_url: String,
    pub user: String,
    pub password: String,
    /// Output folder for saved dashboards
    pub folder: String,
    pub out_dir: PathBuf,
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub root_url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub folder: Option<String>,
    pub out_dir: Option<PathBuf>,
}

/// `dashboards/` next to the running executable
pub fn default_out_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_OUT_SUBDIR)
}

pub fn load_transfer_config(overrides: &ConfigOverrides) -> anyhow::Result<TransferConfig> {
    let mut builder = config::Config::builder()
        .set_default("root_url", DEFAULT_ROOT_URL)?
        .set_default("user", DEFAULT_USER)?
        .set_default("password", DEFAULT_PASSWORD)?
        .set_default("folder", DEFAULT_FOLDER)?
        .set_default("out_dir", path_value(&default_out_dir()))?;

    if let Some(path) = &overrides.config_file {
        builder = builder
            .add_source(config::File::from(path.as_path()).format(config::FileFormat::Toml));
    }

    let settings = builder
        .set_override_option("root_url", overrides.root_url.clone())?
        .set_override_option("user", overrides.user.clone())?
        .set_override_option("password", overrides.password.clone())?
        .set_override_option("folder", overrides.folder.clone())?
        .set_override_option("out_dir", overrides.out_dir.as_deref().map(path_value))?
        .build()?;

    Ok(settings.try_deserialize()?)
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
