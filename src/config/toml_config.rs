use crate::config::{AppConfig, CliConfig};
use crate::utils::error::{Result, SyncError};
use regex::Regex;
use std::path::Path;

impl AppConfig {
    /// 依命令列參數決定配置來源：有 --config 讀 TOML，否則讀環境變數
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                Self::from_file(path)?
            }
            None => {
                tracing::info!("📁 Loading configuration from environment");
                Self::from_env()?
            }
        };
        config.apply_cli_overrides(cli);
        Ok(config)
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SyncError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// 替換環境變數 (例如 ${TMDB_API_KEY})，未設定的保持原樣
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SyncError::ConfigError {
        message: e.to_string(),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}
