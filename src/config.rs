use crate::error::{CarOnlineError, Result};
use caronline_common::{Endpoints, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// APIオリジンを上書きする環境変数
pub const BASE_URL_ENV: &str = "CARONLINE_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// ローカルの自己署名証明書を許可する
    pub accept_invalid_certs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_seconds: 30,
            accept_invalid_certs: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（ファイルがなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CarOnlineError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("caronline").join("config.json"))
    }

    /// APIオリジン（環境変数を優先）
    pub fn effective_base_url(&self) -> String {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.base_url.clone(),
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.effective_base_url())
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        let url = url.trim().to_string();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CarOnlineError::Config(format!(
                "URLは http:// または https:// で始めてください: {}",
                url
            )));
        }
        self.base_url = url;
        Ok(())
    }
}
