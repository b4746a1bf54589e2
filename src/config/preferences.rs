//! 用户偏好持久化
//!
//! 只保存两项：每页条数和界面语言。文件缺失或损坏时回退默认值。

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{LinkdeckError, Result};
use crate::i18n::Language;

pub const MIN_PAGE_SIZE: u64 = 1;
pub const MAX_PAGE_SIZE: u64 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    #[serde(default)]
    pub language: Language,
}

fn default_page_size() -> u64 {
    20
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            language: Language::default(),
        }
    }
}

/// 把每页条数限制在合法范围内
pub fn clamp_page_size(size: u64) -> u64 {
    size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
}

/// 偏好文件句柄
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    current: Preferences,
}

impl PreferenceStore {
    /// 读取偏好文件；不存在时使用 `defaults`
    pub fn load<P: AsRef<Path>>(path: P, defaults: Preferences) -> Self {
        let path = path.as_ref().to_path_buf();
        let current = match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<Preferences>(&content) {
                Ok(mut prefs) => {
                    prefs.page_size = clamp_page_size(prefs.page_size);
                    debug!("Preferences loaded from {}", path.display());
                    prefs
                }
                Err(e) => {
                    warn!(
                        "Preferences file {} is corrupt, using defaults: {}",
                        path.display(),
                        e
                    );
                    defaults
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => defaults,
            Err(e) => {
                warn!("Failed to read preferences {}: {}", path.display(), e);
                defaults
            }
        };

        Self { path, current }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self) -> &Preferences {
        &self.current
    }

    pub fn page_size(&self) -> u64 {
        self.current.page_size
    }

    pub fn language(&self) -> Language {
        self.current.language
    }

    /// 更新每页条数并写盘
    pub fn set_page_size(&mut self, size: u64) -> Result<u64> {
        self.current.page_size = clamp_page_size(size);
        self.save()?;
        Ok(self.current.page_size)
    }

    /// 更新语言并写盘
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.current.language = language;
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&self.current)
            .map_err(|e| LinkdeckError::serialization(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        debug!("Preferences saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let store = PreferenceStore::load(dir.path().join("none.toml"), Preferences::default());
        assert_eq!(store.page_size(), 20);
        assert_eq!(store.language(), Language::En);
    }

    #[test]
    fn test_page_size_persisted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.toml");

        let mut store = PreferenceStore::load(&path, Preferences::default());
        assert_eq!(store.set_page_size(50).unwrap(), 50);
        store.set_language(Language::Zh).unwrap();

        let reloaded = PreferenceStore::load(&path, Preferences::default());
        assert_eq!(reloaded.page_size(), 50);
        assert_eq!(reloaded.language(), Language::Zh);
    }

    #[test]
    fn test_page_size_clamped() {
        let dir = TempDir::new().unwrap();
        let mut store = PreferenceStore::load(dir.path().join("p.toml"), Preferences::default());
        assert_eq!(store.set_page_size(0).unwrap(), MIN_PAGE_SIZE);
        assert_eq!(store.set_page_size(10_000).unwrap(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, "page_size = \"lots\"").unwrap();

        let defaults = Preferences {
            page_size: 30,
            language: Language::En,
        };
        let store = PreferenceStore::load(&path, defaults.clone());
        assert_eq!(store.get(), &defaults);
    }
}
