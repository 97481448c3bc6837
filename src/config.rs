use std::fs;
use std::io;
use std::path::Path;

use ratatui::style::Color;
use serde::Deserialize;
use tracing::warn;

use crate::ui::ViewSettings;

const MIN_EDITOR_HEIGHT: u16 = 3;
const MAX_EDITOR_HEIGHT: u16 = 500;

/// 配置文件结构
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 编辑区行数
    pub editor_height: u16,
    /// 编辑区背景色，颜色名或 #rrggbb
    pub editor_background: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor_height: 8,
            editor_background: "white".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// 转换为视图设置
    pub fn view_settings(&self) -> io::Result<ViewSettings> {
        let editor_background: Color = self.editor_background.parse().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid editor_background: {}", self.editor_background),
            )
        })?;

        let editor_height = if self.editor_height < MIN_EDITOR_HEIGHT {
            warn!(
                editor_height = self.editor_height,
                "editor_height too small, using {}", MIN_EDITOR_HEIGHT
            );
            MIN_EDITOR_HEIGHT
        } else if self.editor_height > MAX_EDITOR_HEIGHT {
            warn!(
                editor_height = self.editor_height,
                "editor_height too large, using {}", MAX_EDITOR_HEIGHT
            );
            MAX_EDITOR_HEIGHT
        } else {
            self.editor_height
        };

        Ok(ViewSettings {
            editor_height,
            editor_background,
        })
    }
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> io::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
