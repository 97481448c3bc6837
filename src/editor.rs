//! 编辑器状态
//!
//! 字体和颜色各有一对「待定」与「已应用」的值。
//! 下拉框只修改待定值，只有 apply 会把待定值整体复制为已应用值，
//! 文本样式只从已应用值推导。

use ratatui::style::Style;
use tracing::{debug, info};

use crate::models::{ColorOption, FontOption};

/// 编辑器状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    text: String,
    pending_font: FontOption,
    pending_color: ColorOption,
    committed_font: FontOption,
    committed_color: ColorOption,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn pending_font(&self) -> FontOption {
        self.pending_font
    }

    pub fn pending_color(&self) -> ColorOption {
        self.pending_color
    }

    pub fn committed_font(&self) -> FontOption {
        self.committed_font
    }

    pub fn committed_color(&self) -> ColorOption {
        self.committed_color
    }

    /// 替换全部文本，不做任何校验
    pub fn on_text_change(&mut self, new_text: String) {
        self.text = new_text;
    }

    /// 记录待定字体，颜色不变
    pub fn on_font_pending(&mut self, choice: FontOption) {
        debug!(?choice, "pending font changed");
        self.pending_font = choice;
    }

    /// 记录待定颜色，字体不变
    pub fn on_color_pending(&mut self, choice: ColorOption) {
        debug!(?choice, "pending color changed");
        self.pending_color = choice;
    }

    /// 将待定的字体和颜色一起应用
    pub fn on_apply(&mut self) {
        self.committed_font = self.pending_font;
        self.committed_color = self.pending_color;
        info!(
            font = ?self.committed_font,
            color = ?self.committed_color,
            "style applied"
        );
    }

    /// 待定值与已应用值是否不同
    pub fn has_pending_changes(&self) -> bool {
        self.pending_font != self.committed_font || self.pending_color != self.committed_color
    }

    /// 文本样式，只取决于已应用的字体和颜色
    pub fn text_style(&self) -> Style {
        Style::default()
            .fg(self.committed_color.color())
            .add_modifier(self.committed_font.font_family().modifier())
    }
}
