//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use super::state::{Focus, PickerId};
use crate::models::{ColorOption, FontOption};

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    Focus(Focus),

    // 文本编辑
    Input(char),
    NewLine,
    DeleteChar,    // Backspace
    DeleteForward, // Delete
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // 下拉框
    OpenPicker(PickerId),
    HighlightPrev,
    HighlightNext,
    ConfirmHighlight,
    PickFont(FontOption),
    PickColor(ColorOption),
    Dismiss, // Esc / 点击外部

    Apply,
}
