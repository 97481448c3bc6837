//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use ratatui::layout::Rect;
use ratatui::style::Color;

use super::picker::{Picker, PickerLayout};
use crate::editor::EditorState;
use crate::models::{ColorOption, FontOption};

/// 应用状态
pub struct App {
    pub editor: EditorState,
    pub cursor: usize, // 光标位置（字符索引）
    pub focus: Focus,
    pub font_picker: Picker<FontOption>,
    pub color_picker: Picker<ColorOption>,
    pub settings: ViewSettings,
    pub layout: ScreenLayout,
}

/// 可获得焦点的控件，顺序即 Tab 顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Editor,
    FontPicker,
    ColorPicker,
    Apply,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Editor,
        Focus::FontPicker,
        Focus::ColorPicker,
        Focus::Apply,
    ];

    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// 哪个选择器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerId {
    Font,
    Color,
}

/// 应用模式，由焦点和选择器状态推导
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Editing,
    Navigating(Focus),
    Picking(PickerId),
}

/// 纯展示相关的设置
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    pub editor_height: u16,
    pub editor_background: Color,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            editor_height: 8,
            editor_background: Color::White,
        }
    }
}

/// 上一次渲染的控件区域
#[derive(Debug, Clone, Default)]
pub struct ScreenLayout {
    pub editor: Rect,
    pub font_picker: PickerLayout,
    pub color_picker: PickerLayout,
    pub apply: Rect,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            editor: EditorState::new(),
            cursor: 0,
            focus: Focus::Editor,
            font_picker: Picker::new(),
            color_picker: Picker::new(),
            settings: ViewSettings::default(),
            layout: ScreenLayout::default(),
        }
    }

    pub fn with_settings(mut self, settings: ViewSettings) -> Self {
        self.settings = settings;
        self
    }

    /// 当前展开的选择器
    pub fn open_picker(&self) -> Option<PickerId> {
        if self.font_picker.is_open() {
            Some(PickerId::Font)
        } else if self.color_picker.is_open() {
            Some(PickerId::Color)
        } else {
            None
        }
    }

    pub fn mode(&self) -> AppMode {
        if let Some(id) = self.open_picker() {
            AppMode::Picking(id)
        } else if self.focus == Focus::Editor {
            AppMode::Editing
        } else {
            AppMode::Navigating(self.focus)
        }
    }
}
