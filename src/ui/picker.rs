//! 通用下拉选择器
//!
//! 两个状态：关闭（初始）与展开。展开时点击某项会回调一次并关闭，
//! 点击列表外部只关闭、不回调。

use std::marker::PhantomData;

use ratatui::layout::{Position, Rect};
use tracing::debug;

use crate::models::Choice;

/// 选择器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Closed,
    /// highlighted 是键盘高亮位置，不是选择结果
    Open { highlighted: usize },
}

/// 下拉选择器，T 为固定选项集合
#[derive(Debug, Clone)]
pub struct Picker<T: Choice> {
    state: PickerState,
    _choice: PhantomData<T>,
}

impl<T: Choice> Default for Picker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Choice> Picker<T> {
    pub fn new() -> Self {
        Self {
            state: PickerState::Closed,
            _choice: PhantomData,
        }
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PickerState::Open { .. })
    }

    /// 当前高亮项（仅展开时）
    pub fn highlighted(&self) -> Option<T> {
        match self.state {
            PickerState::Open { highlighted } => T::from_index(highlighted),
            PickerState::Closed => None,
        }
    }

    /// 展开，高亮当前显示的值；已展开时无效果
    pub fn open(&mut self, selected: T) {
        if self.is_open() {
            return;
        }
        debug!(?selected, "picker opened");
        self.state = PickerState::Open {
            highlighted: selected.index(),
        };
    }

    /// 关闭且不回调，返回之前是否展开
    pub fn dismiss(&mut self) -> bool {
        let was_open = self.is_open();
        if was_open {
            debug!("picker dismissed");
        }
        self.state = PickerState::Closed;
        was_open
    }

    /// 移动高亮（循环）
    pub fn move_highlight(&mut self, delta: isize) {
        if let PickerState::Open { highlighted } = &mut self.state {
            let len = T::ALL.len() as isize;
            *highlighted = (*highlighted as isize + delta).rem_euclid(len) as usize;
        }
    }

    /// 选中某项：先关闭再回调一次；关闭状态下忽略
    pub fn select(&mut self, choice: T, on_select: impl FnOnce(T)) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = PickerState::Closed;
        debug!(?choice, "picker selected");
        on_select(choice);
        true
    }

    /// 选中当前高亮项
    pub fn select_highlighted(&mut self, on_select: impl FnOnce(T)) -> bool {
        match self.highlighted() {
            Some(choice) => self.select(choice, on_select),
            None => false,
        }
    }
}

/// 渲染后记录的区域，用于鼠标命中测试
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerLayout {
    /// 关闭状态下的按钮
    pub button: Rect,
    /// 展开列表（含边框），关闭时为空
    pub list: Rect,
    /// 每个选项所在行，顺序与 ALL 一致
    pub options: Vec<Rect>,
}

impl PickerLayout {
    pub fn is_button(&self, x: u16, y: u16) -> bool {
        self.button.contains(Position::new(x, y))
    }

    pub fn option_at(&self, x: u16, y: u16) -> Option<usize> {
        self.options
            .iter()
            .position(|area| area.contains(Position::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColorOption, FontOption};

    #[test]
    fn test_starts_closed() {
        let picker = Picker::<FontOption>::new();
        assert_eq!(picker.state(), PickerState::Closed);
        assert_eq!(picker.highlighted(), None);
    }

    #[test]
    fn test_open_highlights_selected() {
        let mut picker = Picker::<ColorOption>::new();
        picker.open(ColorOption::Blue);
        assert!(picker.is_open());
        assert_eq!(picker.highlighted(), Some(ColorOption::Blue));
    }

    #[test]
    fn test_select_calls_back_once_and_closes() {
        let mut picker = Picker::<FontOption>::new();
        picker.open(FontOption::Default);

        let mut calls = Vec::new();
        assert!(picker.select(FontOption::Monospace, |f| calls.push(f)));
        assert_eq!(calls, vec![FontOption::Monospace]);
        assert!(!picker.is_open());

        // 已关闭，不再回调
        assert!(!picker.select(FontOption::Serif, |f| calls.push(f)));
        assert_eq!(calls, vec![FontOption::Monospace]);
    }

    #[test]
    fn test_select_while_closed_is_ignored() {
        let mut picker = Picker::<ColorOption>::new();
        let mut called = false;
        assert!(!picker.select(ColorOption::Red, |_| called = true));
        assert!(!picker.select_highlighted(|_| called = true));
        assert!(!called);
    }

    #[test]
    fn test_dismiss_does_not_call_back() {
        let mut picker = Picker::<FontOption>::new();
        picker.open(FontOption::Serif);
        picker.move_highlight(1);
        assert!(picker.dismiss());
        assert!(!picker.is_open());
        assert!(!picker.dismiss());

        let mut called = false;
        assert!(!picker.select_highlighted(|_| called = true));
        assert!(!called);
    }

    #[test]
    fn test_highlight_wraps() {
        let mut picker = Picker::<ColorOption>::new();
        picker.open(ColorOption::Black);
        picker.move_highlight(-1);
        assert_eq!(picker.highlighted(), Some(ColorOption::Green));
        picker.move_highlight(1);
        assert_eq!(picker.highlighted(), Some(ColorOption::Black));
        picker.move_highlight(2);
        assert_eq!(picker.highlighted(), Some(ColorOption::Blue));
    }

    #[test]
    fn test_select_highlighted() {
        let mut picker = Picker::<ColorOption>::new();
        picker.open(ColorOption::Black);
        picker.move_highlight(1);
        let mut picked = None;
        assert!(picker.select_highlighted(|c| picked = Some(c)));
        assert_eq!(picked, Some(ColorOption::Red));
        assert!(!picker.is_open());
    }

    #[test]
    fn test_reopen_after_close() {
        let mut picker = Picker::<FontOption>::new();
        picker.open(FontOption::Default);
        picker.dismiss();
        picker.open(FontOption::SansSerif);
        assert_eq!(picker.highlighted(), Some(FontOption::SansSerif));
    }

    #[test]
    fn test_layout_hit_testing() {
        let layout = PickerLayout {
            button: Rect::new(10, 2, 12, 1),
            list: Rect::new(10, 3, 12, 4),
            options: vec![Rect::new(11, 4, 10, 1), Rect::new(11, 5, 10, 1)],
        };
        assert!(layout.is_button(10, 2));
        assert!(layout.is_button(21, 2));
        assert!(!layout.is_button(22, 2));
        assert_eq!(layout.option_at(11, 4), Some(0));
        assert_eq!(layout.option_at(15, 5), Some(1));
        assert_eq!(layout.option_at(10, 4), None);
    }
}
