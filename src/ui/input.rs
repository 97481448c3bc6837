//! 事件映射 (Input -> Action)
//!
//! 将按键和鼠标事件转换为 Action

use std::io;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::actions::Action;
use super::state::{App, AppMode, Focus, PickerId};
use crate::models::{Choice, ColorOption, FontOption};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: AppMode, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match mode {
        AppMode::Picking(_) => match key.code {
            KeyCode::Esc => Some(Action::Dismiss),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ConfirmHighlight),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::HighlightPrev),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::HighlightNext),
            _ => None,
        },
        AppMode::Editing => match key.code {
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::Enter => Some(Action::NewLine),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Delete => Some(Action::DeleteForward),
            KeyCode::Left => Some(Action::CursorLeft),
            KeyCode::Right => Some(Action::CursorRight),
            KeyCode::Home => Some(Action::CursorHome),
            KeyCode::End => Some(Action::CursorEnd),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        AppMode::Navigating(focus) => match key.code {
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => match focus {
                Focus::FontPicker => Some(Action::OpenPicker(PickerId::Font)),
                Focus::ColorPicker => Some(Action::OpenPicker(PickerId::Color)),
                Focus::Apply if key.code != KeyCode::Down => Some(Action::Apply),
                _ => None,
            },
            _ => None,
        },
    }
}

/// 根据上一次渲染的布局把鼠标点击转换为 Action
pub fn get_mouse_action(app: &App, mouse: MouseEvent) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let (x, y) = (mouse.column, mouse.row);
    let layout = &app.layout;

    // 展开时点击选项即选择，点击列表外任何位置都只关闭
    match app.open_picker() {
        Some(PickerId::Font) => {
            let picker = &layout.font_picker;
            return match picker.option_at(x, y).and_then(FontOption::from_index) {
                Some(choice) => Some(Action::PickFont(choice)),
                None if picker.list.contains(Position::new(x, y)) => None,
                None => Some(Action::Dismiss),
            };
        }
        Some(PickerId::Color) => {
            let picker = &layout.color_picker;
            return match picker.option_at(x, y).and_then(ColorOption::from_index) {
                Some(choice) => Some(Action::PickColor(choice)),
                None if picker.list.contains(Position::new(x, y)) => None,
                None => Some(Action::Dismiss),
            };
        }
        None => {}
    }

    if layout.font_picker.is_button(x, y) {
        Some(Action::OpenPicker(PickerId::Font))
    } else if layout.color_picker.is_button(x, y) {
        Some(Action::OpenPicker(PickerId::Color))
    } else if layout.apply.contains(Position::new(x, y)) {
        Some(Action::Apply)
    } else if layout.editor.contains(Position::new(x, y)) {
        Some(Action::Focus(Focus::Editor))
    } else {
        None
    }
}

/// 处理终端事件，返回是否退出
pub fn handle_event(app: &mut App, event: Event) -> io::Result<bool> {
    let action = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => get_action(app.mode(), key),
        Event::Mouse(mouse) => get_mouse_action(app, mouse),
        _ => None,
    };

    match action {
        Some(action) => Ok(app.dispatch(action)),
        None => Ok(false),
    }
}
