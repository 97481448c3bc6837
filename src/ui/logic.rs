//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种处理方法

use unicode_width::UnicodeWidthStr;

use super::actions::Action;
use super::state::{App, Focus, PickerId};
use crate::models::{ColorOption, FontOption};

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::Focus(focus) => self.focus = focus,

            Action::Input(c) => self.insert_char(c),
            Action::NewLine => self.insert_char('\n'),
            Action::DeleteChar => self.delete_before_cursor(),
            Action::DeleteForward => self.delete_at_cursor(),
            Action::CursorLeft => self.cursor = self.cursor.saturating_sub(1),
            Action::CursorRight => self.cursor = (self.cursor + 1).min(self.char_count()),
            Action::CursorHome => self.cursor = self.line_start(),
            Action::CursorEnd => self.cursor = self.line_end(),

            Action::OpenPicker(id) => self.open(id),
            Action::HighlightPrev => self.move_highlight(-1),
            Action::HighlightNext => self.move_highlight(1),
            Action::ConfirmHighlight => self.confirm_highlight(),
            Action::PickFont(choice) => self.pick_font(choice),
            Action::PickColor(choice) => self.pick_color(choice),
            Action::Dismiss => self.dismiss(),

            Action::Apply => {
                self.focus = Focus::Apply;
                self.editor.on_apply();
            }
        }
        false
    }

    // ============ 下拉框相关 ============

    /// 展开选择器，同一时间只有一个展开
    pub fn open(&mut self, id: PickerId) {
        if self.open_picker().is_some() {
            return;
        }
        match id {
            PickerId::Font => {
                self.focus = Focus::FontPicker;
                self.font_picker.open(self.editor.pending_font());
            }
            PickerId::Color => {
                self.focus = Focus::ColorPicker;
                self.color_picker.open(self.editor.pending_color());
            }
        }
    }

    fn move_highlight(&mut self, delta: isize) {
        match self.open_picker() {
            Some(PickerId::Font) => self.font_picker.move_highlight(delta),
            Some(PickerId::Color) => self.color_picker.move_highlight(delta),
            None => {}
        }
    }

    fn confirm_highlight(&mut self) {
        let open = self.open_picker();
        let editor = &mut self.editor;
        match open {
            Some(PickerId::Font) => {
                self.font_picker.select_highlighted(|f| editor.on_font_pending(f));
            }
            Some(PickerId::Color) => {
                self.color_picker.select_highlighted(|c| editor.on_color_pending(c));
            }
            None => {}
        }
    }

    pub fn pick_font(&mut self, choice: FontOption) {
        let editor = &mut self.editor;
        self.font_picker.select(choice, |f| editor.on_font_pending(f));
    }

    pub fn pick_color(&mut self, choice: ColorOption) {
        let editor = &mut self.editor;
        self.color_picker.select(choice, |c| editor.on_color_pending(c));
    }

    /// 关闭展开的选择器，不修改待定值
    pub fn dismiss(&mut self) {
        self.font_picker.dismiss();
        self.color_picker.dismiss();
    }

    // ============ 文本编辑相关 ============

    fn char_count(&self) -> usize {
        self.editor.text().chars().count()
    }

    /// 字符索引转字节偏移
    fn byte_offset(&self, char_index: usize) -> usize {
        self.editor
            .text()
            .char_indices()
            .nth(char_index)
            .map_or(self.editor.text().len(), |(i, _)| i)
    }

    fn insert_char(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor);
        let mut text = self.editor.text().to_string();
        text.insert(offset, c);
        self.editor.on_text_change(text);
        self.cursor += 1;
    }

    fn delete_before_cursor(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.delete_at_cursor();
    }

    fn delete_at_cursor(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let offset = self.byte_offset(self.cursor);
        let mut text = self.editor.text().to_string();
        text.remove(offset);
        self.editor.on_text_change(text);
    }

    /// 光标所在行的起始字符索引
    fn line_start(&self) -> usize {
        let before: Vec<char> = self.editor.text().chars().take(self.cursor).collect();
        before
            .iter()
            .rposition(|c| *c == '\n')
            .map_or(0, |i| i + 1)
    }

    /// 光标所在行的结束字符索引
    fn line_end(&self) -> usize {
        self.editor
            .text()
            .chars()
            .skip(self.cursor)
            .position(|c| c == '\n')
            .map_or(self.char_count(), |i| self.cursor + i)
    }

    /// 光标的 (行, 显示列)，用于渲染；宽字符占两列
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let text = self.editor.text();
        let line = text
            .chars()
            .take(self.cursor)
            .filter(|c| *c == '\n')
            .count();
        let prefix = &text[self.byte_offset(self.line_start())..self.byte_offset(self.cursor)];
        (line, prefix.width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Choice;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch(Action::Input(c));
        }
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        assert!(app.dispatch(Action::Quit));
        assert!(!app.dispatch(Action::FocusNext));
    }

    #[test]
    fn test_scenario_through_pickers() {
        let mut app = App::new();

        app.dispatch(Action::OpenPicker(PickerId::Font));
        assert!(app.font_picker.is_open());
        app.dispatch(Action::PickFont(FontOption::Monospace));
        assert!(!app.font_picker.is_open());
        assert_eq!(app.editor.pending_font(), FontOption::Monospace);
        assert_eq!(app.editor.committed_font(), FontOption::Default);

        app.dispatch(Action::OpenPicker(PickerId::Color));
        app.dispatch(Action::PickColor(ColorOption::Red));
        assert_eq!(app.editor.pending_color(), ColorOption::Red);
        assert_eq!(app.editor.committed_color(), ColorOption::Black);

        app.dispatch(Action::Apply);
        assert_eq!(app.editor.committed_font(), FontOption::Monospace);
        assert_eq!(app.editor.committed_color(), ColorOption::Red);
    }

    #[test]
    fn test_dismiss_keeps_pending() {
        let mut app = App::new();
        app.dispatch(Action::OpenPicker(PickerId::Font));
        app.dispatch(Action::HighlightNext);
        app.dispatch(Action::Dismiss);
        assert!(!app.font_picker.is_open());
        assert_eq!(app.editor.pending_font(), FontOption::Default);
    }

    #[test]
    fn test_pick_while_closed_is_ignored() {
        let mut app = App::new();
        app.dispatch(Action::PickColor(ColorOption::Green));
        assert_eq!(app.editor.pending_color(), ColorOption::Black);
    }

    #[test]
    fn test_keyboard_selection() {
        let mut app = App::new();
        app.dispatch(Action::OpenPicker(PickerId::Color));
        app.dispatch(Action::HighlightNext);
        app.dispatch(Action::HighlightNext);
        app.dispatch(Action::ConfirmHighlight);
        assert_eq!(app.editor.pending_color(), ColorOption::Blue);
        assert_eq!(app.editor.pending_font(), FontOption::Default);
        assert_eq!(app.open_picker(), None);
    }

    #[test]
    fn test_reopen_highlights_pending() {
        let mut app = App::new();
        app.dispatch(Action::OpenPicker(PickerId::Font));
        app.dispatch(Action::PickFont(FontOption::SansSerif));
        app.dispatch(Action::OpenPicker(PickerId::Font));
        assert_eq!(app.font_picker.highlighted(), Some(FontOption::SansSerif));
    }

    #[test]
    fn test_only_one_picker_open() {
        let mut app = App::new();
        app.dispatch(Action::OpenPicker(PickerId::Font));
        app.dispatch(Action::OpenPicker(PickerId::Color));
        assert!(app.font_picker.is_open());
        assert!(!app.color_picker.is_open());
    }

    #[test]
    fn test_every_option_updates_one_field() {
        for font in FontOption::ALL {
            let mut app = App::new();
            app.dispatch(Action::OpenPicker(PickerId::Font));
            app.dispatch(Action::PickFont(*font));
            assert_eq!(app.editor.pending_font(), *font);
            assert_eq!(app.editor.pending_color(), ColorOption::Black);
        }
        for color in ColorOption::ALL {
            let mut app = App::new();
            app.dispatch(Action::OpenPicker(PickerId::Color));
            app.dispatch(Action::PickColor(*color));
            assert_eq!(app.editor.pending_color(), *color);
            assert_eq!(app.editor.pending_font(), FontOption::Default);
        }
    }

    #[test]
    fn test_text_editing() {
        let mut app = App::new();
        type_text(&mut app, "hola");
        assert_eq!(app.editor.text(), "hola");
        assert_eq!(app.cursor, 4);

        app.dispatch(Action::CursorLeft);
        app.dispatch(Action::DeleteChar);
        assert_eq!(app.editor.text(), "hoa");
        assert_eq!(app.cursor, 2);

        app.dispatch(Action::DeleteForward);
        assert_eq!(app.editor.text(), "ho");

        app.dispatch(Action::CursorHome);
        type_text(&mut app, "¡");
        assert_eq!(app.editor.text(), "¡ho");
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_multiline_cursor() {
        let mut app = App::new();
        type_text(&mut app, "ab");
        app.dispatch(Action::NewLine);
        type_text(&mut app, "cde");
        assert_eq!(app.editor.text(), "ab\ncde");
        assert_eq!(app.cursor_line_col(), (1, 3));

        app.dispatch(Action::CursorHome);
        assert_eq!(app.cursor, 3);
        app.dispatch(Action::CursorLeft);
        app.dispatch(Action::CursorHome);
        assert_eq!(app.cursor, 0);
        app.dispatch(Action::CursorEnd);
        assert_eq!(app.cursor, 2);
        assert_eq!(app.cursor_line_col(), (0, 2));
    }

    #[test]
    fn test_cursor_column_uses_display_width() {
        let mut app = App::new();
        type_text(&mut app, "你好a");
        assert_eq!(app.cursor, 3);
        assert_eq!(app.cursor_line_col(), (0, 5));

        app.dispatch(Action::NewLine);
        type_text(&mut app, "é");
        assert_eq!(app.cursor_line_col(), (1, 1));
    }

    #[test]
    fn test_delete_bounds() {
        let mut app = App::new();
        app.dispatch(Action::DeleteChar);
        app.dispatch(Action::DeleteForward);
        app.dispatch(Action::CursorRight);
        assert_eq!(app.editor.text(), "");
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_text_does_not_change_style() {
        let mut app = App::new();
        let style = app.editor.text_style();
        type_text(&mut app, "texto");
        assert_eq!(app.editor.text_style(), style);
    }
}
