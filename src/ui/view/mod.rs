//! 视图层模块
//!
//! 包含主渲染入口；渲染时记录各控件区域，供鼠标事件命中测试

pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::picker::PickerLayout;
use super::state::{App, AppMode, Focus, PickerId};
use crate::models::Choice;
use components::{render_button, render_picker_button, render_picker_list};

const PLACEHOLDER: &str = "Escribe tu texto aquí";
const CAPTION_WIDTH: u16 = 10;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.settings.editor_height.saturating_add(2)), // 编辑区
            Constraint::Length(1),
            Constraint::Length(1), // 字体
            Constraint::Length(1),
            Constraint::Length(1), // 颜色
            Constraint::Length(1),
            Constraint::Length(3), // 应用按钮
            Constraint::Min(0),
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_editor(frame, app, chunks[0]);
    let font_button = render_font_row(frame, app, chunks[2]);
    let color_button = render_color_row(frame, app, chunks[4]);
    render_button(
        frame,
        chunks[6],
        "Aplicar cambios",
        app.focus == Focus::Apply && app.open_picker().is_none(),
    );
    render_help(frame, app, chunks[8]);

    app.layout.editor = chunks[0];
    app.layout.apply = chunks[6];
    app.layout.font_picker = PickerLayout {
        button: font_button,
        ..PickerLayout::default()
    };
    app.layout.color_picker = PickerLayout {
        button: color_button,
        ..PickerLayout::default()
    };

    // 展开的列表最后绘制，覆盖下方控件
    match app.open_picker() {
        Some(PickerId::Font) => {
            let (list, options) = render_picker_list(
                frame,
                font_button,
                app.editor.pending_font(),
                &app.font_picker,
            );
            app.layout.font_picker.list = list;
            app.layout.font_picker.options = options;
        }
        Some(PickerId::Color) => {
            let (list, options) = render_picker_list(
                frame,
                color_button,
                app.editor.pending_color(),
                &app.color_picker,
            );
            app.layout.color_picker.list = list;
            app.layout.color_picker.options = options;
        }
        None => {}
    }
}

fn render_editor(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.mode() == AppMode::Editing;
    let border_style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let block = Block::default()
        .title("Texto")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let background = app.settings.editor_background;
    let (line, col) = app.cursor_line_col();
    let line = u16::try_from(line).unwrap_or(u16::MAX);
    let col = u16::try_from(col).unwrap_or(u16::MAX);
    // 光标始终留在可见区域内
    let scroll = line.saturating_sub(inner.height.saturating_sub(1));
    let hscroll = col.saturating_sub(inner.width.saturating_sub(1));

    let paragraph = if app.editor.text().is_empty() {
        Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray).bg(background))
    } else {
        // 样式只取已应用的字体和颜色
        Paragraph::new(app.editor.text())
            .style(app.editor.text_style().bg(background))
            .scroll((scroll, hscroll))
    };
    frame.render_widget(paragraph, inner);

    if is_focused && inner.width > 0 && inner.height > 0 {
        let x = inner.x + col.saturating_sub(hscroll).min(inner.width - 1);
        let y = inner.y + line.saturating_sub(scroll).min(inner.height - 1);
        frame.set_cursor_position(Position::new(x, y));
    }
}

fn split_row(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CAPTION_WIDTH), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

fn render_font_row(frame: &mut Frame, app: &App, area: Rect) -> Rect {
    let (caption, control) = split_row(area);
    frame.render_widget(Paragraph::new("Fuente:"), caption);
    render_picker_button(
        frame,
        control,
        app.editor.pending_font(),
        &app.font_picker,
        app.focus == Focus::FontPicker,
    )
}

fn render_color_row(frame: &mut Frame, app: &App, area: Rect) -> Rect {
    let (caption, control) = split_row(area);
    frame.render_widget(Paragraph::new("Color:"), caption);
    render_picker_button(
        frame,
        control,
        app.editor.pending_color(),
        &app.color_picker,
        app.focus == Focus::ColorPicker,
    )
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode() {
        AppMode::Editing => "[Tab] siguiente  [Ctrl+Q] salir",
        AppMode::Navigating(Focus::Apply) => "[Enter] aplicar  [Tab] siguiente  [Ctrl+Q] salir",
        AppMode::Navigating(_) => "[Enter] abrir  [Tab] siguiente  [Ctrl+Q] salir",
        AppMode::Picking(_) => "[↑/↓] mover  [Enter] elegir  [Esc] cerrar",
    };

    let mut text = help_text.to_string();
    if app.editor.has_pending_changes() {
        text.push_str("  |  Cambios sin aplicar");
    }
    text.push_str(&format!(
        "  |  Estilo: {} / {}",
        app.editor.committed_font().label(),
        app.editor.committed_color().label()
    ));

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
