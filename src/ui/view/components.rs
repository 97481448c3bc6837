//! 通用 UI 组件
//!
//! 下拉按钮、展开列表、按钮等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::models::{Choice, ColorOption, FontOption};
use crate::ui::picker::{Picker, PickerState};

/// 选项在列表中的外观
pub trait PickerItem: Choice {
    fn item_style(self) -> Style {
        Style::default()
    }

    /// 颜色预览块
    fn swatch(self) -> Option<Color> {
        None
    }
}

impl PickerItem for FontOption {
    fn item_style(self) -> Style {
        Style::default().add_modifier(self.font_family().modifier())
    }
}

impl PickerItem for ColorOption {
    fn swatch(self) -> Option<Color> {
        Some(self.color())
    }
}

fn label_width<T: Choice>() -> usize {
    T::ALL
        .iter()
        .map(|c| c.label().chars().count())
        .max()
        .unwrap_or(0)
}

fn swatch_spans<T: PickerItem>(choice: T) -> Vec<Span<'static>> {
    match choice.swatch() {
        Some(color) => vec![
            Span::styled("  ", Style::default().bg(color)),
            Span::raw(" "),
        ],
        None => Vec::new(),
    }
}

/// [组件] 下拉框的关闭态按钮，返回按钮区域
pub fn render_picker_button<T: PickerItem>(
    frame: &mut Frame,
    area: Rect,
    selected: T,
    picker: &Picker<T>,
    is_focused: bool,
) -> Rect {
    let arrow = if picker.is_open() { "▲" } else { "▼" };
    let border_style = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![Span::styled("[ ", border_style)];
    spans.extend(swatch_spans(selected));
    spans.push(Span::raw(format!(
        "{:width$}",
        selected.label(),
        width = label_width::<T>()
    )));
    spans.push(Span::styled(format!(" {} ]", arrow), border_style));

    let line = Line::from(spans);
    let button = Rect::new(
        area.x,
        area.y,
        (line.width() as u16).min(area.width),
        area.height.min(1),
    );
    frame.render_widget(Paragraph::new(line), button);
    button
}

/// [组件] 展开的选项列表，覆盖在按钮下方
///
/// 返回列表区域和每个选项所在行（顺序与 ALL 一致）
pub fn render_picker_list<T: PickerItem>(
    frame: &mut Frame,
    button: Rect,
    selected: T,
    picker: &Picker<T>,
) -> (Rect, Vec<Rect>) {
    let PickerState::Open { highlighted } = picker.state() else {
        return (Rect::default(), Vec::new());
    };

    let swatch_width = if T::ALL.iter().any(|c| c.swatch().is_some()) {
        3
    } else {
        0
    };
    let width = (label_width::<T>() + swatch_width + 4) as u16;
    let wanted = Rect::new(
        button.x,
        button.y.saturating_add(1),
        width.max(button.width),
        T::ALL.len() as u16 + 2,
    );
    let area = wanted.intersection(frame.area());
    if area.is_empty() {
        return (Rect::default(), Vec::new());
    }

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut options = Vec::new();
    for (i, choice) in T::ALL.iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);

        let marker = if *choice == selected { "• " } else { "  " };
        let mut spans = vec![Span::raw(marker)];
        spans.extend(swatch_spans(*choice));
        spans.push(Span::styled(choice.label(), choice.item_style()));

        let row_style = if i == highlighted {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::White)
        };
        frame.render_widget(Paragraph::new(Line::from(spans)).style(row_style), row);
        options.push(row);
    }

    (area, options)
}

/// [组件] 带边框的按钮
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, is_focused: bool) {
    let style = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}
