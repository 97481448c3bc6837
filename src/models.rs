use ratatui::style::{Color, Modifier};

/// 固定选项集合
///
/// 成员顺序即列表显示顺序，运行时不可扩展
pub trait Choice: Copy + PartialEq + std::fmt::Debug + 'static {
    /// 全部成员（声明顺序）
    const ALL: &'static [Self];

    /// 显示名称
    fn label(self) -> &'static str;

    /// 在 ALL 中的位置
    fn index(self) -> usize;

    /// 按位置查找成员
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// 字体族句柄，只在渲染时解释
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Default,
    Serif,
    SansSerif,
    Monospace,
}

impl FontFamily {
    /// 终端只有一种字体，用文本修饰近似字体族
    pub fn modifier(self) -> Modifier {
        match self {
            FontFamily::Default => Modifier::empty(),
            FontFamily::Serif => Modifier::ITALIC,
            FontFamily::SansSerif => Modifier::BOLD,
            FontFamily::Monospace => Modifier::DIM,
        }
    }
}

/// 字体选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontOption {
    #[default]
    Default,
    Serif,
    SansSerif,
    Monospace,
}

impl FontOption {
    pub fn font_family(self) -> FontFamily {
        match self {
            FontOption::Default => FontFamily::Default,
            FontOption::Serif => FontFamily::Serif,
            FontOption::SansSerif => FontFamily::SansSerif,
            FontOption::Monospace => FontFamily::Monospace,
        }
    }
}

impl Choice for FontOption {
    const ALL: &'static [Self] = &[
        FontOption::Default,
        FontOption::Serif,
        FontOption::SansSerif,
        FontOption::Monospace,
    ];

    fn label(self) -> &'static str {
        match self {
            FontOption::Default => "Predeterminado",
            FontOption::Serif => "Serif",
            FontOption::SansSerif => "Sans Serif",
            FontOption::Monospace => "Monoespaciado",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// 颜色选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorOption {
    #[default]
    Black,
    Red,
    Blue,
    Green,
}

impl ColorOption {
    pub fn color(self) -> Color {
        match self {
            ColorOption::Black => Color::Black,
            ColorOption::Red => Color::Red,
            ColorOption::Blue => Color::Blue,
            ColorOption::Green => Color::Green,
        }
    }
}

impl Choice for ColorOption {
    const ALL: &'static [Self] = &[
        ColorOption::Black,
        ColorOption::Red,
        ColorOption::Blue,
        ColorOption::Green,
    ];

    fn label(self) -> &'static str {
        match self {
            ColorOption::Black => "Negro",
            ColorOption::Red => "Rojo",
            ColorOption::Blue => "Azul",
            ColorOption::Green => "Verde",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}
