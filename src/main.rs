mod config;
mod editor;
mod logging;
mod models;
mod ui;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

use crate::config::load_config;
use crate::ui::{App, render};

/// 带字体和颜色选择的终端文本编辑器
#[derive(Parser, Debug)]
#[command(name = "tinta", version, long_about = None)]
struct Args {
    /// 配置文件路径（默认 ~/.config/tinta/config.toml）
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// 日志文件路径（默认 ~/.local/share/tinta/tinta.log）
    #[arg(long, value_name = "LOG_FILE")]
    log_file: Option<PathBuf>,

    /// 日志级别，覆盖配置文件
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

/// 获取配置目录路径 (~/.config/tinta/)
fn get_config_dir() -> io::Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户配置目录"))?
        .join("tinta");

    Ok(config_dir)
}

/// 获取数据目录路径 (~/.local/share/tinta/)
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户数据目录"))?
        .join("tinta");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 加载配置
    let config_path = match args.config {
        Some(path) => path,
        None => get_config_dir()?.join("config.toml"),
    };
    let config = load_config(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    // 日志
    let log_path = match args.log_file {
        Some(path) => path,
        None => get_data_dir()?.join("tinta.log"),
    };
    let log_level = args.log_level.as_deref().unwrap_or(&config.log_level);
    logging::init_global(&log_path, log_level)
        .with_context(|| format!("failed to initialize logging at {}", log_path.display()))?;

    let settings = config
        .view_settings()
        .with_context(|| format!("invalid config in {}", config_path.display()))?;

    // 创建应用状态
    let mut app = App::new().with_settings(settings);
    info!(config = %config_path.display(), "starting");

    // 设置终端
    let mut terminal = setup_terminal().context("failed to set up terminal")?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端，即使主循环出错
    let restored = restore_terminal(terminal.backend_mut());

    info!("exiting");
    result.context("event loop failed")?;
    restored.context("failed to restore terminal")
}

/// 进入 raw 模式和备用屏幕；中途失败时撤销已完成的步骤
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let entered = execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));
    if entered.is_err() {
        let _ = restore_terminal(&mut stdout);
    }
    entered
}

/// 恢复终端：每一步都会执行，返回第一个错误
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        let event = crossterm::event::read()?;
        if ui::handle_event(app, event)? {
            break;
        }
    }
    Ok(())
}
