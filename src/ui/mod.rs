//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs, picker.rs): App 结构体、下拉框状态
//! - View (view/): 将 State 映射为 UI，并记录控件区域
//! - Intent (actions.rs): 用户交互转化为明确的语义化 Action

pub mod actions;
pub mod input;
pub mod logic;
pub mod picker;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::handle_event;
pub use state::{App, ViewSettings};
pub use view::render;
