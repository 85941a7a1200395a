//! Mini Nav - 页头导航交互引擎
//! 汉堡菜单开关、移动端手风琴子菜单、桌面悬停下拉（延迟关闭）
//! 宿主负责渲染与命中测试，这里只维护交互状态并把它投影回文档树

// 文档树与标记解析
pub mod dom;

// 事件系统
pub mod event;

// 布局测量
pub mod layout;

// 导航状态机与控制器
pub mod nav;

// 定时器队列
pub mod timer;

pub use dom::{Document, MarkupParser, NodeId};
pub use event::Event;
pub use layout::LayoutEngine;
pub use nav::{NavConfig, NavController, NavEffect};
pub use timer::{TimerId, TimerQueue};

// 单元测试
#[cfg(test)]
mod tests;
