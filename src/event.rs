//! 事件系统 - 宿主分发给导航控制器的交互事件

use crate::dom::NodeId;

/// 事件类型
#[derive(Debug, Clone)]
pub enum Event {
    /// 点击/触摸激活，target 为命中的节点
    Tap(TapEvent),
    /// 键盘按下
    KeyDown(KeyEvent),
    /// 指针进入元素
    MouseEnter(PointerEvent),
    /// 指针离开元素
    MouseLeave(PointerEvent),
    /// 视口尺寸变化
    Resize(ResizeEvent),
}

/// 点击事件
#[derive(Debug, Clone)]
pub struct TapEvent {
    pub target: NodeId,
    pub x: f32,
    pub y: f32,
    pub timestamp: u64,
}

/// 键盘事件
#[derive(Debug, Clone)]
pub struct KeyEvent {
    pub key: String,
    pub code: String,
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub meta: bool,
}

impl KeyEvent {
    pub fn escape() -> Self {
        Self {
            key: "Escape".to_string(),
            code: "Escape".to_string(),
            alt: false,
            ctrl: false,
            shift: false,
            meta: false,
        }
    }
}

/// 指针进入/离开事件
#[derive(Debug, Clone)]
pub struct PointerEvent {
    pub target: NodeId,
    pub timestamp: u64,
}

/// 视口变化事件
#[derive(Debug, Clone)]
pub struct ResizeEvent {
    pub width: f32,
    pub height: f32,
}
