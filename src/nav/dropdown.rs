//! 桌面下拉 - 悬停显示、延迟隐藏
//! 每个导航项一台独立状态机 {Hidden, Visible, PendingHide}

use crate::dom::{Document, NodeId};
use crate::timer::{TimerId, TimerQueue};

use super::config::NavConfig;

/// 下拉状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownPhase {
    Hidden,
    Visible,
    /// 指针已离开，关闭倒计时进行中
    PendingHide,
}

/// 单个桌面导航项的下拉状态机
pub struct HoverDropdown {
    item: NodeId,
    /// 下拉面板缺失时状态机照常运转，只是没有可见效果
    panel: Option<NodeId>,
    phase: DropdownPhase,
    pending_close: Option<TimerId>,
}

impl HoverDropdown {
    pub fn item(&self) -> NodeId {
        self.item
    }

    pub fn phase(&self) -> DropdownPhase {
        self.phase
    }

    /// 指针进入：撤销关闭倒计时，立即显示
    /// 返回面板是否由隐藏变为可见（PendingHide 期间本来就可见）
    fn on_enter(&mut self, doc: &mut Document, timers: &mut TimerQueue) -> bool {
        if let Some(timer) = self.pending_close.take() {
            timers.cancel(timer);
        }
        let was_hidden = self.phase == DropdownPhase::Hidden;
        self.phase = DropdownPhase::Visible;
        self.project(doc);
        was_hidden
    }

    /// 指针离开：启动关闭倒计时，后登记的覆盖先前的
    fn on_leave(&mut self, timers: &mut TimerQueue, delay_ms: u64) {
        if let Some(timer) = self.pending_close.take() {
            timers.cancel(timer);
        }
        self.pending_close = Some(timers.schedule(delay_ms));
        self.phase = DropdownPhase::PendingHide;
    }

    /// 倒计时到期：隐藏。返回是否由本机处理了该定时器
    fn on_timer(&mut self, doc: &mut Document, fired: TimerId) -> bool {
        if self.pending_close != Some(fired) {
            return false;
        }
        self.pending_close = None;
        self.phase = DropdownPhase::Hidden;
        self.project(doc);
        true
    }

    fn project(&self, doc: &mut Document) {
        let Some(panel) = self.panel else {
            return;
        };
        let display = match self.phase {
            // PendingHide 期间面板仍然可见
            DropdownPhase::Visible | DropdownPhase::PendingHide => "block",
            DropdownPhase::Hidden => "none",
        };
        doc.set_style_property(panel, "display", display);
    }
}

/// 全部桌面导航项的下拉集合
pub struct DropdownSet {
    items: Vec<HoverDropdown>,
}

impl DropdownSet {
    /// 收集桌面导航项，各自找第一个下拉面板后代
    pub fn bind(doc: &Document, config: &NavConfig) -> Self {
        let items = doc
            .elements_by_class(&config.desktop_item_class)
            .into_iter()
            .map(|item| {
                let panel = doc
                    .elements_by_class(&config.dropdown_panel_class)
                    .into_iter()
                    .find(|id| *id != item && doc.contains(item, *id));
                HoverDropdown {
                    item,
                    panel,
                    phase: DropdownPhase::Hidden,
                    pending_close: None,
                }
            })
            .collect();

        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&HoverDropdown> {
        self.items.get(index)
    }

    /// 指针进入某个导航项（target 在项内即命中）
    /// 返回命中的导航项与面板是否刚变为可见
    pub fn handle_enter(
        &mut self,
        doc: &mut Document,
        timers: &mut TimerQueue,
        target: NodeId,
    ) -> Option<(NodeId, bool)> {
        let index = self.index_of(doc, target)?;
        let shown = self.items[index].on_enter(doc, timers);
        Some((self.items[index].item, shown))
    }

    /// 指针离开某个导航项
    pub fn handle_leave(
        &mut self,
        doc: &Document,
        timers: &mut TimerQueue,
        target: NodeId,
        delay_ms: u64,
    ) -> Option<NodeId> {
        let index = self.index_of(doc, target)?;
        self.items[index].on_leave(timers, delay_ms);
        Some(self.items[index].item)
    }

    /// 定时器到期分发，返回因此隐藏的导航项
    pub fn handle_timer(&mut self, doc: &mut Document, fired: TimerId) -> Option<NodeId> {
        for item in &mut self.items {
            if item.on_timer(doc, fired) {
                return Some(item.item);
            }
        }
        None
    }

    fn index_of(&self, doc: &Document, target: NodeId) -> Option<usize> {
        self.items
            .iter()
            .position(|d| doc.contains(d.item, target))
    }
}
