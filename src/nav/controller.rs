//! 导航控制器 - 把三台状态机绑定到文档并路由事件
//! 单线程 run-to-completion：一次 handle_event 处理完才轮到下一个事件

use crate::dom::{Document, MarkupParser, NodeId};
use crate::event::{Event, KeyEvent, TapEvent};
use crate::layout::LayoutEngine;
use crate::timer::TimerQueue;

use super::config::NavConfig;
use super::dropdown::{DropdownPhase, DropdownSet};
use super::menu::HamburgerMenu;
use super::submenu::SubmenuGroup;

/// 事件处理的对外结果（宿主据此导航、埋点等）
#[derive(Debug, Clone, PartialEq)]
pub enum NavEffect {
    MenuOpened,
    MenuClosed,
    SubmenuToggled { index: usize, open: bool },
    /// 面板内链接被点击，宿主继续执行默认导航
    Navigate { href: String },
    DropdownShown { item: NodeId },
    DropdownHidden { item: NodeId },
}

/// 导航控制器
pub struct NavController {
    config: NavConfig,
    doc: Document,
    layout: LayoutEngine,
    timers: TimerQueue,
    /// 触发按钮或面板缺失时为 None，汉堡特性整体静默失效
    menu: Option<HamburgerMenu>,
    submenus: SubmenuGroup,
    dropdowns: DropdownSet,
}

impl NavController {
    /// 绑定到现成的文档树，协作元素只在此时解析一次
    pub fn attach(doc: Document, config: NavConfig, viewport_width: f32) -> Self {
        let layout = LayoutEngine::new(viewport_width);
        let menu = HamburgerMenu::bind(&doc, &config);
        let submenus = SubmenuGroup::bind(&doc, &config);
        let dropdowns = DropdownSet::bind(&doc, &config);

        let mut controller = Self {
            config,
            doc,
            layout,
            timers: TimerQueue::new(),
            menu,
            submenus,
            dropdowns,
        };

        // 绑定后立即定位一次面板
        if let Some(menu) = &controller.menu {
            menu.update_position(&mut controller.doc, &controller.layout);
        }

        controller
    }

    /// 从标记文本解析并绑定
    pub fn from_markup(markup: &str, config: NavConfig, viewport_width: f32) -> Result<Self, String> {
        let doc = MarkupParser::new(markup).parse_document()?;
        Ok(Self::attach(doc, config, viewport_width))
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// 宿主更新页面内容时使用；元素句柄在 attach 时已解析，结构性改动需重新 attach
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// 汉堡特性是否生效（按钮和面板都找到了）
    pub fn hamburger_bound(&self) -> bool {
        self.menu.is_some()
    }

    pub fn menu_is_open(&self) -> bool {
        self.menu.as_ref().map(|m| m.is_open()).unwrap_or(false)
    }

    /// 当前展开的子菜单下标
    pub fn open_submenu(&self) -> Option<usize> {
        self.submenus.open_index()
    }

    pub fn submenu_count(&self) -> usize {
        self.submenus.len()
    }

    pub fn dropdown_count(&self) -> usize {
        self.dropdowns.len()
    }

    pub fn dropdown_phase(&self, index: usize) -> Option<DropdownPhase> {
        self.dropdowns.item(index).map(|d| d.phase())
    }

    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    /// 处理一个宿主事件
    pub fn handle_event(&mut self, event: &Event) -> Vec<NavEffect> {
        match event {
            Event::Tap(tap) => self.handle_tap(tap),
            Event::KeyDown(key) => self.handle_keydown(key),
            Event::MouseEnter(pointer) => {
                let mut effects = Vec::new();
                if let Some((item, shown)) =
                    self.dropdowns
                        .handle_enter(&mut self.doc, &mut self.timers, pointer.target)
                {
                    if shown {
                        effects.push(NavEffect::DropdownShown { item });
                    }
                }
                effects
            }
            Event::MouseLeave(pointer) => {
                self.dropdowns.handle_leave(
                    &self.doc,
                    &mut self.timers,
                    pointer.target,
                    self.config.hover_close_delay_ms,
                );
                Vec::new()
            }
            Event::Resize(resize) => {
                // 只重算面板偏移，不改变开关状态
                self.layout.set_viewport_width(resize.width);
                if let Some(menu) = &self.menu {
                    menu.update_position(&mut self.doc, &self.layout);
                }
                Vec::new()
            }
        }
    }

    /// 推进时钟，触发到期的下拉关闭
    pub fn advance_time(&mut self, dt_ms: u64) -> Vec<NavEffect> {
        let mut effects = Vec::new();
        for fired in self.timers.advance(dt_ms) {
            if let Some(item) = self.dropdowns.handle_timer(&mut self.doc, fired) {
                effects.push(NavEffect::DropdownHidden { item });
            }
        }
        effects
    }

    fn handle_tap(&mut self, tap: &TapEvent) -> Vec<NavEffect> {
        let mut effects = Vec::new();
        let target = tap.target;

        // 子菜单触发按钮最先消费（等效源页面的 stopPropagation，
        // 点击不再落入下面的"外部点击关闭"判断）
        if let Some(index) = self.submenus.trigger_index(&self.doc, target) {
            self.submenus.toggle(index, &mut self.doc, &self.config);
            let open = self
                .submenus
                .entry(index)
                .map(|e| e.is_open)
                .unwrap_or(false);
            effects.push(NavEffect::SubmenuToggled { index, open });
            return effects;
        }

        let Some(menu) = self.menu.as_mut() else {
            return effects;
        };

        // 触发按钮：翻转
        if self.doc.contains(menu.trigger(), target) {
            menu.toggle(&mut self.doc, &self.config, &self.layout);
            effects.push(if menu.is_open() {
                NavEffect::MenuOpened
            } else {
                NavEffect::MenuClosed
            });
            return effects;
        }

        if !menu.is_open() {
            return effects;
        }

        // 面板内链接：关闭菜单，上报导航目标
        if let Some(href) = menu.link_href(&self.doc, target) {
            menu.close(&mut self.doc, &self.config);
            effects.push(NavEffect::MenuClosed);
            effects.push(NavEffect::Navigate { href });
            return effects;
        }

        // 面板和按钮之外的点击：关闭
        if !menu.owns(&self.doc, target) {
            menu.close(&mut self.doc, &self.config);
            effects.push(NavEffect::MenuClosed);
        }

        effects
    }

    fn handle_keydown(&mut self, key: &KeyEvent) -> Vec<NavEffect> {
        let mut effects = Vec::new();
        if key.key == "Escape" {
            if let Some(menu) = self.menu.as_mut() {
                if menu.close(&mut self.doc, &self.config) {
                    effects.push(NavEffect::MenuClosed);
                }
            }
        }
        effects
    }
}
