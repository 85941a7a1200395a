//! 汉堡菜单 - 移动端滑出面板的开关状态机
//! 状态只有 is_open 一个布尔；class、滚动锁、图标都是它的投影

use crate::dom::{Document, NodeId};
use crate::layout::LayoutEngine;

use super::config::NavConfig;

/// 汉堡菜单绑定
/// 触发按钮或面板缺失时不创建（整个特性静默失效）
pub struct HamburgerMenu {
    trigger: NodeId,
    panel: NodeId,
    header: Option<NodeId>,
    icon: Option<NodeId>,
    links: Vec<NodeId>,
    is_open: bool,
}

impl HamburgerMenu {
    /// 解析文档里的协作元素，绑定一次
    pub fn bind(doc: &Document, config: &NavConfig) -> Option<Self> {
        let trigger = doc.element_by_id(&config.trigger_id)?;
        let panel = doc.element_by_id(&config.panel_id)?;

        let header = doc.elements_by_class(&config.header_class).into_iter().next();
        let icon = doc.descendants_by_tag(trigger, "img").into_iter().next();
        let links = doc.descendants_by_tag(panel, "a");

        Some(Self {
            trigger,
            panel,
            header,
            icon,
            links,
            is_open: false,
        })
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn trigger(&self) -> NodeId {
        self.trigger
    }

    pub fn panel(&self) -> NodeId {
        self.panel
    }

    /// target 是否落在触发按钮或面板内
    pub fn owns(&self, doc: &Document, target: NodeId) -> bool {
        doc.contains(self.trigger, target) || doc.contains(self.panel, target)
    }

    /// target 若落在面板内的某个链接上，返回其 href
    pub fn link_href(&self, doc: &Document, target: NodeId) -> Option<String> {
        self.links
            .iter()
            .find(|link| doc.contains(**link, target))
            .and_then(|link| doc.get_attr(*link, "href"))
            .map(|href| href.to_string())
    }

    /// 按页头当前渲染高度重算面板顶部偏移
    /// 页头缺失或测量失败时面板偏移保持不变
    pub fn update_position(&self, doc: &mut Document, layout: &LayoutEngine) {
        let Some(header) = self.header else {
            return;
        };
        if let Ok(height) = layout.measure_height(doc, header) {
            doc.set_style_property(self.panel, "padding-top", &format!("{}px", height));
        }
    }

    /// 触发按钮激活：重算位置后翻转开关
    pub fn toggle(&mut self, doc: &mut Document, config: &NavConfig, layout: &LayoutEngine) {
        self.update_position(doc, layout);
        self.is_open = !self.is_open;
        self.project(doc, config);
    }

    /// 强制关闭（外部点击 / Escape / 链接点击），返回状态是否变化
    pub fn close(&mut self, doc: &mut Document, config: &NavConfig) -> bool {
        if !self.is_open {
            return false;
        }
        self.is_open = false;
        self.project(doc, config);
        true
    }

    /// 把 is_open 投影到文档：面板 class、body 滚动锁、图标 src/alt
    fn project(&self, doc: &mut Document, config: &NavConfig) {
        let body = doc.body();
        if self.is_open {
            doc.add_class(self.panel, &config.active_class);
            doc.set_style_property(body, "overflow", "hidden");
        } else {
            doc.remove_class(self.panel, &config.active_class);
            doc.remove_style_property(body, "overflow");
        }

        if let Some(icon) = self.icon {
            let variant = if self.is_open {
                &config.icons.open
            } else {
                &config.icons.closed
            };
            doc.set_attr(icon, "src", &variant.src);
            doc.set_attr(icon, "alt", &variant.alt);
        }
    }
}
