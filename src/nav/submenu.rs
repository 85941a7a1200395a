//! 移动端子菜单 - 手风琴式互斥展开
//! 不变量：组内最多一项 is_open

use crate::dom::{Document, NodeId};

use super::config::NavConfig;

/// 子菜单条目：触发按钮 + 它的父容器（展开目标）
pub struct Submenu {
    pub trigger: NodeId,
    pub container: NodeId,
    pub is_open: bool,
}

/// 子菜单组
pub struct SubmenuGroup {
    entries: Vec<Submenu>,
}

impl SubmenuGroup {
    /// 收集文档里全部子菜单触发按钮，文档序
    pub fn bind(doc: &Document, config: &NavConfig) -> Self {
        let entries = doc
            .elements_by_class(&config.submenu_trigger_class)
            .into_iter()
            .filter_map(|trigger| {
                let container = doc.node(trigger).parent?;
                Some(Submenu {
                    trigger,
                    container,
                    is_open: false,
                })
            })
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&Submenu> {
        self.entries.get(index)
    }

    /// 当前展开项的下标
    pub fn open_index(&self) -> Option<usize> {
        self.entries.iter().position(|e| e.is_open)
    }

    /// target 命中的触发按钮下标（按钮本身或其内部）
    pub fn trigger_index(&self, doc: &Document, target: NodeId) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| doc.contains(e.trigger, target))
    }

    /// 手风琴切换：先关掉其他项，再翻转被点的项
    /// 净效果是"最多展开一项，或全部收起"
    pub fn toggle(&mut self, index: usize, doc: &mut Document, config: &NavConfig) {
        if index >= self.entries.len() {
            return;
        }

        let was_open = self.entries[index].is_open;

        for (i, entry) in self.entries.iter_mut().enumerate() {
            if i != index && entry.is_open {
                entry.is_open = false;
                doc.remove_class(entry.container, &config.active_class);
            }
        }

        let entry = &mut self.entries[index];
        entry.is_open = !was_open;
        if entry.is_open {
            doc.add_class(entry.container, &config.active_class);
        } else {
            doc.remove_class(entry.container, &config.active_class);
        }
    }
}
