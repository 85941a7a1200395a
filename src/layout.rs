//! 布局测量 (Taffy Flexbox)
//! 从内联样式测量元素的渲染高度，菜单面板的顶部偏移由此得出

use taffy::prelude::*;

use crate::dom::{Document, NodeId as DomNodeId};

/// 布局引擎 - 按当前视口宽度测量节点子树
pub struct LayoutEngine {
    viewport_width: f32,
}

impl LayoutEngine {
    pub fn new(viewport_width: f32) -> Self {
        Self { viewport_width }
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// 测量元素的渲染高度
    pub fn measure_height(&self, doc: &Document, id: DomNodeId) -> Result<f32, String> {
        let mut taffy: TaffyTree<()> = TaffyTree::new();
        let root = self.build_node(&mut taffy, doc, id)?;

        taffy
            .compute_layout(
                root,
                Size {
                    width: AvailableSpace::Definite(self.viewport_width),
                    height: AvailableSpace::MaxContent,
                },
            )
            .map_err(|e| e.to_string())?;

        let layout = taffy.layout(root).map_err(|e| e.to_string())?;
        Ok(layout.size.height)
    }

    fn build_node(
        &self,
        taffy: &mut TaffyTree<()>,
        doc: &Document,
        id: DomNodeId,
    ) -> Result<taffy::NodeId, String> {
        let style = convert_style(doc, id);
        let node = taffy.new_leaf(style).map_err(|e| e.to_string())?;

        for child in &doc.node(id).children {
            if !doc.node(*child).is_element() {
                continue;
            }
            let child_node = self.build_node(taffy, doc, *child)?;
            taffy.add_child(node, child_node).map_err(|e| e.to_string())?;
        }

        Ok(node)
    }
}

/// 内联样式转 Taffy 样式
/// 只认导航测量用得到的属性：尺寸、内边距、flex 方向
fn convert_style(doc: &Document, id: DomNodeId) -> Style {
    let prop = |name: &str| doc.style_property(id, name);
    let px = |name: &str| prop(name).as_deref().and_then(parse_px);

    let padding_all = px("padding");
    let pad = |name: &str| px(name).or(padding_all).unwrap_or(0.0);

    Style {
        display: Display::Flex,

        size: Size {
            width: px("width").map(length).unwrap_or(auto()),
            height: px("height").map(length).unwrap_or(auto()),
        },

        min_size: Size {
            width: px("min-width").map(length).unwrap_or(auto()),
            height: px("min-height").map(length).unwrap_or(auto()),
        },

        padding: Rect {
            top: length(pad("padding-top")),
            right: length(pad("padding-right")),
            bottom: length(pad("padding-bottom")),
            left: length(pad("padding-left")),
        },

        flex_direction: match prop("flex-direction").as_deref() {
            Some("row") => FlexDirection::Row,
            Some("row-reverse") => FlexDirection::RowReverse,
            Some("column-reverse") => FlexDirection::ColumnReverse,
            Some("column") => FlexDirection::Column,
            _ => FlexDirection::Row,
        },

        flex_grow: prop("flex-grow")
            .as_deref()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.0),

        ..Default::default()
    }
}

/// "80px" / "80" -> 80.0
fn parse_px(value: &str) -> Option<f32> {
    value.trim().trim_end_matches("px").trim().parse().ok()
}
