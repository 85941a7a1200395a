//! 文档节点树
//! 元素通过 NodeId 句柄引用，控制器在绑定时解析一次，不做全局查找

use std::collections::HashMap;

/// 节点 ID（arena 索引）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// 节点类型
#[derive(Debug, Clone, PartialEq)]
pub enum NodeType {
    Element,
    Text,
    Comment,
}

/// 文档节点
#[derive(Debug, Clone)]
pub struct Node {
    pub node_type: NodeType,
    pub tag_name: String,
    pub attributes: HashMap<String, String>,
    pub text_content: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    fn new_element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            tag_name: tag_name.to_string(),
            attributes: HashMap::new(),
            text_content: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    fn new_text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            tag_name: String::new(),
            attributes: HashMap::new(),
            text_content: content.to_string(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    pub fn has_class(&self, class_name: &str) -> bool {
        if let Some(classes) = self.attributes.get("class") {
            classes.split_whitespace().any(|c| c == class_name)
        } else {
            false
        }
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }
}

/// 文档树 - 以 body 为根的节点 arena
pub struct Document {
    nodes: Vec<Node>,
    body: NodeId,
}

impl Document {
    /// 创建空文档，根节点为 body
    pub fn new() -> Self {
        let body = Node::new_element("body");
        Self {
            nodes: vec![body],
            body: NodeId(0),
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// 创建元素并挂到父节点下
    pub fn create_element(&mut self, tag_name: &str, parent: NodeId) -> NodeId {
        self.push_node(Node::new_element(tag_name), parent)
    }

    /// 创建文本节点并挂到父节点下
    pub fn create_text(&mut self, content: &str, parent: NodeId) -> NodeId {
        self.push_node(Node::new_text(content), parent)
    }

    fn push_node(&mut self, mut node: Node, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    // ---- 属性 ----

    pub fn get_attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).get_attr(name)
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        self.node_mut(id)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    // ---- class 列表 ----

    pub fn has_class(&self, id: NodeId, class_name: &str) -> bool {
        self.node(id).has_class(class_name)
    }

    pub fn add_class(&mut self, id: NodeId, class_name: &str) {
        if self.has_class(id, class_name) {
            return;
        }
        let node = self.node_mut(id);
        let classes = node.attributes.entry("class".to_string()).or_default();
        if classes.is_empty() {
            classes.push_str(class_name);
        } else {
            classes.push(' ');
            classes.push_str(class_name);
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class_name: &str) {
        let node = self.node_mut(id);
        if let Some(classes) = node.attributes.get("class") {
            let remaining: Vec<&str> = classes
                .split_whitespace()
                .filter(|c| *c != class_name)
                .collect();
            let joined = remaining.join(" ");
            node.attributes.insert("class".to_string(), joined);
        }
    }

    // ---- 内联样式 ----
    // style 属性按 "name: value; name: value" 存取，与源页面的 style.xxx 赋值对应

    pub fn style_property(&self, id: NodeId, name: &str) -> Option<String> {
        let style = self.get_attr(id, "style")?;
        for decl in style.split(';') {
            let mut parts = decl.splitn(2, ':');
            let key = parts.next()?.trim();
            if key == name {
                return parts.next().map(|v| v.trim().to_string());
            }
        }
        None
    }

    pub fn set_style_property(&mut self, id: NodeId, name: &str, value: &str) {
        let mut decls = self.style_declarations(id);
        decls.retain(|(k, _)| k != name);
        decls.push((name.to_string(), value.to_string()));
        self.write_style(id, decls);
    }

    pub fn remove_style_property(&mut self, id: NodeId, name: &str) {
        let mut decls = self.style_declarations(id);
        decls.retain(|(k, _)| k != name);
        self.write_style(id, decls);
    }

    fn style_declarations(&self, id: NodeId) -> Vec<(String, String)> {
        let mut decls = Vec::new();
        if let Some(style) = self.get_attr(id, "style") {
            for decl in style.split(';') {
                let mut parts = decl.splitn(2, ':');
                if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
                    let key = key.trim();
                    if !key.is_empty() {
                        decls.push((key.to_string(), value.trim().to_string()));
                    }
                }
            }
        }
        decls
    }

    fn write_style(&mut self, id: NodeId, decls: Vec<(String, String)>) {
        if decls.is_empty() {
            self.node_mut(id).attributes.remove("style");
        } else {
            let text = decls
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect::<Vec<_>>()
                .join("; ");
            self.set_attr(id, "style", &text);
        }
    }

    // ---- 查找 ----

    /// 按 id 属性查找元素
    pub fn element_by_id(&self, element_id: &str) -> Option<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .find(|id| self.node(*id).is_element() && self.get_attr(*id, "id") == Some(element_id))
    }

    /// 按 class 查找全部元素，文档序
    pub fn elements_by_class(&self, class_name: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.collect_by(self.body, &mut found, &|doc, id| doc.has_class(id, class_name));
        found
    }

    /// 在子树内按标签名查找全部元素，文档序
    pub fn descendants_by_tag(&self, root: NodeId, tag_name: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        for child in &self.node(root).children {
            self.collect_by(*child, &mut found, &|doc, id| {
                doc.node(id).tag_name == tag_name
            });
        }
        found
    }

    fn collect_by(&self, id: NodeId, out: &mut Vec<NodeId>, pred: &dyn Fn(&Document, NodeId) -> bool) {
        if self.node(id).is_element() {
            if pred(self, id) {
                out.push(id);
            }
            for child in &self.node(id).children {
                self.collect_by(*child, out, pred);
            }
        }
    }

    /// ancestor 是否包含 node（含自身），等价于宿主树的 contains()
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).parent;
        }
        false
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
