//! 文档树模块 - 宿主提供的节点树与标记解析

mod node;
mod parser;

pub use node::{Document, Node, NodeId, NodeType};
pub use parser::MarkupParser;
