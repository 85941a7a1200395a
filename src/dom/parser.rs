//! 标记解析器 - 把宿主页面的标记解析成 Document

use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::{Document, NodeId};

/// 无子节点、无结束标签的元素
static VOID_TAGS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["img", "br", "hr", "input", "meta", "link"].into_iter().collect());

/// 标记解析器
pub struct MarkupParser {
    input: Vec<char>,
    pos: usize,
}

impl MarkupParser {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    /// 解析整段标记，生成以 body 为根的文档
    pub fn parse_document(&mut self) -> Result<Document, String> {
        let mut doc = Document::new();
        let body = doc.body();
        self.parse_children(&mut doc, body)?;
        if self.pos < self.input.len() {
            return Err(format!("Unexpected closing tag at position {}", self.pos));
        }
        Ok(doc)
    }

    fn parse_children(&mut self, doc: &mut Document, parent: NodeId) -> Result<(), String> {
        while self.pos < self.input.len() {
            self.skip_whitespace();
            if self.pos >= self.input.len() {
                break;
            }

            if self.starts_with("<!--") {
                self.parse_comment();
            } else if self.current_char() == '<' {
                if self.starts_with("</") {
                    break; // 结束标签，返回上层
                }
                self.parse_element(doc, parent)?;
            } else if let Some(text) = self.parse_text() {
                if !text.trim().is_empty() {
                    doc.create_text(text.trim(), parent);
                }
            }
        }

        Ok(())
    }

    fn parse_element(&mut self, doc: &mut Document, parent: NodeId) -> Result<(), String> {
        self.expect('<')?;

        let tag_name = self.parse_tag_name();
        if tag_name.is_empty() {
            return Err("Empty tag name".to_string());
        }

        let node = doc.create_element(&tag_name, parent);

        // 解析属性
        loop {
            self.skip_whitespace();
            if self.pos >= self.input.len() {
                return Err(format!("Unclosed tag: {}", tag_name));
            }
            if self.current_char() == '>' || self.starts_with("/>") {
                break;
            }

            let (name, value) = self.parse_attribute()?;
            doc.node_mut(node).attributes.insert(name, value);
        }

        // 自闭合标签
        if self.starts_with("/>") {
            self.advance();
            self.advance();
            return Ok(());
        }

        self.expect('>')?;

        // void 元素没有结束标签
        if VOID_TAGS.contains(tag_name.as_str()) {
            return Ok(());
        }

        // 解析子节点
        self.parse_children(doc, node)?;

        // 解析结束标签
        self.skip_whitespace();
        if self.starts_with("</") {
            self.advance();
            self.advance();
            let end_tag = self.parse_tag_name();
            if end_tag != tag_name {
                return Err(format!("Mismatched tags: {} vs {}", tag_name, end_tag));
            }
            self.skip_whitespace();
            self.expect('>')?;
        } else {
            return Err(format!("Missing closing tag: {}", tag_name));
        }

        Ok(())
    }

    fn parse_tag_name(&mut self) -> String {
        let mut name = String::new();
        while self.pos < self.input.len() {
            let c = self.current_char();
            if c.is_alphanumeric() || c == '-' || c == '_' || c == ':' {
                name.push(c);
                self.advance();
            } else {
                break;
            }
        }
        name
    }

    fn parse_attribute(&mut self) -> Result<(String, String), String> {
        let name = self.parse_attribute_name();
        if name.is_empty() {
            return Err(format!("Bad attribute at position {}", self.pos));
        }

        self.skip_whitespace();

        if self.current_char() != '=' {
            return Ok((name, String::new()));
        }

        self.advance(); // skip '='
        self.skip_whitespace();

        let value = self.parse_attribute_value()?;

        Ok((name, value))
    }

    fn parse_attribute_name(&mut self) -> String {
        let mut name = String::new();
        while self.pos < self.input.len() {
            let c = self.current_char();
            if c.is_alphanumeric() || c == '-' || c == '_' || c == ':' || c == '.' {
                name.push(c);
                self.advance();
            } else {
                break;
            }
        }
        name
    }

    fn parse_attribute_value(&mut self) -> Result<String, String> {
        let quote = self.current_char();
        if quote != '"' && quote != '\'' {
            // 无引号值
            let mut value = String::new();
            while self.pos < self.input.len() {
                let c = self.current_char();
                if c.is_whitespace() || c == '>' || c == '/' {
                    break;
                }
                value.push(c);
                self.advance();
            }
            return Ok(value);
        }

        self.advance(); // skip opening quote

        let mut value = String::new();
        while self.pos < self.input.len() && self.current_char() != quote {
            value.push(self.current_char());
            self.advance();
        }

        if self.pos >= self.input.len() {
            return Err("Unterminated attribute value".to_string());
        }
        self.advance(); // skip closing quote

        Ok(value)
    }

    fn parse_text(&mut self) -> Option<String> {
        let mut text = String::new();
        while self.pos < self.input.len() && self.current_char() != '<' {
            text.push(self.current_char());
            self.advance();
        }

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn parse_comment(&mut self) {
        // Skip <!--
        for _ in 0..4 {
            self.advance();
        }

        while self.pos < self.input.len() && !self.starts_with("-->") {
            self.advance();
        }

        // Skip -->
        for _ in 0..3 {
            if self.pos < self.input.len() {
                self.advance();
            }
        }
    }

    fn current_char(&self) -> char {
        if self.pos < self.input.len() {
            self.input[self.pos]
        } else {
            '\0'
        }
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.input.len() && self.current_char().is_whitespace() {
            self.advance();
        }
    }

    fn starts_with(&self, s: &str) -> bool {
        let chars: Vec<char> = s.chars().collect();
        for (i, c) in chars.iter().enumerate() {
            if self.pos + i >= self.input.len() || self.input[self.pos + i] != *c {
                return false;
            }
        }
        true
    }

    fn expect(&mut self, c: char) -> Result<(), String> {
        if self.current_char() == c {
            self.advance();
            Ok(())
        } else {
            Err(format!("Expected '{}', got '{}'", c, self.current_char()))
        }
    }
}
