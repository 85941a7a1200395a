//! 导航配置 - 选择器、悬停延迟与图标资源

use once_cell::sync::Lazy;
use serde::Deserialize;

/// 桌面下拉关闭延迟默认值（毫秒）
/// 容忍指针从触发项斜向移入下拉面板，避免闪烁
pub const DEFAULT_HOVER_CLOSE_DELAY_MS: u64 = 200;

/// 图标的一种状态：src 与 alt
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IconVariant {
    pub src: String,
    pub alt: String,
}

/// 菜单开/关两种状态的图标
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IconAssets {
    pub closed: IconVariant,
    pub open: IconVariant,
}

/// 默认图标：两种状态共用 menu.svg，只切换 alt 文本
/// 宿主若有关闭图标，覆盖 icons.open.src 即可
static DEFAULT_ICONS: Lazy<IconAssets> = Lazy::new(|| IconAssets {
    closed: IconVariant {
        src: "./assets/icons/menu.svg".to_string(),
        alt: "Menu".to_string(),
    },
    open: IconVariant {
        src: "./assets/icons/menu.svg".to_string(),
        alt: "Close menu".to_string(),
    },
});

impl Default for IconAssets {
    fn default() -> Self {
        DEFAULT_ICONS.clone()
    }
}

/// 导航配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// 汉堡按钮的 id
    pub trigger_id: String,
    /// 滑出菜单面板的 id
    pub panel_id: String,
    /// 页头的 class
    pub header_class: String,
    /// 移动端子菜单触发按钮的 class
    pub submenu_trigger_class: String,
    /// 桌面导航项的 class
    pub desktop_item_class: String,
    /// 桌面下拉面板的 class
    pub dropdown_panel_class: String,
    /// 表示"展开"的 class
    pub active_class: String,
    /// 桌面下拉关闭延迟（毫秒）
    pub hover_close_delay_ms: u64,
    pub icons: IconAssets,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            trigger_id: "hamburgerBtn".to_string(),
            panel_id: "hamburgerMenu".to_string(),
            header_class: "header".to_string(),
            submenu_trigger_class: "hamburger-dropdown-btn".to_string(),
            desktop_item_class: "desktop__list-element".to_string(),
            dropdown_panel_class: "dropdown-menu".to_string(),
            active_class: "active".to_string(),
            hover_close_delay_ms: DEFAULT_HOVER_CLOSE_DELAY_MS,
            icons: IconAssets::default(),
        }
    }
}

impl NavConfig {
    /// 从 JSON 加载（宿主配置文件）
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Bad nav config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_icons_share_src() {
        let config = NavConfig::default();
        assert_eq!(config.icons.closed.src, config.icons.open.src);
        assert_eq!(config.icons.closed.alt, "Menu");
        assert_eq!(config.icons.open.alt, "Close menu");
    }

    #[test]
    fn test_from_json_partial() {
        let config = NavConfig::from_json(
            r#"{ "hover_close_delay_ms": 300, "icons": { "closed": { "src": "m.svg", "alt": "Menu" }, "open": { "src": "x.svg", "alt": "Close menu" } } }"#,
        )
        .unwrap();

        assert_eq!(config.hover_close_delay_ms, 300);
        assert_eq!(config.icons.open.src, "x.svg");
        // 未给出的字段用默认值
        assert_eq!(config.trigger_id, "hamburgerBtn");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(NavConfig::from_json("not json").is_err());
    }
}
