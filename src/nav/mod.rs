//! 导航交互 - 汉堡菜单、手风琴子菜单、桌面悬停下拉

mod config;
mod controller;
mod dropdown;
mod menu;
mod submenu;

pub use config::{IconAssets, IconVariant, NavConfig, DEFAULT_HOVER_CLOSE_DELAY_MS};
pub use controller::{NavController, NavEffect};
pub use dropdown::{DropdownPhase, DropdownSet, HoverDropdown};
pub use menu::HamburgerMenu;
pub use submenu::{Submenu, SubmenuGroup};
