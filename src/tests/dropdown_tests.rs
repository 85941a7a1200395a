//! 桌面下拉测试
//! 覆盖进入即显、200ms 延迟隐藏、倒计时撤销（无闪烁）、各项独立

use crate::event::{Event, PointerEvent, TapEvent};
use crate::nav::{DropdownPhase, NavConfig, NavController, NavEffect};
use crate::NodeId;

const PAGE: &str = r#"
<header class="header" style="height: 80px">
    <button id="hamburgerBtn"><img src="./assets/icons/menu.svg" alt="Menu"></button>
    <ul class="desktop">
        <li class="desktop__list-element" id="navProducts">Products
            <div class="dropdown-menu" id="productsMenu"><a href="/products/a">A</a></div>
        </li>
        <li class="desktop__list-element" id="navDocs">Docs
            <ul class="dropdown-menu" id="docsMenu"><li><a href="/docs/b">B</a></li></ul>
        </li>
        <li class="desktop__list-element" id="navAbout">About</li>
    </ul>
</header>
<nav id="hamburgerMenu"><a href="/about">About</a></nav>
<main id="page">content</main>
"#;

fn create_controller() -> NavController {
    NavController::from_markup(PAGE, NavConfig::default(), 1024.0).unwrap()
}

fn node(controller: &NavController, element_id: &str) -> NodeId {
    controller.document().element_by_id(element_id).unwrap()
}

fn enter(controller: &mut NavController, element_id: &str) -> Vec<NavEffect> {
    let target = node(controller, element_id);
    controller.handle_event(&Event::MouseEnter(PointerEvent {
        target,
        timestamp: controller.now_ms(),
    }))
}

fn leave(controller: &mut NavController, element_id: &str) -> Vec<NavEffect> {
    let target = node(controller, element_id);
    controller.handle_event(&Event::MouseLeave(PointerEvent {
        target,
        timestamp: controller.now_ms(),
    }))
}

fn display_of(controller: &NavController, element_id: &str) -> Option<String> {
    let id = node(controller, element_id);
    controller.document().style_property(id, "display")
}

#[test]
fn test_bind_collects_items() {
    let controller = create_controller();
    assert_eq!(controller.dropdown_count(), 3);
    assert_eq!(controller.dropdown_phase(0), Some(DropdownPhase::Hidden));
}

/// 指针进入立即显示
#[test]
fn test_enter_shows_immediately() {
    let mut controller = create_controller();

    let effects = enter(&mut controller, "navProducts");
    assert_eq!(
        effects,
        vec![NavEffect::DropdownShown {
            item: node(&controller, "navProducts")
        }]
    );
    assert_eq!(controller.dropdown_phase(0), Some(DropdownPhase::Visible));
    assert_eq!(display_of(&controller, "productsMenu"), Some("block".to_string()));
}

/// 离开后 200ms 才隐藏，199ms 时仍可见
#[test]
fn test_leave_hides_after_delay() {
    let mut controller = create_controller();
    enter(&mut controller, "navProducts");
    leave(&mut controller, "navProducts");

    assert_eq!(controller.dropdown_phase(0), Some(DropdownPhase::PendingHide));
    // 倒计时期间面板保持可见
    assert_eq!(display_of(&controller, "productsMenu"), Some("block".to_string()));

    assert!(controller.advance_time(199).is_empty());
    assert_eq!(display_of(&controller, "productsMenu"), Some("block".to_string()));

    let effects = controller.advance_time(1);
    assert_eq!(
        effects,
        vec![NavEffect::DropdownHidden {
            item: node(&controller, "navProducts")
        }]
    );
    assert_eq!(controller.dropdown_phase(0), Some(DropdownPhase::Hidden));
    assert_eq!(display_of(&controller, "productsMenu"), Some("none".to_string()));
}

/// 离开后在到期前重新进入：全程可见，不闪烁
#[test]
fn test_reenter_cancels_hide() {
    let mut controller = create_controller();
    enter(&mut controller, "navProducts");
    leave(&mut controller, "navProducts");
    controller.advance_time(150);

    // 重新进入不是"重新显示"，面板一直可见
    let effects = enter(&mut controller, "navProducts");
    assert!(effects.is_empty());
    assert_eq!(controller.dropdown_phase(0), Some(DropdownPhase::Visible));

    // 被撤销的倒计时不再生效
    assert!(controller.advance_time(1000).is_empty());
    assert_eq!(display_of(&controller, "productsMenu"), Some("block".to_string()));
}

/// 再次离开重新计时：后登记的倒计时说了算
#[test]
fn test_last_leave_wins() {
    let mut controller = create_controller();
    enter(&mut controller, "navProducts");
    leave(&mut controller, "navProducts");
    controller.advance_time(100);
    enter(&mut controller, "navProducts");
    leave(&mut controller, "navProducts");

    assert!(controller.advance_time(199).is_empty());
    let effects = controller.advance_time(1);
    assert_eq!(effects.len(), 1);
    assert_eq!(controller.dropdown_phase(0), Some(DropdownPhase::Hidden));
}

/// 没有下拉面板的导航项：照常换相位，没有可见效果，也不报错
#[test]
fn test_item_without_panel() {
    let mut controller = create_controller();

    let effects = enter(&mut controller, "navAbout");
    assert_eq!(
        effects,
        vec![NavEffect::DropdownShown {
            item: node(&controller, "navAbout")
        }]
    );
    assert_eq!(controller.dropdown_phase(2), Some(DropdownPhase::Visible));

    leave(&mut controller, "navAbout");
    controller.advance_time(200);
    assert_eq!(controller.dropdown_phase(2), Some(DropdownPhase::Hidden));
}

/// 各导航项的状态机互相独立
#[test]
fn test_items_independent() {
    let mut controller = create_controller();

    enter(&mut controller, "navProducts");
    leave(&mut controller, "navProducts");
    enter(&mut controller, "navDocs");

    let effects = controller.advance_time(200);
    assert_eq!(
        effects,
        vec![NavEffect::DropdownHidden {
            item: node(&controller, "navProducts")
        }]
    );
    assert_eq!(controller.dropdown_phase(0), Some(DropdownPhase::Hidden));
    assert_eq!(controller.dropdown_phase(1), Some(DropdownPhase::Visible));
    assert_eq!(display_of(&controller, "docsMenu"), Some("block".to_string()));
}

/// 进入下拉面板本身（导航项的后代）仍算在项内
#[test]
fn test_enter_on_panel_counts_as_item() {
    let mut controller = create_controller();
    enter(&mut controller, "navProducts");
    leave(&mut controller, "navProducts");

    let effects = enter(&mut controller, "productsMenu");
    assert!(effects.is_empty());
    assert_eq!(controller.dropdown_phase(0), Some(DropdownPhase::Visible));
    assert!(controller.advance_time(1000).is_empty());
}

/// 悬停交互不影响汉堡菜单状态
#[test]
fn test_hover_does_not_touch_menu() {
    let mut controller = create_controller();
    let trigger = node(&controller, "hamburgerBtn");
    controller.handle_event(&Event::Tap(TapEvent {
        target: trigger,
        x: 0.0,
        y: 0.0,
        timestamp: 0,
    }));
    assert!(controller.menu_is_open());

    enter(&mut controller, "navProducts");
    leave(&mut controller, "navProducts");
    controller.advance_time(200);
    assert!(controller.menu_is_open());
}

/// 自定义延迟配置生效
#[test]
fn test_configurable_delay() {
    let config = NavConfig::from_json(r#"{ "hover_close_delay_ms": 500 }"#).unwrap();
    let mut controller = NavController::from_markup(PAGE, config, 1024.0).unwrap();

    enter(&mut controller, "navProducts");
    leave(&mut controller, "navProducts");

    assert!(controller.advance_time(499).is_empty());
    assert_eq!(controller.advance_time(1).len(), 1);
}
