use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub const DEFAULT_TOGGLE_ZONE_WIDTH: f64 = 36.0;

const NESTED_NAV_LABEL_SELECTOR: &str = ".md-nav__item--nested > .md-nav__link";
const NAV_TOGGLE_CLASS: &str = "md-nav__toggle";

pub struct NestedNavOptions {
	pub toggle_zone_width: f64,
}

impl Default for NestedNavOptions {
	fn default() -> NestedNavOptions {
		NestedNavOptions {
			toggle_zone_width: DEFAULT_TOGGLE_ZONE_WIDTH,
		}
	}
}

#[derive(Debug, PartialEq)]
enum ClickAction {
	FollowLink,
	ToggleSection,
}

fn classify_click(
	client_x: f64,
	label_right: f64,
	toggle_zone_width: f64,
	modifier_key_held: bool,
) -> ClickAction {
	if modifier_key_held {
		return ClickAction::FollowLink;
	}
	let toggle_zone_start = label_right - toggle_zone_width;
	if client_x < toggle_zone_start {
		ClickAction::FollowLink
	} else {
		ClickAction::ToggleSection
	}
}

/** Nested nav section labels are links whose right edge renders a disclosure arrow. A click landing on the arrow flips the section's toggle checkbox instead of following the link, and a change event is dispatched on the toggle so the styling bound to it updates. */
pub fn boot_nested_nav(options: NestedNavOptions) {
	let document = web_sys::window().unwrap().document().unwrap();
	let label_elements = document
		.query_selector_all(NESTED_NAV_LABEL_SELECTOR)
		.unwrap();
	for label_element_index in 0..label_elements.length() {
		let label_element = label_elements.item(label_element_index).unwrap();
		let label_element = match label_element.dyn_into::<web_sys::HtmlElement>() {
			Ok(label_element) => label_element,
			Err(_) => continue,
		};
		let toggle_element = match label_element.previous_element_sibling() {
			Some(toggle_element) => toggle_element,
			None => continue,
		};
		if !toggle_element.class_list().contains(NAV_TOGGLE_CLASS) {
			continue;
		}
		let toggle_element = match toggle_element.dyn_into::<web_sys::HtmlInputElement>() {
			Ok(toggle_element) => toggle_element,
			Err(_) => continue,
		};
		let label_element_for_closure = label_element.clone();
		let toggle_zone_width = options.toggle_zone_width;
		let callback_fn = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
			let modifier_key_held =
				event.meta_key() || event.ctrl_key() || event.shift_key() || event.alt_key();
			let label_rect = label_element_for_closure.get_bounding_client_rect();
			let action = classify_click(
				event.client_x().into(),
				label_rect.right(),
				toggle_zone_width,
				modifier_key_held,
			);
			if let ClickAction::FollowLink = action {
				return;
			}
			event.prevent_default();
			toggle_element.set_checked(!toggle_element.checked());
			let mut change_event_init = web_sys::EventInit::new();
			change_event_init.bubbles(true);
			let change_event =
				web_sys::Event::new_with_event_init_dict("change", &change_event_init).unwrap();
			toggle_element.dispatch_event(&change_event).unwrap();
		}) as Box<dyn FnMut(_)>);
		label_element
			.add_event_listener_with_callback("click", callback_fn.as_ref().unchecked_ref())
			.unwrap();
		callback_fn.forget();
	}
}

#[test]
fn test_classify_click_modifier_bypass() {
	assert_eq!(
		classify_click(170.0, 200.0, 36.0, true),
		ClickAction::FollowLink
	);
	assert_eq!(
		classify_click(199.0, 200.0, 36.0, true),
		ClickAction::FollowLink
	);
}

#[test]
fn test_classify_click_zone_boundary() {
	// right = 200, zone width = 36, zone starts at 164
	assert_eq!(
		classify_click(163.0, 200.0, 36.0, false),
		ClickAction::FollowLink
	);
	assert_eq!(
		classify_click(164.0, 200.0, 36.0, false),
		ClickAction::ToggleSection
	);
	assert_eq!(
		classify_click(170.0, 200.0, 36.0, false),
		ClickAction::ToggleSection
	);
	assert_eq!(
		classify_click(50.0, 200.0, 36.0, false),
		ClickAction::FollowLink
	);
}

#[test]
fn test_classify_click_custom_zone_width() {
	assert_eq!(
		classify_click(150.0, 200.0, 60.0, false),
		ClickAction::ToggleSection
	);
	assert_eq!(
		classify_click(139.0, 200.0, 60.0, false),
		ClickAction::FollowLink
	);
	assert_eq!(
		classify_click(199.0, 200.0, 0.0, false),
		ClickAction::FollowLink
	);
	assert_eq!(
		classify_click(200.0, 200.0, 0.0, false),
		ClickAction::ToggleSection
	);
}
