use quill_ui as ui;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen(start)]
pub fn start() {
	console_error_panic_hook::set_once();
	let window = web_sys::window().unwrap();
	let document = window.document().unwrap();
	let mut options = ui::NestedNavOptions::default();
	// The theme may override the disclosure arrow width with
	// data-toggle-zone-width on the primary nav.
	let nav_element = document
		.query_selector(".md-nav--primary")
		.unwrap()
		.and_then(|nav_element| nav_element.dyn_into::<web_sys::HtmlElement>().ok());
	if let Some(nav_element) = nav_element {
		if let Some(toggle_zone_width) = nav_element
			.dataset()
			.get("toggleZoneWidth")
			.and_then(|value| value.parse::<f64>().ok())
		{
			options.toggle_zone_width = toggle_zone_width;
		}
	}
	ui::boot_nested_nav(options);
}
