#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use advent_runner::persisted::{
    load_selection, save_selection, SavedSelection, STORAGE_KEY,
};
use advent_runner::App;

wasm_bindgen_test_configure!(run_in_browser);

fn storage() -> web_sys::Storage {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .expect("localStorage missing")
}

#[wasm_bindgen_test]
fn selection_survives_a_round_trip() {
    let selection = SavedSelection {
        year: "2016".to_string(),
        day: "20".to_string(),
        part: "2".to_string(),
    };
    save_selection(&selection);
    assert_eq!(load_selection(), Some(selection));
    storage().remove_item(STORAGE_KEY).expect("cleanup");
}

#[wasm_bindgen_test]
async fn editing_the_part_selector_persists_the_selection() {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document missing");
    let host = document.create_element("div").expect("create host");
    document
        .body()
        .expect("body missing")
        .append_child(&host)
        .expect("mount host");
    yew::Renderer::<App>::with_root(host.clone()).render();
    yew::platform::time::sleep(Duration::from_millis(50)).await;

    let select = document
        .get_element_by_id("part")
        .expect("part selector missing")
        .unchecked_into::<web_sys::HtmlSelectElement>();
    select.set_value("2");
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event =
        web_sys::Event::new_with_event_init_dict("input", &init).expect("input event");
    select.dispatch_event(&event).expect("dispatch");

    let saved = load_selection().expect("selection not saved");
    assert_eq!(saved.part, "2");
    storage().remove_item(STORAGE_KEY).expect("cleanup");
    host.remove();
}

#[wasm_bindgen_test]
fn malformed_storage_is_ignored() {
    storage()
        .set_item(STORAGE_KEY, "{\"year\":")
        .expect("seed storage");
    assert_eq!(load_selection(), None);

    storage()
        .set_item(STORAGE_KEY, "{\"year\":\"3000\",\"day\":\"1\",\"part\":\"1\"}")
        .expect("seed storage");
    assert_eq!(load_selection(), None);
    storage().remove_item(STORAGE_KEY).expect("cleanup");
}
