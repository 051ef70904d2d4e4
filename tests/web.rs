// tests/web.rs
//! Tests for the JavaScript binding. Run with `wasm-pack test --node -- --features wasm`.

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use klondike_rules::wasm::SolitaireApp;
use klondike_rules::TableView;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn deals_and_reports_state() {
    let app = SolitaireApp::new(Some(3)).unwrap();
    let view: TableView = serde_json::from_str(&app.state_json().unwrap()).unwrap();
    assert_eq!(view.piles.len(), 10);
    assert!(!app.is_finished());
}

#[wasm_bindgen_test]
fn plays_json_moves() {
    let mut app = SolitaireApp::new(Some(3)).unwrap();
    assert!(app.play_json(r#"["Stock"]"#).is_ok());
    assert!(app.play_json(r#"["Waste","Stock"]"#).is_err());
    assert!(app.play_json("not json").is_err());
}
