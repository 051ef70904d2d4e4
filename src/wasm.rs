// src/wasm.rs

//! JavaScript から使うための入り口だよ (`wasm` feature)。
//! ムーブもテーブルの状態も JSON 文字列でやり取りする。

use log::{error, info};
use wasm_bindgen::prelude::*;

use crate::components::stack::StackType;
use crate::config::rules::DealConfig;
use crate::logic::solitaire::Solitaire;

// Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub struct SolitaireApp {
    game: Solitaire,
}

#[wasm_bindgen]
impl SolitaireApp {
    /// 新しいゲームを配る。`seed` を渡すと毎回同じ配りになるよ。
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> Result<SolitaireApp, JsValue> {
        let mut game = Solitaire::with_config(DealConfig { seed });
        game.setup().map_err(|e| {
            error!("Setup failed: {}", e);
            JsValue::from_str(&e.to_string())
        })?;
        info!("SolitaireApp: game dealt.");
        Ok(SolitaireApp { game })
    }

    /// JSON で渡されたムーブを実行する。例: `[{"Tableau":0},{"Foundation":1}]`, `["Stock"]`。
    /// ダメなムーブはエラー文字列で返す。
    pub fn play_json(&mut self, play_json: &str) -> Result<(), JsValue> {
        let play: Vec<StackType> = serde_json::from_str(play_json).map_err(|e| {
            let error_msg = format!("Failed to parse move JSON: {}", e);
            error!("{}", error_msg);
            JsValue::from_str(&error_msg)
        })?;
        self.game
            .play(&play)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// 今のテーブルを JSON (`TableView`) で返す。
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.game.view()).map_err(|e| {
            let error_msg = format!("Failed to serialize game state: {}", e);
            error!("{}", error_msg);
            JsValue::from_str(&error_msg)
        })
    }

    pub fn is_finished(&self) -> bool {
        self.game.is_finished()
    }
}
