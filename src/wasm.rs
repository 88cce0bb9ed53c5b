//! Browser bindings.
//!
//! A web page owns one `WasmBoardEngine`, calls `playMove` from the cell
//! click handler and `reset` from the restart button, then re-renders from
//! `snapshot()`.

use super::BoardEngine;
use wasm_bindgen::prelude::*;

/// Engine handle exported to JavaScript.
#[wasm_bindgen]
pub struct WasmBoardEngine {
    inner: BoardEngine,
}

impl Default for WasmBoardEngine {
    fn default() -> Self {
        Self {
            inner: BoardEngine::new(),
        }
    }
}

#[wasm_bindgen]
impl WasmBoardEngine {
    /// Creates a new game.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmBoardEngine {
        WasmBoardEngine::default()
    }

    /// Plays at a cell index; returns false when the move was ignored.
    #[wasm_bindgen(js_name = playMove)]
    pub fn play_move(&mut self, index: usize) -> bool {
        self.inner.play_move(index).is_applied()
    }

    /// Starts a new game.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Current state as a plain JavaScript object.
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.snapshot()).map_err(JsValue::from)
    }

    /// Status line for the page header.
    #[wasm_bindgen(js_name = statusMessage)]
    pub fn status_message(&self) -> String {
        self.inner.snapshot().message
    }

    /// `"X"` or `"O"`.
    #[wasm_bindgen(getter, js_name = currentPlayer)]
    pub fn current_player(&self) -> String {
        self.inner.current_player().to_string()
    }

    /// False once the game is won or drawn.
    #[wasm_bindgen(getter, js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.inner.is_active()
    }
}
