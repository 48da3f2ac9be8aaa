//! WASM-compatible PlayerController wrapper

use super::primitive::HtmlAudioPrimitive;
use crate::{
    BarGeometry, MediaSignal, PanelClickTarget, PlaybackError, PlayerConfig, PlayerController,
    Playlist,
};
use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;
use web_time::Instant;

/// WASM-compatible player
///
/// Wraps the controller with a JavaScript-friendly API. The page forwards
/// DOM events to these methods and repaints from `view()`.
#[wasm_bindgen]
pub struct WasmPlayer {
    inner: PlayerController<HtmlAudioPrimitive>,

    // Event callbacks
    on_event: Option<Function>,
    on_error: Option<Function>,
}

#[wasm_bindgen]
impl WasmPlayer {
    /// Create a player over `audio` from a JSON array of tracks
    #[wasm_bindgen(constructor)]
    pub fn new(audio: HtmlAudioElement, playlist_json: &str) -> Result<WasmPlayer, JsValue> {
        Self::with_config(audio, playlist_json, "{}")
    }

    /// Create a player with a JSON `PlayerConfig` (missing fields use defaults)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        audio: HtmlAudioElement,
        playlist_json: &str,
        config_json: &str,
    ) -> Result<WasmPlayer, JsValue> {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        let playlist: Playlist = serde_json::from_str(playlist_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse playlist: {e}")))?;
        let config: PlayerConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {e}")))?;

        let inner = PlayerController::new(playlist, HtmlAudioPrimitive::new(audio), config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            inner,
            on_event: None,
            on_error: None,
        })
    }

    // ===== Media Element Signals =====

    /// Forward a media event by DOM name (`play`, `timeupdate`, ...)
    ///
    /// Returns false for events the player does not handle.
    #[wasm_bindgen(js_name = handleSignal)]
    pub fn handle_signal(&mut self, event_name: &str) -> bool {
        let Some(signal) = MediaSignal::from_event_name(event_name) else {
            return false;
        };

        self.inner.handle_signal(signal);
        self.emit_events();
        true
    }

    // ===== Playback Control =====

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) {
        self.inner.toggle_play();
        self.emit_events();
    }

    pub fn next(&mut self) {
        self.inner.play_next();
        self.emit_events();
    }

    pub fn previous(&mut self) {
        self.inner.play_previous();
        self.emit_events();
    }

    // ===== Seeking =====

    /// Seek from a click at `pointer_x` on a bar spanning `left..left + width`
    pub fn seek(&mut self, pointer_x: f64, left: f64, width: f64) -> bool {
        let seeked = self.inner.seek(pointer_x, BarGeometry::new(left, width));
        self.emit_events();
        seeked
    }

    #[wasm_bindgen(js_name = progressPointerDown)]
    pub fn progress_pointer_down(&mut self, pointer_x: f64, left: f64, width: f64) {
        self.inner
            .progress_pointer_down(pointer_x, BarGeometry::new(left, width));
        self.emit_events();
    }

    #[wasm_bindgen(js_name = progressPointerMove)]
    pub fn progress_pointer_move(&mut self, pointer_x: f64, left: f64, width: f64, buttons: u16) {
        let primary_held = buttons & 1 == 1;
        self.inner
            .progress_pointer_move(pointer_x, BarGeometry::new(left, width), primary_held);
        self.emit_events();
    }

    #[wasm_bindgen(js_name = progressPointerUp)]
    pub fn progress_pointer_up(&mut self) {
        self.inner.progress_pointer_up(Instant::now());
    }

    #[wasm_bindgen(js_name = progressPointerLeave)]
    pub fn progress_pointer_leave(&mut self) {
        self.inner.progress_pointer_leave(Instant::now());
    }

    // ===== Volume Control =====

    /// Volume slider input (0-100)
    #[wasm_bindgen(js_name = volumeInput)]
    pub fn volume_input(&mut self, value: u8) {
        self.inner.volume_input(value, Instant::now());
        self.emit_events();
    }

    #[wasm_bindgen(js_name = toggleMute)]
    pub fn toggle_mute(&mut self) {
        self.inner.toggle_mute();
        self.emit_events();
    }

    /// Get current volume (0-100)
    #[wasm_bindgen(js_name = getVolume)]
    pub fn get_volume(&self) -> u8 {
        self.inner.volume()
    }

    // ===== Keyboard =====

    /// Handle a `keydown` by `event.code`; returns whether to `preventDefault()`
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, code: &str) -> bool {
        let response = self.inner.handle_key(code);
        self.emit_events();
        response.prevent_default
    }

    // ===== Album Panel =====

    #[wasm_bindgen(js_name = openAlbumPanel)]
    pub fn open_album_panel(&mut self) {
        self.inner.open_album_panel();
        self.emit_events();
    }

    #[wasm_bindgen(js_name = closeAlbumPanel)]
    pub fn close_album_panel(&mut self) {
        self.inner.close_album_panel();
        self.emit_events();
    }

    /// Click on the panel overlay; `on_backdrop` is `event.target === overlay`
    #[wasm_bindgen(js_name = panelClick)]
    pub fn panel_click(&mut self, on_backdrop: bool) {
        let target = if on_backdrop {
            PanelClickTarget::Backdrop
        } else {
            PanelClickTarget::Content
        };
        self.inner.panel_click(target);
        self.emit_events();
    }

    #[wasm_bindgen(js_name = selectSong)]
    pub fn select_song(&mut self, index: usize) -> Result<(), JsValue> {
        self.inner
            .select_song(index)
            .map_err(|e| self.handle_error(e))?;
        self.emit_events();
        Ok(())
    }

    // ===== Timers =====

    /// Call from `setInterval` / `requestAnimationFrame` to expire grace periods
    pub fn tick(&mut self) {
        self.inner.tick(Instant::now());
    }

    // ===== State Queries =====

    /// Current view model as a plain JS object
    pub fn view(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.view())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.inner.current_index()
    }

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.is_playing()
    }

    // ===== Event Listeners =====

    /// Register a callback receiving each player event
    #[wasm_bindgen(js_name = onEvent)]
    pub fn on_event(&mut self, callback: Function) {
        self.on_event = Some(callback);
    }

    /// Register error callback
    #[wasm_bindgen(js_name = onError)]
    pub fn on_error(&mut self, callback: Function) {
        self.on_error = Some(callback);
    }

    // ===== Internal Event Emitters =====

    fn emit_events(&mut self) {
        let events = self.inner.drain_events();

        if let Some(ref cb) = self.on_event {
            for event in events {
                if let Ok(js_event) = serde_wasm_bindgen::to_value(&event) {
                    cb.call1(&JsValue::NULL, &js_event).ok();
                }
            }
        }
    }

    fn handle_error(&self, error: PlaybackError) -> JsValue {
        let err_msg = error.to_string();

        if let Some(ref cb) = self.on_error {
            cb.call1(&JsValue::NULL, &JsValue::from_str(&err_msg)).ok();
        }

        JsValue::from_str(&err_msg)
    }
}
