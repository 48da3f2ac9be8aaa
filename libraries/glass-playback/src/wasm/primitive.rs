//! `HtmlAudioElement` as a playback primitive

use crate::{PlaybackError, PlaybackPrimitive, ReadyState, Result};
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

/// Browser audio element driven by the controller
///
/// Signals are pushed from DOM listeners, so `take_signals` keeps its default.
pub struct HtmlAudioPrimitive {
    audio: HtmlAudioElement,

    // Attached to every play() promise so autoplay rejections stay quiet
    swallow_rejection: Closure<dyn FnMut(JsValue)>,
}

impl HtmlAudioPrimitive {
    pub fn new(audio: HtmlAudioElement) -> Self {
        Self {
            audio,
            swallow_rejection: Closure::new(|_reason: JsValue| {}),
        }
    }

    pub fn element(&self) -> &HtmlAudioElement {
        &self.audio
    }
}

impl PlaybackPrimitive for HtmlAudioPrimitive {
    fn set_source(&mut self, src: &str) {
        self.audio.set_src(src);
    }

    fn load(&mut self) {
        self.audio.load();
    }

    fn play(&mut self) -> Result<()> {
        let promise = self
            .audio
            .play()
            .map_err(|e| PlaybackError::PlayRejected(format!("{e:?}")))?;

        // Outcome arrives later as a `play` or nothing at all
        let _ = promise.catch(&self.swallow_rejection);
        Ok(())
    }

    fn pause(&mut self) {
        if let Err(e) = self.audio.pause() {
            tracing::warn!(error = ?e, "pause() failed");
        }
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn set_volume(&mut self, volume: f64) {
        self.audio.set_volume(volume);
    }

    fn duration(&self) -> f64 {
        self.audio.duration()
    }

    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn ready_state(&self) -> ReadyState {
        ReadyState::from_raw(self.audio.ready_state())
    }
}
