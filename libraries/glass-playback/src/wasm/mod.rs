//! WASM bindings for glass-playback
//!
//! Drives a page's `<audio>` element through the controller, so the player
//! logic runs unchanged in the browser.

pub mod player;
pub mod primitive;

pub use player::WasmPlayer;
pub use primitive::HtmlAudioPrimitive;
