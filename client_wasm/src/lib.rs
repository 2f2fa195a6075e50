//! Browser client for the bouncing DVD text
//!
//! Draws on a canvas 2D context and plays audio through `HtmlAudioElement`.
//! JavaScript owns the `requestAnimationFrame` loop and forwards key events;
//! everything else runs in `dvd_core`.
//! Note: only compiled for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod audio;
mod canvas;
mod input;
mod logger;

use std::cell::RefCell;
use std::time::Duration;

use audio::{WebMusic, WebSound};
use canvas::CanvasSurface;
use dvd_core::*;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent};

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_motion(motion: &str) -> Result<Motion, JsValue> {
    match motion {
        "free" | "bounce" => Ok(Motion::Free),
        "along-x" => Ok(Motion::AlongX),
        "along-y" => Ok(Motion::AlongY),
        other => Err(JsValue::from_str(&format!("Unknown motion '{}'", other))),
    }
}

/// Main client state
pub struct Client {
    app: App<WebSound, WebMusic>,
    surface: CanvasSurface,
    clock: FrameClock,
    last_frame_ms: Option<f64>,
    pending_inputs: Vec<InputEvent>,
}

impl Client {
    pub fn new(canvas: HtmlCanvasElement, config: Config, motion: Motion) -> Result<Self, JsValue> {
        let surface = CanvasSurface::new(&canvas, config.viewport)?;
        let music = WebMusic::new().map_err(to_js)?;
        let rng = GameRng::new(js_sys::Date::now() as u64);
        let clock = FrameClock::new(config.tick_interval());

        let app = App::new(config, motion, &surface, WebSound::default(), music, rng)
            .map_err(to_js)?;

        Ok(Self {
            app,
            surface,
            clock,
            last_frame_ms: None,
            pending_inputs: Vec::new(),
        })
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.pending_inputs.push(event);
    }

    /// Run one animation frame. Returns false once the app has quit.
    pub fn render(&mut self, now_ms: f64) -> Result<bool, JsValue> {
        let elapsed_ms = self
            .last_frame_ms
            .map(|last| (now_ms - last).max(0.0))
            .unwrap_or(0.0);
        self.last_frame_ms = Some(now_ms);

        // Audio failures while running are not fatal
        for event in std::mem::take(&mut self.pending_inputs) {
            match self.app.handle_input(event) {
                Ok(Some(command)) => log::debug!("{:?}", command),
                Ok(None) => {}
                Err(e) => log::warn!("Input {:?} failed: {}", event, e),
            }
        }

        if !self.app.is_running() {
            self.surface.fill(self.app.config().background);
            return Ok(false);
        }

        let ticks = self
            .clock
            .advance(Duration::from_secs_f64(elapsed_ms / 1000.0));
        self.app.frame(std::iter::empty(), ticks, &mut self.surface);
        Ok(true)
    }

    pub fn set_text(&mut self, text: &str) {
        self.app.set_text(text, &self.surface);
    }
}

thread_local! {
    // Global client storage for WASM bindings
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<T>(f: impl FnOnce(&mut Client) -> Result<T, JsValue>) -> Result<T, JsValue> {
    CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
        Some(client) => f(client),
        None => Err(JsValue::from_str("Client not initialized")),
    })
}

/// Start the app on `canvas`. `tracks` is an array of music URLs played in
/// order; `motion` is one of `free`, `along-x`, `along-y`.
#[wasm_bindgen]
pub fn init_client(
    canvas: HtmlCanvasElement,
    tracks: js_sys::Array,
    motion: &str,
    text: Option<String>,
) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let tracks: Vec<Track> = tracks
        .iter()
        .filter_map(|value| value.as_string())
        .map(Track::new)
        .collect();

    let mut config = Config::new().with_music(tracks);
    if let Some(text) = text {
        config.text = text;
    }

    let client = Client::new(canvas, config, parse_motion(motion)?)?;
    CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
    Ok(())
}

#[wasm_bindgen]
pub fn handle_key_up(event: &KeyboardEvent) -> Result<(), JsValue> {
    let input = input::handle_key_up(&event.key());
    with_client(|client| {
        client.push_input(input);
        Ok(())
    })
}

/// Window or tab is closing
#[wasm_bindgen]
pub fn request_close() -> Result<(), JsValue> {
    with_client(|client| {
        client.push_input(InputEvent::CloseRequested);
        Ok(())
    })
}

/// Call from `requestAnimationFrame`; stop scheduling once this returns false
#[wasm_bindgen]
pub fn render_frame(now_ms: f64) -> Result<bool, JsValue> {
    with_client(|client| client.render(now_ms))
}

#[wasm_bindgen]
pub fn set_text(text: &str) -> Result<(), JsValue> {
    with_client(|client| {
        client.set_text(text);
        Ok(())
    })
}
