//! Browser audio backends over `HtmlAudioElement`

use dvd_core::{AudioError, MusicBackend, SoundId, SoundPlayer, Track};
use web_sys::{HtmlAudioElement, HtmlMediaElement};

fn js_reason(e: wasm_bindgen::JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Sound effects. Every play gets its own element so clips can overlap.
#[derive(Default)]
pub struct WebSound {
    clips: Vec<HtmlAudioElement>,
}

impl SoundPlayer for WebSound {
    fn load_clip(&mut self, path: &str) -> Result<SoundId, AudioError> {
        let clip = HtmlAudioElement::new_with_src(path).map_err(|e| AudioError::Load {
            track: path.to_string(),
            reason: js_reason(e),
        })?;
        clip.set_preload("auto");

        let id = SoundId(self.clips.len() as u16);
        self.clips.push(clip);
        Ok(id)
    }

    fn play_clip(&mut self, clip: SoundId) {
        let Some(source) = self.clips.get(clip.0 as usize) else {
            log::warn!("Unknown clip {:?}", clip);
            return;
        };

        match HtmlAudioElement::new_with_src(&source.src()) {
            // The returned promise rejects when autoplay is blocked; nothing to do then
            Ok(voice) => {
                if let Err(e) = voice.play() {
                    log::debug!("Clip did not start: {}", js_reason(e));
                }
            }
            Err(e) => log::warn!("Clip element failed: {}", js_reason(e)),
        }
    }
}

/// A source that errored or was never found stays at `HAVE_NOTHING`
/// forever, so it does not count as loading.
fn load_in_flight(has_src: bool, errored: bool, network_state: u16, ready_state: u16) -> bool {
    has_src
        && !errored
        && network_state != HtmlMediaElement::NETWORK_NO_SOURCE
        && ready_state == HtmlMediaElement::HAVE_NOTHING
}

/// Background music on a single looping element
pub struct WebMusic {
    element: HtmlAudioElement,
}

impl WebMusic {
    pub fn new() -> Result<Self, AudioError> {
        let element = HtmlAudioElement::new()
            .map_err(|e| AudioError::Playback(js_reason(e)))?;
        element.set_loop(true);
        Ok(Self { element })
    }
}

impl MusicBackend for WebMusic {
    fn load(&mut self, track: &Track) -> Result<(), AudioError> {
        self.element.set_src(track.path());
        self.element.set_loop(true);
        self.element.load();
        Ok(())
    }

    fn play_looped(&mut self) -> Result<(), AudioError> {
        self.element
            .play()
            .map(|_| ())
            .map_err(|e| AudioError::Playback(js_reason(e)))
    }

    fn pause(&mut self) {
        if let Err(e) = self.element.pause() {
            log::warn!("Pause failed: {}", js_reason(e));
        }
    }

    fn unpause(&mut self) -> Result<(), AudioError> {
        self.play_looped()
    }

    fn is_busy(&self) -> bool {
        !self.element.paused()
    }

    fn unload(&mut self) {
        self.pause();
        self.element.remove_attribute("src").ok();
        self.element.load();
    }

    fn is_loading(&self) -> bool {
        load_in_flight(
            !self.element.src().is_empty(),
            self.element.error().is_some(),
            self.element.network_state(),
            self.element.ready_state(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_fresh_source_is_loading() {
        assert!(load_in_flight(
            true,
            false,
            HtmlMediaElement::NETWORK_LOADING,
            HtmlMediaElement::HAVE_NOTHING
        ));
    }

    #[wasm_bindgen_test]
    fn test_failed_source_is_not_loading() {
        // 404 or decode failure: error is set, ready state never advances
        assert!(!load_in_flight(
            true,
            true,
            HtmlMediaElement::NETWORK_IDLE,
            HtmlMediaElement::HAVE_NOTHING
        ));
        assert!(!load_in_flight(
            true,
            false,
            HtmlMediaElement::NETWORK_NO_SOURCE,
            HtmlMediaElement::HAVE_NOTHING
        ));
    }

    #[wasm_bindgen_test]
    fn test_ready_or_empty_is_not_loading() {
        assert!(!load_in_flight(
            true,
            false,
            HtmlMediaElement::NETWORK_IDLE,
            HtmlMediaElement::HAVE_ENOUGH_DATA
        ));
        assert!(!load_in_flight(
            false,
            false,
            HtmlMediaElement::NETWORK_EMPTY,
            HtmlMediaElement::HAVE_NOTHING
        ));
    }
}
