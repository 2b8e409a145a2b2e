//! Audio system using HTML media elements
//!
//! Two clips: a one-shot jump sound and a looping background track. Both load
//! asynchronously; playing a clip that has not loaded yet is a silent no-op.

use crate::settings::Settings;

/// Sound clips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// Player jumped (one-shot, never overlaps itself)
    Jump,
    /// Background music (looping)
    Music,
}

impl Sound {
    /// Asset path relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            Sound::Jump => "audios/jump.mp3",
            Sound::Music => "audios/music.mp3",
        }
    }

    pub fn looping(&self) -> bool {
        matches!(self, Sound::Music)
    }

    /// Playback volume for this clip
    pub fn volume(&self, settings: &Settings) -> f32 {
        match self {
            Sound::Jump => settings.effective_sfx_volume(),
            Sound::Music => settings.effective_music_volume(),
        }
    }
}

/// Whether a one-shot should start given the clip's current state
///
/// Skips clips that are still loading or already playing.
pub fn should_trigger(ready: bool, playing: bool) -> bool {
    ready && !playing
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::HtmlAudioElement;

    use super::{Sound, should_trigger};
    use crate::settings::Settings;

    /// `HTMLMediaElement.HAVE_CURRENT_DATA`
    const HAVE_CURRENT_DATA: u16 = 2;

    /// Audio manager for the game
    pub struct AudioManager {
        jump: Option<HtmlAudioElement>,
        music: Option<HtmlAudioElement>,
        music_started: bool,
    }

    impl AudioManager {
        /// Start loading both clips
        pub fn new(settings: &Settings) -> Self {
            Self {
                jump: load_clip(Sound::Jump, settings),
                music: load_clip(Sound::Music, settings),
                music_started: false,
            }
        }

        /// Play the jump sound unless it is still playing from the last jump
        pub fn play_jump(&self) {
            let Some(el) = &self.jump else { return };
            let ready = el.ready_state() >= HAVE_CURRENT_DATA;
            let playing = !el.paused() && !el.ended();
            if !should_trigger(ready, playing) {
                return;
            }
            el.set_current_time(0.0);
            start(el);
        }

        /// Start the background loop (browsers need a user gesture first)
        pub fn start_music(&mut self) {
            if self.music_started {
                return;
            }
            let Some(el) = &self.music else { return };
            start(el);
            self.music_started = true;
            log::info!("Background music started");
        }

        /// Stop the background loop
        pub fn stop_music(&mut self) {
            if let Some(el) = &self.music {
                let _ = el.pause();
            }
            self.music_started = false;
        }
    }

    fn load_clip(sound: Sound, settings: &Settings) -> Option<HtmlAudioElement> {
        let el = match HtmlAudioElement::new_with_src(sound.path()) {
            Ok(el) => el,
            Err(e) => {
                log::warn!("Failed to create audio element for {} - audio disabled: {:?}", sound.path(), e);
                return None;
            }
        };
        el.set_preload("auto");
        el.set_loop(sound.looping());
        el.set_volume(sound.volume(settings) as f64);
        Some(el)
    }

    /// Fire-and-forget playback; a rejected play promise is only logged
    fn start(el: &HtmlAudioElement) {
        if let Ok(promise) = el.play() {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    log::warn!("Audio playback rejected: {:?}", e);
                }
            });
        }
    }
}
