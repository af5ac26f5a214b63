//! Sound cues behind the autoplay unlock latch.
//!
//! Browsers refuse to start media before the first user gesture, so nothing
//! plays until `unlock` has been called once. The latch never closes again.

use log::debug;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlAudioElement;

use crate::error::{GameError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Click,
    Evolve,
    Jumpscare,
    BossHit,
}

impl Cue {
    pub const ALL: [Cue; 4] = [Cue::Click, Cue::Evolve, Cue::Jumpscare, Cue::BossHit];

    pub fn file(self) -> &'static str {
        match self {
            Cue::Click => "click.mp3",
            Cue::Evolve => "upgrade.mp3",
            Cue::Jumpscare => "jumpscare.mp3",
            Cue::BossHit => "osu_hit.mp3",
        }
    }
}

/// What the game logic talks to.
pub trait AudioPort {
    fn unlock(&mut self);
    fn play(&mut self, cue: Cue);
}

/// A device that can actually make noise. Errors are reported, never retried.
pub trait Playback {
    /// Start and immediately stop a cue so later plays are allowed.
    fn prime(&self, cue: Cue) -> Result<()>;
    fn start(&self, cue: Cue) -> Result<()>;
}

pub struct SoundBoard<P> {
    device: P,
    unlocked: bool,
}

impl<P: Playback> SoundBoard<P> {
    pub fn new(device: P) -> Self {
        Self { device, unlocked: false }
    }

    pub fn device(&self) -> &P {
        &self.device
    }
}

impl<P: Playback> AudioPort for SoundBoard<P> {
    fn unlock(&mut self) {
        if self.unlocked {
            return;
        }
        for cue in Cue::ALL {
            if let Err(e) = self.device.prime(cue) {
                debug!("prime {:?} failed: {}", cue, e);
            }
        }
        self.unlocked = true;
    }

    fn play(&mut self, cue: Cue) {
        if !self.unlocked {
            return;
        }
        if let Err(e) = self.device.start(cue) {
            debug!("play {:?} failed: {}", cue, e);
        }
    }
}

/// Silent port; the game runs fine without sound.
#[derive(Default, Debug, Clone, Copy)]
pub struct NullAudio;

impl AudioPort for NullAudio {
    fn unlock(&mut self) {}
    fn play(&mut self, _cue: Cue) {}
}

/// `<audio>` elements, one per cue.
pub struct BrowserSounds {
    click: HtmlAudioElement,
    evolve: HtmlAudioElement,
    jumpscare: HtmlAudioElement,
    boss_hit: HtmlAudioElement,
    swallow: Closure<dyn FnMut(JsValue)>,
}

impl BrowserSounds {
    pub fn load(volume: f64) -> Result<Self> {
        let make = |cue: Cue| -> Result<HtmlAudioElement> {
            let el = HtmlAudioElement::new_with_src(cue.file()).map_err(GameError::audio)?;
            el.set_volume(volume);
            Ok(el)
        };
        Ok(Self {
            click: make(Cue::Click)?,
            evolve: make(Cue::Evolve)?,
            jumpscare: make(Cue::Jumpscare)?,
            boss_hit: make(Cue::BossHit)?,
            // rejected play() promises land here instead of the console
            swallow: Closure::wrap(Box::new(move |_e: JsValue| {}) as Box<dyn FnMut(JsValue)>),
        })
    }

    fn element(&self, cue: Cue) -> &HtmlAudioElement {
        match cue {
            Cue::Click => &self.click,
            Cue::Evolve => &self.evolve,
            Cue::Jumpscare => &self.jumpscare,
            Cue::BossHit => &self.boss_hit,
        }
    }
}

impl Playback for BrowserSounds {
    fn prime(&self, cue: Cue) -> Result<()> {
        let el = self.element(cue).clone();
        let promise = el.play().map_err(GameError::audio)?;
        let rewind = Closure::wrap(Box::new(move |_v: JsValue| {
            let _ = el.pause();
            el.set_current_time(0.0);
        }) as Box<dyn FnMut(JsValue)>);
        let _ = promise.then(&rewind).catch(&self.swallow);
        rewind.forget();
        Ok(())
    }

    fn start(&self, cue: Cue) -> Result<()> {
        let el = self.element(cue);
        el.set_current_time(0.0);
        let promise = el.play().map_err(GameError::audio)?;
        let _ = promise.catch(&self.swallow);
        Ok(())
    }
}
