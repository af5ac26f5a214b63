use log::{debug, info, warn};

use crate::audio::{AudioPort, BrowserSounds, NullAudio, SoundBoard};
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::layout::{Layout, Point};
use crate::model::{ClickOutcome, Game, Progression};
use crate::storage::{KeyValueStore, LocalStore, clear_progression, load_progression, save_progression};
use crate::util::JsRandom;

const RESET_PROMPT: &str = "Reset all progress?";

/// The page-level calls a reset needs.
pub trait PageHost {
    fn confirm(&self, message: &str) -> Result<bool>;
    fn reload(&self) -> Result<()>;
}

pub struct BrowserPage;

impl PageHost for BrowserPage {
    fn confirm(&self, message: &str) -> Result<bool> {
        let win = web_sys::window().ok_or_else(|| GameError::Dom("no window".into()))?;
        win.confirm_with_message(message).map_err(GameError::dom)
    }

    fn reload(&self) -> Result<()> {
        let win = web_sys::window().ok_or_else(|| GameError::Dom("no window".into()))?;
        win.location().reload().map_err(GameError::dom)
    }
}

/// Everything the page callbacks share: the game plus its host capabilities.
pub struct Session {
    pub game: Game,
    audio: Box<dyn AudioPort>,
    rng: JsRandom,
    store: Option<Box<dyn KeyValueStore>>,
    page: Box<dyn PageHost>,
    /// Set once the slot is cleared and a reload is on its way, so the
    /// autosave cannot resurrect it.
    resetting: bool,
}

impl Session {
    pub fn start() -> Self {
        let cfg = GameConfig::default();
        let store: Option<Box<dyn KeyValueStore>> = match LocalStore::open() {
            Ok(s) => Some(Box::new(s)),
            Err(e) => {
                warn!("progress will not be saved: {}", e);
                None
            }
        };
        let progression = match &store {
            Some(s) => load_progression(s.as_ref(), &cfg),
            None => Progression::new(&cfg),
        };
        info!(
            "loaded: currency={} power={} stage={} next boss at {}",
            progression.currency,
            progression.click_power,
            progression.evolution_stage,
            progression.boss_threshold
        );
        let audio: Box<dyn AudioPort> = match BrowserSounds::load(cfg.volume) {
            Ok(device) => Box::new(SoundBoard::new(device)),
            Err(e) => {
                warn!("sound disabled: {}", e);
                Box::new(NullAudio)
            }
        };
        Self::with_parts(Game::new(cfg, progression), audio, store, Box::new(BrowserPage))
    }

    pub fn with_parts(
        game: Game,
        audio: Box<dyn AudioPort>,
        store: Option<Box<dyn KeyValueStore>>,
        page: Box<dyn PageHost>,
    ) -> Self {
        Self { game, audio, rng: JsRandom, store, page, resetting: false }
    }

    pub fn frame(&mut self) -> (f64, f64) {
        self.game.tick(&mut self.rng)
    }

    pub fn frame_drawn(&mut self) {
        self.game.end_frame();
    }

    pub fn click(&mut self, p: Point, layout: &Layout) -> ClickOutcome {
        let outcome = self.game.click(p, layout, self.audio.as_mut(), &mut self.rng);
        match outcome {
            ClickOutcome::SaveRequested => self.save(),
            ClickOutcome::ResetRequested => self.reset(),
            _ => {}
        }
        outcome
    }

    /// Best effort; failures are logged and dropped.
    pub fn save(&self) {
        if self.resetting {
            return;
        }
        let Some(store) = &self.store else { return };
        match save_progression(store.as_ref(), &self.game.cfg, &self.game.progression) {
            Ok(()) => debug!("saved"),
            Err(e) => warn!("save failed: {}", e),
        }
    }

    fn reset(&mut self) {
        match self.clear_and_reload() {
            Ok(true) => info!("progress reset"),
            Ok(false) => {}
            Err(e) => warn!("reset failed, keeping progress: {}", e),
        }
    }

    fn clear_and_reload(&mut self) -> Result<bool> {
        if !self.page.confirm(RESET_PROMPT)? {
            return Ok(false);
        }
        if let Some(store) = &self.store {
            clear_progression(store.as_ref(), &self.game.cfg)?;
        }
        self.page.reload()?;
        self.resetting = true;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Shared {
        inner: Rc<MemoryStore>,
        remove_fails: bool,
    }

    impl KeyValueStore for Shared {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }
        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.inner.set(key, value)
        }
        fn remove(&self, key: &str) -> Result<()> {
            if self.remove_fails {
                return Err(GameError::Storage("denied".into()));
            }
            self.inner.remove(key)
        }
    }

    struct FakePage {
        answer: bool,
        reloads: Rc<Cell<u32>>,
    }

    impl PageHost for FakePage {
        fn confirm(&self, _message: &str) -> Result<bool> {
            Ok(self.answer)
        }
        fn reload(&self) -> Result<()> {
            self.reloads.set(self.reloads.get() + 1);
            Ok(())
        }
    }

    fn session(
        currency: u64,
        backing: &Rc<MemoryStore>,
        remove_fails: bool,
        answer: bool,
    ) -> (Session, Rc<Cell<u32>>) {
        let cfg = GameConfig::default();
        let mut progression = Progression::new(&cfg);
        progression.currency = currency;
        let reloads = Rc::new(Cell::new(0));
        let session = Session::with_parts(
            Game::new(cfg, progression),
            Box::new(NullAudio),
            Some(Box::new(Shared { inner: backing.clone(), remove_fails })),
            Box::new(FakePage { answer, reloads: reloads.clone() }),
        );
        (session, reloads)
    }

    const SAVE_AT: Point = Point { x: 30.0, y: 580.0 };
    const RESET_AT: Point = Point { x: 150.0, y: 580.0 };

    #[test]
    fn save_control_writes_immediately() {
        let cfg = GameConfig::default();
        let backing = Rc::new(MemoryStore::default());
        let (mut session, _) = session(321, &backing, false, true);
        let layout = session.game.layout(800.0, 600.0);
        assert_eq!(session.click(SAVE_AT, &layout), ClickOutcome::SaveRequested);
        assert_eq!(load_progression(backing.as_ref(), &cfg).currency, 321);
    }

    #[test]
    fn confirmed_reset_clears_slot_and_stops_autosave() {
        let cfg = GameConfig::default();
        let backing = Rc::new(MemoryStore::default());
        let (mut session, reloads) = session(321, &backing, false, true);
        session.save();
        let layout = session.game.layout(800.0, 600.0);
        assert_eq!(session.click(RESET_AT, &layout), ClickOutcome::ResetRequested);
        assert_eq!(reloads.get(), 1);
        assert_eq!(backing.get(&cfg.save_key).unwrap(), None);
        session.save();
        assert_eq!(backing.get(&cfg.save_key).unwrap(), None);
    }

    #[test]
    fn declined_reset_keeps_slot() {
        let cfg = GameConfig::default();
        let backing = Rc::new(MemoryStore::default());
        let (mut session, reloads) = session(321, &backing, false, false);
        session.save();
        let layout = session.game.layout(800.0, 600.0);
        session.click(RESET_AT, &layout);
        assert_eq!(reloads.get(), 0);
        assert_eq!(load_progression(backing.as_ref(), &cfg).currency, 321);
    }

    #[test]
    fn failed_reset_keeps_saving() {
        let cfg = GameConfig::default();
        let backing = Rc::new(MemoryStore::default());
        let (mut session, reloads) = session(321, &backing, true, true);
        let layout = session.game.layout(800.0, 600.0);
        session.click(RESET_AT, &layout);
        assert_eq!(reloads.get(), 0);

        session.game.progression.currency = 654;
        session.save();
        assert_eq!(load_progression(backing.as_ref(), &cfg).currency, 654);
        session.game.progression.currency = 700;
        session.click(SAVE_AT, &layout);
        assert_eq!(load_progression(backing.as_ref(), &cfg).currency, 700);
    }
}
