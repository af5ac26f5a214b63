// Shared test doubles for the integration tests.
#![allow(dead_code)]

use kolbasa_clicker::audio::{AudioPort, Cue};
use kolbasa_clicker::config::GameConfig;
use kolbasa_clicker::layout::{Layout, Point};
use kolbasa_clicker::model::{Game, Progression};
use kolbasa_clicker::util::RandomSource;

/// Cycles through a fixed list of samples.
pub struct Scripted {
    values: Vec<f64>,
    next: usize,
}

impl Scripted {
    pub fn new(values: &[f64]) -> Self {
        Self { values: values.to_vec(), next: 0 }
    }
}

impl RandomSource for Scripted {
    fn next_f64(&mut self) -> f64 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}

#[derive(Default)]
pub struct RecordingAudio {
    pub unlocked: bool,
    pub played: Vec<Cue>,
}

impl AudioPort for RecordingAudio {
    fn unlock(&mut self) {
        self.unlocked = true;
    }
    fn play(&mut self, cue: Cue) {
        if self.unlocked {
            self.played.push(cue);
        }
    }
}

pub fn fresh_game() -> Game {
    let cfg = GameConfig::default();
    let p = Progression::new(&cfg);
    Game::new(cfg, p)
}

pub fn game_with(edit: impl FnOnce(&mut Progression)) -> Game {
    let cfg = GameConfig::default();
    let mut p = Progression::new(&cfg);
    edit(&mut p);
    Game::new(cfg, p)
}

pub fn layout(game: &Game) -> Layout {
    game.layout(1024.0, 768.0)
}

pub fn upgrade_point(l: &Layout) -> Point {
    Point::new(l.upgrade_button.center_x(), l.upgrade_button.y + l.upgrade_button.h / 2.0)
}

/// Runs frames until the evolution banner is gone.
pub fn finish_evolution(game: &mut Game, rng: &mut dyn RandomSource) {
    while game.evolution_timer > 0 {
        game.tick(rng);
        game.end_frame();
    }
}
