//! Core game model for Kolbasa Clicker.
//! Progression scalars, the boss encounter and the per-frame `Game` driver.
//! Nothing here touches the DOM; sound and randomness come in through
//! `AudioPort` and `RandomSource`.

use log::info;
use serde::{Deserialize, Serialize};

use crate::audio::{AudioPort, Cue};
use crate::config::GameConfig;
use crate::layout::{Circle, Layout, Point, Region, hit_test};
use crate::state::{HoverState, Shake};
use crate::util::{RandomSource, pick_index};

pub use crate::layout::Mode;

/// The persisted part of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub currency: u64,
    /// Currency gained per character click.
    pub click_power: u64,
    pub upgrade_cost: u64,
    /// Index into the stage portraits; `0..=milestones.len()`.
    pub evolution_stage: u32,
    /// Currency at which the next boss shows up.
    pub boss_threshold: u64,
}

impl Progression {
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            currency: 0,
            click_power: cfg.start_click_power.max(1),
            upgrade_cost: cfg.start_upgrade_cost.max(1),
            evolution_stage: 0,
            boss_threshold: cfg.first_boss_at,
        }
    }

    /// Pulls loaded values back into their valid ranges.
    pub fn sanitized(mut self, cfg: &GameConfig) -> Self {
        self.click_power = self.click_power.max(1);
        self.upgrade_cost = self.upgrade_cost.max(1);
        self.evolution_stage = self.evolution_stage.min(cfg.stage_count());
        self
    }

    pub fn can_afford_upgrade(&self) -> bool {
        self.currency >= self.upgrade_cost
    }

    /// Spends `upgrade_cost` for +1 click power. Returns false (and changes
    /// nothing) when the player cannot pay.
    pub fn purchase_upgrade(&mut self, cfg: &GameConfig) -> bool {
        if !self.can_afford_upgrade() {
            return false;
        }
        self.currency -= self.upgrade_cost;
        self.click_power = self.click_power.saturating_add(1);
        let next = (self.upgrade_cost as f64 * cfg.upgrade_cost_growth).floor() as u64;
        self.upgrade_cost = next.max(self.upgrade_cost);
        true
    }

    pub fn next_milestone(&self, cfg: &GameConfig) -> Option<u64> {
        cfg.milestones.get(self.evolution_stage as usize).copied()
    }

    /// Advances at most one stage per call, even when currency already sits
    /// past several milestones.
    pub fn try_evolve(&mut self, cfg: &GameConfig) -> bool {
        match self.next_milestone(cfg) {
            Some(at) if self.currency >= at => {
                self.evolution_stage += 1;
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BossPortrait {
    First,
    Second,
}

impl BossPortrait {
    pub const ALL: [BossPortrait; 2] = [BossPortrait::First, BossPortrait::Second];

    pub fn index(self) -> usize {
        match self {
            BossPortrait::First => 0,
            BossPortrait::Second => 1,
        }
    }
}

/// Exists only while a boss fight is running.
#[derive(Clone, Debug, PartialEq)]
pub struct BossEncounter {
    pub max_hp: u32,
    pub hp: u32,
    /// Target centre relative to the surface centre, so resizes carry it along.
    pub target: Point,
    pub portrait: BossPortrait,
    /// Drives the drawn radius only.
    pub pulse: f64,
}

impl BossEncounter {
    pub fn spawn(cfg: &GameConfig, rng: &mut dyn RandomSource) -> Self {
        let portrait = BossPortrait::ALL[pick_index(rng.next_f64(), BossPortrait::ALL.len())];
        let mut boss = Self {
            max_hp: cfg.boss_max_hp.max(1),
            hp: cfg.boss_max_hp.max(1),
            target: Point::default(),
            portrait,
            pulse: 0.0,
        };
        boss.target = Self::roll_target(cfg, rng);
        boss
    }

    fn roll_target(cfg: &GameConfig, rng: &mut dyn RandomSource) -> Point {
        let spread = cfg.boss_radius * 1.2;
        let dx = (rng.next_f64() - 0.5) * spread;
        let dy = (rng.next_f64() - 0.5) * spread;
        Point::new(dx, dy)
    }

    /// Moves the target somewhere else; re-rolls a few times on an exact repeat.
    pub fn relocate(&mut self, cfg: &GameConfig, rng: &mut dyn RandomSource) {
        let previous = self.target;
        for _ in 0..8 {
            self.target = Self::roll_target(cfg, rng);
            if self.target != previous {
                break;
            }
        }
        self.pulse = 0.0;
    }

    /// Hit area in screen space. The radius never pulses.
    pub fn target_circle(&self, layout: &Layout, cfg: &GameConfig) -> Circle {
        Circle {
            center: layout.center.offset(self.target.x, self.target.y),
            radius: cfg.target_radius,
        }
    }

    pub fn drawn_radius(&self, cfg: &GameConfig) -> f64 {
        cfg.target_radius + self.pulse.sin() * cfg.target_pulse_amplitude
    }

    pub fn hp_fraction(&self) -> f64 {
        self.hp as f64 / self.max_hp as f64
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}

/// What a click did, for the host to act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Nothing,
    SaveRequested,
    ResetRequested,
    Upgraded,
    Harvested { evolved: bool, boss_spawned: bool },
    BossHit { defeated: bool },
}

/// Whole game state owned by the frame loop.
#[derive(Clone, Debug)]
pub struct Game {
    pub cfg: GameConfig,
    pub progression: Progression,
    pub boss: Option<BossEncounter>,
    /// Frames left on the evolution banner.
    pub evolution_timer: u32,
    pub shake: Shake,
    pub hover: HoverState,
    /// Eased draw scale of the character portrait.
    pub character_scale: f64,
}

impl Game {
    pub fn new(cfg: GameConfig, progression: Progression) -> Self {
        let progression = progression.sanitized(&cfg);
        Self {
            cfg,
            progression,
            boss: None,
            evolution_timer: 0,
            shake: Shake::default(),
            hover: HoverState::default(),
            character_scale: 1.0,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.boss.is_some() {
            Mode::BossFight
        } else if self.evolution_timer > 0 {
            Mode::Evolving
        } else {
            Mode::Idle
        }
    }

    pub fn layout(&self, width: f64, height: f64) -> Layout {
        Layout::new(width, height, &self.cfg)
    }

    /// Recomputes hover flags; returns whether the pointer cursor applies.
    pub fn pointer_move(&mut self, p: Point, layout: &Layout) -> bool {
        self.hover = HoverState::compute(p, layout, self.mode());
        self.hover.any()
    }

    /// Routes one click. Exactly one action fires, or none.
    pub fn click(
        &mut self,
        p: Point,
        layout: &Layout,
        audio: &mut dyn AudioPort,
        rng: &mut dyn RandomSource,
    ) -> ClickOutcome {
        audio.unlock();
        let target = self.boss.as_ref().map(|b| b.target_circle(layout, &self.cfg));
        let outcome = match hit_test(p, layout, self.mode(), target) {
            Some(Region::Save) => ClickOutcome::SaveRequested,
            Some(Region::Reset) => ClickOutcome::ResetRequested,
            Some(Region::BossTarget) => self.hit_boss(audio, rng),
            Some(Region::Upgrade) => self.buy_upgrade(audio),
            Some(Region::Character) => self.harvest(audio, rng),
            None => ClickOutcome::Nothing,
        };
        self.hover = HoverState::compute(p, layout, self.mode());
        outcome
    }

    fn buy_upgrade(&mut self, audio: &mut dyn AudioPort) -> ClickOutcome {
        if !self.progression.purchase_upgrade(&self.cfg) {
            return ClickOutcome::Nothing;
        }
        info!(
            "upgrade bought: power={} next cost={}",
            self.progression.click_power, self.progression.upgrade_cost
        );
        audio.play(Cue::Evolve);
        self.shake.kick(self.cfg.shake_upgrade);
        ClickOutcome::Upgraded
    }

    fn harvest(&mut self, audio: &mut dyn AudioPort, rng: &mut dyn RandomSource) -> ClickOutcome {
        let p = &mut self.progression;
        p.currency = p.currency.saturating_add(p.click_power);
        audio.play(Cue::Click);
        self.shake.kick(self.cfg.shake_click);
        let evolved = self.check_evolution(audio);
        let boss_spawned = self.maybe_spawn_boss(audio, rng);
        ClickOutcome::Harvested { evolved, boss_spawned }
    }

    fn check_evolution(&mut self, audio: &mut dyn AudioPort) -> bool {
        if !self.progression.try_evolve(&self.cfg) {
            return false;
        }
        info!("evolved to stage {}", self.progression.evolution_stage);
        self.evolution_timer = self.cfg.evolution_frames;
        audio.play(Cue::Evolve);
        self.shake.kick(self.cfg.shake_evolve);
        true
    }

    fn maybe_spawn_boss(&mut self, audio: &mut dyn AudioPort, rng: &mut dyn RandomSource) -> bool {
        if self.boss.is_some()
            || self.evolution_timer > 0
            || self.progression.currency < self.progression.boss_threshold
        {
            return false;
        }
        let boss = BossEncounter::spawn(&self.cfg, rng);
        info!("boss spawned ({:?}, hp={})", boss.portrait, boss.hp);
        self.boss = Some(boss);
        audio.play(Cue::Jumpscare);
        self.shake.kick(self.cfg.shake_boss_spawn);
        true
    }

    fn hit_boss(&mut self, audio: &mut dyn AudioPort, rng: &mut dyn RandomSource) -> ClickOutcome {
        let Some(boss) = self.boss.as_mut() else {
            return ClickOutcome::Nothing;
        };
        boss.hp = boss.hp.saturating_sub(1);
        audio.play(Cue::BossHit);
        self.shake.kick(self.cfg.shake_boss_hit);
        boss.relocate(&self.cfg, rng);
        if !boss.is_defeated() {
            return ClickOutcome::BossHit { defeated: false };
        }
        self.boss = None;
        let p = &mut self.progression;
        p.boss_threshold = p.boss_threshold.saturating_add(self.cfg.boss_threshold_step);
        info!("boss defeated, next at {}", p.boss_threshold);
        ClickOutcome::BossHit { defeated: true }
    }

    /// Advances the animations before a frame is drawn. Returns the shake
    /// offset to draw with.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) -> (f64, f64) {
        if let Some(boss) = self.boss.as_mut() {
            boss.pulse += self.cfg.target_pulse_step;
        }
        let target_scale = if self.mode() == Mode::Idle && self.hover.character {
            self.cfg.character_hover_scale
        } else {
            1.0
        };
        self.character_scale += (target_scale - self.character_scale) * 0.15;
        self.shake.step(self.cfg.shake_decay, rng)
    }

    /// Counts the drawn frame against the evolution banner.
    pub fn end_frame(&mut self) {
        self.evolution_timer = self.evolution_timer.saturating_sub(1);
    }

    /// Banner opacity, 1.0 right after evolving down to 0.0.
    pub fn evolution_alpha(&self) -> f64 {
        if self.cfg.evolution_frames == 0 {
            return 0.0;
        }
        self.evolution_timer as f64 / self.cfg.evolution_frames as f64
    }
}
