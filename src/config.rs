//! Tunable constants for the clicker, grouped so tests can shrink them.

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Ascending currency thresholds; crossing one advances the evolution stage.
    pub milestones: Vec<u64>,
    pub start_click_power: u64,
    pub start_upgrade_cost: u64,
    /// Upgrade price multiplier, result floored.
    pub upgrade_cost_growth: f64,
    pub first_boss_at: u64,
    pub boss_threshold_step: u64,
    pub boss_max_hp: u32,
    /// Half-size of the boss portrait; also bounds where targets spawn.
    pub boss_radius: f64,
    pub target_radius: f64,
    pub target_pulse_step: f64,
    pub target_pulse_amplitude: f64,
    pub character_radius: f64,
    pub character_hover_scale: f64,
    /// Frames the evolution banner stays up.
    pub evolution_frames: u32,
    pub shake_decay: f64,
    pub shake_click: f64,
    pub shake_upgrade: f64,
    pub shake_evolve: f64,
    pub shake_boss_spawn: f64,
    pub shake_boss_hit: f64,
    pub save_key: String,
    pub autosave_ms: i32,
    pub volume: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            milestones: vec![1000, 2000, 5000, 10000],
            start_click_power: 1,
            start_upgrade_cost: 100,
            upgrade_cost_growth: 1.8,
            first_boss_at: 2000,
            boss_threshold_step: 2000,
            boss_max_hp: 20,
            boss_radius: 150.0,
            target_radius: 22.0,
            target_pulse_step: 0.15,
            target_pulse_amplitude: 4.0,
            character_radius: 120.0,
            character_hover_scale: 1.08,
            evolution_frames: 360,
            shake_decay: 0.9,
            shake_click: 6.0,
            shake_upgrade: 10.0,
            shake_evolve: 18.0,
            shake_boss_spawn: 20.0,
            shake_boss_hit: 14.0,
            save_key: "kolbasa_canvas_save".to_string(),
            autosave_ms: 2000,
            volume: 0.45,
        }
    }
}

impl GameConfig {
    /// Number of evolution steps; stages run `0..=stage_count()`.
    pub fn stage_count(&self) -> u32 {
        self.milestones.len() as u32
    }
}
