//! Screen layout derived from the canvas size, and pointer hit-testing.
//! Nothing here is cached between frames; callers rebuild a `Layout` from the
//! current surface dimensions whenever they need one.

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn contains(&self, p: Point) -> bool {
        p.distance(self.center) <= self.radius
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.w * 0.5
    }
}

/// Static regions of one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub character: Circle,
    pub upgrade_button: Rect,
    pub save_button: Rect,
    pub reset_button: Rect,
    pub boss_radius: f64,
}

const UPGRADE_W: f64 = 220.0;
const UPGRADE_H: f64 = 45.0;
const UPGRADE_GAP: f64 = 160.0;
const CORNER_BAND: f64 = 50.0;

impl Layout {
    pub fn new(width: f64, height: f64, cfg: &GameConfig) -> Self {
        let center = Point::new(width / 2.0, height / 2.0);
        Self {
            width,
            height,
            center,
            character: Circle { center, radius: cfg.character_radius },
            upgrade_button: Rect {
                x: center.x - UPGRADE_W / 2.0,
                y: center.y + UPGRADE_GAP,
                w: UPGRADE_W,
                h: UPGRADE_H,
            },
            save_button: Rect { x: 0.0, y: height - CORNER_BAND, w: 100.0, h: CORNER_BAND },
            reset_button: Rect { x: 120.0, y: height - CORNER_BAND, w: 120.0, h: CORNER_BAND },
            boss_radius: cfg.boss_radius,
        }
    }
}

/// What a pointer can land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Save,
    Reset,
    BossTarget,
    Upgrade,
    Character,
}

/// Current interaction mode, as far as hit-testing cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Evolving,
    BossFight,
}

/// Resolves a click to at most one region, in priority order:
/// save, reset, boss target, upgrade button, character.
pub fn hit_test(p: Point, layout: &Layout, mode: Mode, target: Option<Circle>) -> Option<Region> {
    if layout.save_button.contains(p) {
        return Some(Region::Save);
    }
    if layout.reset_button.contains(p) {
        return Some(Region::Reset);
    }
    match mode {
        Mode::BossFight => target.filter(|t| t.contains(p)).map(|_| Region::BossTarget),
        Mode::Idle if layout.upgrade_button.contains(p) => Some(Region::Upgrade),
        Mode::Idle if layout.character.contains(p) => Some(Region::Character),
        _ => None,
    }
}
