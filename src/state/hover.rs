// Hover flags, recomputed on every pointer move
use crate::layout::{Layout, Mode, Point};

#[derive(Default, Debug, Clone, PartialEq)]
pub struct HoverState {
    pub character: bool,
    pub upgrade: bool,
    pub save: bool,
    pub reset: bool,
}

impl HoverState {
    pub fn compute(p: Point, layout: &Layout, mode: Mode) -> Self {
        let idle = mode == Mode::Idle;
        Self {
            character: idle && layout.character.contains(p),
            upgrade: idle && layout.upgrade_button.contains(p),
            save: layout.save_button.contains(p),
            reset: layout.reset_button.contains(p),
        }
    }

    /// Whether the pointer cursor should be shown.
    pub fn any(&self) -> bool {
        self.character || self.upgrade || self.save || self.reset
    }
}
