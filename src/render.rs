//! Canvas drawing for one frame. Reads the game, never mutates it.

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::error::{GameError, Result};
use crate::layout::Layout;
use crate::model::{BossEncounter, Game, Mode};

const STAGE_IMAGES: [&str; 5] = ["unnamed.jpg", "unnamed1.jpg", "unnamed2.jpg", "unnamed3.jpg", "unnamed4.jpg"];
const BOSS_IMAGES: [&str; 2] = ["boss1.png", "boss2.png"];

pub struct Images {
    stages: Vec<HtmlImageElement>,
    bosses: Vec<HtmlImageElement>,
}

impl Images {
    pub fn load() -> Result<Self> {
        let make = |src: &&str| -> Result<HtmlImageElement> {
            let img = HtmlImageElement::new().map_err(GameError::dom)?;
            img.set_src(src);
            Ok(img)
        };
        Ok(Self {
            stages: STAGE_IMAGES.iter().map(make).collect::<Result<_>>()?,
            bosses: BOSS_IMAGES.iter().map(make).collect::<Result<_>>()?,
        })
    }

    fn stage(&self, idx: u32) -> Option<&HtmlImageElement> {
        self.stages.get(idx as usize).or_else(|| self.stages.last())
    }
}

pub fn draw_frame(
    ctx: &CanvasRenderingContext2d,
    game: &Game,
    layout: &Layout,
    images: &Images,
    shake: (f64, f64),
) {
    let (w, h) = (layout.width, layout.height);
    let (cx, cy) = (layout.center.x, layout.center.y);
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.translate(shake.0, shake.1).ok();

    ctx.set_text_align("center");
    ctx.set_fill_style_str("#111");
    ctx.set_font("800 28px Inter");
    ctx.fill_text(&format!("Clicks: {}", game.progression.currency), cx, 40.0).ok();

    match game.mode() {
        Mode::Evolving => {
            ctx.set_fill_style_str(&format!("rgba(255,215,0,{})", game.evolution_alpha()));
            ctx.fill_rect(0.0, 0.0, w, h);
            ctx.set_fill_style_str("#111");
            ctx.set_font("900 40px Inter");
            ctx.fill_text("KOLBASA EVOLVING", cx, cy).ok();
        }
        Mode::Idle => draw_idle(ctx, game, layout, images),
        Mode::BossFight => {
            if let Some(boss) = &game.boss {
                draw_boss(ctx, game, boss, layout, images);
            }
        }
    }

    ctx.set_text_align("left");
    ctx.set_font("700 16px Inter");
    ctx.set_fill_style_str(if game.hover.save { "#000" } else { "#555" });
    ctx.fill_text("SAVE", 20.0, h - 20.0).ok();
    ctx.set_fill_style_str(if game.hover.reset { "#000" } else { "#555" });
    ctx.fill_text("RESET", 140.0, h - 20.0).ok();
}

fn draw_idle(ctx: &CanvasRenderingContext2d, game: &Game, layout: &Layout, images: &Images) {
    let r = layout.character.radius;
    ctx.save();
    ctx.translate(layout.center.x, layout.center.y).ok();
    ctx.scale(game.character_scale, game.character_scale).ok();
    if game.hover.character {
        ctx.set_shadow_color("rgba(255,180,0,0.6)");
        ctx.set_shadow_blur(30.0);
    }
    if let Some(img) = images.stage(game.progression.evolution_stage) {
        ctx.draw_image_with_html_image_element_and_dw_and_dh(img, -r, -r, r * 2.0, r * 2.0)
            .ok();
    }
    ctx.restore();

    let b = layout.upgrade_button;
    ctx.set_fill_style_str(if game.hover.upgrade { "#eee" } else { "#fff" });
    ctx.fill_rect(b.x, b.y, b.w, b.h);
    ctx.set_fill_style_str(if game.progression.can_afford_upgrade() { "#111" } else { "#999" });
    ctx.set_font("700 18px Inter");
    let label = format!("Upgrade Click +1 ({})", game.progression.upgrade_cost);
    ctx.fill_text(&label, b.center_x(), b.y + 30.0).ok();
}

fn draw_boss(
    ctx: &CanvasRenderingContext2d,
    game: &Game,
    boss: &BossEncounter,
    layout: &Layout,
    images: &Images,
) {
    let (cx, cy) = (layout.center.x, layout.center.y);
    let r = layout.boss_radius;
    if let Some(img) = images.bosses.get(boss.portrait.index()) {
        ctx.draw_image_with_html_image_element_and_dw_and_dh(img, cx - r, cy - r, r * 2.0, r * 2.0)
            .ok();
    }
    ctx.set_fill_style_str("#111");
    ctx.set_font("900 34px Inter");
    ctx.fill_text("LUKRECIUS", cx, cy - r - 20.0).ok();

    // health bar
    ctx.set_fill_style_str("#ddd");
    ctx.fill_rect(cx - 200.0, cy + r + 20.0, 400.0, 14.0);
    ctx.set_fill_style_str("#c62828");
    ctx.fill_rect(cx - 200.0, cy + r + 20.0, 400.0 * boss.hp_fraction(), 14.0);

    let target = boss.target_circle(layout, &game.cfg);
    ctx.begin_path();
    ctx.arc(
        target.center.x,
        target.center.y,
        boss.drawn_radius(&game.cfg).max(0.0),
        0.0,
        std::f64::consts::PI * 2.0,
    )
    .ok();
    ctx.set_fill_style_str("red");
    ctx.fill();
}
