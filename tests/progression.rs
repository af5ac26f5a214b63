mod common;

use common::*;
use kolbasa_clicker::audio::{Cue, NullAudio};
use kolbasa_clicker::layout::Point;
use kolbasa_clicker::model::{ClickOutcome, Mode};

#[test]
fn hundred_clicks_make_upgrade_affordable() {
    let mut game = fresh_game();
    let l = layout(&game);
    let mut rng = Scripted::new(&[0.5]);
    for _ in 0..99 {
        game.click(l.center, &l, &mut NullAudio, &mut rng);
    }
    assert!(!game.progression.can_afford_upgrade());
    assert_eq!(game.click(upgrade_point(&l), &l, &mut NullAudio, &mut rng), ClickOutcome::Nothing);
    assert_eq!(game.progression.currency, 99);

    game.click(l.center, &l, &mut NullAudio, &mut rng);
    assert_eq!(game.progression.currency, 100);
    assert!(game.progression.can_afford_upgrade());
    assert_eq!(game.click(upgrade_point(&l), &l, &mut NullAudio, &mut rng), ClickOutcome::Upgraded);
    assert_eq!(game.progression.currency, 0);
    assert_eq!(game.progression.click_power, 2);
    assert_eq!(game.progression.upgrade_cost, 180);
}

#[test]
fn currency_is_sum_of_click_power_in_effect() {
    let mut game = fresh_game();
    let l = layout(&game);
    let mut rng = Scripted::new(&[0.3, 0.8]);
    let mut expected_total = 0u64;
    let mut spent = 0u64;
    for i in 0..400 {
        if i % 50 == 49 && game.progression.can_afford_upgrade() {
            spent += game.progression.upgrade_cost;
            game.click(upgrade_point(&l), &l, &mut NullAudio, &mut rng);
        }
        expected_total += game.progression.click_power;
        game.click(l.center, &l, &mut NullAudio, &mut rng);
        finish_evolution(&mut game, &mut rng);
        assert_eq!(game.progression.currency + spent, expected_total);
    }
    assert!(game.progression.click_power > 1);
}

#[test]
fn crossing_first_milestone_starts_evolution() {
    let mut game = game_with(|p| p.currency = 999);
    let l = layout(&game);
    let mut audio = RecordingAudio::default();
    let mut rng = Scripted::new(&[0.5]);

    let outcome = game.click(l.center, &l, &mut audio, &mut rng);
    assert_eq!(outcome, ClickOutcome::Harvested { evolved: true, boss_spawned: false });
    assert_eq!(game.progression.evolution_stage, 1);
    assert_eq!(game.mode(), Mode::Evolving);
    assert_eq!(game.evolution_timer, 360);
    assert_eq!(audio.played, vec![Cue::Click, Cue::Evolve]);
    assert!(game.shake.magnitude > 0.0);

    // character and upgrade are inert until the banner ends
    game.progression.currency = 5000;
    let before = game.progression.clone();
    assert_eq!(game.click(l.center, &l, &mut audio, &mut rng), ClickOutcome::Nothing);
    assert_eq!(game.click(upgrade_point(&l), &l, &mut audio, &mut rng), ClickOutcome::Nothing);
    assert_eq!(game.progression, before);

    finish_evolution(&mut game, &mut rng);
    assert_eq!(game.mode(), Mode::Idle);
    assert!(game.evolution_alpha() == 0.0);
}

#[test]
fn one_stage_per_check_even_after_big_jump() {
    let mut game = game_with(|p| {
        p.currency = 9_000;
        p.boss_threshold = u64::MAX;
    });
    let l = layout(&game);
    let mut rng = Scripted::new(&[0.5]);
    let mut stages = vec![];
    for _ in 0..10 {
        game.click(l.center, &l, &mut NullAudio, &mut rng);
        finish_evolution(&mut game, &mut rng);
        stages.push(game.progression.evolution_stage);
    }
    assert_eq!(stages[..4], [1, 2, 3, 3]);
    assert!(stages.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*stages.last().unwrap(), 3);

    game.progression.currency = 10_000;
    game.click(l.center, &l, &mut NullAudio, &mut rng);
    finish_evolution(&mut game, &mut rng);
    game.click(l.center, &l, &mut NullAudio, &mut rng);
    assert_eq!(game.progression.evolution_stage, 4);
    assert_eq!(game.evolution_timer, 0);
}

#[test]
fn click_outside_every_region_changes_nothing() {
    let mut game = game_with(|p| p.currency = 250);
    let l = layout(&game);
    let mut rng = Scripted::new(&[0.5]);
    let before = game.progression.clone();
    let outcome = game.click(Point::new(l.width - 5.0, 5.0), &l, &mut NullAudio, &mut rng);
    assert_eq!(outcome, ClickOutcome::Nothing);
    assert_eq!(game.progression, before);
    assert!(game.boss.is_none());
    assert_eq!(game.evolution_timer, 0);
    assert_eq!(game.shake.magnitude, 0.0);
}

#[test]
fn first_click_unlocks_audio() {
    let mut game = fresh_game();
    let l = layout(&game);
    let mut audio = RecordingAudio::default();
    let mut rng = Scripted::new(&[0.5]);
    assert!(!audio.unlocked);
    game.click(Point::new(l.width - 5.0, 5.0), &l, &mut audio, &mut rng);
    assert!(audio.unlocked);
    game.click(l.center, &l, &mut audio, &mut rng);
    assert_eq!(audio.played, vec![Cue::Click]);
}

#[test]
fn hover_drives_cursor_only() {
    let mut game = fresh_game();
    let l = layout(&game);
    let before = game.progression.clone();
    assert!(game.pointer_move(l.center, &l));
    assert!(game.hover.character);
    assert!(game.pointer_move(upgrade_point(&l), &l));
    assert!(game.hover.upgrade && !game.hover.character);
    assert!(game.pointer_move(Point::new(50.0, l.height - 10.0), &l));
    assert!(game.hover.save);
    assert!(!game.pointer_move(Point::new(l.width - 5.0, 5.0), &l));
    assert_eq!(game.progression, before);
}
