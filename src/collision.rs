//! Collision rules between entity collections.
//!
//! Each rule finds the overlapping pairs first, then removes the hit
//! entities from their owning `Vec` by index, so nothing is removed twice
//! and no later rule sees an entity an earlier rule destroyed.

use crate::entities::{GameState, Reaction};
use crate::geometry::Rect;
use crate::spawn::{explosion, BOSS_EXPLOSION_LIFE, FLAME_EXPLOSION_LIFE};

/// Drop every element whose index is in `dead`.
fn remove_indices<T>(items: &mut Vec<T>, dead: &[usize]) {
    if dead.is_empty() {
        return;
    }
    let mut i = 0;
    items.retain(|_| {
        let keep = !dead.contains(&i);
        i += 1;
        keep
    });
}

/// Indices of `targets` overlapping any of `shots`, and of the `shots` used.
fn group_hits(targets: &[Rect], shots: &[Rect]) -> (Vec<usize>, Vec<usize>) {
    let mut hit_targets = Vec::new();
    let mut used_shots = Vec::new();
    for (ti, target) in targets.iter().enumerate() {
        let mut hit = false;
        for (si, shot) in shots.iter().enumerate() {
            if target.colliderect(shot) {
                hit = true;
                if !used_shots.contains(&si) {
                    used_shots.push(si);
                }
            }
        }
        if hit {
            hit_targets.push(ti);
        }
    }
    (hit_targets, used_shots)
}

/// Player touching a boss: the boss is removed and the player looks sad.
///
/// Returns the number of bosses removed.
pub fn player_vs_bosses(state: &mut GameState) -> usize {
    let player = state.player.rect;
    let dead: Vec<usize> = state
        .bosses
        .iter()
        .enumerate()
        .filter(|(_, b)| player.colliderect(&b.rect))
        .map(|(i, _)| i)
        .collect();
    if !dead.is_empty() {
        log::debug!("player rammed {} boss(es)", dead.len());
        state.player.reaction = Some(Reaction::Sad);
    }
    remove_indices(&mut state.bosses, &dead);
    dead.len()
}

/// Beams hitting a boss: both go, and the boss explodes where it stood.
///
/// Returns the number of bosses destroyed.
pub fn bosses_vs_beams(state: &mut GameState) -> usize {
    let bosses: Vec<Rect> = state.bosses.iter().map(|b| b.rect).collect();
    let beams: Vec<Rect> = state.beams.iter().map(|b| b.rect).collect();
    let (dead_bosses, used_beams) = group_hits(&bosses, &beams);
    if dead_bosses.is_empty() {
        return 0;
    }

    for &i in &dead_bosses {
        state.explosions.push(explosion(&bosses[i], BOSS_EXPLOSION_LIFE));
    }
    log::debug!(
        "{} boss(es) destroyed by {} beam(s)",
        dead_bosses.len(),
        used_beams.len()
    );
    state.player.reaction = Some(Reaction::Happy);
    remove_indices(&mut state.bosses, &dead_bosses);
    remove_indices(&mut state.beams, &used_beams);
    dead_bosses.len()
}

/// Player touching a flame.  Returns true when the player was hit.
pub fn player_vs_flames(state: &mut GameState) -> bool {
    let player = state.player.rect;
    let dead: Vec<usize> = state
        .flames
        .iter()
        .enumerate()
        .filter(|(_, f)| player.colliderect(&f.rect))
        .map(|(i, _)| i)
        .collect();
    if dead.is_empty() {
        return false;
    }
    state.player.reaction = Some(Reaction::Sad);
    remove_indices(&mut state.flames, &dead);
    true
}

/// Beams shooting down flames.  Returns the number of flames destroyed.
pub fn flames_vs_beams(state: &mut GameState) -> usize {
    let flames: Vec<Rect> = state.flames.iter().map(|f| f.rect).collect();
    let beams: Vec<Rect> = state.beams.iter().map(|b| b.rect).collect();
    let (dead_flames, used_beams) = group_hits(&flames, &beams);

    for &i in &dead_flames {
        state.explosions.push(explosion(&flames[i], FLAME_EXPLOSION_LIFE));
    }
    if !dead_flames.is_empty() {
        log::debug!("{} flame(s) shot down", dead_flames.len());
    }
    remove_indices(&mut state.flames, &dead_flames);
    remove_indices(&mut state.beams, &used_beams);
    dead_flames.len()
}
