use super::entity::{Alien, Bullet, Player};

/// What collision resolution found and applied this step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionReport {
    /// Number of aliens that struck the player
    pub player_hits: u32,
    /// Number of (bullet, alien) pairs destroyed by mutual destruction
    pub kills: u32,
}

/// Detect and apply player-alien and bullet-alien overlaps.
///
/// Player-alien: every alien overlapping the player counts one hit;
/// `remove_colliding_alien` decides whether those aliens are also destroyed
/// or persist (and keep hitting on later steps).
///
/// Bullet-alien: an all-pairs sweep. Every overlapping pair is resolved,
/// with no single-hit-only restriction: a bullet crossing two aliens
/// destroys both and counts two kills.
pub fn resolve(
    player: &Player,
    aliens: &mut Vec<Alien>,
    bullets: &mut Vec<Bullet>,
    remove_colliding_alien: bool,
) -> CollisionReport {
    let player_hits = if remove_colliding_alien {
        let before = aliens.len();
        aliens.retain(|a| !a.bounds.overlaps(&player.bounds));
        (before - aliens.len()) as u32
    } else {
        aliens
            .iter()
            .filter(|a| a.bounds.overlaps(&player.bounds))
            .count() as u32
    };

    let mut kills = 0u32;
    let mut dead_bullets = vec![false; bullets.len()];
    let mut dead_aliens = vec![false; aliens.len()];

    for (bi, bullet) in bullets.iter().enumerate() {
        for (ai, alien) in aliens.iter().enumerate() {
            if bullet.bounds.overlaps(&alien.bounds) {
                dead_bullets[bi] = true;
                dead_aliens[ai] = true;
                kills += 1;
            }
        }
    }

    let mut i = 0;
    bullets.retain(|_| {
        let dead = dead_bullets[i];
        i += 1;
        !dead
    });
    let mut i = 0;
    aliens.retain(|_| {
        let dead = dead_aliens[i];
        i += 1;
        !dead
    });

    CollisionReport { player_hits, kills }
}
