/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, the tunables and an RNG handle) and
/// returns a brand-new `GameState`.  Side effects are limited to the
/// injected RNG and log output.

use log::{debug, info};
use rand::Rng;

use crate::config::Config;
use crate::entities::{
    Bullet, Collider, Enemy, EnemyKind, GameState, GameStatus, Player, Star,
};
use crate::input::{Control, InputTracker};

// ── Constructors ─────────────────────────────────────────────────────────────

fn new_player(config: &Config) -> Player {
    Player {
        x: config.width / 2.0,
        y: config.height - config.player_bottom_offset,
        size: config.player_size,
        speed: config.player_speed,
    }
}

/// Scatter the background star pool over the whole field.
pub fn new_star_field(config: &Config, rng: &mut impl Rng) -> Vec<Star> {
    (0..config.star_count)
        .map(|_| Star {
            x: rng.gen_range(0.0..config.width),
            y: rng.gen_range(0.0..config.height),
            radius: rng.gen_range(1.0..3.0),
            speed: rng.gen_range(1.0..4.0),
        })
        .collect()
}

/// Build the initial game state for a fresh session.
pub fn init_state(config: &Config, rng: &mut impl Rng) -> GameState {
    GameState {
        player: new_player(config),
        bullets: Vec::new(),
        enemies: Vec::new(),
        stars: new_star_field(config, rng),
        score: 0,
        lives: config.starting_lives,
        status: GameStatus::Running,
        final_score: None,
        last_shot_ms: None,
        frame: 0,
        width: config.width,
        height: config.height,
    }
}

/// Reset score, lives, status, player and the bullet/enemy lists.  The star
/// field is decoration, not session state, so it keeps scrolling untouched.
pub fn restart(state: &GameState, config: &Config) -> GameState {
    GameState {
        player: new_player(config),
        bullets: Vec::new(),
        enemies: Vec::new(),
        score: 0,
        lives: config.starting_lives,
        status: GameStatus::Running,
        final_score: None,
        last_shot_ms: None,
        frame: 0,
        ..state.clone()
    }
}

/// Build one enemy just above the top edge.  Only the RNG is consulted.
pub fn spawn_enemy(config: &Config, rng: &mut impl Rng) -> Enemy {
    let kind = EnemyKind::ALL[rng.gen_range(0..EnemyKind::ALL.len())];
    let x = rng.gen_range(config.enemy_spawn_inset..config.width - config.enemy_spawn_inset);
    let speed = rng.gen_range(config.enemy_min_speed..config.enemy_max_speed);
    Enemy {
        x,
        y: config.enemy_spawn_y,
        kind,
        size: config.enemy_size,
        speed,
        half_extent: config.enemy_size / 2.0,
    }
}

// ── Collision ────────────────────────────────────────────────────────────────

/// Circle-vs-circle overlap.  Bullets are bars but are tested as circles of
/// diameter `width`, so a hit needs the bullet's top-centre near the target.
pub fn collides(a: &impl Collider, b: &impl Collider) -> bool {
    let (ax, ay) = a.center();
    let (bx, by) = b.center();
    let dx = ax - bx;
    let dy = ay - by;
    (dx * dx + dy * dy).sqrt() < a.half_extent() + b.half_extent()
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_player_left(state: &GameState) -> GameState {
    let p = &state.player;
    let new_x = (p.x - p.speed).max(p.size / 2.0);
    GameState {
        player: Player { x: new_x, ..p.clone() },
        ..state.clone()
    }
}

pub fn move_player_right(state: &GameState) -> GameState {
    let p = &state.player;
    let new_x = (p.x + p.speed).min(state.width - p.size / 2.0);
    GameState {
        player: Player { x: new_x, ..p.clone() },
        ..state.clone()
    }
}

/// Fire from the muzzle if the cooldown has elapsed since the last shot.
/// The very first shot of a session is never gated.
pub fn player_shoot(state: &GameState, config: &Config, now_ms: u64) -> GameState {
    let ready = match state.last_shot_ms {
        None => true,
        Some(last) => now_ms.saturating_sub(last) > config.shoot_delay_ms,
    };
    if !ready {
        return state.clone();
    }

    let p = &state.player;
    let mut bullets = state.bullets.clone();
    bullets.push(Bullet {
        x: p.x,
        y: p.y - p.size / 2.0,
        speed: config.bullet_speed,
        width: config.bullet_width,
        height: config.bullet_height,
        half_extent: config.bullet_width / 2.0,
    });
    GameState {
        bullets,
        last_shot_ms: Some(now_ms),
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame at absolute time `now_ms`.  All
/// randomness comes through `rng` so callers control determinism.
///
/// A state that is already over is returned unchanged.
pub fn tick(
    state: &GameState,
    input: &InputTracker,
    config: &Config,
    now_ms: u64,
    rng: &mut impl Rng,
) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    // ── 1. Player movement ───────────────────────────────────────────────────
    let mut next = state.clone();
    if input.is_held(Control::MoveLeft) {
        next = move_player_left(&next);
    }
    if input.is_held(Control::MoveRight) {
        next = move_player_right(&next);
    }

    // ── 2. Shooting ──────────────────────────────────────────────────────────
    if input.is_held(Control::Fire) {
        next = player_shoot(&next, config, now_ms);
    }

    // ── 3 + 4. Bullets: advance, drop off-screen, hit enemies ────────────────
    // Newest bullet first and newest enemy first, so overlapping shots
    // resolve the same way every frame.
    let mut kept_bullets: Vec<Bullet> = Vec::with_capacity(next.bullets.len());
    for mut bullet in next.bullets.drain(..).rev() {
        bullet.y -= bullet.speed;
        if bullet.y < 0.0 {
            continue;
        }
        match next.enemies.iter().rposition(|e| collides(&bullet, e)) {
            Some(hit) => {
                let enemy = next.enemies.remove(hit);
                next.score = next.score.saturating_add(enemy.kind.points());
                debug!(
                    "{:?} destroyed at ({:.0}, {:.0}), score {}",
                    enemy.kind, enemy.x, enemy.y, next.score
                );
            }
            None => kept_bullets.push(bullet),
        }
    }
    kept_bullets.reverse();
    next.bullets = kept_bullets;

    // ── 5 + 6. Enemies: advance, drop off-screen, hit the player ─────────────
    let exit_y = next.height + config.enemy_exit_margin;
    let mut kept_enemies: Vec<Enemy> = Vec::with_capacity(next.enemies.len());
    for mut enemy in next.enemies.drain(..).rev() {
        enemy.y += enemy.speed;
        if enemy.y > exit_y {
            continue;
        }
        if collides(&enemy, &next.player) {
            next.lives = next.lives.saturating_sub(1);
            debug!("player hit by {:?}, {} lives left", enemy.kind, next.lives);
            if next.lives == 0 && next.status == GameStatus::Running {
                next.status = GameStatus::GameOver;
                next.final_score = Some(next.score);
                info!("game over with score {}", next.score);
            }
            continue;
        }
        kept_enemies.push(enemy);
    }
    kept_enemies.reverse();
    next.enemies = kept_enemies;

    // ── 7. Spawn ─────────────────────────────────────────────────────────────
    if rng.gen_bool(config.spawn_chance) {
        let enemy = spawn_enemy(config, rng);
        debug!("spawned {:?} at x={:.0}", enemy.kind, enemy.x);
        next.enemies.push(enemy);
    }

    // ── 8. Starfield ─────────────────────────────────────────────────────────
    next.stars = advance_stars(&next.stars, next.width, next.height, rng);

    next.frame += 1;
    next
}

/// Scroll stars down; anything past the bottom re-enters at the top.
pub fn advance_stars(stars: &[Star], width: f32, height: f32, rng: &mut impl Rng) -> Vec<Star> {
    stars
        .iter()
        .map(|s| {
            let y = s.y + s.speed;
            if y > height {
                Star {
                    x: rng.gen_range(0.0..width),
                    y: 0.0,
                    ..s.clone()
                }
            } else {
                Star { y, ..s.clone() }
            }
        })
        .collect()
}
