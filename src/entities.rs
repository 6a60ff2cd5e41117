/// All game entity types — pure data, no logic.

// ── Enemy kinds ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Invader,
    Alien,
    Robot,
    Ogre,
    Skull,
}

impl EnemyKind {
    /// Every kind, in ascending score order.
    pub const ALL: [EnemyKind; 5] = [
        EnemyKind::Invader,
        EnemyKind::Alien,
        EnemyKind::Robot,
        EnemyKind::Ogre,
        EnemyKind::Skull,
    ];

    /// Score awarded when a bullet destroys this kind.
    pub fn points(self) -> u32 {
        match self {
            EnemyKind::Invader => 10,
            EnemyKind::Alien => 15,
            EnemyKind::Robot => 20,
            EnemyKind::Ogre | EnemyKind::Skull => 25,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            EnemyKind::Invader => "👾",
            EnemyKind::Alien => "👽",
            EnemyKind::Robot => "🤖",
            EnemyKind::Ogre => "👹",
            EnemyKind::Skull => "☠",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

// ── Collision capability ──────────────────────────────────────────────────────

/// Anything that can take part in a hit test.  Every body is treated as a
/// circle of radius `half_extent` around `center`.
pub trait Collider {
    fn center(&self) -> (f32, f32);
    fn half_extent(&self) -> f32;
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    /// Fixed for the whole session.
    pub y: f32,
    pub size: f32,
    pub speed: f32,
}

impl Collider for Player {
    fn center(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn half_extent(&self) -> f32 {
        self.size / 2.0
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A player bullet.  `(x, y)` is the top-centre of the bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    /// Half the bar's width: the bar is hit-tested as a circle.
    pub half_extent: f32,
}

impl Collider for Bullet {
    fn center(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn half_extent(&self) -> f32 {
        self.half_extent
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub kind: EnemyKind,
    pub size: f32,
    /// Downward pixels per frame, fixed at spawn.
    pub speed: f32,
    pub half_extent: f32,
}

impl Collider for Enemy {
    fn center(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn half_extent(&self) -> f32 {
        self.half_extent
    }
}

// ── Background ────────────────────────────────────────────────────────────────

/// Decorative only: never collides, never destroyed.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed: f32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so the pure update function can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub stars: Vec<Star>,
    pub score: u32,
    pub lives: u32,
    pub status: GameStatus,
    /// Score captured at the moment the last life was lost.
    pub final_score: Option<u32>,
    /// Timestamp of the last shot; `None` until the first shot of a session.
    pub last_shot_ms: Option<u64>,
    pub frame: u64,
    pub width: f32,
    pub height: f32,
}

impl GameState {
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }
}
