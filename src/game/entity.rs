//! Game entities: the player ship, descending aliens, and bullets.
//!
//! Each entity is a plain struct carrying a shared `Bounds` component plus
//! its kind-specific velocity field. Movement mutates only the entity's own
//! position; lifecycle decisions (removal, recycling) belong to the engine.

/// Sprite sizes and speeds, in playfield pixels.
pub const PLAYER_WIDTH: i32 = 50;
pub const PLAYER_HEIGHT: i32 = 50;
pub const ALIEN_WIDTH: i32 = 40;
pub const ALIEN_HEIGHT: i32 = 40;
pub const BULLET_WIDTH: i32 = 3;
pub const BULLET_HEIGHT: i32 = 15;

/// Upward bullet speed per step.
pub const BULLET_SPEED: i32 = 10;

/// Gap between the player's bottom edge and the playfield's bottom edge.
pub const PLAYER_BOTTOM_MARGIN: i32 = 10;

/// An axis-aligned bounding box, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Strict overlap test: boxes that merely touch edges do not collide
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }
}

/// The player ship: moves horizontally along the bottom of the playfield
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub bounds: Bounds,
    /// Horizontal velocity applied on each advance; set by the chosen action
    pub speed_x: i32,
}

impl Player {
    /// Create a player centered horizontally, resting just above the bottom edge
    pub fn new(field_width: i32, field_height: i32) -> Self {
        Self {
            bounds: Bounds::new(
                field_width / 2 - PLAYER_WIDTH / 2,
                field_height - PLAYER_BOTTOM_MARGIN - PLAYER_HEIGHT,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            speed_x: 0,
        }
    }

    /// Apply velocity, then clamp x to `[0, field_width - width]`
    pub fn advance(&mut self, field_width: i32) {
        self.bounds.x += self.speed_x;
        self.bounds.x = self.bounds.x.clamp(0, field_width - self.bounds.width);
    }

    /// Spawn a bullet whose bottom-center sits at the player's top-center
    pub fn shoot(&self) -> Bullet {
        Bullet::new(self.bounds.center_x(), self.bounds.top())
    }
}

/// A descending alien with a per-instance fall speed
#[derive(Debug, Clone, PartialEq)]
pub struct Alien {
    pub bounds: Bounds,
    pub speed_y: i32,
}

impl Alien {
    pub fn new(x: i32, y: i32, speed_y: i32) -> Self {
        Self {
            bounds: Bounds::new(x, y, ALIEN_WIDTH, ALIEN_HEIGHT),
            speed_y,
        }
    }

    pub fn advance(&mut self) {
        self.bounds.y += self.speed_y;
    }

    /// True once the alien's top edge has passed below the playfield
    pub fn has_left_field(&self, field_height: i32) -> bool {
        self.bounds.top() > field_height
    }
}

/// A player bullet traveling straight up at fixed speed
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub bounds: Bounds,
    pub speed_y: i32,
}

impl Bullet {
    /// Create a bullet with its bottom edge at `bottom_y`, centered on `center_x`
    pub fn new(center_x: i32, bottom_y: i32) -> Self {
        Self {
            bounds: Bounds::new(
                center_x - BULLET_WIDTH / 2,
                bottom_y - BULLET_HEIGHT,
                BULLET_WIDTH,
                BULLET_HEIGHT,
            ),
            speed_y: -BULLET_SPEED,
        }
    }

    pub fn advance(&mut self) {
        self.bounds.y += self.speed_y;
    }

    /// True once the bullet's bottom edge has moved above the playfield
    pub fn expired(&self) -> bool {
        self.bounds.bottom() < 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_detection() {
        let a = Bounds::new(0, 0, 10, 10);
        let b = Bounds::new(5, 5, 10, 10);
        let c = Bounds::new(10, 0, 10, 10); // touching edge
        let d = Bounds::new(20, 20, 10, 10);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn test_player_starts_centered() {
        let player = Player::new(800, 600);
        assert_eq!(player.bounds.center_x(), 400);
        assert_eq!(player.bounds.bottom(), 590);
        assert_eq!(player.speed_x, 0);
    }

    #[test]
    fn test_player_clamps_at_edges() {
        let mut player = Player::new(800, 600);

        player.speed_x = -5;
        for _ in 0..200 {
            player.advance(800);
        }
        assert_eq!(player.bounds.x, 0);

        player.speed_x = 5;
        for _ in 0..400 {
            player.advance(800);
        }
        assert_eq!(player.bounds.x, 800 - PLAYER_WIDTH);
    }

    #[test]
    fn test_bullet_spawns_at_player_top_center() {
        let player = Player::new(800, 600);
        let bullet = player.shoot();

        assert_eq!(bullet.bounds.center_x(), player.bounds.center_x());
        assert_eq!(bullet.bounds.bottom(), player.bounds.top());
        assert_eq!(bullet.speed_y, -BULLET_SPEED);
    }

    #[test]
    fn test_bullet_expires_above_field() {
        let mut bullet = Bullet::new(100, 20);
        assert!(!bullet.expired());

        // Bottom edge sits at exactly 0 after two steps, which still counts
        // as on-field; one more step clears it
        bullet.advance();
        bullet.advance();
        assert!(!bullet.expired());

        bullet.advance();
        assert!(bullet.expired());
    }

    #[test]
    fn test_alien_falls_and_leaves_field() {
        let mut alien = Alien::new(100, 590, 2);
        assert!(!alien.has_left_field(600));

        for _ in 0..6 {
            alien.advance();
        }
        assert_eq!(alien.bounds.y, 602);
        assert!(alien.has_left_field(600));
    }
}
