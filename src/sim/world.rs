//! Arcade physics stage
//!
//! `Stage` is the set of sprite/physics primitives the controllers use.
//! `ArcadeWorld` implements it with simple arcade rules:
//! - Constant gravity on bodies that allow it
//! - Explicit Euler integration per fixed step
//! - World-bounds clamping for the player
//! - Obstacles are culled once fully off the left edge

use glam::Vec2;

use super::collision::Aabb;
use crate::consts::{OBSTACLE_TEXTURE, PLAYER_TEXTURE, WORLD_HEIGHT, WORLD_WIDTH};

pub type EntityId = u32;

/// Body categories (the two collision sets)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Player,
    Obstacle,
}

impl BodyKind {
    /// Unscaled texture size
    pub fn texture_size(&self) -> Vec2 {
        let (w, h) = match self {
            BodyKind::Player => PLAYER_TEXTURE,
            BodyKind::Obstacle => OBSTACLE_TEXTURE,
        };
        Vec2::new(w, h)
    }
}

/// What the renderer needs to draw a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub id: EntityId,
    pub kind: BodyKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub tint: Option<u32>,
}

/// Rendering/physics primitives used by the controllers
pub trait Stage {
    /// Create a sprite centered at `pos`
    fn spawn(&mut self, kind: BodyKind, pos: Vec2, scale: f32) -> EntityId;
    /// Position, or None once the body is gone
    fn position(&self, id: EntityId) -> Option<Vec2>;
    fn set_position(&mut self, id: EntityId, pos: Vec2);
    fn velocity(&self, id: EntityId) -> Option<Vec2>;
    fn set_velocity_x(&mut self, id: EntityId, vx: f32);
    fn set_velocity_y(&mut self, id: EntityId, vy: f32);
    fn set_allow_gravity(&mut self, id: EntityId, allow: bool);
    fn set_tint(&mut self, id: EntityId, tint: Option<u32>);

    /// Freeze or unfreeze the whole simulation
    fn pause(&mut self);
    fn resume(&mut self);
    fn is_paused(&self) -> bool;

    /// Advance the simulation by `dt` seconds
    fn step(&mut self, dt: f32);
    /// Whether the player overlaps any obstacle
    fn player_hit(&self) -> bool;

    fn scroll_background(&mut self, dx: f32);
    fn background_offset(&self) -> f32;

    /// Remove every body and reset the background
    fn clear(&mut self);
    fn sprites(&self) -> Vec<Sprite>;
}

/// A simulated body
#[derive(Debug, Clone)]
struct Body {
    id: EntityId,
    kind: BodyKind,
    pos: Vec2,
    vel: Vec2,
    size: Vec2,
    allow_gravity: bool,
    collide_world_bounds: bool,
    tint: Option<u32>,
}

impl Body {
    fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }
}

/// Deterministic arcade physics world
#[derive(Debug, Clone)]
pub struct ArcadeWorld {
    /// Bodies sorted by id
    bodies: Vec<Body>,
    gravity: f32,
    bounds: Aabb,
    paused: bool,
    background_x: f32,
    next_id: EntityId,
}

impl ArcadeWorld {
    pub fn new(gravity: f32) -> Self {
        Self {
            bodies: Vec::new(),
            gravity,
            bounds: Aabb {
                min: Vec2::ZERO,
                max: Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
            },
            paused: false,
            background_x: 0.0,
            next_id: 1,
        }
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    fn body(&self, id: EntityId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    fn body_mut(&mut self, id: EntityId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }
}

impl Stage for ArcadeWorld {
    fn spawn(&mut self, kind: BodyKind, pos: Vec2, scale: f32) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        self.bodies.push(Body {
            id,
            kind,
            pos,
            vel: Vec2::ZERO,
            size: kind.texture_size() * scale,
            allow_gravity: true,
            collide_world_bounds: kind == BodyKind::Player,
            tint: None,
        });
        id
    }

    fn position(&self, id: EntityId) -> Option<Vec2> {
        self.body(id).map(|b| b.pos)
    }

    fn set_position(&mut self, id: EntityId, pos: Vec2) {
        if let Some(b) = self.body_mut(id) {
            b.pos = pos;
        }
    }

    fn velocity(&self, id: EntityId) -> Option<Vec2> {
        self.body(id).map(|b| b.vel)
    }

    fn set_velocity_x(&mut self, id: EntityId, vx: f32) {
        if let Some(b) = self.body_mut(id) {
            b.vel.x = vx;
        }
    }

    fn set_velocity_y(&mut self, id: EntityId, vy: f32) {
        if let Some(b) = self.body_mut(id) {
            b.vel.y = vy;
        }
    }

    fn set_allow_gravity(&mut self, id: EntityId, allow: bool) {
        if let Some(b) = self.body_mut(id) {
            b.allow_gravity = allow;
        }
    }

    fn set_tint(&mut self, id: EntityId, tint: Option<u32>) {
        if let Some(b) = self.body_mut(id) {
            b.tint = tint;
        }
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn step(&mut self, dt: f32) {
        if self.paused {
            return;
        }

        let bounds = self.bounds;
        for body in &mut self.bodies {
            if body.allow_gravity {
                body.vel.y += self.gravity * dt;
            }
            body.pos += body.vel * dt;

            if body.collide_world_bounds {
                let offset = body.aabb().clamp_offset(&bounds);
                if offset.x != 0.0 {
                    body.pos.x += offset.x;
                    body.vel.x = 0.0;
                }
                if offset.y != 0.0 {
                    body.pos.y += offset.y;
                    body.vel.y = 0.0;
                }
            }
        }

        // Obstacles that left the play area are gone for good
        self.bodies
            .retain(|b| b.kind != BodyKind::Obstacle || b.pos.x + b.size.x / 2.0 >= 0.0);
    }

    fn player_hit(&self) -> bool {
        self.bodies
            .iter()
            .filter(|b| b.kind == BodyKind::Player)
            .any(|player| {
                let aabb = player.aabb();
                self.bodies
                    .iter()
                    .filter(|b| b.kind == BodyKind::Obstacle)
                    .any(|o| aabb.overlaps(&o.aabb()))
            })
    }

    fn scroll_background(&mut self, dx: f32) {
        self.background_x += dx;
    }

    fn background_offset(&self) -> f32 {
        self.background_x
    }

    fn clear(&mut self) {
        self.bodies.clear();
        self.background_x = 0.0;
    }

    fn sprites(&self) -> Vec<Sprite> {
        self.bodies
            .iter()
            .map(|b| Sprite {
                id: b.id,
                kind: b.kind,
                pos: b.pos,
                size: b.size,
                tint: b.tint,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    #[test]
    fn test_gravity_pulls_down() {
        let mut world = ArcadeWorld::new(500.0);
        let id = world.spawn(BodyKind::Player, Vec2::new(100.0, 300.0), 0.2);
        for _ in 0..60 {
            world.step(SIM_DT);
        }
        let pos = world.position(id).unwrap();
        assert!(pos.y > 300.0);
        assert!(world.velocity(id).unwrap().y > 0.0);
    }

    #[test]
    fn test_player_stays_in_bounds() {
        let mut world = ArcadeWorld::new(500.0);
        let id = world.spawn(BodyKind::Player, Vec2::new(100.0, 300.0), 0.2);
        for _ in 0..1200 {
            world.step(SIM_DT);
        }
        let pos = world.position(id).unwrap();
        // 250 * 0.2 = 50 tall, so the center rests 25 above the floor
        assert!((pos.y - 575.0).abs() < 1e-3);
        assert_eq!(world.velocity(id).unwrap().y, 0.0);

        world.set_velocity_y(id, -200.0);
        world.set_position(id, Vec2::new(100.0, 20.0));
        world.step(SIM_DT);
        assert!((world.position(id).unwrap().y - 25.0).abs() < 1e-3);
    }

    #[test]
    fn test_pause_freezes() {
        let mut world = ArcadeWorld::new(500.0);
        let id = world.spawn(BodyKind::Player, Vec2::new(100.0, 300.0), 0.2);
        world.pause();
        world.step(SIM_DT);
        assert_eq!(world.position(id), Some(Vec2::new(100.0, 300.0)));
        world.resume();
        world.step(SIM_DT);
        assert_ne!(world.position(id), Some(Vec2::new(100.0, 300.0)));
    }

    #[test]
    fn test_obstacle_culled_offscreen() {
        let mut world = ArcadeWorld::new(500.0);
        let id = world.spawn(BodyKind::Obstacle, Vec2::new(5.0, 300.0), 0.15);
        world.set_allow_gravity(id, false);
        world.set_velocity_x(id, -1200.0);
        world.step(SIM_DT);
        assert!(world.position(id).is_some());
        world.step(SIM_DT);
        world.step(SIM_DT);
        world.step(SIM_DT);
        assert!(world.position(id).is_none());
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn test_player_hit() {
        let mut world = ArcadeWorld::new(0.0);
        world.spawn(BodyKind::Player, Vec2::new(100.0, 300.0), 0.2);
        let obstacle = world.spawn(BodyKind::Obstacle, Vec2::new(400.0, 300.0), 0.15);
        assert!(!world.player_hit());
        world.set_position(obstacle, Vec2::new(140.0, 310.0));
        assert!(world.player_hit());
    }

    #[test]
    fn test_clear_resets_background() {
        let mut world = ArcadeWorld::new(500.0);
        world.spawn(BodyKind::Player, Vec2::new(100.0, 300.0), 0.2);
        world.scroll_background(2.5);
        assert_eq!(world.background_offset(), 2.5);
        world.clear();
        assert_eq!(world.background_offset(), 0.0);
        assert!(world.sprites().is_empty());
    }
}
