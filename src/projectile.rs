use glam::Vec2;
use log::debug;

use crate::{
    error::WorldError,
    geometry,
    properties::{BodyKind, Color, Material, ShapeKind},
    world::{BodyHandle, World},
};

pub const PROJECTILE_RADIUS: f32 = 30.0;
pub const PROJECTILE_MASS: f32 = 10.0;
pub const PROJECTILE_ELASTICITY: f32 = 0.9;
pub const PROJECTILE_FRICTION: f32 = 0.4;

/// Segment from the placed projectile to the pointer, shown while aiming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimLine {
    pub from: Vec2,
    pub to: Vec2,
}

/// Lifecycle of the single interactive projectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectileState {
    /// No projectile in the world.
    Idle,
    /// Pinned in place at `anchor`, waiting to be launched.
    Placed { body: BodyHandle, anchor: Vec2 },
    /// Launched and flying freely. The next press removes it.
    Launched { body: BodyHandle },
}

/// Turns pointer presses into placing, launching and removing a projectile.
///
/// Every press advances the state by one step: `Idle -> Placed -> Launched -> Idle`.
/// A placed projectile can only leave the `Placed` state by being launched.
#[derive(Debug, Clone)]
pub struct ProjectileController {
    state: ProjectileState,
    launch_scale: f32,
}

impl ProjectileController {
    pub fn new(launch_scale: f32) -> Self {
        Self {
            state: ProjectileState::Idle,
            launch_scale,
        }
    }

    pub fn state(&self) -> ProjectileState {
        self.state
    }

    pub fn projectile(&self) -> Option<BodyHandle> {
        match self.state {
            ProjectileState::Idle => None,
            ProjectileState::Placed { body, .. } | ProjectileState::Launched { body } => Some(body),
        }
    }

    pub fn anchor(&self) -> Option<Vec2> {
        match self.state {
            ProjectileState::Placed { anchor, .. } => Some(anchor),
            _ => None,
        }
    }

    /// Only exists while a placed projectile is being aimed.
    pub fn aim_line(&self, pointer: Vec2) -> Option<AimLine> {
        self.anchor().map(|from| AimLine { from, to: pointer })
    }

    pub fn press(&mut self, world: &mut World, pointer: Vec2) -> Result<(), WorldError> {
        let next = match self.state {
            ProjectileState::Idle => {
                let body = spawn_projectile(world, pointer)?;
                ProjectileState::Placed {
                    body,
                    anchor: pointer,
                }
            }
            ProjectileState::Placed { body, anchor } => {
                let impulse = launch_impulse(anchor, pointer, self.launch_scale);
                world.set_body_kind(body, BodyKind::Dynamic)?;
                world.apply_impulse_at_local_point(body, impulse, Vec2::ZERO)?;
                ProjectileState::Launched { body }
            }
            ProjectileState::Launched { body } => {
                world.remove_body(body)?;
                ProjectileState::Idle
            }
        };

        debug!("projectile {:?} -> {:?}", self.state, next);
        self.state = next;
        Ok(())
    }
}

/// Impulse pointing from `anchor` towards `pointer`, proportional to their distance.
pub fn launch_impulse(anchor: Vec2, pointer: Vec2, launch_scale: f32) -> Vec2 {
    let angle = geometry::angle(anchor, pointer);
    let force = geometry::distance(anchor, pointer) * launch_scale;
    Vec2::new(angle.cos() * force, angle.sin() * force)
}

fn spawn_projectile(world: &mut World, position: Vec2) -> Result<BodyHandle, WorldError> {
    let body = world.add_body(BodyKind::Static, position);
    let material = Material::new(PROJECTILE_MASS, PROJECTILE_ELASTICITY, PROJECTILE_FRICTION)
        .color(Color::from_rgba8(255, 0, 0, 100));
    world.add_shape(body, ShapeKind::circle(PROJECTILE_RADIUS), material)?;
    Ok(body)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{scene, world::WorldBuilder};

    fn projectiles(world: &World) -> usize {
        world
            .shapes()
            .filter(|(_, s)| s.kind == ShapeKind::circle(PROJECTILE_RADIUS))
            .count()
    }

    #[test]
    fn test_press_cycle() {
        let mut world = WorldBuilder::new().build();
        let mut controller = ProjectileController::new(50.0);
        assert_eq!(controller.state(), ProjectileState::Idle);

        controller.press(&mut world, Vec2::new(100.0, 100.0)).unwrap();
        let body = controller.projectile().unwrap();
        assert_eq!(
            controller.state(),
            ProjectileState::Placed {
                body,
                anchor: Vec2::new(100.0, 100.0)
            }
        );
        assert_eq!(world.body_kind(body), Some(BodyKind::Static));
        assert_eq!(world.body_count(), 1);
        assert_eq!(projectiles(&world), 1);

        controller.press(&mut world, Vec2::new(150.0, 120.0)).unwrap();
        assert_eq!(controller.state(), ProjectileState::Launched { body });
        assert_eq!(world.body_kind(body), Some(BodyKind::Dynamic));
        assert_eq!(world.body_count(), 1);
        assert_eq!(projectiles(&world), 1);
        assert_eq!(controller.anchor(), None);

        controller.press(&mut world, Vec2::new(500.0, 500.0)).unwrap();
        assert_eq!(controller.state(), ProjectileState::Idle);
        assert_eq!(controller.projectile(), None);
        assert_eq!(world.body_count(), 0);
        assert_eq!(projectiles(&world), 0);
    }

    #[test]
    fn test_projectile_material() {
        let mut world = WorldBuilder::new().build();
        let mut controller = ProjectileController::new(50.0);
        controller.press(&mut world, Vec2::new(10.0, 20.0)).unwrap();

        let body = controller.projectile().unwrap();
        let shape = world.shapes_of(body).next().unwrap();
        assert_eq!(shape.material.mass, 10.0);
        assert_eq!(shape.material.elasticity, 0.9);
        assert_eq!(shape.material.friction, 0.4);
        assert_eq!(shape.material.color, Color::from_rgba8(255, 0, 0, 100));
        assert_eq!(world.body_position(body), Some(Vec2::new(10.0, 20.0)));
    }

    #[test]
    fn test_launch_straight_down() {
        let impulse = launch_impulse(Vec2::new(100.0, 100.0), Vec2::new(100.0, 200.0), 50.0);
        assert!(impulse.x.abs() < 1e-2);
        assert!((impulse.y - 5000.0).abs() < 1e-2);

        let mut world = WorldBuilder::new().build();
        let mut controller = ProjectileController::new(50.0);
        controller.press(&mut world, Vec2::new(100.0, 100.0)).unwrap();
        controller.press(&mut world, Vec2::new(100.0, 200.0)).unwrap();

        let body = controller.projectile().unwrap();
        assert_eq!(world.body_kind(body), Some(BodyKind::Dynamic));
        let vel = world.body_velocity(body).unwrap();
        assert!(vel.x.abs() < 1e-2);
        assert!(vel.y > 0.0);
        // impulse / mass
        assert!((vel.y - 500.0).abs() < 1e-1);
    }

    #[test]
    fn test_launch_without_spin() {
        let mut world = WorldBuilder::new().gravity(Vec2::ZERO).build();
        let mut controller = ProjectileController::new(50.0);
        controller.press(&mut world, Vec2::new(300.0, 300.0)).unwrap();
        controller.press(&mut world, Vec2::new(200.0, 250.0)).unwrap();

        let body = controller.projectile().unwrap();
        for _ in 0..10 {
            world.step();
        }
        assert!(world.body_rotation(body).unwrap().abs() < 1e-4);
        let vel = world.body_velocity(body).unwrap();
        assert!(vel.x < 0.0 && vel.y < 0.0);
    }

    #[test]
    fn test_aim_line_only_while_placed() {
        let mut world = WorldBuilder::new().build();
        let mut controller = ProjectileController::new(50.0);
        let pointer = Vec2::new(42.0, 7.0);
        assert_eq!(controller.aim_line(pointer), None);

        controller.press(&mut world, Vec2::new(1.0, 2.0)).unwrap();
        assert_eq!(
            controller.aim_line(pointer),
            Some(AimLine {
                from: Vec2::new(1.0, 2.0),
                to: pointer
            })
        );

        controller.press(&mut world, pointer).unwrap();
        assert_eq!(controller.aim_line(pointer), None);
    }

    #[test]
    fn test_launch_at_anchor_drops_ball() {
        let mut world = WorldBuilder::new().build();
        let mut controller = ProjectileController::new(50.0);
        let p = Vec2::new(400.0, 400.0);
        controller.press(&mut world, p).unwrap();
        controller.press(&mut world, p).unwrap();

        let body = controller.projectile().unwrap();
        assert_eq!(world.body_velocity(body), Some(Vec2::ZERO));
        world.step();
        assert!(world.body_velocity(body).unwrap().y > 0.0);
    }

    #[test]
    fn test_hard_launch_stays_inside_walls() {
        let (width, height) = (1000.0, 800.0);
        let launches = [
            (Vec2::new(100.0, 400.0), Vec2::new(990.0, 400.0)),
            (Vec2::new(900.0, 400.0), Vec2::new(10.0, 400.0)),
            (Vec2::new(500.0, 700.0), Vec2::new(500.0, 10.0)),
            (Vec2::new(500.0, 100.0), Vec2::new(500.0, 790.0)),
            (Vec2::new(100.0, 100.0), Vec2::new(990.0, 790.0)),
            (Vec2::new(850.0, 450.0), Vec2::new(10.0, 10.0)),
        ];

        for (anchor, pointer) in launches {
            let mut world = WorldBuilder::new().build();
            scene::build_scene(&mut world, width, height).unwrap();
            let mut controller = ProjectileController::new(50.0);
            controller.press(&mut world, anchor).unwrap();
            controller.press(&mut world, pointer).unwrap();

            let body = controller.projectile().unwrap();
            for _ in 0..600 {
                world.step();
            }

            let pos = world.body_position(body).unwrap();
            assert!(
                (0.0..=width).contains(&pos.x) && (0.0..=height).contains(&pos.y),
                "{anchor} -> {pointer} ended at {pos}"
            );
        }
    }

    #[test]
    fn test_removing_vanished_projectile_fails() {
        let mut world = WorldBuilder::new().build();
        let mut controller = ProjectileController::new(50.0);
        controller.press(&mut world, Vec2::new(1.0, 1.0)).unwrap();
        controller.press(&mut world, Vec2::new(2.0, 2.0)).unwrap();
        let body = controller.projectile().unwrap();
        world.remove_body(body).unwrap();

        let result = controller.press(&mut world, Vec2::ZERO);
        assert_eq!(result, Err(WorldError::UnknownBody(body)));
        assert_eq!(controller.state(), ProjectileState::Launched { body });
    }
}
