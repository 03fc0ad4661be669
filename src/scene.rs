//! The fixed scene the projectile is launched into: walls around the viewport,
//! a free standing wooden frame and a pendulum.

use glam::Vec2;
use log::info;

use crate::{
    error::WorldError,
    properties::{BodyKind, Color, Material, ShapeKind},
    world::{BodyHandle, JointHandle, World},
};

pub const WALL_THICKNESS: f32 = 20.0;
const WALL_ELASTICITY: f32 = 0.4;
const WALL_FRICTION: f32 = 0.5;

const POST_SIZE: Vec2 = Vec2::new(40.0, 200.0);
const BEAM_SIZE: Vec2 = Vec2::new(340.0, 40.0);
const STRUCTURE_ELASTICITY: f32 = 0.4;
const STRUCTURE_FRICTION: f32 = 0.4;
const STRUCTURE_CORNER_RADIUS: f32 = 2.0;

pub const PENDULUM_PIVOT: Vec2 = Vec2::new(300.0, 300.0);
const PENDULUM_ARM: Vec2 = Vec2::new(255.0, 0.0);
const PENDULUM_ARM_RADIUS: f32 = 5.0;
const PENDULUM_BOB_RADIUS: f32 = 40.0;

/// Bodies making up the pendulum.
#[derive(Debug, Clone, Copy)]
pub struct Pendulum {
    pub pivot: BodyHandle,
    pub body: BodyHandle,
    pub joint: JointHandle,
}

/// Populates an empty world with boundaries, structure and pendulum.
pub fn build_scene(world: &mut World, width: f32, height: f32) -> Result<(), WorldError> {
    build_boundaries(world, width, height)?;
    build_structure(world, width, height)?;
    build_pendulum(world)?;

    info!(
        "scene built for {}x{}: {} bodies, {} shapes, {} joints",
        width,
        height,
        world.body_count(),
        world.shape_count(),
        world.joint_count()
    );
    Ok(())
}

/// Four static walls, each centred on one edge of the viewport.
pub fn build_boundaries(
    world: &mut World,
    width: f32,
    height: f32,
) -> Result<Vec<BodyHandle>, WorldError> {
    let half = WALL_THICKNESS / 2.0;
    let rects = [
        // bottom, top, left, right
        (Vec2::new(width / 2.0, height - half), Vec2::new(width, WALL_THICKNESS)),
        (Vec2::new(width / 2.0, half), Vec2::new(width, WALL_THICKNESS)),
        (Vec2::new(half, height / 2.0), Vec2::new(WALL_THICKNESS, height)),
        (Vec2::new(width - half, height / 2.0), Vec2::new(WALL_THICKNESS, height)),
    ];

    let mut walls = Vec::with_capacity(rects.len());
    for (pos, size) in rects {
        let body = world.add_body(BodyKind::Static, pos);
        world.add_shape(
            body,
            ShapeKind::rect(size),
            Material::new(0.0, WALL_ELASTICITY, WALL_FRICTION),
        )?;
        walls.push(body);
    }

    Ok(walls)
}

/// Two posts and a beam balanced on top of them, standing on the floor near the right wall.
/// Nothing holds the pieces together.
pub fn build_structure(
    world: &mut World,
    width: f32,
    height: f32,
) -> Result<Vec<BodyHandle>, WorldError> {
    let brown = Color::from_rgba8(139, 69, 19, 100);
    let post_y = height - WALL_THICKNESS - POST_SIZE.y / 2.0;
    let beam_y = post_y - POST_SIZE.y / 2.0 - BEAM_SIZE.y / 2.0;
    let rects = [
        (Vec2::new(width - 400.0, post_y), POST_SIZE, 100.0),
        (Vec2::new(width - 100.0, post_y), POST_SIZE, 100.0),
        (Vec2::new(width - 250.0, beam_y), BEAM_SIZE, 150.0),
    ];

    let mut pieces = Vec::with_capacity(rects.len());
    for (pos, size, mass) in rects {
        let body = world.add_body(BodyKind::Dynamic, pos);
        world.add_shape(
            body,
            ShapeKind::Box {
                size,
                corner_radius: STRUCTURE_CORNER_RADIUS,
            },
            Material::new(mass, STRUCTURE_ELASTICITY, STRUCTURE_FRICTION).color(brown),
        )?;
        pieces.push(body);
    }

    Ok(pieces)
}

/// A ball on a rigid arm, free to swing around a fixed pivot.
pub fn build_pendulum(world: &mut World) -> Result<Pendulum, WorldError> {
    let pivot = world.add_body(BodyKind::Static, PENDULUM_PIVOT);
    let body = world.add_body(BodyKind::Dynamic, PENDULUM_PIVOT);

    world.add_shape(
        body,
        ShapeKind::Segment {
            a: Vec2::ZERO,
            b: PENDULUM_ARM,
            radius: PENDULUM_ARM_RADIUS,
        },
        Material::new(8.0, 0.0, 1.0),
    )?;
    world.add_shape(
        body,
        ShapeKind::Circle {
            radius: PENDULUM_BOB_RADIUS,
            offset: PENDULUM_ARM,
        },
        Material::new(30.0, 0.95, 1.0),
    )?;

    let joint = world.add_pin_joint(body, pivot, Vec2::ZERO, Vec2::ZERO)?;

    Ok(Pendulum { pivot, body, joint })
}
