use std::{
    collections::HashMap,
    f32::consts::{FRAC_PI_2, PI},
};

use glam::Vec2;
use log::{debug, trace};
use rapier2d::prelude::*;

use crate::{
    error::WorldError,
    properties::{BodyKind, Material, ShapeKind},
    renderer::Canvas,
};

const OUTLINE_DARKEN: f32 = 0.6;
const OUTLINE_THICKNESS: f32 = 1.0;
const CORNER_SEGMENTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(RigidBodyHandle);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeHandle(ColliderHandle);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JointHandle(ImpulseJointHandle);

impl From<BodyKind> for RigidBodyType {
    fn from(kind: BodyKind) -> Self {
        match kind {
            BodyKind::Static => RigidBodyType::Fixed,
            BodyKind::Dynamic => RigidBodyType::Dynamic,
        }
    }
}

impl From<RigidBodyType> for BodyKind {
    fn from(body_type: RigidBodyType) -> Self {
        if body_type.is_dynamic() {
            BodyKind::Dynamic
        } else {
            BodyKind::Static
        }
    }
}

/// What a shape was created from. Kept alongside the collider for drawing and inspection.
#[derive(Debug, Clone)]
pub struct ShapeRecord {
    pub body: BodyHandle,
    pub kind: ShapeKind,
    pub material: Material,
}

/// The physics simulation context. Owns every body, shape and joint.
pub struct World {
    gravity: Vector<Real>,
    delta_time: f32,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    shapes: HashMap<ColliderHandle, ShapeRecord>,
    steps: u64,
}

impl World {
    pub fn builder() -> WorldBuilder {
        WorldBuilder::default()
    }

    pub fn gravity(&self) -> Vec2 {
        Vec2::new(self.gravity.x, self.gravity.y)
    }

    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Every body gets continuous collision detection so fast movers cannot tunnel
    /// through thin walls between two steps.
    pub fn add_body(&mut self, kind: BodyKind, position: Vec2) -> BodyHandle {
        let body = RigidBodyBuilder::new(kind.into())
            .translation(vector![position.x, position.y])
            .ccd_enabled(true)
            .build();
        BodyHandle(self.rigid_body_set.insert(body))
    }

    /// Attaches a collider to `body`. Elasticity and friction combine multiplicatively
    /// with whatever the shape touches.
    pub fn add_shape(
        &mut self,
        body: BodyHandle,
        kind: ShapeKind,
        material: Material,
    ) -> Result<ShapeHandle, WorldError> {
        if !self.rigid_body_set.contains(body.0) {
            return Err(WorldError::UnknownBody(body));
        }

        let builder = match kind {
            ShapeKind::Box {
                size,
                corner_radius,
            } if corner_radius > 0.0 => ColliderBuilder::round_cuboid(
                size.x / 2.0 - corner_radius,
                size.y / 2.0 - corner_radius,
                corner_radius,
            ),
            ShapeKind::Box { size, .. } => ColliderBuilder::cuboid(size.x / 2.0, size.y / 2.0),
            ShapeKind::Circle { radius, offset } => {
                ColliderBuilder::ball(radius).translation(vector![offset.x, offset.y])
            }
            ShapeKind::Segment { a, b, radius } => ColliderBuilder::new(SharedShape::capsule(
                point![a.x, a.y],
                point![b.x, b.y],
                radius,
            )),
        };

        let collider = builder
            .mass(material.mass)
            .restitution(material.elasticity)
            .friction(material.friction)
            .restitution_combine_rule(CoefficientCombineRule::Multiply)
            .friction_combine_rule(CoefficientCombineRule::Multiply)
            .build();

        let handle =
            self.collider_set
                .insert_with_parent(collider, body.0, &mut self.rigid_body_set);
        self.shapes.insert(
            handle,
            ShapeRecord {
                body,
                kind,
                material,
            },
        );

        Ok(ShapeHandle(handle))
    }

    /// Pins `anchor_a` (local to `a`) and `anchor_b` (local to `b`) together, leaving
    /// rotation about that point free.
    pub fn add_pin_joint(
        &mut self,
        a: BodyHandle,
        b: BodyHandle,
        anchor_a: Vec2,
        anchor_b: Vec2,
    ) -> Result<JointHandle, WorldError> {
        for body in [a, b] {
            if !self.rigid_body_set.contains(body.0) {
                return Err(WorldError::UnknownBody(body));
            }
        }

        let joint = RevoluteJointBuilder::new()
            .local_anchor1(point![anchor_a.x, anchor_a.y])
            .local_anchor2(point![anchor_b.x, anchor_b.y]);

        Ok(JointHandle(self.impulse_joint_set.insert(a.0, b.0, joint, true)))
    }

    /// Removes a body together with every shape and joint attached to it.
    pub fn remove_body(&mut self, body: BodyHandle) -> Result<(), WorldError> {
        let removed = self
            .rigid_body_set
            .remove(
                body.0,
                &mut self.island_manager,
                &mut self.collider_set,
                &mut self.impulse_joint_set,
                &mut self.multibody_joint_set,
                true,
            )
            .ok_or(WorldError::UnknownBody(body))?;

        for collider in removed.colliders() {
            self.shapes.remove(collider);
        }
        debug!(
            "removed body {:?} with {} shape(s)",
            body,
            removed.colliders().len()
        );

        Ok(())
    }

    /// Advances the simulation by the configured timestep.
    pub fn step(&mut self) {
        self.step_by(self.delta_time);
    }

    pub fn step_by(&mut self, delta_time: f32) {
        trace!("step dt={delta_time}");
        self.integration_parameters.dt = delta_time;

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
        self.steps += 1;
    }

    /// Number of times the world has been advanced.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn body_kind(&self, body: BodyHandle) -> Option<BodyKind> {
        self.rigid_body_set
            .get(body.0)
            .map(|rb| rb.body_type().into())
    }

    /// Reclassifies a body. The body is woken up and its mass is refreshed from its shapes,
    /// so an impulse applied right after takes effect immediately.
    pub fn set_body_kind(&mut self, body: BodyHandle, kind: BodyKind) -> Result<(), WorldError> {
        let rb = self
            .rigid_body_set
            .get_mut(body.0)
            .ok_or(WorldError::UnknownBody(body))?;

        rb.set_body_type(kind.into(), true);
        rb.recompute_mass_properties_from_colliders(&self.collider_set);
        Ok(())
    }

    /// Instantaneous change of momentum applied at a point given in the body's local frame.
    pub fn apply_impulse_at_local_point(
        &mut self,
        body: BodyHandle,
        impulse: Vec2,
        local_point: Vec2,
    ) -> Result<(), WorldError> {
        let rb = self
            .rigid_body_set
            .get_mut(body.0)
            .ok_or(WorldError::UnknownBody(body))?;

        let world_point = rb.position() * point![local_point.x, local_point.y];
        rb.apply_impulse_at_point(vector![impulse.x, impulse.y], world_point, true);
        Ok(())
    }

    pub fn body_position(&self, body: BodyHandle) -> Option<Vec2> {
        self.rigid_body_set.get(body.0).map(|rb| {
            let t = rb.translation();
            Vec2::new(t.x, t.y)
        })
    }

    pub fn body_rotation(&self, body: BodyHandle) -> Option<f32> {
        self.rigid_body_set
            .get(body.0)
            .map(|rb| rb.rotation().angle())
    }

    pub fn body_velocity(&self, body: BodyHandle) -> Option<Vec2> {
        self.rigid_body_set.get(body.0).map(|rb| {
            let v = rb.linvel();
            Vec2::new(v.x, v.y)
        })
    }

    pub fn contains_body(&self, body: BodyHandle) -> bool {
        self.rigid_body_set.contains(body.0)
    }

    pub fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }

    pub fn bodies_of_kind(&self, kind: BodyKind) -> usize {
        self.rigid_body_set
            .iter()
            .filter(|(_, rb)| BodyKind::from(rb.body_type()) == kind)
            .count()
    }

    pub fn shape_count(&self) -> usize {
        self.collider_set.len()
    }

    pub fn joint_count(&self) -> usize {
        self.impulse_joint_set.len()
    }

    /// Shapes in storage order.
    pub fn shapes(&self) -> impl Iterator<Item = (ShapeHandle, &ShapeRecord)> {
        self.collider_set
            .iter()
            .filter_map(move |(handle, _)| Some((ShapeHandle(handle), self.shapes.get(&handle)?)))
    }

    pub fn shapes_of(&self, body: BodyHandle) -> impl Iterator<Item = &ShapeRecord> {
        self.shapes().filter_map(move |(_, record)| (record.body == body).then_some(record))
    }

    /// Draws every shape in its current pose: filled with the shape color, outlined
    /// in a darker shade, circles with a radius line to show rotation. Boxes keep their
    /// rounded corners.
    pub fn debug_draw<C>(&self, canvas: &mut C)
    where
        C: Canvas + ?Sized,
    {
        for (handle, collider) in self.collider_set.iter() {
            let Some(record) = self.shapes.get(&handle) else {
                continue;
            };

            let iso = collider.position();
            let to_world = |p: Vec2| {
                let w = iso * point![p.x, p.y];
                Vec2::new(w.x, w.y)
            };
            let color = record.material.color;
            let outline = color.darken(OUTLINE_DARKEN);

            match record.kind {
                ShapeKind::Box {
                    size,
                    corner_radius,
                } => {
                    let corners: Vec<Vec2> = box_outline(size, corner_radius)
                        .into_iter()
                        .map(to_world)
                        .collect();
                    canvas.fill_polygon(&corners, color);
                    for i in 0..corners.len() {
                        let next = corners[(i + 1) % corners.len()];
                        canvas.draw_line(corners[i], next, outline, OUTLINE_THICKNESS);
                    }
                }
                ShapeKind::Circle { radius, .. } => {
                    // the collider pose already carries the offset
                    let center = to_world(Vec2::ZERO);
                    canvas.fill_circle(center, radius, color);
                    canvas.draw_line(
                        center,
                        to_world(Vec2::new(radius, 0.0)),
                        outline,
                        OUTLINE_THICKNESS,
                    );
                }
                ShapeKind::Segment { a, b, radius } => {
                    let (a, b) = (to_world(a), to_world(b));
                    canvas.draw_line(a, b, color, radius * 2.0);
                    canvas.fill_circle(a, radius, color);
                    canvas.fill_circle(b, radius, color);
                }
            }
        }
    }
}

/// Outline of a box centered on the origin, clockwise in screen coordinates. Rounded
/// corners are approximated by `CORNER_SEGMENTS` chords each.
fn box_outline(size: Vec2, corner_radius: f32) -> Vec<Vec2> {
    let h = size / 2.0;
    let r = corner_radius.clamp(0.0, h.min_element());
    if r <= 0.0 {
        return vec![
            Vec2::new(-h.x, -h.y),
            Vec2::new(h.x, -h.y),
            Vec2::new(h.x, h.y),
            Vec2::new(-h.x, h.y),
        ];
    }

    let inner = h - Vec2::splat(r);
    // corner centers with the angle each arc starts at
    let arcs = [
        (Vec2::new(-inner.x, -inner.y), PI),
        (Vec2::new(inner.x, -inner.y), 1.5 * PI),
        (Vec2::new(inner.x, inner.y), 0.0),
        (Vec2::new(-inner.x, inner.y), FRAC_PI_2),
    ];

    let mut points = Vec::with_capacity(arcs.len() * (CORNER_SEGMENTS + 1));
    for (center, start) in arcs {
        for i in 0..=CORNER_SEGMENTS {
            let a = start + FRAC_PI_2 * i as f32 / CORNER_SEGMENTS as f32;
            points.push(center + Vec2::new(a.cos(), a.sin()) * r);
        }
    }
    points
}

/// Builder for `World`
pub struct WorldBuilder {
    gravity: Vec2,
    delta_time: f32,
    length_unit: f32,
}

impl WorldBuilder {
    /// Get a Instance of `WorldBuilder` with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Constant acceleration applied to every dynamic body.
    /// Screen coordinates: positive `y` points down.
    pub fn gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    /// How much time `World::step` simulates, in seconds.
    pub fn delta_time(mut self, delta_time: f32) -> Self {
        self.delta_time = delta_time;
        self
    }

    /// Typical size of an object in world units. Contact and joint tolerances scale with it;
    /// the default suits coordinates measured in pixels.
    pub fn length_unit(mut self, length_unit: f32) -> Self {
        self.length_unit = length_unit;
        self
    }

    /// Constructs a empty `World`
    pub fn build(self) -> World {
        let integration_parameters = IntegrationParameters {
            dt: self.delta_time,
            length_unit: self.length_unit,
            ..IntegrationParameters::default()
        };

        World {
            gravity: vector![self.gravity.x, self.gravity.y],
            delta_time: self.delta_time,
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            shapes: HashMap::new(),
            steps: 0,
        }
    }
}

impl Default for WorldBuilder {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, 981.0),
            delta_time: 1.0 / 60.0,
            length_unit: 100.0,
        }
    }
}
