use glam::Vec2;

/// Kinematic classification of a rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Immovable, infinite effective mass. Walls and joint anchors.
    Static,
    /// Subject to gravity, collisions and impulses.
    Dynamic,
}

/// Collider geometry, relative to the body it is attached to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Box { size: Vec2, corner_radius: f32 },
    Circle { radius: f32, offset: Vec2 },
    Segment { a: Vec2, b: Vec2, radius: f32 },
}

impl ShapeKind {
    pub fn rect(size: Vec2) -> Self {
        Self::Box {
            size,
            corner_radius: 0.0,
        }
    }

    pub fn circle(radius: f32) -> Self {
        Self::Circle {
            radius,
            offset: Vec2::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const GRAY: Self = Self::new(0.5, 0.5, 0.5, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Same hue, scaled towards black. Used for shape outlines.
    pub fn darken(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor, self.a)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Physical and visual properties of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub mass: f32,
    pub elasticity: f32,
    pub friction: f32,
    pub color: Color,
}

impl Material {
    pub fn new(mass: f32, elasticity: f32, friction: f32) -> Self {
        Self {
            mass,
            elasticity,
            friction,
            color: Color::GRAY,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}
