use glam::Vec2;

/// Straight-line distance between two points.
pub fn distance(p1: Vec2, p2: Vec2) -> f32 {
    p1.distance(p2)
}

/// Direction from `p1` towards `p2` in radians, in `(-PI, PI]`.
pub fn angle(p1: Vec2, p2: Vec2) -> f32 {
    f32::atan2(p2.y - p1.y, p2.x - p1.x)
}
