use glam::Vec2;

use crate::properties::Color;

/// Everything tunable about the demo. There are no flags or config files; build one in code.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub gravity: Vec2,
    pub launch_scale: f32,
    pub background: Color,
    pub aim_color: Color,
    pub aim_thickness: f32,
}

impl DemoConfig {
    pub fn builder() -> DemoConfigBuilder {
        DemoConfigBuilder::default()
    }

    /// Fixed simulation timestep, one frame at the target rate.
    pub fn delta_time(&self) -> f32 {
        1.0 / self.fps as f32
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfigBuilder::default().build()
    }
}

/// Builder for `DemoConfig`
pub struct DemoConfigBuilder {
    title: String,
    width: u32,
    height: u32,
    fps: u32,
    gravity: Vec2,
    launch_scale: f32,
    background: Color,
    aim_color: Color,
    aim_thickness: f32,
}

impl DemoConfigBuilder {
    /// Get a Instance of `DemoConfigBuilder` with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Size of the window and of the walled playfield, in logical pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Target frame rate. Also sets the simulation timestep to `1 / fps`.
    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Positive `y` points down.
    pub fn gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    /// Converts the aim line length in pixels to the launch impulse magnitude.
    pub fn launch_scale(mut self, launch_scale: f32) -> Self {
        self.launch_scale = launch_scale;
        self
    }

    pub fn background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn aim_line(mut self, color: Color, thickness: f32) -> Self {
        self.aim_color = color;
        self.aim_thickness = thickness;
        self
    }

    /// Constructs a instance of `DemoConfig`
    pub fn build(self) -> DemoConfig {
        DemoConfig {
            title: self.title,
            width: self.width,
            height: self.height,
            fps: self.fps.max(1),
            gravity: self.gravity,
            launch_scale: self.launch_scale,
            background: self.background,
            aim_color: self.aim_color,
            aim_thickness: self.aim_thickness,
        }
    }
}

impl Default for DemoConfigBuilder {
    fn default() -> Self {
        Self {
            title: "slingshot".to_string(),
            width: 1000,
            height: 800,
            fps: 60,
            gravity: Vec2::new(0.0, 981.0),
            launch_scale: 50.0,
            background: Color::WHITE,
            aim_color: Color::BLACK,
            aim_thickness: 3.0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!((config.width, config.height), (1000, 800));
        assert_eq!(config.fps, 60);
        assert!((config.delta_time() - 1.0 / 60.0).abs() < 1e-9);
        assert_eq!(config.launch_scale, 50.0);
        assert_eq!(config.size(), Vec2::new(1000.0, 800.0));
    }

    #[test]
    fn test_builder_overrides() {
        let config = DemoConfig::builder()
            .size(640, 480)
            .fps(0)
            .launch_scale(10.0)
            .aim_line(Color::GRAY, 1.0)
            .build();

        assert_eq!(config.size(), Vec2::new(640.0, 480.0));
        assert_eq!(config.fps, 1);
        assert_eq!(config.delta_time(), 1.0);
        assert_eq!(config.aim_color, Color::GRAY);
        assert_eq!(config.aim_thickness, 1.0);
    }
}
