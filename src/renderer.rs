use glam::Vec2;
use log::info;

use crate::{config::DemoConfig, error::RenderError, projectile::AimLine, properties::Color, world::World};

mod clock;
mod draw;
mod event;
mod shapes;

pub use clock::{FrameClock, FrameLimiter};
pub use draw::GliumCanvas;
pub use event::{EventSource, InputEvent, WindowInput};

/// Primitive drawing surface. Everything drawn between `clear` and `present` makes up one frame.
pub trait Canvas {
    fn clear(&mut self, color: Color);

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, thickness: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// `points` describe a convex polygon in either winding order.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    fn present(&mut self) -> Result<(), RenderError>;
}

/// Opens the demo window and returns its input source together with a canvas drawing into it.
pub fn create_window(config: &DemoConfig) -> Result<(WindowInput, GliumCanvas), RenderError> {
    let event_loop = winit::event_loop::EventLoopBuilder::new().build();

    let (window, display) = glium::backend::glutin::SimpleWindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(config.width, config.height)
        .build(&event_loop);
    // the projection is fixed to the initial size
    window.set_resizable(false);

    info!(
        "opened {}x{} window (scale factor {})",
        config.width,
        config.height,
        window.scale_factor()
    );

    let canvas = GliumCanvas::new(display, config.size())?;
    Ok((WindowInput::new(event_loop, window), canvas))
}

/// One render pass: background, aim line underneath, then every shape of the world.
pub fn draw_scene<C>(
    canvas: &mut C,
    world: &World,
    aim_line: Option<AimLine>,
    config: &DemoConfig,
) -> Result<(), RenderError>
where
    C: Canvas + ?Sized,
{
    canvas.clear(config.background);

    if let Some(line) = aim_line {
        canvas.draw_line(line.from, line.to, config.aim_color, config.aim_thickness);
    }

    world.debug_draw(canvas);
    canvas.present()
}
