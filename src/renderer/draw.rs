use glam::{Mat4, Vec2};
use glium::{
    glutin::surface::WindowSurface, implement_vertex, uniform, Display, Program, Surface,
};

use super::{shapes, Canvas};
use crate::{error::RenderError, properties::Color};

const CIRCLE_RESOLUTION: usize = 32;

static VERTEX_SHADER_SRC: &str = r#"
#version 140

in vec2 position;
in vec4 color;
out vec4 vertex_color;

uniform mat4 projection;

void main() {
    vertex_color = color;
    gl_Position = projection * vec4(position, 0.0, 1.0);
}
"#;

static FRAGMENT_SHADER_SRC: &str = r#"
#version 140

in vec4 vertex_color;
out vec4 color;

void main() {
    color = vec4(vertex_color);
}
"#;

#[derive(Copy, Clone, Debug)]
pub(crate) struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

implement_vertex!(Vertex, position, color);

/// `Canvas` backed by a glium display. Primitives are collected as triangles and
/// uploaded in a single draw call on `present`.
pub struct GliumCanvas {
    display: Display<WindowSurface>,
    program: Program,
    projection: Mat4,
    background: Color,
    triangles: Vec<Vertex>,
}

impl GliumCanvas {
    /// `size` is the logical size of the drawing area. Its origin is the top left corner,
    /// `y` grows downwards.
    pub fn new(display: Display<WindowSurface>, size: Vec2) -> Result<Self, RenderError> {
        let program =
            glium::Program::from_source(&display, VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC, None)?;

        Ok(Self {
            display,
            program,
            projection: Mat4::orthographic_rh_gl(0.0, size.x, size.y, 0.0, -1.0, 1.0),
            background: Color::WHITE,
            triangles: vec![],
        })
    }
}

impl Canvas for GliumCanvas {
    fn clear(&mut self, color: Color) {
        self.background = color;
        self.triangles.clear();
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, thickness: f32) {
        self.triangles
            .append(&mut shapes::line(from, to, color.to_array(), thickness));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.triangles.append(&mut shapes::circle(
            center,
            color.to_array(),
            radius,
            CIRCLE_RESOLUTION,
        ));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.triangles
            .append(&mut shapes::convex_polygon(points, color.to_array()));
    }

    fn present(&mut self) -> Result<(), RenderError> {
        let mut target = self.display.draw();
        let bg = self.background;
        target.clear_color(bg.r, bg.g, bg.b, bg.a);

        let drawn = if self.triangles.is_empty() {
            Ok(())
        } else {
            self.draw_triangles(&mut target)
        };

        // a frame must always be finished, even when drawing failed
        target.finish()?;
        drawn
    }
}

impl GliumCanvas {
    fn draw_triangles(&self, target: &mut glium::Frame) -> Result<(), RenderError> {
        let vertex_buffer = glium::VertexBuffer::new(&self.display, &self.triangles)?;
        let indices = glium::index::NoIndices(glium::index::PrimitiveType::TrianglesList);

        let uniforms = uniform! {
            projection: self.projection.to_cols_array_2d()
        };

        target.draw(
            &vertex_buffer,
            indices,
            &self.program,
            &uniforms,
            &Default::default(),
        )?;
        Ok(())
    }
}
