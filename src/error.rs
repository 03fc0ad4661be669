use thiserror::Error;

use crate::world::BodyHandle;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorldError {
    #[error("body {0:?} does not exist in the world")]
    UnknownBody(BodyHandle),
}

/// Failures of the glium draw surface.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to compile shader program: {0}")]
    Program(#[from] glium::ProgramCreationError),
    #[error("failed to create vertex buffer: {0}")]
    VertexBuffer(#[from] glium::vertex::BufferCreationError),
    #[error("draw call failed: {0}")]
    Draw(#[from] glium::DrawError),
    #[error("failed to present frame: {0}")]
    Swap(#[from] glium::SwapBuffersError),
}

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error(transparent)]
    World(#[from] WorldError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
