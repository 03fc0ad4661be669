use glam::Vec2;
use log::trace;
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    platform::run_return::EventLoopExtRunReturn,
    window::Window,
};

/// The input the simulation reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    /// A pointer button went down at this position.
    Press(Vec2),
}

pub trait EventSource {
    /// Latest known pointer position.
    fn pointer_position(&self) -> Vec2;

    /// Drains every pending event in arrival order.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Events of the demo window, in logical pixels.
pub struct WindowInput {
    event_loop: EventLoop<()>,
    window: Window,
    pointer: Vec2,
}

impl WindowInput {
    pub fn new(event_loop: EventLoop<()>, window: Window) -> Self {
        Self {
            event_loop,
            window,
            pointer: Vec2::ZERO,
        }
    }
}

impl EventSource for WindowInput {
    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = vec![];
        let pointer = &mut self.pointer;
        let scale_factor = self.window.scale_factor();

        // returns once everything queued so far has been handed out
        self.event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Poll;

            #[allow(clippy::collapsible_match)]
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                        events.push(InputEvent::Quit);
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        let logical = position.to_logical::<f32>(scale_factor);
                        *pointer = Vec2::new(logical.x, logical.y);
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        ..
                    } => {
                        events.push(InputEvent::Press(*pointer));
                    }
                    _ => (),
                },
                Event::MainEventsCleared => {
                    *control_flow = ControlFlow::Exit;
                }
                _ => (),
            }
        });

        if !events.is_empty() {
            trace!("polled {:?}", events);
        }
        events
    }
}
