//! Launch a ball into a small 2D rigid-body scene.
//!
//! Click to place the ball, move the pointer to aim, click again to launch it.
//! A third click removes the ball so a new one can be placed.
//!
//! # Example
//! ```no_run
//! use slingshot::{config::DemoConfig, renderer::{self, FrameClock}, simulation::Simulation};
//!
//! let config = DemoConfig::builder().size(1000, 800).fps(60).build();
//! let (mut input, mut canvas) = renderer::create_window(&config).unwrap();
//! let mut clock = FrameClock::new(config.fps);
//! let mut simulation = Simulation::new(config).unwrap();
//! simulation.run(&mut input, &mut canvas, &mut clock).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod projectile;
pub mod properties;
pub mod renderer;
pub mod scene;
pub mod simulation;
pub mod world;
extern crate glium;
extern crate winit;
