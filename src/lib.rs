//! Lunar Defence game library
//!
//! A rotating Earth, an orbiting Moon and an inbound asteroid, with a
//! crosshair following the mouse.  Each frame every sprite's placement is
//! rebuilt from a handful of scalars: the global rotation, the asteroid's
//! distance and the cursor position.

pub mod assets;
pub mod bodies;
pub mod config;
pub mod constants;
pub mod error;
pub mod game_loop;
pub mod graphics;
pub mod plugin;
pub mod simulation;
pub mod transform2d;
