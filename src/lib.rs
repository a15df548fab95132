//! Sprite Parallax library.
//!
//! This module exposes the scene's ECS components, resources, systems, and
//! messages for use in integration tests and by the windowed binary.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod surface;
pub mod systems;
