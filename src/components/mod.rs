//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the scene. Components define data and behaviors such as position,
//! sprite-sheet playback, motion, and parallax scrolling.
//!
//! Submodules overview:
//! - [`animation`] – per-entity animation state and its throttled frame cursor
//! - [`creature`] – creature catalog (kinds, phase tables) and tags
//! - [`kinematic`] – destination and per-axis pace of a moving entity
//! - [`mapposition`] – screen position of an entity
//! - [`scrollinglayer`] – horizontally repeating parallax strip
//! - [`sprite`] – sprite-sheet drawing data
//! - [`wander`] – roaming area that keeps a creature moving
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod creature;
pub mod kinematic;
pub mod mapposition;
pub mod scrollinglayer;
pub mod sprite;
pub mod wander;
pub mod zindex;
