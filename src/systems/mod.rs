//! Scene systems.
//!
//! This module groups all ECS systems that advance and draw the scene, plus
//! the main-thread helpers that feed it input and assets.
//!
//! Submodules overview
//! - [`animation`] – advance each creature's frame cursor
//! - [`assets`] – read bitmaps on loader threads and settle them on the main thread
//! - [`commands`] – apply queued scene commands and build creatures
//! - [`input`] – read the keyboard and turn presses into scene changes
//! - [`movement`] – step creatures toward their destinations
//! - [`parallax`] – scroll and draw the parallax layers
//! - [`render`] – clear the frame and draw creatures
//! - [`wander`] – give parked wandering creatures a new destination

pub mod animation;
pub mod assets;
pub mod commands;
pub mod input;
pub mod movement;
pub mod parallax;
pub mod render;
pub mod wander;
