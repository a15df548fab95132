//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: scheduling, asset stores, the frame
//! buffer, and scene settings. Each submodule documents the semantics and
//! intended usage of its resource(s).
//!
//! Overview
//! - `animationstore` – precomputed sprite-sheet frame tables shared per creature kind
//! - `assetloader` – background bitmap loading over a channel
//! - `framebuffer` – drawing primitive and the recorded display list
//! - `framescheduler` – single pending tick and the per-tick draw decision
//! - `gameconfig` – INI-backed scene configuration
//! - `input` – per-frame keyboard state of the scene controls
//! - `scenerng` – seeded random source
//! - `scrollspeed` – global scroll speed read by every layer
//! - `spawncounter` – insertion order of creatures
//! - `texturestore` – load status and size of every bitmap
pub mod animationstore;
pub mod assetloader;
pub mod framebuffer;
pub mod framescheduler;
pub mod gameconfig;
pub mod input;
pub mod scenerng;
pub mod scrollspeed;
pub mod spawncounter;
pub mod texturestore;
