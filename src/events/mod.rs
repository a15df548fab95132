//! Messages exchanged with the scene.
//!
//! Submodules:
//! - [`asset`] – completion of background bitmap loads
//! - [`scene`] – commands that steer the running scene (state, speed, spawns)
pub mod asset;
pub mod scene;
