//! Seeded random source for scene population and wandering creatures.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone)]
pub struct SceneRng(pub fastrand::Rng);

impl SceneRng {
    pub fn with_seed(seed: u64) -> Self {
        SceneRng(fastrand::Rng::with_seed(seed))
    }
}

impl Default for SceneRng {
    fn default() -> Self {
        SceneRng(fastrand::Rng::new())
    }
}
