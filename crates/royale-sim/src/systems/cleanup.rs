//! Cleanup system: despawns creeps that died this tick.
//!
//! Creeps leave their roster the moment they die; the entity itself is
//! only removed here, after every system has run.

use hecs::{Entity, World};

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
