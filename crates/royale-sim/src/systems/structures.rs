//! Structure phase: every obstacle acts once, in id order.

use tracing::debug;

use royale_core::events::SimEvent;

use crate::obstacle::Obstacle;
use crate::structures::TickContext;

/// Run `act` on every obstacle and report destroyed structures.
pub fn run(obstacles: &mut [Obstacle], ctx: &mut TickContext) {
    for obstacle in obstacles.iter_mut() {
        if let Some(destroyed) = obstacle.act(ctx) {
            debug!(
                obstacle = obstacle.id().0,
                owner = ?destroyed.owner(),
                kind = ?destroyed.kind(),
                "structure destroyed"
            );
            ctx.events.push(SimEvent::StructureDestroyed {
                obstacle: obstacle.id(),
                owner: destroyed.owner(),
                kind: destroyed.kind(),
            });
        }
    }
}
