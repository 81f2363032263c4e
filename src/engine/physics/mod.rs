// Collision primitives
//
// The runner needs one query: do the player's and the obstacle's boxes
// overlap this tick. No dynamics live here.

mod collision;

pub use collision::{intersects, Aabb};
