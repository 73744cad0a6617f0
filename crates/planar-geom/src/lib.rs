#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Circle-rectangle intersection predicates.
pub mod intersect;

/// Batch evaluation of intersection queries.
pub mod parallel;

/// Rigid poses and the world-to-local transform builder.
pub mod pose;

/// Circle and rectangle value types.
pub mod shapes;

pub use pose::{transform_point, world_to_local, RigidPose2D};
pub use shapes::{Circle, Rectangle};
