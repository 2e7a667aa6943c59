pub mod format;

pub use glam::DVec3;
pub use format::{Coords, General};

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
