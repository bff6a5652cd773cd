//! Core splitting building blocks: quadrant geometry, the single-image
//! splitter, and run parameters. These are consumed by the high-level `api`
//! module.
pub mod params;
pub mod quadrants;
pub mod split;
