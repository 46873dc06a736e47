//! # ScanKit Planner
//!
//! Plans multi-angle raster scan trajectories for a laser-scanning
//! stage. Given a rectangular scan region, the planner
//!
//! - builds the unrotated reference raster (the zero scan),
//! - replicates it rotated about the optical origin for each scan
//!   angle,
//! - replaces each rotated pattern with an axis-aligned bounding
//!   rescan to keep stage traversal simple, and
//! - derives per-axis velocity and acceleration set-points per angle.
//!
//! All computation is pure and single-shot: [`ScanPlanner::plan`] takes
//! an immutable configuration and returns a fresh [`ScanPlan`]. Nothing
//! is recomputed implicitly and no previous output is ever mutated.

pub mod bounding;
pub mod geometry;
pub mod kinematics;
pub mod pipeline;

pub use bounding::{BoundingBoxOptimizer, BoundingScan};
pub use geometry::{RotatedScan, RotatedScanSet, ScanGeometryEngine, ZeroScan};
pub use kinematics::{KinematicsCalculator, KinematicsProfile};
pub use pipeline::{ScanPlan, ScanPlanner};
