//! Platform abstraction layer
//!
//! The real game reads a device gyroscope; the simulation only needs a stream
//! of angular-rate samples, so the sensor is modelled as a trait here.

pub mod input;

pub use input::{AngularRateSource, RandomWalkSource, RateSample, ScriptedSource};
