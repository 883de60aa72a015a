//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - arena side length and wall restitution,
//! - gravitational acceleration,
//! - unit scale between simulation units and pixels,
//! - the pointer-force singularity offset

#[derive(Debug, Clone)]
pub struct Parameters {
    pub arena_size: f64, // side length of the square arena
    pub g: f64, // accel of gravity, +y is down in screen coordinates
    pub wall_restitution: f64, // fraction of normal speed kept at walls, in (0,1)
    pub scale: f64, // pixels per simulation unit
    pub pointer_offset: f64, // keeps the pointer force finite at zero distance
}
