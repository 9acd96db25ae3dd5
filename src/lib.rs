pub mod bodies;
pub mod constants;
pub mod ephem;
pub mod ephem_errors;
pub mod ephemeris;
pub mod kepler;
pub mod mean_elements;
pub mod planets;
pub mod ref_system;
pub mod time;

pub use bodies::Body;
pub use ephem::{computable_bodies, ephem, ephem_with, EphemParams, EphemerisEngine, Meeus1};
pub use ephem_errors::EphemError;
pub use ephemeris::{Coordinates, Ephemeris, EphemerisResult};
pub use ref_system::{CoordForm, Position, RefFrame, SphericalCoord};
