//! Safe SQL building: identifiers from fixed allow-lists only, values as parameters.

mod builder;
mod filter;
pub mod params;
pub use builder::*;
pub use filter::*;
pub use params::*;
