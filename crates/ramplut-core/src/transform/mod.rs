//! Transform pipeline — specifications, table construction, and application.

pub mod apply;
pub mod lut;
pub mod params;
