//! Parse vector-path descriptions (the SVG path-data mini-language) into typed
//! geometric segments and answer "what point lies at arc length L along the
//! whole path?". Built for motion systems that place an object a fractional or
//! absolute distance along a drawn path.
//!
//! Lines and quadratic beziers measure and invert their arc length in closed
//! form; cubic beziers and elliptical arcs have no closed form, so each one
//! precomputes a [LookupTable] of parameter→cumulative-length samples at
//! construction and inverts distances through it. A [Path] owns the ordered
//! segment sequence and dispatches global arc-length queries to the owning
//! segment.
//!
//! ```
//! use motion_path::{DVec2, Path};
//!
//! let path = Path::parse("M 0,0 L 10,0 L 10,10 Z").unwrap();
//! assert_eq!(path.total_length(), 20.);
//! assert_eq!(path.position_at_length(5.).unwrap(), DVec2::new(5., 0.));
//! assert_eq!(path.position_at_length(15.).unwrap(), DVec2::new(10., 5.));
//! ```

pub mod consts;
mod error;
mod parser;
mod path;
mod segment;
pub mod utils;

pub use error::PathError;
pub use path::Path;
pub use segment::{CubicBezier, EllipticalArc, LengthSample, Line, LookupTable, QuadraticBezier, Segment};

pub use glam::DVec2;
