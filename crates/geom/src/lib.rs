//! Planar geometry primitives shared by the vicinity crates.
//!
//! Provides the immutable [`Point`], the [`LabeledPoint`] wrapper used for
//! training data, and the Euclidean [`euclidean`] distance.
//!
//! ```
//! use vicinity_geom::{Point, euclidean};
//!
//! let a = Point::new(0.0, 0.0);
//! let b = Point::new(3.0, 4.0);
//! assert_eq!(euclidean(a, b), 5.0);
//! ```

pub mod distance;
pub mod point;

pub use distance::{euclidean, squared_euclidean};
pub use point::{LabeledPoint, Point};
