//! ImageMagick-style geometry parsing and resize/crop instruction computation.
//!
//! Pure geometry — no pixel operations, no process invocation, `no_std`
//! compatible (requires `alloc` for instruction strings).
//!
//! # Modules
//!
//! - [`geometry`] — the [`Geometry`] value type: parsing, classification, formatting
//!
//! # Example
//!
//! ```
//! use imgeom::Geometry;
//!
//! let source = Geometry::from_probe("400x300").unwrap();
//! let target = Geometry::parse("200x200").unwrap();
//!
//! let (scale, crop) = source.transformation_to(Some(&target), true);
//! assert_eq!(scale.as_deref(), Some("x200"));
//! assert_eq!(crop.as_deref(), Some("200x200+33+0"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod geometry;
mod parse;
mod transform;

pub use geometry::{Geometry, GeometryError};
