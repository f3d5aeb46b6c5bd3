//! The [`Geometry`] value type: construction, classification, formatting.
//!
//! A geometry is a width/height pair with an optional trailing modifier
//! flag, written in ImageMagick's resize notation (`"400x300"`, `"200x"`,
//! `"200x200^"`). Values are immutable once built; all queries produce new
//! derived values.

use core::fmt;
use core::str::FromStr;

use alloc::string::String;

use num_traits::float::FloatCore;

use crate::parse::{self, Outcome};

/// A width/height/modifier triple describing image dimensions or a desired
/// resize target.
///
/// A dimension of `0.0` means "unspecified" — `"200x"` constrains only the
/// width. The modifier is a flag from the geometry grammar (`^`, `!`, `>`,
/// `<`, `@`, `%`, or an anchor run ending in `#`); it carries positional
/// semantics consumed only by the cropping step and is opaque data to
/// everything else.
///
/// # Example
///
/// ```
/// use imgeom::Geometry;
///
/// let g = Geometry::parse("400x300").unwrap();
/// assert!(g.is_horizontal());
/// assert_eq!(g.aspect(), 400.0 / 300.0);
/// assert_eq!(g.to_string(), "400x300");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    /// Horizontal dimension. `0.0` = unspecified.
    pub width: f64,
    /// Vertical dimension. `0.0` = unspecified.
    pub height: f64,
    /// Trailing resize-behavior flag, kept verbatim from the parsed input.
    pub modifier: Option<String>,
}

impl Geometry {
    /// Create a geometry from explicit dimensions, no modifier.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            modifier: None,
        }
    }

    /// Set the trailing modifier flag.
    pub fn modifier(mut self, modifier: &str) -> Self {
        self.modifier = Some(String::from(modifier));
        self
    }

    /// Parse geometry notation: `WIDTH? ('x' HEIGHT?)? MODIFIER?`.
    ///
    /// Blank input and input that does not match the grammar both yield
    /// `None` — "no geometry specified" is a valid skip state, not an
    /// error. Pure text parsing; never panics, performs no I/O.
    ///
    /// ```
    /// use imgeom::Geometry;
    ///
    /// assert_eq!(Geometry::parse("x50").unwrap().height, 50.0);
    /// assert!(Geometry::parse("").is_none());
    /// assert!(Geometry::parse("rose.gif").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        match parse::parse_geometry(text) {
            Outcome::Parsed(geometry) => Some(geometry),
            Outcome::Blank | Outcome::Unmatched => None,
        }
    }

    /// Parse the output of an external dimension probe (an `identify`-style
    /// `"WxH"` string).
    ///
    /// This is the crate's only error path: probe output that does not
    /// parse means the content was not recognizable as image dimensions.
    pub fn from_probe(output: &str) -> Result<Self, GeometryError> {
        Self::parse(output).ok_or(GeometryError::NotIdentified)
    }

    /// Whether height equals width. Exact float equality, no tolerance.
    pub fn is_square(&self) -> bool {
        self.height == self.width
    }

    /// Whether width exceeds height.
    pub fn is_horizontal(&self) -> bool {
        self.height < self.width
    }

    /// Whether height exceeds width.
    pub fn is_vertical(&self) -> bool {
        self.height > self.width
    }

    /// Width-to-height ratio.
    ///
    /// A zero height yields infinity — defined but degenerate, passed
    /// through unguarded.
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// The larger of the two dimensions.
    pub fn larger(&self) -> f64 {
        self.height.max(self.width)
    }

    /// The smaller of the two dimensions.
    pub fn smaller(&self) -> f64 {
        self.height.min(self.width)
    }

    /// Whether the modifier contains the given anchor flag.
    pub(crate) fn has_anchor(&self, flag: char) -> bool {
        self.modifier.as_deref().is_some_and(|m| m.contains(flag))
    }
}

impl fmt::Display for Geometry {
    /// Parse-compatible notation: truncated width if positive, then `x` +
    /// truncated height if positive, then the modifier verbatim.
    ///
    /// Lossy inverse of [`Geometry::parse`] — fractional parts truncate.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width > 0.0 {
            write!(f, "{}", trunc_i64(self.width))?;
        }
        if self.height > 0.0 {
            write!(f, "x{}", trunc_i64(self.height))?;
        }
        if let Some(modifier) = &self.modifier {
            f.write_str(modifier)?;
        }
        Ok(())
    }
}

impl FromStr for Geometry {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_probe(s)
    }
}

/// Geometry recognition error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// Probe output could not be recognized as image dimensions.
    NotIdentified,
}

/// `%d`-style integer truncation, applied only at formatting boundaries.
pub(crate) fn trunc_i64(value: f64) -> i64 {
    FloatCore::trunc(value) as i64
}
