//! Scale/crop instruction computation: cover-and-center-crop planning.
//!
//! Produces the geometry strings a downstream resize invocation consumes
//! (`"200x"`, `"x200"`, `"200x200+33+0"`); performs no pixel work itself.

use alloc::format;
use alloc::string::{String, ToString};

use crate::geometry::{Geometry, trunc_i64};

impl Geometry {
    /// Compute the scale and crop instructions that transform `self` into
    /// `dst`, returned as `(scale_spec, crop_spec)`.
    ///
    /// - `dst = None` → `(None, None)`: no resize requested; the caller may
    ///   still issue other operations.
    /// - `crop = false` → `(Some(dst notation), None)`: scale-to-fit using
    ///   dst's own geometry string, modifier included, no crop.
    /// - `crop = true` → fill and crop to exactly `dst`: a single scale
    ///   factor on the axis that would otherwise under-fill the target
    ///   guarantees full coverage, then the orthogonal overflow is cropped
    ///   to the exact target size. The crop is centered unless dst's
    ///   modifier anchors it to the top (`^`) or left (`<`) edge; no
    ///   bottom/right anchors exist.
    ///
    /// All arithmetic stays in f64; truncation to integers happens only
    /// when the spec strings are formatted.
    ///
    /// # Example
    ///
    /// ```
    /// use imgeom::Geometry;
    ///
    /// let source = Geometry::parse("300x400").unwrap();
    /// let target = Geometry::parse("200x200^").unwrap();
    ///
    /// let (scale, crop) = source.transformation_to(Some(&target), true);
    /// assert_eq!(scale.as_deref(), Some("200x"));
    /// assert_eq!(crop.as_deref(), Some("200x200+0+0"));
    /// ```
    pub fn transformation_to(
        &self,
        dst: Option<&Geometry>,
        crop: bool,
    ) -> (Option<String>, Option<String>) {
        let Some(dst) = dst else {
            return (None, None);
        };
        if !crop {
            return (Some(dst.to_string()), None);
        }

        // Scale factors per axis. Degenerate sources (zero dimension)
        // produce infinity/NaN and flow through unguarded.
        let ratio = Geometry::new(dst.width / self.width, dst.height / self.height);

        // The dominant axis is the one with the larger factor; scaling by
        // it covers the target and leaves overflow only on the other axis.
        // A square ratio ties to the width-driven branch.
        let width_driven = ratio.height <= ratio.width;

        let (scale_spec, crop_spec) = if width_driven {
            let scaled_height = self.height * ratio.width;
            let offset = if dst.has_anchor('^') {
                0.0
            } else {
                (scaled_height - dst.height) / 2.0
            };
            (
                format!("{}x", trunc_i64(dst.width)),
                format!(
                    "{}x{}+0+{}",
                    trunc_i64(dst.width),
                    trunc_i64(dst.height),
                    trunc_i64(offset),
                ),
            )
        } else {
            let scaled_width = self.width * ratio.height;
            let offset = if dst.has_anchor('<') {
                0.0
            } else {
                (scaled_width - dst.width) / 2.0
            };
            (
                format!("x{}", trunc_i64(dst.height)),
                format!(
                    "{}x{}+{}+0",
                    trunc_i64(dst.width),
                    trunc_i64(dst.height),
                    trunc_i64(offset),
                ),
            )
        };
        (Some(scale_spec), Some(crop_spec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(w: f64, h: f64) -> Geometry {
        Geometry::new(w, h)
    }

    #[test]
    fn no_destination_means_no_operation() {
        assert_eq!(g(400.0, 300.0).transformation_to(None, false), (None, None));
        assert_eq!(g(400.0, 300.0).transformation_to(None, true), (None, None));
    }

    #[test]
    fn without_crop_scales_to_destination_notation() {
        let dst = g(200.0, 100.0);
        let (scale, crop) = g(400.0, 300.0).transformation_to(Some(&dst), false);
        assert_eq!(scale.as_deref(), Some("200x100"));
        assert_eq!(crop, None);
    }

    #[test]
    fn without_crop_keeps_destination_modifier() {
        let dst = g(200.0, 200.0).modifier(">");
        let (scale, crop) = g(400.0, 300.0).transformation_to(Some(&dst), false);
        assert_eq!(scale.as_deref(), Some("200x200>"));
        assert_eq!(crop, None);
    }

    #[test]
    fn height_driven_fill_centers_horizontally() {
        // 400x300 → 200x200: height needs the larger factor (2/3 > 1/2).
        // Scaled width 400 * 2/3 = 266.67; offset (266.67 - 200) / 2 = 33.
        let dst = g(200.0, 200.0);
        let (scale, crop) = g(400.0, 300.0).transformation_to(Some(&dst), true);
        assert_eq!(scale.as_deref(), Some("x200"));
        assert_eq!(crop.as_deref(), Some("200x200+33+0"));
    }

    #[test]
    fn width_driven_fill_centers_vertically() {
        // 300x400 → 200x200: width factor 2/3 dominates.
        // Scaled height 400 * 2/3 = 266.67; offset 33.
        let dst = g(200.0, 200.0);
        let (scale, crop) = g(300.0, 400.0).transformation_to(Some(&dst), true);
        assert_eq!(scale.as_deref(), Some("200x"));
        assert_eq!(crop.as_deref(), Some("200x200+0+33"));
    }

    #[test]
    fn square_ratio_ties_to_width_driven() {
        let dst = g(50.0, 50.0);
        let (scale, crop) = g(100.0, 100.0).transformation_to(Some(&dst), true);
        assert_eq!(scale.as_deref(), Some("50x"));
        assert_eq!(crop.as_deref(), Some("50x50+0+0"));
    }

    #[test]
    fn top_anchor_zeroes_vertical_offset() {
        let dst = g(200.0, 200.0).modifier("^");
        let (scale, crop) = g(300.0, 400.0).transformation_to(Some(&dst), true);
        assert_eq!(scale.as_deref(), Some("200x"));
        assert_eq!(crop.as_deref(), Some("200x200+0+0"));
    }

    #[test]
    fn top_anchor_in_pair_form_also_applies() {
        let dst = g(200.0, 200.0).modifier("^#");
        let (_, crop) = g(300.0, 400.0).transformation_to(Some(&dst), true);
        assert_eq!(crop.as_deref(), Some("200x200+0+0"));
    }

    #[test]
    fn left_anchor_zeroes_horizontal_offset() {
        // 400x200 → 100x100 is height-driven: scaled width 200, offset 50.
        let dst = g(100.0, 100.0);
        let (_, centered) = g(400.0, 200.0).transformation_to(Some(&dst), true);
        assert_eq!(centered.as_deref(), Some("100x100+50+0"));

        let anchored = g(100.0, 100.0).modifier("<");
        let (scale, crop) = g(400.0, 200.0).transformation_to(Some(&anchored), true);
        assert_eq!(scale.as_deref(), Some("x100"));
        assert_eq!(crop.as_deref(), Some("100x100+0+0"));
    }

    #[test]
    fn top_anchor_has_no_effect_on_height_driven_crop() {
        // Only the left anchor applies on this branch; the asymmetry is
        // intentional.
        let dst = g(200.0, 200.0).modifier("^");
        let (_, crop) = g(400.0, 300.0).transformation_to(Some(&dst), true);
        assert_eq!(crop.as_deref(), Some("200x200+33+0"));
    }

    #[test]
    fn left_anchor_has_no_effect_on_width_driven_crop() {
        let dst = g(200.0, 200.0).modifier("<");
        let (_, crop) = g(300.0, 400.0).transformation_to(Some(&dst), true);
        assert_eq!(crop.as_deref(), Some("200x200+0+33"));
    }

    #[test]
    fn upscaling_fill_works() {
        // 100x100 → 400x200: width factor 4 dominates.
        // Scaled height 400; offset (400 - 200) / 2 = 100.
        let dst = g(400.0, 200.0);
        let (scale, crop) = g(100.0, 100.0).transformation_to(Some(&dst), true);
        assert_eq!(scale.as_deref(), Some("400x"));
        assert_eq!(crop.as_deref(), Some("400x200+0+100"));
    }

    #[test]
    fn identity_fill_has_zero_offsets() {
        let dst = g(200.0, 200.0);
        let (scale, crop) = g(200.0, 200.0).transformation_to(Some(&dst), true);
        assert_eq!(scale.as_deref(), Some("200x"));
        assert_eq!(crop.as_deref(), Some("200x200+0+0"));
    }

    #[test]
    fn offsets_truncate_rather_than_round() {
        // 1024x768 → 128x128 is height-driven: scaled width 1024/6 = 170.67,
        // offset 21.33 → 21, not 21.33 rounded.
        let dst = g(128.0, 128.0);
        let (scale, crop) = g(1024.0, 768.0).transformation_to(Some(&dst), true);
        assert_eq!(scale.as_deref(), Some("x128"));
        assert_eq!(crop.as_deref(), Some("128x128+21+0"));
    }
}
