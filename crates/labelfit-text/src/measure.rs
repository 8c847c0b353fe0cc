#![forbid(unsafe_code)]

//! Measurement capability seam.
//!
//! The fitter never computes widths itself: it is parameterized over an
//! externally supplied measurement backend so the same algorithm serves a
//! real font renderer, a monospace grid, or a synthetic width function in
//! tests. Implementations must be pure and deterministic for fixed style
//! parameters, and monotonic non-decreasing under prefix extension — the
//! fitter's convergence contract depends on both.

use labelfit_core::{Extent, TextStyle};

/// Abstract measurement backend.
///
/// Maps a candidate string plus style parameters to its rendered extent.
/// The trait is object-safe to allow dynamic dispatch between backends
/// (e.g., a host font renderer vs. the synthetic cell measurer).
pub trait TextMeasure {
    /// Measure the rendered extent of `text` under `style`.
    fn measure(&self, text: &str, style: &TextStyle) -> Extent;

    /// Measured width only.
    #[inline]
    fn measure_width(&self, text: &str, style: &TextStyle) -> f32 {
        self.measure(text, style).width
    }
}

/// Any pure closure over (text, style) is a measurement backend.
impl<F> TextMeasure for F
where
    F: Fn(&str, &TextStyle) -> Extent,
{
    #[inline]
    fn measure(&self, text: &str, style: &TextStyle) -> Extent {
        self(text, style)
    }
}

/// Synthetic measurer over a fixed monospace cell grid.
///
/// Width is the display cell count times the cell advance; height is one
/// cell regardless of content. This is the correct backend for fixed-pitch
/// hosts, and with a 1×1 cell it makes width equal the character count —
/// the deterministic stand-in used by tests and benches.
///
/// # Example
/// ```
/// use labelfit_core::TextStyle;
/// use labelfit_text::measure::{CellMeasure, TextMeasure};
///
/// let measure = CellMeasure::unit();
/// let style = TextStyle::default();
/// assert_eq!(measure.measure("hello", &style).width, 5.0);
/// assert_eq!(measure.measure("你好", &style).width, 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMeasure {
    /// Advance of one cell in pixels.
    pub cell: Extent,
}

impl CellMeasure {
    /// A grid with the given cell advance.
    #[inline]
    pub const fn new(cell: Extent) -> Self {
        Self { cell }
    }

    /// Unit cells: width equals the display cell count.
    #[inline]
    pub const fn unit() -> Self {
        Self::new(Extent::new(1.0, 1.0))
    }
}

impl Default for CellMeasure {
    fn default() -> Self {
        Self::unit()
    }
}

impl TextMeasure for CellMeasure {
    fn measure(&self, text: &str, _style: &TextStyle) -> Extent {
        let cells = labelfit_core::text_width::display_width(text) as f32;
        Extent::new(cells * self.cell.width, self.cell.height)
    }
}
