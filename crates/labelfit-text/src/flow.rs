#![forbid(unsafe_code)]

//! Multi-line flow orchestration and block extents.
//!
//! Explicit newlines are hard breaks, distinct from the soft breaks the
//! fitter introduces: a block of text is split on `'\n'` first, each
//! resulting line is fitted independently, and the segment sequences are
//! concatenated in original order. The extent queries reproduce what a host
//! needs to size a label: the widest fitted line by the stacked line
//! heights, plus its paddings.

use crate::fit::fit_line;
use crate::measure::TextMeasure;
use labelfit_core::{Extent, Insets, TextStyle};

/// Fit a multi-line block of text against a shared width budget.
///
/// # Example
/// ```
/// use labelfit_text::flow::fit_block;
///
/// let measure = |s: &str| s.chars().count() as f32;
/// let lines = fit_block("hello world\nhi", 5.0, measure);
/// assert_eq!(lines, ["hello", "world", "hi"]);
/// ```
#[must_use]
pub fn fit_block<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut segments = Vec::new();
    for line in text.split('\n') {
        segments.extend(fit_line(line, max_width, &measure));
    }
    segments
}

/// Caller-facing handle binding a measurement capability to a text style.
///
/// Hosts re-fit whenever text, available width, or style changes; the
/// handle keeps the style-bound width function in one place so those call
/// sites stay declarative.
#[derive(Clone, Copy)]
pub struct Fitter<'a, M: TextMeasure + ?Sized> {
    measure: &'a M,
    style: TextStyle,
}

impl<'a, M: TextMeasure + ?Sized> Fitter<'a, M> {
    /// Bind a measurement backend and style.
    pub fn new(measure: &'a M, style: TextStyle) -> Self {
        Self { measure, style }
    }

    /// The bound style.
    #[inline]
    pub fn style(&self) -> TextStyle {
        self.style
    }

    /// Fit one line against the width budget.
    #[must_use]
    pub fn fit_line(&self, line: &str, max_width: f32) -> Vec<String> {
        fit_line(line, max_width, |s| {
            self.measure.measure(s, &self.style).width
        })
    }

    /// Fit a multi-line block against the width budget.
    #[must_use]
    pub fn fit_block(&self, text: &str, max_width: f32) -> Vec<String> {
        let mut segments = Vec::new();
        for line in text.split('\n') {
            segments.extend(self.fit_line(line, max_width));
        }
        segments
    }

    /// Extent of already-fitted lines: widest line by stacked heights.
    #[must_use]
    pub fn block_extent(&self, lines: &[String]) -> Extent {
        lines.iter().fold(Extent::default(), |block, line| {
            block.stack(self.measure.measure(line, &self.style))
        })
    }

    /// Minimum outer size a container needs to show `text` fitted to the
    /// given inner width budget, with `insets` around the text area.
    #[must_use]
    pub fn min_extent(&self, text: &str, max_width: f32, insets: Insets) -> Extent {
        let lines = self.fit_block(text, max_width);
        self.block_extent(&lines).outset(insets)
    }
}
