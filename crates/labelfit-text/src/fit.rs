#![forbid(unsafe_code)]

//! Maximal-prefix line fitting.
//!
//! Fits one line of text into a pixel width budget by binary-searching over
//! split points for the longest prefix that fits, then recursing on the
//! remainder. Splitting is two-phase: word boundaries (single ASCII spaces)
//! first, individual grapheme clusters as the fallback when no word-level
//! break can produce a fitting prefix.
//!
//! The caller supplies the measurement function; the fitter never computes
//! widths itself.
//!
//! # Example
//! ```
//! use labelfit_text::fit::fit_line;
//!
//! let measure = |s: &str| s.chars().count() as f32;
//! assert_eq!(fit_line("hello world", 5.0, measure), ["hello", "world"]);
//! assert_eq!(fit_line("abcdefgh", 5.0, measure), ["abcde", "fgh"]);
//! ```

use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

/// How a line is split into candidate break units.
///
/// The mode carries its separator so the recursion's join handling stays
/// unambiguous: a word break consumes the single space at the junction, a
/// character break consumes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// Split on single ASCII spaces into words.
    Word,
    /// Split into extended grapheme clusters.
    Char,
}

impl SplitMode {
    /// The separator this mode splits on and re-inserts when joining.
    #[inline]
    pub const fn separator(self) -> &'static str {
        match self {
            SplitMode::Word => " ",
            SplitMode::Char => "",
        }
    }
}

/// Byte length of the joined prefix for each part count `1..=n`.
///
/// Because the parts are contiguous slices of the line around single-byte
/// (or empty) separators, prefix `k` of the split is exactly
/// `&line[..ends[k - 1]]` — no joining required, and reconstruction of the
/// input from the emitted segments is exact by construction.
type PrefixEnds = SmallVec<[usize; 16]>;

fn prefix_ends(line: &str, mode: SplitMode) -> PrefixEnds {
    let mut ends = PrefixEnds::new();
    match mode {
        SplitMode::Word => {
            let mut len = 0;
            for part in line.split(' ') {
                len = if ends.is_empty() {
                    part.len()
                } else {
                    len + 1 + part.len()
                };
                ends.push(len);
            }
        }
        SplitMode::Char => {
            let mut len = 0;
            for grapheme in line.graphemes(true) {
                len += grapheme.len();
                ends.push(len);
            }
        }
    }
    ends
}

#[inline]
fn prefix_len(ends: &PrefixEnds, count: usize) -> usize {
    if count == 0 { 0 } else { ends[count - 1] }
}

/// Fit one line (no embedded newlines) into a width budget.
///
/// Returns the ordered segments whose join — with the separator that
/// produced each break — reconstructs `line` exactly. Every segment measures
/// within `max_width`, except the documented overflow returns: a line of
/// fewer than two characters, or a line whose first character alone exceeds
/// the budget, comes back verbatim as a single oversized segment rather
/// than being truncated.
///
/// `measure` must be pure and monotonic non-decreasing under prefix
/// extension for the search to find the *maximal* fitting prefix; a
/// pathological measure degrades the result to merely reconstructible but
/// cannot prevent termination.
#[must_use]
pub fn fit_line<F>(line: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut segments = Vec::new();
    fit_into(line, max_width, &measure, &mut segments);
    segments
}

fn fit_into<F>(line: &str, max_width: f32, measure: &F, out: &mut Vec<String>)
where
    F: Fn(&str) -> f32,
{
    // Below two characters there is nothing left to split.
    let mut clusters = line.graphemes(true);
    let first = clusters.next().unwrap_or("");
    if clusters.next().is_none() {
        out.push(line.to_string());
        return;
    }

    // The whole line already fits.
    if measure(line) <= max_width {
        out.push(line.to_string());
        return;
    }

    // Even the first character alone overflows: emit the line verbatim and
    // let the caller tolerate the overflow.
    if measure(first) > max_width {
        out.push(line.to_string());
        return;
    }

    let mut mode = SplitMode::Word;

    'mode: loop {
        let ends = prefix_ends(line, mode);
        let part_count = ends.len();

        // A line without a splittable space has a single word part; retry
        // on character units.
        if part_count < 2 && mode == SplitMode::Word {
            mode = SplitMode::Char;
            continue 'mode;
        }

        // Binary search for the maximal fitting prefix. `k` is the current
        // prefix count, `step` the roughly-halving stride, and
        // `lower`/`upper` the bracket established so far.
        let mut k = (part_count + 1) / 2;
        let mut step = 1;
        let mut lower = 0;
        let mut upper = part_count - 1;

        loop {
            let split = prefix_len(&ends, k);
            let width = measure(&line[..split]);

            if step > 0 && width < max_width {
                // Fits and still converging: raise the bracket and floor the
                // step, so the search settles on the fitting candidate
                // instead of oscillating with its non-fitting neighbor when
                // the index difference is down to one.
                lower = k;
                step = (upper - lower) / 2;
                k += step;
            } else if step > 0 && width > max_width {
                // Does not fit and still converging: lower the bracket and
                // ceil the step, so an overshoot can always back off to a
                // smaller fitting candidate even from one index away.
                upper = k;
                step = (upper - lower + 1) / 2;
                k -= step;
            } else if k > 0 && width <= max_width {
                // Stable at a non-empty fitting prefix: emit it and fit the
                // rest of the line, minus the separator consumed by the
                // break, under the same budget.
                out.push(line[..split].to_string());
                let rest = &line[split + mode.separator().len()..];
                fit_into(rest, max_width, measure, out);
                return;
            } else if mode == SplitMode::Word {
                // Stable at zero or one words and the word itself overflows
                // the budget: restart the whole line on character units
                // rather than emitting an oversized word.
                tracing::debug!(
                    len = line.len(),
                    "no fitting word prefix, retrying as characters"
                );
                mode = SplitMode::Char;
                continue 'mode;
            } else {
                // Stable at zero or one characters with no further fallback.
                // Accept the prefix anyway, clamped to one cluster so the
                // remainder always shrinks. Only a non-monotonic measure can
                // reach this with the first-character check already passed.
                let split = prefix_len(&ends, k.max(1));
                out.push(line[..split].to_string());
                fit_into(&line[split..], max_width, measure, out);
                return;
            }
        }
    }
}
