#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Text fitting for fixed-width label areas.
//!
//! # Role in labelfit
//! `labelfit-text` is the engine layer: given a string, a measurement
//! capability, and a width budget, it produces the ordered sequence of
//! segments that fit the budget. The host layout layer positions one
//! rendered line per segment, top to bottom; this crate never renders.
//!
//! # Primary responsibilities
//! - **fit**: the binary-search maximal-prefix line fitter with two-phase
//!   word→character splitting.
//! - **flow**: hard-break orchestration over multi-line blocks, plus block
//!   extent queries for host sizing.
//! - **measure**: the measurement capability seam and the synthetic cell
//!   measurer.
//! - **cache**: an LRU measurement cache with O(1) generation invalidation.
//!
//! # Example
//! ```
//! use labelfit_text::fit::fit_line;
//!
//! let measure = |s: &str| s.chars().count() as f32;
//! assert_eq!(fit_line("hello world", 5.0, measure), ["hello", "world"]);
//! assert_eq!(fit_line("abcdefgh", 5.0, measure), ["abcde", "fgh"]);
//! ```

pub mod cache;
pub mod fit;
pub mod flow;
pub mod measure;

pub use cache::{MeasureCache, MeasureCacheStats};
pub use fit::{SplitMode, fit_line};
pub use flow::{Fitter, fit_block};
pub use measure::{CellMeasure, TextMeasure};
