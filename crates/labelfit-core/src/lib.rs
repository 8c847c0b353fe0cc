#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core substrate for labelfit: geometry, style parameters, display width.
//!
//! # Role in labelfit
//! `labelfit-core` holds the plain-data types the text engine is written
//! against: measured sizes, per-edge paddings, and the style parameters a
//! measurement backend keys on. It also provides the display-width helpers
//! that back the synthetic cell measurer.
//!
//! # How it fits in the system
//! The engine (`labelfit-text`) consumes these types but never renders;
//! the host layout layer owns real font measurement and feeds budgets
//! derived from [`Insets::inner_width`] into the fitter.

pub mod geometry;
pub mod style;
pub mod text_width;

pub use geometry::{Extent, Insets};
pub use style::TextStyle;
