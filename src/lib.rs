//! Truncated Fourier approximation of 2-D paths, evaluated as chains of
//! rotating vectors ("epicycles").
//!
//! The crate samples a parametric curve uniformly, treats each point as a
//! complex number, and estimates a truncated Fourier series of the outline.
//! Evaluating the series at a time `t` yields the running vector sums of the
//! chain: every term is a circle centered on the previous partial sum, and the
//! final sum traces the approximated path. The output is pure geometry;
//! drawing circles, vectors, and the traced tail is the caller's business.
//!
//! ```
//! use epicycles::{ApproximationConfig, Epicycles};
//! use std::f64::consts::TAU;
//!
//! // A circle needs exactly one rotating vector.
//! let circle = |t: f64| [(TAU * t).cos(), (TAU * t).sin()];
//! let epicycles = Epicycles::from_path(
//!     &circle,
//!     &ApproximationConfig {
//!         vector_count: 3,
//!         sample_count: 64,
//!         scale: 1.0,
//!     },
//! )?;
//!
//! let [x, y] = epicycles.tip(0.0);
//! assert!((x - 1.0).abs() < 1e-9 && y.abs() < 1e-9);
//! # Ok::<(), epicycles::EpicycleError>(())
//! ```

pub mod clock;
pub mod coefficients;
pub mod epicycles;
pub mod error;
pub mod path;
pub mod trace;
pub mod wave;

pub use clock::VectorClock;
pub use coefficients::{symmetric_frequencies, ApproximationConfig, CoefficientTable, FourierTerm};
pub use epicycles::{EpicycleTerm, EpicycleTerms, Epicycles, PartialSums};
pub use error::EpicycleError;
pub use path::{Point2, Polyline, SamplePath};
pub use trace::TipTrace;
pub use wave::{square_wave_partial, Sinusoid, WaveSum};
