//! Frequency sets and truncated Fourier coefficient tables.

use std::f64::consts::TAU;

use log::debug;
use num_complex::Complex64;
use rustfft::FftPlanner;

use crate::error::EpicycleError;
use crate::path::SamplePath;

/// Settings for sampling a path and truncating its Fourier series.
///
/// The defaults match what a full outline drawing typically needs: 100
/// rotating vectors estimated from 2000 uniform samples.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApproximationConfig {
    /// Number of rotating vectors. Resolved to the symmetric frequency span
    /// `-K..=K` with `K = vector_count / 2`, so the table ends up with an odd
    /// number of terms.
    pub vector_count: usize,
    /// Number of uniform samples taken from the path. Must be at least
    /// `vector_count` so every frequency maps to a distinct bin.
    pub sample_count: usize,
    /// Uniform scale applied to every coefficient, and thereby to the whole
    /// drawing.
    pub scale: f64,
}

impl Default for ApproximationConfig {
    fn default() -> Self {
        Self {
            vector_count: 100,
            sample_count: 2000,
            scale: 1.0,
        }
    }
}

/// One frequency term of the truncated series.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FourierTerm {
    /// Rotations per unit time. Negative frequencies rotate clockwise.
    pub frequency: i32,
    /// Radius (magnitude) and starting phase (argument) of this term's circle.
    pub coefficient: Complex64,
}

impl FourierTerm {
    /// The circle radius of this term.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.coefficient.norm()
    }

    /// The rotated vector at time `t`: `coefficient · e^(2πi·frequency·t)`.
    #[inline]
    pub fn rotated(&self, t: f64) -> Complex64 {
        self.coefficient * Complex64::from_polar(1.0, TAU * self.frequency as f64 * t)
    }
}

/// The symmetric frequency span for `vector_count` terms, ordered by ascending
/// absolute value with the negative frequency first on ties.
///
/// This ordering governs how the circles nest visually, from the slow outer
/// rotations to the fast inner ones, and is the storage order of
/// [`CoefficientTable`].
pub fn symmetric_frequencies(vector_count: usize) -> Vec<i32> {
    let half = (vector_count / 2) as i32;
    let mut freqs: Vec<i32> = (-half..=half).collect();
    freqs.sort_by_key(|f| (f.abs(), *f));
    freqs
}

/// An immutable, ordered table of `(frequency, coefficient)` pairs.
///
/// Each coefficient is the discrete-time mean of `sample(t)·e^(−2πi·f·t)` over
/// uniform samples `t = n/N`, the least-squares best fit for that frequency.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoefficientTable {
    terms: Vec<FourierTerm>,
}

impl CoefficientTable {
    /// Sample `path` at `config.sample_count` uniform proportions in `[0, 1)`
    /// and estimate the coefficients for the resolved frequency span.
    ///
    /// The per-frequency means are DFT bins (`coefficient(f) = X[f mod N] / N`
    /// for the forward transform `X` of the complex samples), so they are all
    /// computed with a single FFT.
    pub fn from_path(
        path: &impl SamplePath,
        config: &ApproximationConfig,
    ) -> Result<Self, EpicycleError> {
        if config.vector_count == 0 {
            return Err(EpicycleError::InvalidVectorCount);
        }
        if config.sample_count == 0 || config.sample_count < config.vector_count {
            return Err(EpicycleError::InvalidSampleCount {
                sample_count: config.sample_count,
                vector_count: config.vector_count,
            });
        }

        let n = config.sample_count;
        let mut samples = Vec::with_capacity(n);
        for i in 0..n {
            let t = i as f64 / n as f64;
            let [x, y] = path.point_from_proportion(t)?;
            samples.push(Complex64::new(x, y));
        }

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(n);
        fft.process(&mut samples);

        let freqs = symmetric_frequencies(config.vector_count);
        let terms: Vec<FourierTerm> = freqs
            .iter()
            .map(|&f| {
                let bin = (f as i64).rem_euclid(n as i64) as usize;
                FourierTerm {
                    frequency: f,
                    coefficient: samples[bin] * (config.scale / n as f64),
                }
            })
            .collect();

        debug!(
            "estimated {} coefficients from {} samples (scale {})",
            terms.len(),
            n,
            config.scale
        );

        Ok(Self { terms })
    }

    /// Build a table from precomputed terms, for example deserialized ones.
    /// The terms are reordered by ascending `|frequency|` so evaluation nests
    /// low to high frequency.
    pub fn from_terms(mut terms: Vec<FourierTerm>) -> Self {
        terms.sort_by_key(|term| (term.frequency.abs(), term.frequency));
        Self { terms }
    }

    pub fn terms(&self) -> &[FourierTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FourierTerm> {
        self.terms.iter()
    }
}
