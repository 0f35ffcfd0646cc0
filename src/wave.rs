//! Real-valued sinusoid sums: the one-dimensional companion to the epicycle
//! chain, for decomposing a waveform into phase-locked cosine components.

use std::f64::consts::{FRAC_PI_2, PI};

/// A single component `amplitude · cos(frequency·x + phase)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sinusoid {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
}

impl Sinusoid {
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.amplitude * (self.frequency * x + self.phase).cos()
    }

    /// Evaluate at `x + phi`: a common drive `phi` shifts every component in
    /// lockstep, which keeps the summed waveform rigid while it scrolls.
    #[inline]
    pub fn eval_shifted(&self, x: f64, phi: f64) -> f64 {
        self.eval(x + phi)
    }
}

/// A pointwise sum of sinusoid components.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveSum {
    components: Vec<Sinusoid>,
}

impl WaveSum {
    pub fn new(components: Vec<Sinusoid>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[Sinusoid] {
        &self.components
    }

    pub fn push(&mut self, component: Sinusoid) {
        self.components.push(component);
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.components.iter().map(|c| c.eval(x)).sum()
    }

    pub fn eval_shifted(&self, x: f64, phi: f64) -> f64 {
        self.components.iter().map(|c| c.eval_shifted(x, phi)).sum()
    }
}

/// The truncated Fourier series of the square wave `sgn(sin(omega·x))`:
/// `4/π · Σ sin((2n+1)·omega·x) / (2n+1)` over the first `harmonics` odd
/// terms.
pub fn square_wave_partial(harmonics: usize, omega: f64) -> WaveSum {
    let components = (0..harmonics)
        .map(|n| {
            let k = (2 * n + 1) as f64;
            // sin θ = cos(θ − π/2)
            Sinusoid::new(4.0 / (PI * k), k * omega, -FRAC_PI_2)
        })
        .collect();
    WaveSum::new(components)
}
