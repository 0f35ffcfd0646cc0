//! The epicycle chain: a coefficient table plus its clock, evaluated into
//! partial-sum positions.

use log::trace;

use crate::clock::VectorClock;
use crate::coefficients::{ApproximationConfig, CoefficientTable, FourierTerm};
use crate::error::EpicycleError;
use crate::path::{Point2, SamplePath};

/// A truncated Fourier approximation of a 2-D path, evaluated as a chain of
/// rotating vectors.
///
/// The table is computed once at construction and never changes; the clock is
/// the only mutable state. Evaluation is a pure function of the table and a
/// time value, so a renderer can probe any `t` without disturbing playback.
#[derive(Debug, Clone, PartialEq)]
pub struct Epicycles {
    table: CoefficientTable,
    clock: VectorClock,
}

impl Epicycles {
    /// Sample `path` and build the approximation per `config`, with a fresh
    /// clock at time 0.
    pub fn from_path(
        path: &impl SamplePath,
        config: &ApproximationConfig,
    ) -> Result<Self, EpicycleError> {
        Ok(Self::from_table(CoefficientTable::from_path(path, config)?))
    }

    /// Wrap a precomputed table, with a fresh clock at time 0.
    pub fn from_table(table: CoefficientTable) -> Self {
        trace!("epicycle chain with {} terms", table.len());
        Self {
            table,
            clock: VectorClock::new(),
        }
    }

    pub fn table(&self) -> &CoefficientTable {
        &self.table
    }

    pub fn clock(&self) -> &VectorClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut VectorClock {
        &mut self.clock
    }

    /// The running vector sums at time `t`: the origin first, then one
    /// position per term, each the previous position plus the term's rotated
    /// vector. The final position is the traced point of the approximated
    /// path.
    pub fn partial_sums(&self, t: f64) -> PartialSums<'_> {
        PartialSums {
            terms: self.table.terms().iter(),
            position: [0.0, 0.0],
            t,
            emitted_origin: false,
        }
    }

    /// Per-term circle and vector geometry at time `t`, in nesting order.
    /// This is everything a renderer needs to place the drawing.
    pub fn terms(&self, t: f64) -> EpicycleTerms<'_> {
        EpicycleTerms {
            terms: self.table.terms().iter(),
            position: [0.0, 0.0],
            t,
        }
    }

    /// The final partial sum at `t` without materializing the chain.
    pub fn tip(&self, t: f64) -> Point2 {
        let mut position = [0.0, 0.0];
        for term in self.table.terms() {
            let z = term.rotated(t);
            position[0] += z.re;
            position[1] += z.im;
        }
        position
    }

    /// [`tip`](Self::tip) at the clock's current time.
    pub fn current_tip(&self) -> Point2 {
        self.tip(self.clock.value())
    }

    // Clock passthroughs, so a chain can be driven without reaching into it.

    pub fn time(&self) -> f64 {
        self.clock.value()
    }

    pub fn set_time(&mut self, t: f64) {
        self.clock.set_value(t);
    }

    pub fn start(&mut self, rate: f64) {
        self.clock.start(rate);
    }

    pub fn stop(&mut self) {
        self.clock.stop();
    }

    pub fn tick(&mut self, dt: f64) -> f64 {
        self.clock.tick(dt)
    }
}

/// Iterator over the partial-sum chain at a fixed time. Restart it by calling
/// [`Epicycles::partial_sums`] again.
#[derive(Debug, Clone)]
pub struct PartialSums<'a> {
    terms: std::slice::Iter<'a, FourierTerm>,
    position: Point2,
    t: f64,
    emitted_origin: bool,
}

impl Iterator for PartialSums<'_> {
    type Item = Point2;

    fn next(&mut self) -> Option<Point2> {
        if !self.emitted_origin {
            self.emitted_origin = true;
            return Some(self.position);
        }

        let term = self.terms.next()?;
        let z = term.rotated(self.t);
        self.position[0] += z.re;
        self.position[1] += z.im;
        Some(self.position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.terms.len() + usize::from(!self.emitted_origin);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PartialSums<'_> {}

/// One epicycle: the circle at `center` with `radius`, and the vector from
/// `center` to `tip`. The next term's circle is centered on this `tip`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpicycleTerm {
    pub frequency: i32,
    pub center: Point2,
    pub tip: Point2,
    pub radius: f64,
}

/// Iterator over per-term geometry at a fixed time.
#[derive(Debug, Clone)]
pub struct EpicycleTerms<'a> {
    terms: std::slice::Iter<'a, FourierTerm>,
    position: Point2,
    t: f64,
}

impl Iterator for EpicycleTerms<'_> {
    type Item = EpicycleTerm;

    fn next(&mut self) -> Option<EpicycleTerm> {
        let term = self.terms.next()?;
        let center = self.position;
        let z = term.rotated(self.t);
        self.position[0] += z.re;
        self.position[1] += z.im;

        Some(EpicycleTerm {
            frequency: term.frequency,
            center,
            tip: self.position,
            radius: term.radius(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.terms.size_hint()
    }
}

impl ExactSizeIterator for EpicycleTerms<'_> {}
