use std::{iter::StepBy, slice::ChunksExact};

/// A single `(s, r)` sample borrowed from a [`Trajectory`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<'a> {
    /// The independent variable.
    pub s: f64,

    /// The state vector at `s`.
    pub r: &'a [f64],
}

/// An ordered sequence of `(s, r)` samples produced by an integrator.
///
/// Storage is sized once from the initial condition: one buffer holds the
/// independent variable for each sample and one flat, row-major buffer holds
/// the state vectors. Sample 0 is always the initial condition exactly.
///
/// A trajectory is never empty and all of its states share the dimension of
/// the initial state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trajectory {
    dim: usize,
    #[cfg_attr(feature = "serde", serde(skip))]
    capacity: usize,
    s: Vec<f64>,
    r: Vec<f64>,
}

impl Trajectory {
    /// Creates a trajectory holding only the initial sample `(s0, r0)`.
    ///
    /// Space for `capacity` samples is reserved up front; a capacity of zero
    /// is treated as one, since the initial sample is always stored.
    ///
    /// # Panics
    ///
    /// Panics if `r0` is empty.
    #[must_use]
    pub fn new(s0: f64, r0: &[f64], capacity: usize) -> Self {
        assert!(!r0.is_empty(), "state vector must have at least one component");
        let capacity = capacity.max(1);
        let dim = r0.len();

        let mut s = Vec::with_capacity(capacity);
        let mut r = Vec::with_capacity(capacity * dim);
        s.push(s0);
        r.extend_from_slice(r0);

        Self { dim, capacity, s, r }
    }

    /// Appends a sample.
    ///
    /// The state must have the trajectory's dimension, and the trajectory
    /// must not already be at capacity.
    pub fn push(&mut self, s: f64, r: &[f64]) {
        debug_assert_eq!(r.len(), self.dim, "state dimension changed mid-run");
        debug_assert!(self.s.len() < self.capacity, "trajectory is full");

        self.s.push(s);
        self.r.extend_from_slice(r);
    }

    /// Returns the number of samples stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.s.len()
    }

    /// Always `false`: the initial sample is stored on construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.s.is_empty()
    }

    /// Returns the number of samples the trajectory was sized for.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` once the trajectory holds `capacity` samples.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.s.len() >= self.capacity
    }

    /// Returns the dimension of each state vector.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the independent variable of every sample.
    #[must_use]
    pub fn s(&self) -> &[f64] {
        &self.s
    }

    /// Returns the state vector of sample `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn state(&self, index: usize) -> &[f64] {
        let start = index * self.dim;
        &self.r[start..start + self.dim]
    }

    /// Returns sample `index`, or `None` if it is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Sample<'_>> {
        let s = *self.s.get(index)?;
        Some(Sample {
            s,
            r: self.state(index),
        })
    }

    /// Returns the initial sample.
    #[must_use]
    pub fn first(&self) -> Sample<'_> {
        Sample {
            s: self.s[0],
            r: self.state(0),
        }
    }

    /// Returns the most recent sample.
    #[must_use]
    pub fn last(&self) -> Sample<'_> {
        let index = self.s.len() - 1;
        Sample {
            s: self.s[index],
            r: self.state(index),
        }
    }

    /// Iterates over the state vectors in sample order.
    pub fn states(&self) -> ChunksExact<'_, f64> {
        self.r.chunks_exact(self.dim)
    }

    /// Iterates over component `j` of every state, in sample order.
    ///
    /// # Panics
    ///
    /// Panics if `j >= self.dim()`.
    pub fn component(&self, j: usize) -> StepBy<std::slice::Iter<'_, f64>> {
        assert!(j < self.dim, "component {j} out of range for dim {}", self.dim);
        self.r[j..].iter().step_by(self.dim)
    }

    /// Iterates over all samples in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Sample<'_>> {
        self.s
            .iter()
            .zip(self.states())
            .map(|(&s, r)| Sample { s, r })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_samples() -> Trajectory {
        let mut trajectory = Trajectory::new(0.0, &[1.0, 10.0], 3);
        trajectory.push(0.5, &[2.0, 20.0]);
        trajectory.push(1.0, &[3.0, 30.0]);
        trajectory
    }

    #[test]
    fn initial_sample_is_stored_on_construction() {
        let trajectory = Trajectory::new(2.5, &[1.0, -1.0, 0.0], 10);

        assert_eq!(trajectory.len(), 1);
        assert!(!trajectory.is_empty());
        assert_eq!(trajectory.dim(), 3);
        assert_eq!(trajectory.capacity(), 10);
        assert_eq!(
            trajectory.first(),
            Sample {
                s: 2.5,
                r: &[1.0, -1.0, 0.0]
            }
        );
        assert_eq!(trajectory.first(), trajectory.last());
    }

    #[test]
    fn zero_capacity_still_holds_initial_sample() {
        let trajectory = Trajectory::new(0.0, &[1.0], 0);

        assert_eq!(trajectory.capacity(), 1);
        assert!(trajectory.is_full());
    }

    #[test]
    fn samples_are_laid_out_in_order() {
        let trajectory = three_samples();

        assert!(trajectory.is_full());
        assert_eq!(trajectory.s(), &[0.0, 0.5, 1.0]);
        assert_eq!(trajectory.state(1), &[2.0, 20.0]);
        assert_eq!(trajectory.last().r, &[3.0, 30.0]);
        assert_eq!(trajectory.get(3), None);
    }

    #[test]
    fn components_stride_across_samples() {
        let trajectory = three_samples();

        let first: Vec<f64> = trajectory.component(0).copied().collect();
        let second: Vec<f64> = trajectory.component(1).copied().collect();

        assert_eq!(first, vec![1.0, 2.0, 3.0]);
        assert_eq!(second, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn iterates_samples() {
        let trajectory = three_samples();

        let s: Vec<f64> = trajectory.iter().map(|sample| sample.s).collect();
        let sums: Vec<f64> = trajectory
            .iter()
            .map(|sample| sample.r.iter().sum())
            .collect();

        assert_eq!(trajectory.iter().len(), 3);
        assert_eq!(s, vec![0.0, 0.5, 1.0]);
        assert_eq!(sums, vec![11.0, 22.0, 33.0]);
    }

    #[test]
    #[should_panic(expected = "at least one component")]
    fn empty_state_panics() {
        let _ = Trajectory::new(0.0, &[], 1);
    }

    #[test]
    #[should_panic(expected = "component 2 out of range")]
    fn component_out_of_range_panics() {
        let _ = three_samples().component(2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_samples_without_capacity() {
        let mut trajectory = Trajectory::new(0.0, &[1.0], 10);
        trajectory.push(0.5, &[2.0]);

        let text = toml::to_string(&trajectory).unwrap();
        let value: toml::Table = text.parse().unwrap();

        assert_eq!(value["dim"].as_integer(), Some(1));
        assert_eq!(value["s"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["r"][1].as_float(), Some(2.0));
        assert!(!value.contains_key("capacity"));
    }
}
