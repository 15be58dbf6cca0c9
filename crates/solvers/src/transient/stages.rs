use stepwise_core::VectorField;

use super::evaluate::{EvalError, evaluate_into};

/// Stage buffers for one integration run.
///
/// All buffers are sized once from the state dimension and reused for every
/// step (and every retry of an adaptive step).
pub(crate) struct Stages<const S: usize> {
    k: [Vec<f64>; S],
    probe: Vec<f64>,
    evaluations: usize,
}

impl<const S: usize> Stages<S> {
    pub(crate) fn new(dim: usize) -> Self {
        Self {
            k: std::array::from_fn(|_| vec![0.0; dim]),
            probe: vec![0.0; dim],
            evaluations: 0,
        }
    }

    /// Evaluates every stage of a step of size `h` from `(s, r)`.
    ///
    /// # Errors
    ///
    /// Returns an error as soon as one stage evaluation fails.
    pub(crate) fn compute<F: VectorField>(
        &mut self,
        field: &F,
        c: &[f64; S],
        a: &[[f64; S]; S],
        s: f64,
        r: &[f64],
        h: f64,
    ) -> Result<(), EvalError<F::Error>> {
        for i in 0..S {
            let (done, rest) = self.k.split_at_mut(i);
            combine_into(&mut self.probe, r, h, &a[i][..i], done);
            self.evaluations += 1;
            evaluate_into(field, s + c[i] * h, &self.probe, &mut rest[0])?;
        }
        Ok(())
    }

    /// Writes `r + h·Σ weights[i]·k[i]` into `out`.
    pub(crate) fn combine(&self, r: &[f64], h: f64, weights: &[f64; S], out: &mut [f64]) {
        combine_into(out, r, h, weights, &self.k);
    }

    /// Returns the number of field evaluations performed so far.
    pub(crate) fn evaluations(&self) -> usize {
        self.evaluations
    }
}

fn combine_into(out: &mut [f64], r: &[f64], h: f64, weights: &[f64], k: &[Vec<f64>]) {
    out.copy_from_slice(r);
    for (&w, k) in weights.iter().zip(k) {
        if w == 0.0 {
            continue;
        }
        for (out, k) in out.iter_mut().zip(k) {
            *out += h * w * k;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::transient::Tableau;

    #[test]
    fn stages_probe_at_tableau_nodes() {
        // f(s, r) = s, so each stage records where it was evaluated.
        let field = |s: f64, _r: &[f64]| vec![s];
        let t = Tableau::<4>::RK4;
        let mut stages = Stages::<4>::new(1);

        stages.compute(&field, &t.c, &t.a, 1.0, &[0.0], 0.2).unwrap();

        let nodes: Vec<f64> = stages.k.iter().map(|k| k[0]).collect();
        assert_relative_eq!(nodes[0], 1.0);
        assert_relative_eq!(nodes[1], 1.1);
        assert_relative_eq!(nodes[2], 1.1);
        assert_relative_eq!(nodes[3], 1.2);
        assert_eq!(stages.evaluations(), 4);
    }

    #[test]
    fn first_stage_sees_the_unmodified_state() {
        let field = |_s: f64, r: &[f64]| r.to_vec();
        let t = Tableau::<2>::HEUN;
        let mut stages = Stages::<2>::new(2);

        stages.compute(&field, &t.c, &t.a, 0.0, &[1.0, -2.0], 0.5).unwrap();

        assert_eq!(stages.k[0], vec![1.0, -2.0]);
        // Second stage probes r + h·k1.
        assert_eq!(stages.k[1], vec![1.5, -3.0]);
    }

    #[test]
    fn combine_skips_zero_weights() {
        let mut stages = Stages::<2>::new(1);
        stages.k[0][0] = f64::NAN;
        stages.k[1][0] = 4.0;
        let mut out = [0.0];

        stages.combine(&[1.0], 0.5, &[0.0, 1.0], &mut out);

        assert_eq!(out, [3.0]);
    }
}
