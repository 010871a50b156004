use crate::bucket::BucketPass;
use sortvis_core::{RunError, RunOptions, Step, StepIter, StepProducer};

/// LSD radix sort, base 10: one stable bucket pass per digit until the
/// exponent exceeds the maximum.
///
/// Digit extraction assumes non-negative values, so negative input is
/// refused before any step is produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadixSort;

impl StepProducer for RadixSort {
    fn key(&self) -> &'static str {
        "radix"
    }

    fn display_name(&self) -> &'static str {
        "Radix Sort"
    }

    fn produce_steps(&self, input: Vec<i64>, _options: &RunOptions) -> Result<StepIter, RunError> {
        if let Some(&negative) = input.iter().find(|&&v| v < 0) {
            return Err(RunError::InvalidInput(format!(
                "Radix Sort only supports non-negative integers (found {negative})."
            )));
        }
        let max = input.iter().copied().max().unwrap_or(0);
        let pass = (max > 0).then(|| BucketPass::new(10, input.len()));
        Ok(Box::new(RadixSteps {
            arr: input,
            max,
            exp: 1,
            pass,
        }))
    }
}

struct RadixSteps {
    arr: Vec<i64>,
    max: i64,
    exp: i64,
    /// `None` once every digit has been processed.
    pass: Option<BucketPass>,
}

impl Iterator for RadixSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            let pass = self.pass.as_mut()?;
            let exp = self.exp;
            if let Some(step) = pass.advance(&mut self.arr, |v| ((v / exp) % 10) as usize) {
                return Some(step);
            }
            self.pass = match self.exp.checked_mul(10) {
                Some(next) if self.max / next > 0 => {
                    self.exp = next;
                    Some(BucketPass::new(10, self.arr.len()))
                }
                _ => None,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(input: &[i64]) -> Vec<Step> {
        RadixSort
            .produce_steps(input.to_vec(), &RunOptions::default())
            .unwrap()
            .collect()
    }

    #[test]
    fn one_pass_per_digit() {
        // Max 802 has three digits: 3 passes x 3 phases x 8 elements.
        let s = steps(&[170, 45, 75, 90, 802, 24, 2, 66]);
        assert_eq!(s.len(), 72);
        assert_eq!(s.last().unwrap().array, vec![2, 24, 45, 66, 75, 90, 170, 802]);
    }

    #[test]
    fn all_zero_has_no_steps() {
        assert!(steps(&[0, 0, 0]).is_empty());
    }

    #[test]
    fn negative_input_is_refused() {
        let err = RadixSort
            .produce_steps(vec![3, -1, 2], &RunOptions::default())
            .err()
            .unwrap();
        assert!(matches!(err, RunError::InvalidInput(msg) if msg.contains("-1")));
    }

    #[test]
    fn near_max_values_stop_without_overflow() {
        let s = steps(&[i64::MAX, 0, 1]);
        assert_eq!(s.last().unwrap().array, vec![0, 1, i64::MAX]);
    }
}
