use crate::bucket::BucketPass;
use sortvis_core::{RunError, RunOptions, Step, StepIter, StepProducer};

/// Counting sort over `max - min + 1` counters.
///
/// Refuses to start when that span exceeds
/// [`RunOptions::max_counting_range`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingSort;

impl StepProducer for CountingSort {
    fn key(&self) -> &'static str {
        "counting"
    }

    fn display_name(&self) -> &'static str {
        "Counting Sort"
    }

    fn produce_steps(&self, input: Vec<i64>, options: &RunOptions) -> Result<StepIter, RunError> {
        let (Some(&min), Some(&max)) = (input.iter().min(), input.iter().max()) else {
            return Err(RunError::InvalidInput(
                "input must contain at least one number".into(),
            ));
        };
        let span = max.abs_diff(min).saturating_add(1);
        if span > options.max_counting_range {
            return Err(RunError::RangeTooLarge {
                span,
                limit: options.max_counting_range,
            });
        }
        let buckets = usize::try_from(span).map_err(|e| RunError::Other(Box::new(e)))?;
        let pass = BucketPass::new(buckets, input.len());
        Ok(Box::new(CountingSteps {
            arr: input,
            min,
            pass,
        }))
    }
}

struct CountingSteps {
    arr: Vec<i64>,
    min: i64,
    pass: BucketPass,
}

impl Iterator for CountingSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let min = self.min;
        // Bounded by the span check, so the offset fits in usize.
        self.pass
            .advance(&mut self.arr, |v| v.abs_diff(min) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(input: &[i64]) -> Vec<Step> {
        CountingSort
            .produce_steps(input.to_vec(), &RunOptions::default())
            .unwrap()
            .collect()
    }

    #[test]
    fn two_one() {
        assert_eq!(
            steps(&[2, 1]),
            vec![
                Step::single(&[2, 1], 0, false),
                Step::single(&[2, 1], 1, false),
                Step::single(&[1, 0], 0, true),
                Step::single(&[1, 2], 1, true),
                Step::single(&[1, 1], 0, true),
                Step::single(&[1, 2], 1, true),
            ]
        );
    }

    #[test]
    fn three_phases_of_n_steps() {
        let s = steps(&[4, 2, 2, 8, 3, 3, 1]);
        assert_eq!(s.len(), 21);
        assert_eq!(s.last().unwrap().array, vec![1, 2, 2, 3, 3, 4, 8]);
    }

    #[test]
    fn negatives_are_fine() {
        let s = steps(&[0, -3, 5, -3]);
        assert_eq!(s.last().unwrap().array, vec![-3, -3, 0, 5]);
    }

    #[test]
    fn wide_range_is_refused() {
        let options = RunOptions {
            max_counting_range: 100,
        };
        let err = CountingSort
            .produce_steps(vec![0, 100], &options)
            .err()
            .unwrap();
        assert!(matches!(err, RunError::RangeTooLarge { span: 101, limit: 100 }));

        let extreme = CountingSort.produce_steps(vec![i64::MIN, i64::MAX], &RunOptions::default());
        assert!(matches!(extreme, Err(RunError::RangeTooLarge { span: u64::MAX, .. })));
    }
}
