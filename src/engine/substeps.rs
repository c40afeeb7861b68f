//! Distribution of a sample budget across the segments of a gradient.

use tracing::trace;

use crate::error::StepsError;

/// Split `steps - 1` samples across the segments between consecutive `positions`.
///
/// Each segment gets a share proportional to its width, rounded, and never less than 1 so
/// that zero-width segments (hard edges) still produce a sample. Rounding drift is then
/// absorbed one unit at a time by the smallest or largest share.
///
/// `positions` must hold the sorted stop positions, starting at 0 and ending at 1.
pub fn allocate(positions: &[f64], steps: usize) -> Result<Vec<usize>, StepsError> {
    if steps < 2 {
        return Err(StepsError::TooFew { steps });
    }
    if steps < positions.len() {
        return Err(StepsError::FewerThanStops {
            steps,
            stops: positions.len(),
        });
    }

    let budget = steps - 1;
    let mut shares: Vec<usize> = positions
        .windows(2)
        .map(|pair| proportional_share(budget, pair[1] - pair[0]))
        .collect();

    let mut total: usize = shares.iter().sum();
    while total != budget {
        if total < budget {
            let Some(index) = first_index_of(&shares, shares.iter().min()) else {
                break;
            };
            shares[index] += 1;
            total += 1;
        } else {
            let Some(index) = first_index_of(&shares, shares.iter().max()) else {
                break;
            };
            shares[index] -= 1;
            total -= 1;
        }
        trace!(total, budget, "rebalanced substeps");
    }

    Ok(shares)
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn proportional_share(budget: usize, width: f64) -> usize {
    (budget as f64 * width).round().max(1.0) as usize
}

fn first_index_of(shares: &[usize], value: Option<&usize>) -> Option<usize> {
    let value = *value?;
    shares.iter().position(|share| *share == value)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn even_stops_split_evenly() {
        assert_eq!(allocate(&[0.0, 0.5, 1.0], 5).unwrap(), vec![2, 2]);
        assert_eq!(
            allocate(&[0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0], 13).unwrap(),
            vec![4, 4, 4]
        );
    }

    #[test]
    fn narrow_segments_keep_one_sample() {
        assert_eq!(allocate(&[0.0, 0.2, 1.0], 5).unwrap(), vec![1, 3]);
    }

    #[test]
    fn hard_edges_take_one_sample_and_others_shrink() {
        // raw shares are [4, 1, 4] for a budget of 7; the first largest shrinks first
        assert_eq!(allocate(&[0.0, 0.5, 0.5, 1.0], 8).unwrap(), vec![3, 1, 3]);
    }

    #[test]
    fn rounding_shortfall_goes_to_the_smallest_share() {
        // raw shares are [1, 1, 1] (0.33 * 3 rounds down) for a budget of 4
        assert_eq!(
            allocate(&[0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0], 5).unwrap(),
            vec![2, 1, 1]
        );
    }

    #[test]
    fn rejects_too_few_steps() {
        assert_eq!(
            allocate(&[0.0, 1.0], 1),
            Err(StepsError::TooFew { steps: 1 })
        );
        assert_eq!(
            allocate(&[0.0, 0.5, 1.0], 2),
            Err(StepsError::FewerThanStops { steps: 2, stops: 3 })
        );
    }

    fn sorted_positions() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(0.0f64..=1.0, 0..8).prop_map(|mut inner| {
            inner.sort_by(f64::total_cmp);
            let mut positions = Vec::with_capacity(inner.len() + 2);
            positions.push(0.0);
            positions.extend(inner);
            positions.push(1.0);
            positions
        })
    }

    proptest! {
        #[test]
        fn shares_always_fill_the_budget(positions in sorted_positions(), extra in 0usize..64) {
            let steps = positions.len().max(2) + extra;
            let shares = allocate(&positions, steps).unwrap();

            prop_assert_eq!(shares.len(), positions.len() - 1);
            prop_assert_eq!(shares.iter().sum::<usize>(), steps - 1);
            prop_assert!(shares.iter().all(|share| *share >= 1));
        }
    }
}
