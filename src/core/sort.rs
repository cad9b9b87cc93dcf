//! The counting-sort pipeline as four pure transformation steps.
//!
//! Data flows strictly forward: input -> maximum -> frequency table ->
//! cumulative table -> sorted output. Each step is a leaf function with no
//! hidden state, so every intermediate artifact stays available for
//! reporting after the sort completes.

use crate::core::errors::{Result, SortError};
use crate::core::{PlacementStep, SortArtifacts};

/// Finds the maximum element with a linear scan from the first element.
///
/// The boundary validator rejects empty input before the pipeline runs;
/// the check here keeps the contract explicit for library callers.
pub fn find_maximum(input: &[u64]) -> Result<u64> {
    let (first, rest) = input.split_first().ok_or(SortError::EmptyInput)?;
    Ok(rest.iter().fold(*first, |max, &value| max.max(value)))
}

/// Builds the frequency table: `table[v]` counts occurrences of `v`.
///
/// The table spans `0..=max_value`, so its length is `max_value + 1` and
/// the counts sum to `input.len()`. The result depends only on the input
/// multiset, not on element order.
pub fn build_frequency(input: &[u64], max_value: u64) -> Result<Vec<usize>> {
    let mut table = vec![0usize; max_value as usize + 1];
    for &value in input {
        if value > max_value {
            return Err(SortError::ValueOutOfRange {
                value,
                max: max_value,
            });
        }
        table[value as usize] += 1;
    }
    Ok(table)
}

/// Converts a frequency table into its inclusive prefix-sum form.
///
/// `cumulative[i]` is the number of input elements with value `<= i`, so
/// the table is monotonically non-decreasing and ends at the input length.
/// Applied exactly once per sort; the transform is not idempotent.
pub fn build_cumulative(frequency: &[usize]) -> Vec<usize> {
    frequency
        .iter()
        .scan(0usize, |sum, &count| {
            *sum += count;
            Some(*sum)
        })
        .collect()
}

/// Replays the placement phase as pure data, one record per element in
/// scan order.
///
/// The scan runs from the last input element to the first against a
/// working copy of the cumulative table: each entry is the next free slot
/// (plus one) for its value group, decremented after every placement. The
/// reverse scan is what keeps equal values in their original relative
/// order; a forward scan would hand them their slots reversed.
pub fn placement_steps(input: &[u64], cumulative: &[usize]) -> Result<Vec<PlacementStep>> {
    let mut working = cumulative.to_vec();
    let mut steps = Vec::with_capacity(input.len());

    for &value in input.iter().rev() {
        let count = working
            .get_mut(value as usize)
            .ok_or(SortError::IndexOutOfRange {
                value,
                table_len: cumulative.len(),
            })?;
        // A zero count here means the table was built from different
        // input; that slot group is already exhausted.
        let position = count.checked_sub(1).ok_or(SortError::IndexOutOfRange {
            value,
            table_len: cumulative.len(),
        })?;
        *count = position;
        steps.push(PlacementStep { value, position });
    }

    Ok(steps)
}

/// Places every element into its sorted slot using the cumulative table.
///
/// Every output index is written exactly once, so the output holds the
/// same multiset as the input, in non-decreasing order.
pub fn place_elements(input: &[u64], cumulative: &[usize]) -> Result<Vec<u64>> {
    let steps = placement_steps(input, cumulative)?;
    let mut output = vec![0u64; input.len()];
    for step in &steps {
        output[step.position] = step.value;
    }
    Ok(output)
}

/// Runs the full pipeline and returns every intermediate artifact.
///
/// The pipeline is a strict linear composition with no partial output: a
/// failure in any step propagates immediately. It holds no global state,
/// so independent invocations may run concurrently.
pub fn sort(input: &[u64]) -> Result<SortArtifacts> {
    let max_value = find_maximum(input)?;
    let frequency = build_frequency(input, max_value)?;
    let cumulative = build_cumulative(&frequency);
    let sorted = place_elements(input, &cumulative)?;

    Ok(SortArtifacts {
        input: input.to_vec(),
        max_value,
        frequency,
        cumulative,
        sorted,
    })
}
