//! Expansion of `getmeasure` time-series blocks into measurement records.

use crate::measurement::{Measurement, MeasurementSet};
use crate::metric::METRICS;
use crate::response::{MeasureBlock, MeasureResponse};
use thiserror::Error;

/// Error types for decoding a `getmeasure` payload.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Payload is not valid JSON or is missing required fields
    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),
    /// A row does not have one cell per requested metric
    #[error("Block {block} row {row}: expected {expected} values, got {actual}")]
    RowWidth {
        block: usize,
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// `beg_time + step_time * row` does not fit in an i64
    #[error("Block {block} row {row}: timestamp out of range")]
    TimestampOverflow { block: usize, row: usize },
}

/// Decode a raw `getmeasure` response body.
///
/// `device_id` and `module_id` are not part of the payload; they are copied
/// into every record unchanged.
///
/// # Errors
/// Returns a `DecodeError` if the JSON is malformed or any row is the wrong
/// width. No partial result is returned.
pub fn decode_measure(
    data: &[u8],
    device_id: &str,
    module_id: &str,
) -> Result<MeasurementSet, DecodeError> {
    let response: MeasureResponse = serde_json::from_slice(data)?;
    expand_blocks(&response.body, device_id, module_id)
}

/// Flatten blocks into records, preserving block and row order.
pub fn expand_blocks(
    blocks: &[MeasureBlock],
    device_id: &str,
    module_id: &str,
) -> Result<MeasurementSet, DecodeError> {
    let total = blocks.iter().map(|b| b.value.len()).sum();
    let mut records = Vec::with_capacity(total);

    for (block_idx, block) in blocks.iter().enumerate() {
        for (row_idx, row) in block.value.iter().enumerate() {
            if row.len() != METRICS.len() {
                return Err(DecodeError::RowWidth {
                    block: block_idx,
                    row: row_idx,
                    expected: METRICS.len(),
                    actual: row.len(),
                });
            }

            let timestamp = row_timestamp(block, row_idx).ok_or(DecodeError::TimestampOverflow {
                block: block_idx,
                row: row_idx,
            })?;

            let mut measurement = Measurement::new(device_id, module_id, timestamp);
            for (&metric, &cell) in METRICS.iter().zip(row) {
                measurement.set_raw(metric, cell);
            }
            records.push(measurement);
        }
    }

    tracing::debug!(
        blocks = blocks.len(),
        records = records.len(),
        device_id,
        module_id,
        "decoded measure response"
    );

    Ok(MeasurementSet::from_records(records))
}

fn row_timestamp(block: &MeasureBlock, row: usize) -> Option<i64> {
    let row = i64::try_from(row).ok()?;
    block
        .step_time
        .checked_mul(row)
        .and_then(|offset| block.begin_time.checked_add(offset))
}
