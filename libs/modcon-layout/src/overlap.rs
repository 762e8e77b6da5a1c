//! Placement validation
//!
//! Decides whether a candidate parameter may be placed, returning the
//! first violation found (or `None` when placement is legal). Overlap is
//! checked only against parameters in the same register range: separate
//! ranges are fetched into separate buffers, so equal byte offsets in
//! different ranges are physically unrelated. Names, by contrast, become
//! flat keys in the device reading and are checked globally.

use crate::parameter::ParameterConfig;
use crate::range::{names_match, RegisterRange};
use thiserror::Error;
use tracing::debug;

/// Why a candidate parameter cannot be placed
///
/// `Display` renders the human-readable reason shown next to the form
/// field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementConflict {
    #[error("parameter name '{name}' is already in use")]
    NameTaken { name: String },

    #[error("register range '{range}' does not exist")]
    MissingRange { range: String },

    #[error("data type {data_type} needs {needed} registers but range '{range}' only has {available}")]
    NoCapacity {
        data_type: String,
        range: String,
        needed: u16,
        available: u16,
    },

    #[error("buffer index {index} is too high for this data type; last valid index is {limit}")]
    IndexTooHigh { index: u32, limit: u32 },

    #[error("buffer index {index} is already used by '{by}'")]
    IndexAlreadyUsed { index: u32, by: String },

    #[error("bytes {start}-{end} overlap bytes {other_start}-{other_end} used by '{by}'")]
    SpanOverlap {
        start: u32,
        end: u32,
        other_start: u32,
        other_end: u32,
        by: String,
    },

    #[error("bit {bit} at buffer index {index} is already used by '{by}'")]
    BitTaken { index: u32, bit: u8, by: String },
}

/// Check whether `candidate` may be placed among `all_parameters`
///
/// `excluding_name` removes the parameter being edited from the
/// comparison set (matched by name, case-insensitive). Checks run in
/// order - name uniqueness, range bounds, same-range overlap - and the
/// first violation wins.
///
/// Bit parameters only collide with other bit parameters at the same
/// effective buffer index and bit position; they share bytes freely with
/// non-bit parameters. This mirrors the stored layouts this model has to
/// stay compatible with.
pub fn check_placement(
    candidate: &ParameterConfig,
    all_parameters: &[ParameterConfig],
    ranges: &[RegisterRange],
    excluding_name: Option<&str>,
) -> Option<PlacementConflict> {
    let others: Vec<&ParameterConfig> = all_parameters
        .iter()
        .filter(|p| !excluding_name.is_some_and(|ex| names_match(&p.name, ex)))
        .collect();

    // 1. Global name uniqueness
    let cand_name = candidate.name.trim();
    if let Some(taken) = others.iter().find(|p| names_match(&p.name, cand_name)) {
        return Some(PlacementConflict::NameTaken {
            name: taken.name.trim().to_string(),
        });
    }

    // 2. Range existence and bounds
    let range = match ranges
        .iter()
        .find(|r| names_match(&r.range_name, &candidate.register_range))
    {
        Some(range) => range,
        None => {
            return Some(PlacementConflict::MissingRange {
                range: candidate.register_range.clone(),
            })
        },
    };

    let data_type = candidate.data_type();
    let required = data_type.required_word_count(candidate.word_count);
    if range.length < required {
        return Some(PlacementConflict::NoCapacity {
            data_type: candidate.data_type.clone(),
            range: range.range_name.clone(),
            needed: required,
            available: range.length,
        });
    }

    let index = candidate.effective_buffer_index();
    let limit = u32::from(range.length - required) * 2;
    if index > limit {
        return Some(PlacementConflict::IndexTooHigh { index, limit });
    }

    // 3. Overlap, scoped to the candidate's own range
    let same_range = others
        .iter()
        .filter(|p| names_match(&p.register_range, &range.range_name));

    if data_type.is_bit() {
        for other in same_range.filter(|p| p.is_bit()) {
            if other.effective_buffer_index() == index
                && other.bit_position == candidate.bit_position
            {
                return Some(PlacementConflict::BitTaken {
                    index,
                    bit: candidate.bit_position.unwrap_or(0),
                    by: other.name.clone(),
                });
            }
        }
    } else {
        let (start, end) = candidate.byte_span();
        for other in same_range.filter(|p| !p.is_bit()) {
            let (other_start, other_end) = other.byte_span();
            if other_start == start {
                return Some(PlacementConflict::IndexAlreadyUsed {
                    index: start,
                    by: other.name.clone(),
                });
            }
            if start <= other_end && other_start <= end {
                return Some(PlacementConflict::SpanOverlap {
                    start,
                    end,
                    other_start,
                    other_end,
                    by: other.name.clone(),
                });
            }
        }
    }

    debug!("Placement ok: '{}' at index {} in '{}'", cand_name, index, range.range_name);
    None
}
