//! Buffer offset allocation
//!
//! Proposes the next free byte offset for a new or retyped parameter so
//! users are not forced to compute offsets by hand. Append-after-last
//! policy: holes left by deletions are never reused. The proposal is a
//! pure value; the caller writes it into form state.

use crate::parameter::ParameterConfig;
use crate::range::names_match;
use tracing::debug;

/// Next free byte offset after the parameters already placed in one range
///
/// Returns 0 for an empty range, otherwise the maximum end-exclusive byte
/// offset (`buffer_index + byte_size`) across the existing parameters.
pub fn next_buffer_index<'a, I>(existing_in_range: I) -> u32
where
    I: IntoIterator<Item = &'a ParameterConfig>,
{
    let next = existing_in_range
        .into_iter()
        .map(|p| p.effective_buffer_index() + p.byte_size())
        .max()
        .unwrap_or(0);
    debug!("Proposed buffer index: {}", next);
    next
}

/// Parameters belonging to one range (case-insensitive name match)
pub fn params_in_range<'a>(
    parameters: &'a [ParameterConfig],
    range_name: &'a str,
) -> impl Iterator<Item = &'a ParameterConfig> {
    parameters
        .iter()
        .filter(move |p| names_match(&p.register_range, range_name))
}

/// Propose an offset within `range_name`, optionally excluding a parameter
/// being edited (matched by name, case-insensitive)
pub fn propose_index(
    parameters: &[ParameterConfig],
    range_name: &str,
    excluding_name: Option<&str>,
) -> u32 {
    next_buffer_index(
        params_in_range(parameters, range_name)
            .filter(|p| !excluding_name.is_some_and(|ex| names_match(&p.name, ex))),
    )
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    fn param(name: &str, data_type: &str, range: &str, index: u32) -> ParameterConfig {
        let mut p = ParameterConfig::new(name, data_type, range);
        p.set_buffer_index(index);
        p
    }

    #[test]
    fn test_empty_range_starts_at_zero() {
        assert_eq!(next_buffer_index(std::iter::empty::<&ParameterConfig>()), 0);
    }

    #[test]
    fn test_appends_after_last_occupied_byte() {
        let params = vec![
            param("A", "INT16", "R1", 0),
            param("B", "FLOAT32", "R1", 2),
        ];
        assert_eq!(next_buffer_index(params.iter()), 6);
    }

    #[test]
    fn test_holes_are_not_reused() {
        // Bytes 0-1 free after a deletion; allocation still appends
        let params = vec![param("B", "INT16", "R1", 2)];
        assert_eq!(next_buffer_index(params.iter()), 4);
    }

    #[test]
    fn test_other_ranges_are_irrelevant() {
        let params = vec![
            param("A", "FLOAT64", "Other", 0),
            param("B", "INT16", "R1", 0),
        ];
        assert_eq!(propose_index(&params, "R1", None), 2);
        assert_eq!(propose_index(&params, "r1", None), 2);
    }

    #[test]
    fn test_excluding_the_edited_parameter() {
        let params = vec![
            param("A", "INT16", "R1", 0),
            param("B", "INT16", "R1", 2),
        ];
        // Retyping B: its own placement must not push the proposal
        assert_eq!(propose_index(&params, "R1", Some("B")), 2);
        assert_eq!(propose_index(&params, "R1", Some("b")), 2);
    }

    #[test]
    fn test_string_parameter_width() {
        let mut p = ParameterConfig::new("Label", "STRING", "R1");
        p.word_count = Some(4);
        p.set_buffer_index(0);
        assert_eq!(next_buffer_index([&p]), 8);
    }
}
