//! Code list parsing for code-specific refinements.

use std::ops::RangeInclusive;

use crate::error_handling::RefinementError;

/// Parses a comma separated code list such as `"2000-2010, 4326"`.
///
/// Each entry is a single code or an inclusive `start-end` range. Empty
/// entries (for example a trailing comma) are ignored.
///
/// # Errors
///
/// Returns `RefinementError::CodeListError` for entries that are not numbers,
/// or for ranges whose start is greater than their end.
pub fn parse_code_list(list: &str) -> Result<Vec<RangeInclusive<u32>>, RefinementError> {
    let mut ranges = Vec::new();
    for entry in list.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let invalid = || RefinementError::CodeListError(entry.to_string());
        let range = match entry.split_once('-') {
            Some((start, end)) => {
                let start: u32 = start.trim().parse().map_err(|_| invalid())?;
                let end: u32 = end.trim().parse().map_err(|_| invalid())?;
                if start > end {
                    return Err(invalid());
                }
                start..=end
            }
            None => {
                let code: u32 = entry.parse().map_err(|_| invalid())?;
                code..=code
            }
        };
        ranges.push(range);
    }
    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_codes_and_ranges() {
        let ranges = parse_code_list("2000-2010, 4326,27700").expect("valid list");
        assert_eq!(ranges, vec![2000..=2010, 4326..=4326, 27700..=27700]);
    }

    #[test]
    fn test_trailing_comma_is_ignored() {
        let ranges = parse_code_list("4326,").expect("valid list");
        assert_eq!(ranges, vec![4326..=4326]);
    }

    #[test]
    fn test_spaces_inside_range() {
        let ranges = parse_code_list(" 3000 - 3005 ").expect("valid list");
        assert_eq!(ranges, vec![3000..=3005]);
    }

    #[test]
    fn test_rejects_non_numeric_entry() {
        let result = parse_code_list("4326,EPSG:3857");
        assert!(matches!(
            result,
            Err(RefinementError::CodeListError(entry)) if entry == "EPSG:3857"
        ));
    }

    #[test]
    fn test_rejects_reversed_range() {
        assert!(parse_code_list("10-5").is_err());
    }
}
