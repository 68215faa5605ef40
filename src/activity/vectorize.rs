//! Per-row vectorization of activity-log sensor events.
//!
//! Every event row names one sensor and one raw value. The vectorizer turns
//! the row into a 40-slot vector in which only that sensor's slot is
//! non-zero, so a slot that is exactly 0.0 always means "sensor unused".

use crate::error::RowError;

/// Number of known sensors; the width of every feature vector.
pub const SENSOR_COUNT: usize = 40;

/// Known sensor identifiers in table order. The position of an identifier in
/// this table is the slot it occupies in every feature vector.
pub const SENSOR_IDS: [&str; SENSOR_COUNT] = [
    "M01", "M02", "M03", "M04", "M05", "M06", "M07", "M08", "M09", "M10",
    "M11", "M12", "M13", "M14", "M15", "M16", "M17", "M18", "M19", "M20",
    "M21", "M22", "M23", "M24", "M25", "M26", "I01", "I02", "I03", "I04",
    "I05", "I06", "I07", "I08", "D01", "E01", "AD1-A", "AD1-B", "AD1-C",
    "asterisk",
];

/// Categorical value tokens mapped to `+1.0`.
const HIGH_TOKENS: [&str; 5] = ["ON", "OPEN", "PRESENT", "START", "START_INSTRUCT"];

/// Categorical value tokens mapped to `-1.0`.
const LOW_TOKENS: [&str; 5] = ["OFF", "CLOSE", "ABSENT", "END", "STOP_INSTRUCT"];

/// Offset applied to numeric readings, away from zero, so a genuine reading
/// of 0 stays distinguishable from an unused slot.
pub const EPSILON: f64 = 0.0001;

/// One vectorized event row.
pub type FeatureVector = [f64; SENSOR_COUNT];

/// Table slot for a sensor identifier, or `None` if the id is unknown.
pub fn sensor_index(id: &str) -> Option<usize> {
    SENSOR_IDS.iter().position(|&known| known == id)
}

/// Vectorize one event row into a 40-slot feature vector.
///
/// Categorical tokens become `+1.0` or `-1.0`; anything else must parse as a
/// number and is biased by [`EPSILON`] (`+ε` for values >= 0, `-ε` below).
/// All other slots stay exactly `0.0`.
pub fn vectorize(sensor_id: &str, value: &str) -> Result<FeatureVector, RowError> {
    let index = sensor_index(sensor_id).ok_or_else(|| RowError::UnknownSensor {
        id: sensor_id.to_string(),
    })?;

    let mut output = [0.0; SENSOR_COUNT];
    output[index] = if HIGH_TOKENS.contains(&value) {
        1.0
    } else if LOW_TOKENS.contains(&value) {
        -1.0
    } else {
        let number: f64 = value.parse().map_err(|_| RowError::MalformedValue {
            token: value.to_string(),
        })?;
        if number < 0.0 {
            number - EPSILON
        } else {
            number + EPSILON
        }
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_zero_slots(vector: &FeatureVector) -> Vec<(usize, f64)> {
        vector
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0.0)
            .map(|(i, &v)| (i, v))
            .collect()
    }

    #[test]
    fn test_high_token() {
        let vector = vectorize("M01", "ON").unwrap();
        assert_eq!(non_zero_slots(&vector), vec![(0, 1.0)]);
    }

    #[test]
    fn test_low_token() {
        let vector = vectorize("D01", "CLOSE").unwrap();
        assert_eq!(non_zero_slots(&vector), vec![(34, -1.0)]);
    }

    #[test]
    fn test_negative_number_biased_away_from_zero() {
        let vector = vectorize("AD1-A", "-3").unwrap();
        assert_eq!(non_zero_slots(&vector), vec![(36, -3.0001)]);
    }

    #[test]
    fn test_zero_reading_stays_distinguishable() {
        let vector = vectorize("AD1-B", "0").unwrap();
        assert_eq!(non_zero_slots(&vector), vec![(37, 0.0001)]);
    }

    #[test]
    fn test_exactly_one_slot_set_for_every_token_kind() {
        for value in ["ON", "OFF", "1.25", "-0.5", "0"] {
            let vector = vectorize("M13", value).unwrap();
            assert_eq!(non_zero_slots(&vector).len(), 1, "value {value:?}");
        }
    }

    #[test]
    fn test_sign_matches_token_category() {
        assert!(vectorize("M05", "PRESENT").unwrap()[4] > 0.0);
        assert!(vectorize("M05", "ABSENT").unwrap()[4] < 0.0);
        assert!(vectorize("M05", "2.5").unwrap()[4] > 0.0);
        assert!(vectorize("M05", "-2.5").unwrap()[4] < 0.0);
        assert!(vectorize("M05", "0").unwrap()[4] > 0.0);
    }

    #[test]
    fn test_unknown_sensor_is_an_error() {
        let err = vectorize("M99", "ON").unwrap_err();
        assert!(matches!(err, RowError::UnknownSensor { ref id } if id == "M99"));
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        let err = vectorize("M01", "MAYBE").unwrap_err();
        assert!(matches!(err, RowError::MalformedValue { ref token } if token == "MAYBE"));
    }

    #[test]
    fn test_sensor_table_has_no_duplicates() {
        for (i, id) in SENSOR_IDS.iter().enumerate() {
            assert_eq!(sensor_index(id), Some(i));
        }
    }
}
