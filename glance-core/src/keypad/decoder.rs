//! Threshold-band key decoder

/// Key identifier: index of the band the sample fell into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyId(pub u8);

/// Errors in keypad configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeypadError {
    /// Threshold table has no entries
    EmptyThresholds,
    /// Thresholds are not strictly ascending
    ThresholdsNotAscending,
    /// More bands than a `KeyId` can address
    TooManyKeys,
}

/// Maps a raw analog sample to a key
///
/// Entry `k` of the table is the exclusive upper bound of key `k`'s band.
/// Samples at or above the last entry decode to no key (the pulled-up
/// idle level of the ladder).
#[derive(Debug, Clone, Copy)]
pub struct KeyDecoder<'a> {
    thresholds: &'a [u16],
}

impl<'a> KeyDecoder<'a> {
    /// Create a decoder, validating the threshold table
    pub fn new(thresholds: &'a [u16]) -> Result<Self, KeypadError> {
        if thresholds.is_empty() {
            return Err(KeypadError::EmptyThresholds);
        }
        if thresholds.len() > u8::MAX as usize + 1 {
            return Err(KeypadError::TooManyKeys);
        }
        if thresholds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(KeypadError::ThresholdsNotAscending);
        }
        Ok(Self { thresholds })
    }

    /// Decode a sample
    ///
    /// Returns the first key whose threshold is strictly greater than
    /// `sample`, or `None` when no threshold is.
    pub fn decode(&self, sample: u16) -> Option<KeyId> {
        self.thresholds
            .iter()
            .position(|&threshold| sample < threshold)
            .map(|index| KeyId(index as u8))
    }

    /// Number of keys the table distinguishes
    pub fn key_count(&self) -> usize {
        self.thresholds.len()
    }

    /// Sample range of a key's band as (inclusive low, exclusive high)
    pub fn band(&self, key: KeyId) -> Option<(u16, u16)> {
        let index = key.0 as usize;
        let high = *self.thresholds.get(index)?;
        let low = if index == 0 { 0 } else { self.thresholds[index - 1] };
        Some((low, high))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{keys, KEY_THRESHOLDS};
    use proptest::prelude::*;

    #[test]
    fn test_reference_keypad() {
        let decoder = KeyDecoder::new(&KEY_THRESHOLDS).unwrap();

        assert_eq!(decoder.decode(0), Some(keys::RIGHT));
        assert_eq!(decoder.decode(49), Some(keys::RIGHT));
        assert_eq!(decoder.decode(50), Some(keys::UP));
        assert_eq!(decoder.decode(144), Some(keys::UP));
        assert_eq!(decoder.decode(329), Some(keys::DOWN));
        assert_eq!(decoder.decode(505), Some(keys::LEFT));
        assert_eq!(decoder.decode(741), Some(keys::SELECT));
        assert_eq!(decoder.decode(799), Some(keys::SELECT));
    }

    #[test]
    fn test_released_level() {
        let decoder = KeyDecoder::new(&KEY_THRESHOLDS).unwrap();
        assert_eq!(decoder.decode(800), None);
        assert_eq!(decoder.decode(1023), None);
    }

    #[test]
    fn test_invalid_tables() {
        assert_eq!(KeyDecoder::new(&[]).err(), Some(KeypadError::EmptyThresholds));
        assert_eq!(
            KeyDecoder::new(&[10, 10, 20]).err(),
            Some(KeypadError::ThresholdsNotAscending)
        );
        assert_eq!(
            KeyDecoder::new(&[30, 20]).err(),
            Some(KeypadError::ThresholdsNotAscending)
        );
    }

    #[test]
    fn test_band() {
        let decoder = KeyDecoder::new(&KEY_THRESHOLDS).unwrap();
        assert_eq!(decoder.band(KeyId(0)), Some((0, 50)));
        assert_eq!(decoder.band(KeyId(2)), Some((200, 400)));
        assert_eq!(decoder.band(KeyId(5)), None);
        assert_eq!(decoder.key_count(), 5);
    }

    fn ascending_table() -> impl Strategy<Value = Vec<u16>> {
        prop::collection::btree_set(any::<u16>(), 1..12)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
    }

    proptest! {
        #[test]
        fn prop_decode_lands_in_band(table in ascending_table(), sample in any::<u16>()) {
            let decoder = KeyDecoder::new(&table).unwrap();
            match decoder.decode(sample) {
                Some(KeyId(k)) => {
                    let k = k as usize;
                    prop_assert!(sample < table[k]);
                    prop_assert!(k == 0 || sample >= table[k - 1]);
                }
                None => prop_assert!(sample >= *table.last().unwrap()),
            }
        }
    }
}
