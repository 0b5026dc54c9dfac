//! Deterministic payload padding.
//!
//! Circuits consume a fixed number of payload bytes per profile, so the codec
//! pads short payloads with zeros and truncates long ones. Truncation and
//! padding are advisories, not errors: the call still succeeds and the
//! outcome is returned alongside the result so callers can log or reject it.
//!
//! Padding is lossy: the original length is not recoverable from the padded
//! bytes. Encoders return the unpadded length separately so callers that need
//! exact recovery can carry it out-of-band.

/// What the padding policy did to a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingOutcome {
    /// Payload length matched capacity exactly; bytes untouched.
    Exact,
    /// Payload was right-padded with this many zero bytes.
    Padded {
        /// Zero bytes appended.
        added: usize,
    },
    /// Payload exceeded capacity and was cut to the first `capacity` bytes.
    Truncated {
        /// Length of the payload as given.
        original: usize,
        /// Capacity it was cut down to.
        capacity: usize,
    },
}

impl PaddingOutcome {
    /// True when bytes were dropped.
    pub fn is_lossy(&self) -> bool {
        matches!(self, PaddingOutcome::Truncated { .. })
    }
}

/// Pad or truncate `payload` to exactly `capacity` bytes.
///
/// Deterministic: identical input always yields the identical output and
/// outcome.
pub fn pad_to_capacity(payload: &[u8], capacity: usize) -> (Vec<u8>, PaddingOutcome) {
    use std::cmp::Ordering;

    match payload.len().cmp(&capacity) {
        Ordering::Equal => (payload.to_vec(), PaddingOutcome::Exact),
        Ordering::Less => {
            let mut padded = Vec::with_capacity(capacity);
            padded.extend_from_slice(payload);
            padded.resize(capacity, 0);
            (
                padded,
                PaddingOutcome::Padded {
                    added: capacity - payload.len(),
                },
            )
        },
        Ordering::Greater => (
            payload[..capacity].to_vec(),
            PaddingOutcome::Truncated {
                original: payload.len(),
                capacity,
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_is_untouched() {
        let payload = vec![7u8; 64];
        let (padded, outcome) = pad_to_capacity(&payload, 64);
        assert_eq!(padded, payload);
        assert_eq!(outcome, PaddingOutcome::Exact);
        assert!(!outcome.is_lossy());
    }

    #[test]
    fn short_payload_gets_zero_tail() {
        let (padded, outcome) = pad_to_capacity(b"Hello World!", 64);
        assert_eq!(padded.len(), 64);
        assert_eq!(&padded[..12], b"Hello World!");
        assert!(padded[12..].iter().all(|&b| b == 0));
        assert_eq!(outcome, PaddingOutcome::Padded { added: 52 });
    }

    #[test]
    fn long_payload_is_cut_to_prefix() {
        let payload: Vec<u8> = (0..100).collect();
        let (padded, outcome) = pad_to_capacity(&payload, 64);
        assert_eq!(padded, &payload[..64]);
        assert_eq!(
            outcome,
            PaddingOutcome::Truncated {
                original: 100,
                capacity: 64,
            }
        );
        assert!(outcome.is_lossy());

        // Deterministic: same input, same truncation.
        let (again, _) = pad_to_capacity(&payload, 64);
        assert_eq!(again, padded);
    }

    #[test]
    fn empty_payload_is_all_zeros() {
        let (padded, outcome) = pad_to_capacity(&[], 64);
        assert_eq!(padded, vec![0u8; 64]);
        assert_eq!(outcome, PaddingOutcome::Padded { added: 64 });
    }
}
