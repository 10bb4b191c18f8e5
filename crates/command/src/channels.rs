//! Channel list validation for campaign dispatch requests.

use crate::types::{ChannelValidationResult, AVAILABLE_CHANNELS};

/// Partition a requested channel list into known and unknown identifiers.
///
/// Membership is tested case-insensitively against [`AVAILABLE_CHANNELS`];
/// the returned strings keep their original casing and relative order.
/// Every input entry lands in exactly one of the two lists.
pub fn validate_channels(requested: &[String]) -> ChannelValidationResult {
    let mut valid = Vec::new();
    let mut invalid = Vec::new();

    for channel in requested {
        if AVAILABLE_CHANNELS
            .iter()
            .any(|known| channel.eq_ignore_ascii_case(known))
        {
            valid.push(channel.clone());
        } else {
            invalid.push(channel.clone());
        }
    }

    ChannelValidationResult { valid, invalid }
}
