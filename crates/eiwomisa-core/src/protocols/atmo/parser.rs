use super::error::AtmoError;
use super::layout;

/// Validate one ATMO frame and return its payload length, computed from
/// the channel-count field as `4 + 3 * count`.
///
/// The start byte is checked and logged but does not gate validity; only
/// the channel count does. A datagram shorter than the computed length is
/// rejected so the forwarded slice never reads past the received bytes.
pub fn validate_atmo(payload: &[u8]) -> Result<usize, AtmoError> {
    if payload.len() < layout::HEADER_LEN {
        return Err(AtmoError::TooShort {
            needed: layout::HEADER_LEN,
            actual: payload.len(),
        });
    }

    let start = payload[layout::START_OFFSET];
    if start == layout::START_MARKER {
        log::debug!("atmo start byte {start:#04x}: pass");
    } else {
        log::debug!("atmo start byte {start:#04x}: expected 0xff (not enforced)");
    }

    let count = payload[layout::CHANNEL_COUNT_OFFSET];
    if count > layout::MAX_CHANNELS {
        log::debug!("atmo frame rejected (channel count {count} > 15)");
        return Err(AtmoError::ChannelCount { count });
    }

    let frame_len = layout::frame_len(count);
    if payload.len() < frame_len {
        log::debug!(
            "atmo frame rejected ({count} channels need {frame_len} bytes, got {})",
            payload.len()
        );
        return Err(AtmoError::TooShort {
            needed: frame_len,
            actual: payload.len(),
        });
    }

    log::debug!("atmo frame accepted ({count} channels, {frame_len} bytes)");
    Ok(frame_len)
}
