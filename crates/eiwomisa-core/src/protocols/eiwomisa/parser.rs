use super::error::EiwomisaError;
use super::layout;

/// Validate one EIWOMISA frame and return its payload length (always 6).
///
/// All six field checks run unconditionally, with one debug log line per
/// check, so a rejected frame shows every violated bound rather than just
/// the first one. The frame is accepted only if every check passed.
pub fn validate_eiwomisa(payload: &[u8]) -> Result<usize, EiwomisaError> {
    if payload.len() < layout::FRAME_LEN {
        return Err(EiwomisaError::TooShort {
            needed: layout::FRAME_LEN,
            actual: payload.len(),
        });
    }

    let checks: [(&str, bool); 6] = [
        (
            "byte 0 (start marker) == 255",
            payload[layout::START_OFFSET] == layout::START_MARKER,
        ),
        (
            "byte 1 (value low) < 255",
            payload[layout::VALUE_LOW_OFFSET] < layout::VALUE_LOW_LIMIT,
        ),
        (
            "byte 2 (value high) < 2",
            payload[layout::VALUE_HIGH_OFFSET] < layout::VALUE_HIGH_LIMIT,
        ),
        (
            "byte 3 (channel part 1) < 255",
            payload[layout::CHANNEL_A_OFFSET] < layout::CHANNEL_A_LIMIT,
        ),
        (
            "byte 4 (channel part 2) < 255",
            payload[layout::CHANNEL_B_OFFSET] < layout::CHANNEL_B_LIMIT,
        ),
        (
            "byte 5 (channel part 3) < 5",
            payload[layout::CHANNEL_C_OFFSET] < layout::CHANNEL_C_LIMIT,
        ),
    ];

    let mut violations = 0usize;
    for (rule, ok) in checks {
        log::debug!("eiwomisa {}: {}", rule, if ok { "pass" } else { "fail" });
        if !ok {
            violations += 1;
        }
    }

    if violations > 0 {
        log::debug!("eiwomisa frame rejected ({violations} violations)");
        return Err(EiwomisaError::FieldBounds { violations });
    }
    log::debug!("eiwomisa frame accepted");
    Ok(layout::FRAME_LEN)
}
