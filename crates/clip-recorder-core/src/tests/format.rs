use crate::format_elapsed;

/// WHAT: Countdown renders as zero-padded MM:SS
/// WHY: The recording overlay shows this string verbatim
#[test]
fn given_second_counts_when_formatting_then_zero_padded_minutes_and_seconds() {
    // Given/When/Then: Representative counts across the minute boundary
    assert_eq!(format_elapsed(0), "00:00");
    assert_eq!(format_elapsed(9), "00:09");
    assert_eq!(format_elapsed(29), "00:29");
    assert_eq!(format_elapsed(61), "01:01");
    assert_eq!(format_elapsed(3600), "60:00");
}
