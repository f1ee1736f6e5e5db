//! The fixed health-code catalog.
//!
//! Jamf Pro reports a small closed set of integer health codes on its
//! `healthCheck.html` page. Codes 1 and 3-6 denote fatal or unavailable
//! states, code 2 is the benign setup-assistant state, and 0 (or an
//! empty report) means the server is running without error.

/// Translate a health code into its long, human-readable description.
///
/// Total over all integers: codes outside 1-6 (including 0 and
/// negatives) map to the healthy default. The strings are verbatim
/// from the Jamf Pro health-check documentation; consumers parse them,
/// so they must not be reworded.
#[must_use]
pub const fn long_description(health_code: i64) -> &'static str {
    match health_code {
        1 => "An error occurred while testing the database connection.",
        2 => "The Jamf Pro Setup Assistant was detected.",
        3 => "A configuration error occurred while attempting to connect to the database.",
        4 => "The Jamf Pro web app is initializing.",
        5 => "An instance of the Jamf Pro web app in a clustered environment failed to start.",
        6 => "A fatal error occurred and prevented the Jamf Pro web app from starting.",
        _ => "The Jamf Pro web app is running without error.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_codes_map_to_exact_strings() {
        let expected = [
            (1, "An error occurred while testing the database connection."),
            (2, "The Jamf Pro Setup Assistant was detected."),
            (
                3,
                "A configuration error occurred while attempting to connect to the database.",
            ),
            (4, "The Jamf Pro web app is initializing."),
            (
                5,
                "An instance of the Jamf Pro web app in a clustered environment failed to start.",
            ),
            (
                6,
                "A fatal error occurred and prevented the Jamf Pro web app from starting.",
            ),
        ];

        for (code, description) in expected {
            assert_eq!(long_description(code), description, "code {code}");
        }
    }

    #[test]
    fn out_of_range_codes_map_to_healthy_default() {
        let healthy = "The Jamf Pro web app is running without error.";

        assert_eq!(long_description(0), healthy);
        assert_eq!(long_description(-1), healthy);
        assert_eq!(long_description(7), healthy);
        assert_eq!(long_description(i64::MAX), healthy);
        assert_eq!(long_description(i64::MIN), healthy);
    }
}
