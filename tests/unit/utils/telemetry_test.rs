// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use sumrs::config::settings::TelemetrySettings;
    use sumrs::utils::telemetry;

    fn settings(filter: &str) -> TelemetrySettings {
        TelemetrySettings {
            filter: filter.to_string(),
            json: false,
        }
    }

    #[test]
    fn test_telemetry_initialization_is_repeatable() {
        let settings = settings("debug");

        telemetry::init_telemetry(&settings);
        // A second subscriber cannot be installed; this must not panic
        telemetry::init_telemetry(&TelemetrySettings {
            json: true,
            ..settings
        });

        tracing::debug!(a = 1, b = 2, "structured event after init");
    }

    #[test]
    fn test_rust_log_takes_precedence_over_settings() {
        let filter = telemetry::env_filter(&settings("debug"), Some("warn"));
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_settings_filter_used_without_rust_log() {
        let filter = telemetry::env_filter(&settings("debug"), None);
        assert_eq!(filter.to_string(), "debug");
    }
}
