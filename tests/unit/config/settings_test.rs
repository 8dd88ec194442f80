// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置设置测试模块
///
/// 测试配置加载和环境变量覆盖

#[cfg(test)]
mod tests {
    use config::Map;
    use sumrs::config::settings::Settings;

    fn env(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_config_loading_defaults() {
        let settings = Settings::from_env_source(Some(Map::new()))
            .expect("default configuration should load");

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.telemetry.filter, "info,sumrs=debug");
        assert!(!settings.telemetry.json);
        assert!(settings.metrics.enabled);
        assert_eq!(settings.metrics.listen_addr, "0.0.0.0:9000");
    }

    #[test]
    fn test_environment_overrides() {
        let settings = Settings::from_env_source(Some(env(&[
            ("SUMRS__SERVER__PORT", "8080"),
            ("SUMRS__SERVER__HOST", "127.0.0.1"),
            ("SUMRS__TELEMETRY__JSON", "true"),
            ("SUMRS__METRICS__ENABLED", "false"),
        ])))
        .expect("configuration with overrides should load");

        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 8080);
        assert!(settings.telemetry.json);
        assert!(!settings.metrics.enabled);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = Settings::from_env_source(Some(env(&[("SUMRS__SERVER__PORT", "not-a-port")])));
        assert!(result.is_err());
    }

    #[test]
    fn test_app_environment_file_layer() {
        let settings = Settings::from_env_source(Some(env(&[("APP_ENVIRONMENT", "staging")])))
            .expect("staging configuration should load");

        assert_eq!(settings.server.port, 3100);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.telemetry.filter, "warn,sumrs=info");
        assert!(settings.telemetry.json);
    }

    #[test]
    fn test_environment_variables_override_app_environment_file() {
        let settings = Settings::from_env_source(Some(env(&[
            ("APP_ENVIRONMENT", "staging"),
            ("SUMRS__SERVER__PORT", "8080"),
        ])))
        .expect("staging configuration with overrides should load");

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.telemetry.filter, "warn,sumrs=info");
    }

    #[test]
    fn test_unknown_app_environment_falls_back_to_defaults() {
        let settings = Settings::from_env_source(Some(env(&[("APP_ENVIRONMENT", "missing")])))
            .expect("missing environment file is optional");

        assert_eq!(settings.server.port, 3000);
    }
}
