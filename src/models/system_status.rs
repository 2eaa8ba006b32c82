use serde::{Deserialize, Serialize};

/// Build and runtime information about the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemStatus {
    #[serde(deserialize_with = "super::null_as_default")]
    pub version: String,
    #[serde(rename = "buildTime", deserialize_with = "super::null_as_default")]
    pub build_time: String,
    #[serde(rename = "isDebug", deserialize_with = "super::null_as_default")]
    pub is_debug: bool,
    #[serde(rename = "isProduction", deserialize_with = "super::null_as_default")]
    pub is_production: bool,
    #[serde(rename = "isAdmin", deserialize_with = "super::null_as_default")]
    pub is_admin: bool,
    #[serde(rename = "isUserInteractive", deserialize_with = "super::null_as_default")]
    pub is_user_interactive: bool,
    #[serde(rename = "startupTime", deserialize_with = "super::null_as_default")]
    pub startup_time: String,
    #[serde(rename = "appData", deserialize_with = "super::null_as_default")]
    pub app_data: String,
    #[serde(rename = "osName", deserialize_with = "super::null_as_default")]
    pub os_name: String,
    #[serde(rename = "osVersion", deserialize_with = "super::null_as_default")]
    pub os_version: String,
    #[serde(rename = "isMonoRuntime", deserialize_with = "super::null_as_default")]
    pub is_mono_runtime: bool,
    #[serde(rename = "isMono", deserialize_with = "super::null_as_default")]
    pub is_mono: bool,
    #[serde(rename = "isLinux", deserialize_with = "super::null_as_default")]
    pub is_linux: bool,
    #[serde(rename = "isOsx", deserialize_with = "super::null_as_default")]
    pub is_osx: bool,
    #[serde(rename = "isWindows", deserialize_with = "super::null_as_default")]
    pub is_windows: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub branch: String,
    /// Authentication method. The server reports it under the key `forms`.
    #[serde(rename = "forms", deserialize_with = "super::null_as_default")]
    pub authentication: String,
    #[serde(rename = "sqlliteVersion", deserialize_with = "super::null_as_default")]
    pub sqlite_version: String,
    #[serde(rename = "urlBase", deserialize_with = "super::null_as_default")]
    pub url_base: String,
    #[serde(rename = "runtimeVersion", deserialize_with = "super::null_as_default")]
    pub runtime_version: String,
    #[serde(rename = "runtimeName", deserialize_with = "super::null_as_default")]
    pub runtime_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_status_irregular_keys() {
        let json = r#"{
            "version": "2.0.0.5085",
            "isLinux": true,
            "forms": "none",
            "sqlliteVersion": "3.16.2",
            "urlBase": "/sonarr"
        }"#;
        let status: SystemStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.version, "2.0.0.5085");
        assert!(status.is_linux);
        assert!(!status.is_windows);
        assert_eq!(status.authentication, "none");
        assert_eq!(status.sqlite_version, "3.16.2");
        assert_eq!(status.url_base, "/sonarr");
    }
}
