use crate::config::DEFAULT_APP_NAME;
use crate::core::ConfigProvider;
use crate::utils::error::{PhonecatError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub app: AppSection,
    pub backend: BackendConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSection {
    pub name: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${PHONECAT_BASE_URL})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PhonecatError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|f| f == "json")
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn app_name(&self) -> &str {
        &self.app.name
    }

    fn base_url(&self) -> &str {
        &self.backend.base_url
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("app.name", &self.app.name)?;
        validation::validate_url("backend.base_url", &self.backend.base_url)?;

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            validation::validate_one_of("logging.format", format, &LOG_FORMATS)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[app]
name = "phonecatApp"

[backend]
base_url = "https://phones.example.com"

[logging]
verbose = true
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.app_name(), "phonecatApp");
        assert_eq!(config.base_url(), "https://phones.example.com");
        assert!(config.verbose());
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_app_section_is_optional() {
        let config = TomlConfig::from_toml_str(
            r#"
[backend]
base_url = "http://localhost:8080"
"#,
        )
        .unwrap();

        assert_eq!(config.app_name(), DEFAULT_APP_NAME);
        assert!(!config.verbose());
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PHONECAT_TEST_BASE_URL", "http://phones.internal:9000");

        let toml_content = r#"
[backend]
base_url = "${PHONECAT_TEST_BASE_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_url(), "http://phones.internal:9000");

        std::env::remove_var("PHONECAT_TEST_BASE_URL");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let config = TomlConfig::from_toml_str(
            r#"
[backend]
base_url = "${PHONECAT_TEST_SURELY_UNSET}"
"#,
        )
        .unwrap();

        assert_eq!(config.base_url(), "${PHONECAT_TEST_SURELY_UNSET}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let bad_url = TomlConfig::from_toml_str(
            r#"
[backend]
base_url = "invalid-url"
"#,
        )
        .unwrap();
        assert!(bad_url.validate().is_err());

        let bad_format = TomlConfig::from_toml_str(
            r#"
[backend]
base_url = "http://localhost"

[logging]
format = "xml"
"#,
        )
        .unwrap();
        assert!(bad_format.validate().is_err());
    }

    #[test]
    fn test_missing_backend_is_a_parse_error() {
        let err = TomlConfig::from_toml_str("[app]\nname = \"x\"\n").unwrap_err();
        assert!(matches!(err, PhonecatError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[app]
name = "file-test"

[backend]
base_url = "https://phones.example.com"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.app_name(), "file-test");
    }
}
