//! # Configuration Module
//!
//! 실행 환경과 배선 방식 설정을 담당하는 모듈입니다.
//! Spring의 `@Configuration` / `@Value("${property}")`처럼 환경 변수 기반 설정값을 한곳에서 관리합니다.
//! `.env` 파일은 `main`에서 `PROFILE`에 따라 `dotenv`로 먼저 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`wiring_spec`] - `config.txt` (DataProvider / Calculator 타입 이름) 파싱
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="development"        # development, test, staging, production
//! export WIRING_MODE="config"             # config, container, manual
//! export WIRING_CONFIG_PATH="config.txt"
//! export WIRING_SCAN_PACKAGE=""           # 빈 값이면 전체 스캔
//! export WIRING_CALCULATOR_BEAN="metier"
//! ```

pub mod wiring_spec;

pub use wiring_spec::*;

use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::core::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// `RUST_LOG`가 없을 때 사용할 로그 필터
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => "debug",
            Environment::Staging | Environment::Production => "info",
        }
    }
}

/// 컴포넌트 배선 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WiringMode {
    /// `config.txt`의 타입 이름을 레지스트리로 해석
    Config,
    /// 패키지 스캔 + 자동 주입
    Container,
    /// 코드로 직접 조립
    Manual,
}

impl WiringMode {
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 알 수 없는 배선 방식
    pub fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "config" | "reflection" => Ok(WiringMode::Config),
            "container" | "annotation" => Ok(WiringMode::Container),
            "manual" => Ok(WiringMode::Manual),
            other => Err(AppError::ConfigError(format!(
                "알 수 없는 WIRING_MODE '{}' (config, container, manual 중 하나)",
                other
            ))),
        }
    }
}

impl fmt::Display for WiringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WiringMode::Config => write!(f, "config"),
            WiringMode::Container => write!(f, "container"),
            WiringMode::Manual => write!(f, "manual"),
        }
    }
}

/// 배선 설정
#[derive(Debug, Clone, PartialEq)]
pub struct WiringConfig {
    pub mode: WiringMode,
    pub config_path: PathBuf,
    pub scan_package: String,
    pub calculator_bean: String,
}

impl WiringConfig {
    pub const DEFAULT_CONFIG_PATH: &'static str = "config.txt";
    pub const DEFAULT_CALCULATOR_BEAN: &'static str = "metier";

    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수로부터 설정을 구성합니다.
    ///
    /// 값이 없거나 비어 있는 항목은 기본값을 사용하지만,
    /// 값이 있는데 해석할 수 없는 `WIRING_MODE`는 에러입니다.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = match lookup("WIRING_MODE").filter(|m| !m.trim().is_empty()) {
            Some(m) => WiringMode::from_str(&m)?,
            None => WiringMode::Config,
        };

        let config_path = lookup("WIRING_CONFIG_PATH")
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_CONFIG_PATH.to_string());

        let scan_package = lookup("WIRING_SCAN_PACKAGE")
            .map(|p| p.trim().to_string())
            .unwrap_or_default();

        let calculator_bean = lookup("WIRING_CALCULATOR_BEAN")
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_CALCULATOR_BEAN.to_string());

        Ok(Self {
            mode,
            config_path: PathBuf::from(config_path),
            scan_package,
            calculator_bean,
        })
    }
}

impl Default for WiringConfig {
    fn default() -> Self {
        Self {
            mode: WiringMode::Config,
            config_path: PathBuf::from(Self::DEFAULT_CONFIG_PATH),
            scan_package: String::new(),
            calculator_bean: Self::DEFAULT_CALCULATOR_BEAN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_log_filter_for_each_environment() {
        assert_eq!(Environment::Development.default_log_filter(), "debug");
        assert_eq!(Environment::Test.default_log_filter(), "debug");
        assert_eq!(Environment::Production.default_log_filter(), "info");
    }

    #[test]
    fn test_wiring_mode_from_string() {
        assert_eq!(WiringMode::from_str("container").unwrap(), WiringMode::Container);
        assert_eq!(WiringMode::from_str(" Manual ").unwrap(), WiringMode::Manual);
        assert_eq!(WiringMode::from_str("annotation").unwrap(), WiringMode::Container);
    }

    #[test]
    fn test_unknown_wiring_mode_is_config_error() {
        assert!(matches!(
            WiringMode::from_str("bogus"),
            Err(AppError::ConfigError(_))
        ));
    }

    #[test]
    fn test_misspelled_mode_does_not_fall_back_to_config() {
        let result = WiringConfig::from_lookup(|k| (k == "WIRING_MODE").then(|| "contaner".to_string()));

        match result {
            Err(AppError::ConfigError(msg)) => assert!(msg.contains("contaner")),
            other => panic!("Expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_wiring_mode_uses_default() {
        let config = WiringConfig::from_lookup(|k| (k == "WIRING_MODE").then(|| "  ".to_string())).unwrap();

        assert_eq!(config.mode, WiringMode::Config);
    }

    #[test]
    fn test_wiring_config_defaults() {
        let config = WiringConfig::default();

        assert_eq!(config.mode, WiringMode::Config);
        assert_eq!(config.config_path, PathBuf::from("config.txt"));
        assert_eq!(config.scan_package, "");
        assert_eq!(config.calculator_bean, "metier");
        assert_eq!(WiringConfig::from_lookup(|_| None).unwrap(), config);
    }

    #[test]
    fn test_wiring_config_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("WIRING_MODE", "container"),
            ("WIRING_CONFIG_PATH", "/tmp/wiring.txt"),
            ("WIRING_SCAN_PACKAGE", " dao "),
            ("WIRING_CALCULATOR_BEAN", ""),
        ]);
        let config = WiringConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(config.mode, WiringMode::Container);
        assert_eq!(config.config_path, PathBuf::from("/tmp/wiring.txt"));
        assert_eq!(config.scan_package, "dao");
        assert_eq!(config.calculator_bean, "metier");
    }
}
