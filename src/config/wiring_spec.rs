//! `config.txt` 배선 명세
//!
//! ```text
//! dao::DaoImpl          ← 1번째 줄: DataProvider 타입 이름 (필수)
//! metier::MetierImpl    ← 2번째 줄: Calculator 타입 이름 (선택)
//! ```
//!
//! 3번째 줄부터는 읽지 않습니다. 각 줄은 앞뒤 공백을 제거하며(CRLF 포함),
//! 2번째 줄이 비어 있으면 Calculator가 없는 것으로 봅니다.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::utils::string_utils::{clean_optional_string, validate_required_string};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiringSpec {
    /// DataProvider 타입 이름
    pub provider: String,
    /// Calculator 타입 이름
    pub calculator: Option<String>,
}

impl WiringSpec {
    /// 파일을 끝까지 한 번 읽고 파싱합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ResourceNotFound` - 파일 없음
    /// * `AppError::ConfigError` - 1번째 줄이 비어 있음
    /// * `AppError::InternalError` - 그 외 읽기 실패 (권한, 인코딩 등)
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AppError::ResourceNotFound(path.display().to_string()));
            }
            Err(e) => {
                return Err(e).with_context(|| format!("설정 파일 읽기 실패 ({})", path.display()));
            }
        };

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        let mut lines = content.lines();

        let provider = validate_required_string(
            lines.next().unwrap_or_default(),
            "DataProvider 타입 이름 (1번째 줄)",
        )?;
        let calculator = clean_optional_string(lines.next());

        Ok(Self {
            provider,
            calculator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_config(label: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "di-wiring-spec-{}-{}.txt",
            std::process::id(),
            label
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_two_lines() {
        let spec = WiringSpec::parse("dao::DaoImpl\nmetier::MetierImpl\n").unwrap();

        assert_eq!(spec.provider, "dao::DaoImpl");
        assert_eq!(spec.calculator.as_deref(), Some("metier::MetierImpl"));
    }

    #[test]
    fn test_parse_single_line() {
        let spec = WiringSpec::parse("dao::DaoImpl").unwrap();

        assert_eq!(spec.provider, "dao::DaoImpl");
        assert_eq!(spec.calculator, None);
    }

    #[test]
    fn test_parse_crlf_and_trailing_lines() {
        let spec = WiringSpec::parse("dao::DaoImpl\r\nmetier::MetierImpl\r\nignored\r\n").unwrap();

        assert_eq!(spec.provider, "dao::DaoImpl");
        assert_eq!(spec.calculator.as_deref(), Some("metier::MetierImpl"));
    }

    #[test]
    fn test_parse_blank_second_line_is_absent() {
        let spec = WiringSpec::parse("dao::DaoImpl\n   \nmetier::MetierImpl").unwrap();

        assert_eq!(spec.calculator, None);
    }

    #[test]
    fn test_parse_empty_is_config_error() {
        assert!(matches!(WiringSpec::parse(""), Err(AppError::ConfigError(_))));
        assert!(matches!(
            WiringSpec::parse("\nmetier::MetierImpl"),
            Err(AppError::ConfigError(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("di-wiring-spec-definitely-missing.txt");

        match WiringSpec::load(&path) {
            Err(AppError::ResourceNotFound(p)) => assert!(p.contains("definitely-missing")),
            other => panic!("Expected ResourceNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_config("load", "dao::DaoImplV2\nmetier::MetierImpl\n");
        let spec = WiringSpec::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(spec.provider, "dao::DaoImplV2");
        assert_eq!(spec.calculator.as_deref(), Some("metier::MetierImpl"));
    }
}
