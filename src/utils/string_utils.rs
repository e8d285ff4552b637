//! 문자열 검증 및 타입 이름 처리 유틸리티
//!
//! 설정 파일의 줄 정리와 `패키지::타입` 형식의 컴포넌트 이름 분해를 담당합니다.

use crate::core::errors::AppError;

/// 필수 문자열 검증
///
/// 앞뒤 공백(`\r` 포함)을 제거한 뒤 비어 있으면 `ConfigError`를 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let name = validate_required_string("  dao::DaoImpl\r", "provider")?;
/// assert_eq!(name, "dao::DaoImpl");
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ConfigError(format!(
            "{}은(는) 필수입니다",
            field_name
        )));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 정리
///
/// 공백만 있는 문자열은 `None`으로 처리합니다.
pub fn clean_optional_string(value: Option<&str>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// `dao::DaoImpl` → `DaoImpl`
pub fn simple_type_name(name: &str) -> &str {
    match name.rfind("::") {
        Some(pos) => &name[pos + 2..],
        None => name,
    }
}

/// `dao::DaoImpl` → `dao`, 경로가 없으면 빈 문자열
pub fn package_of(name: &str) -> &str {
    match name.rfind("::") {
        Some(pos) => &name[..pos],
        None => "",
    }
}

/// 컴포넌트 이름이 주어진 패키지(또는 그 하위 패키지)에 속하는지 검사합니다.
///
/// 빈 패키지는 모든 컴포넌트를 포함합니다.
pub fn is_in_package(name: &str, package: &str) -> bool {
    if package.is_empty() {
        return true;
    }

    let own = package_of(name);
    own == package
        || own
            .strip_prefix(package)
            .is_some_and(|rest| rest.starts_with("::"))
}
