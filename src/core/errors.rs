//! # 통합 에러 처리 시스템
//!
//! 컴포넌트 배선(wiring) 과정에서 발생할 수 있는 모든 에러를 하나의 열거형으로 모읍니다.
//! `thiserror` 기반으로 `Display`/`Error` 구현을 자동 생성하며,
//! 어떤 에러도 지역적으로 복구하지 않고 호출 스택 최상단(`main`)까지 전파합니다.
//!
//! ## 에러 분류
//!
//! | 변형 | 발생 시점 | Spring 대응 |
//! |------|-----------|-------------|
//! | `ResourceNotFound` | 설정 파일 없음 | `FileNotFoundException` |
//! | `ConfigError` | 설정 파일 형식 오류 | `BeanDefinitionStoreException` |
//! | `TypeResolutionError` | 등록되지 않은 타입 이름 | `ClassNotFoundException` / `NoSuchBeanDefinitionException` |
//! | `InstantiationError` | 생성자 없음, 생성 실패, 후보 모호 | `InstantiationException` / `NoUniqueBeanDefinitionException` |
//! | `NotConfigured` | DataProvider 미주입 상태에서 계산 | `NullPointerException` |
//! | `InternalError` | 그 외 예상하지 못한 오류 | - |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult, ErrorContext};
//!
//! fn read_config(path: &Path) -> AppResult<String> {
//!     std::fs::read_to_string(path).with_context(|| format!("읽기 실패: {}", path.display()))
//! }
//! ```

use std::fmt;

use thiserror::Error;

/// 배선 대상 컴포넌트의 역할
///
/// 타입 해석 실패 시 어느 단계(DataProvider / Calculator)에서 실패했는지 구분하는 데 사용됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentRole {
    /// 데이터 접근 계층 (`@Repository` 역할)
    Provider,
    /// 비즈니스 로직 계층 (`@Service` 역할)
    Calculator,
}

impl fmt::Display for ComponentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentRole::Provider => write!(f, "DataProvider"),
            ComponentRole::Calculator => write!(f, "Calculator"),
        }
    }
}

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// 설정 리소스를 찾을 수 없음
    ///
    /// # 발생 시나리오
    /// - 작업 디렉터리에 `config.txt`가 없음
    /// - `WIRING_CONFIG_PATH`가 존재하지 않는 경로를 가리킴
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// 설정 리소스는 읽었지만 내용이 올바르지 않음
    ///
    /// # 발생 시나리오
    /// - 빈 파일 (1번째 줄의 DataProvider 이름 누락)
    /// - 같은 이름/bean id 로 컴포넌트가 중복 등록됨
    #[error("Config error: {0}")]
    ConfigError(String),

    /// 이름으로 타입을 찾을 수 없음
    ///
    /// 레지스트리에 등록되지 않은 타입 이름이나 컨테이너에 없는 bean id를 요청했을 때 발생합니다.
    #[error("Type resolution error: no {role} registered under '{name}'")]
    TypeResolutionError {
        role: ComponentRole,
        name: String,
    },

    /// 타입은 찾았지만 인스턴스를 만들 수 없음
    ///
    /// # 발생 시나리오
    /// - 사용 가능한 생성자가 하나도 등록되지 않음 (추상 타입과 동일)
    /// - 생성자 내부 실패 (예: 외부 값 파싱 실패)
    /// - 자동 주입 후보가 없거나 여러 개
    /// - setter 주입 후에도 DataProvider가 연결되지 않음
    #[error("Instantiation error: {0}")]
    InstantiationError(String),

    /// DataProvider 없이 `compute()`가 호출됨
    #[error("Not configured: {0}")]
    NotConfigured(String),

    /// 내부 에러
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 타입 해석 에러 생성 헬퍼
    pub fn unresolved(role: ComponentRole, name: impl Into<String>) -> Self {
        AppError::TypeResolutionError {
            role,
            name: name.into(),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// I/O 등 외부 에러를 설명과 함께 `InternalError`로 바꾸는 확장 trait
///
/// 설명 문자열은 실패했을 때만 만들어집니다.
pub trait ErrorContext<T> {
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
