//! 데이터 접근(DAO) 계층 모듈
//!
//! 숫자 하나를 읽어오는 `DataProvider` capability와 그 구현체들을 제공합니다.
//! 각 구현체는 `inventory::submit!`으로 전역 레지스트리에 스스로 등록되므로,
//! 설정 파일의 타입 이름이나 컨테이너 스캔만으로 인스턴스를 만들 수 있습니다.
//!
//! # 구현체
//!
//! | 타입 이름 | bean id | 값 |
//! |-----------|---------|-----|
//! | `dao::DaoImpl` | `dao` | 고정 상수 (기준 구현) |
//! | `dao::DaoImplV2` | `dao2` | 다른 고정 상수 |
//! | `dao::EnvDao` | `envDao` | `DAO_READING` 환경 변수 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::dao::{DaoImpl, DataProvider};
//!
//! let dao = DaoImpl::new();
//! println!("{}", dao.reading());
//! ```

pub mod dao_impl;
pub mod dao_impl_v2;
pub mod env_dao;

pub use dao_impl::DaoImpl;
pub use dao_impl_v2::DaoImplV2;
pub use env_dao::EnvDao;

/// 숫자 값 하나를 제공하는 데이터 접근 capability
///
/// 값을 어떻게 얻는지(상수, 외부 소스 등)는 구현체가 결정합니다.
/// 테스트에서는 고정 값을 돌려주는 대역(test double)으로 교체할 수 있습니다.
pub trait DataProvider: Send + Sync {
    /// 현재 값을 반환합니다.
    fn reading(&self) -> f64;
}
