//! 비즈니스 로직(metier) 계층 모듈
//!
//! 주입된 `DataProvider`의 값으로부터 결과를 계산하는 `Calculator` capability를 제공합니다.
//! DataProvider는 생성자로 주입하거나, 기본 생성 후 `set_provider`로 나중에 주입할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::dao::DaoImpl;
//! use crate::metier::{Calculator, MetierImpl};
//!
//! // 생성자 주입
//! let metier = MetierImpl::with_provider(Arc::new(DaoImpl::new()));
//! let result = metier.compute()?;
//!
//! // setter 주입
//! let mut metier = MetierImpl::new();
//! metier.set_provider(Arc::new(DaoImpl::new()));
//! ```

pub mod metier_impl;

pub use metier_impl::MetierImpl;

use std::sync::Arc;

use crate::core::errors::AppResult;
use crate::dao::DataProvider;

/// DataProvider 값으로부터 파생 값을 계산하는 capability
pub trait Calculator: Send + Sync {
    /// 주입된 DataProvider의 값으로 결과를 계산합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotConfigured` - DataProvider가 아직 주입되지 않음
    fn compute(&self) -> AppResult<f64>;

    /// DataProvider를 주입합니다 (setter 주입).
    fn set_provider(&mut self, provider: Arc<dyn DataProvider>);

    /// 현재 주입된 DataProvider
    fn provider(&self) -> Option<Arc<dyn DataProvider>>;

    fn is_configured(&self) -> bool {
        self.provider().is_some()
    }
}
