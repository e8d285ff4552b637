//! 기준 DataProvider 구현

use std::sync::Arc;

use crate::core::errors::AppResult;
use crate::core::registry::ProviderRegistration;
use crate::dao::DataProvider;

/// 항상 같은 상수를 돌려주는 상태 없는 DataProvider
///
/// 실패하지 않으며 `reading()`을 몇 번 호출해도 결과가 같습니다.
#[derive(Debug, Default, Clone, Copy)]
pub struct DaoImpl;

impl DaoImpl {
    /// 레지스트리 타입 이름
    pub const NAME: &'static str = "dao::DaoImpl";
    /// 컨테이너 bean id
    pub const BEAN: &'static str = "dao";
    /// 반환하는 고정 값
    pub const VALUE: f64 = 23.0;

    pub fn new() -> Self {
        DaoImpl
    }
}

impl DataProvider for DaoImpl {
    fn reading(&self) -> f64 {
        log::debug!("📥 {} 데이터 조회", Self::NAME);
        Self::VALUE
    }
}

fn dao_impl_constructor() -> AppResult<Arc<dyn DataProvider>> {
    Ok(Arc::new(DaoImpl::new()))
}

inventory::submit! {
    ProviderRegistration {
        name: DaoImpl::NAME,
        bean: DaoImpl::BEAN,
        constructor: dao_impl_constructor,
    }
}
