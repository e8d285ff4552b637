use std::sync::Arc;

use crate::core::errors::AppResult;
use crate::core::registry::ProviderRegistration;
use crate::dao::DataProvider;

/// 두 번째 상수 DataProvider
///
/// 같은 패키지에 DataProvider가 여러 개 있을 때 컨테이너가
/// qualifier로 후보를 고르는지 확인하는 데 쓰입니다.
#[derive(Debug, Default, Clone, Copy)]
pub struct DaoImplV2;

impl DaoImplV2 {
    pub const NAME: &'static str = "dao::DaoImplV2";
    pub const BEAN: &'static str = "dao2";
    pub const VALUE: f64 = 12.0;

    pub fn new() -> Self {
        DaoImplV2
    }
}

impl DataProvider for DaoImplV2 {
    fn reading(&self) -> f64 {
        log::debug!("📥 {} 데이터 조회 (version 2)", Self::NAME);
        Self::VALUE
    }
}

fn dao_impl_v2_constructor() -> AppResult<Arc<dyn DataProvider>> {
    Ok(Arc::new(DaoImplV2::new()))
}

inventory::submit! {
    ProviderRegistration {
        name: DaoImplV2::NAME,
        bean: DaoImplV2::BEAN,
        constructor: dao_impl_v2_constructor,
    }
}
