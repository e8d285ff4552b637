//! 기준 Calculator 구현

use std::f64::consts::PI;
use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::CalculatorRegistration;
use crate::dao::{DaoImpl, DataProvider};
use crate::metier::Calculator;

/// `t * 12 * π / 2 * cos(t)` 를 계산하는 Calculator
///
/// DataProvider는 소유하지 않고 `Arc`로 공유합니다 (느슨한 결합).
/// 컨테이너에서는 qualifier `dao` 로 [`DaoImpl`]을 주입받습니다.
#[derive(Default)]
pub struct MetierImpl {
    dao: Option<Arc<dyn DataProvider>>,
}

impl MetierImpl {
    /// 레지스트리 타입 이름
    pub const NAME: &'static str = "metier::MetierImpl";
    /// 컨테이너 bean id
    pub const BEAN: &'static str = "metier";

    /// DataProvider 없이 생성합니다. `compute()` 전에 `set_provider`가 필요합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 생성자 주입
    pub fn with_provider(dao: Arc<dyn DataProvider>) -> Self {
        Self { dao: Some(dao) }
    }

    /// 계산식 자체. 연산 순서를 바꾸면 부동소수점 결과가 달라지므로 왼쪽부터 그대로 계산합니다.
    pub fn formula(t: f64) -> f64 {
        t * 12.0 * PI / 2.0 * t.cos()
    }
}

impl Calculator for MetierImpl {
    fn compute(&self) -> AppResult<f64> {
        let dao = self.dao.as_ref().ok_or_else(|| {
            AppError::NotConfigured(format!(
                "{} 에 DataProvider가 주입되지 않았습니다",
                Self::NAME
            ))
        })?;

        let t = dao.reading();
        let result = Self::formula(t);
        log::debug!("🧮 {}: t={} → {}", Self::NAME, t, result);
        Ok(result)
    }

    fn set_provider(&mut self, provider: Arc<dyn DataProvider>) {
        self.dao = Some(provider);
    }

    fn provider(&self) -> Option<Arc<dyn DataProvider>> {
        self.dao.clone()
    }
}

fn metier_constructor() -> Box<dyn Calculator> {
    Box::new(MetierImpl::new())
}

fn metier_injecting_constructor(dao: Arc<dyn DataProvider>) -> Box<dyn Calculator> {
    Box::new(MetierImpl::with_provider(dao))
}

inventory::submit! {
    CalculatorRegistration {
        name: MetierImpl::NAME,
        bean: MetierImpl::BEAN,
        qualifier: Some(DaoImpl::BEAN),
        constructor: Some(metier_constructor),
        injecting_constructor: Some(metier_injecting_constructor),
    }
}
