//! 코드로 직접 조립하는 배선
//!
//! 레지스트리나 컨테이너 없이 구현 타입을 직접 생성해 주입합니다.
//! 다른 두 방식의 결과를 비교하는 기준으로도 사용됩니다.

use std::sync::Arc;

use crate::bootstrap::Wiring;
use crate::dao::{DaoImpl, DataProvider};
use crate::metier::{Calculator, MetierImpl};

/// `DaoImpl` → `MetierImpl::with_provider`
pub fn compose() -> Wiring {
    log::info!("🔧 수동 배선: {} ← {}", MetierImpl::NAME, DaoImpl::NAME);

    let dao: Arc<dyn DataProvider> = Arc::new(DaoImpl::new());
    let metier: Arc<dyn Calculator> = Arc::new(MetierImpl::with_provider(Arc::clone(&dao)));

    Wiring {
        provider_name: DaoImpl::NAME,
        provider: dao,
        calculator: Some((MetierImpl::NAME, metier)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_report() {
        let report = compose().report().unwrap();

        assert_eq!(report.provider, DaoImpl::NAME);
        assert_eq!(report.calculator.as_deref(), Some(MetierImpl::NAME));
        assert_eq!(report.reading, DaoImpl::VALUE);
        assert_eq!(report.result, Some(MetierImpl::formula(DaoImpl::VALUE)));
    }
}
