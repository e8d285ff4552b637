//! # Component Registry - 이름 기반 팩토리 레지스트리
//!
//! 문자열 타입 이름을 생성자 함수로 연결하는 레지스트리입니다.
//! Java의 `Class.forName(name).newInstance()` 같은 런타임 리플렉션 대신,
//! 각 구현체가 `inventory::submit!`으로 자신의 생성자를 등록하고
//! 프로세스 시작 시 이를 모아 `이름 → 생성자` 테이블을 만듭니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring 개념 | 이 시스템 | 비고 |
//! |-------------|-----------|------|
//! | `Class.forName()` | `ComponentRegistry::resolve_*` | 등록되지 않은 이름은 `TypeResolutionError` |
//! | `@Repository` | `ProviderRegistration` | 무인자 생성자 |
//! | `@Service` | `CalculatorRegistration` | 생성자 주입 / setter 주입 |
//! | `@Qualifier("dao")` | `CalculatorRegistration::qualifier` | 컨테이너 자동 주입 시 사용 |
//! | `@Component("metier")` | `bean` 필드 | 컨테이너 bean id |
//!
//! ## 동작 원리
//!
//! ```text
//! 1. 컴파일 타임
//!    ├─ inventory::submit! { ProviderRegistration { .. } }
//!    └─ inventory::submit! { CalculatorRegistration { .. } }
//!
//! 2. 최초 접근 시 (ComponentRegistry::global)
//!    ├─ inventory::iter 로 모든 등록 정보 수집
//!    ├─ 이름 → 등록 정보 HashMap 구성 (이후 읽기 전용)
//!    └─ 같은 이름이 두 번 제출되면 ConfigError (배선 전체 실패)
//!
//! 3. 배선 시점
//!    ├─ resolve_provider(name)   → ProviderRegistration
//!    ├─ resolve_calculator(name) → CalculatorRegistration
//!    └─ construct / inject       → 완성된 Calculator
//! ```
//!
//! ## Calculator 생성 규칙
//!
//! DataProvider를 받는 생성자가 있으면 그것을 사용하고(생성자 주입),
//! 없으면 무인자 생성 후 `set_provider`로 주입합니다(setter 주입).
//! 둘 다 없으면 `InstantiationError`입니다.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::core::errors::{AppError, AppResult, ComponentRole};
use crate::dao::DataProvider;
use crate::metier::Calculator;
use crate::utils::display_terminal::print_cache_initialized;

/// DataProvider 무인자 생성자
pub type ProviderConstructor = fn() -> AppResult<Arc<dyn DataProvider>>;

/// Calculator 무인자 생성자 (setter 주입 필요)
pub type CalculatorConstructor = fn() -> Box<dyn Calculator>;

/// DataProvider를 받는 Calculator 생성자 (생성자 주입)
pub type InjectingConstructor = fn(Arc<dyn DataProvider>) -> Box<dyn Calculator>;

/// DataProvider 등록 정보
pub struct ProviderRegistration {
    /// `패키지::타입` 형식의 전체 이름 (설정 파일에서 사용)
    pub name: &'static str,
    /// 컨테이너 bean id
    pub bean: &'static str,
    pub constructor: ProviderConstructor,
}

/// Calculator 등록 정보
pub struct CalculatorRegistration {
    pub name: &'static str,
    pub bean: &'static str,
    /// 자동 주입할 DataProvider의 bean id. `None`이면 유일한 후보를 주입합니다.
    pub qualifier: Option<&'static str>,
    pub constructor: Option<CalculatorConstructor>,
    pub injecting_constructor: Option<InjectingConstructor>,
}

inventory::collect!(ProviderRegistration);
inventory::collect!(CalculatorRegistration);

impl ProviderRegistration {
    /// 무인자 생성자로 인스턴스를 만듭니다.
    pub fn instantiate(&self) -> AppResult<Arc<dyn DataProvider>> {
        log::debug!("🏗️ DataProvider 생성: {}", self.name);
        (self.constructor)()
    }
}

/// Calculator 생성 결과
pub enum Construction {
    /// 생성자 주입으로 이미 DataProvider가 연결됨
    Injected(Box<dyn Calculator>),
    /// 무인자 생성됨, setter 주입 대기
    Pending(Box<dyn Calculator>),
}

impl Construction {
    /// 대기 중인 인스턴스에 DataProvider를 주입하고 연결 여부를 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InstantiationError` - 주입 후에도 DataProvider가 연결되지 않음
    pub fn inject(self, provider: &Arc<dyn DataProvider>) -> AppResult<Box<dyn Calculator>> {
        let calculator = match self {
            Construction::Injected(calculator) => calculator,
            Construction::Pending(mut calculator) => {
                log::debug!("💉 setter 주입 수행");
                calculator.set_provider(Arc::clone(provider));
                calculator
            }
        };

        if !calculator.is_configured() {
            return Err(AppError::InstantiationError(
                "주입 후에도 DataProvider가 연결되지 않았습니다".to_string(),
            ));
        }

        Ok(calculator)
    }
}

impl CalculatorRegistration {
    /// 등록된 생성자 중 사용 가능한 것으로 인스턴스를 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InstantiationError` - 사용 가능한 생성자가 없음
    pub fn construct(&self, provider: &Arc<dyn DataProvider>) -> AppResult<Construction> {
        if let Some(constructor) = self.injecting_constructor {
            log::debug!("🏗️ Calculator 생성 (생성자 주입): {}", self.name);
            return Ok(Construction::Injected(constructor(Arc::clone(provider))));
        }

        if let Some(constructor) = self.constructor {
            log::debug!("🏗️ Calculator 생성 (무인자): {}", self.name);
            return Ok(Construction::Pending(constructor()));
        }

        Err(AppError::InstantiationError(format!(
            "'{}' 에 사용 가능한 생성자가 없습니다",
            self.name
        )))
    }
}

/// 이름 → 등록 정보 테이블
#[derive(Default)]
pub struct ComponentRegistry {
    providers: HashMap<&'static str, &'static ProviderRegistration>,
    calculators: HashMap<&'static str, &'static CalculatorRegistration>,
}

static GLOBAL_REGISTRY: Lazy<AppResult<ComponentRegistry>> = Lazy::new(|| {
    let registry = ComponentRegistry::from_inventory()?;

    print_cache_initialized("DataProvider", registry.providers.len());
    print_cache_initialized("Calculator", registry.calculators.len());
    Ok(registry)
});

impl ComponentRegistry {
    /// 빈 레지스트리 (테스트나 수동 구성용)
    pub fn new() -> Self {
        Self::default()
    }

    /// `inventory`로 수집된 전역 레지스트리
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 같은 이름이 두 번 제출됨 (최초 접근 이후에도 같은 에러를 반환)
    pub fn global() -> AppResult<&'static ComponentRegistry> {
        GLOBAL_REGISTRY.as_ref().map_err(Clone::clone)
    }

    /// `inventory`에 제출된 모든 등록 정보로 레지스트리를 구성합니다.
    pub fn from_inventory() -> AppResult<Self> {
        Self::from_registrations(
            inventory::iter::<ProviderRegistration>(),
            inventory::iter::<CalculatorRegistration>(),
        )
    }

    /// 수집 순서와 무관하게, 이름이 겹치면 어느 쪽도 고르지 않고 실패합니다.
    pub fn from_registrations<P, C>(providers: P, calculators: C) -> AppResult<Self>
    where
        P: IntoIterator<Item = &'static ProviderRegistration>,
        C: IntoIterator<Item = &'static CalculatorRegistration>,
    {
        let mut registry = Self::new();

        for registration in providers {
            registry.register_provider(registration)?;
        }

        for registration in calculators {
            registry.register_calculator(registration)?;
        }

        Ok(registry)
    }

    pub fn register_provider(&mut self, registration: &'static ProviderRegistration) -> AppResult<()> {
        if self.providers.contains_key(registration.name) {
            return Err(AppError::ConfigError(format!(
                "DataProvider '{}' 가 이미 등록되어 있습니다",
                registration.name
            )));
        }

        self.providers.insert(registration.name, registration);
        Ok(())
    }

    pub fn register_calculator(&mut self, registration: &'static CalculatorRegistration) -> AppResult<()> {
        if self.calculators.contains_key(registration.name) {
            return Err(AppError::ConfigError(format!(
                "Calculator '{}' 가 이미 등록되어 있습니다",
                registration.name
            )));
        }

        self.calculators.insert(registration.name, registration);
        Ok(())
    }

    /// # Errors
    ///
    /// * `AppError::TypeResolutionError` - 등록되지 않은 이름
    pub fn resolve_provider(&self, name: &str) -> AppResult<&'static ProviderRegistration> {
        self.providers
            .get(name)
            .copied()
            .ok_or_else(|| AppError::unresolved(ComponentRole::Provider, name))
    }

    /// # Errors
    ///
    /// * `AppError::TypeResolutionError` - 등록되지 않은 이름
    pub fn resolve_calculator(&self, name: &str) -> AppResult<&'static CalculatorRegistration> {
        self.calculators
            .get(name)
            .copied()
            .ok_or_else(|| AppError::unresolved(ComponentRole::Calculator, name))
    }

    /// 이름순으로 정렬된 DataProvider 등록 정보
    pub fn providers(&self) -> Vec<&'static ProviderRegistration> {
        let mut providers: Vec<_> = self.providers.values().copied().collect();
        providers.sort_by_key(|r| r.name);
        providers
    }

    /// 이름순으로 정렬된 Calculator 등록 정보
    pub fn calculators(&self) -> Vec<&'static CalculatorRegistration> {
        let mut calculators: Vec<_> = self.calculators.values().copied().collect();
        calculators.sort_by_key(|r| r.name);
        calculators
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::{DaoImpl, DaoImplV2, EnvDao};
    use crate::metier::MetierImpl;

    struct Fixed;

    impl DataProvider for Fixed {
        fn reading(&self) -> f64 {
            1.0
        }
    }

    fn fixed_constructor() -> AppResult<Arc<dyn DataProvider>> {
        Ok(Arc::new(Fixed))
    }

    fn setter_only_constructor() -> Box<dyn Calculator> {
        Box::new(MetierImpl::new())
    }

    /// set_provider를 무시하는 잘못된 구현
    struct Forgetful;

    impl Calculator for Forgetful {
        fn compute(&self) -> AppResult<f64> {
            Err(AppError::NotConfigured("forgetful".to_string()))
        }

        fn set_provider(&mut self, _provider: Arc<dyn DataProvider>) {}

        fn provider(&self) -> Option<Arc<dyn DataProvider>> {
            None
        }
    }

    fn forgetful_constructor() -> Box<dyn Calculator> {
        Box::new(Forgetful)
    }

    static FIXED: ProviderRegistration = ProviderRegistration {
        name: "test::Fixed",
        bean: "fixed",
        constructor: fixed_constructor,
    };

    static SETTER_ONLY: CalculatorRegistration = CalculatorRegistration {
        name: "test::SetterOnly",
        bean: "setterOnly",
        qualifier: None,
        constructor: Some(setter_only_constructor),
        injecting_constructor: None,
    };

    static ABSTRACT: CalculatorRegistration = CalculatorRegistration {
        name: "test::Abstract",
        bean: "abstract",
        qualifier: None,
        constructor: None,
        injecting_constructor: None,
    };

    static FORGETFUL: CalculatorRegistration = CalculatorRegistration {
        name: "test::Forgetful",
        bean: "forgetful",
        qualifier: None,
        constructor: Some(forgetful_constructor),
        injecting_constructor: None,
    };

    #[test]
    fn test_global_registry_contains_builtin_components() {
        let registry = ComponentRegistry::global().unwrap();

        assert!(registry.resolve_provider(DaoImpl::NAME).is_ok());
        assert!(registry.resolve_provider(DaoImplV2::NAME).is_ok());
        assert!(registry.resolve_provider(EnvDao::NAME).is_ok());
        assert!(registry.resolve_calculator(MetierImpl::NAME).is_ok());
    }

    #[test]
    fn test_unknown_names_fail_with_role() {
        let registry = ComponentRegistry::global().unwrap();

        match registry.resolve_provider("dao::Nope") {
            Err(AppError::TypeResolutionError { role, name }) => {
                assert_eq!(role, ComponentRole::Provider);
                assert_eq!(name, "dao::Nope");
            }
            _ => panic!("Expected TypeResolutionError"),
        }

        match registry.resolve_calculator(DaoImpl::NAME) {
            Err(AppError::TypeResolutionError { role, .. }) => {
                assert_eq!(role, ComponentRole::Calculator);
            }
            _ => panic!("Expected TypeResolutionError"),
        }
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = ComponentRegistry::new();

        registry.register_provider(&FIXED).unwrap();
        assert!(matches!(
            registry.register_provider(&FIXED),
            Err(AppError::ConfigError(_))
        ));
    }

    static FIXED_AGAIN: ProviderRegistration = ProviderRegistration {
        name: "test::Fixed",
        bean: "fixedAgain",
        constructor: fixed_constructor,
    };

    #[test]
    fn test_duplicate_submission_fails_registry_build() {
        let result = ComponentRegistry::from_registrations(
            [&FIXED, &FIXED_AGAIN],
            std::iter::empty::<&'static CalculatorRegistration>(),
        );

        match result {
            Err(AppError::ConfigError(msg)) => assert!(msg.contains("test::Fixed")),
            Err(other) => panic!("Expected ConfigError, got {:?}", other),
            Ok(_) => panic!("Expected ConfigError, got a registry"),
        }
    }

    #[test]
    fn test_registry_from_distinct_registrations() {
        let registry = ComponentRegistry::from_registrations([&FIXED], [&SETTER_ONLY, &ABSTRACT]).unwrap();

        assert_eq!(registry.providers().len(), 1);
        assert_eq!(registry.calculators().len(), 2);
    }

    #[test]
    fn test_setter_only_calculator_is_injected() {
        let provider = FIXED.instantiate().unwrap();
        let construction = SETTER_ONLY.construct(&provider).unwrap();

        assert!(matches!(construction, Construction::Pending(_)));
        let calculator = construction.inject(&provider).unwrap();
        assert_eq!(calculator.compute().unwrap(), MetierImpl::formula(1.0));
    }

    #[test]
    fn test_injecting_constructor_is_preferred() {
        let registry = ComponentRegistry::global().unwrap();
        let metier = registry.resolve_calculator(MetierImpl::NAME).unwrap();
        let provider = FIXED.instantiate().unwrap();

        let construction = metier.construct(&provider).unwrap();
        assert!(matches!(construction, Construction::Injected(_)));
    }

    #[test]
    fn test_constructorless_calculator_fails_instantiation() {
        let provider = FIXED.instantiate().unwrap();

        assert!(matches!(
            ABSTRACT.construct(&provider),
            Err(AppError::InstantiationError(_))
        ));
    }

    #[test]
    fn test_injection_that_does_not_attach_fails() {
        let provider = FIXED.instantiate().unwrap();
        let construction = FORGETFUL.construct(&provider).unwrap();

        assert!(matches!(
            construction.inject(&provider),
            Err(AppError::InstantiationError(_))
        ));
    }

    #[test]
    fn test_listing_is_sorted() {
        let names: Vec<_> = ComponentRegistry::global().unwrap()
            .providers()
            .iter()
            .map(|r| r.name)
            .collect();

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
