//! # Application Context - 선언적 컨테이너
//!
//! Spring의 `AnnotationConfigApplicationContext("net.achraf")`에 해당합니다.
//! 레지스트리에 등록된 컴포넌트 중 주어진 패키지에 속한 것만 스캔하고,
//! 각 Calculator에 역할(capability)과 qualifier로 DataProvider를 자동 주입합니다.
//!
//! ## 자동 주입 규칙
//!
//! 1. Calculator가 qualifier를 선언했으면 같은 bean id의 DataProvider를 주입합니다.
//! 2. qualifier가 없으면 스캔된 DataProvider가 정확히 하나일 때 그것을 주입합니다.
//! 3. 후보가 없거나 여러 개면 `InstantiationError`입니다.
//!
//! DataProvider는 실제로 주입될 때만 생성되고(지연 초기화), 같은 bean은 한 번만 생성되어 공유됩니다.
//! Calculator는 컨텍스트 생성 시점에 모두 만들어집니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let context = ApplicationContext::scan("")?;
//! let metier = context.get_calculator("metier")?;
//! println!("{}", metier.compute()?);
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::core::errors::{AppError, AppResult, ComponentRole};
use crate::core::registry::{CalculatorRegistration, ComponentRegistry, ProviderRegistration};
use crate::dao::DataProvider;
use crate::metier::Calculator;
use crate::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};
use crate::utils::string_utils::{is_in_package, simple_type_name};

/// 자동 주입이 끝난 Calculator bean
pub struct WiredCalculator {
    pub registration: &'static CalculatorRegistration,
    /// 주입된 DataProvider의 등록 정보
    pub provider: &'static ProviderRegistration,
    pub instance: Arc<dyn Calculator>,
}

pub struct ApplicationContext {
    package: String,
    providers: HashMap<&'static str, Arc<dyn DataProvider>>,
    calculators: HashMap<&'static str, WiredCalculator>,
}

impl ApplicationContext {
    /// 전역 레지스트리를 스캔합니다.
    pub fn scan(package: &str) -> AppResult<Self> {
        Self::scan_registry(ComponentRegistry::global()?, package)
    }

    /// 주어진 레지스트리에서 `package`에 속한 컴포넌트를 스캔하고 배선합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 스캔 범위 안에서 bean id가 중복됨
    /// * `AppError::InstantiationError` - 주입 후보 없음/모호함, 생성 실패
    pub fn scan_registry(registry: &ComponentRegistry, package: &str) -> AppResult<Self> {
        print_boxed_title("🔄 SCANNING COMPONENTS");

        let provider_candidates: Vec<_> = registry
            .providers()
            .into_iter()
            .filter(|r| is_in_package(r.name, package))
            .collect();
        let calculator_candidates: Vec<_> = registry
            .calculators()
            .into_iter()
            .filter(|r| is_in_package(r.name, package))
            .collect();

        Self::check_unique_beans(&provider_candidates, &calculator_candidates)?;

        print_step_start(1, "Wiring Calculator beans");

        let mut providers: HashMap<&'static str, Arc<dyn DataProvider>> = HashMap::new();
        let mut calculators = HashMap::new();

        for &registration in &calculator_candidates {
            print_sub_task(registration.bean, "Autowiring...");

            let candidate = Self::select_candidate(registration, &provider_candidates)?;
            let provider = match providers.get(candidate.bean) {
                Some(existing) => Arc::clone(existing),
                None => {
                    let created = candidate.instantiate()?;
                    providers.insert(candidate.bean, Arc::clone(&created));
                    created
                }
            };

            let instance = registration.construct(&provider)?.inject(&provider)?;
            log::info!(
                "🔗 {} ← {} ({})",
                registration.bean,
                candidate.bean,
                candidate.name
            );
            print_sub_task(
                registration.bean,
                &format!("✓ Wired ({})", simple_type_name(candidate.name)),
            );

            calculators.insert(
                registration.bean,
                WiredCalculator {
                    registration,
                    provider: candidate,
                    instance: Arc::from(instance),
                },
            );
        }

        print_step_complete(1, "Calculator beans wired", calculators.len());
        print_final_summary(providers.len(), calculators.len());

        Ok(Self {
            package: package.to_string(),
            providers,
            calculators,
        })
    }

    fn check_unique_beans(
        providers: &[&'static ProviderRegistration],
        calculators: &[&'static CalculatorRegistration],
    ) -> AppResult<()> {
        let mut seen = HashSet::new();
        let beans = providers
            .iter()
            .map(|r| r.bean)
            .chain(calculators.iter().map(|r| r.bean));

        for bean in beans {
            if !seen.insert(bean) {
                return Err(AppError::ConfigError(format!(
                    "bean id '{}' 가 중복 등록되어 있습니다",
                    bean
                )));
            }
        }

        Ok(())
    }

    fn select_candidate(
        calculator: &CalculatorRegistration,
        providers: &[&'static ProviderRegistration],
    ) -> AppResult<&'static ProviderRegistration> {
        if let Some(qualifier) = calculator.qualifier {
            return providers
                .iter()
                .find(|r| r.bean == qualifier)
                .copied()
                .ok_or_else(|| {
                    AppError::InstantiationError(format!(
                        "'{}' 의 qualifier '{}' 에 해당하는 DataProvider가 없습니다",
                        calculator.name, qualifier
                    ))
                });
        }

        match providers {
            [only] => Ok(*only),
            [] => Err(AppError::InstantiationError(format!(
                "'{}' 에 주입할 DataProvider가 없습니다",
                calculator.name
            ))),
            many => {
                let beans: Vec<_> = many.iter().map(|r| r.bean).collect();
                Err(AppError::InstantiationError(format!(
                    "'{}' 에 주입할 DataProvider가 여러 개입니다: {}",
                    calculator.name,
                    beans.join(", ")
                )))
            }
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// bean id로 배선 정보까지 포함한 Calculator를 찾습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TypeResolutionError` - 해당 bean이 없음
    pub fn wired(&self, bean: &str) -> AppResult<&WiredCalculator> {
        self.calculators
            .get(bean)
            .ok_or_else(|| AppError::unresolved(ComponentRole::Calculator, bean))
    }

    /// `context.getBean("metier")`
    pub fn get_calculator(&self, bean: &str) -> AppResult<Arc<dyn Calculator>> {
        self.wired(bean).map(|w| Arc::clone(&w.instance))
    }

    /// 이미 생성된 DataProvider bean
    ///
    /// 어떤 Calculator에도 주입되지 않은 DataProvider는 생성되지 않으므로 찾을 수 없습니다.
    pub fn get_provider(&self, bean: &str) -> AppResult<Arc<dyn DataProvider>> {
        self.providers
            .get(bean)
            .cloned()
            .ok_or_else(|| AppError::unresolved(ComponentRole::Provider, bean))
    }

    /// 정렬된 Calculator bean id 목록
    pub fn calculator_beans(&self) -> Vec<&'static str> {
        let mut beans: Vec<_> = self.calculators.keys().copied().collect();
        beans.sort_unstable();
        beans
    }
}
