//! 컨테이너(패키지 스캔) 기반 배선
//!
//! 타입 이름을 직접 해석하는 대신 [`ApplicationContext`]가 패키지를 스캔하고
//! qualifier로 DataProvider를 자동 주입한 뒤, bean id로 Calculator를 꺼냅니다.

use crate::bootstrap::{AtStep, BootstrapError, BootstrapStep, Report, Wiring};
use crate::core::container::ApplicationContext;
use crate::core::errors::AppError;
use crate::core::registry::ComponentRegistry;

pub fn run(registry: &ComponentRegistry, package: &str, bean: &str) -> Result<Report, BootstrapError> {
    wire(registry, package, bean)?.report()
}

/// 패키지를 스캔하고 `bean`에 해당하는 Calculator를 배선 결과로 돌려줍니다.
pub fn wire(registry: &ComponentRegistry, package: &str, bean: &str) -> Result<Wiring, BootstrapError> {
    log::info!(
        "🔍 컴포넌트 스캔: package='{}', bean='{}'",
        package,
        bean
    );

    let context = ApplicationContext::scan_registry(registry, package)
        .at(BootstrapStep::ComponentScan)?;
    let wired = context.wired(bean).at(BootstrapStep::ResolveCalculator)?;

    let provider = wired
        .instance
        .provider()
        .ok_or_else(|| {
            AppError::NotConfigured(format!(
                "bean '{}' 에 DataProvider가 주입되지 않았습니다",
                bean
            ))
        })
        .at(BootstrapStep::Injection)?;

    Ok(Wiring {
        provider_name: wired.provider.name,
        provider,
        calculator: Some((wired.registration.name, wired.instance.clone())),
    })
}
