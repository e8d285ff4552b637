//! 설정 파일 기반 배선
//!
//! ```text
//! config.txt ─▶ WiringSpec ─▶ resolve_provider ─▶ resolve_calculator
//!                                                      │
//!          compute ◀─ inject (setter) ◀─ construct ◀───┘
//! ```
//!
//! 두 이름을 모두 해석한 뒤에야 인스턴스를 만들기 시작하므로,
//! 잘못된 Calculator 이름은 어떤 생성이나 계산도 일어나기 전에 실패합니다.

use std::path::Path;
use std::sync::Arc;

use crate::bootstrap::{AtStep, BootstrapError, BootstrapStep, Report, Wiring};
use crate::config::WiringSpec;
use crate::core::registry::ComponentRegistry;

/// 설정 파일을 읽어 배선하고 실행합니다.
pub fn run(registry: &ComponentRegistry, path: &Path) -> Result<Report, BootstrapError> {
    log::info!("📄 설정 파일 로드: {}", path.display());

    let spec = WiringSpec::load(path).at(BootstrapStep::ReadConfig)?;
    wire(registry, &spec)?.report()
}

/// 배선 명세대로 컴포넌트를 해석, 생성, 주입합니다.
pub fn wire(registry: &ComponentRegistry, spec: &WiringSpec) -> Result<Wiring, BootstrapError> {
    let provider_registration = registry
        .resolve_provider(&spec.provider)
        .at(BootstrapStep::ResolveProvider)?;

    let calculator_registration = spec
        .calculator
        .as_deref()
        .map(|name| registry.resolve_calculator(name))
        .transpose()
        .at(BootstrapStep::ResolveCalculator)?;

    let provider = provider_registration
        .instantiate()
        .at(BootstrapStep::Construction)?;
    log::info!("✅ DataProvider 생성: {}", provider_registration.name);

    let calculator = match calculator_registration {
        Some(registration) => {
            let construction = registration
                .construct(&provider)
                .at(BootstrapStep::Construction)?;
            let calculator = construction
                .inject(&provider)
                .at(BootstrapStep::Injection)?;
            log::info!(
                "✅ Calculator 생성 및 주입: {} ← {}",
                registration.name,
                provider_registration.name
            );
            Some((registration.name, Arc::from(calculator)))
        }
        None => {
            log::info!("ℹ️ Calculator 미지정, 값만 출력합니다");
            None
        }
    };

    Ok(Wiring {
        provider_name: provider_registration.name,
        provider,
        calculator,
    })
}
