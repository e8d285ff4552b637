//! # Bootstrap - 컴포넌트 배선 및 실행
//!
//! 프로세스 시작 시 한 번 실행되는 배선 절차입니다. 세 가지 방식 모두
//! "DataProvider 하나가 주입된 Calculator"라는 같은 결과를 만듭니다.
//!
//! | 방식 | 모듈 | Java 대응 |
//! |------|------|-----------|
//! | 설정 파일 + 레지스트리 | [`config_wiring`] | `Class.forName(sc.nextLine()).newInstance()` |
//! | 패키지 스캔 + 자동 주입 | [`container_wiring`] | `AnnotationConfigApplicationContext` |
//! | 코드로 직접 조립 | [`manual`] | `new MetierImpl(new DaoImpl())` |
//!
//! ## 실패 정책
//!
//! 재시도나 대체 경로는 없습니다. 어느 단계에서든 실패하면 [`BootstrapError`]에
//! 실패한 단계([`BootstrapStep`])와 원인을 담아 즉시 반환하고, `main`은 0이 아닌 코드로 종료합니다.

pub mod config_wiring;
pub mod container_wiring;
pub mod manual;

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::config::{WiringConfig, WiringMode};
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ComponentRegistry;
use crate::dao::DataProvider;
use crate::metier::Calculator;

/// 배선 절차의 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStep {
    ReadConfig,
    ResolveProvider,
    ResolveCalculator,
    ComponentScan,
    Construction,
    Injection,
    Computation,
}

impl fmt::Display for BootstrapStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BootstrapStep::ReadConfig => "reading config",
            BootstrapStep::ResolveProvider => "resolving provider type",
            BootstrapStep::ResolveCalculator => "resolving calculator type",
            BootstrapStep::ComponentScan => "scanning components",
            BootstrapStep::Construction => "construction",
            BootstrapStep::Injection => "injection",
            BootstrapStep::Computation => "computation",
        };
        f.write_str(label)
    }
}

/// 실패한 단계와 원인
#[derive(Error, Debug)]
#[error("{step} failed: {source}")]
pub struct BootstrapError {
    pub step: BootstrapStep,
    #[source]
    pub source: AppError,
}

/// `AppResult`에 실패 단계를 붙이는 확장 trait
pub trait AtStep<T> {
    fn at(self, step: BootstrapStep) -> Result<T, BootstrapError>;
}

impl<T> AtStep<T> for AppResult<T> {
    fn at(self, step: BootstrapStep) -> Result<T, BootstrapError> {
        self.map_err(|source| BootstrapError { step, source })
    }
}

/// 배선이 끝난 컴포넌트 묶음
pub struct Wiring {
    pub provider_name: &'static str,
    pub provider: Arc<dyn DataProvider>,
    /// Calculator 타입 이름과 인스턴스. 설정 파일에 2번째 줄이 없으면 `None`.
    pub calculator: Option<(&'static str, Arc<dyn Calculator>)>,
}

impl Wiring {
    /// 값을 읽고 (Calculator가 있으면) 계산해 보고서를 만듭니다.
    pub fn report(&self) -> Result<Report, BootstrapError> {
        let reading = self.provider.reading();
        log::info!("📥 {} reading = {}", self.provider_name, reading);

        let (calculator, result) = match &self.calculator {
            Some((name, calculator)) => {
                let result = calculator.compute().at(BootstrapStep::Computation)?;
                log::info!("🧮 {} result = {}", name, result);
                (Some(name.to_string()), Some(result))
            }
            None => (None, None),
        };

        Ok(Report {
            provider: self.provider_name.to_string(),
            calculator,
            reading,
            result,
        })
    }
}

/// 실행 결과
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub provider: String,
    pub calculator: Option<String>,
    pub reading: f64,
    pub result: Option<f64>,
}

impl Report {
    /// 표준 출력에 쓸 줄들: 값, 그리고 `RES: <결과>`
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.reading.to_string()];
        if let Some(result) = self.result {
            lines.push(format!("RES: {}", result));
        }
        lines
    }

    pub fn print(&self) {
        for line in self.lines() {
            println!("{}", line);
        }
    }
}

/// 설정된 방식으로 배선하고 실행합니다.
pub fn run(config: &WiringConfig) -> Result<Report, BootstrapError> {
    log::info!("⚙️ 배선 방식: {}", config.mode);

    match config.mode {
        WiringMode::Config => config_wiring::run(global_registry()?, &config.config_path),
        WiringMode::Container => container_wiring::run(
            global_registry()?,
            &config.scan_package,
            &config.calculator_bean,
        ),
        WiringMode::Manual => manual::compose().report(),
    }
}

fn global_registry() -> Result<&'static ComponentRegistry, BootstrapError> {
    ComponentRegistry::global().at(BootstrapStep::ComponentScan)
}
