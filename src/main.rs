//! 배선 실행 애플리케이션
//!
//! `.env`와 환경 변수로 배선 방식을 정하고, 컴포넌트를 조립해 계산 결과를 출력합니다.
//! 표준 출력에는 값과 `RES: <결과>`만 쓰고, 로그와 진단 메시지는 표준 에러로 보냅니다.

use std::process::ExitCode;

use dotenv::dotenv;
use env_logger::Env;
use log::{debug, info};

use di_wiring::bootstrap::{self, AtStep, BootstrapStep};
use di_wiring::config::{Environment, WiringConfig};

fn main() -> ExitCode {
    // 환경 설정 및 로깅 초기화
    let profile = load_env_file();
    let environment = Environment::current();
    init_logging(&environment);

    info!("🚀 배선 시작중... (profile: {}, environment: {:?})", profile, environment);

    let result = WiringConfig::from_env()
        .at(BootstrapStep::ReadConfig)
        .and_then(|config| bootstrap::run(&config));

    match result {
        Ok(report) => {
            report.print();
            info!("✅ 완료");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("실패 상세: {:?}", e);
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// 로깅 초기화 전이므로 결과는 로그 대신 반환값으로 알립니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            dotenv::from_filename(".env.prod").ok();
        }
        "dev" => {
            dotenv::from_filename(".env.dev").ok();
        }
        _ => {
            dotenv().ok();
        }
    }

    profile
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경에 맞는 기본 레벨을 사용합니다.
///
/// ```bash
/// RUST_LOG=di_wiring::core=debug WIRING_MODE=container cargo run
/// ```
fn init_logging(environment: &Environment) {
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
}
