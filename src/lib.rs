//! 의존성 주입 배선 예제
//!
//! 비즈니스 로직 컴포넌트(`Calculator`)가 데이터 접근 컴포넌트(`DataProvider`)에
//! capability trait를 통해서만 의존하도록 만들고, 구현체를 세 가지 방식으로 조립합니다.
//!
//! # Features
//!
//! - **설정 파일 배선**: `config.txt`의 타입 이름을 레지스트리로 해석해 생성/주입
//! - **컨테이너 배선**: 패키지 스캔 + qualifier 기반 자동 주입
//! - **수동 배선**: 코드로 직접 조립
//! - **Fail-fast**: 모든 실패는 실패 단계와 함께 즉시 전파
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Bootstrap    │ ← config / container / manual
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Registry / IoC  │ ← 이름 → 생성자, 자동 주입
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Calculator    │ ← t * 12 * π / 2 * cos(t)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  DataProvider   │ ← 고정 값 / 환경 변수
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use di_wiring::bootstrap::config_wiring;
//! use di_wiring::core::registry::ComponentRegistry;
//!
//! let registry = ComponentRegistry::global()?;
//! let report = config_wiring::run(registry, "config.txt".as_ref())?;
//! report.print();
//! ```

pub mod bootstrap;
pub mod config;
pub mod core;
pub mod dao;
pub mod metier;
pub mod utils;
