//! # Core Framework Module
//!
//! 컴포넌트 배선을 위한 핵심 기능을 제공하는 모듈입니다.
//! Spring Framework의 `Class.forName` 기반 수동 배선과 어노테이션 기반 컨테이너를
//! Rust에서는 리플렉션 없이 명시적인 등록 테이블과 자동 주입 코드로 구현합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 이름 기반 팩토리 레지스트리
//! - **ComponentRegistry**: `타입 이름 → 생성자` 테이블
//! - **자동 등록**: `inventory` 기반 시작 시점 수집
//! - **생성 규칙**: 생성자 주입 우선, 없으면 setter 주입
//!
//! ### [`container`] - 선언적 컨테이너
//! - **ApplicationContext**: 패키지 스캔 + qualifier 기반 자동 주입
//! - **지연 초기화**: 실제로 주입되는 DataProvider만 생성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 배선 전 과정의 에러 분류
//! - **ErrorContext**: 외부 에러 변환 헬퍼
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `Class.forName(name)` | `ComponentRegistry::resolve_provider(name)` |
//! | `@Component("dao")` | `ProviderRegistration { bean: "dao", .. }` |
//! | `@Autowired @Qualifier("dao")` | `CalculatorRegistration { qualifier: Some("dao"), .. }` |
//! | `AnnotationConfigApplicationContext` | `ApplicationContext::scan` |
//! | `context.getBean("metier")` | `ApplicationContext::get_calculator("metier")` |
//!
//! ## 트러블슈팅
//!
//! ### 미등록 타입 에러
//! ```text
//! Type resolution error: no Calculator registered under 'metier::Missing'
//! ```
//! **해결**: `config.txt`의 이름 오타 확인, 또는 구현체에 `inventory::submit!` 추가
//!
//! ### 모호한 자동 주입
//! ```text
//! Instantiation error: 'metier::MetierImpl' 에 주입할 DataProvider가 여러 개입니다: dao, dao2
//! ```
//! **해결**: Calculator 등록 정보에 `qualifier` 지정, 또는 스캔 패키지 범위 축소

pub mod container;
pub mod errors;
pub mod registry;

pub use container::*;
pub use errors::*;
pub use registry::*;
