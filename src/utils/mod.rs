//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 설정 줄 정리, 컴포넌트 이름 분해
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들

pub mod string_utils;
pub mod display_terminal;
