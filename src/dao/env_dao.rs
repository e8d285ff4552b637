//! 외부 소스(환경 변수)에서 값을 가져오는 DataProvider
//!
//! 값은 생성 시점에 한 번만 읽어 보관합니다. 이후 `reading()`은 항상 같은 값을 돌려주며,
//! 값이 없거나 숫자가 아니면 생성 자체가 `InstantiationError`로 실패합니다.
//!
//! ```bash
//! DAO_READING=3.5 WIRING_CONFIG_PATH=env.txt cargo run
//! ```

use std::env;
use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ProviderRegistration;
use crate::dao::DataProvider;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvDao {
    value: f64,
}

impl EnvDao {
    pub const NAME: &'static str = "dao::EnvDao";
    pub const BEAN: &'static str = "envDao";
    /// 값을 읽어올 환경 변수 이름
    pub const VAR: &'static str = "DAO_READING";

    /// `DAO_READING` 환경 변수로부터 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InstantiationError` - 변수가 없거나 유한한 실수가 아님
    pub fn from_env() -> AppResult<Self> {
        Self::parse(env::var(Self::VAR).ok().as_deref())
    }

    /// 원시 문자열 값으로부터 생성합니다.
    pub fn parse(raw: Option<&str>) -> AppResult<Self> {
        let raw = raw.map(str::trim).ok_or_else(|| {
            AppError::InstantiationError(format!(
                "{}: {} 환경 변수가 설정되지 않았습니다",
                Self::NAME,
                Self::VAR
            ))
        })?;

        let value = raw.parse::<f64>().map_err(|e| {
            AppError::InstantiationError(format!(
                "{}: {}='{}' 파싱 실패: {}",
                Self::NAME,
                Self::VAR,
                raw,
                e
            ))
        })?;

        if !value.is_finite() {
            return Err(AppError::InstantiationError(format!(
                "{}: {}='{}' 는 유한한 값이 아닙니다",
                Self::NAME,
                Self::VAR,
                raw
            )));
        }

        Ok(Self { value })
    }
}

impl DataProvider for EnvDao {
    fn reading(&self) -> f64 {
        self.value
    }
}

fn env_dao_constructor() -> AppResult<Arc<dyn DataProvider>> {
    let dao = EnvDao::from_env()?;
    log::info!("🌱 {} 생성: {}={}", EnvDao::NAME, EnvDao::VAR, dao.value);
    Ok(Arc::new(dao))
}

inventory::submit! {
    ProviderRegistration {
        name: EnvDao::NAME,
        bean: EnvDao::BEAN,
        constructor: env_dao_constructor,
    }
}
