use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
#[cfg(test)]
pub(crate) mod fakes;
pub mod services;

#[derive(Clone, Debug)]
pub struct AllerScanConfig {
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
}

/// Last capture time handed out, in microseconds since the epoch.
static LAST_CAPTURE_MICROS: AtomicI64 = AtomicI64::new(i64::MIN);

/// Wall-clock capture time, strictly increasing within this process so that
/// successive records of one user keep their order even inside one microsecond.
pub fn monotonic_now() -> DateTime<Utc> {
    let now = Utc::now();
    let micros = now.timestamp_micros();
    let mut previous = LAST_CAPTURE_MICROS.load(Ordering::Acquire);

    loop {
        let next = micros.max(previous.saturating_add(1));
        match LAST_CAPTURE_MICROS.compare_exchange_weak(
            previous,
            next,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => return DateTime::from_timestamp_micros(next).unwrap_or(now),
            Err(actual) => previous = actual,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = monotonic_now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
