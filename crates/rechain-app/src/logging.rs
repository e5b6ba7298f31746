//! tracing 초기화.

use tracing_subscriber::EnvFilter;

/// 로그를 내보낼 크레이트 목록
const LOG_TARGETS: [&str; 3] = ["rechain_app", "rechain_linking", "rechain_core"];

/// 기본 필터 문자열 (`rechain_app=info,rechain_linking=info,...`)
pub fn default_filter(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// 전역 구독자 설치
///
/// `RUST_LOG`가 있으면 설정 레벨보다 우선한다. 이미 설치되어 있으면 아무것도 하지 않고 false.
pub fn init(level: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_covers_all_crates() {
        assert_eq!(
            default_filter("debug"),
            "rechain_app=debug,rechain_linking=debug,rechain_core=debug"
        );
    }

    #[test]
    fn second_init_is_noop() {
        init("info");
        assert!(!init("debug"));
    }
}
