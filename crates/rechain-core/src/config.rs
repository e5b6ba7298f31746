//! 라이프사이클 코어 설정 구조체.
//!
//! 알림 대기열 크기, 백그라운드 작업 식별자, 기본 만료 예산, 로그 레벨을 정의한다.
//! 모든 섹션은 `#[serde(default)]`이므로 부분 설정 파일도 로드된다.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::notification::HostPlatform;

/// 최상위 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RechainConfig {
    /// 알림 설정
    #[serde(default)]
    pub notification: NotificationConfig,
    /// 백그라운드 작업 설정
    #[serde(default)]
    pub background: BackgroundConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RechainConfig {
    /// 호스트가 기한을 주지 않았을 때 사용할 작업 예산
    pub fn default_budget(&self) -> Duration {
        Duration::from_secs(self.background.default_budget_secs)
    }

    /// 값 검증
    pub fn validate(&self) -> Result<(), crate::error::CoreError> {
        if self.notification.pending_capacity == 0 {
            return Err(crate::error::CoreError::Config(
                "notification.pending_capacity는 0보다 커야 합니다".to_string(),
            ));
        }
        if self.notification.deep_link_key.trim().is_empty() {
            return Err(crate::error::CoreError::Config(
                "notification.deep_link_key가 비어 있습니다".to_string(),
            ));
        }
        if self.background.sync_identifier == self.background.notifications_identifier {
            return Err(crate::error::CoreError::Config(
                "백그라운드 작업 식별자가 중복됩니다".to_string(),
            ));
        }
        if self.background.default_budget_secs == 0 {
            return Err(crate::error::CoreError::Config(
                "background.default_budget_secs는 0보다 커야 합니다".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================
// 알림 설정
// ============================================================

/// 알림 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// 백그라운드 수신 알림 대기열 최대 크기 (초과 시 가장 오래된 항목 제거)
    #[serde(default = "default_pending_capacity")]
    pub pending_capacity: usize,
    /// 알림 속성 중 딥 링크가 담긴 키
    #[serde(default = "default_deep_link_key")]
    pub deep_link_key: String,
    /// 알림 권한 요청 방식을 정하는 호스트 종류 (`mobile` | `desktop`)
    #[serde(default)]
    pub platform: HostPlatform,
}

fn default_pending_capacity() -> usize {
    64
}

fn default_deep_link_key() -> String {
    "deep_link".to_string()
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            pending_capacity: default_pending_capacity(),
            deep_link_key: default_deep_link_key(),
            platform: HostPlatform::default(),
        }
    }
}

// ============================================================
// 백그라운드 작업 설정
// ============================================================

/// 백그라운드 작업 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundConfig {
    /// 동기화 작업의 OS 스케줄러 식별자
    #[serde(default = "default_sync_identifier")]
    pub sync_identifier: String,
    /// 알림 처리 작업의 OS 스케줄러 식별자
    #[serde(default = "default_notifications_identifier")]
    pub notifications_identifier: String,
    /// 기본 작업 예산 (초)
    #[serde(default = "default_budget_secs")]
    pub default_budget_secs: u64,
}

fn default_sync_identifier() -> String {
    "com.rechain.vc.background-sync".to_string()
}

fn default_notifications_identifier() -> String {
    "com.rechain.vc.notifications".to_string()
}

fn default_budget_secs() -> u64 {
    30
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            sync_identifier: default_sync_identifier(),
            notifications_identifier: default_notifications_identifier(),
            default_budget_secs: default_budget_secs(),
        }
    }
}

// ============================================================
// 로깅 설정
// ============================================================

/// 로깅 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
