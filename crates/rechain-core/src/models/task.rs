//! 백그라운드 작업 슬롯 모델.
//!
//! 슬롯은 Idle → Running → {Completed | Expired}로만 전이한다.
//! Completed/Expired는 해당 실행의 종료 상태이며, 호스트가 확인(acknowledge)해야
//! 다시 Idle이 된다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::time::Instant;

use crate::config::BackgroundConfig;
use crate::error::CoreError;

/// 작업 슬롯 이름
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskSlot {
    /// 데이터 동기화
    Sync,
    /// 대기 중인 알림 처리
    NotificationProcessing,
}

impl TaskSlot {
    /// 전체 슬롯
    pub const ALL: [TaskSlot; 2] = [TaskSlot::Sync, TaskSlot::NotificationProcessing];

    pub fn name(self) -> &'static str {
        match self {
            TaskSlot::Sync => "sync",
            TaskSlot::NotificationProcessing => "notification_processing",
        }
    }

    /// OS 스케줄러 식별자 → 슬롯
    pub fn from_identifier(identifier: &str, config: &BackgroundConfig) -> Option<Self> {
        if identifier == config.sync_identifier {
            Some(TaskSlot::Sync)
        } else if identifier == config.notifications_identifier {
            Some(TaskSlot::NotificationProcessing)
        } else {
            None
        }
    }

    /// 슬롯 → OS 스케줄러 식별자
    pub fn identifier(self, config: &BackgroundConfig) -> &str {
        match self {
            TaskSlot::Sync => &config.sync_identifier,
            TaskSlot::NotificationProcessing => &config.notifications_identifier,
        }
    }
}

impl fmt::Display for TaskSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 슬롯 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SlotState {
    Idle,
    Running,
    /// 작업 종료 (성공 여부 포함)
    Completed { success: bool },
    /// 기한 만료
    Expired,
}

impl SlotState {
    /// 종료 상태 여부
    pub fn is_terminal(self) -> bool {
        matches!(self, SlotState::Completed { .. } | SlotState::Expired)
    }

    /// 호스트에 보고할 성공 여부 (종료 상태에서만 의미 있음)
    pub fn succeeded(self) -> bool {
        matches!(self, SlotState::Completed { success: true })
    }

    /// 종료 상태를 호스트에 보고할 결과로 변환 (종료 전이면 None)
    ///
    /// 만료는 [`CoreError::DeadlineExceeded`], 실패한 완료는 [`CoreError::WorkFailure`].
    pub fn outcome(self, slot: TaskSlot) -> Option<Result<(), CoreError>> {
        match self {
            SlotState::Idle | SlotState::Running => None,
            SlotState::Completed { success: true } => Some(Ok(())),
            SlotState::Completed { success: false } => Some(Err(CoreError::WorkFailure(
                format!("{slot} 작업이 실패로 종료됨"),
            ))),
            SlotState::Expired => Some(Err(CoreError::DeadlineExceeded {
                slot: slot.name().to_string(),
            })),
        }
    }
}

/// `begin`이 돌려주는 작업 핸들
///
/// 세대(generation)로 실행을 구분하므로, 이전 실행의 늦은 완료 신호는 새 실행에 영향을 주지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle {
    pub slot: TaskSlot,
    pub generation: u64,
}

/// 관측용 슬롯 스냅샷
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSnapshot {
    pub slot: TaskSlot,
    pub state: SlotState,
    /// 현재(또는 마지막) 실행의 기한
    pub deadline: Option<Instant>,
    /// 마지막으로 시작된 실행의 세대 (시작된 적 없으면 0)
    pub generation: u64,
    /// 종료 시각
    pub finished_at: Option<DateTime<Utc>>,
}

impl SlotSnapshot {
    /// 한 번도 시작되지 않은 슬롯
    pub fn idle(slot: TaskSlot) -> Self {
        Self {
            slot,
            state: SlotState::Idle,
            deadline: None,
            generation: 0,
            finished_at: None,
        }
    }
}
