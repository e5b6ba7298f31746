//! 백그라운드 작업 콜백 포트.
//!
//! 슬롯마다 하나씩 등록된다 (Sync → 데이터 동기화, NotificationProcessing → 대기 알림 처리).
//! 구현은 기한 경과를 관측하면 협조적으로 중단하는 것이 바람직하지만, 코어가 강제하지는 않는다.

use async_trait::async_trait;

use crate::error::CoreError;

/// 지연 작업 콜백
#[async_trait]
pub trait BackgroundWork: Send + Sync {
    /// 작업 실행
    async fn run(&self) -> Result<(), CoreError>;
}
