//! 대기 알림 수신함 포트.
//!
//! NotificationProcessing 작업이 모아 둔 알림을 앱 런타임으로 넘길 때 사용한다.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::notification::NotificationPayload;

/// 백그라운드에서 수신된 알림 묶음을 받는 인터페이스
#[async_trait]
pub trait NotificationInbox: Send + Sync {
    /// 도착 순서대로 전달
    async fn deliver(&self, payloads: Vec<NotificationPayload>) -> Result<(), CoreError>;
}
