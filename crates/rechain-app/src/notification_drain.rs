//! NotificationProcessing 슬롯의 기본 작업.
//!
//! 백그라운드로 수신되어 대기 중인 알림을 모두 꺼내 앱 수신함으로 넘긴다.
//! 수신함 전달이 실패하면 꺼낸 알림을 원래 순서대로 대기열 앞에 되돌린다.

use async_trait::async_trait;
use rechain_core::error::CoreError;
use rechain_core::ports::background_work::BackgroundWork;
use rechain_core::ports::notification_inbox::NotificationInbox;
use std::sync::Arc;
use tracing::{debug, info};

use crate::notification_coordinator::NotificationCoordinator;

/// 대기 알림 배출 작업
pub struct NotificationDrainWork {
    coordinator: Arc<NotificationCoordinator>,
    inbox: Arc<dyn NotificationInbox>,
}

impl NotificationDrainWork {
    pub fn new(coordinator: Arc<NotificationCoordinator>, inbox: Arc<dyn NotificationInbox>) -> Self {
        Self { coordinator, inbox }
    }
}

#[async_trait]
impl BackgroundWork for NotificationDrainWork {
    async fn run(&self) -> Result<(), CoreError> {
        let batch = self.coordinator.drain_pending();
        if batch.is_empty() {
            debug!("대기 중인 알림 없음");
            return Ok(());
        }

        let count = batch.len();
        if let Err(e) = self.inbox.deliver(batch.clone()).await {
            self.coordinator.requeue_front(batch);
            return Err(CoreError::WorkFailure(format!(
                "대기 알림 {count}건 전달 실패: {e}"
            )));
        }

        info!("대기 알림 {count}건 전달");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rechain_core::config::NotificationConfig;
    use rechain_core::models::notification::NotificationPayload;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingInbox {
        batches: Mutex<Vec<Vec<String>>>,
        fail: bool,
        /// 전달 도중 새 알림을 넣을 조정자
        arrivals: Option<Arc<NotificationCoordinator>>,
    }

    #[async_trait]
    impl NotificationInbox for RecordingInbox {
        async fn deliver(&self, payloads: Vec<NotificationPayload>) -> Result<(), CoreError> {
            if let Some(ref coordinator) = self.arrivals {
                coordinator.on_background_deliver(NotificationPayload::new("late"));
            }
            if self.fail {
                return Err(CoreError::Sink("수신함 닫힘".to_string()));
            }
            self.batches
                .lock()
                .await
                .push(payloads.into_iter().map(|p| p.id).collect());
            Ok(())
        }
    }

    fn coordinator_with(ids: &[&str]) -> Arc<NotificationCoordinator> {
        let coordinator = Arc::new(NotificationCoordinator::new(NotificationConfig::default()));
        for id in ids {
            coordinator.on_background_deliver(NotificationPayload::new(*id));
        }
        coordinator
    }

    #[tokio::test]
    async fn drains_in_arrival_order() {
        let coordinator = coordinator_with(&["a", "b", "c"]);
        let inbox = Arc::new(RecordingInbox::default());
        let work = NotificationDrainWork::new(coordinator.clone(), inbox.clone());

        work.run().await.unwrap();

        assert_eq!(*inbox.batches.lock().await, vec![vec!["a", "b", "c"]]);
        assert_eq!(coordinator.pending_len(), 0);
    }

    #[tokio::test]
    async fn empty_queue_skips_inbox() {
        let coordinator = coordinator_with(&[]);
        let inbox = Arc::new(RecordingInbox::default());
        let work = NotificationDrainWork::new(coordinator, inbox.clone());

        work.run().await.unwrap();
        assert!(inbox.batches.lock().await.is_empty());
    }

    #[tokio::test]
    async fn failed_delivery_requeues() {
        let coordinator = coordinator_with(&["a", "b"]);
        let inbox = Arc::new(RecordingInbox {
            fail: true,
            ..Default::default()
        });
        let work = NotificationDrainWork::new(coordinator.clone(), inbox);

        let result = work.run().await;
        assert!(matches!(result, Err(CoreError::WorkFailure(_))));
        assert_eq!(coordinator.pending_len(), 2);
    }

    #[tokio::test]
    async fn failed_batch_stays_ahead_of_later_arrivals() {
        let coordinator = coordinator_with(&["a", "b"]);
        let inbox = Arc::new(RecordingInbox {
            fail: true,
            arrivals: Some(coordinator.clone()),
            ..Default::default()
        });
        let work = NotificationDrainWork::new(coordinator.clone(), inbox);

        assert!(work.run().await.is_err());

        let ids: Vec<String> = coordinator
            .drain_pending()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "late"]);
    }
}
