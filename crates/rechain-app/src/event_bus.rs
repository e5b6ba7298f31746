//! 라이프사이클 이벤트 버스.
//!
//! `tokio::broadcast` 기반. 라우팅 결과, 작업 종료, 등록 보고를 관측용으로 발행한다.
//! 구독자가 없거나 뒤처져도 발행 쪽은 막히지 않는다.

use rechain_core::models::task::{SlotState, TaskHandle};
use tokio::sync::broadcast;
use tracing::debug;

/// 라이프사이클 이벤트
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleEvent {
    /// 링크 라우팅 완료
    LinkRouted { kind: &'static str, handled: bool },
    /// 작업 슬롯 실행 시작
    TaskStarted(TaskHandle),
    /// 작업 슬롯 종료 (핸들당 한 번)
    TaskFinished { handle: TaskHandle, state: SlotState },
    /// 등록 결과 보고 (`token`이 false면 실패 보고)
    RegistrationReported { token: bool, delivered: bool },
}

/// 이벤트 버스
pub struct EventBus {
    tx: broadcast::Sender<LifecycleEvent>,
}

impl EventBus {
    /// 새 이벤트 버스 생성
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// 이벤트 발행
    pub fn publish(&self, event: LifecycleEvent) {
        debug!("이벤트 발행: {:?}", event);
        let _ = self.tx.send(event);
    }

    /// 구독자 생성
    pub fn subscribe(&self) -> broadcast::Receiver<LifecycleEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rechain_core::models::task::TaskSlot;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        let handle = TaskHandle {
            slot: TaskSlot::Sync,
            generation: 1,
        };
        bus.publish(LifecycleEvent::TaskStarted(handle));

        assert_eq!(rx.recv().await.unwrap(), LifecycleEvent::TaskStarted(handle));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(LifecycleEvent::LinkRouted {
            kind: "unhandled",
            handled: false,
        });

        assert!(matches!(
            rx1.recv().await.unwrap(),
            LifecycleEvent::LinkRouted { handled: false, .. }
        ));
        assert!(matches!(
            rx2.recv().await.unwrap(),
            LifecycleEvent::LinkRouted { handled: false, .. }
        ));
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = EventBus::default();
        bus.publish(LifecycleEvent::RegistrationReported {
            token: true,
            delivered: true,
        });
    }
}
