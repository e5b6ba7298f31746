//! 디바이스 등록 보고자.
//!
//! OS 푸시 등록 콜백의 결과(토큰 또는 실패)를 주입된 싱크로 그대로 전달한다.
//! 재시도하지 않으며 싱크 에러는 로그만 남기고 삼킨다.

use rechain_core::models::registration::{RegistrationReport, RegistrationToken};
use rechain_core::ports::registration_sink::RegistrationSink;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{info, warn};

use crate::event_bus::{EventBus, LifecycleEvent};

/// 등록 결과 보고자
pub struct RegistrationReporter {
    sink: Arc<dyn RegistrationSink>,
    events: Option<Arc<EventBus>>,
}

impl RegistrationReporter {
    pub fn new(sink: Arc<dyn RegistrationSink>) -> Self {
        Self { sink, events: None }
    }

    /// 이벤트 버스 설정
    pub fn with_event_bus(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    /// 토큰 수신
    pub async fn on_token_received(&self, token: RegistrationToken) {
        info!("디바이스 토큰 수신 ({}자)", token.as_str().len());
        self.forward(RegistrationReport::Token(token)).await;
    }

    /// OS가 준 원시 토큰 바이트 수신
    pub async fn on_token_bytes(&self, bytes: &[u8]) {
        self.on_token_received(RegistrationToken::from_bytes(bytes))
            .await;
    }

    /// 등록 실패: 사용자에게 표시하지 않고 싱크로만 전달
    pub async fn on_registration_failed(&self, error: impl Display) {
        let message = error.to_string();
        warn!("원격 알림 등록 실패: {message}");
        self.forward(RegistrationReport::Failed(message)).await;
    }

    async fn forward(&self, report: RegistrationReport) {
        let token = matches!(report, RegistrationReport::Token(_));
        let delivered = match self.sink.report(report).await {
            Ok(()) => true,
            Err(e) => {
                warn!("등록 결과 보고 실패: {e}");
                false
            }
        };

        if let Some(ref events) = self.events {
            events.publish(LifecycleEvent::RegistrationReported { token, delivered });
        }
    }
}
