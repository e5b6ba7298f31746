//! 알림 조정자.
//!
//! 포그라운드 수신, 사용자 탭, 백그라운드 수신을 처리한다.
//! 소비된 알림 id는 프로세스 수명 동안 기억하며(재시작 후에는 초기화),
//! 같은 id의 두 번째 탭은 아무 동작도 하지 않는다.

use parking_lot::Mutex;
use rechain_core::config::NotificationConfig;
use rechain_core::models::notification::{
    NoOpReason, NotificationPayload, PresentationDecision, TapOutcome,
};
use std::collections::{HashSet, VecDeque};
use tracing::{debug, info, warn};

/// 알림 조정자
pub struct NotificationCoordinator {
    config: NotificationConfig,
    /// 소비된 알림 id (중복 제거 집합)
    consumed: Mutex<HashSet<String>>,
    /// 백그라운드 수신 후 처리 대기 중인 알림
    pending: Mutex<VecDeque<NotificationPayload>>,
}

impl NotificationCoordinator {
    /// 새 조정자 생성
    pub fn new(config: NotificationConfig) -> Self {
        Self {
            pending: Mutex::new(VecDeque::with_capacity(config.pending_capacity)),
            consumed: Mutex::new(HashSet::new()),
            config,
        }
    }

    /// 알림 속성 중 딥 링크 키
    pub fn deep_link_key(&self) -> &str {
        &self.config.deep_link_key
    }

    /// 앱 활성 상태에서 알림 수신: 항상 알림 + 배지 + 소리로 표시
    pub fn on_foreground_deliver(&self, payload: &NotificationPayload) -> PresentationDecision {
        debug!("포그라운드 알림 수신: id={}", payload.id);
        PresentationDecision::ALERT_BADGE_SOUND
    }

    /// 사용자가 알림을 탭함
    ///
    /// 이미 소비된 id면 NoOp. 처음이면 id를 기록하고 딥 링크가 있을 때 라우팅한다.
    pub fn on_user_tap(&self, payload: &NotificationPayload) -> TapOutcome {
        if !self.consumed.lock().insert(payload.id.clone()) {
            debug!("중복 알림 탭 무시: id={}", payload.id);
            return TapOutcome::NoOp(NoOpReason::Duplicate);
        }

        match payload.deep_link.as_deref() {
            Some(link) => {
                let action = rechain_linking::route(link);
                info!("알림 탭 라우팅: id={}, 결과={}", payload.id, action.kind());
                TapOutcome::Routed(action)
            }
            None => {
                debug!("딥 링크 없는 알림 탭: id={}", payload.id);
                TapOutcome::NoOp(NoOpReason::NoDeepLink)
            }
        }
    }

    /// 백그라운드 수신: NotificationProcessing 작업이 꺼낼 때까지 보관
    ///
    /// 이미 소비되었거나 대기 중인 id는 건너뛴다. 대기열이 가득 차면 가장 오래된 항목을 버린다.
    /// 대기열에 추가되면 true.
    pub fn on_background_deliver(&self, payload: NotificationPayload) -> bool {
        // 잠금 순서: consumed → pending. 소비 확인과 추가 사이에 탭이 끼어들 수 없다.
        let consumed = self.consumed.lock();
        let mut pending = self.pending.lock();

        if consumed.contains(&payload.id) {
            debug!("이미 소비된 알림, 대기열 추가 생략: id={}", payload.id);
            return false;
        }
        if pending.iter().any(|p| p.id == payload.id) {
            debug!("이미 대기 중인 알림: id={}", payload.id);
            return false;
        }
        pending.push_back(payload);
        self.trim_oldest(&mut pending);
        true
    }

    /// 전달에 실패한 묶음을 원래 순서대로 대기열 앞에 되돌림
    ///
    /// 그 사이 소비되었거나 다시 도착한 id는 건너뛴다. 용량을 넘으면 가장 오래된 항목부터 버린다.
    pub fn requeue_front(&self, batch: Vec<NotificationPayload>) {
        let consumed = self.consumed.lock();
        let mut pending = self.pending.lock();

        let mut restored = 0;
        for payload in batch.into_iter().rev() {
            if consumed.contains(&payload.id) || pending.iter().any(|p| p.id == payload.id) {
                continue;
            }
            pending.push_front(payload);
            restored += 1;
        }
        debug!("대기 알림 {restored}건 복원");
        self.trim_oldest(&mut pending);
    }

    fn trim_oldest(&self, pending: &mut VecDeque<NotificationPayload>) {
        while pending.len() > self.config.pending_capacity {
            if let Some(dropped) = pending.pop_front() {
                warn!(
                    "알림 대기열 가득 참 ({}), 가장 오래된 항목 제거: id={}",
                    self.config.pending_capacity, dropped.id
                );
            }
        }
    }

    /// 대기 중인 알림을 도착 순서대로 모두 꺼냄 (그 사이 탭으로 소비된 id 제외)
    pub fn drain_pending(&self) -> Vec<NotificationPayload> {
        let drained: Vec<NotificationPayload> = self.pending.lock().drain(..).collect();
        let consumed = self.consumed.lock();
        drained
            .into_iter()
            .filter(|p| !consumed.contains(&p.id))
            .collect()
    }

    /// 대기 중인 알림 수
    pub fn pending_len(&self) -> usize {
        self.pending.lock().len()
    }

    /// 해당 id가 소비되었는지
    pub fn is_consumed(&self, id: &str) -> bool {
        self.consumed.lock().contains(id)
    }

    /// 소비된 id 수
    pub fn consumed_count(&self) -> usize {
        self.consumed.lock().len()
    }
}
