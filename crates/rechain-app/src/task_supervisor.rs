//! 백그라운드 작업 감독자.
//!
//! 이름 있는 작업 슬롯(Sync, NotificationProcessing)마다 실행 중 인스턴스를 하나로 제한하고,
//! 등록된 작업 콜백과 만료 감시를 서로 다른 태스크에서 돌린다. 작업이 막혀 있어도 기한은 발화한다.
//!
//! 상태 전이: Idle → Running → {Completed | Expired}.
//! 종료 상태는 호스트가 [`TaskSupervisor::acknowledge`]로 확인해야 Idle로 돌아가며,
//! 늦게 도착한 완료/만료 신호는 무시된다.
//! OS 완료 신호([`TaskCompletion`])는 핸들당 정확히 한 번 보낸다.

use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use rechain_core::models::task::{SlotSnapshot, SlotState, TaskHandle, TaskSlot};
use rechain_core::ports::background_work::BackgroundWork;
use rechain_core::ports::task_completion::TaskCompletion;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::event_bus::{EventBus, LifecycleEvent};

/// 슬롯 레코드 (스냅샷 + 만료 감시 태스크)
struct SlotRecord {
    snapshot: SlotSnapshot,
    watcher: Option<AbortHandle>,
}

/// 슬롯 테이블
#[derive(Default)]
struct SlotTable {
    records: HashMap<TaskSlot, SlotRecord>,
    next_generation: u64,
}

impl SlotTable {
    fn record_mut(&mut self, slot: TaskSlot) -> &mut SlotRecord {
        self.records.entry(slot).or_insert_with(|| SlotRecord {
            snapshot: SlotSnapshot::idle(slot),
            watcher: None,
        })
    }

    /// 핸들이 현재 실행 중인 세대를 가리킬 때만 레코드 반환
    fn running_mut(&mut self, handle: TaskHandle) -> Option<&mut SlotRecord> {
        self.records
            .get_mut(&handle.slot)
            .filter(|r| {
                r.snapshot.generation == handle.generation
                    && r.snapshot.state == SlotState::Running
            })
    }
}

/// 백그라운드 작업 감독자
pub struct TaskSupervisor {
    slots: Mutex<SlotTable>,
    works: RwLock<HashMap<TaskSlot, Arc<dyn BackgroundWork>>>,
    completion: Arc<dyn TaskCompletion>,
    runtime: Handle,
    events: Option<Arc<EventBus>>,
}

impl TaskSupervisor {
    /// 새 감독자 생성
    ///
    /// 작업 콜백과 만료 감시는 `runtime`에서 실행된다.
    pub fn new(completion: Arc<dyn TaskCompletion>, runtime: Handle) -> Self {
        Self {
            slots: Mutex::new(SlotTable::default()),
            works: RwLock::new(HashMap::new()),
            completion,
            runtime,
            events: None,
        }
    }

    /// 이벤트 버스 설정
    pub fn with_event_bus(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    /// 슬롯에 작업 콜백 등록 (기존 등록은 교체)
    pub fn register(&self, slot: TaskSlot, work: Arc<dyn BackgroundWork>) {
        if self.works.write().insert(slot, work).is_some() {
            debug!("작업 콜백 교체: {slot}");
        }
    }

    /// 작업 시작
    ///
    /// 슬롯이 Idle일 때만 시작한다. Running이거나 [`acknowledge`](Self::acknowledge)로
    /// 확인되지 않은 종료 상태면 아무것도 하지 않고 `None`을 돌려준다.
    pub fn begin(self: &Arc<Self>, slot: TaskSlot, deadline: Instant) -> Option<TaskHandle> {
        let handle = {
            let mut table = self.slots.lock();
            let next_generation = table.next_generation + 1;
            let record = table.record_mut(slot);

            match record.snapshot.state {
                SlotState::Idle => {}
                SlotState::Running => {
                    warn!(
                        "이미 실행 중인 슬롯, 시작 무시: {slot} (세대 {})",
                        record.snapshot.generation
                    );
                    return None;
                }
                previous => {
                    warn!("{slot}: 종료 상태 {previous:?}를 확인하기 전에는 다시 시작할 수 없음");
                    return None;
                }
            }

            record.snapshot = SlotSnapshot {
                slot,
                state: SlotState::Running,
                deadline: Some(deadline),
                generation: next_generation,
                finished_at: None,
            };
            table.next_generation = next_generation;

            TaskHandle {
                slot,
                generation: next_generation,
            }
        };

        info!("작업 시작: {slot} (세대 {})", handle.generation);
        self.publish(LifecycleEvent::TaskStarted(handle));

        self.spawn_watcher(handle, deadline);
        self.spawn_work(handle);

        Some(handle)
    }

    /// 현재 시각 + 예산을 기한으로 작업 시작
    pub fn begin_with_budget(self: &Arc<Self>, slot: TaskSlot, budget: Duration) -> Option<TaskHandle> {
        self.begin(slot, Instant::now() + budget)
    }

    /// 기한 만료: 실행 중이면 Expired로 전이하고 실패를 보고한다
    ///
    /// 전이가 일어났으면 true.
    pub fn on_expire(&self, handle: TaskHandle) -> bool {
        self.finish(handle, SlotState::Expired)
    }

    /// 작업 완료: 실행 중이면 Completed로 전이한다
    ///
    /// 이미 종료된 핸들이나 이전 세대 핸들이면 무시하고 false.
    pub fn complete(&self, handle: TaskHandle, success: bool) -> bool {
        self.finish(handle, SlotState::Completed { success })
    }

    /// 현재 슬롯 상태
    pub fn state(&self, slot: TaskSlot) -> SlotState {
        self.snapshot(slot).state
    }

    /// 관측용 스냅샷
    pub fn snapshot(&self, slot: TaskSlot) -> SlotSnapshot {
        self.slots
            .lock()
            .records
            .get(&slot)
            .map(|r| r.snapshot.clone())
            .unwrap_or_else(|| SlotSnapshot::idle(slot))
    }

    /// 호스트가 종료 상태를 확인함: 종료 상태면 Idle로 되돌린다
    ///
    /// 확인 직전의 상태를 돌려준다 (Running이면 그대로 둔다).
    pub fn acknowledge(&self, slot: TaskSlot) -> SlotState {
        let mut table = self.slots.lock();
        let record = table.record_mut(slot);
        let observed = record.snapshot.state;
        if observed.is_terminal() {
            record.snapshot.state = SlotState::Idle;
            debug!("{slot}: 종료 상태 {observed:?} 확인, Idle로 복귀");
        }
        observed
    }

    fn finish(&self, handle: TaskHandle, next: SlotState) -> bool {
        let watcher = {
            let mut table = self.slots.lock();
            let Some(record) = table.running_mut(handle) else {
                debug!(
                    "종료된 핸들에 대한 신호 무시: {} (세대 {}) → {next:?}",
                    handle.slot, handle.generation
                );
                return false;
            };
            record.snapshot.state = next;
            record.snapshot.finished_at = Some(Utc::now());
            record.watcher.take()
        };

        if let Some(watcher) = watcher {
            watcher.abort();
        }

        match next.outcome(handle.slot) {
            Some(Err(e)) => warn!("작업 종료: {e} (세대 {})", handle.generation),
            _ => info!("작업 종료: {} (세대 {}), 성공", handle.slot, handle.generation),
        }

        self.completion.task_completed(handle, next.succeeded());
        self.publish(LifecycleEvent::TaskFinished {
            handle,
            state: next,
        });
        true
    }

    fn spawn_watcher(self: &Arc<Self>, handle: TaskHandle, deadline: Instant) {
        let supervisor = Arc::clone(self);
        let watcher = self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            supervisor.on_expire(handle);
        });

        let mut table = self.slots.lock();
        match table.running_mut(handle) {
            Some(record) => record.watcher = Some(watcher.abort_handle()),
            // 감시 태스크 등록 전에 이미 종료됨
            None => watcher.abort(),
        }
    }

    fn spawn_work(self: &Arc<Self>, handle: TaskHandle) {
        let work = self.works.read().get(&handle.slot).cloned();
        let supervisor = Arc::clone(self);
        let runtime = self.runtime.clone();

        self.runtime.spawn(async move {
            let success = match work {
                None => {
                    warn!("등록된 작업 콜백 없음: {}", handle.slot);
                    false
                }
                // 패닉도 실패로 기록되도록 별도 태스크에서 실행
                Some(work) => match runtime.spawn(async move { work.run().await }).await {
                    Ok(Ok(())) => true,
                    Ok(Err(e)) => {
                        warn!("작업 실패: {}: {e}", handle.slot);
                        false
                    }
                    Err(e) => {
                        warn!("작업 태스크 비정상 종료: {}: {e}", handle.slot);
                        false
                    }
                },
            };
            supervisor.complete(handle, success);
        });
    }

    fn publish(&self, event: LifecycleEvent) {
        if let Some(ref events) = self.events {
            events.publish(event);
        }
    }
}
