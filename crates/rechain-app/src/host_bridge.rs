//! 호스트 브리지.
//!
//! 플랫폼 진입점(모바일/데스크톱 앱 델리게이트)이 받는 OS 이벤트를 코어 컴포넌트 호출로 옮긴다.
//! 비즈니스 로직은 없으며, 어떤 실패도 호스트 콜백으로 전파하지 않는다.

use rechain_core::config::RechainConfig;
use rechain_core::error::CoreError;
use rechain_core::models::action::RoutedAction;
use rechain_core::models::notification::{
    AuthorizationOptions, NotificationPayload, PresentationDecision,
};
use rechain_core::models::task::{TaskHandle, TaskSlot};
use rechain_core::ports::background_work::BackgroundWork;
use rechain_core::ports::navigator::Navigator;
use rechain_core::ports::notification_inbox::NotificationInbox;
use rechain_core::ports::registration_sink::RegistrationSink;
use rechain_core::ports::task_completion::TaskCompletion;
use std::path::Path;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::event_bus::{EventBus, LifecycleEvent};
use crate::logging;
use crate::notification_coordinator::NotificationCoordinator;
use crate::notification_drain::NotificationDrainWork;
use crate::registration_reporter::RegistrationReporter;
use crate::settings;
use crate::task_supervisor::TaskSupervisor;

/// 호스트가 주입하는 외부 협력자
pub struct HostPorts {
    pub navigator: Arc<dyn Navigator>,
    pub registration_sink: Arc<dyn RegistrationSink>,
    pub task_completion: Arc<dyn TaskCompletion>,
    pub notification_inbox: Arc<dyn NotificationInbox>,
    /// Sync 슬롯 작업 (데이터 동기화)
    pub sync_work: Arc<dyn BackgroundWork>,
}

/// OS에서 올라오는 이벤트
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// URL 열기 (데스크톱은 여러 개를 한 번에 전달)
    OpenUrls(Vec<String>),
    /// 앱 활성 상태에서 알림 수신
    NotificationWillPresent(NotificationPayload),
    /// 사용자가 알림을 탭함
    NotificationTapped(NotificationPayload),
    /// 백그라운드에서 알림 수신
    NotificationReceivedInBackground(NotificationPayload),
    /// OS 스케줄러가 백그라운드 작업을 실행함 (`deadline`이 없으면 기본 예산)
    BackgroundTaskLaunched {
        identifier: String,
        deadline: Option<Instant>,
    },
    /// OS 만료 핸들러 호출
    BackgroundTaskExpired(TaskHandle),
    /// 원격 알림 등록 성공 (원시 토큰 바이트)
    TokenRegistered(Vec<u8>),
    /// 원격 알림 등록 실패
    RegistrationFailed(String),
}

/// 호스트 콜백으로 돌려줄 응답
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostReply {
    /// URL/알림을 처리했는지
    pub handled: bool,
    /// 포그라운드 알림 표시 방식
    pub presentation: Option<PresentationDecision>,
    /// 시작된 백그라운드 작업 핸들 (단일 실행 규칙으로 거부되면 None)
    pub task: Option<TaskHandle>,
}

/// 호스트 브리지
pub struct HostBridge {
    config: RechainConfig,
    coordinator: Arc<NotificationCoordinator>,
    supervisor: Arc<TaskSupervisor>,
    reporter: RegistrationReporter,
    navigator: Arc<dyn Navigator>,
    events: Arc<EventBus>,
}

impl HostBridge {
    /// 컴포넌트 생성 및 와이어링
    ///
    /// NotificationProcessing 슬롯에는 대기 알림 배출 작업이 등록된다.
    pub fn new(config: RechainConfig, ports: HostPorts, runtime: Handle) -> Self {
        let events = Arc::new(EventBus::default());
        let coordinator = Arc::new(NotificationCoordinator::new(config.notification.clone()));

        let supervisor = Arc::new(
            TaskSupervisor::new(ports.task_completion, runtime).with_event_bus(events.clone()),
        );
        supervisor.register(TaskSlot::Sync, ports.sync_work);
        supervisor.register(
            TaskSlot::NotificationProcessing,
            Arc::new(NotificationDrainWork::new(
                coordinator.clone(),
                ports.notification_inbox,
            )),
        );

        let reporter =
            RegistrationReporter::new(ports.registration_sink).with_event_bus(events.clone());

        info!(
            "호스트 브리지 초기화: 동기화={}, 알림={}",
            config.background.sync_identifier, config.background.notifications_identifier
        );

        Self {
            config,
            coordinator,
            supervisor,
            reporter,
            navigator: ports.navigator,
            events,
        }
    }

    /// 설정 파일/환경 변수에서 설정을 읽고 로깅을 초기화한 뒤 생성
    ///
    /// `config_path`가 없으면 플랫폼 기본 경로를 쓴다. 로깅이 이미 초기화되어 있으면 그대로 둔다.
    pub fn from_settings(
        config_path: Option<&Path>,
        ports: HostPorts,
        runtime: Handle,
    ) -> Result<Self, CoreError> {
        let config = match config_path {
            Some(path) => settings::load(Some(path))?,
            None => settings::load_default()?,
        };
        if !logging::init(&config.logging.level) {
            debug!("로깅이 이미 초기화됨");
        }
        Ok(Self::new(config, ports, runtime))
    }

    /// 시작 시 호스트가 요청할 알림 권한
    pub fn authorization_options(&self) -> AuthorizationOptions {
        self.config.notification.platform.authorization_options()
    }

    /// 알림 조정자
    pub fn coordinator(&self) -> &Arc<NotificationCoordinator> {
        &self.coordinator
    }

    /// 작업 감독자
    pub fn supervisor(&self) -> &Arc<TaskSupervisor> {
        &self.supervisor
    }

    /// 이벤트 버스
    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    /// OS 이벤트 처리
    pub async fn handle(&self, event: HostEvent) -> HostReply {
        match event {
            HostEvent::OpenUrls(urls) => {
                let mut handled = false;
                for action in rechain_linking::route_all(&urls) {
                    handled |= self.dispatch(action).await;
                }
                HostReply {
                    handled,
                    ..Default::default()
                }
            }
            HostEvent::NotificationWillPresent(payload) => HostReply {
                handled: true,
                presentation: Some(self.coordinator.on_foreground_deliver(&payload)),
                ..Default::default()
            },
            HostEvent::NotificationTapped(payload) => {
                let outcome = self.coordinator.on_user_tap(&payload);
                let handled = match outcome.navigable() {
                    Some(action) => self.dispatch(action.clone()).await,
                    None => false,
                };
                HostReply {
                    handled,
                    ..Default::default()
                }
            }
            HostEvent::NotificationReceivedInBackground(payload) => HostReply {
                handled: self.coordinator.on_background_deliver(payload),
                ..Default::default()
            },
            HostEvent::BackgroundTaskLaunched {
                identifier,
                deadline,
            } => {
                let Some(slot) = TaskSlot::from_identifier(&identifier, &self.config.background)
                else {
                    warn!("알 수 없는 백그라운드 작업 식별자: {identifier}");
                    return HostReply::default();
                };
                // 새 실행 전에 이전 종료 상태를 확인 처리
                let previous = self.supervisor.acknowledge(slot);
                if let Some(Err(e)) = previous.outcome(slot) {
                    info!("이전 실행 결과 확인: {e}");
                }
                let deadline =
                    deadline.unwrap_or_else(|| Instant::now() + self.config.default_budget());
                let task = self.supervisor.begin(slot, deadline);
                HostReply {
                    handled: task.is_some(),
                    task,
                    ..Default::default()
                }
            }
            HostEvent::BackgroundTaskExpired(handle) => HostReply {
                handled: self.supervisor.on_expire(handle),
                ..Default::default()
            },
            HostEvent::TokenRegistered(bytes) => {
                self.reporter.on_token_bytes(&bytes).await;
                HostReply {
                    handled: true,
                    ..Default::default()
                }
            }
            HostEvent::RegistrationFailed(message) => {
                self.reporter.on_registration_failed(message).await;
                HostReply {
                    handled: true,
                    ..Default::default()
                }
            }
        }
    }

    /// 라우팅 결과를 내비게이터로 전달. 처리 가능한 결과였으면 true
    async fn dispatch(&self, action: RoutedAction) -> bool {
        let handled = action.is_handled();
        self.events.publish(LifecycleEvent::LinkRouted {
            kind: action.kind(),
            handled,
        });

        if !handled {
            debug!("처리하지 않는 링크");
            return false;
        }
        if let Err(e) = self.navigator.navigate(&action).await {
            warn!("내비게이션 실패 ({}): {e}", action.kind());
        }
        true
    }
}
