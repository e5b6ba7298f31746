//! # rechain-app
//!
//! REChain 라이프사이클 코어.
//! 딥 링크 라우팅 결과를 내비게이션으로 넘기고, 알림 수신/탭을 중복 없이 처리하며,
//! 백그라운드 작업 슬롯의 실행·만료·완료를 감독하고, 디바이스 등록 결과를 보고한다.
//!
//! 플랫폼 진입점은 [`host_bridge::HostBridge`]에 OS 이벤트를 넘기기만 한다.

pub mod event_bus;
pub mod host_bridge;
pub mod logging;
pub mod notification_coordinator;
pub mod notification_drain;
pub mod registration_reporter;
pub mod settings;
pub mod task_supervisor;

pub use host_bridge::{HostBridge, HostEvent, HostPorts, HostReply};
