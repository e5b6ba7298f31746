//! 포트 인터페이스 (trait).
//!
//! Hexagonal Architecture의 포트 레이어.
//! 호스트(플랫폼 진입점)가 이 trait들을 구현하며,
//! `rechain-app`에서 `Arc<dyn T>`로 와이어링한다.
//!
//! 비동기 trait은 `async_trait` 매크로로 object safety를 보장한다.

pub mod background_work;
pub mod navigator;
pub mod notification_inbox;
pub mod registration_sink;
pub mod task_completion;
