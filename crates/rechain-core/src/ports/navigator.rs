//! 내비게이션 포트.
//!
//! 구현: 호스트 앱 런타임 (화면/리소스 전환). 코어는 직접 화면을 바꾸지 않는다.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::action::RoutedAction;

/// 라우팅 결과를 실제 화면 전환으로 소비하는 인터페이스
#[async_trait]
pub trait Navigator: Send + Sync {
    /// 처리 가능한 라우팅 결과 하나를 적용
    async fn navigate(&self, action: &RoutedAction) -> Result<(), CoreError>;
}
