//! 디바이스 등록 보고 포트.
//!
//! 구현: 외부 보고 서비스 클라이언트. 재시도 정책이 필요하면 구현 쪽 책임이다.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::registration::RegistrationReport;

/// 등록 토큰/실패 보고 싱크
#[async_trait]
pub trait RegistrationSink: Send + Sync {
    /// 결과 보고
    async fn report(&self, report: RegistrationReport) -> Result<(), CoreError>;
}
