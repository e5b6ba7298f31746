//! REChain 핵심 에러 타입.
//!
//! 어댑터 crate는 자체 에러 타입에서 `CoreError`로 변환한다.
//! 어떤 에러도 OS 라이프사이클 콜백까지 전파되지 않는다: 각 컴포넌트가
//! 지역적으로 처리하여 타입이 있는 결과나 종료 상태로 바꾼다.

use thiserror::Error;

/// 코어 레이어 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 해석할 수 없는 입력 (잘못된 URL 등): 라우팅 결과는 Unhandled
    #[error("잘못된 입력: {0}")]
    MalformedInput(String),

    /// 백그라운드 작업 콜백 실패: Completed(success=false)로 기록
    #[error("작업 실패: {0}")]
    WorkFailure(String),

    /// 만료 기한 초과: Expired로 기록
    #[error("기한 초과: {slot}")]
    DeadlineExceeded {
        /// 만료된 슬롯 이름
        slot: String,
    },

    /// 주입된 외부 싱크(등록 보고, 내비게이션 등) 실패
    #[error("싱크 에러: {0}")]
    Sink(String),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),
}
