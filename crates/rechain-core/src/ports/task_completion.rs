//! 작업 완료 신호 포트.
//!
//! OS 스케줄러의 "작업 완료" 호출에 대응한다. 핸들마다 정확히 한 번 호출된다.

use crate::models::task::TaskHandle;

/// OS 스케줄러로 돌아가는 완료 신호
pub trait TaskCompletion: Send + Sync {
    /// 실행 종료 보고 (만료는 `success = false`)
    fn task_completed(&self, handle: TaskHandle, success: bool);
}
