//! REChain 도메인 모델.
//!
//! OS 이벤트에서 만들어져 코어 컴포넌트 사이를 흐르는 데이터 구조체를 정의한다.
//! 라우팅 결과와 알림 페이로드는 `serde` Serialize/Deserialize를 구현한다.

pub mod action;
pub mod link;
pub mod notification;
pub mod registration;
pub mod task;
