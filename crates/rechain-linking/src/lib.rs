//! # rechain-linking
//!
//! 딥 링크 라우팅.
//! OS가 전달한 URL 문자열을 해석하여 앱 자체 스킴(`rechain`, `rechainvc`)은
//! 내부 리소스 열기로, 알려진 지갑 스킴(`metamask`, `trust`, `coinbase`)은
//! 지갑 콜백으로 정규화한다. 부수효과가 없는 순수 함수만 제공한다.

pub mod error;
pub mod scheme_router;
pub mod wallet_adapter;

pub use scheme_router::{parse_link, route, route_all, route_link};
