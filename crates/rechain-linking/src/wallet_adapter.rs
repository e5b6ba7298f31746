//! 지갑 콜백 어댑터.
//!
//! 외부 지갑 앱이 돌려보내는 콜백 URL을 자체 딥 링크와 같은 결과 형태로 맞춘다.
//! 지갑별 페이로드는 검증하거나 바꾸지 않는다: 해석은 지갑 연동 쪽 몫이다.

use rechain_core::models::action::{RoutedAction, WalletProvider};
use rechain_core::models::link::IncomingLink;

/// 스킴 → 지갑 제공자 (대소문자 무시)
pub fn recognize(scheme: &str) -> Option<WalletProvider> {
    WalletProvider::ALL
        .into_iter()
        .find(|p| p.as_str().eq_ignore_ascii_case(scheme))
}

/// 지갑 스킴이면 `OpenWalletCallback`, 아니면 `Unhandled`
pub fn adapt(link: &IncomingLink) -> RoutedAction {
    match recognize(&link.scheme) {
        Some(provider) => RoutedAction::OpenWalletCallback {
            provider,
            params: link.query.clone(),
        },
        None => RoutedAction::Unhandled,
    }
}
