//! 라우팅 결과 모델.
//!
//! 수신 링크 하나는 정확히 하나의 [`RoutedAction`]으로 대응된다 (Unhandled 포함).

use serde::{Deserialize, Serialize};

use super::link::QueryParams;

/// 앱 자체 URL 스킴
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPartyScheme {
    /// `rechain://`
    Rechain,
    /// `rechainvc://`
    RechainVc,
}

impl FirstPartyScheme {
    /// 허용 목록 전체
    pub const ALL: [FirstPartyScheme; 2] = [FirstPartyScheme::Rechain, FirstPartyScheme::RechainVc];

    /// 와이어 스킴 문자열
    pub fn as_str(self) -> &'static str {
        match self {
            FirstPartyScheme::Rechain => "rechain",
            FirstPartyScheme::RechainVc => "rechainvc",
        }
    }

    /// 스킴 문자열 매칭 (대소문자 무시)
    pub fn from_scheme(scheme: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(scheme))
    }
}

/// 인식하는 외부 지갑 제공자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletProvider {
    /// `metamask://`
    MetaMask,
    /// `trust://`
    Trust,
    /// `coinbase://`
    Coinbase,
}

impl WalletProvider {
    /// 인식 목록 전체
    pub const ALL: [WalletProvider; 3] = [
        WalletProvider::MetaMask,
        WalletProvider::Trust,
        WalletProvider::Coinbase,
    ];

    /// 정규 제공자 이름 (와이어 스킴과 동일)
    pub fn as_str(self) -> &'static str {
        match self {
            WalletProvider::MetaMask => "metamask",
            WalletProvider::Trust => "trust",
            WalletProvider::Coinbase => "coinbase",
        }
    }
}

/// 라우팅 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoutedAction {
    /// 앱 내부 리소스 열기
    OpenRechainResource {
        /// 링크가 사용한 자체 스킴
        scheme: FirstPartyScheme,
        /// 리소스 경로 (`/profile` 형태)
        path: String,
        /// 쿼리 파라미터 (수정 없이 전달)
        params: QueryParams,
    },
    /// 외부 지갑 콜백 처리
    OpenWalletCallback {
        /// 정규 제공자
        provider: WalletProvider,
        /// 원본 쿼리 파라미터 (검증/변형하지 않음)
        params: QueryParams,
    },
    /// 처리하지 않음
    Unhandled,
}

impl RoutedAction {
    /// 호스트에 돌려줄 "처리됨" 여부
    pub fn is_handled(&self) -> bool {
        !matches!(self, RoutedAction::Unhandled)
    }

    /// 로그용 짧은 종류 이름
    pub fn kind(&self) -> &'static str {
        match self {
            RoutedAction::OpenRechainResource { .. } => "open_rechain_resource",
            RoutedAction::OpenWalletCallback { .. } => "open_wallet_callback",
            RoutedAction::Unhandled => "unhandled",
        }
    }
}
