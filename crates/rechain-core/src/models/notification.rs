//! 알림 모델.
//!
//! 송신자가 붙인 불투명 `id`가 중복 제거 키이며,
//! 코어가 해석하지 않는 속성은 그대로 `raw_attributes`에 보관한다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::action::RoutedAction;

/// 수신 알림 페이로드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    /// 송신자가 제공한 식별자 (중복 제거 키)
    pub id: String,
    /// 탭 시 열 딥 링크
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deep_link: Option<String>,
    /// 해석하지 않는 나머지 속성
    #[serde(default)]
    pub raw_attributes: Map<String, Value>,
}

impl NotificationPayload {
    /// 딥 링크 없이 생성
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            deep_link: None,
            raw_attributes: Map::new(),
        }
    }

    /// 딥 링크 지정
    pub fn with_deep_link(mut self, deep_link: impl Into<String>) -> Self {
        self.deep_link = Some(deep_link.into());
        self
    }

    /// OS가 전달한 속성 맵에서 생성
    ///
    /// `deep_link_key`의 값이 문자열일 때만 딥 링크로 취급한다. 속성 맵은 그대로 보관된다.
    pub fn from_attributes(
        id: impl Into<String>,
        attributes: Map<String, Value>,
        deep_link_key: &str,
    ) -> Self {
        let deep_link = attributes
            .get(deep_link_key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            id: id.into(),
            deep_link,
            raw_attributes: attributes,
        }
    }
}

/// 포그라운드 수신 시 표시 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationDecision {
    /// 배너/알림 표시
    pub alert: bool,
    /// 배지 갱신
    pub badge: bool,
    /// 소리 재생
    pub sound: bool,
}

impl PresentationDecision {
    /// 고정 정책: 알림 + 배지 + 소리
    pub const ALERT_BADGE_SOUND: PresentationDecision = PresentationDecision {
        alert: true,
        badge: true,
        sound: true,
    };
}

/// 시작 시 호스트가 요청하는 알림 권한
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationOptions {
    pub alert: bool,
    pub badge: bool,
    pub sound: bool,
    /// 임시 권한 (사용자 확인 없이 조용히 전달, 모바일 전용)
    pub provisional: bool,
}

impl AuthorizationOptions {
    /// 모바일 호스트 요청 권한
    pub const MOBILE: AuthorizationOptions = AuthorizationOptions {
        alert: true,
        badge: true,
        sound: true,
        provisional: true,
    };

    /// 데스크톱 호스트 요청 권한
    pub const DESKTOP: AuthorizationOptions = AuthorizationOptions {
        alert: true,
        badge: true,
        sound: true,
        provisional: false,
    };
}

/// 알림 권한을 요청하는 호스트 종류
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostPlatform {
    #[default]
    Mobile,
    Desktop,
}

impl HostPlatform {
    /// 시작 시 요청할 알림 권한
    pub fn authorization_options(self) -> AuthorizationOptions {
        match self {
            HostPlatform::Mobile => AuthorizationOptions::MOBILE,
            HostPlatform::Desktop => AuthorizationOptions::DESKTOP,
        }
    }
}

/// 무시 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// 이미 소비된 알림 id
    Duplicate,
    /// 딥 링크 없음
    NoDeepLink,
}

/// 알림 탭 처리 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    /// 딥 링크 라우팅 결과 (Unhandled일 수 있음)
    Routed(RoutedAction),
    /// 아무것도 하지 않음
    NoOp(NoOpReason),
}

impl TapOutcome {
    /// 내비게이션으로 넘길 액션 (처리 가능한 라우팅 결과만)
    pub fn navigable(&self) -> Option<&RoutedAction> {
        match self {
            TapOutcome::Routed(action) if action.is_handled() => Some(action),
            _ => None,
        }
    }
}
