//! URL 스킴 라우터.
//!
//! 모든 입력은 정확히 하나의 [`RoutedAction`]으로 대응된다. 잘못된 URL은
//! 에러 대신 `Unhandled`가 되며, 같은 입력은 항상 같은 결과를 낸다.
//!
//! `url` 크레이트는 형식 검증에만 쓰고, 경로는 입력 원문에서 그대로 잘라낸다.
//! 점 세그먼트, 퍼센트 인코딩, 비ASCII 문자, 포트/사용자 정보는 바뀌지 않는다.
//! 스킴 매칭은 대소문자를 무시한다.
//! 자체 링크에서는 권한부를 첫 번째 경로 세그먼트로 취급한다:
//! `rechainvc://profile?id=42` → 경로 `/profile`.

use rechain_core::models::action::{FirstPartyScheme, RoutedAction};
use rechain_core::models::link::{IncomingLink, QueryParams};
use tracing::debug;
use url::{form_urlencoded, Url};

use crate::error::LinkError;
use crate::wallet_adapter;

/// URL 문자열 → [`IncomingLink`]
///
/// 권한부와 경로는 입력 원문 그대로 보관한다 (프래그먼트는 버린다).
/// 쿼리 쌍은 form 디코딩되며, 같은 키가 반복되면 마지막 값이 남는다.
pub fn parse_link(raw: &str) -> Result<IncomingLink, LinkError> {
    let raw = raw.trim();
    let url = Url::parse(raw)?;

    let rest = raw
        .split_once(':')
        .and_then(|(_, rest)| rest.strip_prefix("//"))
        .ok_or_else(|| LinkError::MissingAuthority(url.scheme().to_string()))?;

    let rest = rest.split('#').next().unwrap_or_default();
    let (target, query) = rest.split_once('?').unwrap_or((rest, ""));
    let (authority, path) = target.split_at(target.find('/').unwrap_or(target.len()));

    let query: QueryParams = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();

    Ok(IncomingLink::new(url.scheme(), authority, path, query))
}

/// URL 하나 라우팅
pub fn route(raw: &str) -> RoutedAction {
    match parse_link(raw) {
        Ok(link) => route_link(&link),
        Err(e) => {
            debug!("링크 해석 실패, 무시: {e}");
            RoutedAction::Unhandled
        }
    }
}

/// 이미 분해된 링크 라우팅
pub fn route_link(link: &IncomingLink) -> RoutedAction {
    let action = match FirstPartyScheme::from_scheme(&link.scheme) {
        Some(scheme) => RoutedAction::OpenRechainResource {
            scheme,
            path: resource_path(link),
            params: link.query.clone(),
        },
        None => wallet_adapter::adapt(link),
    };

    debug!("링크 라우팅: {} → {}", link.redacted(), action.kind());
    action
}

/// 여러 URL을 입력 순서대로 라우팅 (데스크톱 호스트는 한 번에 여러 개를 전달한다)
pub fn route_all<I, S>(urls: I) -> Vec<RoutedAction>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    urls.into_iter().map(|u| route(u.as_ref())).collect()
}

fn resource_path(link: &IncomingLink) -> String {
    match (link.host.is_empty(), link.path.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => link.path.clone(),
        (false, _) => format!("/{}{}", link.host, link.path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rechain_core::models::action::WalletProvider;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn rechainvc_profile_scenario() {
        assert_eq!(
            route("rechainvc://profile?id=42"),
            RoutedAction::OpenRechainResource {
                scheme: FirstPartyScheme::RechainVc,
                path: "/profile".to_string(),
                params: params(&[("id", "42")]),
            }
        );
    }

    #[test]
    fn metamask_connect_scenario() {
        assert_eq!(
            route("metamask://connect?chain=1"),
            RoutedAction::OpenWalletCallback {
                provider: WalletProvider::MetaMask,
                params: params(&[("chain", "1")]),
            }
        );
    }

    #[test]
    fn unknown_scheme_is_unhandled() {
        assert_eq!(route("ftp://example.com"), RoutedAction::Unhandled);
        assert_eq!(route("https://rechain.io/wallet"), RoutedAction::Unhandled);
    }

    #[test]
    fn scheme_case_is_ignored() {
        assert_eq!(route("RECHAIN://foo"), route("rechain://foo"));
        assert_eq!(route("Trust://pay?x=1"), route("trust://pay?x=1"));
    }

    #[test]
    fn path_case_is_preserved() {
        assert_matches!(
            route("rechain://Wallet/Send"),
            RoutedAction::OpenRechainResource { path, .. } if path == "/Wallet/Send"
        );
        assert_ne!(route("rechain://wallet/send"), route("rechain://Wallet/Send"));
    }

    fn routed_path(raw: &str) -> String {
        match route(raw) {
            RoutedAction::OpenRechainResource { path, .. } => path,
            other => panic!("자체 링크가 아님: {raw} → {other:?}"),
        }
    }

    #[test]
    fn path_bytes_are_not_normalized() {
        assert_eq!(routed_path("rechain://wallet/a/../b"), "/wallet/a/../b");
        assert_eq!(routed_path("rechain://wallet/./send"), "/wallet/./send");
        assert_eq!(routed_path("rechain://wallet/a b"), "/wallet/a b");
        assert_eq!(routed_path("rechain://wallet/a%2Fb"), "/wallet/a%2Fb");
        assert_eq!(routed_path("rechain://wallet/a%20b"), "/wallet/a%20b");
        assert_eq!(routed_path("rechain://wallet/é"), "/wallet/é");
    }

    #[test]
    fn authority_is_kept_verbatim() {
        assert_eq!(routed_path("rechain://host:8080/x"), "/host:8080/x");
        assert_eq!(routed_path("rechain://user@host/x"), "/user@host/x");
        assert_ne!(route("rechain://host:8080/x"), route("rechain://host/x"));
        assert_ne!(route("rechain://user@host/x"), route("rechain://host/x"));
    }

    #[test]
    fn fragment_is_dropped() {
        assert_matches!(
            route("rechain://wallet/send?to=0xabc#top"),
            RoutedAction::OpenRechainResource { path, params, .. }
                if path == "/wallet/send" && params.get("to").map(String::as_str) == Some("0xabc")
        );
        assert_eq!(routed_path("rechain://wallet#frag"), "/wallet");
    }

    #[test]
    fn nested_path_and_query_preserved() {
        assert_eq!(
            route("rechain://wallet/tx/0xABC?amount=1.5&to=0xdef"),
            RoutedAction::OpenRechainResource {
                scheme: FirstPartyScheme::Rechain,
                path: "/wallet/tx/0xABC".to_string(),
                params: params(&[("amount", "1.5"), ("to", "0xdef")]),
            }
        );
    }

    #[test]
    fn empty_authority_uses_path_directly() {
        assert_matches!(
            route("rechain:///settings/privacy"),
            RoutedAction::OpenRechainResource { path, .. } if path == "/settings/privacy"
        );
        assert_matches!(
            route("rechain://"),
            RoutedAction::OpenRechainResource { path, .. } if path == "/"
        );
    }

    #[test]
    fn query_values_are_form_decoded_last_wins() {
        assert_matches!(
            route("rechainvc://search?q=hello%20world&q=second+try"),
            RoutedAction::OpenRechainResource { params, .. }
                if params.get("q").map(String::as_str) == Some("second try")
        );
    }

    #[test]
    fn malformed_input_never_panics() {
        for raw in ["", "   ", "rechain", "://missing", "rechain:foo", "not a url at all", "%%%://x"] {
            assert_eq!(route(raw), RoutedAction::Unhandled, "input: {raw:?}");
        }
    }

    #[test]
    fn routing_is_deterministic() {
        let url = "coinbase://callback?tx=abc&status=ok";
        assert_eq!(route(url), route(url));
    }

    #[test]
    fn route_all_preserves_order() {
        let actions = route_all(["ftp://x", "rechain://a", "trust://b"]);
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0], RoutedAction::Unhandled);
        assert_matches!(actions[1], RoutedAction::OpenRechainResource { .. });
        assert_matches!(
            actions[2],
            RoutedAction::OpenWalletCallback {
                provider: WalletProvider::Trust,
                ..
            }
        );
    }

    #[test]
    fn parse_link_reports_missing_authority() {
        assert_matches!(parse_link("rechain:foo"), Err(LinkError::MissingAuthority(_)));
        assert_matches!(parse_link("rechain:/only-path"), Err(LinkError::MissingAuthority(_)));
        assert_matches!(parse_link("no scheme"), Err(LinkError::Parse(_)));
    }
}
