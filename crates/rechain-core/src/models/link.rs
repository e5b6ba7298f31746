//! 수신 링크 모델.
//!
//! OS가 전달한 URL을 스킴/호스트/경로/쿼리로 분해한 불변 값.
//! 이벤트마다 한 번 생성되고 라우팅 후 버려진다.

use std::collections::BTreeMap;
use std::fmt;

/// 쿼리 파라미터 맵 (키 순서가 고정되어 비교/직렬화가 결정적이다)
pub type QueryParams = BTreeMap<String, String>;

/// 분해된 수신 링크
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingLink {
    /// 소문자로 정규화된 스킴
    pub scheme: String,
    /// 권한부 원문 (포트/사용자 정보 포함, 없으면 빈 문자열)
    pub host: String,
    /// 경로 원문 (정규화하지 않음)
    pub path: String,
    /// 디코딩된 쿼리 파라미터
    pub query: QueryParams,
}

impl IncomingLink {
    /// 새 링크 생성: 스킴만 소문자로 정규화한다
    pub fn new(
        scheme: impl AsRef<str>,
        host: impl Into<String>,
        path: impl Into<String>,
        query: QueryParams,
    ) -> Self {
        Self {
            scheme: scheme.as_ref().to_ascii_lowercase(),
            host: host.into(),
            path: path.into(),
            query,
        }
    }

    /// 로그용 표현: 쿼리 값은 지갑 세션 정보를 담을 수 있으므로 가린다
    pub fn redacted(&self) -> Redacted<'_> {
        Redacted(self)
    }
}

/// 쿼리를 가린 링크 표시 래퍼
pub struct Redacted<'a>(&'a IncomingLink);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let link = self.0;
        // 사용자 정보는 로그에 남기지 않는다
        let host = link.host.rsplit('@').next().unwrap_or_default();
        write!(f, "{}://{}{}", link.scheme, host, link.path)?;
        if !link.query.is_empty() {
            f.write_str("?<redacted>")?;
        }
        Ok(())
    }
}
