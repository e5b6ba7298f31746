//! 링크 해석 에러.

use rechain_core::error::CoreError;
use thiserror::Error;

/// URL → [`IncomingLink`](rechain_core::models::link::IncomingLink) 변환 실패
#[derive(Debug, Error)]
pub enum LinkError {
    /// URL 문법 오류
    #[error("URL 파싱 실패: {0}")]
    Parse(#[from] url::ParseError),

    /// `scheme:rest` 형태: `://` 권한부가 없음
    #[error("권한부 없는 URL: {0}")]
    MissingAuthority(String),
}

impl From<LinkError> for CoreError {
    fn from(err: LinkError) -> Self {
        CoreError::MalformedInput(err.to_string())
    }
}
