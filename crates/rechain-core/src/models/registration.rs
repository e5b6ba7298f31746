//! 디바이스 등록 모델.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// 푸시 등록 토큰 (소문자 16진 문자열)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationToken(String);

impl RegistrationToken {
    /// OS가 준 원시 바이트 → 바이트당 두 자리 소문자 16진
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut hex = String::with_capacity(bytes.len() * 2);
        for byte in bytes {
            let _ = write!(hex, "{byte:02x}");
        }
        Self(hex)
    }

    /// 이미 16진 문자열인 토큰 (그대로 보관)
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 외부 싱크로 전달되는 등록 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum RegistrationReport {
    /// 토큰 수신
    Token(RegistrationToken),
    /// 등록 실패 (OS 에러 메시지)
    Failed(String),
}
