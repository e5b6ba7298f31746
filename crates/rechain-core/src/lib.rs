//! # rechain-core
//!
//! REChain 라이프사이클 코어의 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`]: 도메인 데이터 구조체 (링크, 라우팅 결과, 알림, 작업 슬롯, 등록 토큰)
//! - [`ports`]: Hexagonal Architecture 포트 인터페이스 (async_trait)
//! - [`error`]: 핵심 에러 타입 (thiserror)
//! - [`config`]: 라이프사이클 설정 구조체

pub mod config;
pub mod error;
pub mod models;
pub mod ports;
