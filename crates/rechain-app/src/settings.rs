//! 계층형 설정 로드.
//!
//! JSON 설정 파일(선택) 위에 `RECHAIN__<섹션>__<키>` 환경 변수를 덮어쓴다.
//! 예: `RECHAIN__BACKGROUND__DEFAULT_BUDGET_SECS=10`

use config::{Config, Environment, File, FileFormat};
use directories::ProjectDirs;
use rechain_core::config::RechainConfig;
use rechain_core::error::CoreError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 환경 변수 접두사
pub const ENV_PREFIX: &str = "RECHAIN";

/// 설정 파일 이름
pub const CONFIG_FILE_NAME: &str = "lifecycle.json";

/// 플랫폼별 설정 디렉토리
///
/// - macOS: `~/Library/Application Support/com.rechain.vc/`
/// - Windows: `%APPDATA%\rechain\vc\config\`
/// - Linux: `~/.config/vc/`
pub fn config_dir() -> Result<PathBuf, CoreError> {
    ProjectDirs::from("com", "rechain", "vc")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CoreError::Config("홈 디렉토리를 찾을 수 없습니다".to_string()))
}

/// 플랫폼 설정 디렉토리의 기본 설정 파일 경로
pub fn default_path() -> Result<PathBuf, CoreError> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// 기본 경로 + 프로세스 환경 변수에서 설정 로드
///
/// 홈 디렉토리를 찾을 수 없으면 환경 변수만 사용한다.
pub fn load_default() -> Result<RechainConfig, CoreError> {
    match default_path() {
        Ok(path) => load(Some(&path)),
        Err(e) => {
            debug!("기본 설정 경로 없음, 환경 변수만 사용: {e}");
            load(None)
        }
    }
}

/// 파일 + 프로세스 환경 변수에서 설정 로드
pub fn load(path: Option<&Path>) -> Result<RechainConfig, CoreError> {
    load_with_env(path, None)
}

/// 환경 변수 맵을 직접 지정하여 로드 (`None`이면 프로세스 환경)
pub fn load_with_env(
    path: Option<&Path>,
    env: Option<HashMap<String, String>>,
) -> Result<RechainConfig, CoreError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(
            File::new(&path.to_string_lossy(), FileFormat::Json).required(false),
        );
    }

    let config: RechainConfig = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(env),
        )
        .build()
        .map_err(|e| CoreError::Config(format!("설정 로드 실패: {e}")))?
        .try_deserialize()
        .map_err(|e| CoreError::Config(format!("설정 해석 실패: {e}")))?;

    config.validate()?;
    debug!("설정 로드 완료: {:?}", config);
    Ok(config)
}
