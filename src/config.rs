// 应用配置
// 默认值 + 环境变量覆盖

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::time::Duration;

/// 模拟解题延迟（毫秒）
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 2000;

/// 远程解题请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 解题后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverBackendKind {
    Canned,
    Remote,
}

/// 解题配置
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub backend: SolverBackendKind,
    pub simulated_delay: Duration,
    pub remote_endpoint: Option<String>,
    pub request_timeout: Duration,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            backend: SolverBackendKind::Canned,
            simulated_delay: Duration::from_millis(DEFAULT_SIMULATED_DELAY_MS),
            remote_endpoint: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub level: log::LevelFilter,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: log::LevelFilter::Info,
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub solver: SolverConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// 从进程环境变量读取配置
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取配置，未设置的项使用默认值
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(backend) = lookup("JIETI_SOLVER_BACKEND") {
            config.solver.backend = match backend.trim().to_ascii_lowercase().as_str() {
                "canned" => SolverBackendKind::Canned,
                "remote" => SolverBackendKind::Remote,
                other => bail!("unknown solver backend: {other}"),
            };
        }

        if let Some(delay) = lookup("JIETI_SOLVER_DELAY_MS") {
            let ms: u64 = delay
                .trim()
                .parse()
                .with_context(|| format!("invalid JIETI_SOLVER_DELAY_MS: {delay}"))?;
            config.solver.simulated_delay = Duration::from_millis(ms);
        }

        if let Some(endpoint) = lookup("JIETI_SOLVER_ENDPOINT") {
            let endpoint = endpoint.trim();
            if !endpoint.is_empty() {
                config.solver.remote_endpoint = Some(endpoint.to_string());
            }
        }

        if let Some(timeout) = lookup("JIETI_SOLVER_TIMEOUT_SECS") {
            let secs: u64 = timeout
                .trim()
                .parse()
                .with_context(|| format!("invalid JIETI_SOLVER_TIMEOUT_SECS: {timeout}"))?;
            config.solver.request_timeout = Duration::from_secs(secs);
        }

        if let Some(level) = lookup("JIETI_LOG_LEVEL") {
            config.log.level = level
                .trim()
                .parse()
                .with_context(|| format!("invalid JIETI_LOG_LEVEL: {level}"))?;
        }

        if let Some(file) = lookup("JIETI_LOG_FILE") {
            if !file.trim().is_empty() {
                config.log.file = Some(PathBuf::from(file.trim()));
            }
        }

        if config.solver.backend == SolverBackendKind::Remote
            && config.solver.remote_endpoint.is_none()
        {
            bail!("JIETI_SOLVER_ENDPOINT is required when JIETI_SOLVER_BACKEND=remote");
        }

        Ok(config)
    }
}
