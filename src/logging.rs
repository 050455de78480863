// 日志初始化
// fern 分发到标准输出，可选追加写入日志文件

use anyhow::{Context, Result};

use crate::config::LogConfig;

fn dispatch(config: &LogConfig) -> Result<fern::Dispatch> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(config.level)
        .chain(std::io::stdout());

    if let Some(path) = &config.file {
        let file = fern::log_file(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    Ok(dispatch)
}

/// 安装全局日志器，只能调用一次
pub fn init(config: &LogConfig) -> Result<()> {
    dispatch(config)?
        .apply()
        .context("logger already initialized")?;
    log::debug!("logging initialized at level {}", config.level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_dispatch_with_file() {
        let path = std::env::temp_dir().join(format!("jieti-log-{}.log", uuid::Uuid::new_v4()));
        let config = LogConfig {
            level: log::LevelFilter::Debug,
            file: Some(path.clone()),
        };

        assert!(dispatch(&config).is_ok());
        assert!(path.exists());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_dispatch_with_bad_file() {
        let config = LogConfig {
            level: log::LevelFilter::Info,
            file: Some(PathBuf::from("/nonexistent-dir/jieti/app.log")),
        };

        assert!(dispatch(&config).is_err());
    }
}
