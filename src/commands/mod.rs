// Tauri 命令模块
// 提供供前端调用的命令接口

pub mod history;
pub mod solver;

pub use history::ProblemDto;
pub use solver::{SolveRequestDto, SolverStatusDto, SubjectDto};

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::clock::{Clock, TokioClock};
use crate::services::history::HistoryStore;
use crate::services::session::SolverSession;
use crate::services::solver::SolutionGenerator;

/// 应用状态，随窗口会话存在
pub struct AppState {
    pub session: SolverSession,
}

impl AppState {
    pub fn new(session: SolverSession) -> Self {
        Self { session }
    }

    /// 按配置组装会话：真实时钟 + 配置的后端 + 空历史
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let clock: Arc<dyn Clock> = Arc::new(TokioClock);
        let generator = SolutionGenerator::from_config(&config.solver, clock.clone())?;
        let session = SolverSession::new(generator, HistoryStore::new().shared(), clock);
        Ok(Self::new(session))
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use crate::services::clock::ManualClock;

    let clock: Arc<dyn Clock> = Arc::new(ManualClock::default());
    let generator = SolutionGenerator::canned(clock.clone());
    AppState::new(SolverSession::new(
        generator,
        HistoryStore::new().shared(),
        clock,
    ))
}
