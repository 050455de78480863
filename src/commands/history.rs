// 历史记录命令模块
// 提供供前端调用的历史列表、查看与删除接口

use serde::{Deserialize, Serialize};

use crate::commands::AppState;
use crate::error::SolverError;
use crate::models::{InputMethod, Problem, Solution, Subject};
use crate::utils::{format_solved_at, preview};

/// 列表预览的题干长度
const QUESTION_PREVIEW_CHARS: usize = 80;

/// 题目传输对象（返回给前端）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDto {
    pub id: String,
    pub subject: Subject,
    pub subject_name: String,
    pub question: String,
    pub question_preview: String,
    pub solution: Solution,
    pub timestamp: String,
    pub solved_at: String,
    pub input_method: InputMethod,
}

impl From<&Problem> for ProblemDto {
    fn from(problem: &Problem) -> Self {
        Self {
            id: problem.id.clone(),
            subject: problem.subject,
            subject_name: problem.subject.display_name().to_string(),
            question: problem.question.clone(),
            question_preview: preview(&problem.question, QUESTION_PREVIEW_CHARS),
            solution: problem.solution.clone(),
            timestamp: problem.timestamp.to_rfc3339(),
            solved_at: format_solved_at(&problem.timestamp),
            input_method: problem.input_method,
        }
    }
}

/// 获取历史列表（最新在前），可按学科筛选
pub async fn history(state: &AppState, subject: Option<String>) -> Result<Vec<ProblemDto>, String> {
    let filter = match subject {
        Some(raw) => Some(raw.parse::<Subject>().map_err(|e| e.to_string())?),
        None => None,
    };

    let store = state.session.history();
    let store = store.lock().await;

    let problems: Vec<ProblemDto> = match filter {
        Some(subject) => store.by_subject(subject).into_iter().map(ProblemDto::from).collect(),
        None => store.list().iter().map(ProblemDto::from).collect(),
    };

    Ok(problems)
}

/// 查看单条记录
pub async fn problem(state: &AppState, id: &str) -> Result<ProblemDto, String> {
    let store = state.session.history();
    let store = store.lock().await;

    store
        .get(id)
        .map(ProblemDto::from)
        .ok_or_else(|| SolverError::NotFound(id.to_string()).to_string())
}

/// 删除记录，不存在时忽略
pub async fn remove(state: &AppState, id: &str) {
    state.session.remove(id).await;
}

pub async fn clear(state: &AppState) {
    state.session.clear_history().await;
}

#[cfg(feature = "desktop")]
pub mod desktop {
    use super::*;
    use tauri::State;

    #[tauri::command]
    pub async fn get_history(
        state: State<'_, AppState>,
        subject: Option<String>,
    ) -> Result<Vec<ProblemDto>, String> {
        history(&state, subject).await
    }

    #[tauri::command]
    pub async fn get_problem(state: State<'_, AppState>, id: String) -> Result<ProblemDto, String> {
        problem(&state, &id).await
    }

    /// 删除历史记录
    #[tauri::command]
    pub async fn remove_problem(state: State<'_, AppState>, id: String) -> Result<(), String> {
        remove(&state, &id).await;
        Ok(())
    }

    #[tauri::command]
    pub async fn clear_history(state: State<'_, AppState>) -> Result<(), String> {
        clear(&state).await;
        Ok(())
    }
}
