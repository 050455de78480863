//! 解题命令模块
//! 提供供前端调用的解题、取消与状态查询接口

use serde::{Deserialize, Serialize};

use crate::commands::history::ProblemDto;
use crate::commands::AppState;
use crate::models::{InputMethod, Subject};
use crate::services::session::{ImageUpload, SolveInput};

/// 解题请求（前端传入）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequestDto {
    pub subject: String,
    #[serde(default)]
    pub question: Option<String>,
    pub input_method: InputMethod,
    #[serde(default)]
    pub image: Option<ImageUpload>,
}

impl From<SolveRequestDto> for SolveInput {
    fn from(dto: SolveRequestDto) -> Self {
        SolveInput {
            subject: dto.subject,
            question: dto.question.unwrap_or_default(),
            input_method: dto.input_method,
            image: dto.image,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectDto {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverStatusDto {
    pub is_solving: bool,
    pub backend: String,
    pub history_len: usize,
}

/// 解题，成功后题目已写入历史
pub async fn solve(state: &AppState, request: SolveRequestDto) -> Result<ProblemDto, String> {
    let problem = state
        .session
        .solve(request.into())
        .await
        .map_err(|e| e.to_string())?;

    Ok(ProblemDto::from(&problem))
}

pub async fn cancel(state: &AppState) -> bool {
    state.session.cancel().await
}

pub async fn status(state: &AppState) -> SolverStatusDto {
    SolverStatusDto {
        is_solving: state.session.is_solving(),
        backend: state.session.backend_name().to_string(),
        history_len: state.session.history().lock().await.len(),
    }
}

pub fn subjects() -> Vec<SubjectDto> {
    Subject::ALL
        .iter()
        .map(|s| SubjectDto {
            id: s.as_str().to_string(),
            name: s.display_name().to_string(),
        })
        .collect()
}

#[cfg(feature = "desktop")]
pub mod desktop {
    use super::*;
    use tauri::State;

    /// 提交题目并生成解答
    #[tauri::command]
    pub async fn solve_problem(
        state: State<'_, AppState>,
        request: SolveRequestDto,
    ) -> Result<ProblemDto, String> {
        solve(&state, request).await
    }

    /// 取消进行中的解题
    #[tauri::command]
    pub async fn cancel_solve(state: State<'_, AppState>) -> Result<bool, String> {
        Ok(cancel(&state).await)
    }

    #[tauri::command]
    pub async fn get_solver_status(state: State<'_, AppState>) -> Result<SolverStatusDto, String> {
        Ok(status(&state).await)
    }

    #[tauri::command]
    pub fn list_subjects() -> Vec<SubjectDto> {
        subjects()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_state;

    fn text_request(subject: &str, question: &str) -> SolveRequestDto {
        SolveRequestDto {
            subject: subject.to_string(),
            question: Some(question.to_string()),
            input_method: InputMethod::Text,
            image: None,
        }
    }

    #[tokio::test]
    async fn test_solve_command() {
        let state = test_state();

        let dto = solve(&state, text_request("math", "2x+5=15")).await.unwrap();
        assert_eq!(dto.subject, Subject::Math);
        assert_eq!(dto.subject_name, "Mathematics");
        assert_eq!(dto.solution.answer, "x = 5");
        assert_eq!(dto.solution.steps.len(), 4);

        let status = status(&state).await;
        assert_eq!(status.history_len, 1);
        assert!(!status.is_solving);
        assert_eq!(status.backend, "canned");
    }

    #[tokio::test]
    async fn test_solve_command_rejects_empty_question() {
        let state = test_state();

        let err = solve(&state, text_request("math", "")).await.unwrap_err();
        assert!(err.starts_with("Invalid input"), "{err}");
        assert_eq!(status(&state).await.history_len, 0);
    }

    #[tokio::test]
    async fn test_solve_request_from_json() {
        let state = test_state();
        let request: SolveRequestDto = serde_json::from_str(
            r#"{"subject":"science","inputMethod":"image","image":{"fileName":"q.jpg","contentType":"image/jpeg","size":512}}"#,
        )
        .unwrap();

        let dto = solve(&state, request).await.unwrap();
        assert_eq!(dto.question, "Image-based problem");
        assert_eq!(dto.input_method, InputMethod::Image);
        assert_eq!(dto.solution.steps[0].title, "Image Analysis");
    }

    #[tokio::test]
    async fn test_cancel_without_solve() {
        let state = test_state();
        assert!(!cancel(&state).await);
    }

    #[test]
    fn test_subjects() {
        let subjects = subjects();
        let ids: Vec<&str> = subjects.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["math", "science", "coding"]);
        assert_eq!(subjects[2].name, "Programming");
    }
}
