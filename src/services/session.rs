//! 解题会话
//! 校验输入、防止重复提交、调用生成器并把结果写入历史

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex};
use uuid::Uuid;

use crate::error::{Result, SolverError};
use crate::models::{InputMethod, Problem, IMAGE_QUESTION_PLACEHOLDER};
use crate::services::clock::Clock;
use crate::services::history::SharedHistory;
use crate::services::solver::SolutionGenerator;

/// 上传的图片信息（内容不参与解题）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
}

/// 一次解题提交
#[derive(Debug, Clone, PartialEq)]
pub struct SolveInput {
    pub subject: String,
    pub question: String,
    pub input_method: InputMethod,
    pub image: Option<ImageUpload>,
}

impl SolveInput {
    pub fn text(subject: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            question: question.into(),
            input_method: InputMethod::Text,
            image: None,
        }
    }

    pub fn image(subject: impl Into<String>, image: ImageUpload) -> Self {
        Self {
            subject: subject.into(),
            question: String::new(),
            input_method: InputMethod::Image,
            image: Some(image),
        }
    }

    /// 校验并返回要记录的题干
    ///
    /// 题干为空且没有附图时拒绝；附图必须是 `image/*`。
    /// 图片方式记录占位题干，文本方式原样记录题干。
    pub fn validate(&self) -> Result<String> {
        if self.question.trim().is_empty() && self.image.is_none() {
            return Err(SolverError::InvalidInput(
                "question is empty and no image attached".to_string(),
            ));
        }

        if let Some(image) = &self.image {
            if !image.content_type.starts_with("image/") {
                return Err(SolverError::InvalidInput(format!(
                    "unsupported file type: {}",
                    image.content_type
                )));
            }
        }

        match self.input_method {
            InputMethod::Image => Ok(IMAGE_QUESTION_PLACEHOLDER.to_string()),
            InputMethod::Text => Ok(self.question.clone()),
        }
    }
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct SolverSession {
    generator: SolutionGenerator,
    history: SharedHistory,
    clock: Arc<dyn Clock>,
    in_flight: AtomicBool,
    cancel_slot: Mutex<Option<oneshot::Sender<()>>>,
}

impl SolverSession {
    pub fn new(generator: SolutionGenerator, history: SharedHistory, clock: Arc<dyn Clock>) -> Self {
        Self {
            generator,
            history,
            clock,
            in_flight: AtomicBool::new(false),
            cancel_slot: Mutex::new(None),
        }
    }

    pub fn history(&self) -> SharedHistory {
        self.history.clone()
    }

    pub fn backend_name(&self) -> &'static str {
        self.generator.backend_name()
    }

    pub fn is_solving(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn begin(&self) -> Result<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SolverError::Busy)?;
        Ok(InFlightGuard(&self.in_flight))
    }

    /// 解题并写入历史
    pub async fn solve(&self, input: SolveInput) -> Result<Problem> {
        let question = input.validate()?;

        // 取消通道须在进入解题状态前就位
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let _guard = {
            let mut slot = self.cancel_slot.lock().await;
            let guard = self.begin()?;
            *slot = Some(cancel_tx);
            guard
        };

        log::info!(
            "Solving {} problem for subject {:?}",
            input.input_method.as_str(),
            input.subject
        );

        let outcome = tokio::select! {
            biased;
            Ok(()) = cancel_rx => Err(SolverError::Cancelled),
            generation = self.generator.generate_detailed(&input.subject, &question, input.input_method) => generation,
        };
        self.cancel_slot.lock().await.take();

        let generation = match outcome {
            Ok(generation) => generation,
            Err(e) => {
                log::error!("Error generating solution: {}", e);
                return Err(e);
            }
        };

        let problem = Problem {
            id: Uuid::new_v4().to_string(),
            subject: generation.subject,
            question,
            solution: generation.solution,
            timestamp: self.clock.now(),
            input_method: input.input_method,
        };

        self.history.lock().await.add(problem.clone());
        log::info!(
            "Solved problem {} ({} steps)",
            problem.id,
            problem.solution.step_count()
        );

        Ok(problem)
    }

    /// 取消进行中的解题，返回是否有请求被取消
    pub async fn cancel(&self) -> bool {
        match self.cancel_slot.lock().await.take() {
            Some(sender) => sender.send(()).is_ok(),
            None => false,
        }
    }

    pub async fn list_history(&self) -> Vec<Problem> {
        self.history.lock().await.list().to_vec()
    }

    pub async fn remove(&self, id: &str) {
        self.history.lock().await.remove(id);
    }

    pub async fn clear_history(&self) {
        self.history.lock().await.clear();
    }
}
