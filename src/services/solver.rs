//! 解题生成服务
//! 根据学科、题目与输入方式生成解答，后端可替换（内置示例表 / 远程推理服务）

use anyhow::Context;
use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::config::{SolverBackendKind, SolverConfig};
use crate::error::{Result, SolverError};
use crate::models::{InputMethod, Solution, Subject};
use crate::services::clock::Clock;
use crate::services::samples;

/// 发往后端的解题请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    pub subject: Subject,
    pub question: String,
    pub input_method: InputMethod,
}

/// 生成过程中的非致命提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationWarning {
    /// 未知学科，已回退到数学
    UnknownSubject(String),
}

/// 生成结果及其元信息
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub subject: Subject,
    pub solution: Solution,
    pub warning: Option<GenerationWarning>,
}

/// 解题后端
pub trait SolverBackend: Send + Sync {
    fn name(&self) -> &'static str;

    fn solve<'a>(&'a self, request: &'a SolveRequest) -> BoxFuture<'a, Result<Solution>>;
}

/// 内置示例解答后端：模拟延迟后按学科返回固定解答
pub struct CannedSolver {
    clock: Arc<dyn Clock>,
    delay: Duration,
}

impl CannedSolver {
    pub fn new(clock: Arc<dyn Clock>, delay: Duration) -> Self {
        Self { clock, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl SolverBackend for CannedSolver {
    fn name(&self) -> &'static str {
        "canned"
    }

    fn solve<'a>(&'a self, request: &'a SolveRequest) -> BoxFuture<'a, Result<Solution>> {
        async move {
            self.clock.sleep(self.delay).await;

            let base = samples::sample_solution(request.subject);
            let solution = match request.input_method {
                InputMethod::Text => base,
                InputMethod::Image => {
                    let mut steps = Vec::with_capacity(base.steps.len() + 1);
                    steps.push(samples::image_analysis_step());
                    steps.extend(base.steps);
                    Solution { steps, ..base }
                }
            };

            Ok(solution)
        }
        .boxed()
    }
}

/// 远程推理服务后端
///
/// 以 JSON 形式 POST `{subject, question, inputMethod}` 到 `<endpoint>/solve`，
/// 响应体为 [`Solution`]。
pub struct RemoteSolver {
    endpoint: String,
    http_client: reqwest::Client,
}

impl RemoteSolver {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            endpoint: endpoint.into(),
            http_client,
        })
    }

    /// 解题接口地址
    pub fn solve_url(&self) -> String {
        format!("{}/solve", self.endpoint.trim_end_matches('/'))
    }

    async fn request(&self, request: &SolveRequest) -> anyhow::Result<Solution> {
        let url = self.solve_url();

        let solution = self
            .http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()
            .context("solver service returned an error status")?
            .json::<Solution>()
            .await
            .context("failed to decode solver response")?;

        Ok(solution)
    }
}

impl SolverBackend for RemoteSolver {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn solve<'a>(&'a self, request: &'a SolveRequest) -> BoxFuture<'a, Result<Solution>> {
        async move {
            self.request(request)
                .await
                .map_err(|e| SolverError::GenerationFailure(format!("{e:#}")))
        }
        .boxed()
    }
}

/// 解题生成器
pub struct SolutionGenerator {
    backend: Box<dyn SolverBackend>,
}

impl SolutionGenerator {
    pub fn new(backend: impl SolverBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// 使用示例解答表与默认延迟
    pub fn canned(clock: Arc<dyn Clock>) -> Self {
        Self::new(CannedSolver::new(
            clock,
            SolverConfig::default().simulated_delay,
        ))
    }

    /// 根据配置选择后端
    pub fn from_config(config: &SolverConfig, clock: Arc<dyn Clock>) -> anyhow::Result<Self> {
        match config.backend {
            SolverBackendKind::Canned => {
                Ok(Self::new(CannedSolver::new(clock, config.simulated_delay)))
            }
            SolverBackendKind::Remote => {
                let endpoint = config
                    .remote_endpoint
                    .clone()
                    .context("remote solver backend requires an endpoint")?;
                Ok(Self::new(RemoteSolver::new(endpoint, config.request_timeout)?))
            }
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// 生成解答
    pub async fn generate(
        &self,
        subject: &str,
        question: &str,
        input_method: InputMethod,
    ) -> Result<Solution> {
        self.generate_detailed(subject, question, input_method)
            .await
            .map(|generation| generation.solution)
    }

    /// 生成解答，并返回实际使用的学科与提示信息
    pub async fn generate_detailed(
        &self,
        subject: &str,
        question: &str,
        input_method: InputMethod,
    ) -> Result<Generation> {
        let resolution = Subject::resolve(subject);
        let warning = if resolution.fell_back {
            log::warn!("Unknown subject {:?}, falling back to math", subject);
            Some(GenerationWarning::UnknownSubject(subject.to_string()))
        } else {
            None
        };

        let request = SolveRequest {
            subject: resolution.subject,
            question: question.to_string(),
            input_method,
        };

        let solution = self.backend.solve(&request).await?;

        if solution.steps.is_empty() {
            return Err(SolverError::GenerationFailure(
                "solver returned a solution without steps".to_string(),
            ));
        }

        Ok(Generation {
            subject: resolution.subject,
            solution,
            warning,
        })
    }
}
