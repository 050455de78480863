//! 数据模型
//! 题目、解答与解题步骤的领域类型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SolverError;

/// 图片题目的占位题干
pub const IMAGE_QUESTION_PLACEHOLDER: &str = "Image-based problem";

/// 学科
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Math,
    Science,
    Coding,
}

/// 学科解析结果，`fell_back` 表示未知学科已回退到数学
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectResolution {
    pub subject: Subject,
    pub fell_back: bool,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Math, Subject::Science, Subject::Coding];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::Science => "science",
            Subject::Coding => "coding",
        }
    }

    /// 界面显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Subject::Math => "Mathematics",
            Subject::Science => "Science",
            Subject::Coding => "Programming",
        }
    }

    /// 按学科标识精确匹配，未知取值回退到数学，不报错
    pub fn resolve(raw: &str) -> SubjectResolution {
        let subject = match raw {
            "math" => Some(Subject::Math),
            "science" => Some(Subject::Science),
            "coding" => Some(Subject::Coding),
            _ => None,
        };

        match subject {
            Some(subject) => SubjectResolution {
                subject,
                fell_back: false,
            },
            None => SubjectResolution {
                subject: Subject::Math,
                fell_back: true,
            },
        }
    }
}

/// 宽松解析（忽略大小写与首尾空白），用于历史筛选
impl FromStr for Subject {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "math" => Ok(Subject::Math),
            "science" => Ok(Subject::Science),
            "coding" => Ok(Subject::Coding),
            other => Err(SolverError::InvalidInput(format!("unknown subject: {other}"))),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 输入方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMethod {
    Text,
    Image,
}

impl InputMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMethod::Text => "text",
            InputMethod::Image => "image",
        }
    }
}

/// 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// 步骤附带内容：至多携带公式或代码之一
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum StepDetail {
    Text,
    Formula(String),
    Code(String),
}

/// 解题步骤
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub explanation: String,
    pub detail: StepDetail,
}

impl Step {
    pub fn text(title: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            explanation: explanation.into(),
            detail: StepDetail::Text,
        }
    }

    pub fn with_formula(
        title: impl Into<String>,
        explanation: impl Into<String>,
        formula: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            explanation: explanation.into(),
            detail: StepDetail::Formula(formula.into()),
        }
    }

    pub fn with_code(
        title: impl Into<String>,
        explanation: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            explanation: explanation.into(),
            detail: StepDetail::Code(code.into()),
        }
    }

    pub fn formula(&self) -> Option<&str> {
        match &self.detail {
            StepDetail::Formula(f) => Some(f),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match &self.detail {
            StepDetail::Code(c) => Some(c),
            _ => None,
        }
    }
}

/// 解答
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub answer: String,
    pub steps: Vec<Step>,
    pub difficulty: Difficulty,
    pub time_to_complete: String,
}

impl Solution {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

/// 已解答的题目（历史记录条目）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub id: String,
    pub subject: Subject,
    pub question: String,
    pub solution: Solution,
    pub timestamp: DateTime<Utc>,
    pub input_method: InputMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_resolve() {
        let known = Subject::resolve("science");
        assert_eq!(known.subject, Subject::Science);
        assert!(!known.fell_back);

        for raw in ["Science", " coding ", "CODING"] {
            let resolution = Subject::resolve(raw);
            assert_eq!(resolution.subject, Subject::Math, "{raw:?}");
            assert!(resolution.fell_back, "{raw:?}");
        }

        let unknown = Subject::resolve("history");
        assert_eq!(unknown.subject, Subject::Math);
        assert!(unknown.fell_back);

        assert!(Subject::resolve("").fell_back);
    }

    #[test]
    fn test_subject_from_str_is_lenient() {
        assert_eq!(" Coding ".parse::<Subject>(), Ok(Subject::Coding));
        assert_eq!("SCIENCE".parse::<Subject>(), Ok(Subject::Science));
        assert!("art".parse::<Subject>().is_err());
    }

    #[test]
    fn test_subject_display_name() {
        assert_eq!(Subject::Math.display_name(), "Mathematics");
        assert_eq!(Subject::Coding.display_name(), "Programming");
        assert_eq!(Subject::Coding.to_string(), "coding");
    }

    #[test]
    fn test_step_detail_accessors() {
        let step = Step::with_formula("Divide", "Divide both sides by 2", "x = 5");
        assert_eq!(step.formula(), Some("x = 5"));
        assert_eq!(step.code(), None);

        let plain = Step::text("Read", "Read the question");
        assert_eq!(plain.formula(), None);
        assert_eq!(plain.code(), None);
    }

    #[test]
    fn test_solution_json_shape() {
        let solution = Solution {
            answer: "42".to_string(),
            steps: vec![Step::with_code("Print", "Print it", "print(42)")],
            difficulty: Difficulty::Medium,
            time_to_complete: "1 minute".to_string(),
        };

        let value = serde_json::to_value(&solution).unwrap();
        assert_eq!(value["timeToComplete"], "1 minute");
        assert_eq!(value["difficulty"], "Medium");
        assert_eq!(value["steps"][0]["detail"]["kind"], "code");
        assert_eq!(value["steps"][0]["detail"]["value"], "print(42)");

        let text = serde_json::to_value(Step::text("a", "b")).unwrap();
        assert_eq!(text["detail"]["kind"], "text");
    }

    #[test]
    fn test_problem_json_field_names() {
        let problem = Problem {
            id: "1".to_string(),
            subject: Subject::Coding,
            question: IMAGE_QUESTION_PLACEHOLDER.to_string(),
            solution: Solution {
                answer: "a".to_string(),
                steps: vec![Step::text("t", "e")],
                difficulty: Difficulty::Hard,
                time_to_complete: "1 minute".to_string(),
            },
            timestamp: Utc::now(),
            input_method: InputMethod::Image,
        };

        let value = serde_json::to_value(&problem).unwrap();
        assert_eq!(value["subject"], "coding");
        assert_eq!(value["inputMethod"], "image");

        let back: Problem = serde_json::from_value(value).unwrap();
        assert_eq!(back, problem);
    }
}
