//! 解题历史
//! 当前会话内已解答题目的内存列表，最新的在最前

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::{Result, SolverError};
use crate::models::{Problem, Subject};

/// 会话内共享的历史记录句柄
pub type SharedHistory = Arc<Mutex<HistoryStore>>;

#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    problems: Vec<Problem>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> SharedHistory {
        Arc::new(Mutex::new(self))
    }

    /// 插入到最前面，不按 id 去重
    pub fn add(&mut self, problem: Problem) {
        log::debug!("history add {}", problem.id);
        self.problems.insert(0, problem);
    }

    /// 删除第一条匹配的记录，不存在时不做任何事
    pub fn remove(&mut self, id: &str) {
        if let Some(index) = self.position(id) {
            self.problems.remove(index);
            log::debug!("history remove {}", id);
        }
    }

    /// 删除并返回记录，不存在时返回 NotFound
    pub fn try_remove(&mut self, id: &str) -> Result<Problem> {
        let index = self
            .position(id)
            .ok_or_else(|| SolverError::NotFound(id.to_string()))?;
        log::debug!("history remove {}", id);
        Ok(self.problems.remove(index))
    }

    pub fn list(&self) -> &[Problem] {
        &self.problems
    }

    pub fn get(&self, id: &str) -> Option<&Problem> {
        self.problems.iter().find(|p| p.id == id)
    }

    /// 按学科筛选，保持原有顺序
    pub fn by_subject(&self, subject: Subject) -> Vec<&Problem> {
        self.problems
            .iter()
            .filter(|p| p.subject == subject)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn clear(&mut self) {
        self.problems.clear();
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.problems.iter().position(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InputMethod;
    use crate::services::samples::sample_solution;
    use chrono::Utc;

    fn problem(id: &str, subject: Subject) -> Problem {
        Problem {
            id: id.to_string(),
            subject,
            question: format!("question {id}"),
            solution: sample_solution(subject),
            timestamp: Utc::now(),
            input_method: InputMethod::Text,
        }
    }

    fn ids(store: &HistoryStore) -> Vec<&str> {
        store.list().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_starts_empty() {
        let store = HistoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_add_and_remove_scenario() {
        let mut store = HistoryStore::new();
        store.add(problem("1", Subject::Math));
        store.add(problem("2", Subject::Math));
        assert_eq!(ids(&store), vec!["2", "1"]);

        store.remove("1");
        assert_eq!(ids(&store), vec!["2"]);
    }

    #[test]
    fn test_list_is_reverse_insertion_order() {
        let mut store = HistoryStore::new();
        for i in 0..5 {
            store.add(problem(&i.to_string(), Subject::Science));
            assert_eq!(store.list()[0].id, i.to_string());
        }
        assert_eq!(ids(&store), vec!["4", "3", "2", "1", "0"]);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut store = HistoryStore::new();
        for id in ["a", "b", "c", "d"] {
            store.add(problem(id, Subject::Coding));
        }

        store.remove("b");
        assert_eq!(ids(&store), vec!["d", "c", "a"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = HistoryStore::new();
        store.add(problem("1", Subject::Math));
        store.add(problem("2", Subject::Math));

        store.remove("404");
        assert_eq!(ids(&store), vec!["2", "1"]);
    }

    #[test]
    fn test_duplicate_ids_remove_first_only() {
        let mut store = HistoryStore::new();
        store.add(problem("x", Subject::Math));
        store.add(problem("y", Subject::Math));
        store.add(problem("x", Subject::Science));

        store.remove("x");
        assert_eq!(ids(&store), vec!["y", "x"]);
        assert_eq!(store.list()[1].subject, Subject::Math);
    }

    #[test]
    fn test_try_remove() {
        let mut store = HistoryStore::new();
        store.add(problem("1", Subject::Math));

        let removed = store.try_remove("1").unwrap();
        assert_eq!(removed.id, "1");
        assert!(store.is_empty());

        assert_eq!(
            store.try_remove("1"),
            Err(SolverError::NotFound("1".to_string()))
        );
    }

    #[test]
    fn test_get_by_subject_and_clear() {
        let mut store = HistoryStore::new();
        store.add(problem("1", Subject::Math));
        store.add(problem("2", Subject::Coding));
        store.add(problem("3", Subject::Math));

        assert_eq!(store.get("2").map(|p| p.subject), Some(Subject::Coding));
        assert!(store.get("9").is_none());

        let math: Vec<&str> = store
            .by_subject(Subject::Math)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(math, vec!["3", "1"]);

        store.clear();
        assert!(store.is_empty());
    }
}
