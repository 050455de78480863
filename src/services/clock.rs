//! 时钟抽象
//! 生成器的模拟延迟与题目时间戳都经由此处，测试中可替换为手动时钟

use chrono::{DateTime, Utc};
use futures::future::{self, BoxFuture, FutureExt};
use std::sync::Mutex;
use std::time::Duration;

pub trait Clock: Send + Sync {
    /// 当前时间
    fn now(&self) -> DateTime<Utc>;

    /// 挂起指定时长
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()>;
}

/// 基于 tokio 计时器的真实时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()> {
        tokio::time::sleep(duration).boxed()
    }
}

/// 手动时钟：sleep 立即返回并记录请求的时长
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
    sleeps: Mutex<Vec<Duration>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
            sleeps: Mutex::new(Vec::new()),
        }
    }

    pub fn set_now(&self, now: DateTime<Utc>) {
        if let Ok(mut guard) = self.now.lock() {
            *guard = now;
        }
    }

    /// 已请求的 sleep 时长
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.lock().map(|n| *n).unwrap_or_else(|_| Utc::now())
    }

    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()> {
        if let Ok(mut sleeps) = self.sleeps.lock() {
            sleeps.push(duration);
        }
        future::ready(()).boxed()
    }
}
