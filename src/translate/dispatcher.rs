//! 并发分发：有界并发地翻译一批文本，按提交顺序返回译文
//!
//! 每个任务携带自己的提交序号，完成后写入对应槽位，因此完成顺序不影响结果顺序。
//! 单个任务失败（后端错误、超时、任务崩溃）时该槽位回退为原文，不影响其他任务。

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use super::{LanguagePair, Translator};

/// 默认并发上限
pub const DEFAULT_CONCURRENCY: usize = 25;
/// 默认单次调用超时
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct Dispatcher {
    translator: Arc<dyn Translator>,
    concurrency: usize,
    call_timeout: Duration,
}

impl Dispatcher {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator,
            concurrency: DEFAULT_CONCURRENCY,
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// 翻译单条文本，失败时返回 `None`
    async fn translate_one(
        translator: &dyn Translator,
        text: &str,
        langs: &LanguagePair,
        call_timeout: Duration,
    ) -> Option<String> {
        match tokio::time::timeout(call_timeout, translator.translate(text, &langs.source, &langs.target)).await {
            Ok(Ok(translated)) => Some(translated),
            Ok(Err(e)) => {
                tracing::warn!("翻译失败，保留原文: {}", e);
                None
            }
            Err(_) => {
                tracing::warn!("翻译超时（{:?}），保留原文", call_timeout);
                None
            }
        }
    }

    /// 返回与 `texts` 等长、同序的译文列表
    pub async fn dispatch_all(&self, texts: &[String], langs: &LanguagePair) -> Vec<String> {
        let start = Instant::now();
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut set = JoinSet::new();

        for (index, text) in texts.iter().cloned().enumerate() {
            let semaphore = semaphore.clone();
            let translator = self.translator.clone();
            let langs = langs.clone();
            let call_timeout = self.call_timeout;
            set.spawn(async move {
                // 信号量从不关闭；获取失败时按失败处理
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return (index, None);
                };
                let outcome = Self::translate_one(translator.as_ref(), &text, &langs, call_timeout).await;
                (index, outcome)
            });
        }

        let mut slots: Vec<Option<String>> = vec![None; texts.len()];
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((index, outcome)) => slots[index] = outcome,
                Err(e) => tracing::error!("翻译任务异常退出: {}", e),
            }
        }

        let failed = slots.iter().filter(|s| s.is_none()).count();
        tracing::info!(
            "分发完成: 提交 {} 条，成功 {} 条，失败 {} 条，并发上限 {}，耗时: {}ms",
            texts.len(),
            texts.len() - failed,
            failed,
            self.concurrency,
            start.elapsed().as_millis()
        );

        slots
            .into_iter()
            .zip(texts)
            .map(|(slot, source)| slot.unwrap_or_else(|| source.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::testing::*;
    use std::sync::atomic::Ordering;

    fn texts(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("t{}", i)).collect()
    }

    fn fr() -> LanguagePair {
        LanguagePair::new("auto", "fr")
    }

    #[tokio::test]
    async fn test_results_follow_submission_order() {
        let input = texts(5);
        let out = Dispatcher::new(Arc::new(TagTranslator)).dispatch_all(&input, &fr()).await;
        assert_eq!(out, vec!["[fr]t0", "[fr]t1", "[fr]t2", "[fr]t3", "[fr]t4"]);
    }

    #[tokio::test]
    async fn test_reverse_completion_matches_in_order_completion() {
        let input = texts(8);
        let in_order = Dispatcher::new(Arc::new(TagTranslator)).dispatch_all(&input, &fr()).await;
        let reversed = Dispatcher::new(Arc::new(ReverseDelayTranslator { total: 8 }))
            .dispatch_all(&input, &fr())
            .await;
        assert_eq!(reversed, in_order);
    }

    #[tokio::test]
    async fn test_failure_is_isolated() {
        let input = vec!["a".to_string(), "boom".to_string(), "c".to_string()];
        let out = Dispatcher::new(Arc::new(FailingTranslator { fail_on: "boom" }))
            .dispatch_all(&input, &fr())
            .await;
        assert_eq!(out, vec!["[fr]a", "boom", "[fr]c"]);
    }

    #[tokio::test]
    async fn test_timeout_falls_back_to_source() {
        let input = vec!["fast".to_string(), "slow".to_string()];
        let out = Dispatcher::new(Arc::new(HangingTranslator { hang_on: "slow" }))
            .with_call_timeout(Duration::from_millis(50))
            .dispatch_all(&input, &fr())
            .await;
        assert_eq!(out, vec!["[fr]fast", "slow"]);
    }

    #[tokio::test]
    async fn test_concurrency_is_capped() {
        let counter = Arc::new(CountingTranslator::default());
        let input = texts(40);
        let out = Dispatcher::new(counter.clone())
            .with_concurrency(4)
            .dispatch_all(&input, &fr())
            .await;
        assert_eq!(out.len(), 40);
        assert_eq!(out[39], "T39");
        let peak = counter.peak.load(Ordering::SeqCst);
        assert!(peak <= 4, "在途调用数 {} 超过上限", peak);
        assert!(peak >= 1);
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let out = Dispatcher::new(Arc::new(EchoTranslator)).dispatch_all(&[], &fr()).await;
        assert!(out.is_empty());
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        let d = Dispatcher::new(Arc::new(EchoTranslator)).with_concurrency(0);
        assert_eq!(d.concurrency(), 1);
    }
}
