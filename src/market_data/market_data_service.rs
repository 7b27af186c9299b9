use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use log::{debug, info, warn};
use tokio::task::JoinHandle;

use super::market_data_errors::MarketDataError;
use super::market_data_model::{
    normalize_symbol, FundamentalRecord, LiveQuote, MergedRecord, StockDetail,
};
use super::market_data_traits::MarketDataProviderTrait;
use super::quote_merger::merge_quotes;
use crate::constants::QUOTE_POLL_INTERVAL_SECS;
use crate::screener::FilterPatch;

/// Service owning the live-quote overlay: fetches quote batches from the
/// provider, keeps the latest batch in a cache, and merges it over
/// fundamentals snapshots.
///
/// Each refresh carries a monotonically increasing request sequence
/// number. A slow cycle-N response arriving after cycle-N+1 has been
/// applied is discarded, so out-of-order completions never roll the
/// cache backwards.
pub struct MarketDataService {
    provider: Arc<dyn MarketDataProviderTrait>,
    quote_cache: DashMap<String, LiveQuote>,
    request_seq: AtomicU64,
    applied_seq: AtomicU64,
}

impl MarketDataService {
    pub fn new(provider: Arc<dyn MarketDataProviderTrait>) -> Self {
        Self {
            provider,
            quote_cache: DashMap::new(),
            request_seq: AtomicU64::new(0),
            applied_seq: AtomicU64::new(0),
        }
    }

    pub async fn fetch_fundamentals(&self) -> Result<Vec<FundamentalRecord>, MarketDataError> {
        let mut records = self.provider.fetch_fundamentals().await?;
        for record in records.iter_mut() {
            record.symbol = normalize_symbol(&record.symbol);
        }
        Ok(records)
    }

    pub async fn fetch_detail(&self, symbol: &str) -> Result<StockDetail, MarketDataError> {
        self.provider.fetch_detail(&normalize_symbol(symbol)).await
    }

    pub async fn translate_search(&self, query: &str) -> Result<FilterPatch, MarketDataError> {
        self.provider.translate_search(query).await
    }

    /// Fetches a fresh quote batch and applies it. On provider failure
    /// the previous batch is kept (last-known-good) and the error is
    /// surfaced to the caller as a non-fatal notice.
    pub async fn refresh_quotes(&self, symbols: &[String]) -> Result<usize, MarketDataError> {
        let seq = self.request_seq.fetch_add(1, Ordering::AcqRel) + 1;
        let quotes = match self.provider.fetch_quotes(symbols).await {
            Ok(quotes) => quotes,
            Err(e) => {
                warn!("Quote refresh {} failed, keeping previous batch: {}", seq, e);
                return Err(e);
            }
        };
        let count = quotes.len();
        if self.apply_quote_batch(seq, quotes) {
            Ok(count)
        } else {
            debug!("Quote refresh {} superseded before it completed", seq);
            Ok(0)
        }
    }

    /// Applies a quote batch if its sequence number is newer than the
    /// last applied one. Returns false when the batch is stale.
    pub fn apply_quote_batch(&self, seq: u64, quotes: Vec<LiveQuote>) -> bool {
        loop {
            let current = self.applied_seq.load(Ordering::Acquire);
            if seq <= current {
                debug!("Discarding stale quote batch {} (latest {})", seq, current);
                return false;
            }
            if self
                .applied_seq
                .compare_exchange(current, seq, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                break;
            }
        }

        // Each batch supersedes the previous one entirely.
        self.quote_cache.clear();
        for mut quote in quotes {
            quote.symbol = normalize_symbol(&quote.symbol);
            self.quote_cache.insert(quote.symbol.clone(), quote);
        }
        true
    }

    pub fn latest_quote(&self, symbol: &str) -> Option<LiveQuote> {
        self.quote_cache
            .get(&normalize_symbol(symbol))
            .map(|entry| entry.value().clone())
    }

    pub fn quote_map(&self) -> HashMap<String, LiveQuote> {
        self.quote_cache
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Current cache overlaid on a fundamentals snapshot.
    pub fn merged_snapshot(&self, fundamentals: &[FundamentalRecord]) -> Vec<MergedRecord> {
        merge_quotes(fundamentals, &self.quote_map())
    }

    /// Spawns the fixed-interval refresh loop. Stopping (or dropping)
    /// the returned handle aborts the task, which is how a view tears
    /// its polling down on unmount.
    pub fn start_polling(self: &Arc<Self>, symbols: Vec<String>) -> QuotePoller {
        self.start_polling_with_interval(symbols, Duration::from_secs(QUOTE_POLL_INTERVAL_SECS))
    }

    pub fn start_polling_with_interval(
        self: &Arc<Self>,
        symbols: Vec<String>,
        interval: Duration,
    ) -> QuotePoller {
        let service = Arc::clone(self);
        info!(
            "Starting quote polling for {} symbols every {:?}",
            symbols.len(),
            interval
        );
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if let Err(e) = service.refresh_quotes(&symbols).await {
                    warn!("Scheduled quote refresh failed: {}", e);
                }
            }
        });
        QuotePoller { handle }
    }
}

/// Handle for a running quote poll loop.
pub struct QuotePoller {
    handle: JoinHandle<()>,
}

impl QuotePoller {
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for QuotePoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
