use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::datasources::WeatherProvider;
use crate::error::{PlantcastError, Result};
use crate::models::{ForecastDay, WeatherSnapshot};

/// Time source for TTL decisions. Injectable so cache expiry is testable
/// without real waits.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Cloneable fetch result broadcast to every caller that joined an
/// in-flight lookup.
type FetchOutcome = std::result::Result<WeatherSnapshot, FetchFailure>;

#[derive(Debug, Clone)]
enum FetchFailure {
    NotFound(String),
    Upstream(String),
}

impl From<PlantcastError> for FetchFailure {
    fn from(err: PlantcastError) -> Self {
        match err {
            PlantcastError::NotFound(location) => FetchFailure::NotFound(location),
            other => FetchFailure::Upstream(other.to_string()),
        }
    }
}

impl From<FetchFailure> for PlantcastError {
    fn from(failure: FetchFailure) -> Self {
        match failure {
            FetchFailure::NotFound(location) => PlantcastError::NotFound(location),
            FetchFailure::Upstream(message) => PlantcastError::Upstream(message),
        }
    }
}

struct CacheEntry {
    snapshot: WeatherSnapshot,
    stored_at: DateTime<Utc>,
}

#[derive(Default)]
struct GatewayState {
    cache: HashMap<String, CacheEntry>,
    in_flight: HashMap<String, broadcast::Sender<FetchOutcome>>,
}

struct GatewayInner {
    provider: Arc<dyn WeatherProvider>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    state: Mutex<GatewayState>,
}

impl GatewayInner {
    fn lock(&self) -> MutexGuard<'_, GatewayState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Caching front door for current-conditions lookups.
///
/// Keys are normalized case-insensitively. A fresh cache entry is returned
/// without touching the network; concurrent requests for the same key share
/// one upstream call; expiry is checked lazily on read. Failed fetches are
/// never cached, so the next call retries.
pub struct WeatherGateway {
    inner: Arc<GatewayInner>,
}

enum Attach {
    Hit(WeatherSnapshot),
    Wait(broadcast::Receiver<FetchOutcome>),
}

impl WeatherGateway {
    pub fn new(provider: Arc<dyn WeatherProvider>, ttl_minutes: u64) -> Self {
        Self::with_clock(provider, ttl_minutes, Arc::new(SystemClock))
    }

    pub fn with_clock(
        provider: Arc<dyn WeatherProvider>,
        ttl_minutes: u64,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            inner: Arc::new(GatewayInner {
                provider,
                clock,
                ttl: Duration::minutes(ttl_minutes as i64),
                state: Mutex::new(GatewayState::default()),
            }),
        }
    }

    /// Current conditions for a location, served from cache when fresh.
    pub async fn get(&self, location: &str) -> Result<WeatherSnapshot> {
        let key = normalize_key(location);

        let mut rx = match self.attach(&key, location) {
            Attach::Hit(snapshot) => return Ok(snapshot),
            Attach::Wait(rx) => rx,
        };

        match rx.recv().await {
            Ok(Ok(snapshot)) => Ok(snapshot),
            Ok(Err(failure)) => Err(failure.into()),
            Err(_) => Err(PlantcastError::Upstream(
                "weather fetch task ended without a result".to_string(),
            )),
        }
    }

    /// Multi-day forecast, passed straight through to the provider. Daily
    /// rows change on the provider's own schedule, so they are not cached
    /// here.
    pub async fn forecast(&self, location: &str, days: u8) -> Result<Vec<ForecastDay>> {
        info!(location = location.trim(), days, "fetching forecast");
        self.inner.provider.forecast(location.trim(), days).await
    }

    /// One pass under the lock: cache check, then join-or-lead. The receiver
    /// is subscribed before the lock drops so a waiter can never miss the
    /// broadcast.
    fn attach(&self, key: &str, location: &str) -> Attach {
        let mut state = self.inner.lock();
        let now = self.inner.clock.now();

        if let Some(entry) = state.cache.get(key) {
            if now - entry.stored_at < self.inner.ttl {
                debug!(key, "cache hit");
                return Attach::Hit(entry.snapshot.clone());
            }
            state.cache.remove(key);
            debug!(key, "cache entry expired");
        }

        if let Some(tx) = state.in_flight.get(key) {
            debug!(key, "joining in-flight fetch");
            return Attach::Wait(tx.subscribe());
        }

        let (tx, rx) = broadcast::channel(1);
        state.in_flight.insert(key.to_string(), tx.clone());
        drop(state);

        info!(key, "fetching current conditions from upstream");
        self.spawn_fetch(key.to_string(), location.trim().to_string(), tx);
        Attach::Wait(rx)
    }

    /// The fetch runs detached so it completes even if every waiter is
    /// cancelled; a cancelled caller must not abort work others joined.
    fn spawn_fetch(&self, key: String, location: String, tx: broadcast::Sender<FetchOutcome>) {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let outcome = match inner.provider.current(&location).await {
                Ok(mut snapshot) => {
                    snapshot.fetched_at = inner.clock.now();
                    let mut state = inner.lock();
                    state.in_flight.remove(&key);
                    state.cache.insert(
                        key,
                        CacheEntry {
                            snapshot: snapshot.clone(),
                            stored_at: snapshot.fetched_at,
                        },
                    );
                    Ok(snapshot)
                }
                Err(err) => {
                    warn!(key = key.as_str(), error = %err, "upstream fetch failed");
                    let mut state = inner.lock();
                    state.in_flight.remove(&key);
                    Err(FetchFailure::from(err))
                }
            };
            // Waiters may all be gone; a dead channel is not an error.
            let _ = tx.send(outcome);
        });
    }
}

fn normalize_key(location: &str) -> String {
    location.trim().to_lowercase()
}
