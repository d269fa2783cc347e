//! Schema resolution: per-model caching, request deduplication, and
//! resolution-state broadcasting.
//!
//! Purpose: guarantee that one rendering subtree fetches a given model's
//! schema at most once, while components that receive a schema from an
//! ancestor never re-fetch it.
//! Responsibilities: supplied-schema precedence, per-model cache, in-flight
//! request coalescing, model-change invalidation, stale-settle discard, and
//! a subscription interface for resolution-state changes.
//! Non-scope: row data fetching, permission slug evaluation (see
//! [`access`]), rendering of loading/error states.
//!
//! # Invariants
//! - A supplied schema with a non-empty `fields` mapping is adopted as-is;
//!   no network fetch occurs for it.
//! - Concurrent resolutions of the same model share one in-flight fetch.
//! - Only the fetch issued for the current model generation may commit its
//!   result; anything settling after a model change is dropped, not cached.
//! - Fetch failures are contained in [`ResolutionState::error`]; they never
//!   escape as panics or unhandled rejections, and a later `resolve` for
//!   the same model retries.

pub mod access;

pub use access::{AccessCheck, AllowAll, DenyAll, has_permission};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use moka::future::Cache as MokaCache;
use tokio::sync::watch;
use tracing::{debug, trace, warn};

use crate::client::Crud6Client;
use crate::error::ClientError;
use crate::metrics;
use crate::models::{CrudOperation, ModelSchema};

/// Default number of schemas kept resident. A page navigates one model at
/// a time, so this mostly covers quick back-and-forth between resources.
pub const DEFAULT_SCHEMA_CACHE_CAPACITY: u64 = 16;

type FetchResult = std::result::Result<Arc<ModelSchema>, Arc<ClientError>>;
type SharedFetch = Shared<BoxFuture<'static, FetchResult>>;

/// Snapshot of where schema resolution currently stands.
///
/// `schema` is set exactly when resolution succeeded; `error` is set
/// exactly when the most recent attempt failed; `loading` is true only
/// while a network fetch is in flight.
#[derive(Clone, Debug, Default)]
pub struct ResolutionState {
    pub schema: Option<Arc<ModelSchema>>,
    pub loading: bool,
    pub error: Option<Arc<ClientError>>,
}

impl ResolutionState {
    fn loading() -> Self {
        Self {
            schema: None,
            loading: true,
            error: None,
        }
    }

    fn resolved(schema: Arc<ModelSchema>) -> Self {
        Self {
            schema: Some(schema),
            loading: false,
            error: None,
        }
    }

    fn failed(error: Arc<ClientError>) -> Self {
        Self {
            schema: None,
            loading: false,
            error: Some(error),
        }
    }

    /// Whether a schema is available.
    pub fn is_resolved(&self) -> bool {
        self.schema.is_some()
    }
}

struct InflightFetch {
    generation: u64,
    fetch: SharedFetch,
}

#[derive(Default)]
struct ResolverCore {
    current_model: Option<String>,
    /// Bumped on every model change; results stamped with an older
    /// generation are discarded when they settle.
    generation: u64,
    inflight: HashMap<String, InflightFetch>,
}

/// Per-navigation schema resolver.
///
/// Construct one per page-level container and pass it (by reference or via
/// context) to descendants, never one per leaf component. Descendants
/// that already received a schema pass it as `supplied`; everyone else
/// shares this resolver's cache and in-flight fetches.
pub struct SchemaResolver {
    client: Arc<Crud6Client>,
    cache: MokaCache<String, Arc<ModelSchema>>,
    core: Mutex<ResolverCore>,
    state_tx: watch::Sender<ResolutionState>,
}

impl SchemaResolver {
    /// Create a resolver with the default cache capacity.
    pub fn new(client: Arc<Crud6Client>) -> Self {
        Self::with_capacity(client, DEFAULT_SCHEMA_CACHE_CAPACITY)
    }

    /// Create a resolver with a specific schema cache capacity.
    pub fn with_capacity(client: Arc<Crud6Client>, capacity: u64) -> Self {
        let (state_tx, _) = watch::channel(ResolutionState::default());
        Self {
            client,
            cache: MokaCache::builder().max_capacity(capacity).build(),
            core: Mutex::new(ResolverCore::default()),
            state_tx,
        }
    }

    /// Resolve the schema for `model`.
    ///
    /// Precedence, in order:
    /// 1. A `supplied` schema with a non-empty `fields` mapping is adopted
    ///    as-is: no cache lookup, no fetch. This is the dedup contract: a
    ///    descendant given a schema by its parent must never re-fetch it.
    /// 2. A resident cache entry for `model`.
    /// 3. An in-flight fetch for `model`, joined rather than duplicated.
    /// 4. A fresh fetch.
    ///
    /// Changing `model` relative to the previous call invalidates the
    /// previous model's cache entry and supersedes its in-flight fetch:
    /// whatever that fetch returns is discarded when it settles.
    pub async fn resolve(
        &self,
        model: &str,
        supplied: Option<Arc<ModelSchema>>,
    ) -> ResolutionState {
        if let Some(schema) = supplied {
            if schema.has_fields() {
                return self.adopt_supplied(model, schema).await;
            }
            debug!(model, "supplied schema has no fields; falling back to resolution");
        }

        let generation = self.enter_model(model).await;

        if let Some(schema) = self.cache.get(model).await {
            metrics::record_schema_cache_hit(model);
            trace!(model, "schema cache hit");
            return self.commit(model, generation, Ok(schema)).await;
        }
        metrics::record_schema_cache_miss(model);

        let fetch = self.join_or_start_fetch(model, generation);
        let result = fetch.await;
        self.finish_fetch(model, generation);
        self.commit(model, generation, result).await
    }

    /// Current resolution state snapshot.
    pub fn state(&self) -> ResolutionState {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to resolution-state changes.
    ///
    /// The receiver observes every committed transition: loading on fetch
    /// start, then resolved or failed. Discarded stale settlements are not
    /// observable.
    pub fn subscribe(&self) -> watch::Receiver<ResolutionState> {
        self.state_tx.subscribe()
    }

    /// The model the resolver currently considers authoritative.
    pub fn current_model(&self) -> Option<String> {
        self.lock_core().current_model.clone()
    }

    /// Evict one model's cached schema; the next resolve re-fetches.
    pub async fn invalidate(&self, model: &str) {
        self.cache.invalidate(model).await;
    }

    /// Evict all cached schemas.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }

    /// Whether the currently resolved schema grants `operation`.
    ///
    /// Default-deny: no schema, no slug for the operation, or a denying
    /// predicate all yield false.
    pub fn has_permission(&self, operation: CrudOperation, access: &dyn AccessCheck) -> bool {
        access::has_permission(self.state().schema.as_deref(), operation, access)
    }

    fn lock_core(&self) -> MutexGuard<'_, ResolverCore> {
        self.core.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adopt an ancestor-resolved schema without fetching.
    async fn adopt_supplied(&self, model: &str, schema: Arc<ModelSchema>) -> ResolutionState {
        trace!(model, "adopting supplied schema, skipping fetch");
        let generation = self.enter_model(model).await;
        self.cache
            .insert(model.to_string(), Arc::clone(&schema))
            .await;

        let state = ResolutionState::resolved(schema);
        if self.lock_core().generation == generation {
            self.state_tx.send_replace(state.clone());
        }
        state
    }

    /// Record `model` as current, bumping the generation and evicting the
    /// previous model's cache entry when it actually changed.
    async fn enter_model(&self, model: &str) -> u64 {
        let (generation, evicted) = {
            let mut core = self.lock_core();
            let evicted = if core.current_model.as_deref() == Some(model) {
                None
            } else {
                core.generation += 1;
                core.current_model.replace(model.to_string())
            };
            (core.generation, evicted)
        };

        if let Some(previous) = evicted {
            debug!(previous = %previous, model, "model changed; evicting previous schema");
            self.cache.invalidate(&previous).await;
        }
        generation
    }

    /// Join the in-flight fetch for `model` at this generation, or start
    /// one. Starting (or re-starting after a supersede) broadcasts the
    /// loading state.
    fn join_or_start_fetch(&self, model: &str, generation: u64) -> SharedFetch {
        let mut core = self.lock_core();

        if let Some(inflight) = core.inflight.get(model) {
            if inflight.generation == generation {
                metrics::record_schema_fetch_coalesced(model);
                trace!(model, "joining in-flight schema fetch");
                return inflight.fetch.clone();
            }
            // A fetch from a superseded generation is still settling; its
            // result will be discarded, so start fresh for this one.
        }

        let client = Arc::clone(&self.client);
        let model_owned = model.to_string();
        let fetch: SharedFetch = async move {
            client
                .fetch_schema(&model_owned)
                .await
                .map(Arc::new)
                .map_err(Arc::new)
        }
        .boxed()
        .shared();

        core.inflight.insert(
            model.to_string(),
            InflightFetch {
                generation,
                fetch: fetch.clone(),
            },
        );
        debug!(model, "schema fetch started");
        if core.generation == generation {
            self.state_tx.send_replace(ResolutionState::loading());
        }
        fetch
    }

    /// Drop the in-flight entry for `model` if it belongs to this
    /// generation (a superseding fetch may have replaced it).
    fn finish_fetch(&self, model: &str, generation: u64) {
        let mut core = self.lock_core();
        if core
            .inflight
            .get(model)
            .is_some_and(|inflight| inflight.generation == generation)
        {
            core.inflight.remove(model);
        }
    }

    /// Commit a settled result, unless the model changed while it was in
    /// flight; then the result is dropped (not cached, not broadcast) and
    /// the authoritative current state is returned instead.
    async fn commit(&self, model: &str, generation: u64, result: FetchResult) -> ResolutionState {
        let stale = self.lock_core().generation != generation;
        if stale {
            debug!(model, "discarding schema result settled after model change");
            metrics::record_schema_fetch_discarded(model);
            return self.state();
        }

        let state = match result {
            Ok(schema) => {
                self.cache
                    .insert(model.to_string(), Arc::clone(&schema))
                    .await;
                ResolutionState::resolved(schema)
            }
            Err(error) => {
                warn!(model, %error, "schema fetch failed");
                ResolutionState::failed(error)
            }
        };
        self.state_tx.send_replace(state.clone());
        state
    }
}
