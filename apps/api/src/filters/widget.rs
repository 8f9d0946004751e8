//! The project filter widget: owns the criteria, recomputes on every change
//! and hands each result to the host through a sink.
//!
//! Recomputes are futures the host awaits or spawns. Only semantic mode with a
//! non-empty query suspends (on the injected `Latency`); everything else
//! completes on first poll. Every recompute takes a request id and a result
//! is delivered only if its id is still the newest issued, so a slow semantic
//! pass can never overwrite a fresher result.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::{BoxFuture, FutureExt};
use tracing::debug;

use crate::filters::criteria::{FilterCriteria, Selection};
use crate::filters::engine::{FilterEngine, FilterOptions};
use crate::latency::{Latency, SleepLatency};
use crate::models::{ProjectRecord, Skill};

/// Simulated duration of a semantic search.
pub const DEFAULT_SEMANTIC_DELAY: Duration = Duration::from_millis(1000);

/// Receives filtered results. Closures work directly.
pub trait ResultSink: Send + Sync {
    fn deliver(&self, results: Vec<ProjectRecord>);
}

impl<F> ResultSink for F
where
    F: Fn(Vec<ProjectRecord>) + Send + Sync,
{
    fn deliver(&self, results: Vec<ProjectRecord>) {
        self(results)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecomputeOutcome {
    Delivered { request_id: u64, count: usize },
    /// A newer recompute was issued while this one was pending.
    Superseded { request_id: u64 },
}

pub type Recompute = BoxFuture<'static, RecomputeOutcome>;

#[derive(Debug, Default)]
struct RequestTracker {
    latest: AtomicU64,
    loading: AtomicBool,
}

impl RequestTracker {
    fn issue(&self, semantic: bool) -> u64 {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        self.loading.store(semantic, Ordering::SeqCst);
        id
    }

    fn is_current(&self, id: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == id
    }
}

pub struct ProjectFilter {
    projects: Arc<Vec<ProjectRecord>>,
    options: FilterOptions,
    criteria: FilterCriteria,
    engine: FilterEngine,
    latency: Arc<dyn Latency>,
    sink: Arc<dyn ResultSink>,
    tracker: Arc<RequestTracker>,
}

impl ProjectFilter {
    /// Mounts the widget over a fixed project list and skill vocabulary.
    /// The host should run `recompute()` once to publish the initial list.
    pub fn new(
        projects: impl Into<Arc<Vec<ProjectRecord>>>,
        skills: &[Skill],
        sink: impl ResultSink + 'static,
    ) -> Self {
        let projects = projects.into();
        let options = FilterOptions::from_inputs(&projects, skills);
        Self {
            projects,
            options,
            criteria: FilterCriteria::default(),
            engine: FilterEngine::default(),
            latency: Arc::new(SleepLatency(DEFAULT_SEMANTIC_DELAY)),
            sink: Arc::new(sink),
            tracker: Arc::new(RequestTracker::default()),
        }
    }

    pub fn with_latency(mut self, latency: Arc<dyn Latency>) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_engine(mut self, engine: FilterEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Replaces all criteria at once, as when restoring a saved filter state.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> Recompute {
        self.criteria = criteria;
        self.recompute()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// True while the newest recompute is a pending semantic pass.
    pub fn is_loading(&self) -> bool {
        self.tracker.loading.load(Ordering::SeqCst)
    }

    /// Whether any criterion differs from the cleared state.
    pub fn has_active_filters(&self) -> bool {
        self.criteria.active_query().is_some()
            || !self.criteria.category.is_all()
            || !self.criteria.effort_level.is_all()
            || !self.criteria.selected_skills.is_empty()
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> Recompute {
        self.criteria.query = query.into();
        self.recompute()
    }

    pub fn set_category(&mut self, category: &str) -> Recompute {
        self.criteria.category = Selection::parse(category);
        self.recompute()
    }

    pub fn set_effort_level(&mut self, effort_level: &str) -> Recompute {
        self.criteria.effort_level = Selection::parse(effort_level);
        self.recompute()
    }

    pub fn toggle_skill(&mut self, skill: &str) -> Recompute {
        self.criteria.toggle_skill(skill);
        self.recompute()
    }

    pub fn set_semantic(&mut self, enabled: bool) -> Recompute {
        self.criteria.semantic = enabled;
        self.recompute()
    }

    /// Resets every criterion to its default and recomputes.
    pub fn clear(&mut self) -> Recompute {
        self.criteria = FilterCriteria::default();
        self.recompute()
    }

    /// Snapshots the current criteria and returns the pass that filters
    /// against them.
    pub fn recompute(&self) -> Recompute {
        let criteria = self.criteria.clone();
        let semantic_pass = criteria.needs_semantic_pass();
        let request_id = self.tracker.issue(semantic_pass);

        let projects = Arc::clone(&self.projects);
        let engine = self.engine.clone();
        let latency = Arc::clone(&self.latency);
        let sink = Arc::clone(&self.sink);
        let tracker = Arc::clone(&self.tracker);

        async move {
            if semantic_pass {
                debug!(request_id, query = %criteria.query, "Semantic filter pass pending");
                latency.wait().await;
            }

            let results = engine.apply(&projects, &criteria);

            if !tracker.is_current(request_id) {
                debug!(request_id, "Discarding superseded filter result");
                return RecomputeOutcome::Superseded { request_id };
            }

            tracker.loading.store(false, Ordering::SeqCst);
            let count = results.len();
            sink.deliver(results);
            RecomputeOutcome::Delivered { request_id, count }
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latency::NoLatency;
    use crate::models::sample_project;
    use std::sync::Mutex;

    type Deliveries = Arc<Mutex<Vec<Vec<String>>>>;

    fn projects() -> Vec<ProjectRecord> {
        vec![
            sample_project("NanoQuant", "Research", "High", "quantum-inspired compression"),
            sample_project("Weather App", "Production", "Low", "React forecasts"),
            sample_project("Recall Engine", "Research", "Medium", "neural memory cues"),
        ]
    }

    fn mount(latency: Arc<dyn Latency>) -> (ProjectFilter, Deliveries) {
        let deliveries: Deliveries = Arc::default();
        let sink = {
            let deliveries = Arc::clone(&deliveries);
            move |results: Vec<ProjectRecord>| {
                deliveries
                    .lock()
                    .unwrap()
                    .push(results.into_iter().map(|p| p.title).collect());
            }
        };
        let filter = ProjectFilter::new(projects(), &[], sink).with_latency(latency);
        (filter, deliveries)
    }

    #[tokio::test]
    async fn test_mount_recompute_delivers_full_list() {
        let (filter, deliveries) = mount(Arc::new(NoLatency));
        let outcome = filter.recompute().await;
        assert_eq!(
            outcome,
            RecomputeOutcome::Delivered {
                request_id: 1,
                count: 3
            }
        );
        assert_eq!(
            deliveries.lock().unwrap()[0],
            vec!["NanoQuant", "Weather App", "Recall Engine"]
        );
    }

    #[tokio::test]
    async fn test_each_change_delivers_once() {
        let (mut filter, deliveries) = mount(Arc::new(NoLatency));
        filter.set_query("n").await;
        filter.set_query("na").await;
        filter.set_query("nan").await;
        let delivered = deliveries.lock().unwrap();
        assert_eq!(delivered.len(), 3);
        assert_eq!(delivered[2], vec!["NanoQuant"]);
    }

    #[tokio::test]
    async fn test_clear_restores_full_list() {
        let (mut filter, deliveries) = mount(Arc::new(NoLatency));
        filter.set_query("quantum").await;
        filter.set_category("Research").await;
        assert_eq!(deliveries.lock().unwrap().last().unwrap(), &vec!["NanoQuant"]);
        assert!(filter.has_active_filters());

        filter.clear().await;
        assert!(filter.criteria().is_default());
        assert!(!filter.has_active_filters());
        assert_eq!(
            deliveries.lock().unwrap().last().unwrap(),
            &vec!["NanoQuant", "Weather App", "Recall Engine"]
        );
    }

    #[tokio::test]
    async fn test_blank_query_is_not_an_active_filter() {
        let (mut filter, deliveries) = mount(Arc::new(NoLatency));
        filter.set_query("   ").await;
        assert!(!filter.has_active_filters());
        assert_eq!(deliveries.lock().unwrap()[0].len(), 3);

        filter.set_query(" weather ").await;
        assert!(filter.has_active_filters());
    }

    #[tokio::test]
    async fn test_toggle_skill_round_trip() {
        let (mut filter, deliveries) = mount(Arc::new(NoLatency));
        filter.toggle_skill("react").await;
        filter.toggle_skill("react").await;
        let delivered = deliveries.lock().unwrap();
        assert_eq!(delivered[0], vec!["Weather App"]);
        assert_eq!(delivered[1].len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_semantic_pass_waits_and_sets_loading() {
        let (mut filter, deliveries) = mount(Arc::new(SleepLatency(DEFAULT_SEMANTIC_DELAY)));
        filter.set_semantic(true).await; // no query: no delay, no loading
        assert!(!filter.is_loading());

        let start = tokio::time::Instant::now();
        let pending = tokio::spawn(filter.set_query("ai"));
        assert!(filter.is_loading());
        assert_eq!(deliveries.lock().unwrap().len(), 1);

        let outcome = pending.await.unwrap();
        assert!(start.elapsed() >= DEFAULT_SEMANTIC_DELAY);
        assert!(matches!(outcome, RecomputeOutcome::Delivered { count: 1, .. }));
        assert!(!filter.is_loading());
        assert_eq!(deliveries.lock().unwrap()[1], vec!["Recall Engine"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_semantic_result_is_discarded() {
        let (mut filter, deliveries) = mount(Arc::new(SleepLatency(DEFAULT_SEMANTIC_DELAY)));
        filter.criteria.semantic = true;

        let first = tokio::spawn(filter.set_query("ai"));
        tokio::time::advance(Duration::from_millis(400)).await;
        let second = tokio::spawn(filter.set_query("weather"));

        let first = first.await.unwrap();
        let second = second.await.unwrap();

        assert_eq!(first, RecomputeOutcome::Superseded { request_id: 1 });
        assert_eq!(
            second,
            RecomputeOutcome::Delivered {
                request_id: 2,
                count: 1
            }
        );
        let delivered = deliveries.lock().unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0], vec!["Weather App"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_literal_change_supersedes_pending_semantic_pass() {
        let (mut filter, deliveries) = mount(Arc::new(SleepLatency(DEFAULT_SEMANTIC_DELAY)));
        filter.criteria.semantic = true;
        let slow = tokio::spawn(filter.set_query("ai"));
        assert!(filter.is_loading());

        filter.set_semantic(false).await;
        assert!(!filter.is_loading());

        let slow = slow.await.unwrap();
        assert!(matches!(slow, RecomputeOutcome::Superseded { .. }));
        assert_eq!(deliveries.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_options_exposed() {
        let (filter, _) = mount(Arc::new(NoLatency));
        assert_eq!(filter.options().categories, vec!["Research", "Production"]);
        assert_eq!(filter.options().effort_levels, vec!["High", "Low", "Medium"]);
    }
}
