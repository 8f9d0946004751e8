//! "AI insights" for a project: the project's own text, or the default
//! template, returned after a simulated generation delay.

use std::sync::Arc;

use tracing::info;

use crate::content::PortfolioContent;
use crate::latency::Latency;
use crate::models::ProjectInsight;

/// Returns `None` when no project has `project_id`. Unknown ids fail fast,
/// without waiting out the delay.
pub async fn generate_insight(
    content: &PortfolioContent,
    project_id: &str,
    latency: &Arc<dyn Latency>,
) -> Option<ProjectInsight> {
    let project = content.project(project_id)?;
    latency.wait().await;
    let insight = content.insight_for(project);
    info!(
        project_id,
        bespoke = project.ai_insights.is_some(),
        "Generated project insight"
    );
    Some(insight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latency::{NoLatency, SleepLatency};
    use tokio::time::{Duration, Instant};

    fn content() -> PortfolioContent {
        PortfolioContent::load(None).unwrap()
    }

    #[tokio::test]
    async fn test_bespoke_insight_is_returned() {
        let content = content();
        let latency: Arc<dyn Latency> = Arc::new(NoLatency);
        let insight = generate_insight(&content, "memory-retrieval-cue", &latency)
            .await
            .unwrap();
        let own = content
            .project("memory-retrieval-cue")
            .and_then(|p| p.ai_insights.clone())
            .unwrap();
        assert_eq!(insight.summary, own.summary);
    }

    #[tokio::test]
    async fn test_default_template_bound_to_project() {
        let content = content();
        let latency: Arc<dyn Latency> = Arc::new(NoLatency);
        let insight = generate_insight(&content, "task-manager", &latency)
            .await
            .unwrap();
        assert_eq!(insight.project_id, "task-manager");
        assert_eq!(insight.summary, content.default_insight.summary);
    }

    #[tokio::test]
    async fn test_unknown_project() {
        let latency: Arc<dyn Latency> = Arc::new(NoLatency);
        assert!(generate_insight(&content(), "nope", &latency).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_generation_delay() {
        let latency: Arc<dyn Latency> = Arc::new(SleepLatency::from_millis(3000));
        let start = Instant::now();
        generate_insight(&content(), "nanoquant", &latency).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(3000));
    }
}
