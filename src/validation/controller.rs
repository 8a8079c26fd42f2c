use super::record::{
    placeholder_url, Decision, MessageTone, ValidationRecord, ValidationSubmission,
};
use crate::config::ValidationConfig;
use crate::format::format_timestamp;
use anyhow::{Context, Result};
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use url::Url;

/// Presentation-layer hooks for the review page
pub trait ValidationSurface: Send {
    fn show_record(&mut self, record: &ValidationRecord);
    fn set_image_source(&mut self, src: &str);

    /// Current contents of the free-text comments field
    fn comments(&self) -> String;

    fn show_message(&mut self, text: &str, tone: MessageTone);
    fn set_decision_enabled(&mut self, enabled: bool);
}

/// Receives review decisions (stand-in for the upload endpoint)
#[async_trait::async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, submission: &ValidationSubmission) -> Result<()>;
}

/// Sink that only logs what would have been sent
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

#[async_trait::async_trait]
impl SubmissionSink for LogSink {
    async fn submit(&self, submission: &ValidationSubmission) -> Result<()> {
        info!("[Validation] Submitting action for Image ID: {}", submission.id);
        info!("[Validation] Action: {}", submission.decision);
        info!(
            "[Validation] Comments: {}",
            submission.comments.as_deref().unwrap_or("None")
        );
        debug!(
            "[Validation] Payload: {}",
            serde_json::to_string(submission).context("Failed to encode submission")?
        );
        Ok(())
    }
}

/// Moves the browser to another page
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: &Url);
}

pub struct ValidationController<S: ValidationSurface> {
    record: ValidationRecord,
    surface: S,
    sink: Arc<dyn SubmissionSink>,
    navigator: Arc<dyn Navigator>,
    redirect_to: Url,
    redirect_delay: Duration,
    image_src: String,
    error_placeholder: String,
    decision: Option<Decision>,
    pending_redirect: Option<JoinHandle<()>>,
}

impl<S: ValidationSurface> ValidationController<S> {
    /// Read the capture from the page location and render it.
    ///
    /// Fails only when the configured placeholder base or redirect target
    /// is not a valid URL.
    pub fn attach(
        location: &Url,
        mut surface: S,
        sink: Arc<dyn SubmissionSink>,
        navigator: Arc<dyn Navigator>,
        config: &ValidationConfig,
    ) -> Result<Self> {
        let placeholder_base = Url::parse(&config.placeholder_base)
            .with_context(|| format!("Invalid placeholder base: {}", config.placeholder_base))?;
        let redirect_to = location
            .join(&config.redirect_target)
            .with_context(|| format!("Invalid redirect target: {}", config.redirect_target))?;

        let reviewed_at = format_timestamp(&Local::now());
        let record = ValidationRecord::from_query(location.query().unwrap_or(""), reviewed_at);
        let image_src = placeholder_url(&placeholder_base, &record.title).to_string();

        debug!(id = %record.id, title = %record.title, "Validation page loaded");
        surface.show_record(&record);
        surface.set_image_source(&image_src);
        surface.set_decision_enabled(true);

        Ok(Self {
            record,
            surface,
            sink,
            navigator,
            redirect_to,
            redirect_delay: config.redirect_delay(),
            image_src,
            error_placeholder: config.error_placeholder.clone(),
            decision: None,
            pending_redirect: None,
        })
    }

    /// The capture image failed to load
    pub fn on_image_error(&mut self) {
        if self.image_src == self.error_placeholder {
            return;
        }
        warn!("[Validation] Image failed to load: {}", self.image_src);
        self.image_src = self.error_placeholder.clone();
        self.surface.set_image_source(&self.image_src);
    }

    /// Record the reviewer's decision and schedule the redirect.
    ///
    /// Only the first decision counts; the controls are inert afterwards and
    /// later calls return `false`.
    pub async fn submit(&mut self, decision: Decision) -> bool {
        if self.decision.is_some() {
            debug!("Ignoring {} after decision was made", decision);
            return false;
        }
        self.decision = Some(decision);

        let submission =
            ValidationSubmission::new(self.record.id.clone(), decision, &self.surface.comments());

        if let Err(e) = self.sink.submit(&submission).await {
            warn!("[Validation] Submission failed: {:#}", e);
        }

        self.surface
            .show_message(&submission.confirmation(), decision.tone());
        self.surface.set_decision_enabled(false);

        let navigator = Arc::clone(&self.navigator);
        let target = self.redirect_to.clone();
        let delay = self.redirect_delay;
        self.pending_redirect = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            info!("[Validation] Redirecting to {}", target);
            navigator.navigate(&target);
        }));

        true
    }

    pub fn record(&self) -> &ValidationRecord {
        &self.record
    }

    pub fn decision(&self) -> Option<Decision> {
        self.decision
    }

    pub fn image_source(&self) -> &str {
        &self.image_src
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Take the scheduled redirect, if a decision has been made
    pub fn take_redirect(&mut self) -> Option<JoinHandle<()>> {
        self.pending_redirect.take()
    }
}
