// src/controller/mod.rs
//! Form controller: validates a submission, calls the analysis service and
//! renders the report (or the sample report) into the page.

pub mod notification;
pub mod page;

pub use notification::{Notification, NotificationCenter};
pub use page::{Anchor, Page, SelectedFile};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::service_client::{AnalysisService, AnalyzeRequest, ResumeUpload};
use crate::render::sections::{build_sections, RenderOptions};
use crate::sample::{sample_report, DEMO_MESSAGE, DEMO_TITLE};
use crate::types::report::AnalysisReport;

pub const MISSING_RESUME_ALERT: &str = "Please provide either a resume file or resume text";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please provide either a resume file or resume text")]
    MissingResume,
    #[error("An analysis is already in progress")]
    Busy,
}

/// Raw form values. Empty strings count as not provided.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub resume: Option<ResumeUpload>,
    pub resume_text: String,
    pub github_url: String,
}

impl FormInput {
    fn non_empty(value: &str) -> Option<String> {
        (!value.is_empty()).then(|| value.to_string())
    }

    pub fn has_resume(&self) -> bool {
        self.resume.is_some() || !self.resume_text.is_empty()
    }

    /// File-info entry for the uploaded resume, if any
    pub fn selected_file(&self) -> Option<SelectedFile> {
        self.resume.as_ref().map(|resume| SelectedFile {
            name: resume.file_name.clone(),
            size: resume.bytes.len() as u64,
        })
    }

    pub fn to_request(&self) -> AnalyzeRequest {
        AnalyzeRequest {
            resume: self.resume.clone(),
            resume_text: Self::non_empty(&self.resume_text),
            github_url: Self::non_empty(&self.github_url),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSource {
    Live,
    Sample,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub source: ReportSource,
    /// Demo-mode notice shown when the sample report was used
    pub notification: Option<Uuid>,
}

fn lock_page(page: &Mutex<Page>) -> MutexGuard<'_, Page> {
    page.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Clears the in-flight flag and hides the loading indicator when dropped,
/// whichever way the submission ends.
struct InFlight<'a> {
    flag: &'a AtomicBool,
    page: &'a Mutex<Page>,
}

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool, page: &'a Mutex<Page>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(Self { flag, page })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        lock_page(self.page).set_loading(false);
        self.flag.store(false, Ordering::Release);
    }
}

pub struct FormController<S> {
    service: S,
    page: Arc<Mutex<Page>>,
    notifications: NotificationCenter,
    options: RenderOptions,
    in_flight: AtomicBool,
}

impl<S: AnalysisService> FormController<S> {
    pub fn new(service: S, notifications: NotificationCenter, options: RenderOptions) -> Self {
        Self {
            service,
            page: Arc::new(Mutex::new(Page::new())),
            notifications,
            options,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current page
    pub fn page(&self) -> Page {
        lock_page(&self.page).clone()
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Handle a form submission.
    ///
    /// Sends one request. If the service is unavailable the sample report is
    /// rendered and a demo-mode notification is shown instead of an error.
    /// A submission rejected as busy leaves the page untouched.
    pub async fn submit(&self, input: &FormInput) -> Result<SubmitOutcome, SubmitError> {
        let _guard =
            InFlight::acquire(&self.in_flight, &self.page).ok_or(SubmitError::Busy)?;

        {
            let mut page = lock_page(&self.page);
            page.select_file(input.selected_file().as_ref());
            if !input.has_resume() {
                page.alert = Some(MISSING_RESUME_ALERT.to_string());
                return Err(SubmitError::MissingResume);
            }
            page.alert = None;
            page.set_loading(true);
            page.hide_results();
        }

        let outcome = match self.service.analyze(input.to_request()).await {
            Ok(report) => {
                info!("Analysis received, rendering live report");
                self.display_results(&report);
                SubmitOutcome {
                    source: ReportSource::Live,
                    notification: None,
                }
            }
            Err(cause) => {
                warn!("Backend not available, using sample data: {}", cause);
                let id = self.notifications.push(DEMO_TITLE, DEMO_MESSAGE);
                self.display_results(&sample_report());
                SubmitOutcome {
                    source: ReportSource::Sample,
                    notification: Some(id),
                }
            }
        };

        Ok(outcome)
    }

    /// Render a report into every container and reveal the results panel
    pub fn display_results(&self, report: &AnalysisReport) {
        let sections = build_sections(report, self.options);
        let mut page = lock_page(&self.page);
        page.apply(sections);
        page.show_results();
    }

    pub fn select_file(&self, file: Option<&SelectedFile>) {
        lock_page(&self.page).select_file(file);
    }

    pub fn reset(&self) {
        lock_page(&self.page).reset();
    }

    pub fn scroll_to_analyze(&self) {
        lock_page(&self.page).scroll_to_analyze();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service_client::Unavailable;
    use crate::render::view::{Node, SectionId};
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    struct FixedService {
        report: Option<AnalysisReport>,
        calls: AtomicUsize,
    }

    impl FixedService {
        fn live(report: AnalysisReport) -> Self {
            Self {
                report: Some(report),
                calls: AtomicUsize::new(0),
            }
        }

        fn down() -> Self {
            Self {
                report: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl AnalysisService for FixedService {
        async fn analyze(&self, _request: AnalyzeRequest) -> Result<AnalysisReport, Unavailable> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.report.clone().ok_or(Unavailable::Status(503))
        }
    }

    fn text_input() -> FormInput {
        FormInput {
            resume_text: "Five years of Rust".to_string(),
            ..Default::default()
        }
    }

    fn controller(service: FixedService) -> FormController<FixedService> {
        FormController::new(service, NotificationCenter::default(), RenderOptions::default())
    }

    #[test]
    fn test_form_input_to_request_drops_empty_fields() {
        let input = FormInput {
            resume: None,
            resume_text: "text".to_string(),
            github_url: String::new(),
        };
        let request = input.to_request();
        assert_eq!(request.resume_text.as_deref(), Some("text"));
        assert_eq!(request.github_url, None);
    }

    #[tokio::test]
    async fn test_missing_resume_sends_nothing() {
        let controller = controller(FixedService::down());

        let result = controller.submit(&FormInput::default()).await;
        assert_eq!(result, Err(SubmitError::MissingResume));
        assert_eq!(controller.service.calls.load(Ordering::SeqCst), 0);

        let page = controller.page();
        assert!(!page.results_visible);
        assert_eq!(page.alert.as_deref(), Some(MISSING_RESUME_ALERT));
    }

    #[tokio::test]
    async fn test_live_report_rendered() {
        let report = AnalysisReport {
            overall_score: Some(91.2),
            ..Default::default()
        };
        let controller = controller(FixedService::live(report));

        let outcome = controller.submit(&text_input()).await.unwrap();
        assert_eq!(outcome.source, ReportSource::Live);
        assert_eq!(outcome.notification, None);

        let page = controller.page();
        assert!(page.results_visible);
        assert!(!page.loading);
        assert_eq!(page.container(SectionId::OverallScore), &[Node::text("91")]);
        assert!(controller.notifications().active().is_empty());
    }

    #[tokio::test]
    async fn test_unavailable_falls_back_to_sample() {
        let controller = controller(FixedService::down());

        let outcome = controller.submit(&text_input()).await.unwrap();
        assert_eq!(outcome.source, ReportSource::Sample);

        let id = outcome.notification.unwrap();
        assert!(controller.notifications().contains(id));

        let page = controller.page();
        assert!(page.results_visible);
        assert!(!page.loading);
        assert!(!controller.is_busy());
        assert_eq!(page.container(SectionId::OverallScore), &[Node::text("68")]);
    }

    #[tokio::test]
    async fn test_resubmission_is_idempotent() {
        let controller = controller(FixedService::live(sample_report()));

        controller.submit(&text_input()).await.unwrap();
        let first = controller.page();
        controller.submit(&text_input()).await.unwrap();

        assert_eq!(controller.page(), first);
    }

    #[tokio::test]
    async fn test_busy_while_in_flight() {
        let controller = controller(FixedService::live(sample_report()));
        controller.in_flight.store(true, Ordering::Release);

        let result = controller.submit(&text_input()).await;
        assert_eq!(result, Err(SubmitError::Busy));
        assert_eq!(controller.service.calls.load(Ordering::SeqCst), 0);

        // Busy wins over validation and the alert stays unset
        let result = controller.submit(&FormInput::default()).await;
        assert_eq!(result, Err(SubmitError::Busy));
        assert_eq!(controller.page(), Page::new());
    }

    /// Holds every request until released
    struct HeldService {
        entered: Notify,
        release: Notify,
    }

    impl AnalysisService for HeldService {
        async fn analyze(&self, _request: AnalyzeRequest) -> Result<AnalysisReport, Unavailable> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(AnalysisReport {
                overall_score: Some(77.0),
                ..Default::default()
            })
        }
    }

    fn file_input(name: &str, size: usize) -> FormInput {
        FormInput {
            resume: Some(ResumeUpload {
                file_name: name.to_string(),
                bytes: vec![0u8; size],
            }),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_concurrent_submission_leaves_page_alone() {
        let controller = FormController::new(
            HeldService {
                entered: Notify::new(),
                release: Notify::new(),
            },
            NotificationCenter::default(),
            RenderOptions::default(),
        );
        let first_input = file_input("first.pdf", 2048);
        let second_input = file_input("second.pdf", 512);

        let second = async {
            controller.service.entered.notified().await;
            let result = controller.submit(&second_input).await;
            let during = controller.page();
            controller.service.release.notify_one();
            (result, during)
        };
        let (first, (second, during)) = tokio::join!(controller.submit(&first_input), second);

        assert_eq!(second, Err(SubmitError::Busy));
        assert!(during.loading);
        assert_eq!(during.file_info, "Selected: first.pdf (2.00 KB)");

        assert_eq!(first.unwrap().source, ReportSource::Live);
        let page = controller.page();
        assert_eq!(page.file_info, "Selected: first.pdf (2.00 KB)");
        assert_eq!(page.container(SectionId::OverallScore), &[Node::text("77")]);
        assert!(!controller.is_busy());
    }

    #[test]
    fn test_reset_hides_results() {
        let controller = controller(FixedService::down());
        controller.display_results(&sample_report());
        controller.select_file(Some(&SelectedFile {
            name: "r.pdf".to_string(),
            size: 2048,
        }));

        controller.reset();
        let page = controller.page();
        assert!(!page.results_visible);
        assert!(page.file_info.is_empty());
        assert_eq!(page.scroll_target, Some(Anchor::Analyze));
    }
}
