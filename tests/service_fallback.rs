mod common;

use serde_json::json;
use skillscope::controller::NotificationCenter;
use skillscope::core::service_client::{AnalyzeRequest, ResumeUpload};
use skillscope::render::{Node, RenderOptions, SectionId};
use skillscope::{
    AnalysisService, FormController, FormInput, ReportSource, ServiceClient, SubmitError,
    Unavailable,
};
use std::time::Duration;

fn text_input(text: &str) -> FormInput {
    FormInput {
        resume_text: text.to_string(),
        ..Default::default()
    }
}

fn controller_for(url: String, ttl: Duration) -> FormController<ServiceClient> {
    FormController::new(
        ServiceClient::new(url, None).unwrap(),
        NotificationCenter::new(ttl),
        RenderOptions::default(),
    )
}

#[tokio::test]
async fn test_live_report_from_service() {
    let body = json!({
        "overall_score": 81.6,
        "skill_gaps": {"missing_skills": ["Kubernetes"]},
        "github_analysis": {"error": "GitHub URL not provided"}
    })
    .to_string();
    let (url, captured) = common::serve_once(200, body).await;

    let client = ServiceClient::new(url, None).unwrap();
    let report = client
        .analyze(AnalyzeRequest {
            resume: Some(ResumeUpload {
                file_name: "cv.pdf".to_string(),
                bytes: b"%PDF-1.4 resume".to_vec(),
            }),
            resume_text: Some("Backend engineer".to_string()),
            github_url: None,
        })
        .await
        .unwrap();

    assert_eq!(report.overall_score, Some(81.6));
    assert!(report.github_analysis.unwrap().is_unavailable());

    let request = captured.lock().unwrap().clone().unwrap();
    assert!(request.starts_with("POST /api/analyze "));
    assert!(request.contains("name=\"resume\"; filename=\"cv.pdf\""));
    assert!(request.contains("application/pdf"));
    assert!(request.contains("name=\"resume_text\""));
    assert!(!request.contains("name=\"github_url\""));
}

#[tokio::test]
async fn test_error_status_is_unavailable() {
    let (url, _) = common::serve_once(503, "{\"detail\": \"down\"}".to_string()).await;
    let client = ServiceClient::new(url, None).unwrap();

    let result = client.analyze(AnalyzeRequest::default()).await;
    assert!(matches!(result, Err(Unavailable::Status(503))));
}

#[tokio::test]
async fn test_undecodable_body_is_unavailable() {
    let (url, _) = common::serve_once(200, "not json".to_string()).await;
    let client = ServiceClient::new(url, None).unwrap();

    let result = client.analyze(AnalyzeRequest::default()).await;
    assert!(matches!(result, Err(Unavailable::Decode(_))));
}

#[tokio::test]
async fn test_network_failure_renders_sample() {
    let url = common::unreachable_url().await;
    let controller = controller_for(url, Duration::from_millis(300));

    let outcome = controller.submit(&text_input("Data engineer")).await.unwrap();
    assert_eq!(outcome.source, ReportSource::Sample);

    let page = controller.page();
    assert!(page.results_visible);
    assert!(!page.loading);
    assert_eq!(page.container(SectionId::OverallScore), &[Node::text("68")]);
    assert_eq!(page.container(SectionId::MissingSkills).len(), 3);

    let id = outcome.notification.unwrap();
    let active = controller.notifications().active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "Demo Mode");

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(!controller.notifications().contains(id));
}

#[tokio::test]
async fn test_live_submission_through_controller() {
    let body = json!({
        "overall_score": 74.5,
        "recommendations": ["Your market position: Strong"],
        "skill_gaps": {"missing_skills": (1..=15).map(|i| format!("Skill {}", i)).collect::<Vec<_>>()}
    })
    .to_string();
    let (url, _) = common::serve_once(200, body).await;
    let controller = controller_for(url, Duration::from_secs(8));

    let outcome = controller.submit(&text_input("Platform engineer")).await.unwrap();
    assert_eq!(outcome.source, ReportSource::Live);
    assert!(controller.notifications().active().is_empty());

    let page = controller.page();
    assert_eq!(page.container(SectionId::OverallScore), &[Node::text("74")]);
    assert_eq!(
        page.container(SectionId::MarketPosition),
        &[Node::text("Your market position: Strong")]
    );
    assert_eq!(page.container(SectionId::MissingSkills).len(), 10);
    assert_eq!(
        page.container(SectionId::GithubAnalysis),
        &[Node::paragraph("GitHub analysis not available")]
    );
}

#[tokio::test]
async fn test_float_repo_count_renders_live() {
    let body = json!({
        "overall_score": 90.0,
        "github_analysis": {"total_repos": 15.0, "languages_used": ["Rust"]}
    })
    .to_string();
    let (url, _) = common::serve_once(200, body).await;
    let controller = controller_for(url, Duration::from_secs(8));

    let outcome = controller.submit(&text_input("Systems engineer")).await.unwrap();
    assert_eq!(outcome.source, ReportSource::Live);
    assert!(controller.notifications().active().is_empty());

    let page = controller.page();
    assert_eq!(page.container(SectionId::OverallScore), &[Node::text("90")]);
    assert_eq!(
        page.container(SectionId::GithubAnalysis)[0],
        Node::field("Total Repos", "15")
    );
}

#[tokio::test]
async fn test_validation_sends_no_request() {
    let url = common::unreachable_url().await;
    let controller = controller_for(url, Duration::from_secs(8));

    let input = FormInput {
        github_url: "https://github.com/octocat".to_string(),
        ..Default::default()
    };
    assert_eq!(
        controller.submit(&input).await,
        Err(SubmitError::MissingResume)
    );
    assert!(!controller.page().results_visible);
    assert!(controller.notifications().active().is_empty());
}
