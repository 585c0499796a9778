//! Integration tests for the decision client against a live server.
//!
//! Each test binds the real server on an ephemeral port, then drives it the
//! way the question form does: submit, wait, settle.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;

use decision_maker::adapters::client::{ClientError, DecisionClient, DecisionClientConfig};
use decision_maker::adapters::http::DecisionServer;
use decision_maker::adapters::strategy::QuestionHashStrategy;
use decision_maker::config::{AppConfig, StrategyKind};
use decision_maker::domain::decision::{DecisionPhase, DecisionView, Question, ViewDisplay};
use decision_maker::ports::DecisionStrategy;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct RunningServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<()>,
}

impl RunningServer {
    async fn start(config: AppConfig) -> Self {
        let server = DecisionServer::from_config(&config).unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            server
                .serve(listener, async move {
                    let _ = rx.await;
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown: Some(tx),
            handle,
        }
    }

    fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap();
    }
}

fn hash_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.engine.strategy = StrategyKind::QuestionHash;
    config
}

fn client_for(base_url: String) -> DecisionClient {
    DecisionClient::new(DecisionClientConfig::new(base_url).with_timeout(Duration::from_secs(5)))
        .unwrap()
}

/// Address nothing is listening on.
async fn closed_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn client_receives_engine_verdict() {
    let server = RunningServer::start(hash_config()).await;
    let client = client_for(server.base_url());

    let question = Question::new("Should I eat pizza tonight?");
    let verdict = client.decide(&question).await.unwrap();

    assert_eq!(verdict, QuestionHashStrategy.decide(&question));
    server.stop().await;
}

#[tokio::test]
async fn client_accepts_empty_question() {
    let server = RunningServer::start(AppConfig::default()).await;
    let client = client_for(server.base_url());

    assert!(client.decide(&Question::new("")).await.is_ok());
    server.stop().await;
}

#[tokio::test]
async fn ask_settles_view_with_verdict() {
    let server = RunningServer::start(hash_config()).await;
    let client = client_for(server.base_url());

    let mut view = DecisionView::new();
    view.edit("Should I go for a run?").unwrap();
    let verdict = client.ask(&mut view).await.unwrap();

    assert_eq!(
        view.phase(),
        DecisionPhase::Settled {
            verdict: Some(verdict)
        }
    );
    assert_eq!(view.display(), ViewDisplay::Verdict(verdict));

    view.reset().unwrap();
    assert_eq!(view.display(), ViewDisplay::Prompt);
    assert_eq!(view.question(), "");
    server.stop().await;
}

#[tokio::test]
async fn unreachable_server_settles_view_without_verdict() {
    let addr = closed_address().await;
    let client = client_for(format!("http://{}", addr));

    let mut view = DecisionView::new();
    view.edit("Anyone there?").unwrap();
    let result = client.ask(&mut view).await;

    assert!(matches!(result, Err(ClientError::Network(_))), "got {:?}", result);
    assert_eq!(view.phase(), DecisionPhase::Settled { verdict: None });
    assert_eq!(view.display(), ViewDisplay::Prompt);
    assert!(view.can_submit());
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = RunningServer::start(AppConfig::default()).await;
    let client = client_for(format!("{}/wrong-prefix", server.base_url()));

    let result = client.decide(&Question::new("Hello?")).await;
    match result {
        Err(ClientError::Status { status, body }) => {
            assert_eq!(status, 404);
            assert!(body.contains("NOT_FOUND"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
    server.stop().await;
}

#[tokio::test]
async fn many_clients_in_parallel_all_get_answers() {
    let server = RunningServer::start(AppConfig::default()).await;
    let client = client_for(server.base_url());

    let tasks: Vec<_> = (0..50)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                let mut view = DecisionView::new();
                view.edit(format!("Tab {} asks: should I?", i)).unwrap();
                client.ask(&mut view).await.map(|_| view)
            })
        })
        .collect();

    for task in tasks {
        let view = task.await.unwrap().unwrap();
        assert!(view.phase().verdict().is_some());
    }
    server.stop().await;
}
