//! End-to-end flow over the real adapters: GitHub source against a mock
//! server, the file preference store in a temp dir, and the layout viewport.

use std::sync::Arc;

use mockito::{Matcher, Server, ServerGuard};
use pf_app::{usecase_factory, AppDeps};
use pf_core::config::ProjectsConfig;
use pf_core::{ElementId, LoadState, Theme};
use pf_infra::{ElementBox, FilePreferenceStore, GitHubRepositorySource, LayoutViewport};
use tempfile::TempDir;

const CARD_HEIGHT: f64 = 100.0;

fn repos_body(count: usize) -> String {
    let items: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"id":{i},"name":"r{i}","description":null,"html_url":"https://github.com/akshatphumbhra/r{i}","topics":[]}}"#
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

struct Page {
    _dir: TempDir,
    deps: AppDeps,
    viewport: Arc<LayoutViewport>,
}

fn page(server: &ServerGuard) -> Page {
    let dir = TempDir::new().unwrap();
    let viewport = Arc::new(LayoutViewport::new(250.0));
    let source = GitHubRepositorySource::new(&ProjectsConfig {
        api_base_url: server.url(),
        user_agent: "portfolio-test".to_string(),
    })
    .unwrap();

    let deps = AppDeps {
        repository_source: Arc::new(source),
        preference_store: Arc::new(FilePreferenceStore::new(
            dir.path().join("preferences.json"),
        )),
        visibility_observer: viewport.clone(),
    };
    Page {
        _dir: dir,
        deps,
        viewport,
    }
}

#[tokio::test]
async fn loads_six_newest_and_reveals_cards_while_scrolling() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/akshatphumbhra/repos")
        .match_query(Matcher::UrlEncoded("sort".into(), "updated".into()))
        .with_status(200)
        .with_body(repos_body(8))
        .expect(1)
        .create_async()
        .await;

    let page = page(&server);
    let loader = usecase_factory::load_project_list(&page.deps);
    let animator = usecase_factory::visibility_animator(&page.deps);

    let state = loader.execute().await;
    let list = state.projects().expect("loaded");
    let names: Vec<_> = list.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["r0", "r1", "r2", "r3", "r4", "r5"]);

    // Cards stacked below the fold.
    let mut subscriptions = Vec::new();
    for (i, repo) in list.iter().enumerate() {
        let element = ElementId::from(format!("project-{}", repo.name));
        page.viewport.place(
            element.clone(),
            ElementBox::new(300.0 + i as f64 * CARD_HEIGHT, CARD_HEIGHT),
        );
        subscriptions.push(animator.register(Some(element)).unwrap());
    }

    assert!(animator.handle_intersections(&page.viewport.refresh()).is_empty());

    let revealed = animator.handle_intersections(&page.viewport.scroll_to(100.0));
    assert_eq!(revealed, [ElementId::from("project-r0")]);
    assert!(!page.viewport.is_observed(&ElementId::from("project-r0")));

    // Back to the top and down again: r0 stays revealed, nothing re-fires.
    assert!(animator.handle_intersections(&page.viewport.scroll_to(0.0)).is_empty());
    let revealed = animator.handle_intersections(&page.viewport.scroll_to(400.0));
    assert_eq!(
        revealed,
        [
            ElementId::from("project-r1"),
            ElementId::from("project-r2"),
            ElementId::from("project-r3"),
        ]
    );
    assert!(subscriptions[0].is_revealed());
    assert!(!subscriptions[5].is_revealed());

    // A second execute reuses the terminal state.
    assert_eq!(loader.execute().await, state);
    mock.assert_async().await;

    drop(subscriptions);
    assert_eq!(page.viewport.observed_count(), 0);
    assert_eq!(animator.tracked_count(), 0);
}

#[tokio::test]
async fn failed_load_surfaces_status_code() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/users/akshatphumbhra/repos")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let page = page(&server);
    let loader = usecase_factory::load_project_list(&page.deps);

    match loader.execute().await {
        LoadState::Failed(message) => assert!(message.contains("404")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn theme_survives_a_new_session() {
    let server = Server::new_async().await;
    let first = page(&server);

    let theme = usecase_factory::theme_preference(&first.deps);
    assert_eq!(theme.current().await.unwrap(), Theme::Dark);
    assert_eq!(theme.toggle().await.unwrap(), Theme::Light);

    // Fresh use case over the same file, as on the next page load.
    let reopened = usecase_factory::theme_preference(&first.deps);
    assert_eq!(reopened.current().await.unwrap(), Theme::Light);
    assert_eq!(reopened.toggle().await.unwrap(), Theme::Dark);

    let again = usecase_factory::theme_preference(&first.deps);
    assert_eq!(again.current().await.unwrap(), Theme::Dark);
}
