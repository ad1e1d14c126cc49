//! End-to-end event loop tests with an in-process recipe service

use async_trait::async_trait;
use pantry_common::api::{GenerateRequest, Recipe};
use pantry_ui::catalog::Catalog;
use pantry_ui::client::TRANSPORT_FALLBACK_MESSAGE;
use pantry_ui::render::{CatalogPanel, RecipePanel, SelectionPanel};
use pantry_ui::{runtime, App, GenerateError, RecipeService, UiEvent, View};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{mpsc, Notify};

/// Service returning a canned outcome and recording requests
struct CannedService {
    outcome: Result<Vec<Recipe>, GenerateError>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl CannedService {
    fn new(outcome: Result<Vec<Recipe>, GenerateError>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl RecipeService for CannedService {
    async fn generate(&self, request: &GenerateRequest) -> Result<Vec<Recipe>, GenerateError> {
        self.requests.lock().unwrap().push(request.clone());
        tokio::task::yield_now().await;
        self.outcome.clone()
    }
}

/// View recording every recipe panel shown plus the latest of the rest
#[derive(Default)]
struct RecordingView {
    recipe_history: Vec<RecipePanel>,
    selection: Option<SelectionPanel>,
    generate_enabled: Option<bool>,
}

impl View for RecordingView {
    fn show_catalog(&mut self, _panel: &CatalogPanel) {}

    fn show_selection(&mut self, panel: &SelectionPanel) {
        self.selection = Some(panel.clone());
    }

    fn show_recipes(&mut self, panel: &RecipePanel) {
        self.recipe_history.push(panel.clone());
    }

    fn set_generate_enabled(&mut self, enabled: bool) {
        self.generate_enabled = Some(enabled);
    }

    fn set_custom_input(&mut self, _text: &str) {}
}

fn pancakes() -> Recipe {
    Recipe {
        title: "Pancakes".to_string(),
        ingredients: "egg, flour".to_string(),
        instructions: "Mix.\nCook.".to_string(),
    }
}

/// Feed `events`, close the source and run the loop to completion
async fn run_events(service: Arc<CannedService>, events: Vec<UiEvent>) -> RecordingView {
    let (tx, rx) = mpsc::channel(64);
    for event in events {
        tx.send(event).await.unwrap();
    }
    drop(tx);

    let app = App::new(Catalog::new(["egg", "flour", "milk"]));
    runtime::run(app, service, RecordingView::default(), rx).await
}

fn egg_and_flour_then_generate() -> Vec<UiEvent> {
    vec![
        UiEvent::CatalogItemClicked("egg".to_string()),
        UiEvent::CustomInputChanged(" Flour".to_string()),
        UiEvent::CustomInputSubmitted,
        UiEvent::GenerateClicked,
    ]
}

#[tokio::test]
async fn test_recipes_rendered_after_request() {
    let service = CannedService::new(Ok(vec![pancakes()]));
    let view = run_events(Arc::clone(&service), egg_and_flour_then_generate()).await;

    let requests = service.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].ingredients, vec!["egg", "flour"]);

    // Initial hidden → loading → results
    assert_eq!(view.recipe_history.first(), Some(&RecipePanel::Hidden));
    assert!(view.recipe_history.contains(&RecipePanel::Loading));
    let last = view.recipe_history.last().unwrap();
    let RecipePanel::Grid(cards) = last else {
        panic!("expected results grid, got {:?}", last);
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title, "Pancakes");
    assert_eq!(cards[0].instruction_lines, vec!["Mix.", "Cook."]);
    assert_eq!(view.generate_enabled, Some(true));
}

#[tokio::test]
async fn test_service_error_rendered() {
    let service = CannedService::new(Err(GenerateError::Service("No recipes found".to_string())));
    let view = run_events(service, egg_and_flour_then_generate()).await;

    assert_eq!(
        view.recipe_history.last(),
        Some(&RecipePanel::Error("No recipes found".to_string()))
    );
    assert_eq!(view.generate_enabled, Some(true));
}

#[tokio::test]
async fn test_transport_error_uses_fallback() {
    let raw = "error sending request: connection refused";
    let service = CannedService::new(Err(GenerateError::Transport(raw.to_string())));
    let view = run_events(service, egg_and_flour_then_generate()).await;

    let last = view.recipe_history.last().unwrap();
    assert_eq!(last, &RecipePanel::Error(TRANSPORT_FALLBACK_MESSAGE.to_string()));
    assert!(!last.to_string().contains(raw));
}

#[tokio::test]
async fn test_empty_results_rendered() {
    let service = CannedService::new(Ok(vec![]));
    let view = run_events(service, egg_and_flour_then_generate()).await;

    assert_eq!(view.recipe_history.last(), Some(&RecipePanel::Empty));
}

#[tokio::test]
async fn test_generate_with_empty_selection_sends_nothing() {
    let service = CannedService::new(Ok(vec![pancakes()]));
    let view = run_events(Arc::clone(&service), vec![UiEvent::GenerateClicked]).await;

    assert!(service.requests.lock().unwrap().is_empty());
    assert_eq!(view.recipe_history, vec![RecipePanel::Hidden]);
    assert_eq!(view.generate_enabled, Some(false));
}

#[tokio::test]
async fn test_clear_resets_everything() {
    let service = CannedService::new(Ok(vec![pancakes()]));
    let mut events = egg_and_flour_then_generate();
    events.push(UiEvent::ClearClicked);

    let view = run_events(service, events).await;

    assert_eq!(view.selection, Some(SelectionPanel::Placeholder));
    // Whether the outcome landed before or after the clear, the loop has
    // settled and the generate action reflects the empty selection.
    assert_eq!(view.generate_enabled, Some(false));
}

/// Service that holds every request until `release` is notified
struct GatedService {
    release: Notify,
}

#[async_trait]
impl RecipeService for GatedService {
    async fn generate(&self, _request: &GenerateRequest) -> Result<Vec<Recipe>, GenerateError> {
        self.release.notified().await;
        Ok(vec![pancakes()])
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Shown {
    Selection(SelectionPanel),
    Recipes(RecipePanel),
    Generate(bool),
}

/// View appending every update to a log shared with the test
struct LogView {
    log: Arc<Mutex<Vec<Shown>>>,
}

impl View for LogView {
    fn show_catalog(&mut self, _panel: &CatalogPanel) {}

    fn show_selection(&mut self, panel: &SelectionPanel) {
        self.log.lock().unwrap().push(Shown::Selection(panel.clone()));
    }

    fn show_recipes(&mut self, panel: &RecipePanel) {
        self.log.lock().unwrap().push(Shown::Recipes(panel.clone()));
    }

    fn set_generate_enabled(&mut self, enabled: bool) {
        self.log.lock().unwrap().push(Shown::Generate(enabled));
    }

    fn set_custom_input(&mut self, _text: &str) {}
}

#[tokio::test]
async fn test_ui_events_handled_while_request_outstanding() {
    let service = Arc::new(GatedService {
        release: Notify::new(),
    });
    let log = Arc::new(Mutex::new(Vec::new()));
    let (tx, rx) = mpsc::channel(64);

    let app = App::new(Catalog::new(["egg", "flour", "milk"]));
    let view = LogView {
        log: Arc::clone(&log),
    };
    let service_dyn: Arc<dyn RecipeService> = Arc::clone(&service) as Arc<dyn RecipeService>;
    let event_loop = runtime::run(app, service_dyn, view, rx);

    let both_tags = SelectionPanel::Tags(vec!["egg".to_string(), "milk".to_string()]);

    let driver = async {
        tx.send(UiEvent::CatalogItemClicked("egg".to_string())).await.unwrap();
        tx.send(UiEvent::GenerateClicked).await.unwrap();
        tx.send(UiEvent::CatalogItemClicked("milk".to_string())).await.unwrap();

        // The second toggle must be rendered while the request is still held
        tokio::time::timeout(Duration::from_secs(5), async {
            while !log.lock().unwrap().contains(&Shown::Selection(both_tags.clone())) {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("selection update while request outstanding");

        {
            let entries = log.lock().unwrap();
            assert!(entries.contains(&Shown::Recipes(RecipePanel::Loading)));
            assert!(!entries
                .iter()
                .any(|e| matches!(e, Shown::Recipes(RecipePanel::Grid(_)))));

            let milk_at = entries
                .iter()
                .position(|e| *e == Shown::Selection(both_tags.clone()))
                .unwrap();
            assert!(entries[milk_at..].contains(&Shown::Generate(false)));
            assert!(!entries[milk_at..].contains(&Shown::Generate(true)));
        }

        service.release.notify_one();
        drop(tx);
    };

    let ((), _view) = tokio::join!(driver, event_loop);

    let entries = log.lock().unwrap();
    assert!(matches!(
        entries.iter().rev().find(|e| matches!(e, Shown::Recipes(_))),
        Some(Shown::Recipes(RecipePanel::Grid(_)))
    ));
    assert_eq!(entries.last(), Some(&Shown::Generate(true)));
}
