use egui_kittest::Harness;
use repute_ui::ReputeApp;
use repute_ui::state::State;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    #[allow(dead_code)]
    pub mock_server: MockServer,
    harness: Harness<'a, ReputeApp>,
}

/// Starts the mock server. Mount mocks on it before building the app with
/// [`TestCtx::with_server`]: the harness runs its first frame (and with it
/// the mount fetch) at construction.
pub async fn start_server() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    MockServer::start().await
}

impl<'a> TestCtx<'a> {
    /// App pointed at an already-configured mock server.
    pub fn with_server(mock_server: MockServer) -> TestCtx<'a> {
        let state = State::test(mock_server.uri());
        let app = ReputeApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        TestCtx {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, ReputeApp> {
        &mut self.harness
    }

    #[allow(dead_code)]
    pub fn harness(&self) -> &Harness<'a, ReputeApp> {
        &self.harness
    }

    /// Runs frames with small sleeps so in-flight `ehttp` requests can land
    /// and be polled into state.
    pub async fn settle(&mut self) {
        for _ in 0..10 {
            self.harness.step();
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }
    }
}

/// Wheel-scrolls the app viewport down to the bottom of the list. The
/// oversized delta clamps to the content end, which is what drives the
/// load-more trigger in the panel; the extra steps let egui's smoothed
/// scroll input drain fully before the caller continues.
#[allow(dead_code)]
pub fn scroll_to_bottom(harness: &mut Harness<'_, ReputeApp>) {
    let center = harness.ctx.screen_rect().center();
    harness
        .input_mut()
        .events
        .push(egui::Event::PointerMoved(center));
    harness.step();
    harness.input_mut().events.push(egui::Event::MouseWheel {
        unit: egui::MouseWheelUnit::Point,
        delta: egui::vec2(0.0, -10_000.0),
        modifiers: egui::Modifiers::NONE,
    });
    for _ in 0..10 {
        harness.step();
    }
}

/// `/users` response body with one item per display name.
pub fn users_body(names: &[&str]) -> serde_json::Value {
    json!({
        "items": names
            .iter()
            .map(|name| json!({
                "display_name": name,
                "profile_image": format!("https://example.com/{name}.png"),
                "reputation": 100
            }))
            .collect::<Vec<_>>(),
        "has_more": true,
        "quota_remaining": 300
    })
}

/// Mounts a `/users` mock for one page, matching the fixed query parameters
/// the app is expected to send.
#[allow(dead_code)]
pub async fn mount_users_page(server: &MockServer, page: u32, names: &[&str]) {
    users_mock(page)
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body(names)))
        .mount(server)
        .await;
}

/// A `GET /users` mock builder for the given page.
pub fn users_mock(page: u32) -> wiremock::MockBuilder {
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("page", page.to_string()))
        .and(query_param("order", "desc"))
        .and(query_param("sort", "reputation"))
        .and(query_param("site", "stackoverflow"))
}
