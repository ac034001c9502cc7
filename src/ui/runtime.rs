use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;

use tokio::runtime::Handle;

use crate::api::{ApiClient, Credentials, UploadRequest};
use crate::config::Config;
use crate::router::Router;
use crate::store::{AppState, Store};
use crate::ui::app::{App, AppEffect, UploadJob};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::views::{ApiViewLoader, VideoAction, ViewLoader};

/// Runs [`AppEffect`]s on the Tokio runtime and posts the outcome back to the
/// UI loop. Owns the API client so credentials follow the login state.
pub struct EffectRunner {
    handle: Handle,
    api: ApiClient,
    store: Store,
    page_size: u32,
    tx: Sender<AppEvent>,
}

impl EffectRunner {
    pub fn new(
        handle: Handle,
        api: ApiClient,
        store: Store,
        page_size: u32,
        tx: Sender<AppEvent>,
    ) -> Self {
        Self {
            handle,
            api,
            store,
            page_size,
            tx,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn run(&mut self, effect: AppEffect) {
        match effect {
            AppEffect::Load(request) => {
                let loader = ApiViewLoader::new(self.api.clone(), self.store.clone(), self.page_size);
                let tx = self.tx.clone();
                self.handle.spawn(async move {
                    let result = loader
                        .load(&request)
                        .await
                        .map_err(|err| err.user_message());
                    let _ = tx.send(AppEvent::ViewLoaded {
                        generation: request.generation,
                        result,
                    });
                });
            }
            AppEffect::Login(credentials) => {
                let api = self.api.with_credentials(credentials.clone());
                let tx = self.tx.clone();
                self.handle.spawn(async move {
                    let result = api
                        .check_credentials()
                        .await
                        .map_err(|err| err.user_message().to_string());
                    let _ = tx.send(AppEvent::LoginResult {
                        credentials,
                        result,
                    });
                });
            }
            AppEffect::Logout => {
                self.api = self.api.without_credentials();
                tracing::info!("Credentials cleared");
            }
            AppEffect::VideoAction { id, action } => {
                let api = self.api.clone();
                let tx = self.tx.clone();
                self.handle.spawn(async move {
                    let result = match action {
                        VideoAction::Archive => api.archive_video(&id).await,
                        VideoAction::Unarchive => api.unarchive_video(&id).await,
                        VideoAction::Delete => api.delete_video(&id).await,
                    }
                    .map_err(|err| err.user_message().to_string());
                    let _ = tx.send(AppEvent::ActionResult { id, action, result });
                });
            }
            AppEffect::Upload(job) => {
                let api = self.api.clone();
                let tx = self.tx.clone();
                self.handle.spawn(async move {
                    let result = upload(&api, job).await;
                    let _ = tx.send(AppEvent::UploadResult(result));
                });
            }
        }
    }

    /// Adopt credentials that passed the login check.
    pub fn login(&mut self, credentials: Credentials) {
        tracing::info!(username = %credentials.username, "Logged in");
        self.api = self.api.with_credentials(credentials);
    }
}

async fn upload(api: &ApiClient, job: UploadJob) -> Result<String, String> {
    let request = UploadRequest::from_files(job.title, &job.video, job.cover.as_deref())
        .await
        .map_err(|err| err.to_string())?;
    api.upload(request)
        .await
        .map(|created| created.video.id)
        .map_err(|err| err.user_message().to_string())
}

/// Apply one event from the loop to the app.
pub fn handle_event(app: &mut App, runner: &mut EffectRunner, event: AppEvent) {
    match event {
        AppEvent::Key(key) => app.on_key(key),
        AppEvent::Tick | AppEvent::Resize(..) => {}
        AppEvent::ViewLoaded { generation, result } => app.on_view_loaded(generation, result),
        AppEvent::LoginResult {
            credentials,
            result,
        } => {
            let username = credentials.username.clone();
            if result.is_ok() {
                runner.login(credentials);
            }
            app.on_login_result(username, result);
        }
        AppEvent::ActionResult { id, action, result } => {
            app.on_action_result(&id, action, result)
        }
        AppEvent::UploadResult(result) => app.on_upload_result(result),
    }
}

/// Interactive terminal client. With `credentials` the session starts with a
/// login check instead of anonymous.
pub fn run(
    config: &Config,
    api: ApiClient,
    credentials: Option<Credentials>,
    handle: Handle,
) -> anyhow::Result<()> {
    let router = Router::with_default_routes()?;
    let store = Store::new(AppState::with_click_counter(
        config.session.initial_click_counter,
    ));
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(router, store.clone());
    if let Some(username) = &config.session.username {
        app.prefill_username(username);
    }
    let events = EventHandler::new(tick_rate);
    let mut runner = EffectRunner::new(handle, api, store, config.api.page_size, events.sender());

    if let Err(err) = app.navigate(config.ui.start_location.as_str()) {
        tracing::warn!(location = %config.ui.start_location, error = %err, "Bad start location");
        app.navigate("/")?;
    }
    if let Some(credentials) = credentials {
        app.sign_in(credentials);
    }

    loop {
        for effect in app.take_effects() {
            runner.run(effect);
        }

        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => handle_event(&mut app, &mut runner, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
