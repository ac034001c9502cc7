use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::api::Credentials;
use crate::mvi::Reducer;
use crate::router::{HashHistory, NavigationTarget, Resolution, RouteError, Router};
use crate::store::Store;
use crate::ui::load::{LoadIntent, LoadReducer, ViewLoadState};
use crate::views::{
    Element, FormField, Interaction, LoadRequest, Page, RenderContext, UploadField, VideoAction,
    ViewId,
};

/// Side effects requested by the shell. The runtime executes them off the UI
/// thread and reports back through [`AppEvent`](crate::ui::events::AppEvent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEffect {
    Load(LoadRequest),
    Login(Credentials),
    Logout,
    VideoAction { id: String, action: VideoAction },
    Upload(UploadJob),
}

/// Files and metadata of an upload submitted from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadJob {
    pub title: String,
    pub video: PathBuf,
    pub cover: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Page,
    AddressBar,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    router: Router,
    store: Store,
    history: HashHistory,
    /// Current view load state (MVI pattern).
    load: ViewLoadState,
    /// Bumped on every navigation; tags load requests.
    generation: u64,
    interaction: Interaction,
    address: String,
    status: Option<String>,
    effects: Vec<AppEffect>,
}

impl App {
    pub fn new(router: Router, store: Store) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Page,
            router,
            store,
            history: HashHistory::default(),
            load: ViewLoadState::default(),
            generation: 0,
            interaction: Interaction::default(),
            address: String::new(),
            status: None,
            effects: Vec::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn history(&self) -> &HashHistory {
        &self.history
    }

    pub fn load_state(&self) -> &ViewLoadState {
        &self.load
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Text typed into the address bar.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Pre-fill the login form, e.g. from the config file.
    pub fn prefill_username(&mut self, username: &str) {
        self.interaction.session_form.username = username.to_string();
    }

    /// Drain side effects requested since the last call.
    pub fn take_effects(&mut self) -> Vec<AppEffect> {
        std::mem::take(&mut self.effects)
    }

    pub fn context(&self) -> RenderContext {
        RenderContext::new(self.store.state(), Some(self.router.clone()))
    }

    /// Render the resolved page, if any.
    pub fn render_page(&self) -> Option<Element> {
        self.load
            .page()
            .map(|page| page.render(&self.context(), &self.interaction))
    }

    /// Navigate and record the location in history.
    pub fn navigate(&mut self, target: impl Into<NavigationTarget>) -> Result<Resolution, RouteError> {
        let resolution = self.router.resolve_target(&target.into())?;
        self.history.push(&resolution.path);
        self.mount(&resolution);
        Ok(resolution)
    }

    pub fn back(&mut self) {
        if let Some(path) = self.history.back().map(str::to_string) {
            self.mount_path(&path);
        }
    }

    pub fn forward(&mut self) {
        if let Some(path) = self.history.forward().map(str::to_string) {
            self.mount_path(&path);
        }
    }

    /// Retry a failed load, or reload the current location.
    pub fn retry(&mut self) {
        if matches!(self.load, ViewLoadState::Failed { .. }) {
            self.generation += 1;
            dispatch_mvi!(self, load, LoadReducer, LoadIntent::Retry {
                generation: self.generation
            });
            if let ViewLoadState::Pending { request } = &self.load {
                tracing::info!(path = %request.path, generation = request.generation, "Retrying view load");
                self.effects.push(AppEffect::Load(request.clone()));
            }
        } else {
            let path = self.history.current().to_string();
            self.mount_path(&path);
        }
    }

    fn mount_path(&mut self, path: &str) {
        match self.router.resolve(path) {
            Ok(resolution) => self.mount(&resolution),
            Err(err) => self.status = Some(err.to_string()),
        }
    }

    fn mount(&mut self, resolution: &Resolution) {
        self.generation += 1;
        self.interaction.selected = 0;
        self.focus = Focus::Page;
        match Page::eager(resolution) {
            Some(page) => {
                dispatch_mvi!(self, load, LoadReducer, LoadIntent::Show {
                    generation: self.generation,
                    page
                });
            }
            None => {
                let request = LoadRequest::from_resolution(self.generation, resolution);
                dispatch_mvi!(self, load, LoadReducer, LoadIntent::Start {
                    request: request.clone()
                });
                self.effects.push(AppEffect::Load(request));
            }
        }

        match resolution.view {
            ViewId::Login => {
                self.interaction.session_form.focused = Some(FormField::Username);
            }
            ViewId::Upload => {
                self.interaction.upload_form.focused = Some(UploadField::Title);
            }
            _ => {}
        }
        tracing::info!(
            path = %resolution.path,
            route = %resolution.route_name,
            generation = self.generation,
            "Navigated"
        );
    }

    pub fn on_view_loaded(&mut self, generation: u64, result: Result<Page, String>) {
        match result {
            Ok(page) => {
                dispatch_mvi!(self, load, LoadReducer, LoadIntent::Loaded { generation, page });
            }
            Err(message) => {
                tracing::warn!(generation, error = %message, "View load failed");
                dispatch_mvi!(self, load, LoadReducer, LoadIntent::Failed {
                    generation,
                    message
                });
            }
        }
    }

    pub fn on_login_result(&mut self, username: String, result: Result<(), String>) {
        let form = &mut self.interaction.session_form;
        form.submitting = false;
        match result {
            Ok(()) => {
                form.password.clear();
                form.error = None;
                self.store.set_log_state(true);
                self.store.set_user(Some(username.clone()));
                self.status = Some(format!("Logged in as {}", username));
                if self.load.page().map(Page::view) == Some(ViewId::Login) {
                    if let Err(err) = self.navigate("/") {
                        self.status = Some(err.to_string());
                    }
                } else {
                    self.retry_current();
                }
            }
            Err(message) => {
                form.error = Some(message);
                self.store.set_log_state(false);
            }
        }
    }

    pub fn logout(&mut self) {
        if !self.store.state().session.is_logged_in {
            return;
        }
        self.store.set_log_state(false);
        self.store.set_user(None);
        self.effects.push(AppEffect::Logout);
        self.status = Some("Logged out".to_string());
        self.retry_current();
    }

    pub fn on_action_result(&mut self, id: &str, action: VideoAction, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.status = Some(format!("{} {}: done", action, id));
                self.retry_current();
            }
            Err(message) => self.status = Some(format!("{} {}: {}", action, id, message)),
        }
    }

    pub fn on_upload_result(&mut self, result: Result<String, String>) {
        let form = &mut self.interaction.upload_form;
        form.submitting = false;
        match result {
            Ok(id) => {
                form.title.clear();
                form.file.clear();
                form.cover.clear();
                form.message = Some(format!("Uploaded video {}", id));
            }
            Err(message) => form.message = Some(message),
        }
    }

    /// Reload the current location without touching history.
    fn retry_current(&mut self) {
        let path = self.history.current().to_string();
        self.mount_path(&path);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => self.request_quit(),
                KeyCode::Char('o') => {
                    self.focus = Focus::AddressBar;
                    self.address = self.history.current_href();
                }
                KeyCode::Char('b') => self.back(),
                KeyCode::Char('f') => self.forward(),
                KeyCode::Char('r') => self.retry(),
                KeyCode::Char('l') => self.logout(),
                _ => {}
            }
            return;
        }

        if self.focus == Focus::AddressBar {
            self.on_address_key(key);
            return;
        }

        let logged_in = self.store.state().session.is_logged_in;
        match self.load.page().map(Page::view) {
            Some(ViewId::Login) => self.on_login_key(key),
            Some(ViewId::Upload) if logged_in => self.on_upload_key(key),
            Some(_) => self.on_browse_key(key),
            None => {
                if key.code == KeyCode::Esc {
                    self.back();
                }
            }
        }
    }

    fn on_address_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.focus = Focus::Page,
            KeyCode::Enter => {
                let location = std::mem::take(&mut self.address);
                self.focus = Focus::Page;
                if let Err(err) = self.navigate(location.as_str()) {
                    self.status = Some(err.to_string());
                }
            }
            KeyCode::Backspace => {
                self.address.pop();
            }
            KeyCode::Char(c) => self.address.push(c),
            _ => {}
        }
    }

    fn on_login_key(&mut self, key: KeyEvent) {
        let form = &mut self.interaction.session_form;
        let focused = form.focused.unwrap_or(FormField::Username);
        match key.code {
            KeyCode::Esc => self.back(),
            KeyCode::Tab | KeyCode::Down => form.focused = Some(focused.next()),
            KeyCode::BackTab | KeyCode::Up => {
                form.focused = Some(focused.next().next());
            }
            KeyCode::Backspace => {
                match focused {
                    FormField::Username => form.username.pop(),
                    FormField::Password => form.password.pop(),
                    FormField::Submit => None,
                };
            }
            KeyCode::Char(c) => match focused {
                FormField::Username => form.username.push(c),
                FormField::Password => form.password.push(c),
                FormField::Submit => {}
            },
            KeyCode::Enter => self.submit_login(),
            _ => {}
        }
    }

    /// Log in with credentials given up front, through the same check as
    /// the login form.
    pub fn sign_in(&mut self, credentials: Credentials) {
        let form = &mut self.interaction.session_form;
        form.username = credentials.username;
        form.password = credentials.password;
        self.submit_login();
    }

    fn submit_login(&mut self) {
        let form = &mut self.interaction.session_form;
        if form.submitting {
            return;
        }
        let username = form.username.trim().to_string();
        if username.is_empty() || form.password.is_empty() {
            form.error = Some("Username and password are required".to_string());
            return;
        }
        form.submitting = true;
        form.error = None;
        self.effects
            .push(AppEffect::Login(Credentials::new(username, form.password.clone())));
    }

    fn on_upload_key(&mut self, key: KeyEvent) {
        let form = &mut self.interaction.upload_form;
        let focused = form.focused.unwrap_or(UploadField::Title);
        let field = match focused {
            UploadField::Title => Some(&mut form.title),
            UploadField::File => Some(&mut form.file),
            UploadField::Cover => Some(&mut form.cover),
            UploadField::Submit => None,
        };
        match key.code {
            KeyCode::Esc => self.back(),
            KeyCode::Tab | KeyCode::Down => form.focused = Some(focused.next()),
            KeyCode::BackTab | KeyCode::Up => {
                form.focused = Some(focused.next().next().next());
            }
            KeyCode::Backspace => {
                if let Some(field) = field {
                    field.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = field {
                    field.push(c);
                }
            }
            KeyCode::Enter => self.submit_upload(),
            _ => {}
        }
    }

    fn submit_upload(&mut self) {
        let form = &mut self.interaction.upload_form;
        if form.submitting {
            return;
        }
        if form.title.trim().is_empty() || form.file.trim().is_empty() {
            form.message = Some("Title and video file are required".to_string());
            return;
        }
        let cover = form.cover.trim();
        let job = UploadJob {
            title: form.title.trim().to_string(),
            video: PathBuf::from(form.file.trim()),
            cover: (!cover.is_empty()).then(|| PathBuf::from(cover)),
        };
        form.submitting = true;
        form.message = None;
        self.effects.push(AppEffect::Upload(job));
    }

    /// Pages without form fields: move between links, follow them, act on
    /// gallery entries.
    fn on_browse_key(&mut self, key: KeyEvent) {
        let links = self.links();
        match key.code {
            KeyCode::Esc => self.back(),
            KeyCode::Down | KeyCode::Tab if !links.is_empty() => {
                self.interaction.selected = (self.interaction.selected + 1) % links.len();
            }
            KeyCode::Up | KeyCode::BackTab if !links.is_empty() => {
                self.interaction.selected =
                    (self.interaction.selected + links.len() - 1) % links.len();
            }
            KeyCode::Enter => {
                if let Some(href) = links.get(self.interaction.selected) {
                    if let Err(err) = self.navigate(href.as_str()) {
                        self.status = Some(err.to_string());
                    }
                }
            }
            KeyCode::Char('+') | KeyCode::Char('-') if self.load.page() == Some(&Page::Home) => {
                let current = self.store.state().counter.click_counter;
                let next = if key.code == KeyCode::Char('+') {
                    current.saturating_add(1)
                } else {
                    current.saturating_sub(1)
                };
                if let Err(err) = self.store.set_click_counter(&next.to_string()) {
                    self.status = Some(err.to_string());
                }
            }
            KeyCode::Char(c) => {
                let action = match c {
                    'a' => Some(VideoAction::Archive),
                    'u' => Some(VideoAction::Unarchive),
                    'd' => Some(VideoAction::Delete),
                    _ => None,
                };
                if let Some(action) = action {
                    self.request_video_action(action);
                }
            }
            _ => {}
        }
    }

    /// Hrefs of the links on the current page, in document order.
    pub fn links(&self) -> Vec<String> {
        self.render_page()
            .map(|tree| {
                tree.descendants()
                    .filter(|el| el.tag() == "a")
                    .filter_map(|el| el.get_attr("href").map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Request `action` on the selected gallery entry if its button is shown.
    fn request_video_action(&mut self, action: VideoAction) {
        let Some(tree) = self.render_page() else {
            return;
        };
        let selector = format!("button[data-action='{}']", action.as_str());
        let Some(miniature) = tree
            .descendants()
            .filter(|el| el.has_class("miniature"))
            .nth(self.interaction.selected)
        else {
            return;
        };
        let Some(id) = miniature
            .find(&selector)
            .and_then(|button| button.get_attr("data-id"))
        else {
            self.status = Some(format!("Cannot {} this video", action));
            return;
        };
        self.effects.push(AppEffect::VideoAction {
            id: id.to_string(),
            action,
        });
    }
}
