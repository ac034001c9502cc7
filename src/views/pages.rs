//! Page view-models.
//!
//! Eager pages are built straight from the route resolution. Lazy pages carry
//! data fetched by a [`ViewLoader`](super::ViewLoader) and only exist once the
//! load has resolved.

use super::miniature::{VideoMiniature, VideoMiniatureProps};
use super::session::{Session, SessionFormProps};
use super::{Component, Element, RenderContext, ViewId};
use crate::api::{Video, VideoStatus};
use crate::router::{RouteParams, Resolution};

/// Data behind the player page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoPlayerModel {
    pub id: String,
    pub title: String,
    pub status: VideoStatus,
    pub upload_date_unix: i64,
    /// HLS master playlist.
    pub stream_url: String,
}

/// Data behind the gallery page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryModel {
    pub videos: Vec<Video>,
    /// Archived videos; only fetched for logged-in users.
    pub archived: Vec<Video>,
    pub page: u32,
    pub last_page: Option<u32>,
}

impl GalleryModel {
    /// Videos in display order: published first, then archived.
    pub fn entries(&self) -> impl Iterator<Item = &Video> {
        self.videos.iter().chain(self.archived.iter())
    }

    pub fn len(&self) -> usize {
        self.videos.len() + self.archived.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Data behind the upload page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadModel {
    /// Encoder services reported by the backend.
    pub transformers: Vec<String>,
}

/// Upload form field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadFormProps {
    pub title: String,
    /// Path of the video file on disk.
    pub file: String,
    pub cover: String,
    pub focused: Option<UploadField>,
    pub submitting: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadField {
    Title,
    File,
    Cover,
    Submit,
}

impl UploadField {
    pub fn next(self) -> Self {
        match self {
            UploadField::Title => UploadField::File,
            UploadField::File => UploadField::Cover,
            UploadField::Cover => UploadField::Submit,
            UploadField::Submit => UploadField::Title,
        }
    }
}

/// Transient interaction state owned by the shell, not the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interaction {
    pub session_form: SessionFormProps,
    pub upload_form: UploadFormProps,
    /// Highlighted gallery entry.
    pub selected: usize,
}

/// A mounted page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    NotFound { path: String },
    VideoPlayer(VideoPlayerModel),
    Upload(UploadModel),
    Gallery(GalleryModel),
}

impl Page {
    /// Build an eager page. Lazy views return `None`.
    pub fn eager(resolution: &Resolution) -> Option<Page> {
        match resolution.view {
            ViewId::Home => Some(Page::Home),
            ViewId::Login => Some(Page::Login),
            ViewId::NotFound => Some(Page::NotFound {
                path: resolution.path.clone(),
            }),
            ViewId::VideoPlayer | ViewId::Upload | ViewId::Gallery => None,
        }
    }

    pub fn view(&self) -> ViewId {
        match self {
            Page::Home => ViewId::Home,
            Page::Login => ViewId::Login,
            Page::NotFound { .. } => ViewId::NotFound,
            Page::VideoPlayer(_) => ViewId::VideoPlayer,
            Page::Upload(_) => ViewId::Upload,
            Page::Gallery(_) => ViewId::Gallery,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Page::Home => "Home".to_string(),
            Page::Login => "Log in".to_string(),
            Page::NotFound { .. } => "Not found".to_string(),
            Page::VideoPlayer(model) => model.title.clone(),
            Page::Upload(_) => "Upload".to_string(),
            Page::Gallery(_) => "Gallery".to_string(),
        }
    }

    pub fn render(&self, context: &RenderContext, interaction: &Interaction) -> Element {
        let body = match self {
            Page::Home => render_home(context),
            Page::Login => Session::render(&interaction.session_form, context),
            Page::NotFound { path } => Element::new("div")
                .class("not-found")
                .child(Element::new("h1").text("404"))
                .child(Element::new("p").text(format!("Nothing lives at {}", path)))
                .child(link(context, "HomePage", "/", "Back home")),
            Page::VideoPlayer(model) => render_player(model),
            Page::Upload(model) => render_upload(model, context, &interaction.upload_form),
            Page::Gallery(model) => render_gallery(model, context, interaction.selected),
        };

        Element::new("main")
            .class("page")
            .attr("data-view", self.view().name())
            .child(body)
    }
}

fn link(context: &RenderContext, name: &str, path: &str, label: &str) -> Element {
    Element::new("a")
        .class("nav__link")
        .attr("href", context.href_for(name, &RouteParams::new(), path))
        .text(label)
}

fn render_home(context: &RenderContext) -> Element {
    let logged_in = context.is_logged_in();
    let nav = Element::new("nav")
        .class("nav")
        .child(link(context, "GalleryPage", "/gallery", "Gallery"))
        .child_if(logged_in, || link(context, "UploadPage", "/upload", "Upload"))
        .child_if(!logged_in, || link(context, "LoginPage", "/login", "Log in"));

    Element::new("div")
        .class("home")
        .child(Element::new("h1").text("Voogle"))
        .child(nav)
        .child(
            Element::new("p")
                .class("home__counter")
                .text(format!("Click counter: {}", context.state.counter.click_counter)),
        )
}

fn render_player(model: &VideoPlayerModel) -> Element {
    let body = if model.status.is_playable() {
        Element::new("video")
            .class("player__video")
            .attr("src", model.stream_url.clone())
            .attr("type", "application/x-mpegURL")
            .text(model.stream_url.clone())
    } else {
        Element::new("p")
            .class("player__unavailable")
            .text(format!("This video is not ready ({})", model.status.label()))
    };

    Element::new("div")
        .class("player")
        .attr("data-id", model.id.clone())
        .child(Element::new("h1").class("player__title").text(model.title.clone()))
        .child(
            Element::new("p")
                .class("player__meta")
                .attr("data-uploaded", model.upload_date_unix.to_string())
                .text(format!("Status: {}", model.status.label())),
        )
        .child(body)
}

fn render_upload(model: &UploadModel, context: &RenderContext, form: &UploadFormProps) -> Element {
    if !context.is_logged_in() {
        return Element::new("div")
            .class("upload")
            .child(Element::new("p").text("You must be logged in to upload videos."))
            .child(link(context, "LoginPage", "/login", "Log in"));
    }

    let field = |field: UploadField, name: &str, value: &str, input_type: &str| {
        let el = Element::new("input")
            .class("upload__input")
            .attr("type", input_type)
            .attr("name", name)
            .attr("value", value);
        if form.focused == Some(field) {
            el.attr("data-focused", name)
        } else {
            el
        }
    };

    let mut submit = Element::new("button")
        .class("upload__submit")
        .attr("type", "submit")
        .text(if form.submitting { "Uploading..." } else { "Upload" });
    if form.focused == Some(UploadField::Submit) {
        submit = submit.attr("data-focused", "submit");
    }

    let services = Element::new("ul").class("upload__services").children_from(
        model
            .transformers
            .iter()
            .map(|name| Element::new("li").text(name.clone())),
    );

    Element::new("div")
        .class("upload")
        .child(
            Element::new("form")
                .class("upload__form")
                .child(field(UploadField::Title, "title", &form.title, "text"))
                .child(field(UploadField::File, "video", &form.file, "file"))
                .child(field(UploadField::Cover, "cover", &form.cover, "file"))
                .child(submit),
        )
        .child_if(form.message.is_some(), || {
            Element::new("p")
                .class("upload__message")
                .text(form.message.clone().unwrap_or_default())
        })
        .child(Element::new("h2").text("Encoders"))
        .child(services)
}

fn render_gallery(model: &GalleryModel, context: &RenderContext, selected: usize) -> Element {
    let logged_in = context.is_logged_in();
    let miniatures = model.entries().enumerate().map(|(index, video)| {
        let archived = video.status == VideoStatus::Archive;
        let props = VideoMiniatureProps {
            id: video.id.clone(),
            title: video.title.clone(),
            status: video.status,
            enable_archive: logged_in && !archived,
            enable_unarchive: logged_in && archived,
            enable_deletion: logged_in,
        };
        let miniature = VideoMiniature::render(&props, context);
        if index == selected {
            miniature.class("miniature--selected")
        } else {
            miniature
        }
    });

    let pages = match model.last_page {
        Some(last) => format!("Page {} of {}", model.page, last),
        None => format!("Page {}", model.page),
    };

    Element::new("div")
        .class("gallery")
        .child(Element::new("h1").text("Gallery"))
        .child_if(model.is_empty(), || {
            Element::new("p").class("gallery__empty").text("No videos yet.")
        })
        .child(Element::new("div").class("gallery__grid").children_from(miniatures))
        .child(Element::new("p").class("gallery__pages").text(pages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Router;
    use crate::store::AppState;

    fn logged_in() -> RenderContext {
        let mut state = AppState::default();
        state.session.is_logged_in = true;
        RenderContext::new(state, Some(Router::with_default_routes().unwrap()))
    }

    fn video(id: &str, status: VideoStatus) -> Video {
        Video {
            id: id.to_string(),
            title: format!("Video {}", id),
            status,
            uploaded_at: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn eager_pages_come_from_resolution() {
        let router = Router::with_default_routes().unwrap();
        assert_eq!(Page::eager(&router.resolve("/").unwrap()), Some(Page::Home));
        assert_eq!(
            Page::eager(&router.resolve("/nope").unwrap()),
            Some(Page::NotFound {
                path: "/nope".to_string()
            })
        );
        assert_eq!(Page::eager(&router.resolve("/gallery").unwrap()), None);
    }

    #[test]
    fn home_hides_upload_link_when_logged_out() {
        let tree = Page::Home.render(&RenderContext::default(), &Interaction::default());
        assert!(!tree.exists("a[href='#/upload']"));
        assert!(tree.text_content().contains("Click counter: 20"));

        let tree = Page::Home.render(&logged_in(), &Interaction::default());
        assert!(tree.exists("a[href='#/upload']"));
    }

    #[test]
    fn gallery_buttons_follow_status_and_session() {
        let model = GalleryModel {
            videos: vec![video("a", VideoStatus::Complete)],
            archived: vec![video("b", VideoStatus::Archive)],
            page: 1,
            last_page: Some(1),
        };
        let page = Page::Gallery(model);

        let tree = page.render(&RenderContext::default(), &Interaction::default());
        assert_eq!(tree.count("div.miniature"), 2);
        assert!(!tree.exists("button.miniature__delete-button"));

        let tree = page.render(&logged_in(), &Interaction::default());
        assert_eq!(tree.count("button.miniature__archive-button"), 1);
        assert_eq!(tree.count("button.miniature__unarchive-button"), 1);
        assert_eq!(tree.count("button.miniature__delete-button"), 2);
        assert!(tree.exists("div.miniature--selected"));
    }

    #[test]
    fn player_without_stream_shows_status() {
        let page = Page::VideoPlayer(VideoPlayerModel {
            id: "x".into(),
            title: "Clip".into(),
            status: VideoStatus::Encoding,
            upload_date_unix: 0,
            stream_url: "http://host/api/v1/videos/x/streams/master.m3u8".into(),
        });
        let tree = page.render(&RenderContext::default(), &Interaction::default());
        assert!(!tree.exists("video"));
        assert!(tree.text_content().contains("encoding"));
    }

    #[test]
    fn upload_requires_login() {
        let page = Page::Upload(UploadModel::default());
        let tree = page.render(&RenderContext::default(), &Interaction::default());
        assert!(!tree.exists("form"));
        let tree = page.render(&logged_in(), &Interaction::default());
        assert!(tree.exists("input[name='video']"));
    }
}
