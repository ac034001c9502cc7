//! Video thumbnails.

use std::fmt;

use super::{Component, Element, RenderContext};
use crate::api::VideoStatus;
use crate::router::RouteParams;

/// A management action on a single video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoAction {
    Archive,
    Unarchive,
    Delete,
}

impl VideoAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoAction::Archive => "archive",
            VideoAction::Unarchive => "unarchive",
            VideoAction::Delete => "delete",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "archive" => Some(VideoAction::Archive),
            "unarchive" => Some(VideoAction::Unarchive),
            "delete" => Some(VideoAction::Delete),
            _ => None,
        }
    }

    fn button_class(&self) -> &'static str {
        match self {
            VideoAction::Archive => "miniature__archive-button",
            VideoAction::Unarchive => "miniature__unarchive-button",
            VideoAction::Delete => "miniature__delete-button",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            VideoAction::Archive => "Archive",
            VideoAction::Unarchive => "Unarchive",
            VideoAction::Delete => "Delete",
        }
    }
}

impl fmt::Display for VideoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoMiniatureProps {
    pub id: String,
    pub title: String,
    pub status: VideoStatus,
    pub enable_archive: bool,
    pub enable_unarchive: bool,
    pub enable_deletion: bool,
}

/// Thumbnail linking to the player, with optional management buttons.
pub struct VideoMiniature;

impl Component for VideoMiniature {
    type Props = VideoMiniatureProps;

    fn render(props: &VideoMiniatureProps, context: &RenderContext) -> Element {
        let mut params = RouteParams::new();
        params.insert("id".to_string(), props.id.clone());
        let href = context.href_for(
            "VideoPlayerPage",
            &params,
            &format!("/watch/{}", props.id),
        );

        let button = |action: VideoAction| {
            Element::new("button")
                .class("miniature__button")
                .class(action.button_class())
                .attr("type", "button")
                .attr("data-action", action.as_str())
                .attr("data-id", props.id.clone())
                .text(action.label())
        };

        Element::new("div")
            .class("miniature")
            .attr("data-id", props.id.clone())
            .child(
                Element::new("a")
                    .class("miniature__link")
                    .attr("href", href)
                    .child(Element::new("h3").class("miniature__title").text(props.title.clone())),
            )
            .child(Element::new("span").class("miniature__status").text(props.status.label()))
            .child_if(props.enable_archive, || button(VideoAction::Archive))
            .child_if(props.enable_unarchive, || button(VideoAction::Unarchive))
            .child_if(props.enable_deletion, || button(VideoAction::Delete))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MiniatureProps {
    pub title: String,
    pub enable_deletion: bool,
}

/// Title-only thumbnail used before videos carried a status.
pub struct Miniature;

impl Component for Miniature {
    type Props = MiniatureProps;

    fn render(props: &MiniatureProps, _context: &RenderContext) -> Element {
        Element::new("div")
            .class("miniature")
            .child(Element::new("h3").class("miniature__title").text(props.title.clone()))
            .child_if(props.enable_deletion, || {
                Element::new("button")
                    .class("miniature__delete-button")
                    .attr("type", "button")
                    .attr("data-action", "delete")
                    .text("Delete")
            })
    }
}
