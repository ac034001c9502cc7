use voogle::api::VideoStatus;
use voogle::router::Router;
use voogle::views::{
    Miniature, MiniatureProps, MountOptions, Mounted, VideoAction, VideoMiniature,
    VideoMiniatureProps,
};

fn props(title: &str) -> VideoMiniatureProps {
    VideoMiniatureProps {
        id: "0b7d7c1a-6a4c-4f43-9d55-3b1f1c5a9e10".to_string(),
        title: title.to_string(),
        status: VideoStatus::Complete,
        ..VideoMiniatureProps::default()
    }
}

#[test]
fn renders_title() {
    let miniature = Mounted::<VideoMiniature>::mount(props("Big Buck Bunny"), MountOptions::default());
    assert_eq!(
        miniature
            .find("h3.miniature__title")
            .map(|title| title.text_content()),
        Some("Big Buck Bunny".to_string())
    );
}

#[test]
fn delete_button_hidden_until_enabled() {
    let mut miniature = Mounted::<VideoMiniature>::mount(props("Clip"), MountOptions::default());
    assert!(!miniature.exists("button.miniature__delete-button"));

    miniature.update_props(|p| p.enable_deletion = true);

    assert!(miniature.exists("button.miniature__delete-button"));
    assert_eq!(miniature.render_count(), 2);
}

#[test]
fn equal_props_skip_render() {
    let mut miniature = Mounted::<VideoMiniature>::mount(props("Clip"), MountOptions::default());
    miniature.set_props(props("Clip"));
    assert_eq!(miniature.render_count(), 1);
}

#[test]
fn archive_and_unarchive_buttons_follow_flags() {
    let mut miniature = Mounted::<VideoMiniature>::mount(
        VideoMiniatureProps {
            enable_archive: true,
            ..props("Clip")
        },
        MountOptions::default(),
    );
    assert!(miniature.exists("button[data-action='archive']"));
    assert!(!miniature.exists("button[data-action='unarchive']"));

    miniature.update_props(|p| {
        p.enable_archive = false;
        p.enable_unarchive = true;
    });
    assert!(!miniature.exists("button[data-action='archive']"));
    assert!(miniature.exists("button[data-action='unarchive']"));
}

#[test]
fn link_uses_router_when_wired() {
    let miniature = Mounted::<VideoMiniature>::mount(
        props("Clip"),
        MountOptions::default().with_router(Router::with_default_routes().unwrap()),
    );
    let link = miniature.find("a.miniature__link").unwrap();
    assert_eq!(
        link.get_attr("href"),
        Some("#/watch/0b7d7c1a-6a4c-4f43-9d55-3b1f1c5a9e10")
    );
}

#[test]
fn status_label_is_shown() {
    let miniature = Mounted::<VideoMiniature>::mount(
        VideoMiniatureProps {
            status: VideoStatus::Encoding,
            ..props("Clip")
        },
        MountOptions::default(),
    );
    assert!(miniature.text().contains("encoding"));
}

#[test]
fn action_display_matches_wire_name() {
    assert_eq!(VideoAction::Delete.to_string(), "delete");
}

#[test]
fn legacy_miniature_renders_title_and_optional_delete() {
    let mut miniature = Mounted::<Miniature>::mount(
        MiniatureProps {
            title: "a title".to_string(),
            enable_deletion: false,
        },
        MountOptions::default(),
    );
    assert!(miniature.text().contains("a title"));
    assert!(!miniature.exists("button.miniature__delete-button"));

    miniature.set_props(MiniatureProps {
        title: "a title".to_string(),
        enable_deletion: true,
    });
    assert!(miniature.exists("button.miniature__delete-button"));
}
