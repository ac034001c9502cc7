use voogle::router::{
    HashHistory, LoadStrategy, NavigationTarget, Route, RouteError, RouteParams, RouteTable, Router,
};
use voogle::views::ViewId;

fn router() -> Router {
    Router::with_default_routes().expect("default routes are valid")
}

#[test]
fn default_table_has_every_page() {
    let router = router();
    let names: Vec<&str> = router.routes().iter().map(|r| r.name.as_str()).collect();
    for expected in [
        "HomePage",
        "VideoPlayerPage",
        "UploadPage",
        "GalleryPage",
        "LoginPage",
        "NotFound",
    ] {
        assert!(names.contains(&expected), "missing route {}", expected);
    }
    assert_eq!(names.last(), Some(&"NotFound"));
}

#[test]
fn home_and_login_are_eager() {
    let router = router();
    let home = router.resolve("/").unwrap();
    assert_eq!(home.route_name, "HomePage");
    assert_eq!(home.view, ViewId::Home);
    assert_eq!(home.strategy, LoadStrategy::Eager);

    let login = router.resolve("/login").unwrap();
    assert_eq!(login.view, ViewId::Login);
    assert!(!login.is_lazy());
}

#[test]
fn watch_route_binds_id_and_is_lazy() {
    let resolution = router().resolve("/watch/123").unwrap();
    assert_eq!(resolution.route_name, "VideoPlayerPage");
    assert_eq!(resolution.view, ViewId::VideoPlayer);
    assert_eq!(resolution.param("id"), Some("123"));
    assert!(resolution.is_lazy());
}

#[test]
fn upload_and_gallery_are_lazy() {
    let router = router();
    assert!(router.resolve("/upload").unwrap().is_lazy());
    assert!(router.resolve("/gallery").unwrap().is_lazy());
}

#[test]
fn every_default_path_resolves_to_its_view() {
    let router = router();
    let cases = [
        ("/", "HomePage", ViewId::Home, LoadStrategy::Eager),
        ("/watch/123", "VideoPlayerPage", ViewId::VideoPlayer, LoadStrategy::Lazy),
        ("/upload", "UploadPage", ViewId::Upload, LoadStrategy::Lazy),
        ("/gallery", "GalleryPage", ViewId::Gallery, LoadStrategy::Lazy),
        ("/login", "LoginPage", ViewId::Login, LoadStrategy::Eager),
        ("/does/not/exist", "NotFound", ViewId::NotFound, LoadStrategy::Eager),
    ];
    for (path, name, view, strategy) in cases {
        let resolution = router.resolve(path).unwrap();
        assert_eq!(resolution.route_name, name, "path {}", path);
        assert_eq!(resolution.view, view, "path {}", path);
        assert_eq!(resolution.strategy, strategy, "path {}", path);
    }
    assert_eq!(router.routes().len(), cases.len());
}

#[test]
fn query_and_trailing_slash_are_ignored() {
    let resolution = router().resolve("/watch/abc/?t=42").unwrap();
    assert_eq!(resolution.path, "/watch/abc");
    assert_eq!(resolution.param("id"), Some("abc"));
}

#[test]
fn unknown_path_falls_through_to_not_found() {
    let resolution = router().resolve("/nope/deeper").unwrap();
    assert_eq!(resolution.view, ViewId::NotFound);
    assert_eq!(resolution.param("path"), Some("nope/deeper"));
}

#[test]
fn watch_without_id_is_not_found() {
    let resolution = router().resolve("/watch").unwrap();
    assert_eq!(resolution.view, ViewId::NotFound);
}

#[test]
fn table_without_catch_all_reports_not_found() {
    let table = RouteTable::builder()
        .route(Route::eager("/", "HomePage", ViewId::Home).unwrap())
        .build()
        .unwrap();
    let err = Router::new(table).resolve("/missing").unwrap_err();
    assert_eq!(
        err,
        RouteError::NotFound {
            path: "/missing".to_string()
        }
    );
}

#[test]
fn location_forms_resolve_identically() {
    let router = router();
    for location in [
        "#/watch/42",
        "/watch/42",
        "http://localhost:8080/#/watch/42",
    ] {
        let resolution = router
            .resolve_target(&NavigationTarget::location(location))
            .unwrap();
        assert_eq!(resolution.param("id"), Some("42"), "location {}", location);
    }
}

#[test]
fn named_navigation_builds_path() {
    let router = router();
    let resolution = router
        .resolve_target(&NavigationTarget::named("VideoPlayerPage", [("id", "7")]))
        .unwrap();
    assert_eq!(resolution.path, "/watch/7");
    assert_eq!(resolution.href(), "#/watch/7");
}

#[test]
fn named_navigation_requires_params() {
    let err = router()
        .path_for("VideoPlayerPage", &RouteParams::new())
        .unwrap_err();
    assert!(matches!(err, RouteError::MissingParam { .. }));
}

#[test]
fn unknown_name_is_rejected() {
    let err = router()
        .href_for("AdminPage", &RouteParams::new())
        .unwrap_err();
    assert_eq!(
        err,
        RouteError::UnknownName {
            name: "AdminPage".to_string()
        }
    );
}

#[test]
fn duplicate_names_are_rejected() {
    let err = RouteTable::builder()
        .route(Route::eager("/a", "Page", ViewId::Home).unwrap())
        .route(Route::eager("/b", "Page", ViewId::Login).unwrap())
        .build()
        .unwrap_err();
    assert!(matches!(err, RouteError::DuplicateName { .. }));
}

#[test]
fn colliding_patterns_are_rejected() {
    let err = RouteTable::builder()
        .route(Route::lazy("/watch/:id", "A", ViewId::VideoPlayer).unwrap())
        .route(Route::lazy("/watch/:slug", "B", ViewId::VideoPlayer).unwrap())
        .build()
        .unwrap_err();
    assert!(matches!(err, RouteError::Collision { .. }));
}

#[test]
fn static_segment_beats_parameter_regardless_of_order() {
    let table = RouteTable::builder()
        .route(Route::lazy("/watch/:id", "Player", ViewId::VideoPlayer).unwrap())
        .route(Route::eager("/watch/latest", "Latest", ViewId::Home).unwrap())
        .build()
        .unwrap();
    let router = Router::new(table);
    assert_eq!(router.resolve("/watch/latest").unwrap().route_name, "Latest");
    assert_eq!(router.resolve("/watch/other").unwrap().route_name, "Player");
}

#[test]
fn unrelated_route_does_not_disturb_specificity() {
    let table = RouteTable::builder()
        .route(Route::lazy("/watch/:id/:quality", "Quality", ViewId::VideoPlayer).unwrap())
        .route(Route::lazy("/upload", "UploadPage", ViewId::Upload).unwrap())
        .route(Route::lazy("/watch/:id/master", "Master", ViewId::VideoPlayer).unwrap())
        .build()
        .unwrap();
    let router = Router::new(table);
    assert_eq!(router.resolve("/watch/1/master").unwrap().route_name, "Master");
    assert_eq!(router.resolve("/watch/1/720p").unwrap().route_name, "Quality");
    assert_eq!(router.resolve("/upload").unwrap().route_name, "UploadPage");
}

#[test]
fn history_and_resolve_agree_on_trailing_fragment() {
    let router = router();
    let direct = router.resolve("/upload#top").unwrap();
    let via_location = router
        .resolve_target(&NavigationTarget::location("/upload#top"))
        .unwrap();
    assert_eq!(direct.route_name, "UploadPage");
    assert_eq!(via_location.route_name, "UploadPage");
    assert_eq!(HashHistory::new("/upload#top").current(), "/upload");
}

#[test]
fn history_tracks_hash_locations() {
    let mut history = HashHistory::new("#/");
    history.push("#/gallery");
    history.push("http://host/#/watch/1");
    assert_eq!(history.current_href(), "#/watch/1");
    assert_eq!(history.back(), Some("/gallery"));
    history.replace("#/upload");
    assert_eq!(history.current(), "/upload");
    assert_eq!(history.forward(), Some("/watch/1"));
}
