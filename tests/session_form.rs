use voogle::router::Router;
use voogle::store::Store;
use voogle::views::{
    FormField, MountOptions, Mounted, Session, SessionForm, SessionFormProps,
};

fn wired() -> MountOptions {
    MountOptions::default()
        .with_store(Store::default())
        .with_router(Router::with_default_routes().unwrap())
}

fn assert_login_controls<C>(mounted: &Mounted<C>)
where
    C: voogle::views::Component,
{
    assert_eq!(mounted.tree().count("button[type='submit']"), 1);
    assert!(mounted.exists("input[type='text'][name='username']"));
    assert!(mounted.exists("input[type='password'][name='password']"));
}

#[test]
fn session_form_shallow_has_login_controls() {
    let form = Mounted::<SessionForm>::shallow();
    assert_login_controls(&form);
}

#[test]
fn session_form_with_store_and_router_has_login_controls() {
    let form = Mounted::<SessionForm>::mount(SessionFormProps::default(), wired());
    assert_login_controls(&form);
}

#[test]
fn session_shallow_has_login_controls() {
    let session = Mounted::<Session>::shallow();
    assert_login_controls(&session);
    assert!(session.text().contains("Not logged in"));
}

#[test]
fn session_with_store_and_router_has_login_controls() {
    let session = Mounted::<Session>::mount(SessionFormProps::default(), wired());
    assert_login_controls(&session);
}

#[test]
fn session_reflects_store_after_rerender() {
    let store = Store::default();
    let mut session = Mounted::<Session>::mount(
        SessionFormProps::default(),
        MountOptions::default().with_store(store.clone()),
    );
    assert!(!session.exists("button.session__logout"));

    store.set_log_state(true);
    store.set_user(Some("alice".to_string()));
    session.rerender();

    assert!(session.text().contains("Logged in as alice"));
    assert!(session.exists("button.session__logout"));
    assert_eq!(session.tree().count("button[type='submit']"), 1);
}

#[test]
fn typed_values_and_focus_show_up() {
    let mut form = Mounted::<SessionForm>::shallow();
    form.update_props(|props| {
        props.username = "alice".to_string();
        props.password = "pw".to_string();
        props.focused = Some(FormField::Password);
    });

    let username = form.find("input[name='username']").unwrap();
    assert_eq!(username.get_attr("value"), Some("alice"));
    let password = form.find("input[name='password']").unwrap();
    assert_eq!(password.get_attr("value"), Some("**"));
    assert!(password.get_attr("data-focused").is_some());
}

#[test]
fn submitting_disables_the_button() {
    let mut form = Mounted::<SessionForm>::shallow();
    form.update_props(|props| props.submitting = true);
    let button = form.find("button[type='submit']").unwrap();
    assert!(button.get_attr("disabled").is_some());
}

#[test]
fn focus_cycles_through_fields() {
    assert_eq!(FormField::Username.next(), FormField::Password);
    assert_eq!(FormField::Password.next(), FormField::Submit);
    assert_eq!(FormField::Submit.next(), FormField::Username);
}
