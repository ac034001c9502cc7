//! Login form and session status.

use super::{Component, Element, RenderContext};

/// Field values and feedback of the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFormProps {
    pub username: String,
    /// Rendered masked, never echoed back.
    pub password: String,
    /// Which field has keyboard focus in the terminal front-end.
    pub focused: Option<FormField>,
    /// A login request is in flight.
    pub submitting: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Username,
    Password,
    Submit,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Username => FormField::Password,
            FormField::Password => FormField::Submit,
            FormField::Submit => FormField::Username,
        }
    }

    fn name(self) -> &'static str {
        match self {
            FormField::Username => "username",
            FormField::Password => "password",
            FormField::Submit => "submit",
        }
    }
}

/// The login form: username, password, submit.
///
/// Always renders exactly one of each control. Store and router are not
/// required.
pub struct SessionForm;

impl Component for SessionForm {
    type Props = SessionFormProps;

    fn render(props: &SessionFormProps, _context: &RenderContext) -> Element {
        let focus = |field: FormField, el: Element| {
            if props.focused == Some(field) {
                el.attr("data-focused", field.name())
            } else {
                el
            }
        };

        let username = Element::new("input")
            .class("session-form__input")
            .attr("type", "text")
            .attr("name", "username")
            .attr("placeholder", "Username")
            .attr("value", props.username.clone());
        let password = Element::new("input")
            .class("session-form__input")
            .attr("type", "password")
            .attr("name", "password")
            .attr("placeholder", "Password")
            .attr("value", "*".repeat(props.password.chars().count()));
        let mut submit = Element::new("button")
            .class("session-form__submit")
            .attr("type", "submit")
            .text(if props.submitting { "Logging in..." } else { "Log in" });
        if props.submitting {
            submit = submit.attr("disabled", "disabled");
        }

        Element::new("form")
            .class("session-form")
            .child(focus(FormField::Username, username))
            .child(focus(FormField::Password, password))
            .child(focus(FormField::Submit, submit))
            .child_if(props.error.is_some(), || {
                Element::new("p")
                    .class("session-form__error")
                    .text(props.error.clone().unwrap_or_default())
            })
    }
}

/// Session status with the login form.
///
/// Shows who is logged in and a logout button when the store says so. The
/// form is always present so a different account can log in.
pub struct Session;

impl Component for Session {
    type Props = SessionFormProps;

    fn render(props: &SessionFormProps, context: &RenderContext) -> Element {
        let session = &context.state.session;
        let status = if session.is_logged_in {
            let who = session.username.as_deref().unwrap_or("anonymous");
            Element::new("p")
                .class("session__status")
                .text(format!("Logged in as {}", who))
        } else {
            Element::new("p").class("session__status").text("Not logged in")
        };

        Element::new("div")
            .class("session")
            .child(status)
            .child_if(session.is_logged_in, || {
                Element::new("button")
                    .class("session__logout")
                    .attr("type", "button")
                    .attr("data-action", "logout")
                    .text("Log out")
            })
            .child(SessionForm::render(props, context))
    }
}
