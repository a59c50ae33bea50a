//! Login form submit guard.

use crate::config::LoginConfig;
use crate::page::{ElementId, Page, Selector};
use crate::Result;

pub const FORM_SELECTOR: &str = ".login-form";
pub const USERNAME_FIELD: &str = "username";
pub const PASSWORD_FIELD: &str = "password";

/// Outcome of a guarded submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submission proceeds as normal
    Allowed,
    /// Submission consumed; the notice to surface
    Blocked { message: String },
}

/// Presence check over the login form's required fields.
#[derive(Debug)]
pub struct LoginGuard {
    form: ElementId,
}

impl LoginGuard {
    /// Bind to the login form, if the page has one.
    pub fn bind(page: &Page) -> Result<Option<Self>> {
        let form = page.select_first(&Selector::parse(FORM_SELECTOR)?);
        Ok(form.map(|form| Self { form }))
    }

    pub fn form(&self) -> ElementId {
        self.form
    }

    /// Check the required fields at submit time.
    ///
    /// A field that is absent from the page reads as empty. Values are
    /// not trimmed; whitespace counts as present.
    pub fn on_submit(&self, page: &Page, config: &LoginConfig) -> SubmitOutcome {
        let username = field_value(page, USERNAME_FIELD);
        let password = field_value(page, PASSWORD_FIELD);

        if username.is_empty() || password.is_empty() {
            SubmitOutcome::Blocked {
                message: config.required_message.clone(),
            }
        } else {
            SubmitOutcome::Allowed
        }
    }
}

fn field_value<'a>(page: &'a Page, dom_id: &str) -> &'a str {
    page.by_id(dom_id)
        .map(|id| page.element(id).value.as_str())
        .unwrap_or("")
}
