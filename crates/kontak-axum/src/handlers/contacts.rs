//! Contact handlers - listing, detail and the write forms.
//!
//! Validation failures are recovered here by re-rendering the originating
//! form. Every other error propagates as `HttpError`.

use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use kontak_core::validation::ValidationErrors;
use kontak_core::{ContactInput, ContactUpdate, CoreError};

use crate::error::HttpError;
use crate::flash::{self, Flash};
use crate::state::AppState;
use crate::views;

/// Where every successful write lands.
pub const LIST_PATH: &str = "/contact";

/// Create form body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub nama: String,
    pub email: String,
    pub nohp: String,
}

impl From<ContactForm> for ContactInput {
    fn from(form: ContactForm) -> Self {
        Self::new(form.nama, form.email, form.nohp)
    }
}

/// Edit form body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateContactForm {
    #[serde(rename = "_id")]
    pub id: i64,
    pub nama: String,
    pub email: String,
    pub nohp: String,
    #[serde(rename = "oldNama")]
    pub old_nama: String,
}

impl From<UpdateContactForm> for ContactUpdate {
    fn from(form: UpdateContactForm) -> Self {
        Self {
            id: form.id,
            input: ContactInput::new(form.nama, form.email, form.nohp),
            old_name: form.old_nama,
        }
    }
}

/// Delete form body.
#[derive(Debug, Deserialize)]
pub struct DeleteContactForm {
    pub nama: String,
}

/// List all contacts, showing and consuming any pending feedback.
pub async fn list(State(state): State<AppState>, flash: Flash) -> Result<Response, HttpError> {
    let contacts = state.contacts.list().await?;
    let page = views::contacts::list(&contacts, flash.message());
    Ok((flash, Html(page)).into_response())
}

/// Render the empty add form.
pub async fn add_form() -> Html<String> {
    Html(views::contacts::add_form(
        &ContactInput::default(),
        &ValidationErrors::new(),
    ))
}

/// Create a contact from the add form.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response, HttpError> {
    let input = ContactInput::from(form);
    match state.contacts.create(input.clone()).await {
        Ok(committed) => Ok(flash::redirect_with(LIST_PATH, committed.feedback)),
        Err(CoreError::Validation(errors)) => {
            tracing::debug!(%errors, "Create rejected");
            Ok(rejected(views::contacts::add_form(&input, &errors)))
        }
        Err(e) => Err(e.into()),
    }
}

/// Show one contact.
pub async fn detail(
    State(state): State<AppState>,
    Path(nama): Path<String>,
) -> Result<Html<String>, HttpError> {
    let contact = state.contacts.find_by_name(&nama).await?;
    Ok(Html(views::contacts::detail(&contact)))
}

/// Render the edit form pre-filled with the stored values.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(nama): Path<String>,
) -> Result<Html<String>, HttpError> {
    let contact = state.contacts.find_by_name(&nama).await?;
    Ok(Html(views::contacts::edit_form(
        contact.id,
        &ContactInput::from(&contact),
        &contact.name,
        &ValidationErrors::new(),
    )))
}

/// Apply the edit form.
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateContactForm>,
) -> Result<Response, HttpError> {
    let update = ContactUpdate::from(form);
    match state.contacts.update(update.clone()).await {
        Ok(committed) => Ok(flash::redirect_with(LIST_PATH, committed.feedback)),
        Err(CoreError::Validation(errors)) => {
            tracing::debug!(id = update.id, %errors, "Update rejected");
            Ok(rejected(views::contacts::edit_form(
                update.id,
                &update.input,
                &update.old_name,
                &errors,
            )))
        }
        Err(e) => Err(e.into()),
    }
}

/// Delete a contact by name. Unknown names still redirect with feedback.
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<DeleteContactForm>,
) -> Result<Response, HttpError> {
    let committed = state.contacts.delete(&form.nama).await?;
    Ok(flash::redirect_with(LIST_PATH, committed.feedback))
}

fn rejected(page: String) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response()
}
