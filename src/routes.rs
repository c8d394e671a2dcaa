use rocket::State;
use rocket::form::Form;
use rocket::http::CookieJar;
use rocket::response::Redirect;
use rocket_dyn_templates::{Template, context};
use sqlx::SqlitePool;
use tracing::warn;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::db::{find_user_by_username, insert_user, list_users};
use crate::error::AppError;
use crate::mail::Mailer;
use crate::session;

#[derive(FromForm, Validate)]
pub struct NameForm {
    // Missing fields fall through to the validation error path instead of
    // failing form parsing outright.
    #[field(default = String::new())]
    #[validate(custom(function = not_blank, message = "This field is required."))]
    pub name: String,
    #[field(default = String::new())]
    pub authenticity_token: String,
}

fn not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn first_error_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .filter_map(|error| error.message.clone())
        .map(|message| message.to_string())
        .next()
        .unwrap_or_else(|| "Invalid value".to_string())
}

async fn render_index(
    db: &SqlitePool,
    cookies: &CookieJar<'_>,
    error: Option<String>,
) -> Result<Template, AppError> {
    let visit = session::current(cookies);
    let users = list_users(db).await?;
    let csrf_token = session::issue_csrf_token(cookies);

    Ok(Template::render(
        "index",
        context! {
            title: "Guestbook",
            name: visit.name,
            known: visit.known,
            users: users,
            csrf_token: csrf_token,
            error: error,
        },
    ))
}

#[get("/")]
pub async fn index(
    db: &State<SqlitePool>,
    cookies: &CookieJar<'_>,
) -> Result<Template, AppError> {
    render_index(db, cookies, None).await
}

#[derive(Responder)]
pub enum SubmitOutcome {
    Redirect(Redirect),
    Rendered(Template),
}

#[post("/", data = "<form>")]
pub async fn submit(
    form: Form<NameForm>,
    db: &State<SqlitePool>,
    cookies: &CookieJar<'_>,
    mailer: &State<Mailer>,
) -> Result<SubmitOutcome, AppError> {
    let form = form.into_inner();

    if !session::verify_csrf_token(cookies, &form.authenticity_token) {
        warn!("Rejected form submission with missing or stale anti-forgery token");
        let rendered = render_index(
            db,
            cookies,
            Some("The form has expired. Please try again.".to_string()),
        )
        .await?;
        return Ok(SubmitOutcome::Rendered(rendered));
    }

    if let Err(errors) = form.validate() {
        let rendered = render_index(db, cookies, Some(first_error_message(&errors))).await?;
        return Ok(SubmitOutcome::Rendered(rendered));
    }

    // Lookup-before-insert; the unique index is the only guard against a
    // concurrent duplicate, which surfaces as a 500 (see insert_user).
    let existing = find_user_by_username(db, &form.name).await?;
    let known = existing.is_some();

    if existing.is_none() {
        insert_user(db, &form.name).await?;
    }

    session::remember(cookies, &form.name, known);

    // Fires on both branches: returning visitors re-trigger the mail.
    mailer.dispatch_registration(&form.name);

    Ok(SubmitOutcome::Redirect(Redirect::to(uri!(index))))
}

#[catch(404)]
pub fn not_found() -> Template {
    Template::render("404", context! { title: "Not Found" })
}

#[catch(500)]
pub fn internal_error() -> Template {
    Template::render("500", context! { title: "Internal Server Error" })
}
