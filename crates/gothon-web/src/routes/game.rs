//! Routes for playing the game.
//!
//! Every supported language gets the same three endpoints, all served by
//! the handlers below with the language passed in:
//!
//! | Path          | Method | Effect                                   |
//! |---------------|--------|------------------------------------------|
//! | `/{lang}`     | GET    | start a new game, redirect to the room   |
//! | `/game_{lang}`| GET    | render the current room                  |
//! | `/game_{lang}`| POST   | apply the `action` field, redirect back  |

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::HeaderMap;
use axum::http::header::ACCEPT;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Json, Router, routing::get};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use gothon_core::command::Command;
use gothon_core::language::Language;
use gothon_core::session::SessionId;
use gothon_game::application::query_handlers::{self, RoomViewOutcome};
use gothon_game::application::command_handlers;
use gothon_game::domain::commands;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::render;
use crate::state::AppState;

/// Form body for POST /game_{lang}.
#[derive(Debug, Deserialize)]
pub struct ActionForm {
    /// Raw player input.
    pub action: Option<String>,
}

fn session_id(jar: &CookieJar, config: &AppConfig) -> Option<SessionId> {
    jar.get(&config.session_cookie)
        .and_then(|cookie| SessionId::from_cookie(cookie.value()))
}

fn session_cookie(config: &AppConfig, id: SessionId) -> Cookie<'static> {
    Cookie::build((config.session_cookie.clone(), id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(i64::from(config.session_max_age_secs)))
        .build()
}

/// Highest quality the `Accept` header gives `media_type`, counting exact
/// matches only. A range without a `q` parameter has quality 1.
fn accept_quality(accept: &str, media_type: &str) -> f32 {
    accept
        .split(',')
        .filter_map(|range| {
            let mut parts = range.split(';').map(str::trim);
            let name = parts.next()?;
            if !name.eq_ignore_ascii_case(media_type) {
                return None;
            }
            let quality = parts
                .filter_map(|param| param.strip_prefix("q="))
                .find_map(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);
            Some(quality)
        })
        .fold(0.0, f32::max)
}

/// JSON is served only when the client ranks it above HTML.
fn wants_json(headers: &HeaderMap) -> bool {
    let Some(accept) = headers.get(ACCEPT).and_then(|value| value.to_str().ok()) else {
        return false;
    };
    let json = accept_quality(accept, "application/json");
    json > 0.0 && json > accept_quality(accept, "text/html")
}

fn log_command(command: &dyn Command) {
    info!(
        correlation_id = %command.correlation_id(),
        command = command.command_type(),
        session_id = ?command.session_id().map(|id| id.to_string()),
        lang = %command.lang(),
        "handling command"
    );
}

/// GET /
async fn index(State(state): State<AppState>) -> Redirect {
    Redirect::to(&state.config.default_lang.entry_path())
}

/// GET /{lang}
#[instrument(skip(state, jar))]
async fn start_game(
    lang: Language,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), ApiError> {
    let command = commands::StartGame {
        correlation_id: Uuid::new_v4(),
        session_id: session_id(&jar, &state.config),
        lang,
    };

    log_command(&command);

    let started =
        command_handlers::handle_start_game(&command, &state.graph, &*state.store).await?;

    info!(
        session_id = %started.session_id,
        issued_new_id = started.issued_new_id,
        room_tag = %started.record.room_tag,
        "game started"
    );

    let jar = jar.add(session_cookie(&state.config, started.session_id));
    Ok((jar, Redirect::to(&started.redirect)))
}

/// GET /game_{lang}
#[instrument(skip(state, jar, headers))]
async fn show_room(
    lang: Language,
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let outcome = query_handlers::get_room_view(
        session_id(&jar, &state.config),
        lang,
        &state.graph,
        &*state.store,
    )
    .await?;

    Ok(match outcome {
        RoomViewOutcome::Redirect(path) => Redirect::to(&path).into_response(),
        RoomViewOutcome::Render(view) if wants_json(&headers) => Json(view).into_response(),
        RoomViewOutcome::Render(view) => Html(render::room_page(&view)).into_response(),
    })
}

/// POST /game_{lang}
///
/// An unreadable form body counts as a missing action.
#[instrument(skip(state, jar, form))]
async fn submit_action(
    lang: Language,
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<ActionForm>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let command = commands::SubmitAction {
        correlation_id: Uuid::new_v4(),
        session_id: session_id(&jar, &state.config),
        lang,
        action: form.ok().and_then(|Form(form)| form.action),
    };

    log_command(&command);

    let submitted =
        command_handlers::handle_submit_action(&command, &state.graph, &*state.store).await?;

    info!(outcome = ?submitted.outcome, "action handled");

    Ok(Redirect::to(&submitted.redirect))
}

/// Returns the router for the game endpoints of every supported language.
pub fn router() -> Router<AppState> {
    let mut router = Router::new().route("/", get(index));
    for lang in Language::ALL {
        router = router
            .route(
                &lang.entry_path(),
                get(move |state: State<AppState>, jar: CookieJar| start_game(lang, state, jar)),
            )
            .route(
                &lang.game_path(),
                get(
                    move |state: State<AppState>, jar: CookieJar, headers: HeaderMap| {
                        show_room(lang, state, jar, headers)
                    },
                )
                .post(
                    move |state: State<AppState>,
                          jar: CookieJar,
                          form: Result<Form<ActionForm>, FormRejection>| {
                        submit_action(lang, state, jar, form)
                    },
                ),
            );
    }
    router
}
