use std::net::SocketAddr;

use askama::Template;
use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::catalog::Service;
use crate::contact::{Draft, Notification, SubmitError};
use crate::state::SharedState;
use crate::submission::parser::{self, IntakeError};
use crate::submission::pipeline::{self, PipelineError};
use crate::submission::client_ip;

const TOAST_COOKIE: &str = "toast";

struct ServiceOption {
    title: &'static str,
    selected: bool,
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate {
    name: String,
    phone: String,
    email: String,
    services: Vec<ServiceOption>,
    toast: Option<Notification>,
}

impl ContactTemplate {
    fn new(draft: &Draft, toast: Option<Notification>) -> Self {
        let services = Service::ALL
            .into_iter()
            .map(|service| ServiceOption {
                title: service.title(),
                selected: draft.service == Some(service),
            })
            .collect();

        Self {
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
            services,
            toast,
        }
    }
}

fn render(status: StatusCode, draft: &Draft, toast: Option<Notification>) -> Response {
    match ContactTemplate::new(draft, toast).render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render contact page: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// The contact page. A toast left by the previous submit is shown once.
pub async fn page(jar: CookieJar) -> Response {
    let toast = jar
        .get(TOAST_COOKIE)
        .and_then(|cookie| Notification::from_code(cookie.value()));

    let jar = if jar.get(TOAST_COOKIE).is_some() {
        jar.remove(Cookie::build(TOAST_COOKIE).path("/"))
    } else {
        jar
    };

    (jar, render(StatusCode::OK, &Draft::default(), toast)).into_response()
}

/// Form post from the contact page.
pub async fn submit(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    jar: CookieJar,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let fields = match parser::parse_request(&headers, body).await {
        Ok(fields) => fields,
        Err(e) => {
            tracing::debug!("Unreadable contact form body: {e}");
            return render(
                StatusCode::BAD_REQUEST,
                &Draft::default(),
                Some(Notification::Malformed),
            );
        }
    };

    let draft = match parser::draft_from_fields(&fields) {
        Ok(draft) => draft,
        Err(IntakeError::UnknownService { draft, source }) => {
            tracing::debug!("Contact form rejected: {source}");
            return render(
                StatusCode::BAD_REQUEST,
                &draft,
                Some(Notification::UnknownService),
            );
        }
        Err(IntakeError::Malformed(msg)) => {
            tracing::debug!("Contact form rejected: {msg}");
            return render(
                StatusCode::BAD_REQUEST,
                &Draft::default(),
                Some(Notification::Malformed),
            );
        }
    };

    let ip = client_ip::resolve(&headers, Some(addr.ip()), &state.config.trusted_proxies);

    match pipeline::run(&state, ip, draft).await {
        Ok(_accepted) => {
            let toast = Cookie::build((TOAST_COOKIE, Notification::Submitted.code()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .build();
            (jar.add(toast), Redirect::to("/#contact")).into_response()
        }
        Err(PipelineError::RateLimited { draft, retry_after }) => {
            let mut response = render(
                StatusCode::TOO_MANY_REQUESTS,
                &draft,
                Some(Notification::RateLimited),
            );
            if let Ok(value) = retry_after.to_string().parse() {
                response.headers_mut().insert("retry-after", value);
            }
            response
        }
        Err(PipelineError::Rejected(rejected)) => match rejected.reason {
            SubmitError::Incomplete { .. } => render(
                StatusCode::UNPROCESSABLE_ENTITY,
                &rejected.draft,
                Some(Notification::Incomplete),
            ),
            SubmitError::Store(_) => render(
                StatusCode::SERVICE_UNAVAILABLE,
                &rejected.draft,
                Some(Notification::Unavailable),
            ),
        },
    }
}
