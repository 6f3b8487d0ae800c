use gloo_net::http::Request;
use log::{error, info};
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement, SubmitEvent};
use yew::prelude::*;

use crate::config;

const THANK_YOU_MESSAGE: &str = "Thank you for your message!";
const FAILURE_MESSAGE: &str = "Oops! There was a problem submitting your form";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not collect the form fields")]
    Packaging,
    #[error("form endpoint answered {status}{}", with_detail(.detail))]
    Rejected { status: u16, detail: Option<String> },
    #[error("request failed: {0}")]
    Transport(String),
}

fn with_detail(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(": {}", d)).unwrap_or_default()
}

/// Error body form endpoints send back with a rejection.
#[derive(Debug, Default, Deserialize)]
struct RejectionBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Vec<FieldError>,
}

#[derive(Debug, Deserialize)]
struct FieldError {
    #[serde(default)]
    field: Option<String>,
    message: String,
}

impl RejectionBody {
    fn summary(&self) -> Option<String> {
        let mut parts: Vec<String> = self.error.iter().cloned().collect();
        parts.extend(self.errors.iter().map(|e| match &e.field {
            Some(field) => format!("{}: {}", field, e.message),
            None => e.message.clone(),
        }));
        (!parts.is_empty()).then(|| parts.join("; "))
    }
}

fn rejection_detail(body: &str) -> Option<String> {
    serde_json::from_str::<RejectionBody>(body)
        .ok()
        .and_then(|body| body.summary())
}

pub fn check_status(status: u16, detail: Option<String>) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected { status, detail })
    }
}

pub async fn submit(action: &str, data: FormData) -> Result<(), SubmitError> {
    let response = Request::post(action)
        .header("Accept", "application/json")
        .body(data)
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }
    let detail = match response.text().await {
        Ok(body) => rejection_detail(&body),
        Err(_) => None,
    };
    check_status(response.status(), detail)
}

/// What the visitor is told once a submission settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    ThankYou,
    Failure,
}

impl Notice {
    pub fn for_result(result: &Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => Notice::ThankYou,
            Err(_) => Notice::Failure,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::ThankYou => THANK_YOU_MESSAGE,
            Notice::Failure => FAILURE_MESSAGE,
        }
    }

    pub fn clears_form(self) -> bool {
        self == Notice::ThankYou
    }
}

fn notify(notice: Notice) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(notice.message());
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_else(default_action)]
    pub action: AttrValue,
}

fn default_action() -> AttrValue {
    AttrValue::from(config::get_form_endpoint())
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form_ref = use_node_ref();

    let onsubmit = {
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let action = form.action();
            let data = FormData::new_with_form(&form).map_err(|_| SubmitError::Packaging);

            spawn_local(async move {
                let result = match data {
                    Ok(data) => submit(&action, data).await,
                    Err(err) => Err(err),
                };
                match &result {
                    Ok(()) => info!("contact form sent to {}", action),
                    Err(err) => error!("contact form submission failed: {}", err),
                }
                let notice = Notice::for_result(&result);
                notify(notice);
                if notice.clears_form() {
                    form.reset();
                }
            });
        })
    };

    html! {
        <form id="contact-form" class="contact-form" action={props.action.clone()} method="POST"
            ref={form_ref} {onsubmit}>
            <div class="input-wrapper">
                <input type="text" name="name" placeholder="Your name" class="input-field" />
                <input type="email" name="email" placeholder="Email address" class="input-field" />
            </div>
            <input type="text" name="subject" placeholder="Subject" class="input-field" />
            <textarea name="message" placeholder="Your message" class="input-field"></textarea>
            <button type="submit" class="btn btn-primary">{"Send message"}</button>
        </form>
    }
}
