//! Secretaria dropdown driven by the IBGE code typed on the login form.
//!
//! [`SecretariaLookup`] tracks what the dropdown shows. It never touches the
//! network: [`SecretariaLookup::on_code_changed`] hands back the request to
//! issue, and the host reports the reply through
//! [`SecretariaLookup::resolve`].
//!
//! Requests are neither cancelled nor sequenced. When the code changes again
//! before a reply arrives, whichever reply comes last wins, even if it
//! answers an older code.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::error::LookupFailure;

/// Query parameter carrying the IBGE code.
pub const CODE_PARAM: &str = "codigo_ibge";

pub const PROMPT_LABEL: &str = "Informe o código IBGE primeiro";
pub const LOADING_LABEL: &str = "Carregando secretarias...";
pub const SELECT_LABEL: &str = "Selecione a secretaria";
pub const ERROR_LABEL: &str = "Erro ao carregar secretarias";

/// One `<option>` of the dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SecretariasReply {
    #[serde(default)]
    secretarias: Option<Vec<Secretaria>>,
}

#[derive(Debug, Deserialize)]
struct Secretaria {
    id: Value,
    nome: String,
    #[serde(default)]
    sigla: Option<String>,
}

impl Secretaria {
    fn into_option(self) -> SelectOption {
        let value = match self.id {
            Value::String(id) => id,
            Value::Null => String::new(),
            other => other.to_string(),
        };
        let label = match self.sigla.as_deref() {
            Some(sigla) if !sigla.is_empty() => format!("{} ({sigla})", self.nome),
            _ => self.nome,
        };
        SelectOption { value, label }
    }
}

/// A lookup the host must perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupRequest {
    /// Increases with every request issued by the same lookup.
    pub id: u64,
    pub url: String,
}

/// What the dropdown currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupState {
    /// No code typed yet.
    AwaitingCode,
    /// A request is in flight.
    Loading { request: u64 },
    /// Secretarias were loaded; the list may be empty.
    Ready(Vec<SelectOption>),
    /// The last reply could not be used.
    Failed,
}

/// Dropdown model for the login form.
#[derive(Clone, Debug)]
pub struct SecretariaLookup {
    endpoint: String,
    state: LookupState,
    issued: u64,
}

impl SecretariaLookup {
    /// `endpoint` comes from the form's `data-secretarias-url` attribute.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            state: LookupState::AwaitingCode,
            issued: 0,
        }
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// The dropdown stays disabled unless secretarias were loaded.
    pub fn is_disabled(&self) -> bool {
        !matches!(self.state, LookupState::Ready(_))
    }

    /// Options to render, placeholder first.
    pub fn options(&self) -> Vec<SelectOption> {
        match &self.state {
            LookupState::AwaitingCode => vec![SelectOption::placeholder(PROMPT_LABEL)],
            LookupState::Loading { .. } => vec![SelectOption::placeholder(LOADING_LABEL)],
            LookupState::Failed => vec![SelectOption::placeholder(ERROR_LABEL)],
            LookupState::Ready(entries) => std::iter::once(SelectOption::placeholder(SELECT_LABEL))
                .chain(entries.iter().cloned())
                .collect(),
        }
    }

    /// Handles a change or blur of the code input.
    ///
    /// Returns the request to issue, or `None` when the code is blank.
    pub fn on_code_changed(&mut self, raw_code: &str) -> Option<LookupRequest> {
        let code = raw_code.trim();
        if code.is_empty() {
            self.state = LookupState::AwaitingCode;
            return None;
        }

        self.issued += 1;
        let request = LookupRequest {
            id: self.issued,
            url: self.request_url(code),
        };
        debug!(request = request.id, "requesting secretarias");
        self.state = LookupState::Loading {
            request: request.id,
        };
        Some(request)
    }

    /// Appends the code as a form-encoded query pair.
    ///
    /// Spaces are encoded as `+` rather than `%20`; the server decodes both.
    fn request_url(&self, code: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(CODE_PARAM, code)
            .finish();
        let joiner = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{joiner}{query}", self.endpoint)
    }

    /// Applies the reply to `request`.
    ///
    /// `Ok` carries the response body of a successful HTTP exchange. Every
    /// failure, including an undecodable body, ends in [`LookupState::Failed`].
    pub fn resolve(&mut self, request: &LookupRequest, reply: Result<&str, LookupFailure>) {
        if request.id != self.issued {
            warn!(
                request = request.id,
                latest = self.issued,
                "stale secretaria reply overwrites a newer request"
            );
        }

        let decoded = reply.and_then(|body| {
            serde_json::from_str::<SecretariasReply>(body).map_err(LookupFailure::from)
        });
        self.state = match decoded {
            Ok(reply) => {
                let secretarias = reply.secretarias.unwrap_or_default();
                debug!(
                    request = request.id,
                    count = secretarias.len(),
                    "loaded secretarias"
                );
                LookupState::Ready(
                    secretarias
                        .into_iter()
                        .map(Secretaria::into_option)
                        .collect(),
                )
            }
            Err(failure) => {
                warn!(request = request.id, error = %failure, "secretaria lookup failed");
                LookupState::Failed
            }
        };
    }
}
