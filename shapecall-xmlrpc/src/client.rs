//! Robot Framework remote library client.

use std::time::Duration;

use async_trait::async_trait;
use shapecall_types::{Fault, Mapping, RemoteCallRequest, Transport, Value};

use crate::codec::{decode_response, encode_call};
use crate::config::{DEFAULT_BASE_URL, RemoteConfig};
use crate::error::{map_http_status, map_reqwest_error};
use crate::keyword::{KeywordResult, LibraryInformation};

/// Client for one library on a Robot Framework remote server.
///
/// Implements [`Transport`]: `call` runs the keyword named by the request
/// and `list_capabilities` fetches the library information. Through the
/// trait a `PASS` result yields the keyword's return value and a `FAIL`
/// result yields a [`Fault::APPLICATION_ERROR`] fault with the keyword's
/// error message. Use [`RemoteLibrary::run_keyword`] for the full result
/// struct.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use shapecall_xmlrpc::RemoteLibrary;
///
/// let library = RemoteLibrary::new()
///     .base_url("http://127.0.0.1:8270")
///     .library("Testcenter/KeywordLibrary/TestKeywords")
///     .timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct RemoteLibrary {
    base_url: String,
    library: Option<String>,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl RemoteLibrary {
    /// Create a client for the server root at `http://127.0.0.1:8270`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            library: None,
            timeout: None,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client from deserialized configuration.
    #[must_use]
    pub fn from_config(config: RemoteConfig) -> Self {
        let timeout = config.timeout();
        Self {
            base_url: config.base_url,
            library: config.library,
            timeout,
            client: reqwest::Client::new(),
        }
    }

    /// Override the server root URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Select a library by URL path on a multi-library server.
    #[must_use]
    pub fn library(mut self, path: impl Into<String>) -> Self {
        self.library = Some(path.into());
        self
    }

    /// Fail calls that take longer than `timeout` with a transport fault.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a preconfigured HTTP client (proxies, TLS roots, pooling).
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// URL every call is posted to.
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        match self.library.as_deref().map(|p| p.trim_matches('/')) {
            Some(path) if !path.is_empty() => format!("{base}/{path}"),
            _ => format!("{base}/"),
        }
    }

    /// Send one XML-RPC call and return its decoded result.
    ///
    /// # Errors
    ///
    /// The server's `<fault>` verbatim; a [`Fault::TRANSPORT_ERROR`] fault for
    /// connection failures, timeouts and non-success HTTP statuses; a
    /// [`Fault::PARSE_ERROR`] or [`Fault::INVALID_RESPONSE`] fault for a
    /// response body that does not decode; a [`Fault::INVALID_PARAMS`] fault,
    /// raised before anything is sent, when a parameter holds a NaN or
    /// infinite double.
    pub async fn invoke(&self, method: &str, params: &[Value]) -> Result<Value, Fault> {
        let url = self.endpoint();
        let body = encode_call(method, params)?;

        tracing::debug!(url = %url, method, params = params.len(), "sending xml-rpc call");

        let mut request = self
            .client
            .post(&url)
            .header("content-type", "text/xml")
            .body(body);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let text = response.text().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            return Err(map_http_status(status, &text));
        }

        decode_response(&text)?.into_result()
    }

    /// `run_keyword(name, args[, kwargs])`. `kwargs` is left off the wire
    /// when `None`.
    pub async fn run_keyword(
        &self,
        name: &str,
        args: Vec<Value>,
        kwargs: Option<Mapping>,
    ) -> Result<Value, Fault> {
        let mut params = vec![Value::from(name), Value::List(args)];
        if let Some(kwargs) = kwargs {
            params.push(Value::Dict(kwargs));
        }
        self.invoke("run_keyword", &params).await
    }

    /// `get_library_information()`, undecoded.
    pub async fn get_library_information(&self) -> Result<Value, Fault> {
        self.invoke("get_library_information", &[]).await
    }

    /// `get_library_information()`, decoded.
    pub async fn library_information(&self) -> Result<LibraryInformation, Fault> {
        let value = self.get_library_information().await?;
        LibraryInformation::from_value(value).map_err(|e| Fault::invalid_response(e.to_string()))
    }

    /// `get_keyword_names()`.
    pub async fn get_keyword_names(&self) -> Result<Vec<String>, Fault> {
        let value = self.invoke("get_keyword_names", &[]).await?;
        string_list(value, "get_keyword_names")
    }

    /// `get_keyword_arguments(name)`.
    pub async fn get_keyword_arguments(&self, name: &str) -> Result<Vec<String>, Fault> {
        let value = self
            .invoke("get_keyword_arguments", &[Value::from(name)])
            .await?;
        string_list(value, "get_keyword_arguments")
    }

    /// `get_keyword_types(name)`.
    pub async fn get_keyword_types(&self, name: &str) -> Result<Vec<String>, Fault> {
        let value = self
            .invoke("get_keyword_types", &[Value::from(name)])
            .await?;
        string_list(value, "get_keyword_types")
    }

    /// `get_keyword_tags(name)`.
    pub async fn get_keyword_tags(&self, name: &str) -> Result<Vec<String>, Fault> {
        let value = self
            .invoke("get_keyword_tags", &[Value::from(name)])
            .await?;
        string_list(value, "get_keyword_tags")
    }

    /// `get_keyword_documentation(name)`.
    pub async fn get_keyword_documentation(&self, name: &str) -> Result<String, Fault> {
        match self
            .invoke("get_keyword_documentation", &[Value::from(name)])
            .await?
        {
            Value::String(doc) => Ok(doc),
            other => Err(unexpected("get_keyword_documentation", "string", &other)),
        }
    }
}

impl Default for RemoteLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for RemoteLibrary {
    /// Run the keyword and unwrap its result struct.
    ///
    /// # Errors
    ///
    /// Everything [`RemoteLibrary::invoke`] reports; a
    /// [`Fault::APPLICATION_ERROR`] fault when the keyword reports `FAIL`;
    /// a [`Fault::INVALID_RESPONSE`] fault when the result is not a
    /// well-formed `run_keyword` struct.
    async fn call(&self, request: RemoteCallRequest) -> Result<Value, Fault> {
        let value = self
            .run_keyword(
                &request.procedure_name,
                request.positional_args,
                request.named_args,
            )
            .await?;
        let result =
            KeywordResult::from_value(value).map_err(|e| Fault::invalid_response(e.to_string()))?;
        if !result.is_pass() {
            tracing::debug!(
                keyword = %request.procedure_name,
                error = %result.error,
                "keyword failed"
            );
        }
        result.into_return().map_err(Fault::from)
    }

    async fn list_capabilities(&self) -> Result<Value, Fault> {
        self.get_library_information().await
    }
}

fn string_list(value: Value, method: &str) -> Result<Vec<String>, Fault> {
    match value {
        Value::List(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(unexpected(method, "array of strings", &other)),
            })
            .collect(),
        other => Err(unexpected(method, "array of strings", &other)),
    }
}

fn unexpected(method: &str, expected: &str, found: &Value) -> Fault {
    Fault::invalid_response(format!(
        "{method} returned {}, expected {expected}",
        found.kind_name()
    ))
}
