//! EchoTransport: answers every call with the request it received.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::fault::Fault;
use crate::transport::{RemoteCallRequest, Transport};
use crate::value::Value;

/// A transport that records each request and returns it back as a dict with
/// `procedure_name`, `positional_args` and `named_args` keys.
#[derive(Default)]
pub struct EchoTransport {
    requests: Mutex<Vec<RemoteCallRequest>>,
}

impl EchoTransport {
    /// Create an echo transport with an empty request log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RemoteCallRequest> {
        self.log().clone()
    }

    /// The request log. A panic while the lock was held does not lose
    /// entries already recorded.
    fn log(&self) -> MutexGuard<'_, Vec<RemoteCallRequest>> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Render a request the way [`EchoTransport`] answers it.
    pub fn echo_of(request: &RemoteCallRequest) -> Value {
        Value::dict([
            ("procedure_name", Value::from(request.procedure_name.as_str())),
            ("positional_args", Value::List(request.positional_args.clone())),
            (
                "named_args",
                request
                    .named_args
                    .clone()
                    .map_or(Value::Nil, Value::Dict),
            ),
        ])
    }
}

#[async_trait]
impl Transport for EchoTransport {
    async fn call(&self, request: RemoteCallRequest) -> Result<Value, Fault> {
        let echo = Self::echo_of(&request);
        self.log().push(request);
        Ok(echo)
    }

    async fn list_capabilities(&self) -> Result<Value, Fault> {
        let names = self
            .requests()
            .into_iter()
            .map(|r| Value::String(r.procedure_name))
            .collect();
        Ok(Value::List(names))
    }
}
