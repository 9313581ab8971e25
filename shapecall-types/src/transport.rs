//! The request/response seam to a remote procedure endpoint.

use std::sync::Arc;

use async_trait::async_trait;

use crate::fault::Fault;
use crate::value::{Mapping, Value};

/// One remote call. Built per dispatch, handed to the transport, discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCallRequest {
    /// Name of the remote procedure to invoke.
    pub procedure_name: String,
    /// Positional arguments, in order.
    pub positional_args: Vec<Value>,
    /// Named arguments. `None` means the call carries no named-argument slot
    /// at all, which is distinct from an empty mapping.
    pub named_args: Option<Mapping>,
}

impl RemoteCallRequest {
    /// Create a request with positional arguments and no named arguments.
    pub fn new(procedure_name: impl Into<String>, positional_args: Vec<Value>) -> Self {
        Self {
            procedure_name: procedure_name.into(),
            positional_args,
            named_args: None,
        }
    }

    /// Attach named arguments.
    #[must_use]
    pub fn with_named_args(mut self, named_args: Option<Mapping>) -> Self {
        self.named_args = named_args;
        self
    }
}

/// A request/response channel to a remote procedure endpoint.
///
/// Implementations own their connection handling. A call either completes
/// with the endpoint's success payload or fails with exactly one [`Fault`];
/// connection failures and timeouts use the same fault channel as faults
/// reported by the remote side.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Invoke `request.procedure_name` with the request's arguments.
    async fn call(&self, request: RemoteCallRequest) -> Result<Value, Fault>;

    /// Ask the endpoint to describe what it offers. The payload shape is
    /// endpoint-defined.
    async fn list_capabilities(&self) -> Result<Value, Fault>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn call(&self, request: RemoteCallRequest) -> Result<Value, Fault> {
        (**self).call(request).await
    }

    async fn list_capabilities(&self) -> Result<Value, Fault> {
        (**self).list_capabilities().await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn call(&self, request: RemoteCallRequest) -> Result<Value, Fault> {
        (**self).call(request).await
    }

    async fn list_capabilities(&self) -> Result<Value, Fault> {
        (**self).list_capabilities().await
    }
}

#[async_trait]
impl<'a, T: Transport + ?Sized> Transport for &'a T {
    async fn call(&self, request: RemoteCallRequest) -> Result<Value, Fault> {
        (**self).call(request).await
    }

    async fn list_capabilities(&self) -> Result<Value, Fault> {
        (**self).list_capabilities().await
    }
}
