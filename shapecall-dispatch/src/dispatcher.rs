//! Classify, name, invoke, return.

use shapecall_classify::{ShapeDescriptor, classify};
use shapecall_types::{Mapping, RemoteCallRequest, Transport, Value};

use crate::error::DispatchError;
use crate::name::ProcedureName;

/// Classify `value` and synthesize the procedure name for its shape.
pub fn resolve(value: &Value) -> Result<ProcedureName, DispatchError> {
    resolve_shape(value).map(|(_, name)| name)
}

/// Build the request a dispatch of `value` would send.
///
/// The value travels as the single positional argument; `named_args` is
/// passed through untouched.
pub fn build_request(
    value: &Value,
    named_args: Option<Mapping>,
) -> Result<RemoteCallRequest, DispatchError> {
    let name = resolve(value)?;
    Ok(RemoteCallRequest::new(name, vec![value.clone()]).with_named_args(named_args))
}

fn resolve_shape(value: &Value) -> Result<(ShapeDescriptor, ProcedureName), DispatchError> {
    let shape = classify(value)?;
    Ok((shape, ProcedureName::for_shape(shape)))
}

/// Routes values to remote procedures by shape.
///
/// Holds nothing but the injected transport, so one dispatcher can serve
/// concurrent callers whenever the transport can.
///
/// # Example
///
/// ```ignore
/// let dispatcher = Dispatcher::new(RemoteLibrary::new().library("TestKeywords"));
/// let result = dispatcher.dispatch(&Value::list([1, 2, 3]), None).await?;
/// ```
pub struct Dispatcher<T> {
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    /// Create a dispatcher over `transport`.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Borrow the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Give the transport back, ending the dispatcher.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Procedure name `value` would be dispatched to, without calling it.
    pub fn resolve(&self, value: &Value) -> Result<ProcedureName, DispatchError> {
        resolve(value)
    }

    /// Request `value` would be dispatched as, without sending it.
    pub fn request_for(
        &self,
        value: &Value,
        named_args: Option<Mapping>,
    ) -> Result<RemoteCallRequest, DispatchError> {
        build_request(value, named_args)
    }

    /// Call the remote procedure matching `value`'s shape.
    ///
    /// # Errors
    ///
    /// [`DispatchError::UnsupportedValueType`] or
    /// [`DispatchError::UnsupportedElementType`] if `value` has no shape; the
    /// transport is not touched in that case. [`DispatchError::RemoteFault`]
    /// if the transport reports a fault, including an unknown procedure.
    pub async fn dispatch(
        &self,
        value: &Value,
        named_args: Option<Mapping>,
    ) -> Result<Value, DispatchError> {
        let (shape, name) = resolve_shape(value)?;

        tracing::debug!(
            procedure = %name,
            container = %shape.container,
            element = %shape.element,
            named_args = named_args.as_ref().map_or(0, Mapping::len),
            "dispatching remote call"
        );

        let request = RemoteCallRequest::new(name, vec![value.clone()]).with_named_args(named_args);
        let result = self.transport.call(request).await?;
        Ok(result)
    }

    /// Ask the transport what the remote endpoint offers.
    pub async fn capabilities(&self) -> Result<Value, DispatchError> {
        Ok(self.transport.list_capabilities().await?)
    }
}
