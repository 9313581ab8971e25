//! FaultTransport: fails every call with a fixed fault.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::fault::Fault;
use crate::transport::{RemoteCallRequest, Transport};
use crate::value::Value;

/// A transport that records each request and answers it with a clone of the
/// configured fault. `list_capabilities` fails the same way.
pub struct FaultTransport {
    fault: Fault,
    requests: Mutex<Vec<RemoteCallRequest>>,
}

impl FaultTransport {
    /// Create a transport that always fails with `fault`.
    pub fn new(fault: Fault) -> Self {
        Self {
            fault,
            requests: Mutex::new(Vec::new()),
        }
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
}

#[async_trait]
impl Transport for FaultTransport {
    async fn call(&self, request: RemoteCallRequest) -> Result<Value, Fault> {
        self.log().push(request);
        Err(self.fault.clone())
    }

    async fn list_capabilities(&self) -> Result<Value, Fault> {
        Err(self.fault.clone())
    }
}
