//! Dispatch pipeline tests against in-memory transports.

use std::sync::Arc;

use serde_json::json;
use shapecall_dispatch::*;
use shapecall_types::test_utils::{EchoTransport, FaultTransport};
use shapecall_types::{Fault, Mapping, RemoteCallRequest, Value};

fn value(json: serde_json::Value) -> Value {
    Value::from(json)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Naming
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn sample_values_reach_their_procedures() {
    let cases = [
        (json!([1, 2, 3, 4, 5]), "ListInt32 ParameterType"),
        (json!([true, false, true, false, true]), "ListBoolean ParameterType"),
        (json!([1.1, 2.2, 3.3, 4.4, 5.5]), "ListDouble ParameterType"),
        (json!(["a", "b", "c", "d", "e"]), "ListString ParameterType"),
        (json!({"a": 1, "b": 2, "c": 3, "d": 4, "e": 5}), "DictionaryInt32 ParameterType"),
        (json!({"a": true, "b": false}), "DictionaryBoolean ParameterType"),
        (json!({"a": 1.1, "b": 2.2}), "DictionaryDouble ParameterType"),
        (json!({"a": "a", "b": "b"}), "DictionaryString ParameterType"),
    ];
    let dispatcher = Dispatcher::new(EchoTransport::new());

    for (input, expected) in cases {
        dispatcher
            .dispatch(&value(input), None)
            .await
            .expect("echo succeeds");
    }

    let names: Vec<String> = dispatcher
        .transport()
        .requests()
        .into_iter()
        .map(|r| r.procedure_name)
        .collect();
    assert_eq!(
        names,
        [
            "ListInt32 ParameterType",
            "ListBoolean ParameterType",
            "ListDouble ParameterType",
            "ListString ParameterType",
            "DictionaryInt32 ParameterType",
            "DictionaryBoolean ParameterType",
            "DictionaryDouble ParameterType",
            "DictionaryString ParameterType",
        ]
    );
}

#[tokio::test]
async fn dict_of_ints_request_is_exact() {
    let transport = EchoTransport::new();
    let dispatcher = Dispatcher::new(&transport);
    let input = value(json!({"a": 1, "b": 2, "c": 3}));

    dispatcher.dispatch(&input, None).await.expect("echo succeeds");

    assert_eq!(
        transport.requests(),
        vec![RemoteCallRequest {
            procedure_name: "DictionaryInt32 ParameterType".into(),
            positional_args: vec![input],
            named_args: None,
        }]
    );
}

#[tokio::test]
async fn payload_is_returned_unmodified() {
    let dispatcher = Dispatcher::new(EchoTransport::new());
    let input = value(json!(["x"]));

    let result = dispatcher.dispatch(&input, None).await.expect("echo succeeds");

    let request = dispatcher.request_for(&input, None).expect("builds");
    assert_eq!(result, EchoTransport::echo_of(&request));
}

#[tokio::test]
async fn named_args_pass_through() {
    let dispatcher = Dispatcher::new(EchoTransport::new());
    let mut named = Mapping::new();
    named.insert("optional".into(), Value::from(99));

    dispatcher
        .dispatch(&value(json!([1])), Some(named.clone()))
        .await
        .expect("echo succeeds");

    let sent = dispatcher.into_transport().requests();
    assert_eq!(sent[0].named_args, Some(named));
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Local failures never touch the transport
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn scalar_is_unsupported_value_type() {
    let dispatcher = Dispatcher::new(EchoTransport::new());

    let err = dispatcher
        .dispatch(&Value::from(42), None)
        .await
        .expect_err("scalar rejected");

    assert!(matches!(err, DispatchError::UnsupportedValueType { .. }));
    assert!(err.is_local());
    assert!(dispatcher.transport().requests().is_empty());
}

#[tokio::test]
async fn mixed_list_is_unsupported_element_type() {
    let dispatcher = Dispatcher::new(EchoTransport::new());

    let err = dispatcher
        .dispatch(&value(json!([1, "a", true])), None)
        .await
        .expect_err("mixed rejected");

    assert!(matches!(err, DispatchError::UnsupportedElementType { .. }));
    assert!(dispatcher.transport().requests().is_empty());
}

#[tokio::test]
async fn empty_list_is_unsupported_element_type() {
    let dispatcher = Dispatcher::new(EchoTransport::new());

    let err = dispatcher
        .dispatch(&Value::List(vec![]), None)
        .await
        .expect_err("empty rejected");

    assert!(matches!(err, DispatchError::UnsupportedElementType { .. }));
    assert!(dispatcher.transport().requests().is_empty());
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Remote faults
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn remote_fault_propagates_verbatim() {
    let fault = Fault::new(1, "no such procedure");
    let dispatcher = Dispatcher::new(FaultTransport::new(fault.clone()));

    let err = dispatcher
        .dispatch(&value(json!([1, 2])), None)
        .await
        .expect_err("fault propagates");

    assert_eq!(err, DispatchError::RemoteFault(fault.clone()));
    assert_eq!(err.fault(), Some(&fault));
    assert_eq!(err.to_string(), "remote fault 1: no such procedure");
}

#[tokio::test]
async fn remote_fault_is_not_retried() {
    let dispatcher = Dispatcher::new(FaultTransport::new(Fault::transport("refused")));

    let _ = dispatcher.dispatch(&value(json!(["a"])), None).await;

    assert_eq!(dispatcher.transport().requests().len(), 1);
}

#[tokio::test]
async fn capabilities_fault_uses_same_channel() {
    let fault = Fault::new(3, "library missing");
    let dispatcher = Dispatcher::new(FaultTransport::new(fault.clone()));

    let err = dispatcher.capabilities().await.expect_err("faults");

    assert_eq!(err, DispatchError::RemoteFault(fault));
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Statelessness
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn dispatching_twice_sends_identical_requests() {
    let dispatcher = Dispatcher::new(EchoTransport::new());
    let input = value(json!({"x": "1", "y": "2"}));

    dispatcher.dispatch(&input, None).await.expect("first");
    dispatcher.dispatch(&input, None).await.expect("second");

    let sent = dispatcher.transport().requests();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].procedure_name, sent[1].procedure_name);
    assert_eq!(sent[0].positional_args, sent[1].positional_args);
}

#[tokio::test]
async fn concurrent_dispatch_over_shared_transport() {
    let dispatcher = Arc::new(Dispatcher::new(Arc::new(EchoTransport::new())));

    let handles: Vec<_> = (0..8i64)
        .map(|i| {
            let dispatcher = Arc::clone(&dispatcher);
            tokio::spawn(async move {
                let input = if i % 2 == 0 {
                    Value::list([i])
                } else {
                    Value::list([i.to_string()])
                };
                dispatcher.dispatch(&input, None).await
            })
        })
        .collect();

    for handle in handles {
        handle.await.expect("task joins").expect("echo succeeds");
    }

    let sent = dispatcher.transport().requests();
    assert_eq!(sent.len(), 8);
    let ints = sent
        .iter()
        .filter(|r| r.procedure_name == "ListInt32 ParameterType")
        .count();
    assert_eq!(ints, 4);
}

#[test]
fn sequence_and_mapping_predicates_are_reexported() {
    assert!(is_sequence(&value(json!([]))));
    assert!(is_mapping(&value(json!({}))));
    assert!(!is_sequence(&Value::from("text")));
}
