//! Dispatch a few values to a running Robot Framework remote server.
//!
//! Start a remote server with a library that has the `...ParameterType`
//! keywords and run:
//!   cargo run -p shapecall-xmlrpc --example basic -- http://127.0.0.1:8270/TestKeywords

use shapecall_dispatch::Dispatcher;
use shapecall_types::Value;
use shapecall_xmlrpc::RemoteLibrary;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://127.0.0.1:8270".into());
    let dispatcher = Dispatcher::new(RemoteLibrary::new().base_url(url));

    let samples = [
        Value::list([1, 2, 3, 4, 5]),
        Value::list([true, false, true]),
        Value::dict([("a", 1.1), ("b", 2.2)]),
        Value::dict([("a", "x"), ("b", "y")]),
    ];

    for sample in &samples {
        let name = dispatcher.resolve(sample)?;
        match dispatcher.dispatch(sample, None).await {
            Ok(returned) => println!("{name}: PASS -> {returned:?}"),
            Err(err) => println!("{name}: {err}"),
        }
    }

    Ok(())
}
