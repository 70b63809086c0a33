/*
The contract between a host test and the framework that runs it.

The framework owns the serial link and the key/value wire protocol. It
delivers inbound messages matching a test's subscriptions to `handle` and
relays anything written to the outbound channel back to the device under
test. `configure` runs once before the first event, `close` once after the
last; a test must not rely on either beyond that ordering.
*/

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A key/value message received from the device under test.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Event {
    pub key: String,
    pub value: String,
    /// Seconds since the epoch, stamped by the framework on receipt.
    pub timestamp: f64,
}

impl Event {
    pub fn new(key: impl Into<String>, value: impl Into<String>, timestamp: f64) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            timestamp,
        }
    }
}

/// Outbound key/value channel back to the device under test.
///
/// Implemented by the hosting framework on top of its transport.
pub trait KvChannel: Send {
    fn send_kv(&mut self, key: &str, value: &str);
}

/// A host-side test driven by messages from the device under test.
///
/// Events are delivered one at a time; `handle` is awaited to completion
/// before the next event is dispatched.
#[async_trait]
pub trait HostTest: Send {
    /// Callback keys this test wants delivered to [`HostTest::handle`].
    fn subscriptions(&self) -> &[&str];

    /// Invoked once by the framework before any event is delivered.
    fn configure(&mut self);

    /// Invoked for each inbound event matching a subscription.
    async fn handle(&mut self, event: &Event, channel: &mut dyn KvChannel);

    /// Invoked once after the last event.
    fn close(&mut self) {}
}
