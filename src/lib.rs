/*
Host-side bridge between a device under test and the cloud device directory.

A device that has just attempted cloud registration raises a key/value event
through the host-test framework that is driving it. The bridge answers that
event by looking the device up in the directory and reporting the
registration state back to the device over the same channel.

The framework itself (serial link, key/value wire protocol, callback
dispatch) stays outside this crate; `host` defines the contract it plugs
into.
*/

pub mod adapter;
pub mod config;
pub mod host;
pub mod registry;
pub mod types;
pub mod util;

pub use adapter::RegistrationStatus;
pub use host::{Event, HostTest, KvChannel};
