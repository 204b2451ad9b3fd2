// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The outbound port and the gateway that guards it.
//!
//! The gateway is the boundary at which messaging failures stop. Whatever goes wrong
//! (no parent, no posting API, cross-origin restrictions, serialization) is logged and
//! reported as a [`Delivery`], never returned as an error and never panicked on.

use serde_json::Value;

use crate::envelope::Envelope;

/// Target origin used for every post. Development tooling only; the parent is trusted.
pub const TARGET_ORIGIN: &str = "*";

/// Failure reported by a [`MessagePort`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    /// The window has no posting API.
    #[error("postMessage is not available")]
    Unsupported,
    /// The parent window could not be reached.
    #[error("cross-origin access denied: {0}")]
    CrossOrigin(String),
    /// The message could not be cloned into the parent's realm.
    #[error("message could not be cloned: {0}")]
    DataClone(String),
}

/// Channel from the current window to its immediate parent.
pub trait MessagePort {
    /// Whether the current window is embedded: a parent exists and it is not this window.
    ///
    /// Sandboxed frames may be unable to answer; they report an error.
    fn is_embedded(&self) -> Result<bool, PortError>;

    /// Post `message` to the parent window.
    fn post(&mut self, message: Value, target_origin: &str) -> Result<(), PortError>;
}

/// Outcome of [`Gateway::notify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delivery {
    /// The message was handed to the parent.
    Posted,
    /// The window is not embedded; nothing was sent.
    Skipped,
    /// Sending failed; a warning was logged.
    Failed,
}

/// Best-effort, one-way messaging to the parent window.
#[derive(Debug)]
pub struct Gateway<P> {
    port: P,
}

impl<P: MessagePort> Gateway<P> {
    /// Wrap a port.
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// The wrapped port.
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Unwrap the port.
    pub fn into_port(self) -> P {
        self.port
    }

    /// Whether the current window is embedded.
    ///
    /// A probe that cannot be answered counts as embedded: sandboxed frames cannot read
    /// their top window but still have a parent to talk to.
    pub fn is_embedded(&self) -> bool {
        match self.port.is_embedded() {
            Ok(embedded) => embedded,
            Err(err) => {
                tracing::debug!(error = %err, "embedding probe failed; assuming framed");
                true
            }
        }
    }

    /// Serialize and post `envelope` if the window is embedded.
    pub fn notify(&mut self, envelope: &Envelope) -> Delivery {
        if !self.is_embedded() {
            return Delivery::Skipped;
        }
        let kind = envelope.message().type_name();
        let value = match envelope.to_value() {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    kind,
                    "[click-to-component] message serialization failed"
                );
                return Delivery::Failed;
            }
        };
        match self.port.post(value, TARGET_ORIGIN) {
            Ok(()) => {
                tracing::debug!(kind, "posted message to parent");
                Delivery::Posted
            }
            Err(PortError::Unsupported) => {
                tracing::debug!(kind, "parent has no posting API; skipped");
                Delivery::Skipped
            }
            Err(err) => {
                tracing::warn!(error = %err, kind, "[click-to-component] postMessage failed");
                Delivery::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Default)]
    struct Recorder {
        embedded: Option<bool>,
        fail_with: Option<PortError>,
        sent: Vec<(Value, String)>,
    }

    impl MessagePort for Recorder {
        fn is_embedded(&self) -> Result<bool, PortError> {
            self.embedded
                .ok_or_else(|| PortError::CrossOrigin("window.top".into()))
        }

        fn post(&mut self, message: Value, target_origin: &str) -> Result<(), PortError> {
            if let Some(err) = self.fail_with.clone() {
                return Err(err);
            }
            self.sent.push((message, target_origin.into()));
            Ok(())
        }
    }

    #[test]
    fn posts_when_embedded() {
        let mut gateway = Gateway::new(Recorder {
            embedded: Some(true),
            ..Recorder::default()
        });
        assert_eq!(gateway.notify(&Envelope::ready()), Delivery::Posted);
        let sent = &gateway.port().sent;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0["type"], json!("ready"));
        assert_eq!(sent[0].1, "*");
    }

    #[test]
    fn top_level_window_is_a_silent_no_op() {
        let mut gateway = Gateway::new(Recorder {
            embedded: Some(false),
            ..Recorder::default()
        });
        assert_eq!(gateway.notify(&Envelope::ready()), Delivery::Skipped);
        assert!(gateway.into_port().sent.is_empty());
    }

    #[test]
    fn unanswerable_probe_counts_as_embedded() {
        let mut gateway = Gateway::new(Recorder::default());
        assert!(gateway.is_embedded());
        assert_eq!(gateway.notify(&Envelope::ready()), Delivery::Posted);
    }

    #[test]
    fn port_failures_are_swallowed() {
        let mut gateway = Gateway::new(Recorder {
            embedded: Some(true),
            fail_with: Some(PortError::DataClone("HTMLElement".into())),
            ..Recorder::default()
        });
        assert_eq!(gateway.notify(&Envelope::ready()), Delivery::Failed);

        let mut gateway = Gateway::new(Recorder {
            embedded: Some(true),
            fail_with: Some(PortError::Unsupported),
            ..Recorder::default()
        });
        assert_eq!(gateway.notify(&Envelope::ready()), Delivery::Skipped);
    }
}
