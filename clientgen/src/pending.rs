//! Pending-result handles.
//!
//! A generated call returns a [`Pending`] immediately and the transport
//! settles it later through the matching [`Completer`], usually from one of
//! its own threads. The pair is a single-assignment cell: [`Completer::complete`]
//! consumes the completer, so a second completion cannot be written.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;
use tracing::{debug, trace};

use crate::error::BindingError;

type Outcome<T> = Result<T, BindingError>;

/// Creates a connected completer/handle pair for one invocation of `method`.
///
/// ## Examples
///
/// ```
/// # tokio_test_block(async {
/// let (completer, pending) = clientgen::pending::channel::<u32>("unknownReturn");
/// completer.succeed(42);
/// assert_eq!(pending.await.unwrap(), 42);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
pub fn channel<T>(method: &'static str) -> (Completer<T>, Pending<T>) {
    let (tx, rx) = oneshot::channel();
    (
        Completer { method, tx },
        Pending {
            method,
            state: State::Waiting(rx),
        },
    )
}

/// The eventual outcome of a single invocation.
///
/// Resolves to the decoded response, or to the [`BindingError`] that
/// settled the call. If the completer is dropped without completing, the
/// handle resolves to [`BindingError::Abandoned`].
#[must_use = "a pending call does nothing observable unless awaited"]
pub struct Pending<T> {
    method: &'static str,
    state: State<T>,
}

enum State<T> {
    Ready(Option<Outcome<T>>),
    Waiting(oneshot::Receiver<Outcome<T>>),
}

// No pin projection to `T` ever happens.
impl<T> Unpin for Pending<T> {}

impl<T> Pending<T> {
    /// A handle already settled with `value`.
    pub fn ready(method: &'static str, value: T) -> Self {
        Self {
            method,
            state: State::Ready(Some(Ok(value))),
        }
    }

    /// A handle already settled with `error`.
    pub fn failed(method: &'static str, error: BindingError) -> Self {
        Self {
            method,
            state: State::Ready(Some(Err(error))),
        }
    }

    /// The method this handle belongs to.
    pub fn method(&self) -> &'static str {
        self.method
    }

    /// Blocks the current thread until the call settles.
    ///
    /// For callers outside an async context. Panics if called from within
    /// an async runtime, like [`oneshot::Receiver::blocking_recv`].
    pub fn blocking_wait(self) -> Outcome<T> {
        let method = self.method;
        match self.state {
            State::Ready(outcome) => outcome.unwrap_or(Err(BindingError::Abandoned { method })),
            State::Waiting(rx) => rx
                .blocking_recv()
                .unwrap_or(Err(BindingError::Abandoned { method })),
        }
    }
}

impl<T> Future for Pending<T> {
    type Output = Outcome<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let method = self.method;
        match &mut self.state {
            State::Ready(outcome) => {
                Poll::Ready(outcome.take().unwrap_or(Err(BindingError::Abandoned { method })))
            }
            State::Waiting(rx) => Pin::new(rx)
                .poll(cx)
                .map(|received| received.unwrap_or(Err(BindingError::Abandoned { method }))),
        }
    }
}

impl<T> std::fmt::Debug for Pending<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.state {
            State::Ready(Some(Ok(_))) => "succeeded",
            State::Ready(Some(Err(_))) => "failed",
            State::Ready(None) => "taken",
            State::Waiting(_) => "waiting",
        };
        f.debug_struct("Pending")
            .field("method", &self.method)
            .field("state", &state)
            .finish()
    }
}

/// The single-assignment setter of a [`Pending`] handle.
#[derive(Debug)]
pub struct Completer<T> {
    method: &'static str,
    tx: oneshot::Sender<Outcome<T>>,
}

impl<T> Completer<T> {
    /// Settles the call. Consumes the completer.
    pub fn complete(self, outcome: Outcome<T>) {
        match &outcome {
            Ok(_) => trace!(method = self.method, "call succeeded"),
            Err(err) => debug!(method = self.method, error = %err, "call failed"),
        }
        if self.tx.send(outcome).is_err() {
            debug!(method = self.method, "pending handle dropped before completion");
        }
    }

    pub fn succeed(self, value: T) {
        self.complete(Ok(value));
    }

    pub fn fail(self, error: BindingError) {
        self.complete(Err(error));
    }

    pub fn method(&self) -> &'static str {
        self.method
    }
}
