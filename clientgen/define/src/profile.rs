//! Transport profiles.
//!
//! A [`TransportProfile`] names a backend variant and fixes everything the
//! binding generator needs to know about it: how method names become URL
//! segments, which HTTP verb a method uses, how calls are dispatched, and
//! which [`CallPattern`]s can be expressed at all.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::naming::{to_kebab_case, to_pascal_case, to_snake_case};
use crate::types::{CallPattern, MethodDef};

/// HTTP verbs used by generated bindings.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use clientgen_define::HttpVerb;
///
/// assert_eq!(HttpVerb::Post.to_string(), "POST");
/// assert_eq!(HttpVerb::from_str("GET").unwrap(), HttpVerb::Get);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpVerb {
    /// Parameter-only calls; never carries a body.
    Get,
    /// Calls carrying a JSON request body.
    Post,
}

impl HttpVerb {
    /// Returns true if requests with this verb carry a body.
    pub fn has_body(self) -> bool {
        matches!(self, Self::Post)
    }
}

/// How a method name maps onto its URL path segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SegmentCase {
    /// `unknownReturn` → `unknown-return`
    #[default]
    Kebab,
    /// `unknownReturn` → `unknown_return`
    Snake,
    /// The method name unchanged.
    Verbatim,
}

impl SegmentCase {
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Kebab => to_kebab_case(name),
            Self::Snake => to_snake_case(name),
            Self::Verbatim => name.to_string(),
        }
    }
}

/// How a capable method is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DispatchStrategy {
    /// Placeholder backend: every call fails with `TransportUnavailable`
    /// and no I/O is ever attempted.
    Stub,
    /// Issues one asynchronous call and bridges its completion callback
    /// into a pending-result handle.
    CallbackBridge,
}

/// What the generator does with a method whose pattern the profile cannot express.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UnsupportedPolicy {
    /// Emit a method that fails with `UnsupportedOperation` when called.
    #[default]
    EmitFailing,
    /// Fail generation.
    Reject,
}

/// A named backend variant for generated bindings.
///
/// ## Examples
///
/// ```
/// use clientgen_define::{CallPattern, MethodDef, TransportProfile};
///
/// let profile = TransportProfile::http_async();
/// assert!(profile.supports(CallPattern::Unary));
/// assert!(!profile.supports(CallPattern::BidiStreaming));
///
/// let method = MethodDef::new("unknownReturn", CallPattern::Unary);
/// assert_eq!(profile.segment_for(&method), "unknown-return");
/// assert_eq!(profile.client_suffix(), "HttpAsync");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportProfile {
    /// Identifier used on the command line and in error messages.
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub segment_case: SegmentCase,
    /// Segments prepended to every request path, after the base URL.
    #[serde(default)]
    pub base_segments: Vec<String>,
    pub dispatch: DispatchStrategy,
    /// The call patterns this profile can express.
    pub capabilities: BTreeSet<CallPattern>,
    #[serde(default)]
    pub unsupported: UnsupportedPolicy,
}

impl TransportProfile {
    /// First-generation HTTP bindings: a placeholder that never performs I/O.
    pub fn http_stub() -> Self {
        Self {
            name: "http-stub".to_string(),
            description: "First-generation HTTP bindings; every endpoint is an unavailable stub"
                .to_string(),
            segment_case: SegmentCase::Kebab,
            base_segments: Vec::new(),
            dispatch: DispatchStrategy::Stub,
            capabilities: request_response(),
            unsupported: UnsupportedPolicy::EmitFailing,
        }
    }

    /// Second-generation HTTP bindings: callback-driven calls bridged to futures.
    pub fn http_async() -> Self {
        Self {
            name: "http-async".to_string(),
            description: "Second-generation HTTP bindings bridged from transport callbacks"
                .to_string(),
            segment_case: SegmentCase::Kebab,
            base_segments: Vec::new(),
            dispatch: DispatchStrategy::CallbackBridge,
            capabilities: request_response(),
            unsupported: UnsupportedPolicy::EmitFailing,
        }
    }

    /// All built-in profiles, in generation order.
    pub fn builtin() -> Vec<Self> {
        vec![Self::http_stub(), Self::http_async()]
    }

    /// Looks up a built-in profile by name.
    pub fn by_name(name: &str) -> Option<Self> {
        Self::builtin().into_iter().find(|p| p.name == name)
    }

    /// Returns true if the profile can express `pattern`.
    pub fn supports(&self, pattern: CallPattern) -> bool {
        self.capabilities.contains(&pattern)
    }

    /// The URL segment for a method: its explicit override, or its name in
    /// this profile's segment case.
    pub fn segment_for(&self, method: &MethodDef) -> String {
        match &method.http_segment {
            Some(segment) => segment.clone(),
            None => self.segment_case.apply(&method.name),
        }
    }

    /// Methods without a request payload use GET; the rest POST a JSON body.
    pub fn http_verb(&self, method: &MethodDef) -> HttpVerb {
        if method.request.is_some() {
            HttpVerb::Post
        } else {
            HttpVerb::Get
        }
    }

    /// Suffix appended to service names for this profile's client types.
    pub fn client_suffix(&self) -> String {
        to_pascal_case(&self.name)
    }

    pub fn with_base_segment(mut self, segment: impl Into<String>) -> Self {
        self.base_segments.push(segment.into());
        self
    }

    pub fn with_unsupported(mut self, policy: UnsupportedPolicy) -> Self {
        self.unsupported = policy;
        self
    }
}

fn request_response() -> BTreeSet<CallPattern> {
    [CallPattern::Unary, CallPattern::FireAndForget]
        .into_iter()
        .collect()
}
