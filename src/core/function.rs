use std::cell::RefCell;
use std::fmt;
use std::hash::{BuildHasher, RandomState};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Code point opening a function placeholder. Plain strings containing it are
/// escaped by the literal writer, so only registered placeholders stay raw.
pub(crate) const PLACEHOLDER_CHAR: char = '\u{F8FF}';

const PLACEHOLDER_PREFIX: &str = "\u{F8FF}js:";

static RENDER_COUNTER: AtomicU64 = AtomicU64::new(0);

thread_local! {
    static LITERAL_FUNCTIONS: RefCell<Option<RegisteredFunctions>> = const { RefCell::new(None) };
}

/// Function bodies captured during one literal render.
///
/// Each body is replaced by `<prefix><nonce>:<index>` in the serialized tree.
/// The nonce is unpredictable per render, so option text cannot name a slot.
#[derive(Debug, Default)]
pub(crate) struct RegisteredFunctions {
    nonce: u64,
    bodies: Vec<String>,
}

impl RegisteredFunctions {
    fn register(&mut self, body: &str) -> String {
        let index = self.bodies.len();
        self.bodies.push(body.to_owned());
        format!("{PLACEHOLDER_PREFIX}{:016x}:{index}", self.nonce)
    }

    /// Body registered for `placeholder`, if it is one of ours.
    pub(crate) fn resolve(&self, placeholder: &str) -> Option<&str> {
        let rest = placeholder.strip_prefix(PLACEHOLDER_PREFIX)?;
        let (nonce, index) = rest.split_once(':')?;
        if nonce != format!("{:016x}", self.nonce) {
            return None;
        }
        let index: usize = index.parse().ok()?;
        self.bodies.get(index).map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.bodies.len()
    }
}

/// Captures [`JsFunction`] bodies on this thread until dropped.
pub(crate) struct LiteralModeGuard {
    previous: Option<RegisteredFunctions>,
}

impl LiteralModeGuard {
    pub(crate) fn enter() -> Self {
        let counter = RENDER_COUNTER.fetch_add(1, Ordering::Relaxed);
        let registry = RegisteredFunctions {
            nonce: RandomState::new().hash_one(counter),
            bodies: Vec::new(),
        };
        let previous = LITERAL_FUNCTIONS.with(|slot| slot.replace(Some(registry)));
        Self { previous }
    }

    /// Hands over the bodies registered so far.
    pub(crate) fn take_functions(&self) -> RegisteredFunctions {
        LITERAL_FUNCTIONS.with(|slot| {
            slot.borrow_mut()
                .as_mut()
                .map(|registry| RegisteredFunctions {
                    nonce: registry.nonce,
                    bodies: std::mem::take(&mut registry.bodies),
                })
                .unwrap_or_default()
        })
    }
}

impl Drop for LiteralModeGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        LITERAL_FUNCTIONS.with(|slot| {
            slot.replace(previous);
        });
    }
}

/// Raw JavaScript handed to the library verbatim, typically an event handler
/// such as `function(event) { return false; }`.
///
/// Plain JSON output carries it as an ordinary string; JavaScript literal
/// output writes it unquoted so the library receives a callable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsFunction(String);

impl JsFunction {
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for JsFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JsFunction {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}

impl From<String> for JsFunction {
    fn from(body: String) -> Self {
        Self(body)
    }
}

impl Serialize for JsFunction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let placeholder = LITERAL_FUNCTIONS.with(|slot| {
            slot.borrow_mut()
                .as_mut()
                .map(|registry| registry.register(&self.0))
        });
        match placeholder {
            Some(placeholder) => serializer.serialize_str(&placeholder),
            None => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for JsFunction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self)
    }
}
