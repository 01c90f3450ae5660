//! Request-scoped identifiers attached to records.
//!
//! Only two identifiers are recognized: `session_id` and `self_id`. Anything
//! that can hand them out implements [`ContextSource`], so request types can
//! be passed straight to [`crate::Event::context`] without copying into a
//! [`Context`] first.

/// Typed accessor for the two well-known context fields.
pub trait ContextSource {
    /// Session identifier, if the caller has one.
    fn session_id(&self) -> Option<&str>;

    /// Identifier of the acting party, if known.
    fn self_id(&self) -> Option<&str>;
}

/// Owned context carrying the well-known identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    session_id: Option<String>,
    self_id: Option<String>,
}

impl Context {
    /// Empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session identifier.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Set the self/actor identifier.
    pub fn with_self_id(mut self, self_id: impl Into<String>) -> Self {
        self.self_id = Some(self_id.into());
        self
    }

    /// True when neither identifier is present.
    pub fn is_empty(&self) -> bool {
        self.session_id.is_none() && self.self_id.is_none()
    }
}

impl ContextSource for Context {
    fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    fn self_id(&self) -> Option<&str> {
        self.self_id.as_deref()
    }
}

impl<T: ContextSource + ?Sized> ContextSource for &T {
    fn session_id(&self) -> Option<&str> {
        (**self).session_id()
    }

    fn self_id(&self) -> Option<&str> {
        (**self).self_id()
    }
}

impl<T: ContextSource> ContextSource for Option<T> {
    fn session_id(&self) -> Option<&str> {
        self.as_ref().and_then(ContextSource::session_id)
    }

    fn self_id(&self) -> Option<&str> {
        self.as_ref().and_then(ContextSource::self_id)
    }
}
