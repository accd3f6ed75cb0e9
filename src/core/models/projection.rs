/// Opaque projection specification produced by an external query-shape
/// resolver. The service threads it through to the storage engine without
/// inspecting, validating, or transforming it; `all` (the default) means
/// every field is materialized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Projection(Option<String>);

impl Projection {
    pub fn all() -> Self {
        Projection(None)
    }

    pub fn from_spec(spec: impl Into<String>) -> Self {
        Projection(Some(spec.into()))
    }

    pub fn is_all(&self) -> bool {
        self.0.is_none()
    }

    /// The raw spec as the resolver produced it, if one was supplied.
    pub fn spec(&self) -> Option<&str> {
        self.0.as_deref()
    }
}
