use std::borrow::Cow;

/// Identifier for a one-shot audio/visual cue.
///
/// Fire-and-forget: playback has no return value and failures are ignored
/// by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectRef(pub Cow<'static, str>);

impl EffectRef {
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
