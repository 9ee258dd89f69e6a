/// Identifier of the texture painted on a chamber voxel.
///
/// [`TextureId::NONE`] marks air.
///
/// # Examples
///
/// ```rust
/// use chamber::TextureId;
///
/// let id = TextureId::new(3);
/// assert_eq!(id.id(), 3);
/// assert!(TextureId::default().is_none());
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TextureId(u32);

impl TextureId {
    pub const NONE: TextureId = TextureId(0);

    #[must_use]
    #[inline(always)]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    #[inline(always)]
    pub const fn id(&self) -> u32 {
        self.0
    }

    #[must_use]
    #[inline(always)]
    pub const fn is_none(&self) -> bool {
        self.0 == Self::NONE.0
    }
}

impl From<u32> for TextureId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<TextureId> for u32 {
    #[inline]
    fn from(id: TextureId) -> u32 {
        id.0
    }
}

impl std::fmt::Display for TextureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
