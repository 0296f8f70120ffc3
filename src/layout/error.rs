use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Pentagon arrows compare each label with its own glyph, so both
    /// sequences must be index-aligned.
    #[error("misaligned input: {labels} labels but {glyphs} arrow glyphs")]
    MisalignedInput { labels: usize, glyphs: usize },
}
