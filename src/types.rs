//! Core shared types.
//!
//! Only cross-cutting rendering types live here; animation state belongs to
//! its owning module.

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
    }
}

impl Attr {
    /// Map each set flag to its crossterm attribute.
    pub fn to_crossterm(self) -> Vec<crossterm::style::Attribute> {
        use crossterm::style::Attribute;

        let mut out = Vec::new();
        if self.contains(Self::BOLD) {
            out.push(Attribute::Bold);
        }
        if self.contains(Self::DIM) {
            out.push(Attribute::Dim);
        }
        if self.contains(Self::ITALIC) {
            out.push(Attribute::Italic);
        }
        if self.contains(Self::UNDERLINE) {
            out.push(Attribute::Underlined);
        }
        out
    }
}

// =============================================================================
// Tests
// =============================================================================
