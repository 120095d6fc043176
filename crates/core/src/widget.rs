use std::path::PathBuf;

/// A live dashboard cell, bound 1:1 to one configured widget.
///
/// `width` / `height` are the cell extents assigned by the grid (the widest
/// entry of the column, the tallest entry of the row), not the size the
/// entry declared.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedWidget {
    /// Position of the entry in the configured list.
    pub index:  usize,
    pub row:    usize,
    pub col:    usize,
    pub width:  u32,
    pub height: u32,
    pub kind:   RenderedKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderedKind {
    Icon(IconCell),
    Label(LabelCell),
}

/// Clickable image that launches a command.
#[derive(Debug, Clone, PartialEq)]
pub struct IconCell {
    pub icon_path: PathBuf,
    /// Program followed by its arguments; empty = nothing to launch.
    pub argv:      Vec<String>,
    pub tooltip:   String,
}

/// Text cell whose content may be replaced by the stats publisher.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCell {
    pub text:          String,
    pub original_text: String,
}

impl LabelCell {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            original_text: text.clone(),
            text,
        }
    }

    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
        }
    }

    /// Put the configured static text back.
    pub fn restore(&mut self) {
        if self.text != self.original_text {
            self.text.clone_from(&self.original_text);
        }
    }
}

impl RenderedWidget {
    pub fn as_label_mut(&mut self) -> Option<&mut LabelCell> {
        match &mut self.kind {
            RenderedKind::Label(label) => Some(label),
            RenderedKind::Icon(_) => None,
        }
    }

    pub fn as_icon(&self) -> Option<&IconCell> {
        match &self.kind {
            RenderedKind::Icon(icon) => Some(icon),
            RenderedKind::Label(_) => None,
        }
    }

    pub fn is_label(&self) -> bool {
        matches!(self.kind, RenderedKind::Label(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_restore_returns_original_text() {
        let mut label = LabelCell::new("Clock");
        label.set_text("🧠 12%");
        assert_eq!(label.text, "🧠 12%");
        label.restore();
        assert_eq!(label.text, "Clock");
        assert_eq!(label.original_text, "Clock");
    }
}
