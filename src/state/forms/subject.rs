//! Subject categories and the dropdown used to pick one

/// Fixed set of contact subjects. The key is what gets submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectCategory {
    General,
    Orders,
    Press,
    Wholesale,
    Other,
}

impl SubjectCategory {
    pub const ALL: [SubjectCategory; 5] = [
        SubjectCategory::General,
        SubjectCategory::Orders,
        SubjectCategory::Press,
        SubjectCategory::Wholesale,
        SubjectCategory::Other,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SubjectCategory::General => "general",
            SubjectCategory::Orders => "orders",
            SubjectCategory::Press => "press",
            SubjectCategory::Wholesale => "wholesale",
            SubjectCategory::Other => "other",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Localizer key for the option label
    pub fn label_key(self) -> String {
        format!("contact.subject.{}", self.key())
    }
}

/// Dropdown state for the subject selector.
///
/// `highlighted` is `None` when nothing is highlighted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectSelector {
    pub is_open: bool,
    pub highlighted: Option<usize>,
}

impl SubjectSelector {
    pub fn option_count() -> usize {
        SubjectCategory::ALL.len()
    }

    /// Open the dropdown, highlighting the current subject if there is one
    pub fn open(&mut self, current: &str) {
        self.is_open = true;
        self.highlighted = SubjectCategory::ALL.iter().position(|c| c.key() == current);
    }

    /// Close without choosing anything
    pub fn close(&mut self) {
        self.is_open = false;
        self.highlighted = None;
    }

    pub fn toggle(&mut self, current: &str) {
        if self.is_open {
            self.close();
        } else {
            self.open(current);
        }
    }

    pub fn highlight_next(&mut self) {
        if !self.is_open {
            return;
        }
        let count = Self::option_count();
        self.highlighted = Some(match self.highlighted {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    pub fn highlight_prev(&mut self) {
        if !self.is_open {
            return;
        }
        let count = Self::option_count();
        self.highlighted = Some(match self.highlighted {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        });
    }

    /// Choose the option at `index` and close. Returns `None` (and stays
    /// open) when the dropdown is closed or the index is out of range.
    pub fn select(&mut self, index: usize) -> Option<SubjectCategory> {
        if !self.is_open {
            return None;
        }
        let category = SubjectCategory::ALL.get(index).copied()?;
        self.close();
        Some(category)
    }

    pub fn select_highlighted(&mut self) -> Option<SubjectCategory> {
        let index = self.highlighted?;
        self.select(index)
    }
}
