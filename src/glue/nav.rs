/// Scroll depth past which the navbar switches to its compact style.
pub const SCROLLED_AFTER: f64 = 100.0;
/// How far above a section's top its nav link already counts as active.
pub const SECTION_LEAD: f64 = 100.0;

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER
}

/// A page section's id and vertical extent.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn is_current(&self, scroll_y: f64) -> bool {
        let start = self.top - SECTION_LEAD;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// Id of the section the reader is in. Overlaps resolve to the later section.
pub fn active_section(scroll_y: f64, sections: &[Section]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.is_current(scroll_y))
        .map(|s| s.id.as_str())
}

/// Up to two uppercase initials, one per leading word.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/glue/nav.rs"]
mod tests;
