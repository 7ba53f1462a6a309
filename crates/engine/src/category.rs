//! Expense categories and the color tag each one is shown with.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed set of categories. Free text that matches none of them is `Other`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Healthcare,
    Education,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Shopping,
        Category::Bills,
        Category::Healthcare,
        Category::Education,
        Category::Other,
    ];

    /// Maps free text to a category.
    ///
    /// The match is case-insensitive but otherwise exact: `" food"` or
    /// `"foods"` fall back to [`Category::Other`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "food" => Category::Food,
            "transport" => Category::Transport,
            "entertainment" => Category::Entertainment,
            "shopping" => Category::Shopping,
            "bills" => Category::Bills,
            "healthcare" => Category::Healthcare,
            "education" => Category::Education,
            _ => Category::Other,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Other => "Others",
        }
    }

    #[must_use]
    pub const fn color(self) -> TagColor {
        match self {
            Category::Food => TagColor::Green,
            Category::Transport => TagColor::Blue,
            Category::Entertainment => TagColor::Red,
            Category::Shopping => TagColor::Amber,
            Category::Bills => TagColor::Purple,
            Category::Healthcare => TagColor::Pink,
            Category::Education => TagColor::Cyan,
            Category::Other => TagColor::Gray,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Background color of a category tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    Green,
    Blue,
    Red,
    Amber,
    Purple,
    Pink,
    Cyan,
    Gray,
}

impl TagColor {
    /// Opaque ARGB value.
    #[must_use]
    pub const fn argb(self) -> u32 {
        match self {
            TagColor::Green => 0xFF10_B981,
            TagColor::Blue => 0xFF3B_82F6,
            TagColor::Red => 0xFFEF_4444,
            TagColor::Amber => 0xFFF5_9E0B,
            TagColor::Purple => 0xFF8B_5CF6,
            TagColor::Pink => 0xFFEC_4899,
            TagColor::Cyan => 0xFF06_B6D4,
            TagColor::Gray => 0xFF6B_7280,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TagColor::Green => "green",
            TagColor::Blue => "blue",
            TagColor::Red => "red",
            TagColor::Amber => "amber",
            TagColor::Purple => "purple",
            TagColor::Pink => "pink",
            TagColor::Cyan => "cyan",
            TagColor::Gray => "gray",
        }
    }

    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        let argb = self.argb();
        (
            ((argb >> 16) & 0xFF) as u8,
            ((argb >> 8) & 0xFF) as u8,
            (argb & 0xFF) as u8,
        )
    }
}

impl fmt::Display for TagColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Category::parse("Food"), Category::Food);
        assert_eq!(Category::parse("FOOD"), Category::Food);
        assert_eq!(Category::parse("transport"), Category::Transport);
        assert_eq!(Category::parse("HealthCare"), Category::Healthcare);
    }

    #[test]
    fn unknown_text_falls_back_to_other() {
        assert_eq!(Category::parse("Others"), Category::Other);
        assert_eq!(Category::parse(""), Category::Other);
        assert_eq!(Category::parse(" food"), Category::Other);
        assert_eq!(Category::parse("groceries"), Category::Other);
    }

    #[test]
    fn every_category_round_trips_through_its_name() {
        for category in Category::ALL.into_iter().filter(|c| *c != Category::Other) {
            assert_eq!(Category::parse(category.name()), category);
        }
    }

    #[test]
    fn colors_match_palette() {
        assert_eq!(Category::Food.color(), TagColor::Green);
        assert_eq!(Category::Shopping.color(), TagColor::Amber);
        assert_eq!(Category::Other.color(), TagColor::Gray);
        assert_eq!(TagColor::Green.argb(), 0xFF10B981);
        assert_eq!(TagColor::Green.rgb(), (0x10, 0xB9, 0x81));
        assert_eq!(TagColor::Gray.rgb(), (0x6B, 0x72, 0x80));
    }
}
