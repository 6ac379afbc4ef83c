//! Fixed item catalog
//!
//! Every item belongs to exactly one category, and every category owns one
//! receptacle and one display color.

use serde::{Deserialize, Serialize};

use crate::Rgb;

/// Recycling class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Paper,
    Plastic,
    Metal,
    Organic,
    EWaste,
}

impl Category {
    /// All categories, in receptacle order (left to right)
    pub const ALL: [Category; 5] = [
        Category::Paper,
        Category::Plastic,
        Category::Metal,
        Category::Organic,
        Category::EWaste,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn label(&self) -> &'static str {
        match self {
            Category::Paper => "Paper",
            Category::Plastic => "Plastic",
            Category::Metal => "Metal",
            Category::Organic => "Organic",
            Category::EWaste => "E-Waste",
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Category::Paper => Rgb(59, 130, 246),
            Category::Plastic => Rgb(239, 68, 68),
            Category::Metal => Rgb(161, 161, 170),
            Category::Organic => Rgb(34, 197, 94),
            Category::EWaste => Rgb(147, 51, 234),
        }
    }

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemDef {
    pub name: &'static str,
    pub category: Category,
    pub tip: &'static str,
}

const fn item(name: &'static str, category: Category, tip: &'static str) -> ItemDef {
    ItemDef {
        name,
        category,
        tip,
    }
}

pub static ITEMS: [ItemDef; 25] = [
    item("Newspaper", Category::Paper, "Paper goes in blue bin. Keep it dry."),
    item("Cardboard", Category::Paper, "Flatten boxes to save space."),
    item("Notebook", Category::Paper, "Remove plastic spirals when possible."),
    item("Magazine", Category::Paper, "Glossy paper can be recycled in many cities."),
    item("Paper Cup", Category::Paper, "If wax-lined, check local rules."),
    item("Bottle", Category::Plastic, "Empty and crush to save space."),
    item("Food Box", Category::Plastic, "Rinse to avoid contamination."),
    item("Straw", Category::Plastic, "Hard to recycle; avoid single-use."),
    item("Milk Jug", Category::Plastic, "Caps on or off depends on locale."),
    item("Toothbrush", Category::Plastic, "Consider bamboo alternatives."),
    item("Can", Category::Metal, "Aluminum recycles endlessly!"),
    item("Tin Can", Category::Metal, "Rinse before recycling."),
    item("Soda Can", Category::Metal, "Crush cans to save space."),
    item("Foil", Category::Metal, "Clean foil can be recycled if balled up."),
    item("Steel Lid", Category::Metal, "Attach to can if safe."),
    item("Banana Peel", Category::Organic, "Great for compost."),
    item("Apple Core", Category::Organic, "Compost to enrich soil."),
    item("Tea Bag", Category::Organic, "Check if bag has plastic."),
    item("Leaves", Category::Organic, "Compost yard waste."),
    item("Egg Shells", Category::Organic, "Add to compost for calcium."),
    item("Phone", Category::EWaste, "Take to e-waste drop-off."),
    item("Battery", Category::EWaste, "Never bin batteries!"),
    item("Charger", Category::EWaste, "E-waste centers recover metals."),
    item("Earphones", Category::EWaste, "Recycle wires/e-waste properly."),
    item("Keyboard", Category::EWaste, "Contains valuable components."),
];

/// Look up an item by its display name
pub fn find_item(name: &str) -> Option<&'static ItemDef> {
    ITEMS.iter().find(|it| it.name == name)
}
