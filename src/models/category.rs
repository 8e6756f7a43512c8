use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// The six fixed spending buckets a trip budget is divided into.
///
/// The enum is the allocation key; the user-facing labels live in
/// [`Category::label`] so the arithmetic never depends on display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Lodging,
    Transport,
    Feasts,
    Activities,
    Miscellaneous,
    Savings,
}

impl Category {
    /// All categories in allocation order
    pub const ALL: [Category; 6] = [
        Category::Lodging,
        Category::Transport,
        Category::Feasts,
        Category::Activities,
        Category::Miscellaneous,
        Category::Savings,
    ];

    /// Display label shown to users and used as the JSON key
    pub fn label(self) -> &'static str {
        match self {
            Category::Lodging => "Lodging (Inns) 🏨",
            Category::Transport => "Transport (Brooms) ✈️",
            Category::Feasts => "Feasts & Butterbeer 🍽️",
            Category::Activities => "Quests & Tours 🎟️",
            Category::Miscellaneous => "Trinkets 🛍️",
            Category::Savings => "Dark Arts Defense (Savings) 💸",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Per-category amounts in whole currency units, in [`Category::ALL`] order
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAllocation {
    amounts: [Decimal; Category::ALL.len()],
}

impl CategoryAllocation {
    pub fn new(amounts: [Decimal; Category::ALL.len()]) -> Self {
        Self { amounts }
    }

    pub fn amount(&self, category: Category) -> Decimal {
        self.amounts[category.index()]
    }

    /// Sum of all category amounts; this is the reported estimated cost
    pub fn total(&self) -> Decimal {
        self.amounts.iter().copied().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Decimal)> + '_ {
        Category::ALL
            .iter()
            .map(move |category| (*category, self.amounts[category.index()]))
    }
}

/// Serialized as a label-keyed object so API clients see the display names
impl Serialize for CategoryAllocation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for (category, amount) in self.iter() {
            map.serialize_entry(category.label(), &amount)?;
        }
        map.end()
    }
}
