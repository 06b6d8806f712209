//! Spending categories
//!
//! A fixed list of twelve labels describing what money was spent on.

use std::fmt;

/// What a spending entry was for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Category {
    #[default]
    Food,
    Drinks,
    StudyCafe,
    SwimmingTickets,
    ParkingFees,
    TransportationFees,
    Gaming,
    Shopping,
    Dating,
    SelfEntertainment,
    Travelling,
    Others,
}

impl Category {
    /// All categories in selector order
    pub const ALL: [Category; 12] = [
        Category::Food,
        Category::Drinks,
        Category::StudyCafe,
        Category::SwimmingTickets,
        Category::ParkingFees,
        Category::TransportationFees,
        Category::Gaming,
        Category::Shopping,
        Category::Dating,
        Category::SelfEntertainment,
        Category::Travelling,
        Category::Others,
    ];

    /// Position of this category in [`Category::ALL`]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Drinks => "Drinks",
            Self::StudyCafe => "Study cafe",
            Self::SwimmingTickets => "Swimming tickets",
            Self::ParkingFees => "Parking fees",
            Self::TransportationFees => "Transportation fees",
            Self::Gaming => "Gaming",
            Self::Shopping => "Shopping",
            Self::Dating => "Dating",
            Self::SelfEntertainment => "Self-entertainment",
            Self::Travelling => "Travelling",
            Self::Others => "Others",
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
