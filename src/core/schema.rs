use serde::{Deserialize, Serialize};
use std::fmt;

/// Header row of the catalogue file, in storage order.
pub const COLUMNS: [&str; 13] = [
    "Dish Name",
    "Cuisine",
    "Meal Type",
    "Comfort Food",
    "Masala Food",
    "Dessert",
    "Spice Level",
    "Cooking Time",
    "Mood-Based",
    "Weather-Based",
    "Dietary",
    "Occasion",
    "Region",
];

/// How the values of a column are constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// The de-facto key of a row
    Name,
    /// Free text whose choices are whatever the catalogue already holds
    OpenEnum,
    /// A small hard-coded set of values
    FixedEnum,
    Flag,
}

/// A single column of the dish table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    DishName,
    Cuisine,
    MealType,
    ComfortFood,
    MasalaFood,
    Dessert,
    SpiceLevel,
    CookingTime,
    MoodBased,
    WeatherBased,
    Dietary,
    Occasion,
    Region,
}

impl Column {
    pub const ALL: [Column; 13] = [
        Column::DishName,
        Column::Cuisine,
        Column::MealType,
        Column::ComfortFood,
        Column::MasalaFood,
        Column::Dessert,
        Column::SpiceLevel,
        Column::CookingTime,
        Column::MoodBased,
        Column::WeatherBased,
        Column::Dietary,
        Column::Occasion,
        Column::Region,
    ];

    /// Columns whose selection options grow with the catalogue.
    pub const OPEN_ENUMS: [Column; 6] = [
        Column::Cuisine,
        Column::MealType,
        Column::MoodBased,
        Column::WeatherBased,
        Column::Occasion,
        Column::Region,
    ];

    /// Column name as written in the header row
    pub fn header(&self) -> &'static str {
        COLUMNS[self.index()]
    }

    /// Position of the column in a stored record
    pub fn index(&self) -> usize {
        match self {
            Column::DishName => 0,
            Column::Cuisine => 1,
            Column::MealType => 2,
            Column::ComfortFood => 3,
            Column::MasalaFood => 4,
            Column::Dessert => 5,
            Column::SpiceLevel => 6,
            Column::CookingTime => 7,
            Column::MoodBased => 8,
            Column::WeatherBased => 9,
            Column::Dietary => 10,
            Column::Occasion => 11,
            Column::Region => 12,
        }
    }

    /// Short key used for `field=value` assignments in commands
    pub fn key(&self) -> &'static str {
        match self {
            Column::DishName => "name",
            Column::Cuisine => "cuisine",
            Column::MealType => "meal",
            Column::ComfortFood => "comfort",
            Column::MasalaFood => "masala",
            Column::Dessert => "dessert",
            Column::SpiceLevel => "spice",
            Column::CookingTime => "time",
            Column::MoodBased => "mood",
            Column::WeatherBased => "weather",
            Column::Dietary => "dietary",
            Column::Occasion => "occasion",
            Column::Region => "region",
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::DishName => ColumnKind::Name,
            Column::ComfortFood | Column::MasalaFood | Column::Dessert => ColumnKind::Flag,
            Column::SpiceLevel | Column::CookingTime | Column::Dietary => ColumnKind::FixedEnum,
            _ => ColumnKind::OpenEnum,
        }
    }

    pub fn is_open_enum(&self) -> bool {
        self.kind() == ColumnKind::OpenEnum
    }

    /// Resolve a column from its command key or its header name, ignoring case.
    pub fn lookup(name: &str) -> Option<Column> {
        let name = name.trim();
        Column::ALL.into_iter().find(|c| {
            c.key().eq_ignore_ascii_case(name) || c.header().eq_ignore_ascii_case(name)
        })
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}
