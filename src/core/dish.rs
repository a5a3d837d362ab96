use crate::core::schema::Column;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How hot a dish is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpiceLevel {
    #[default]
    Mild,
    Medium,
    Hot,
}

impl SpiceLevel {
    pub const ALL: [SpiceLevel; 3] = [SpiceLevel::Mild, SpiceLevel::Medium, SpiceLevel::Hot];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpiceLevel::Mild => "Mild",
            SpiceLevel::Medium => "Medium",
            SpiceLevel::Hot => "Hot",
        }
    }
}

impl FromStr for SpiceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpiceLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown spice level '{}' (expected Mild, Medium or Hot)", s))
    }
}

impl fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rough effort needed to cook a dish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CookingTime {
    #[default]
    Quick,
    Moderate,
    Elaborate,
}

impl CookingTime {
    pub const ALL: [CookingTime; 3] = [
        CookingTime::Quick,
        CookingTime::Moderate,
        CookingTime::Elaborate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CookingTime::Quick => "Quick",
            CookingTime::Moderate => "Moderate",
            CookingTime::Elaborate => "Elaborate",
        }
    }
}

impl FromStr for CookingTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CookingTime::ALL
            .into_iter()
            .find(|time| time.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown cooking time '{}' (expected Quick, Moderate or Elaborate)",
                    s
                )
            })
    }
}

impl fmt::Display for CookingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dietary class. The catalogue is vegetarian only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dietary {
    #[default]
    Veg,
}

impl Dietary {
    pub const ALL: [Dietary; 1] = [Dietary::Veg];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dietary::Veg => "Veg",
        }
    }
}

impl FromStr for Dietary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dietary::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown dietary class '{}' (expected Veg)", s))
    }
}

impl fmt::Display for Dietary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized form of a boolean field.
pub fn format_flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Parse a boolean typed by a user. Case and surrounding whitespace are ignored.
pub fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.trim() {
        "True" | "true" | "TRUE" => Ok(true),
        "False" | "false" | "FALSE" => Ok(false),
        other => Err(format!("Expected True or False, found '{}'", other)),
    }
}

/// The only tokens a stored field of `column` may hold. Empty for free-text columns.
pub fn stored_tokens(column: Column) -> &'static [&'static str] {
    match column {
        Column::ComfortFood | Column::MasalaFood | Column::Dessert => &["True", "False"],
        Column::SpiceLevel => &["Mild", "Medium", "Hot"],
        Column::CookingTime => &["Quick", "Moderate", "Elaborate"],
        Column::Dietary => &["Veg"],
        _ => &[],
    }
}

/// One row of the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dish {
    #[serde(rename = "Dish Name")]
    pub name: String,
    #[serde(rename = "Cuisine")]
    pub cuisine: String,
    #[serde(rename = "Meal Type")]
    pub meal_type: String,
    #[serde(rename = "Comfort Food")]
    pub comfort_food: bool,
    #[serde(rename = "Masala Food")]
    pub masala_food: bool,
    #[serde(rename = "Dessert")]
    pub dessert: bool,
    #[serde(rename = "Spice Level")]
    pub spice_level: SpiceLevel,
    #[serde(rename = "Cooking Time")]
    pub cooking_time: CookingTime,
    #[serde(rename = "Mood-Based")]
    pub mood: String,
    #[serde(rename = "Weather-Based")]
    pub weather: String,
    #[serde(rename = "Dietary")]
    pub dietary: Dietary,
    #[serde(rename = "Occasion")]
    pub occasion: String,
    #[serde(rename = "Region")]
    pub region: String,
}

impl Dish {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Text value of a column, exactly as it is stored.
    pub fn value(&self, column: Column) -> String {
        match column {
            Column::DishName => self.name.clone(),
            Column::Cuisine => self.cuisine.clone(),
            Column::MealType => self.meal_type.clone(),
            Column::ComfortFood => format_flag(self.comfort_food).to_string(),
            Column::MasalaFood => format_flag(self.masala_food).to_string(),
            Column::Dessert => format_flag(self.dessert).to_string(),
            Column::SpiceLevel => self.spice_level.to_string(),
            Column::CookingTime => self.cooking_time.to_string(),
            Column::MoodBased => self.mood.clone(),
            Column::WeatherBased => self.weather.clone(),
            Column::Dietary => self.dietary.to_string(),
            Column::Occasion => self.occasion.clone(),
            Column::Region => self.region.clone(),
        }
    }

    /// Set a column from its text form. Free-text columns take the value verbatim.
    pub fn set_value(&mut self, column: Column, raw: &str) -> Result<(), String> {
        match column {
            Column::DishName => self.name = raw.to_string(),
            Column::Cuisine => self.cuisine = raw.to_string(),
            Column::MealType => self.meal_type = raw.to_string(),
            Column::ComfortFood => self.comfort_food = parse_flag(raw)?,
            Column::MasalaFood => self.masala_food = parse_flag(raw)?,
            Column::Dessert => self.dessert = parse_flag(raw)?,
            Column::SpiceLevel => self.spice_level = raw.parse()?,
            Column::CookingTime => self.cooking_time = raw.parse()?,
            Column::MoodBased => self.mood = raw.to_string(),
            Column::WeatherBased => self.weather = raw.to_string(),
            Column::Dietary => self.dietary = raw.parse()?,
            Column::Occasion => self.occasion = raw.to_string(),
            Column::Region => self.region = raw.to_string(),
        }
        Ok(())
    }

    /// All fields in storage order
    pub fn to_record(&self) -> Vec<String> {
        Column::ALL.iter().map(|c| self.value(*c)).collect()
    }

    /// Build a dish from fields in storage order, parsing them the way user input is parsed.
    pub fn from_record<'a, I>(fields: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let fields: Vec<&str> = fields.into_iter().collect();
        if fields.len() != Column::ALL.len() {
            return Err(format!(
                "expected {} fields, found {}",
                Column::ALL.len(),
                fields.len()
            ));
        }

        let mut dish = Dish::default();
        for (column, raw) in Column::ALL.into_iter().zip(fields) {
            dish.set_value(column, raw)
                .map_err(|e| format!("column '{}': {}", column.header(), e))?;
        }
        Ok(dish)
    }

    /// Build a dish from a stored record. Flags and fixed enums must be spelled
    /// exactly as they are written, so loading and persisting never changes a field.
    pub fn from_stored_record<'a, I>(fields: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let fields: Vec<&str> = fields.into_iter().collect();
        for (column, raw) in Column::ALL.into_iter().zip(fields.iter()) {
            let tokens = stored_tokens(column);
            if !tokens.is_empty() && !tokens.iter().any(|t| t == raw) {
                return Err(format!(
                    "column '{}': expected one of {}, found '{}'",
                    column.header(),
                    tokens.join(", "),
                    raw
                ));
            }
        }
        Self::from_record(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_enums_parse_case_insensitively() {
        assert_eq!("medium".parse::<SpiceLevel>(), Ok(SpiceLevel::Medium));
        assert_eq!("Elaborate".parse::<CookingTime>(), Ok(CookingTime::Elaborate));
        assert_eq!("VEG".parse::<Dietary>(), Ok(Dietary::Veg));
        assert!("Scorching".parse::<SpiceLevel>().is_err());
        assert!("Vegan".parse::<Dietary>().is_err());
    }

    #[test]
    fn test_flag_tokens() {
        assert_eq!(format_flag(true), "True");
        assert_eq!(format_flag(false), "False");
        assert_eq!(parse_flag("True"), Ok(true));
        assert_eq!(parse_flag("false"), Ok(false));
        assert!(parse_flag("yes").is_err());
    }

    #[test]
    fn test_record_round_trip_keeps_text() {
        let mut dish = Dish::new("Palak Paneer");
        dish.cuisine = "North Indian".to_string();
        dish.meal_type = "Dinner".to_string();
        dish.comfort_food = true;
        dish.spice_level = SpiceLevel::Medium;
        dish.weather = "Cold".to_string();

        let record = dish.to_record();
        assert_eq!(record[0], "Palak Paneer");
        assert_eq!(record[3], "True");
        assert_eq!(record[4], "False");
        assert_eq!(record[6], "Medium");

        let parsed = Dish::from_record(record.iter().map(String::as_str)).unwrap();
        assert_eq!(parsed, dish);
    }

    #[test]
    fn test_stored_record_rejects_non_canonical_tokens() {
        let canonical = Dish::new("Upma").to_record();
        assert!(Dish::from_stored_record(canonical.iter().map(String::as_str)).is_ok());

        for (idx, token) in [(3, "true"), (5, "FALSE"), (6, "medium"), (7, " Quick "), (10, "veg")] {
            let mut record = canonical.clone();
            record[idx] = token.to_string();
            let err = Dish::from_stored_record(record.iter().map(String::as_str)).unwrap_err();
            assert!(err.contains(Column::ALL[idx].header()), "{}", err);
            // User input stays lenient
            assert!(Dish::from_record(record.iter().map(String::as_str)).is_ok());
        }
    }

    #[test]
    fn test_from_record_reports_column() {
        let mut record = Dish::new("Kheer").to_record();
        record[6] = "Volcanic".to_string();
        let err = Dish::from_record(record.iter().map(String::as_str)).unwrap_err();
        assert!(err.contains("Spice Level"));

        let short = ["Kheer", "Bengali"];
        let err = Dish::from_record(short).unwrap_err();
        assert!(err.contains("expected 13 fields, found 2"));
    }
}
