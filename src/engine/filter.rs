use crate::core::catalogue::Catalogue;
use crate::core::dish::{Dish, SpiceLevel};
use serde::{Deserialize, Serialize};

/// What the user is in the mood for.
///
/// The three attribute criteria must all match exactly. Each flag that is
/// set additionally requires the matching boolean field to be true; unset
/// flags do not constrain the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationCriteria {
    pub meal_type: String,
    pub spice_level: SpiceLevel,
    pub weather: String,
    #[serde(default)]
    pub comfort: bool,
    #[serde(default)]
    pub masala: bool,
    #[serde(default)]
    pub dessert: bool,
}

impl RecommendationCriteria {
    pub fn new(
        meal_type: impl Into<String>,
        spice_level: SpiceLevel,
        weather: impl Into<String>,
    ) -> Self {
        Self {
            meal_type: meal_type.into(),
            spice_level,
            weather: weather.into(),
            comfort: false,
            masala: false,
            dessert: false,
        }
    }

    pub fn comfort(mut self, on: bool) -> Self {
        self.comfort = on;
        self
    }

    pub fn masala(mut self, on: bool) -> Self {
        self.masala = on;
        self
    }

    pub fn dessert(mut self, on: bool) -> Self {
        self.dessert = on;
        self
    }

    pub fn matches(&self, dish: &Dish) -> bool {
        dish.meal_type == self.meal_type
            && dish.spice_level == self.spice_level
            && dish.weather == self.weather
            && (!self.comfort || dish.comfort_food)
            && (!self.masala || dish.masala_food)
            && (!self.dessert || dish.dessert)
    }
}

/// Dishes matching `criteria`, in catalogue order.
pub fn recommend<'a>(catalogue: &'a Catalogue, criteria: &RecommendationCriteria) -> Vec<&'a Dish> {
    let hits: Vec<&Dish> = catalogue.iter().filter(|d| criteria.matches(d)).collect();
    tracing::debug!(
        meal_type = %criteria.meal_type,
        spice_level = %criteria.spice_level,
        weather = %criteria.weather,
        candidates = catalogue.len(),
        hits = hits.len(),
        "Filtered catalogue"
    );
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(name: &str, meal: &str, spice: SpiceLevel, weather: &str) -> Dish {
        let mut d = Dish::new(name);
        d.meal_type = meal.to_string();
        d.spice_level = spice;
        d.weather = weather.to_string();
        d
    }

    #[test]
    fn test_dessert_flag_narrows_like_the_others() {
        let mut kheer = dish("Kheer", "Dinner", SpiceLevel::Mild, "Cold");
        kheer.dessert = true;
        let khichdi = dish("Khichdi", "Dinner", SpiceLevel::Mild, "Cold");
        let catalogue = Catalogue::from(vec![khichdi, kheer]);

        let criteria = RecommendationCriteria::new("Dinner", SpiceLevel::Mild, "Cold");
        assert_eq!(recommend(&catalogue, &criteria).len(), 2);

        let hits = recommend(&catalogue, &criteria.dessert(true));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Kheer");
    }

    #[test]
    fn test_flags_combine() {
        let mut both = dish("Chole", "Lunch", SpiceLevel::Hot, "Cold");
        both.comfort_food = true;
        both.masala_food = true;
        let mut masala_only = dish("Pav Bhaji", "Lunch", SpiceLevel::Hot, "Cold");
        masala_only.masala_food = true;
        let catalogue = Catalogue::from(vec![masala_only, both]);

        let criteria = RecommendationCriteria::new("Lunch", SpiceLevel::Hot, "Cold")
            .comfort(true)
            .masala(true);
        let hits = recommend(&catalogue, &criteria);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Chole");
    }

    #[test]
    fn test_empty_catalogue_yields_nothing() {
        let criteria = RecommendationCriteria::new("Breakfast", SpiceLevel::Mild, "Sunny");
        assert!(recommend(&Catalogue::new(), &criteria).is_empty());
    }
}
