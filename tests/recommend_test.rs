use thali::{recommend, Catalogue, Dish, RecommendationCriteria, SpiceLevel};

fn dish(name: &str, meal: &str, spice: SpiceLevel, weather: &str, comfort: bool) -> Dish {
    let mut d = Dish::new(name);
    d.meal_type = meal.to_string();
    d.spice_level = spice;
    d.weather = weather.to_string();
    d.comfort_food = comfort;
    d
}

fn names<'a>(hits: &[&'a Dish]) -> Vec<&'a str> {
    hits.iter().map(|d| d.name.as_str()).collect()
}

fn mixed_catalogue() -> Catalogue {
    Catalogue::from(vec![
        dish("Aloo Paratha", "Breakfast", SpiceLevel::Medium, "Cold", true),
        dish("Palak Paneer", "Dinner", SpiceLevel::Medium, "Cold", true),
        dish("Dahi Vada", "Dinner", SpiceLevel::Mild, "Cold", false),
        dish("Baingan Bharta", "Dinner", SpiceLevel::Medium, "Cold", false),
        dish("Lemon Rice", "Lunch", SpiceLevel::Medium, "Sunny", false),
        dish("Dal Tadka", "Dinner", SpiceLevel::Medium, "Cold", true),
        dish("Gatte Ki Sabzi", "Dinner", SpiceLevel::Medium, "Sunny", true),
    ])
}

#[test]
fn test_palak_paneer_example() {
    let catalogue = Catalogue::from(vec![
        dish("Palak Paneer", "Dinner", SpiceLevel::Medium, "Cold", true),
        dish("Dahi Vada", "Dinner", SpiceLevel::Mild, "Cold", false),
    ]);
    let criteria = RecommendationCriteria::new("Dinner", SpiceLevel::Medium, "Cold").comfort(true);

    assert_eq!(names(&recommend(&catalogue, &criteria)), vec!["Palak Paneer"]);
}

#[test]
fn test_base_filter_is_exact_and_ordered() {
    let catalogue = mixed_catalogue();
    let criteria = RecommendationCriteria::new("Dinner", SpiceLevel::Medium, "Cold");

    let hits = recommend(&catalogue, &criteria);
    assert_eq!(
        names(&hits),
        vec!["Palak Paneer", "Baingan Bharta", "Dal Tadka"]
    );
    for d in &hits {
        assert_eq!(d.meal_type, "Dinner");
        assert_eq!(d.spice_level, SpiceLevel::Medium);
        assert_eq!(d.weather, "Cold");
    }
    let excluded = catalogue.iter().filter(|d| !hits.contains(d));
    for d in excluded {
        assert!(!criteria.matches(d));
    }
}

#[test]
fn test_comfort_never_widens() {
    let catalogue = mixed_catalogue();
    for (meal, spice, weather) in [
        ("Dinner", SpiceLevel::Medium, "Cold"),
        ("Dinner", SpiceLevel::Mild, "Cold"),
        ("Lunch", SpiceLevel::Medium, "Sunny"),
        ("Brunch", SpiceLevel::Hot, "Humid"),
    ] {
        let base = RecommendationCriteria::new(meal, spice, weather);
        let all = recommend(&catalogue, &base);
        let comfort = recommend(&catalogue, &base.clone().comfort(true));

        assert!(comfort.len() <= all.len());
        assert!(comfort.iter().all(|d| all.contains(d) && d.comfort_food));
    }
}

#[test]
fn test_matching_is_case_sensitive_text() {
    let catalogue = mixed_catalogue();
    let criteria = RecommendationCriteria::new("dinner", SpiceLevel::Medium, "Cold");
    assert!(recommend(&catalogue, &criteria).is_empty());
}
