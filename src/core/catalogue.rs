use crate::core::dish::Dish;
use serde::{Deserialize, Serialize};

/// Ordered collection of dishes held in memory.
///
/// Rows are addressed by exact `Dish Name` match. Names are not required
/// to be unique, so the name-based mutations act on every matching row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalogue {
    dishes: Vec<Dish>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dish> {
        self.dishes.iter()
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// First row with the given name
    pub fn find(&self, name: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn push(&mut self, dish: Dish) {
        self.dishes.push(dish);
    }

    /// Replace every row named `name` with a copy of `dish`. Returns the number of rows replaced.
    pub fn replace_named(&mut self, name: &str, dish: &Dish) -> usize {
        let mut replaced = 0;
        for row in self.dishes.iter_mut().filter(|d| d.name == name) {
            *row = dish.clone();
            replaced += 1;
        }
        replaced
    }

    /// Remove every row named `name`. Returns the number of rows removed.
    pub fn remove_named(&mut self, name: &str) -> usize {
        let before = self.dishes.len();
        self.dishes.retain(|d| d.name != name);
        before - self.dishes.len()
    }
}

impl From<Vec<Dish>> for Catalogue {
    fn from(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a Dish;
    type IntoIter = std::slice::Iter<'a, Dish>;

    fn into_iter(self) -> Self::IntoIter {
        self.dishes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalogue {
        Catalogue::from(vec![
            Dish::new("Poha"),
            Dish::new("Upma"),
            Dish::new("Poha"),
        ])
    }

    #[test]
    fn test_replace_named_hits_every_duplicate() {
        let mut catalogue = sample();
        let mut replacement = Dish::new("Kanda Poha");
        replacement.region = "Maharashtra".to_string();

        assert_eq!(catalogue.replace_named("Poha", &replacement), 2);
        assert_eq!(catalogue.dishes()[0], replacement);
        assert_eq!(catalogue.dishes()[1].name, "Upma");
        assert_eq!(catalogue.dishes()[2], replacement);
        assert_eq!(catalogue.replace_named("Poha", &replacement), 0);
    }

    #[test]
    fn test_remove_named_keeps_order() {
        let mut catalogue = sample();
        catalogue.push(Dish::new("Idli"));

        assert_eq!(catalogue.remove_named("Poha"), 2);
        let names: Vec<&str> = catalogue.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Upma", "Idli"]);
        assert_eq!(catalogue.remove_named("Dosa"), 0);
        assert_eq!(catalogue.len(), 2);
    }
}
