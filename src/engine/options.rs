//! Choices offered to the user for each column, derived from the current catalogue.

use crate::core::catalogue::Catalogue;
use crate::core::dish::{format_flag, CookingTime, Dietary, SpiceLevel};
use crate::core::schema::{Column, ColumnKind};
use std::collections::BTreeSet;

/// Sentinel option for a value the catalogue has not seen yet.
pub const OTHER_OPTION: &str = "Other";

/// Distinct non-empty values of `column`, sorted ascending.
pub fn observed_values(catalogue: &Catalogue, column: Column) -> Vec<String> {
    catalogue
        .iter()
        .map(|d| d.value(column))
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Options for a selection widget over `column`.
///
/// Open-enum columns list the observed values followed by [`OTHER_OPTION`].
/// Fixed-enum and flag columns list their whole fixed set. The name column
/// lists each distinct dish name once, in catalogue order.
pub fn selection_options(catalogue: &Catalogue, column: Column) -> Vec<String> {
    match column.kind() {
        ColumnKind::OpenEnum => {
            let mut values: Vec<String> = observed_values(catalogue, column)
                .into_iter()
                .filter(|v| v != OTHER_OPTION)
                .collect();
            values.push(OTHER_OPTION.to_string());
            values
        }
        ColumnKind::FixedEnum => match column {
            Column::SpiceLevel => SpiceLevel::ALL.iter().map(|v| v.to_string()).collect(),
            Column::CookingTime => CookingTime::ALL.iter().map(|v| v.to_string()).collect(),
            _ => Dietary::ALL.iter().map(|v| v.to_string()).collect(),
        },
        ColumnKind::Flag => vec![format_flag(true).to_string(), format_flag(false).to_string()],
        ColumnKind::Name => {
            let mut seen = BTreeSet::new();
            let mut names = Vec::new();
            for dish in catalogue {
                if seen.insert(dish.name.as_str()) {
                    names.push(dish.name.clone());
                }
            }
            names
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dish::Dish;

    fn with_regions(regions: &[&str]) -> Catalogue {
        Catalogue::from(
            regions
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    let mut d = Dish::new(format!("Dish {}", i));
                    d.region = r.to_string();
                    d
                })
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn test_open_enum_sorted_distinct_with_sentinel() {
        let catalogue = with_regions(&["Punjab", "Bengal", "", "Punjab", "Kerala"]);
        assert_eq!(
            selection_options(&catalogue, Column::Region),
            vec!["Bengal", "Kerala", "Punjab", "Other"]
        );
    }

    #[test]
    fn test_sentinel_appears_once() {
        let catalogue = with_regions(&["Other", "Assam"]);
        assert_eq!(
            selection_options(&catalogue, Column::Region),
            vec!["Assam", "Other"]
        );
        assert_eq!(observed_values(&catalogue, Column::Region), vec!["Assam", "Other"]);
    }

    #[test]
    fn test_empty_catalogue_offers_only_sentinel() {
        assert_eq!(
            selection_options(&Catalogue::new(), Column::Cuisine),
            vec![OTHER_OPTION]
        );
        assert!(observed_values(&Catalogue::new(), Column::MealType).is_empty());
    }

    #[test]
    fn test_fixed_columns_list_full_set() {
        let catalogue = Catalogue::new();
        assert_eq!(
            selection_options(&catalogue, Column::SpiceLevel),
            vec!["Mild", "Medium", "Hot"]
        );
        assert_eq!(
            selection_options(&catalogue, Column::CookingTime),
            vec!["Quick", "Moderate", "Elaborate"]
        );
        assert_eq!(selection_options(&catalogue, Column::Dietary), vec!["Veg"]);
        assert_eq!(selection_options(&catalogue, Column::Dessert), vec!["True", "False"]);
    }

    #[test]
    fn test_names_keep_catalogue_order() {
        let catalogue = Catalogue::from(vec![
            Dish::new("Upma"),
            Dish::new("Idli"),
            Dish::new("Upma"),
        ]);
        assert_eq!(
            selection_options(&catalogue, Column::DishName),
            vec!["Upma", "Idli"]
        );
    }
}
