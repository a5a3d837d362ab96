use crate::core::dish::{parse_flag, SpiceLevel};
use crate::core::schema::Column;
use crate::dsl::handlers::{parse_assignment, tokenize};
use crate::dsl::{DslError, DslOutput};
use crate::engine::{recommend, CatalogueStore, RecommendationCriteria};

/// Handle RECOMMEND command
/// Syntax: RECOMMEND meal="..." spice=Mild|Medium|Hot weather="..." [COMFORT] [MASALA] [DESSERT]
pub fn handle_recommend(
    store: &CatalogueStore,
    rest: &str,
    line_no: usize,
) -> Result<DslOutput, DslError> {
    let mut meal_type = None;
    let mut spice_level = None;
    let mut weather = None;
    let (mut comfort, mut masala, mut dessert) = (false, false, false);

    for token in tokenize(rest, line_no)? {
        match token.to_ascii_uppercase().as_str() {
            "COMFORT" => comfort = true,
            "MASALA" => masala = true,
            "DESSERT" => dessert = true,
            _ => {
                let (column, value) = parse_assignment(&token, line_no)?;
                let flag = |v: &str| parse_flag(v).map_err(|msg| DslError::parse(line_no, msg));
                match column {
                    Column::MealType => meal_type = Some(value),
                    Column::WeatherBased => weather = Some(value),
                    Column::SpiceLevel => {
                        spice_level = Some(
                            value
                                .parse::<SpiceLevel>()
                                .map_err(|msg| DslError::parse(line_no, msg))?,
                        )
                    }
                    Column::ComfortFood => comfort = flag(&value)?,
                    Column::MasalaFood => masala = flag(&value)?,
                    Column::Dessert => dessert = flag(&value)?,
                    other => {
                        return Err(DslError::parse(
                            line_no,
                            format!(
                                "RECOMMEND does not filter on '{}'; use meal, spice, weather and the COMFORT, MASALA or DESSERT flags",
                                other.header()
                            ),
                        ))
                    }
                }
            }
        }
    }

    let missing = |key: &str| DslError::parse(line_no, format!("RECOMMEND requires {}=...", key));
    let criteria = RecommendationCriteria::new(
        meal_type.ok_or_else(|| missing("meal"))?,
        spice_level.ok_or_else(|| missing("spice"))?,
        weather.ok_or_else(|| missing("weather"))?,
    )
    .comfort(comfort)
    .masala(masala)
    .dessert(dessert);

    let hits = recommend(store.catalogue(), &criteria)
        .into_iter()
        .cloned()
        .collect();
    Ok(DslOutput::Suggestions(hits))
}
