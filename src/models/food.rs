use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a field that may be `null`, using the default value for null.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Nutrient name and unit identifying the energy entry in kilocalories.
pub const ENERGY_NUTRIENT: &str = "Energy";
pub const KCAL_UNIT: &str = "KCAL";

/// One nutrient entry of a food search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    #[serde(rename = "nutrientName", default, deserialize_with = "null_as_default")]
    pub nutrient_name: String,

    #[serde(rename = "unitName", default, deserialize_with = "null_as_default")]
    pub unit_name: String,

    #[serde(default)]
    pub value: Option<f64>,
}

impl Nutrient {
    pub fn new(name: &str, unit: &str, value: f64) -> Self {
        Self {
            nutrient_name: name.to_string(),
            unit_name: unit.to_string(),
            value: Some(value),
        }
    }

    /// True for the "Energy" entry measured in kcal.
    pub fn is_energy_kcal(&self) -> bool {
        self.nutrient_name == ENERGY_NUTRIENT && self.unit_name == KCAL_UNIT
    }
}

/// A food search result as returned by FoodData Central.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(rename = "foodNutrients", default, deserialize_with = "null_as_default")]
    pub food_nutrients: Vec<Nutrient>,

    #[serde(rename = "fdcId", default, skip_serializing_if = "Option::is_none")]
    pub fdc_id: Option<u64>,

    #[serde(rename = "dataType", default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,

    #[serde(rename = "brandOwner", default, skip_serializing_if = "Option::is_none")]
    pub brand_owner: Option<String>,
}

impl FoodRecord {
    pub fn new(description: &str, food_nutrients: Vec<Nutrient>) -> Self {
        Self {
            description: description.to_string(),
            food_nutrients,
            fdc_id: None,
            data_type: None,
            brand_owner: None,
        }
    }

    /// Calories per reference serving.
    ///
    /// The first "Energy"/"KCAL" entry wins when a record lists several.
    pub fn energy_kcal(&self) -> Option<f64> {
        self.food_nutrients
            .iter()
            .find(|n| n.is_energy_kcal())
            .and_then(|n| n.value)
    }
}
