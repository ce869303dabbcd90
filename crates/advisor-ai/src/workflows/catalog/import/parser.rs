use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::normalizer::{normalize_token, split_list};
use super::CatalogImportError;
use crate::workflows::catalog::domain::{
    CatalogItem, PricingModel, SetupDifficulty, TimeToValue, ToolId,
};

pub(crate) fn parse_items<R: Read>(reader: R) -> Result<Vec<CatalogItem>, CatalogImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut items = Vec::new();

    for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
        let row = record?;
        // CSV rows are 1-based and the header occupies the first line.
        items.push(row.into_item(index + 2)?);
    }

    Ok(items)
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Category", default)]
    category: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Pricing", default)]
    pricing: String,
    #[serde(rename = "Setup Difficulty", default, deserialize_with = "empty_string_as_none")]
    setup_difficulty: Option<String>,
    #[serde(rename = "Time to Value", default, deserialize_with = "empty_string_as_none")]
    time_to_value: Option<String>,
    #[serde(rename = "Target Roles", default)]
    target_roles: String,
    #[serde(rename = "Target Industries", default)]
    target_industries: String,
    #[serde(rename = "Company Sizes", default)]
    company_sizes: String,
    #[serde(rename = "Features", default)]
    features: String,
    #[serde(rename = "Rating", default, deserialize_with = "empty_string_as_none")]
    rating: Option<String>,
}

impl CatalogRow {
    fn into_item(self, line: usize) -> Result<CatalogItem, CatalogImportError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(CatalogImportError::InvalidField {
                line,
                field: "Name",
                value: self.name,
            });
        }

        let setup_difficulty = match self.setup_difficulty {
            Some(raw) => SetupDifficulty::parse(&raw).ok_or(CatalogImportError::InvalidField {
                line,
                field: "Setup Difficulty",
                value: raw,
            })?,
            None => SetupDifficulty::Medium,
        };

        let time_to_value = match self.time_to_value {
            Some(raw) => TimeToValue::parse(&raw).ok_or(CatalogImportError::InvalidField {
                line,
                field: "Time to Value",
                value: raw,
            })?,
            None => TimeToValue::Days,
        };

        let rating = match self.rating {
            Some(raw) => Some(raw.parse::<f32>().map_err(|_| {
                CatalogImportError::InvalidField {
                    line,
                    field: "Rating",
                    value: raw,
                }
            })?),
            None => None,
        };

        Ok(CatalogItem {
            id: ToolId::from_name(&name),
            name,
            description: self.description.trim().to_string(),
            category: normalize_token(&self.category),
            pricing_model: PricingModel::parse(&self.pricing),
            setup_difficulty,
            time_to_value,
            target_roles: split_list(&self.target_roles),
            target_industries: split_list(&self.target_industries),
            target_company_sizes: split_list(&self.company_sizes),
            features: split_list(&self.features),
            rating,
            active: true,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
