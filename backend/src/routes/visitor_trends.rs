use serde::{Deserialize, Serialize};

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Inline data row of the trend chart. Field names match the encodings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Park")]
    pub park: String,
    #[serde(rename = "Visitors")]
    pub visitors: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineData {
    pub values: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineMark {
    #[serde(rename = "type")]
    pub mark_type: String,
    /// Draw a point marker on every vertex
    pub point: bool,
}

/// Vega-Lite measurement type of an encoded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Ordinal,
    Quantitative,
    Nominal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldEncoding {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl FieldEncoding {
    pub fn new(field: &str, field_type: FieldType) -> Self {
        Self {
            field: field.to_string(),
            field_type,
            title: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: String,
}

/// Line colour: one colour per park, or a single fixed colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorEncoding {
    Field {
        field: String,
        #[serde(rename = "type")]
        field_type: FieldType,
        legend: Legend,
    },
    Value {
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEncoding {
    pub x: FieldEncoding,
    pub y: FieldEncoding,
    pub color: ColorEncoding,
    pub tooltip: Vec<FieldEncoding>,
}

/// Vega-Lite v5 line chart of park visitors per year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendChartSpec {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub data: InlineData,
    pub mark: LineMark,
    pub encoding: TrendEncoding,
}

impl TrendChartSpec {
    pub fn point_count(&self) -> usize {
        self.data.values.len()
    }

    /// Number of distinctly coloured series the chart draws.
    pub fn color_groups(&self) -> usize {
        if self.data.values.is_empty() {
            return 0;
        }
        match &self.encoding.color {
            ColorEncoding::Value { .. } => 1,
            ColorEncoding::Field { .. } => {
                let mut parks: Vec<&str> = self.data.values.iter().map(|p| p.park.as_str()).collect();
                parks.sort_unstable();
                parks.dedup();
                parks.len()
            }
        }
    }
}

/// Route function name constant for visitor trends
pub const GET_VISITOR_TRENDS: &str = "get_visitor_trends";
pub const LIST_PARKS: &str = "list_parks";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_point_uses_chart_field_names() {
        let point = TrendPoint {
            year: 2019,
            park: "Kaziranga".to_string(),
            visitors: 170_000,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["Year"], 2019);
        assert_eq!(json["Park"], "Kaziranga");
        assert_eq!(json["Visitors"], 170_000);
    }

    #[test]
    fn test_color_encoding_untagged_shapes() {
        let fixed = serde_json::to_value(ColorEncoding::Value {
            value: "blue".to_string(),
        })
        .unwrap();
        assert_eq!(fixed, serde_json::json!({ "value": "blue" }));

        let by_park = serde_json::to_value(ColorEncoding::Field {
            field: "Park".to_string(),
            field_type: FieldType::Nominal,
            legend: Legend {
                title: "Park".to_string(),
            },
        })
        .unwrap();
        assert_eq!(by_park["field"], "Park");
        assert_eq!(by_park["type"], "nominal");
    }

    #[test]
    fn test_field_encoding_omits_missing_title() {
        let json = serde_json::to_value(FieldEncoding::new("Year", FieldType::Ordinal)).unwrap();
        assert_eq!(json, serde_json::json!({ "field": "Year", "type": "ordinal" }));
    }

    #[test]
    fn test_const_value() {
        assert_eq!(GET_VISITOR_TRENDS, "get_visitor_trends");
        assert_eq!(LIST_PARKS, "list_parks");
    }
}
