use crate::api::{
    ColorEncoding, FieldEncoding, FieldType, InlineData, Legend, LineMark, TrendChartSpec,
    TrendEncoding, TrendPoint,
};
use crate::models::{ParkSelection, VisitorRecord};
use crate::routes::visitor_trends::VEGA_LITE_SCHEMA;
use crate::store::DatasetRepository;

use super::filters::{filter_visitors, resolve_park};

pub const CHART_WIDTH: u32 = 600;
pub const CHART_HEIGHT: u32 = 400;
pub const SINGLE_PARK_COLOR: &str = "blue";
pub const COMPARISON_TITLE: &str = "Comparative Visitor Trends";

pub const YEAR_FIELD: &str = "Year";
pub const PARK_FIELD: &str = "Park";
pub const VISITORS_FIELD: &str = "Visitors";

/// Build the visitor line chart for already-filtered records.
///
/// Comparison mode colours one line per park and shows a legend; otherwise a
/// single blue line is titled with the resolved park. Years sit on an ordinal
/// axis, so gaps in the data do not stretch the x axis.
pub fn render_visitor_trends(
    records: &[VisitorRecord],
    selection: &ParkSelection,
    parks: &[String],
) -> TrendChartSpec {
    let values: Vec<TrendPoint> = records
        .iter()
        .map(|r| TrendPoint {
            year: r.year,
            park: r.park_name.clone(),
            visitors: r.visitor_count,
        })
        .collect();

    let (title, color) = if selection.comparison_mode {
        (
            COMPARISON_TITLE.to_string(),
            ColorEncoding::Field {
                field: PARK_FIELD.to_string(),
                field_type: FieldType::Nominal,
                legend: Legend {
                    title: PARK_FIELD.to_string(),
                },
            },
        )
    } else {
        let title = match resolve_park(selection, parks) {
            Some(park) => format!("Visitor Trends for {}", park),
            None => "Visitor Trends".to_string(),
        };
        (
            title,
            ColorEncoding::Value {
                value: SINGLE_PARK_COLOR.to_string(),
            },
        )
    };

    TrendChartSpec {
        schema: VEGA_LITE_SCHEMA.to_string(),
        title,
        width: CHART_WIDTH,
        height: CHART_HEIGHT,
        data: InlineData { values },
        mark: LineMark {
            mark_type: "line".to_string(),
            point: true,
        },
        encoding: TrendEncoding {
            x: FieldEncoding::new(YEAR_FIELD, FieldType::Ordinal),
            y: FieldEncoding::new(VISITORS_FIELD, FieldType::Quantitative),
            color,
            tooltip: vec![
                FieldEncoding::new(YEAR_FIELD, FieldType::Ordinal),
                FieldEncoding::new(PARK_FIELD, FieldType::Nominal),
                FieldEncoding::new(VISITORS_FIELD, FieldType::Quantitative),
            ],
        },
    }
}

/// Filter the repository for `selection` and render the chart.
pub fn get_visitor_trends(repo: &dyn DatasetRepository, selection: &ParkSelection) -> TrendChartSpec {
    let parks = repo.park_names();
    let records = filter_visitors(repo.visitor_records(), parks, selection);
    render_visitor_trends(&records, selection, parks)
}
