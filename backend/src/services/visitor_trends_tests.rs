#[cfg(test)]
mod tests {
    use crate::api::{ColorEncoding, FieldType};
    use crate::models::{ParkSelection, VisitorRecord};
    use crate::services::visitor_trends::{get_visitor_trends, render_visitor_trends};
    use crate::store::InMemoryRepository;

    fn two_park_repo() -> InMemoryRepository {
        let mut visitors = Vec::new();
        for park in ["Jim Corbett", "Kaziranga"] {
            for (i, year) in (2016..=2020).enumerate() {
                visitors.push(VisitorRecord::new(year, park, 100_000 + 10_000 * i as u64));
            }
        }
        InMemoryRepository::from_records(vec![], visitors)
    }

    #[test]
    fn test_single_park_chart() {
        let repo = two_park_repo();
        let spec = get_visitor_trends(&repo, &ParkSelection::single("Kaziranga"));

        assert_eq!(spec.point_count(), 5);
        assert!(spec.data.values.iter().all(|p| p.park == "Kaziranga"));
        assert_eq!(spec.color_groups(), 1);
        assert_eq!(
            spec.encoding.color,
            ColorEncoding::Value {
                value: "blue".to_string()
            }
        );
        assert_eq!(spec.title, "Visitor Trends for Kaziranga");
    }

    #[test]
    fn test_comparison_chart() {
        let repo = two_park_repo();
        let spec = get_visitor_trends(&repo, &ParkSelection::comparison());

        assert_eq!(spec.point_count(), 10);
        assert_eq!(spec.color_groups(), 2);
        assert_eq!(spec.title, "Comparative Visitor Trends");
        match &spec.encoding.color {
            ColorEncoding::Field { field, field_type, legend } => {
                assert_eq!(field, "Park");
                assert_eq!(*field_type, FieldType::Nominal);
                assert_eq!(legend.title, "Park");
            }
            other => panic!("expected field colour, got {:?}", other),
        }
    }

    #[test]
    fn test_axes_and_tooltip() {
        let spec = get_visitor_trends(&two_park_repo(), &ParkSelection::comparison());

        assert_eq!(spec.encoding.x.field, "Year");
        assert_eq!(spec.encoding.x.field_type, FieldType::Ordinal);
        assert_eq!(spec.encoding.y.field, "Visitors");
        assert_eq!(spec.encoding.y.field_type, FieldType::Quantitative);
        let tooltip: Vec<&str> = spec.encoding.tooltip.iter().map(|t| t.field.as_str()).collect();
        assert_eq!(tooltip, vec!["Year", "Park", "Visitors"]);
        assert_eq!(spec.mark.mark_type, "line");
        assert!(spec.mark.point);
        assert_eq!((spec.width, spec.height), (600, 400));
    }

    #[test]
    fn test_unset_park_uses_first_park_in_title() {
        let spec = get_visitor_trends(&two_park_repo(), &ParkSelection::default());
        assert_eq!(spec.title, "Visitor Trends for Jim Corbett");
        assert_eq!(spec.point_count(), 5);
    }

    #[test]
    fn test_unknown_park_renders_empty_chart() {
        let spec = get_visitor_trends(&two_park_repo(), &ParkSelection::single("Gir"));
        assert_eq!(spec.point_count(), 0);
        assert_eq!(spec.color_groups(), 0);
        assert_eq!(spec.title, "Visitor Trends for Gir");
    }

    #[test]
    fn test_no_parks_title() {
        let spec = render_visitor_trends(&[], &ParkSelection::default(), &[]);
        assert_eq!(spec.title, "Visitor Trends");
        assert_eq!(spec.point_count(), 0);
    }

    #[test]
    fn test_spec_serializes_as_vega_lite() {
        let spec = get_visitor_trends(&two_park_repo(), &ParkSelection::single("Kaziranga"));
        let json = serde_json::to_value(&spec).unwrap();

        assert_eq!(json["$schema"], "https://vega.github.io/schema/vega-lite/v5.json");
        assert_eq!(json["mark"]["type"], "line");
        assert_eq!(json["encoding"]["x"]["type"], "ordinal");
        assert_eq!(json["encoding"]["color"]["value"], "blue");
        assert_eq!(json["data"]["values"][0]["Park"], "Kaziranga");
        assert_eq!(json["data"]["values"][0]["Year"], 2016);
        assert_eq!(json["data"]["values"][4]["Visitors"], 140_000);
    }
}
