use numeral_common::error::NumeralCommonError;
use numeral_common::types::{BaseType, Column, SeriesCollection, SCALAR_DISPLAY};
use numeral_common::value::CellValue;
use rstest::rstest;
use serde_json::json;

const TWO_SERIES: &str = r#"[
    {
        "card": {"id": 12, "name": "Revenue", "display": "scalar", "visualization_settings": {}},
        "data": {
            "cols": [{"name": "sum", "display_name": "Sum", "base_type": "type/Float", "source": "aggregation"}],
            "rows": [[1234.5]]
        }
    },
    {
        "card": {"name": "Orders"},
        "data": {"cols": [{"name": "count", "base_type": "type/Integer"}], "rows": [[7]]}
    }
]"#;

#[test]
fn test_load_series_collection() -> Result<(), NumeralCommonError> {
    let series = SeriesCollection::from_json(TWO_SERIES)?;
    assert_eq!(series.len(), 2);

    let first = series.first().unwrap();
    assert_eq!(first.card.id, Some(12));
    assert_eq!(first.card.name, "Revenue");
    assert_eq!(first.card.extra.get("visualization_settings"), Some(&json!({})));
    assert_eq!(first.data.first_value(), Some(&CellValue::Number(1234.5)));

    let col = first.data.first_column().unwrap();
    assert_eq!(col.base_type, BaseType::new(BaseType::FLOAT));
    assert_eq!(col.extra.get("source"), Some(&json!("aggregation")));

    let second = series.get(1).unwrap();
    assert_eq!(second.card.id, None);
    assert_eq!(second.card.display, SCALAR_DISPLAY);
    assert_eq!(second.data.cols[0].display_name, "");
    Ok(())
}

#[test]
fn test_extra_attributes_round_trip() -> Result<(), NumeralCommonError> {
    let series = SeriesCollection::from_json(TWO_SERIES)?;
    let value = serde_json::to_value(&series)?;
    assert_eq!(value[0]["data"]["cols"][0]["source"], json!("aggregation"));
    assert_eq!(value[0]["card"]["id"], json!(12));
    Ok(())
}

#[test]
fn test_missing_data_defaults_to_empty() -> Result<(), NumeralCommonError> {
    let series = SeriesCollection::from_json(r#"[{"card": {"name": "Empty"}}]"#)?;
    let first = series.first().unwrap();
    assert!(first.data.cols.is_empty());
    assert_eq!(first.data.first_value(), None);
    Ok(())
}

#[rstest]
#[case("type/Integer", true, false)]
#[case("type/Float", true, false)]
#[case("IntegerField", true, false)]
#[case("type/Text", false, true)]
#[case("TextField", false, true)]
#[case("type/DateTime", false, false)]
fn test_base_type_kinds(#[case] name: &str, #[case] numeric: bool, #[case] text: bool) {
    let base_type = BaseType::new(name);
    assert_eq!(base_type.is_numeric(), numeric);
    assert_eq!(base_type.is_text(), text);
}

#[test]
fn test_column_default_base_type() {
    let col: Column = serde_json::from_value(json!({"name": "x"})).unwrap();
    assert_eq!(col.base_type.as_str(), BaseType::ANY);
}
