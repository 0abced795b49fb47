use record_query::store::csv::{load_csv_from_path, load_csv_from_reader};
use record_query::types::{DataType, Field, Schema, Value};

fn plating_schema() -> Schema {
    Schema::new(vec![
        Field::new("Batch ID", DataType::Utf8),
        Field::new("Operator ID", DataType::Utf8),
        Field::new("Machine ID", DataType::Utf8),
        Field::new("Plating Type", DataType::Utf8),
        Field::new("Bath Temperature (°C)", DataType::Float64),
        Field::new("pH Level", DataType::Float64),
        Field::new("Plating Time (min)", DataType::Float64),
        Field::new("Thickness (μm)", DataType::Float64),
        Field::new("Surface Roughness (Ra μm)", DataType::Float64),
        Field::new("Adhesion Strength (MPa)", DataType::Float64),
        Field::new("Phosphorus Content (%)", DataType::Float64),
        Field::new("Pass/Fail", DataType::Utf8),
        Field::new("Visual Inspection", DataType::Utf8),
        Field::new("Corrosion Test", DataType::Utf8),
    ])
}

#[test]
fn load_csv_from_path_happy_path() {
    let schema = plating_schema();
    let store = load_csv_from_path("tests/fixtures/plating.csv", &schema).unwrap();

    assert_eq!(store.len(), 6);
    let first = store.get(0).unwrap();
    assert_eq!(first.text("Batch ID").unwrap(), Some("ELP5726"));
    assert_eq!(first.number("Bath Temperature (°C)").unwrap(), Some(89.4));
    assert_eq!(first.text("Pass/Fail").unwrap(), Some("Pass"));
}

#[test]
fn load_csv_maps_nan_and_empty_to_absent() {
    let schema = plating_schema();
    let store = load_csv_from_path("tests/fixtures/plating.csv", &schema).unwrap();

    // Row 2 has a literal NaN, row 5 an empty cell.
    assert!(store
        .get(1)
        .unwrap()
        .get("Phosphorus Content (%)")
        .unwrap()
        .is_absent());
    assert!(store
        .get(4)
        .unwrap()
        .get("Phosphorus Content (%)")
        .unwrap()
        .is_absent());
    assert_eq!(
        store.get(2).unwrap().number("Phosphorus Content (%)").unwrap(),
        Some(9.5)
    );
}

#[test]
fn load_csv_allows_reordered_columns() {
    let schema = Schema::new(vec![
        Field::new("Batch ID", DataType::Utf8),
        Field::new("pH Level", DataType::Float64),
    ]);
    let input = "pH Level,Batch ID\n4.8,ELP5726\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let store = load_csv_from_reader(&mut rdr, &schema).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(0).unwrap().text("Batch ID").unwrap(), Some("ELP5726"));
    assert_eq!(store.get(0).unwrap().number("pH Level").unwrap(), Some(4.8));
}

#[test]
fn load_csv_errors_on_missing_required_column() {
    let schema = Schema::new(vec![
        Field::new("Batch ID", DataType::Utf8),
        Field::new("pH Level", DataType::Float64),
    ]);
    let input = "Batch ID\nELP5726\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = load_csv_from_reader(&mut rdr, &schema).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("missing required column 'pH Level'"));
}

#[test]
fn load_csv_errors_on_type_parse() {
    let schema = Schema::new(vec![Field::new("pH Level", DataType::Float64)]);
    let input = "pH Level\nnot_a_number\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = load_csv_from_reader(&mut rdr, &schema).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to parse value"));
    assert!(msg.contains("column 'pH Level'"));
}

#[test]
fn loaded_rows_project_back_verbatim() {
    let schema = plating_schema();
    let store = load_csv_from_path("tests/fixtures/plating.csv", &schema).unwrap();

    // Projecting every original field name reproduces the source rows in order.
    let expected_first = vec![
        Value::from("ELP5726"),
        Value::from("TECH101"),
        Value::from("MACH01"),
        Value::from("Electroless Nickel"),
        Value::Float64(89.4),
        Value::Float64(4.8),
        Value::Float64(10.0),
        Value::Float64(22.1),
        Value::Float64(0.8),
        Value::Float64(25.5),
        Value::Float64(8.5),
        Value::from("Pass"),
        Value::from("Pass"),
        Value::from("Pass"),
    ];
    let projected: Vec<Value> = schema
        .field_names()
        .map(|name| store.get(0).unwrap().get(name).unwrap().clone())
        .collect();
    assert_eq!(projected, expected_first);

    let batch_ids: Vec<Option<&str>> = store
        .iter()
        .map(|r| r.text("Batch ID").unwrap())
        .collect();
    assert_eq!(
        batch_ids,
        vec![
            Some("ELP5726"),
            Some("ELP8081"),
            Some("ELP1234"),
            Some("ELP4567"),
            Some("ELP9102"),
            Some("ELP3348"),
        ]
    );
}
