use chrono::NaiveDate;
use grid_forecast::{
    project_to_grid, resolve_issuance, ForecastRequest, GeoCoordinate, GridCell, GridProjector,
};

fn query(lat: f64, lon: f64, y: i32, m: u32, d: u32, hour: u32) -> Vec<(&'static str, String)> {
    let now = NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(hour, 15, 0))
        .unwrap();
    let coord = GeoCoordinate::new(lat, lon).unwrap();

    ForecastRequest::new(resolve_issuance(now), project_to_grid(coord)).query_pairs()
}

#[test]
fn test_seoul_just_after_midnight() {
    let pairs = query(37.5665, 126.9780, 2025, 1, 1, 0);

    assert_eq!(
        pairs,
        vec![
            ("pageNo", "1".to_owned()),
            ("numOfRows", "1000".to_owned()),
            ("dataType", "JSON".to_owned()),
            ("base_date", "20241231".to_owned()),
            ("base_time", "2300".to_owned()),
            ("nx", "60".to_owned()),
            ("ny", "127".to_owned()),
        ]
    );
}

#[test]
fn test_busan_afternoon() {
    let pairs = query(35.1796, 129.0756, 2024, 7, 10, 16);

    assert_eq!(pairs[3], ("base_date", "20240710".to_owned()));
    assert_eq!(pairs[4], ("base_time", "1400".to_owned()));
    assert_eq!(pairs[5], ("nx", "98".to_owned()));
    assert_eq!(pairs[6], ("ny", "76".to_owned()));
}

#[test]
fn test_fallback_cell_is_seoul() {
    let projector = GridProjector::default();
    let center = projector.grid_to_geo(GridCell::SEOUL);

    assert_eq!(projector.project(center), GridCell::SEOUL);
    assert!((center.latitude - 37.58).abs() < 0.01);
    assert!((center.longitude - 126.99).abs() < 0.01);
}
