use std::fs;
use std::path::PathBuf;

use geoscatter::config::{CONUS_LATITUDE, CONUS_LONGITUDE, PlotConfig};
use geoscatter::{Error, Point, dataset, viz};
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn n_rows_give_n_points_in_order() {
    let dir = TempDir::new().unwrap();
    let mut csv = String::from("city,longitude,latitude\n");
    let expected: Vec<Point> = (0..50)
        .map(|i| Point::new(-120.0 + i as f64, 25.0 + i as f64 * 0.5))
        .collect();
    for (i, p) in expected.iter().enumerate() {
        csv.push_str(&format!("c{i},{},{}\n", p.longitude, p.latitude));
    }
    let path = write_csv(&dir, "many.csv", &csv);

    let data = dataset::load(&path).unwrap();
    assert_eq!(data.len(), 50);
    let points = dataset::extract_coordinates(&data).unwrap();
    assert_eq!(points, expected);
}

#[test]
fn missing_file_is_data_load_error() {
    let dir = TempDir::new().unwrap();
    let err = dataset::load(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, Error::DataLoad { .. }), "got {err:?}");
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn missing_columns_are_reported_by_name() {
    let dir = TempDir::new().unwrap();

    let path = write_csv(&dir, "no_lon.csv", "lon,latitude\n-100,40\n");
    let data = dataset::load(&path).unwrap();
    match dataset::extract_coordinates(&data) {
        Err(Error::MissingColumn { column }) => assert_eq!(column, "longitude"),
        other => panic!("unexpected: {other:?}"),
    }

    let path = write_csv(&dir, "no_lat.csv", "longitude,lat\n-100,40\n");
    let data = dataset::load(&path).unwrap();
    match dataset::extract_coordinates(&data) {
        Err(Error::MissingColumn { column }) => assert_eq!(column, "latitude"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn clip_is_fixed_regardless_of_data_extent() {
    let cfg = PlotConfig::default();
    for pts in [
        vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
        vec![Point::new(-100.0, 40.0)],
        vec![],
    ] {
        let mut plot = viz::render(&pts, &cfg.marker);
        plot.clip_axes(cfg.x_range, cfg.y_range);
        assert_eq!(plot.x_range(), CONUS_LONGITUDE);
        assert_eq!(plot.y_range(), CONUS_LATITUDE);
        assert_eq!((plot.x_range().min, plot.x_range().max), (-126.0, -66.0));
        assert_eq!((plot.y_range().min, plot.y_range().max), (23.0, 50.0));
    }
}

#[test]
fn rendering_never_mutates_points_or_dataset() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "pts.csv",
        "longitude,latitude\n-100.0,40.0\n-200.0,10.0\n-80.5,35.25\n",
    );
    let data = dataset::load(&path).unwrap();
    let data_before = data.clone();
    let points = dataset::extract_coordinates(&data).unwrap();
    let points_before = points.clone();

    let cfg = PlotConfig::default();
    for _ in 0..3 {
        let mut plot = viz::render(&points, &cfg.marker);
        plot.clip_axes(cfg.x_range, cfg.y_range);
        plot.rasterize(320, 200).unwrap();
    }
    assert_eq!(points, points_before);
    assert_eq!(data, data_before);
}

#[test]
fn out_of_window_point_is_kept_but_not_visible() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "two.csv",
        "longitude,latitude\n-100.0,40.0\n-200.0,10.0\n",
    );
    let data = dataset::load(&path).unwrap();
    let points = dataset::extract_coordinates(&data).unwrap();
    assert_eq!(points.len(), 2);

    let cfg = PlotConfig::default();
    let mut plot = viz::render(&points, &cfg.marker);
    // Before clipping the autoscaled window shows both.
    assert_eq!(plot.visible_points().count(), 2);

    plot.clip_axes(cfg.x_range, cfg.y_range);
    assert_eq!(plot.points().len(), 2);
    let visible: Vec<&Point> = plot.visible_points().collect();
    assert_eq!(visible, vec![&Point::new(-100.0, 40.0)]);

    let raster = plot.rasterize(cfg.width, cfg.height).unwrap();
    assert_eq!(raster.drawn(), 1);
    assert!(raster.locate(&points[1]).is_none());
}
