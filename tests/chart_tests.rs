use treebench_report::aggregator::{aggregate, StatsTable};
use treebench_report::chart::{
    axis_bounds, fit_chart, legend_layout, linear_fit, render_all, render_chart, ChartKind,
    ChartStyle, Column,
};
use treebench_report::parser::TrialRecord;

const EPS: f64 = 1e-9;

/// Three tree sizes with height ~ 2*log2(n) and time ~ 1e-6 * n*log2(n)
fn benchmark_table() -> StatsTable {
    let mut trials = Vec::new();
    for nodes in [1024.0_f64, 2048.0, 4096.0] {
        let log_n = nodes.log2();
        for _ in 0..100 {
            trials.push(TrialRecord::new(
                nodes,
                2.0 * log_n,
                1e-6 * nodes * log_n,
                2e-6 * nodes * log_n,
            ));
        }
    }
    aggregate(&trials).unwrap()
}

#[test]
fn test_linear_fit_slope_two() {
    let fit = linear_fit(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]).unwrap();

    assert!((fit.slope - 2.0).abs() < EPS);
    assert!(fit.intercept.abs() < EPS);
}

#[test]
fn test_height_fit_against_log_n() {
    let fit = fit_chart(&benchmark_table(), ChartKind::TreeHeight).unwrap();

    assert!((fit.slope - 2.0).abs() < 1e-9);
    assert!(fit.intercept.abs() < 1e-7);
    assert!((fit.r_squared - 1.0).abs() < 1e-9);
}

#[test]
fn test_time_fits_against_n_log_n() {
    let table = benchmark_table();

    let insert = fit_chart(&table, ChartKind::InsertionTime).unwrap();
    let delete = fit_chart(&table, ChartKind::DeletionTime).unwrap();

    assert!((insert.slope - 1e-6).abs() < 1e-12);
    assert!((delete.slope - 2e-6).abs() < 1e-12);
}

#[test]
fn test_time_charts_start_at_origin() {
    let table = benchmark_table();

    for kind in [ChartKind::InsertionTime, ChartKind::DeletionTime] {
        let spec = kind.spec();
        assert_eq!(spec.x, Column::NLogN);

        let points = spec.series(&table);
        let fit = fit_chart(&table, kind).unwrap();
        let bounds = axis_bounds(&points, &fit, spec.origin_at_zero);

        assert_eq!(bounds.x.start, 0.0);
        assert_eq!(bounds.y.start, 0.0);
    }
}

#[test]
fn test_height_chart_not_clamped() {
    let table = benchmark_table();
    let spec = ChartKind::TreeHeight.spec();
    let points = spec.series(&table);
    let fit = fit_chart(&table, ChartKind::TreeHeight).unwrap();

    let bounds = axis_bounds(&points, &fit, spec.origin_at_zero);

    assert!(bounds.x.start > 9.0 && bounds.x.start < 10.0);
    assert!(bounds.x.end > 12.0);
}

#[test]
fn test_chart_file_names_unique() {
    let names: Vec<&str> = ChartKind::ALL.iter().map(|k| k.spec().file_name).collect();

    assert_eq!(names.len(), 3);
    assert!(names.iter().all(|n| n.ends_with(".png")));
    assert_ne!(names[0], names[1]);
    assert_ne!(names[1], names[2]);
}

#[test]
fn test_render_all_produces_png() {
    let charts = render_all(&benchmark_table(), &ChartStyle::default()).unwrap();

    assert_eq!(charts.len(), 3);
    for chart in &charts {
        assert_eq!(&chart.png[1..4], b"PNG");
    }
}

#[test]
fn test_single_size_renders_flat_fit() {
    let trials: Vec<TrialRecord> = (0..100)
        .map(|_| TrialRecord::new(512.0, 18.0, 0.004, 0.003))
        .collect();
    let table = aggregate(&trials).unwrap();

    let chart = render_chart(&table, ChartKind::InsertionTime, &ChartStyle::default()).unwrap();

    assert_eq!(chart.fit.slope, 0.0);
    assert!((chart.fit.intercept - 0.004).abs() < 1e-15);
    assert_eq!(&chart.png[1..4], b"PNG");
}

#[test]
fn test_legend_area_scales_with_font() {
    let small = ChartStyle::default();
    let large = ChartStyle {
        font_size_pt: 20.0,
        ..ChartStyle::default()
    };

    let (small_sample, small_area) = legend_layout(&small);
    let (large_sample, large_area) = legend_layout(&large);

    assert!(small_area > small_sample);
    assert!(large_area > large_sample);
    assert!(large_area > small_area);
}
