use astrochart::core::{
    CHART_HEIGHT, ChartMode, DualAspectGridStyle, MAIN_RADIUS, resolve_sizing,
};

#[test]
fn natal_and_composite_share_basic_canvas() {
    for mode in [ChartMode::Natal, ChartMode::Composite] {
        let sizing = resolve_sizing(mode, DualAspectGridStyle::List);
        assert_eq!(sizing.width, 820.0);
        assert_eq!(sizing.viewbox, "0 0 820 550.0");
        assert_eq!(sizing.radii.first_circle, 0.0);
        assert_eq!(sizing.radii.second_circle, 36.0);
        assert_eq!(sizing.radii.third_circle, 120.0);
    }
}

#[test]
fn external_natal_uses_basic_canvas_with_dual_radii() {
    let sizing = resolve_sizing(ChartMode::ExternalNatal, DualAspectGridStyle::List);
    assert_eq!(sizing.width, 820.0);
    assert_eq!(sizing.viewbox, "0 0 820 550.0");
    assert_eq!(sizing.radii.first_circle, 56.0);
    assert_eq!(sizing.radii.second_circle, 92.0);
    assert_eq!(sizing.radii.third_circle, 112.0);
}

#[test]
fn synastry_is_wide_regardless_of_grid_style() {
    for style in [DualAspectGridStyle::List, DualAspectGridStyle::Table] {
        let sizing = resolve_sizing(ChartMode::Synastry, style);
        assert_eq!(sizing.width, 1200.0);
        assert_eq!(sizing.viewbox, "0 0 1200 546.0");
        assert_eq!(sizing.radii.first_circle, 56.0);
        assert_eq!(sizing.radii.second_circle, 92.0);
        assert_eq!(sizing.radii.third_circle, 112.0);
    }
}

#[test]
fn transit_defaults_to_wide_canvas() {
    let sizing = resolve_sizing(ChartMode::Transit, DualAspectGridStyle::List);
    assert_eq!(sizing.width, 1200.0);
    assert_eq!(sizing.viewbox, "0 0 1200 546.0");
}

#[test]
fn transit_table_grid_narrows_the_canvas() {
    let sizing = resolve_sizing(ChartMode::Transit, DualAspectGridStyle::Table);
    assert_eq!(sizing.width, 960.0);
    assert_eq!(sizing.viewbox, "0 0 960 546.0");
    assert_eq!(sizing.radii.first_circle, 56.0);
    assert_eq!(sizing.radii.second_circle, 92.0);
    assert_eq!(sizing.radii.third_circle, 112.0);
}

#[test]
fn height_and_main_radius_are_mode_independent() {
    let modes = [
        ChartMode::Natal,
        ChartMode::ExternalNatal,
        ChartMode::Synastry,
        ChartMode::Transit,
        ChartMode::Composite,
    ];
    for mode in modes {
        for style in [DualAspectGridStyle::List, DualAspectGridStyle::Table] {
            let sizing = resolve_sizing(mode, style);
            assert_eq!(sizing.height, CHART_HEIGHT);
            assert_eq!(sizing.radii.main, MAIN_RADIUS);
        }
    }
}
