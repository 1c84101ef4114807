//! Grid generator properties.

use tragerx_map::grid::{MAX_MAP_SIZE, Span};
use tragerx_map::{
    ADMIN_MAP_SIZE, CellState, ConfigError, GridGenerator, MapLayout, Pose, USER_MAP_SIZE,
    generate,
};

#[test]
fn test_every_size_produces_square_grid_and_center_pose() {
    for size in 1..=80 {
        let (grid, pose) = generate(size).unwrap();

        assert_eq!(grid.size(), size);
        assert_eq!(grid.cell_count(), size * size);
        assert_eq!(grid.iter().count(), size * size);
        assert_eq!(grid.count_by_state().total(), size * size);
        assert_eq!(pose, Pose::new((size / 2) as i32, (size / 2) as i32));
        assert!(pose.in_bounds(size));
    }
}

#[test]
fn test_generation_is_idempotent() {
    for size in [1, 9, 30, 50, 64] {
        let first = generate(size).unwrap();
        let second = generate(size).unwrap();
        assert_eq!(first, second, "size {size}");
    }
}

#[test]
fn test_admin_map_example() {
    let (grid, pose) = generate(ADMIN_MAP_SIZE).unwrap();

    for col in 16..=19 {
        assert_eq!(grid[(5, col)], CellState::ConfirmedObstacle);
    }
    assert_eq!(grid[(27, 27)], CellState::TentativeObstacle);
    assert_eq!(grid[(40, 40)], CellState::Unknown);
    assert_eq!(grid[(30, 30)], CellState::Free);
    assert_eq!(pose, Pose::new(25, 25));
}

#[test]
fn test_user_map_has_walls_and_tentative_block() {
    let (grid, _) = generate(USER_MAP_SIZE).unwrap();
    let counts = grid.count_by_state();

    // Rows 0..10 and 21..30, columns 15..20
    assert_eq!(counts.confirmed, 19 * 5);
    assert_eq!(counts.tentative, 25);
    assert_eq!(counts.unknown, 0);
    assert_eq!(grid[(21, 17)], CellState::ConfirmedObstacle);
    assert_eq!(grid[(20, 17)], CellState::Free);
}

#[test]
fn test_invalid_sizes() {
    assert_eq!(
        generate(0),
        Err(ConfigError::InvalidConfiguration(
            "map size must be positive".to_string()
        ))
    );
    assert!(generate(MAX_MAP_SIZE).is_ok());
    assert!(generate(MAX_MAP_SIZE + 1).is_err());
}

#[test]
fn test_custom_layout_from_toml() {
    let layout: MapLayout = toml::from_str(
        r#"
        wall_band_depth = 2
        unknown = { start = 0, end = 3 }

        [wall_columns]
        start = 5
        end = 6
        "#,
    )
    .unwrap();

    // Unspecified fields keep their defaults
    assert_eq!(layout.tentative, Some(Span::new(25, 30)));

    let (grid, _) = GridGenerator::new(layout).generate(10).unwrap();
    let counts = grid.count_by_state();

    assert_eq!(grid[(0, 0)], CellState::Unknown);
    assert_eq!(grid[(9, 5)], CellState::ConfirmedObstacle);
    assert_eq!(grid[(1, 5)], CellState::ConfirmedObstacle);
    assert_eq!(grid[(5, 5)], CellState::Free);
    // Rows 0,1 and 9 in column 5; (0,5) and (1,5) are outside the unknown block
    assert_eq!(counts.confirmed, 3);
    assert_eq!(counts.unknown, 9);
}

#[test]
fn test_invalid_layout_rejected() {
    let layout = MapLayout {
        unknown: Some(Span::new(10, 2)),
        ..MapLayout::default()
    };
    assert!(matches!(
        GridGenerator::new(layout).generate(50),
        Err(ConfigError::InvalidConfiguration(_))
    ));
}
