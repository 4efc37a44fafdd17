use console_core::{Point, WindowConfig, WindowController};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-9;

fn pointer() -> impl Strategy<Value = (f64, f64)> {
    (-4000.0f64..4000.0, -4000.0f64..4000.0)
}

fn locked_config() -> impl Strategy<Value = WindowConfig> {
    (
        200.0f64..900.0,
        100.0f64..500.0,
        50.0f64..400.0,
        50.0f64..300.0,
        0.5f64..3.0,
    )
        .prop_map(|(width, height, min_width, min_height, ratio)| WindowConfig {
            default_x: 0.0,
            default_y: 0.0,
            default_width: width.max(min_width),
            default_height: height.max(min_height),
            min_width,
            min_height,
            maintain_aspect_ratio: true,
            aspect_ratio: ratio,
        })
}

proptest! {
    #[test]
    fn drag_lands_at_pointer_minus_anchor(
        start in pointer(),
        moves in prop::collection::vec(pointer(), 1..20),
    ) {
        let mut controller = WindowController::new(WindowConfig {
            default_x: 100.0,
            default_y: 80.0,
            ..WindowConfig::default()
        });
        let offset = (start.0 - 100.0, start.1 - 80.0);
        controller.begin_drag(Point::new(start.0, start.1)).unwrap();
        for (x, y) in &moves {
            controller.pointer_move(Point::new(*x, *y));
        }
        controller.end_gesture();

        let last = moves[moves.len() - 1];
        let geometry = controller.geometry();
        prop_assert!((geometry.x - (last.0 - offset.0)).abs() < TOLERANCE);
        prop_assert!((geometry.y - (last.1 - offset.1)).abs() < TOLERANCE);
    }

    #[test]
    fn locked_resize_keeps_ratio_and_floors(
        config in locked_config(),
        start in pointer(),
        moves in prop::collection::vec(pointer(), 1..20),
    ) {
        let mut controller = WindowController::new(config);
        controller.begin_resize(Point::new(start.0, start.1)).unwrap();
        for (x, y) in moves {
            controller.pointer_move(Point::new(x, y));
            let geometry = controller.geometry();
            prop_assert!(geometry.width >= config.min_width);
            prop_assert!(geometry.height >= config.min_height);
            let ratio = geometry.width / geometry.height;
            prop_assert!((ratio - config.aspect_ratio).abs() < 1e-6 * config.aspect_ratio);
        }
    }

    #[test]
    fn unlocked_resize_floors_each_axis(
        min_width in 50.0f64..400.0,
        min_height in 50.0f64..400.0,
        start in pointer(),
        end in pointer(),
    ) {
        let config = WindowConfig {
            min_width,
            min_height,
            default_width: 500.0,
            default_height: 450.0,
            ..WindowConfig::default()
        };
        let mut controller = WindowController::new(config);
        controller.begin_resize(Point::new(start.0, start.1)).unwrap();
        controller.pointer_move(Point::new(end.0, end.1));

        let geometry = controller.geometry();
        prop_assert_eq!(geometry.width, (500.0 + (end.0 - start.0)).max(min_width));
        prop_assert_eq!(geometry.height, (450.0 + (end.1 - start.1)).max(min_height));
    }

    #[test]
    fn minimize_round_trip_preserves_geometry(
        drag_to in pointer(),
        toggles in 1usize..6,
    ) {
        let mut controller = WindowController::new(WindowConfig::default());
        controller.begin_drag(Point::new(0.0, 0.0)).unwrap();
        controller.pointer_move(Point::new(drag_to.0, drag_to.1));
        controller.end_gesture();
        let before = controller.geometry();

        for _ in 0..toggles * 2 {
            controller.toggle_minimized();
        }
        prop_assert_eq!(controller.geometry(), before);
    }
}

#[test]
fn live_feed_scenario_resize() {
    let mut controller = WindowController::new(WindowConfig {
        default_x: 100.0,
        default_y: 80.0,
        default_width: 600.0,
        default_height: 338.0,
        min_width: 300.0,
        min_height: 169.0,
        maintain_aspect_ratio: true,
        aspect_ratio: 16.0 / 9.0,
    });
    controller.begin_resize(Point::new(695.0, 414.0)).unwrap();
    controller.pointer_move(Point::new(845.0, 454.0));
    controller.end_gesture();

    let geometry = controller.geometry();
    assert_eq!(geometry.width, 750.0);
    assert!((geometry.height - 421.875).abs() < TOLERANCE);
}
