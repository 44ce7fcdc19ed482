use draw_shapes::persistence::parse_record;
use draw_shapes::shape::{MIN_SCALE_SIZE, SCALE_DOWN_FACTOR, factory};
use draw_shapes::{Bounded, Point, Scene, Shape, ShapeColor, ShapeType};
use proptest::prelude::*;

fn color() -> impl Strategy<Value = ShapeColor> {
    prop::sample::select(ShapeColor::ALL.to_vec())
}

fn shape() -> impl Strategy<Value = ShapeType> {
    let coord = -500..500i32;
    let size = 1..300i32;
    prop_oneof![
        (color(), coord.clone(), coord.clone(), size.clone())
            .prop_map(|(c, x, y, s)| factory::create_square(c, Point::new(x, y), s).unwrap()),
        (color(), coord.clone(), coord.clone(), size.clone())
            .prop_map(|(c, x, y, d)| factory::create_circle(c, Point::new(x, y), d).unwrap()),
        (color(), coord.clone(), coord, size.clone(), size).prop_map(|(c, x, y, w, h)| {
            factory::create_rectangle(c, Point::new(x, y), w, h).unwrap()
        }),
    ]
}

// Size fields of a record: size, diameter, or width and height
fn smallest_side(record: &str) -> i32 {
    let fields: Vec<&str> = record.split(' ').collect();
    let sides = if fields[0] == "RECTANGLE" { &fields[3..5] } else { &fields[3..4] };
    sides.iter().map(|f| f.parse::<i32>().unwrap()).min().unwrap()
}

proptest! {
    #[test]
    fn square_contains_its_interior(x in -500..500i32, y in -500..500i32, size in 1..300i32,
                                    fx in 0.0..=1.0f64, fy in 0.0..=1.0f64) {
        let square = factory::create_square(ShapeColor::Red, Point::new(x, y), size).unwrap();
        let p = Point::new(x + (fx * size as f64) as i32, y + (fy * size as f64) as i32);
        prop_assert!(square.contains(p));
        prop_assert!(!square.contains(Point::new(x + size + 1, y)));
    }

    #[test]
    fn circle_contains_its_center(shape_center in (-500..500i32, -500..500i32), d in 1..300i32) {
        let center = Point::new(shape_center.0, shape_center.1);
        let circle = factory::create_circle(ShapeColor::Blue, center, d).unwrap();
        prop_assert!(circle.contains(center));
        prop_assert!(!circle.contains(Point::new(center.x + d, center.y)));
    }

    #[test]
    fn intersects_is_symmetric(a in shape(), b in shape()) {
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        prop_assert!(a.intersects(&a));
    }

    #[test]
    fn scale_down_never_crosses_the_floor(s in shape(), steps in 1..20usize) {
        let mut s = s;
        for _ in 0..steps {
            let before = s.to_record();
            let smallest = smallest_side(&before);
            let scaled = s.scale_down();
            if scaled {
                prop_assert!(smallest_side(&s.to_record()) >= MIN_SCALE_SIZE);
            } else {
                prop_assert_eq!(s.to_record(), before);
                prop_assert!((f64::from(smallest) * SCALE_DOWN_FACTOR) < f64::from(MIN_SCALE_SIZE));
            }
        }
    }

    #[test]
    fn scale_keeps_anchor(s in shape()) {
        let mut s = s;
        let anchor = s.anchor();
        s.scale_up();
        s.scale_down();
        prop_assert_eq!(s.anchor(), anchor);
    }

    #[test]
    fn record_parses_back(s in shape(), selected in any::<bool>()) {
        let mut s = s;
        s.set_selected(selected);
        let record = s.to_record();
        let parsed = parse_record(&record, 1).unwrap().unwrap();
        prop_assert_eq!(parsed.to_record(), record);
        prop_assert_eq!(parsed.kind(), s.kind());
        prop_assert_eq!(parsed.bounding_box(), s.bounding_box());
    }

    #[test]
    fn front_then_back_preserves_subsequences(
        flags in prop::collection::vec(any::<bool>(), 0..12)
    ) {
        let mut scene = Scene::new();
        for (i, selected) in flags.iter().enumerate() {
            let anchor = Point::new(i as i32, 0);
            let mut s = factory::create_square(ShapeColor::Green, anchor, 5).unwrap();
            s.set_selected(*selected);
            scene.add_shape(s);
        }
        let (selected, unselected): (Vec<_>, Vec<_>) = scene.iter().partition(|s| s.is_selected());
        let selected: Vec<_> = selected.iter().map(|s| s.id()).collect();
        let unselected: Vec<_> = unselected.iter().map(|s| s.id()).collect();

        scene.bring_to_front();
        scene.send_to_back();
        let order: Vec<_> = scene.iter().map(|s| s.id()).collect();
        prop_assert_eq!(order, [selected, unselected].concat());
        prop_assert_eq!(scene.len(), flags.len());
    }
}
