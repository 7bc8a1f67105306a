use rand::{rngs::StdRng, SeedableRng};
use star_field::{
    DrawCommand,
    DrawSurface,
    RecordingSurface,
    Size,
    StarField,
    StarFieldConfig,
    StarFieldGroup,
};

#[test]
fn resize_keeps_count_and_rescatters() {
    let mut field = StarField::with_config(StarFieldConfig::seeded(2024));
    field.start(Some(RecordingSurface::new(400.0, 200.0)));
    assert_eq!(field.particles().len(), 75);

    for _ in 0..30 {
        field.frame();
    }
    let before = field.particles().to_vec();

    field.surface_mut().unwrap().set_layout_size(800.0, 400.0);
    field.resize();

    assert_eq!(field.particles().len(), 75);
    let moved = before
        .iter()
        .zip(field.particles())
        .filter(|(old, new)| (old.x, old.y) != (new.x, new.y))
        .count();
    assert_eq!(moved, 75);
    for p in field.particles() {
        assert!(p.x >= 0.0 && p.x < 800.0);
        assert!(p.y >= 0.0 && p.y < 400.0);
    }
    // Some stars should now sit in the area the old surface didn't cover.
    assert!(field.particles().iter().any(|p| p.x > 400.0 || p.y > 200.0));
}

#[test]
fn large_surfaces_are_capped() {
    let mut field = StarField::with_rng(StdRng::seed_from_u64(1));
    field.start(Some(RecordingSurface::new(1920.0, 1080.0)));
    assert_eq!(field.particles().len(), 100);
}

#[test]
fn stopped_field_leaves_its_surface_alone() {
    let mut field = StarField::with_config(StarFieldConfig::seeded(5));
    field.start(Some(RecordingSurface::new(120.0, 120.0)));
    let mut frames = 0;
    while field.frame() {
        frames += 1;
        if frames == 5 {
            break;
        }
    }

    let surface = field.stop().expect("running field owns its surface");
    let strokes = surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Stroke))
        .count();
    assert_eq!(strokes, 5 * 30);

    assert!(field.stop().is_none());
    for _ in 0..5 {
        assert!(!field.frame());
    }
    assert_eq!(field.frames_drawn(), 5);
}

#[test]
fn boxed_surfaces_share_a_group() {
    let mut group: StarFieldGroup<u32, Box<dyn DrawSurface>> =
        StarFieldGroup::new(StarFieldConfig::seeded(77));
    group.bind(1, Some(Box::new(RecordingSurface::new(64.0, 64.0))));
    group.bind(2, Some(Box::new(RecordingSurface::new(400.0, 400.0))));

    for _ in 0..10 {
        assert_eq!(group.frame_all(), 2);
    }

    let small = group.get(&1).unwrap();
    let large = group.get(&2).unwrap();
    assert_eq!(small.particles().len(), 16);
    assert_eq!(large.particles().len(), 100);
    assert_eq!(small.size(), Size::new(64.0, 64.0));
    assert_eq!(large.size(), Size::new(400.0, 400.0));
    for p in small.particles() {
        assert!(p.x >= 0.0 && p.x <= 64.0 && p.y >= 0.0 && p.y <= 64.0);
    }
}

#[test]
fn released_surface_repaints_blank() {
    let mut field = StarField::with_config(StarFieldConfig::seeded(12));
    field.start(Some(RecordingSurface::new(200.0, 100.0)));
    assert!(field.frame());

    let mut surface = field.stop().unwrap();
    assert_eq!(surface.dots().len(), 37);

    let size = surface.drawable_size();
    surface.clear_rect(0.0, 0.0, size.width, size.height);
    assert!(surface.dots().is_empty());
    assert!(!field.frame());
    assert!(surface.dots().is_empty());
}
