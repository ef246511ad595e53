use super::*;

fn drive(registry: &mut TweenRegistry, clock: &TickClock, frames: usize) {
    for _ in 0..frames {
        clock.advance();
        registry.advance_all();
    }
}

#[test]
fn dispatches_on_the_held_alternative() {
    let mut registry = TweenRegistry::new();
    let clock = TickClock::new();
    let value = Shared::new(GradualValue::F32(0.0));

    make_tween(&mut registry, &value, GradualValue::F32(10.0), &clock, 10).expect("f32 tween");
    drive(&mut registry, &clock, 4);

    assert_eq!(value.get(), GradualValue::F32(4.0));
}

#[test]
fn every_builtin_alternative_can_be_tweened() {
    let mut registry = TweenRegistry::new();
    let clock = TickClock::new();
    let cases = [
        (GradualValue::I32(0), GradualValue::I32(4), GradualValue::I32(4)),
        (GradualValue::U32(8), GradualValue::U32(0), GradualValue::U32(0)),
        (GradualValue::I64(-4), GradualValue::I64(4), GradualValue::I64(4)),
        (GradualValue::F64(1.0), GradualValue::F64(3.0), GradualValue::F64(3.0)),
        (GradualValue::Bool(false), GradualValue::Bool(true), GradualValue::Bool(true)),
    ];

    let values: Vec<_> = cases
        .iter()
        .map(|(start, target, _)| {
            let value = Shared::new(*start);
            make_tween(&mut registry, &value, *target, &clock, 4).expect("valid tween");
            value
        })
        .collect();

    drive(&mut registry, &clock, 4);

    for (value, (_, _, expected)) in values.iter().zip(cases.iter()) {
        assert_eq!(value.get(), *expected);
    }
}

#[test]
fn mismatched_target_is_rejected() {
    let mut registry = TweenRegistry::new();
    let clock = TickClock::new();
    let value = Shared::new(GradualValue::I32(0));

    let err = make_tween(&mut registry, &value, GradualValue::F64(1.0), &clock, 5)
        .expect_err("type mismatch");

    assert_eq!(
        err,
        TweenError::TypeMismatch {
            expected: "i32",
            found: "f64",
        }
    );
    assert!(registry.is_empty());
}

#[test]
fn invalid_duration_propagates_through_the_factory() {
    let mut registry = TweenRegistry::new();
    let clock = TickClock::new();
    let value = Shared::new(GradualValue::F64(0.0));

    let err = make_tween(&mut registry, &value, GradualValue::F64(1.0), &clock, 0)
        .expect_err("zero duration");
    assert_eq!(err, TweenError::InvalidDuration { duration: 0 });
}

#[test]
fn host_switching_alternative_retires_the_tween_untouched() {
    let mut registry = TweenRegistry::new();
    let clock = TickClock::new();
    let value = Shared::new(GradualValue::I32(0));
    let id = make_tween(&mut registry, &value, GradualValue::I32(10), &clock, 10)
        .expect("i32 tween");

    drive(&mut registry, &clock, 1);
    assert_eq!(value.get(), GradualValue::I32(1));

    value.set(GradualValue::F64(42.5));
    drive(&mut registry, &clock, 1);
    assert_eq!(value.get(), GradualValue::F64(42.5));
    assert!(!registry.is_active(id));

    drive(&mut registry, &clock, 1);
    assert!(!registry.contains(id));
    assert_eq!(value.get(), GradualValue::F64(42.5));
}

#[test]
fn variant_binding_reports_lost_alternative() {
    let value = Shared::new(GradualValue::U32(5));
    let binding = VariantBinding {
        value: value.clone(),
        last: Cell::new(5u32),
    };
    assert!(binding.is_bound());

    value.set(GradualValue::Bool(false));
    assert!(!binding.is_bound());
    binding.set(9);
    assert_eq!(value.get(), GradualValue::Bool(false));
}

#[test]
fn variant_conversions_match_type_names() {
    assert_eq!(GradualValue::from(3u32), GradualValue::U32(3));
    assert_eq!(<f32 as VariantMember>::TYPE_NAME, "f32");
    assert_eq!(GradualValue::from(true).type_name(), bool::TYPE_NAME);
    assert_eq!(i64::from_variant(GradualValue::I64(9)), Some(9));
    assert_eq!(i64::from_variant(GradualValue::I32(9)), None);
}
