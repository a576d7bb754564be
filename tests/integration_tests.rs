use sovran_typekit::figure::{Circle, Figure, FigureBuilder, Square, Style};
use sovran_typekit::pizza::{Calzone, NyPizza, Pizza, PizzaBuilder, Size, Topping};
use sovran_typekit::shared::{empty_container, identity, reverse_order};
use sovran_typekit::{AnyValue, ProductBuilder, TypeKey, TypeKitError, TypeMap, TypeToken};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::thread;

#[test]
fn test_favorites_scenario() -> Result<(), TypeKitError> {
    let mut favorites = TypeMap::new();

    favorites.put(TypeToken::<String>::of(), "Java".to_string())?;
    favorites.put(TypeToken::<i64>::of(), 42)?;

    assert_eq!(
        favorites.get(TypeToken::<String>::of()),
        Some(&"Java".to_string())
    );
    assert_eq!(favorites.get(TypeToken::<i64>::of()), Some(&42));

    Ok(())
}

#[test]
fn test_entries_for_distinct_types_never_alias() -> Result<(), TypeKitError> {
    let ta = TypeToken::<u32>::of();
    let tb = TypeToken::<i32>::of();
    let mut map = TypeMap::new();

    map.put(ta, 1)?;
    map.put(tb, -1)?;

    // Mutating one entry leaves the other alone
    *map.get_mut(ta).unwrap() += 10;

    assert_eq!(map.get(ta), Some(&11));
    assert_eq!(map.get(tb), Some(&-1));
    Ok(())
}

#[test]
fn test_overwrite_keeps_one_entry() -> Result<(), TypeKitError> {
    let token = TypeToken::<String>::of();
    let mut map = TypeMap::new();

    map.put(token, "v1".to_string())?;
    let previous = map.put(token, "v2".to_string())?;

    assert_eq!(previous.as_deref(), Some("v1"));
    assert_eq!(map.get(token).map(String::as_str), Some("v2"));
    assert_eq!(map.len(), 1);
    Ok(())
}

#[test]
fn test_absent_token_is_none_not_error() {
    let map = TypeMap::new();
    assert!(map.get(TypeToken::<Vec<u8>>::of()).is_none());
    assert!(map.is_empty());
}

#[test]
fn test_erased_entry_point_checks_type() -> Result<(), TypeKitError> {
    let mut map = TypeMap::new();

    // A key arriving from somewhere without static types
    let keys: Vec<TypeKey> = vec![TypeKey::of::<String>(), TypeKey::of::<bool>()];
    let values = vec![AnyValue::new("ok".to_string()), AnyValue::new(3u8)];

    let mut results = Vec::new();
    for (key, value) in keys.into_iter().zip(values) {
        results.push(map.put_erased(key, value));
    }

    assert_eq!(results[0], Ok(()));
    assert!(matches!(
        results[1],
        Err(TypeKitError::TypeMismatch {
            expected: "bool",
            found: "u8"
        })
    ));
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(TypeToken::<String>::of()).map(String::as_str), Some("ok"));
    Ok(())
}

#[test]
fn test_map_behind_external_lock() -> Result<(), TypeKitError> {
    let counter = TypeToken::<u64>::of();
    let shared = Arc::new(Mutex::new(TypeMap::new()));
    shared.lock().unwrap().put(counter, 0)?;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || -> Result<(), TypeKitError> {
                for _ in 0..25 {
                    shared.lock().unwrap().with_mut(counter, |n| *n += 1)?;
                }
                Ok(())
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap()?;
    }

    assert_eq!(shared.lock().unwrap().get(counter), Some(&100));
    Ok(())
}

#[test]
fn test_ny_pizza_end_to_end() -> Result<(), TypeKitError> {
    let pizza: NyPizza = NyPizza::builder()
        .size(Size::Large)
        .add_topping(Topping::Ham)
        .add_topping(Topping::Onion)
        .build()?;

    assert_eq!(pizza.size(), Size::Large);
    let toppings: HashSet<Topping> = pizza.toppings().iter().collect();
    assert_eq!(toppings, HashSet::from([Topping::Onion, Topping::Ham]));
    Ok(())
}

#[test]
fn test_builder_changes_after_build_do_not_leak() -> Result<(), TypeKitError> {
    let builder = Calzone::builder().add_topping(Topping::Pepper);
    let built = builder.clone().build()?;

    let builder = builder.add_topping(Topping::Mushroom).sauce_inside();

    assert_eq!(built.toppings().len(), 1);
    assert!(!built.is_sauce_inside());

    let rebuilt = builder.build()?;
    assert_eq!(rebuilt.toppings().len(), 2);
    assert!(rebuilt.is_sauce_inside());
    Ok(())
}

#[test]
fn test_figure_builders_return_subtypes() -> Result<(), TypeKitError> {
    let circle = Circle::builder()
        .with_options([Style::Filled, Style::Shadowed])
        .radius(2.0)
        .build()?;
    let square = Square::builder().side(4.0).style(Style::Outlined).build()?;

    // radius() and side() only exist on the subtypes
    assert_eq!(circle.radius(), 2.0);
    assert_eq!(square.side(), 4.0);
    assert_eq!(square.area(), 16.0);
    assert_eq!(circle.styles().len(), 2);
    Ok(())
}

#[test]
fn test_missing_required_field_names_field() {
    let err = Square::builder().style(Style::Dashed).build().unwrap_err();
    assert_eq!(err, TypeKitError::MissingRequiredField { field: "side" });
    assert_eq!(err.to_string(), "missing required field `side`");
}

#[test]
fn test_generic_code_over_any_builder() -> Result<(), TypeKitError> {
    fn build_with_all<B>(builder: B, options: &[B::Opt]) -> Result<B::Product, TypeKitError>
    where
        B: ProductBuilder,
    {
        builder.with_options(options.iter().copied()).build()
    }

    let calzone: Calzone = build_with_all(Calzone::builder(), &[Topping::Ham, Topping::Sausage])?;
    let circle: Circle = build_with_all(Circle::builder().radius(1.0), &[Style::Dashed])?;

    assert_eq!(calzone.toppings().len(), 2);
    assert!(circle.styles().contains(&Style::Dashed));
    Ok(())
}

#[test]
fn test_shared_instances_behave_identically() {
    let strings = empty_container::<String>();
    let longs = empty_container::<i64>();
    assert_eq!(strings.len(), 0);
    assert_eq!(longs.len(), 0);
    assert!(strings.is_empty() && longs.is_empty());

    let same_string = identity::<String>();
    let same_long = identity::<i64>();
    assert_eq!(same_string("x".to_string()), "x");
    assert_eq!(same_long(9), 9);

    let mut names = vec!["b", "c", "a"];
    names.sort_by(reverse_order::<&str>().as_fn());
    assert_eq!(names, vec!["c", "b", "a"]);
}

#[test]
fn test_shared_instances_used_across_threads() {
    let order = reverse_order::<i32>();
    let handles: Vec<_> = (0..3)
        .map(|i| {
            thread::spawn(move || {
                let mut values = vec![i, i + 5, i + 2];
                values.sort_by(order.as_fn());
                values
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let i = i as i32;
        assert_eq!(handle.join().unwrap(), vec![i + 5, i + 2, i]);
    }
}
