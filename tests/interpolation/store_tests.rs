use interpoly::interpolation::config::ModelCfg;
use interpoly::interpolation::errors::InterpolationError;
use interpoly::interpolation::point::Point;
use interpoly::interpolation::store::PointStore;

type PolyResult = Result<(), InterpolationError>;

fn store_with(xy: &[(f64, f64)]) -> Result<PointStore, InterpolationError> {
    let mut store = PointStore::new(ModelCfg::new());
    for &(x, y) in xy {
        store.append(x, y)?;
    }
    Ok(store)
}

#[test]
fn append_keeps_insertion_order() -> PolyResult {
    let store = store_with(&[(2.0, 0.0), (-1.0, 1.0), (5.0, 2.0)])?;
    let xs: Vec<f64> = store.ordered().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![2.0, -1.0, 5.0]);
    Ok(())
}

#[test]
fn append_duplicate_rejected() -> PolyResult {
    let mut store = store_with(&[(0.0, 0.0), (1.0, 2.0)])?;
    let err = store.append(1.0, 5.0).unwrap_err();
    assert_eq!(err, InterpolationError::DuplicateAbscissa { x: 1.0, existing_idx: 1 });
    assert_eq!(store.len(), 2);
    Ok(())
}

#[test]
fn append_with_tolerance() -> PolyResult {
    let cfg = ModelCfg::new().set_x_tol(0.5)?;
    let mut store = PointStore::new(cfg);
    store.append(0.0, 0.0)?;

    assert!(matches!(
        store.append(0.4, 1.0),
        Err(InterpolationError::DuplicateAbscissa { existing_idx: 0, .. })
    ));
    store.append(0.6, 1.0)?;
    assert_eq!(store.len(), 2);
    Ok(())
}

#[test]
fn append_non_finite_rejected() {
    let mut store = PointStore::new(ModelCfg::new());
    assert!(matches!(store.append(f64::NAN, 1.0), Err(InterpolationError::NonFinitePoint { .. })));
    assert!(matches!(store.append(1.0, f64::INFINITY), Err(InterpolationError::NonFinitePoint { .. })));
    assert!(store.is_empty());
}

#[test]
fn remove_at_bounds() -> PolyResult {
    let mut store = store_with(&[(0.0, 1.0), (1.0, 2.0)])?;
    assert_eq!(store.remove_at(2).unwrap_err(), InterpolationError::IndexOutOfRange { idx: 2, len: 2 });

    assert_eq!(store.remove_at(0)?, Point::new(0.0, 1.0));
    assert_eq!(store.ordered(), &[Point::new(1.0, 2.0)]);
    Ok(())
}

#[test]
fn remove_at_on_empty_store() {
    let mut store = PointStore::new(ModelCfg::new());
    assert_eq!(store.remove_at(0).unwrap_err(), InterpolationError::IndexOutOfRange { idx: 0, len: 0 });
}

#[test]
fn nearest_lowest_index_on_tie() -> PolyResult {
    let store = store_with(&[(0.0, 0.0), (2.0, 0.0), (1.0, 5.0)])?;
    assert_eq!(store.nearest_index(&Point::new(1.0, 0.0)), Some(0));
    assert_eq!(store.nearest_index(&Point::new(1.0, 4.0)), Some(2));
    Ok(())
}

#[test]
fn nearest_non_finite_target() -> PolyResult {
    let store = store_with(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)])?;
    assert_eq!(store.nearest_index(&Point::new(f64::NAN, 0.0)), None);
    assert_eq!(store.nearest_index(&Point::new(0.5, f64::INFINITY)), None);
    assert_eq!(store.nearest_index(&Point::new(0.4, 0.0)), Some(0));
    Ok(())
}

#[test]
fn remove_nearest() -> PolyResult {
    let mut store = store_with(&[(0.0, 1.0), (1.0, 2.0), (2.0, 5.0)])?;
    let removed = store.remove_nearest(&Point::new(1.1, 2.2))?;
    assert_eq!(removed, Point::new(1.0, 2.0));
    assert_eq!(store.ordered(), &[Point::new(0.0, 1.0), Point::new(2.0, 5.0)]);
    Ok(())
}

#[test]
fn remove_nearest_empty() {
    let mut store = PointStore::new(ModelCfg::new());
    assert_eq!(store.remove_nearest(&Point::new(0.0, 0.0)).unwrap_err(), InterpolationError::EmptyStore);
}

#[test]
fn move_keeps_position() -> PolyResult {
    let mut store = store_with(&[(0.0, 1.0), (1.0, 2.0), (2.0, 5.0)])?;
    store.move_at(0, 10.0, -3.0)?;
    assert_eq!(store.ordered()[0], Point::new(10.0, -3.0));
    assert_eq!(store.len(), 3);
    Ok(())
}

#[test]
fn move_to_own_abscissa() -> PolyResult {
    let mut store = store_with(&[(0.0, 1.0), (1.0, 2.0)])?;
    store.move_at(1, 1.0, 7.0)?;
    assert_eq!(store.ordered()[1], Point::new(1.0, 7.0));
    Ok(())
}

#[test]
fn move_collision_rejected() -> PolyResult {
    let mut store = store_with(&[(0.0, 1.0), (1.0, 2.0)])?;
    let err = store.move_at(1, 0.0, 3.0).unwrap_err();
    assert_eq!(err, InterpolationError::DuplicateAbscissa { x: 0.0, existing_idx: 0 });
    assert_eq!(store.ordered()[1], Point::new(1.0, 2.0));

    let err = store.move_at(4, 9.0, 9.0).unwrap_err();
    assert_eq!(err, InterpolationError::IndexOutOfRange { idx: 4, len: 2 });
    Ok(())
}
