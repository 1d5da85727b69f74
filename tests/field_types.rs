use varcond::{Displacement, FieldView, OwnedField, VarCondError};

#[test]
fn field_view_rejects_invalid_dimensions() {
    let data = [0u8; 4];

    let err = FieldView::from_slice(&data, 0, 1).err().unwrap();
    assert_eq!(
        err,
        VarCondError::InvalidDimensions {
            width: 0,
            height: 1,
        }
    );

    let err = FieldView::from_slice(&data, 1, 0).err().unwrap();
    assert_eq!(
        err,
        VarCondError::InvalidDimensions {
            width: 1,
            height: 0,
        }
    );
}

#[test]
fn field_view_rejects_invalid_stride() {
    let data = [0u8; 8];

    let err = FieldView::new(&data, 4, 1, 3).err().unwrap();
    assert_eq!(
        err,
        VarCondError::InvalidStride {
            width: 4,
            stride: 3,
        }
    );
}

#[test]
fn field_view_rejects_small_buffer() {
    let data = [0u8; 3];

    let err = FieldView::new(&data, 2, 2, 2).err().unwrap();
    assert_eq!(err, VarCondError::BufferTooSmall { needed: 4, got: 3 });
}

#[test]
fn field_view_roi_matches_expected_values() {
    let data: Vec<u8> = (0u8..16).collect();
    let view = FieldView::from_slice(&data, 4, 4).unwrap();
    assert_eq!(view.stride(), 4);
    assert_eq!(view.as_slice(), data.as_slice());

    let roi = view.roi(1, 1, 2, 2).unwrap();
    assert_eq!(roi.width(), 2);
    assert_eq!(roi.height(), 2);
    assert_eq!(roi.stride(), 4);
    assert_eq!(roi.row(0).unwrap(), &[5u8, 6u8]);
    assert_eq!(roi.row(1).unwrap(), &[9u8, 10u8]);
    assert_eq!(roi.get(0, 0), Some(5u8));
    assert_eq!(roi.get(0, 2), None);

    let err = view.roi(3, 3, 2, 2).err().unwrap();
    assert_eq!(
        err,
        VarCondError::RoiOutOfBounds {
            row: 3,
            col: 3,
            height: 2,
            width: 2,
            field_height: 4,
            field_width: 4,
        }
    );
}

#[test]
fn sample_pair_applies_clipping_at_every_edge() {
    let data: Vec<u8> = (0u8..9).collect();
    let view = FieldView::from_slice(&data, 3, 3).unwrap();

    // Interior pixel pairs in all four directions.
    assert_eq!(view.sample_pair(1, 1, Displacement::new(1, 0)), Some((4, 5)));
    assert_eq!(
        view.sample_pair(1, 1, Displacement::new(-1, 0)),
        Some((4, 3))
    );
    assert_eq!(view.sample_pair(1, 1, Displacement::new(0, 1)), Some((4, 7)));
    assert_eq!(
        view.sample_pair(1, 1, Displacement::new(0, -1)),
        Some((4, 1))
    );

    // Edge pixels clip instead of wrapping.
    assert_eq!(view.sample_pair(0, 2, Displacement::new(1, 0)), None);
    assert_eq!(view.sample_pair(0, 0, Displacement::new(0, -1)), None);
    assert_eq!(view.sample_pair(2, 0, Displacement::new(-1, 1)), None);

    // Zero displacement pairs a pixel with itself.
    assert_eq!(view.sample_pair(2, 2, Displacement::new(0, 0)), Some((8, 8)));
}

#[test]
fn field_mean_matches_hand_computed_value() {
    let data = [5.0f64, 3.0, 2.0, 4.0, 1.0, 7.0];
    let view = FieldView::from_slice(&data, 3, 2).unwrap();
    assert!((view.mean() - 22.0 / 6.0).abs() < 1e-12);
}

#[test]
fn owned_field_from_rows_rejects_ragged_input() {
    let rows = vec![vec![1.0f64, 2.0], vec![3.0], vec![4.0, 5.0]];
    let err = OwnedField::from_rows(rows).err().unwrap();
    assert_eq!(
        err,
        VarCondError::RaggedRows {
            row: 1,
            expected: 2,
            got: 1,
        }
    );

    let err = OwnedField::<f64>::from_rows(Vec::new()).err().unwrap();
    assert_eq!(
        err,
        VarCondError::InvalidDimensions {
            width: 0,
            height: 0,
        }
    );
}

#[test]
fn owned_field_round_trips_through_view() {
    let rows = vec![vec![1.0f64, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
    let field = OwnedField::from_rows(rows).unwrap();
    assert_eq!(field.width(), 3);
    assert_eq!(field.height(), 2);

    let view = field.view();
    assert_eq!(view.row(1).unwrap(), &[4.0, 5.0, 6.0]);
    assert_eq!(view.get(0, 2), Some(3.0));
}

#[test]
fn owned_field_from_vec_checks_exact_length() {
    let err = OwnedField::from_vec(vec![0u8; 5], 2, 2).err().unwrap();
    assert_eq!(
        err,
        VarCondError::InvalidDimensions {
            width: 2,
            height: 2,
        }
    );

    let err = OwnedField::from_vec(vec![0u8; 3], 2, 2).err().unwrap();
    assert_eq!(err, VarCondError::BufferTooSmall { needed: 4, got: 3 });
}
