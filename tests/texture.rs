#![cfg(not(target_arch = "wasm32"))]

use std::borrow::Cow;

use pointfield_wasm::core::{pad_records, plan_layout, TextureLayoutError};

#[test]
fn grid_always_holds_every_record() {
    for components in 1..=4 {
        for count in 0..200 {
            let layout = plan_layout(count * components, components).unwrap();
            assert!(
                layout.record_capacity() >= count,
                "{count} records do not fit a {}x{} grid",
                layout.width,
                layout.height
            );
            assert_eq!(layout.width, (count as f64).sqrt().ceil() as usize);
        }
    }
}

#[test]
fn exact_fit_passes_buffer_through() {
    // 16 records, 4 components: a 4x4 grid fits exactly.
    let data: Vec<f32> = (0..64).map(|i| i as f32).collect();
    let layout = plan_layout(data.len(), 4).unwrap();
    assert_eq!((layout.width, layout.height), (4, 4));

    let padded = pad_records(&data, &layout);
    assert!(matches!(padded, Cow::Borrowed(_)));
    assert_eq!(padded.as_ref(), data.as_slice());
}

#[test]
fn padding_tail_is_zero_filled() {
    // 10 records need a 4x3 grid, leaving 2 padding cells.
    let data: Vec<f32> = (0..40).map(|i| i as f32 + 1.0).collect();
    let layout = plan_layout(data.len(), 4).unwrap();
    assert_eq!((layout.width, layout.height), (4, 3));

    let padded = pad_records(&data, &layout);
    assert_eq!(padded.len(), layout.float_capacity());
    assert_eq!(&padded[..data.len()], data.as_slice());
    assert!(padded[data.len()..].iter().all(|&v| v == 0.0));
}

#[test]
fn rejects_unaligned_buffer_length() {
    assert_eq!(
        plan_layout(10, 4),
        Err(TextureLayoutError::LengthMismatch { len: 10, components: 4 })
    );
}

#[test]
fn rejects_bad_component_counts() {
    assert_eq!(plan_layout(8, 0), Err(TextureLayoutError::InvalidComponents(0)));
    assert_eq!(plan_layout(10, 5), Err(TextureLayoutError::InvalidComponents(5)));
}

#[test]
fn errors_are_described() {
    let err = plan_layout(10, 4).unwrap_err();
    assert_eq!(
        err.to_string(),
        "buffer length 10 is not a multiple of 4 components"
    );
}
