mod common;

use common::fixtures::counting_u8;
use matrix_buffer::{Matrix, MatrixError};

#[test]
fn move_after_write_keeps_value_and_empties_source() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut first = Matrix::<u8>::new(10, 20);
    assert_eq!(first.allocation_report().bytes, 200);
    first[(5, 6)] = 100;

    let second = first.take();
    assert_eq!(second[(5, 6)], 100);
    assert_eq!(second.dims(), (10, 20));
    assert_eq!(first.dims(), (0, 0));
    assert!(!first.has_storage());
    assert_eq!(
        first.element_at(5, 6),
        Err(MatrixError::EmptyBuffer { row: 5, col: 6 })
    );

    first.init(30, 10);
    assert_eq!(first.allocation_report().bytes, 300);
}

#[test]
fn copies_never_share_storage() {
    let _ = env_logger::builder().is_test(true).try_init();

    let original = counting_u8(8, 8);
    let mut copy = original.clone();
    let mut assigned = Matrix::<u8>::new(1, 1);
    assigned.clone_from(&original);

    for r in 0..8 {
        for c in 0..8 {
            copy[(r, c)] = 0xFF;
            assigned[(r, c)] = 0xEE;
            assert_eq!(original[(r, c)], (r * 8 + c) as u8);
        }
    }
}

#[test]
fn move_assign_chain_transfers_sole_ownership() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut a = counting_u8(3, 7);
    let expected = a.clone();
    let mut b = Matrix::default();
    let mut c = Matrix::<u8>::new(2, 2);

    b.move_from(&mut a);
    c.move_from(&mut b);

    assert_eq!(c, expected);
    for m in [&a, &b] {
        assert_eq!(m.dims(), (0, 0));
        assert!(!m.has_storage());
    }

    // Moved-from buffers stay usable.
    a.init(1, 1);
    a[(0, 0)] = 5;
    b.clear();
    assert_eq!(a.get(0, 0), 5);
}

#[test]
fn boxed_and_shared_handles() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut boxed = Box::new(Matrix::<u8>::new(10, 20));
    boxed[(5, 6)] = 100;
    assert_eq!(boxed.get(5, 6), 100);

    let shared = Rc::new(RefCell::new(Matrix::<u8>::new(100, 200)));
    let views = [Rc::clone(&shared), Rc::clone(&shared)];
    shared.borrow_mut()[(5, 6)] = 100;
    for v in &views {
        assert_eq!(v.borrow()[(5, 6)], 100);
    }
    assert_eq!(Rc::strong_count(&shared), 3);
}
