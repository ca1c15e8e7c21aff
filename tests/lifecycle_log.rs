mod common;

use common::log_capture::CaptureLogger;
use matrix_buffer::Matrix;

#[test]
fn lifecycle_is_reported_once_per_transition() {
    let logger = CaptureLogger::install();
    logger.take();

    {
        let mut a = Matrix::<u8>::new(10, 20);
        a[(5, 6)] = 7;
        let b = a.take();
        assert_eq!(b[(5, 6)], 7);
        drop(a);
        drop(b);
    }

    assert_eq!(
        logger.take(),
        vec![
            "Created: memory allocated: (10, 20) = 200 bytes",
            "Moved: (10, 20) ownership transferred",
            "Cleared: released 0 bytes",
            "Destroyed",
            "Cleared: released 200 bytes",
            "Destroyed",
        ]
    );

    let mut c = Matrix::<u16>::new(2, 2);
    c.init(3, 4);
    let lines = logger.take();
    assert_eq!(
        lines,
        vec![
            "Created: memory allocated: (2, 2) = 8 bytes",
            "Cleared: released 8 bytes",
            "Reinitialized: memory allocated: (3, 4) = 24 bytes",
        ]
    );
}
