//! The process-wide interpolation switch. Kept in its own test binary so
//! flipping it cannot race other tests.

use celestial_time::corrections::{self, CorrectionRecord, CorrectionTable};

#[test]
fn toggle_applies_to_tables_without_explicit_setting() {
    let table = CorrectionTable::from_records(vec![
        CorrectionRecord::new(51544.0, 0.4, 0.0, 0.0),
        CorrectionRecord::new(51545.0, 0.2, 0.0, 0.0),
    ]);
    let pinned = table.reload().with_interpolation(true);

    assert!(corrections::interpolation());
    assert!((table.lookup(51544.5).unwrap().dut1 - 0.3).abs() < 1e-12);

    corrections::set_interpolation(false);
    assert!(!table.interpolates());
    assert_eq!(table.lookup(51544.5).unwrap().dut1, 0.4);
    // explicit setting wins over the toggle
    assert!((pinned.lookup(51544.5).unwrap().dut1 - 0.3).abs() < 1e-12);

    corrections::set_interpolation(true);
    assert!((table.lookup(51544.5).unwrap().dut1 - 0.3).abs() < 1e-12);
}
