use super::*;
use crate::helpers::example::create_scalar_snapshot;

#[test]
fn can_detect_stagnation_when_best_fitness_stalls() {
    let condition = Stagnation::new(2, true);

    assert!(!condition.should_terminate(&create_scalar_snapshot(&[5., 10.], 0, true)));
    assert!(!condition.should_terminate(&create_scalar_snapshot(&[5., 10.], 1, true)));
    assert!(condition.should_terminate(&create_scalar_snapshot(&[5., 10.], 2, true)));
}

#[test]
fn can_reset_counting_on_improvement() {
    let condition = Stagnation::new(2, true);

    assert!(!condition.should_terminate(&create_scalar_snapshot(&[10.], 0, true)));
    assert!(!condition.should_terminate(&create_scalar_snapshot(&[11.], 1, true)));
    assert!(!condition.should_terminate(&create_scalar_snapshot(&[11.], 2, true)));
    assert!(condition.should_terminate(&create_scalar_snapshot(&[11.], 3, true)));
}

#[test]
fn can_track_improvement_under_non_natural_polarity() {
    let condition = Stagnation::new(2, false);

    assert!(!condition.should_terminate(&create_scalar_snapshot(&[5.], 0, false)));
    assert!(!condition.should_terminate(&create_scalar_snapshot(&[4.], 1, false)));
    assert!(!condition.should_terminate(&create_scalar_snapshot(&[4.], 2, false)));
    assert!(condition.should_terminate(&create_scalar_snapshot(&[4.], 3, false)));
}

#[test]
fn can_track_mean_fitness_instead_of_best() {
    let condition = Stagnation::new_with_mean(1, true, true);

    // the best fitness improves from 3 to 4 while the mean stays at 2
    assert!(!condition.should_terminate(&create_scalar_snapshot(&[1., 3.], 0, true)));
    assert!(condition.should_terminate(&create_scalar_snapshot(&[0., 4.], 1, true)));
}

#[test]
#[should_panic]
fn can_reject_zero_generation_limit() {
    let _ = Stagnation::new(0, true);
}
