use yardage_tracker::error::LedgerError;
use yardage_tracker::ledger::ClubLedger;
use yardage_tracker::model::club::{seed_clubs, Club, ClubKind, SwingType};

fn ledger() -> ClubLedger {
    ClubLedger::new(seed_clubs())
}

fn wedge_buckets(club: &Club) -> (&[u32], &[u32], &[u32]) {
    (
        club.history(SwingType::Full),
        club.history(SwingType::NineOclock),
        club.history(SwingType::SevenOclock),
    )
}

#[test]
fn test2_driver_scenario() {
    // seed default: empty history, average 260
    let mut ledger = ledger();
    let driver = ledger.find("driver").unwrap();
    assert_eq!(driver.history(SwingType::Full), &[] as &[u32]);
    assert_eq!(driver.display_average(), 260);

    let driver = ledger.record_distance("driver", None, 250).unwrap();
    assert_eq!(driver.history(SwingType::Full), &[250]);
    assert_eq!(driver.display_average(), 250);
}

#[test]
fn test2_wedge_scenario_buckets_are_independent() {
    let mut ledger = ledger();
    ledger.record_distance("pw", Some(SwingType::Full), 100).unwrap();
    let pw = ledger.record_distance("pw", Some(SwingType::Full), 110).unwrap();

    assert_eq!(pw.bucket_average(SwingType::Full), 105);
    assert_eq!(pw.bucket_average(SwingType::NineOclock), 0);
    assert_eq!(pw.bucket_average(SwingType::SevenOclock), 0);
    assert_eq!(pw.display_average(), 105);
}

#[test]
fn test2_recording_one_bucket_leaves_others_unchanged() {
    let mut ledger = ledger();
    ledger.record_distance("sw", Some(SwingType::NineOclock), 60).unwrap();
    ledger.record_distance("sw", Some(SwingType::Full), 95).unwrap();

    let before = ledger.find("sw").unwrap();
    let (_, nine_before, seven_before) = wedge_buckets(before);
    let nine_before = nine_before.to_vec();
    let seven_before = seven_before.to_vec();

    ledger.record_distance("sw", Some(SwingType::Full), 105).unwrap();

    let after = ledger.find("sw").unwrap();
    let (full, nine, seven) = wedge_buckets(after);
    assert_eq!(full, &[95, 105]);
    assert_eq!(nine, nine_before.as_slice());
    assert_eq!(seven, seven_before.as_slice());
    assert_eq!(after.bucket_average(SwingType::NineOclock), 60);
}

#[test]
fn test2_first_wedge_record_initializes_all_three_buckets() {
    let mut ledger = ledger();
    let gw = ledger.find("gw").unwrap();
    let ClubKind::Wedge(tracking) = &gw.kind else {
        panic!("gw should be a wedge");
    };
    assert!(tracking.buckets.is_none());

    ledger.record_distance("gw", Some(SwingType::SevenOclock), 70).unwrap();

    let gw = ledger.find("gw").unwrap();
    let ClubKind::Wedge(tracking) = &gw.kind else {
        panic!("gw should be a wedge");
    };
    let buckets = tracking.buckets.as_ref().unwrap();
    assert_eq!(buckets.seven.distances, vec![70]);
    assert!(buckets.full.distances.is_empty());
    assert_eq!(buckets.full.average, 0);
    assert!(buckets.nine.distances.is_empty());
    assert_eq!(buckets.nine.average, 0);
}

#[test]
fn test2_untracked_wedge_quotes_flat_seed_average() {
    let mut ledger = ledger();
    let pw = ledger.find("pw").unwrap();
    assert_eq!(pw.current_average(SwingType::Full), 130);
    assert_eq!(pw.current_average(SwingType::NineOclock), 130);

    // once any bucket is recorded, the quoted average is per bucket
    ledger.record_distance("pw", Some(SwingType::Full), 100).unwrap();
    let pw = ledger.find("pw").unwrap();
    assert_eq!(pw.current_average(SwingType::Full), 100);
    assert_eq!(pw.current_average(SwingType::NineOclock), 0);
}

#[test]
fn test2_swing_type_ignored_for_non_wedges() {
    let mut ledger = ledger();
    ledger.record_distance("7iron", Some(SwingType::NineOclock), 155).unwrap();
    let iron = ledger.find("7iron").unwrap();
    assert_eq!(iron.history(SwingType::Full), &[155]);
    assert_eq!(iron.display_average(), 155);
}

#[test]
fn test2_zero_distance_rejected_without_mutation() {
    let mut ledger = ledger();
    let before = ledger.find("driver").unwrap().clone();

    let err = ledger.record_distance("driver", None, 0).unwrap_err();
    assert_eq!(err, LedgerError::InvalidDistance);
    assert_eq!(ledger.find("driver").unwrap(), &before);
}

#[test]
fn test2_unknown_club_is_an_error() {
    let mut ledger = ledger();
    let err = ledger.record_distance("putter", None, 30).unwrap_err();
    assert_eq!(err, LedgerError::UnknownClub("putter".to_string()));
}

#[test]
fn test2_remove_targets_only_one_bucket() {
    let mut ledger = ledger();
    for yards in [100, 105, 110] {
        ledger.record_distance("pw", Some(SwingType::Full), yards).unwrap();
    }
    ledger.record_distance("pw", Some(SwingType::NineOclock), 80).unwrap();

    let pw = ledger.remove_distance("pw", Some(SwingType::Full), 1).unwrap();
    assert_eq!(pw.history(SwingType::Full), &[100, 110]);
    assert_eq!(pw.bucket_average(SwingType::Full), 105);
    assert_eq!(pw.history(SwingType::NineOclock), &[80]);
    assert_eq!(pw.bucket_average(SwingType::NineOclock), 80);
}

#[test]
fn test2_clear_resets_one_bucket_only() {
    let mut ledger = ledger();
    ledger.record_distance("lw", Some(SwingType::Full), 85).unwrap();
    ledger.record_distance("lw", Some(SwingType::NineOclock), 55).unwrap();

    let lw = ledger.clear_history("lw", Some(SwingType::Full)).unwrap();
    assert_eq!(lw.history(SwingType::Full), &[] as &[u32]);
    assert_eq!(lw.bucket_average(SwingType::Full), 0);
    assert_eq!(lw.history(SwingType::NineOclock), &[55]);
    assert_eq!(lw.bucket_average(SwingType::NineOclock), 55);
}

#[test]
fn test2_clear_flat_history() {
    let mut ledger = ledger();
    ledger.record_distance("5wood", None, 215).unwrap();
    ledger.record_distance("5wood", None, 225).unwrap();

    let wood = ledger.clear_history("5wood", None).unwrap();
    assert_eq!(wood.history(SwingType::Full), &[] as &[u32]);
    assert_eq!(wood.display_average(), 0);
}
