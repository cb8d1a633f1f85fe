use yardage_tracker::model::club::{average, Bucket};

#[test]
fn test1_average_of_empty_history_is_zero() {
    assert_eq!(average(&[]), 0);
}

#[test]
fn test1_average_is_rounded_mean() {
    assert_eq!(average(&[250]), 250);
    assert_eq!(average(&[100, 110]), 105);
    // 101 / 3 = 33.67 rounds up
    assert_eq!(average(&[33, 34, 34]), 34);
    // half rounds up: 1.5 -> 2
    assert_eq!(average(&[1, 2]), 2);
    assert_eq!(average(&[100, 101]), 101);
    // stays exact when already integral
    assert_eq!(average(&[120, 140, 160]), 140);
}

#[test]
fn test1_bucket_record_appends_and_recomputes() {
    let mut bucket = Bucket::default();
    bucket.record(100);
    bucket.record(110);
    assert_eq!(bucket.distances, vec![100, 110]);
    assert_eq!(bucket.average, 105);
}

#[test]
fn test1_bucket_seeded_average_replaced_by_first_record() {
    let mut bucket = Bucket::seeded(260);
    assert_eq!(bucket.distances, Vec::<u32>::new());
    assert_eq!(bucket.average, 260);

    bucket.record(250);
    assert_eq!(bucket.distances, vec![250]);
    assert_eq!(bucket.average, 250);
}

#[test]
fn test1_bucket_remove_preserves_order_of_rest() {
    let mut bucket = Bucket::default();
    for yards in [200, 210, 220, 230] {
        bucket.record(yards);
    }
    bucket.remove(1);
    assert_eq!(bucket.distances, vec![200, 220, 230]);
    assert_eq!(bucket.average, average(&[200, 220, 230]));
}

#[test]
fn test1_bucket_remove_out_of_range_is_noop() {
    let mut bucket = Bucket::default();
    bucket.record(150);
    let before = bucket.clone();
    bucket.remove(5);
    assert_eq!(bucket, before);
}

#[test]
fn test1_bucket_clear_resets_average() {
    let mut bucket = Bucket::default();
    bucket.record(90);
    bucket.record(95);
    bucket.clear();
    assert!(bucket.distances.is_empty());
    assert_eq!(bucket.average, 0);
}
