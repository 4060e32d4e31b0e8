//! Tests for the rounding and arithmetic helpers.

use crocad::util::{gcd, round_to_nearest, round_to_nearest_slice, sum};
use crocad::Error;

#[test]
fn test_round_to_nearest_whole_numbers() {
    assert_eq!(round_to_nearest(20.51, 1, 0).unwrap(), 21);
    assert_eq!(round_to_nearest(20.5, 1, 0).unwrap(), 21);
    assert_eq!(round_to_nearest(20.49, 1, 0).unwrap(), 20);
}

#[test]
fn test_round_to_nearest_multiples_of_six() {
    assert_eq!(round_to_nearest(0.0, 6, 0).unwrap(), 0);
    assert_eq!(round_to_nearest(2.99999, 6, 0).unwrap(), 0);
    assert_eq!(round_to_nearest(3.0, 6, 0).unwrap(), 6);
    assert_eq!(round_to_nearest(3.11111, 6, 0).unwrap(), 6);
    assert_eq!(round_to_nearest(8.99999, 6, 0).unwrap(), 6);
    assert_eq!(round_to_nearest(9.0, 6, 0).unwrap(), 12);
    assert_eq!(round_to_nearest(19.99, 6, 0).unwrap(), 18);
    assert_eq!(round_to_nearest(20.0, 6, 0).unwrap(), 18);
    assert_eq!(round_to_nearest(21.0, 6, 0).unwrap(), 24);
    assert_eq!(round_to_nearest(22.0, 6, 0).unwrap(), 24);
}

#[test]
fn test_round_to_nearest_minimum() {
    assert_eq!(round_to_nearest(0.0, 2, 6).unwrap(), 6);
    assert_eq!(round_to_nearest(0.0, 6, 4).unwrap(), 4);
    assert_eq!(round_to_nearest(2.99999, 6, 4).unwrap(), 4);
    assert_eq!(round_to_nearest(12.0, 2, 6).unwrap(), 12);
}

#[test]
fn test_round_to_nearest_rejects_zero_step() {
    assert!(matches!(round_to_nearest(5.0, 0, 0), Err(Error::ZeroStep)));
}

#[test]
fn test_round_to_nearest_idempotence() {
    for value in 0..100 {
        let once = round_to_nearest(f64::from(value), 6, 0).unwrap();
        let twice = round_to_nearest(f64::from(once), 6, 0).unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn test_round_to_nearest_slice() {
    assert_eq!(
        round_to_nearest_slice(&[0.0, 2.0, 4.0, 5.0], 6, 0).unwrap(),
        [0, 0, 6, 6]
    );
    let values: Vec<f64> = (0..10).map(f64::from).collect();
    assert_eq!(
        round_to_nearest_slice(&values, 2, 4).unwrap(),
        [4, 4, 4, 4, 4, 6, 6, 8, 8, 10]
    );
    assert!(round_to_nearest_slice(&[], 6, 0).unwrap().is_empty());
}

#[test]
fn test_gcd() {
    assert_eq!(gcd(12, 15), 3);
    assert_eq!(gcd(15, 12), 3);
    assert_eq!(gcd(7, 0), 7);
    assert_eq!(gcd(0, 7), 7);
    for a in 1..=30u32 {
        for b in 1..=30u32 {
            let divisor = gcd(a, b);
            assert_eq!(divisor, gcd(b, a));
            assert_eq!(a % divisor, 0);
            assert_eq!(b % divisor, 0);
        }
    }
}

#[test]
fn test_sum() {
    assert_eq!(sum(&[]), 0);
    assert_eq!(sum(&[57]), 57);
    assert_eq!(sum(&[1, 2, 3]), 6);
    assert_eq!(sum(&[2, 2, 3]), 7);
}

#[test]
fn test_sum_distributes_over_concatenation() {
    let a = [3, 1, 4, 1, 5];
    let b = [9, 2, 6];
    let concatenated: Vec<u32> = a.iter().chain(&b).copied().collect();
    assert_eq!(sum(&concatenated), sum(&a) + sum(&b));
}
