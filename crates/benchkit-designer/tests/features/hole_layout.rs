use benchkit_designer::hole_layout::HoleLayoutGenerator;
use proptest::prelude::*;

#[test]
fn test_reference_bench_generates_seven_holes() {
    let layout = HoleLayoutGenerator::new(30.0, 4.0, 2.0).generate();
    assert_eq!(layout.raw_count, 7.5);
    assert_eq!(layout.candidate_count, 7);
    assert_eq!(layout.hole_count(), 7);
    assert_eq!(layout.positions[0], 30.0 - (4.0 * 1.0 - 2.0));
    assert_eq!(layout.positions.last(), Some(&4.0));
}

#[test]
fn test_zero_burden_does_not_divide() {
    let layout = HoleLayoutGenerator::new(30.0, 0.0, 2.0).generate();
    assert!(layout.is_empty());
    assert_eq!(layout.candidate_count, 0);
}

#[test]
fn test_crest_adjust_shifts_row() {
    let plain = HoleLayoutGenerator::new(20.0, 5.0, 0.0).generate();
    let shifted = HoleLayoutGenerator::new(20.0, 5.0, 1.5).generate();
    assert_eq!(plain.positions, vec![15.0, 10.0, 5.0]);
    assert_eq!(shifted.positions, vec![16.5, 11.5, 6.5, 1.5]);
}

proptest! {
    #[test]
    fn prop_positions_filtered_and_ordered(
        influence in 5.0f64..150.0,
        burden in 0.5f64..15.0,
        crest in 0.0f64..10.0,
    ) {
        let generator = HoleLayoutGenerator::new(influence, burden, crest);
        let layout = generator.generate();

        prop_assert_eq!(layout.candidate_count, (influence / burden).floor() as usize);
        prop_assert!(layout.hole_count() <= layout.candidate_count);
        prop_assert!(layout.positions.iter().all(|&x| x > 0.01));
        prop_assert!(layout.positions.windows(2).all(|w| w[0] > w[1]));

        let expected = (1..=layout.candidate_count)
            .filter(|&k| generator.candidate_position(k) > 0.01)
            .count();
        prop_assert_eq!(layout.hole_count(), expected);
    }

    #[test]
    fn prop_hole_count_non_increasing_in_burden(
        influence in 5.0f64..150.0,
        burden in 0.5f64..15.0,
        delta in 0.0f64..5.0,
        crest in 0.0f64..10.0,
    ) {
        let narrow = HoleLayoutGenerator::new(influence, burden, crest).generate();
        let wide = HoleLayoutGenerator::new(influence, burden + delta, crest).generate();
        prop_assert!(wide.hole_count() <= narrow.hole_count());
    }
}
