use crate::types::scoring::{round_to, Score};

/// Piecewise-linear score for the number of distinct skills.
pub fn skills_score(count: usize) -> Score {
    let n = count as f64;
    match count {
        0 => 0.0,
        1..=5 => round_to(2.0 + n * 0.2, 1),
        6..=15 => round_to(3.0 + (n - 5.0) * 0.4, 1),
        16..=24 => round_to(7.0 + (n - 15.0) * 0.3, 1),
        _ => 10.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_boundaries() {
        assert_eq!(skills_score(0), 0.0);
        assert_eq!(skills_score(1), 2.2);
        assert_eq!(skills_score(5), 3.0);
        assert_eq!(skills_score(6), 3.4);
        assert_eq!(skills_score(15), 7.0);
        assert_eq!(skills_score(16), 7.3);
        assert_eq!(skills_score(24), 9.7);
        assert_eq!(skills_score(25), 10.0);
        assert_eq!(skills_score(100), 10.0);
    }

    #[test]
    fn non_decreasing_and_bounded() {
        let mut previous = skills_score(0);
        for count in 1..200 {
            let score = skills_score(count);
            assert!(score >= previous, "dropped at {count}");
            assert!((0.0..=10.0).contains(&score));
            previous = score;
        }
    }
}
