//! Skill roll bonus

/// Bonus added to a skill check roll.
///
/// Any combination of inputs is valid and totals may be negative. Sums past
/// the `i32` range saturate.
pub fn compute_roll_value(base_points: i32, modifier: i32, linked_stat_modifier: i32) -> i32 {
    base_points
        .saturating_add(modifier)
        .saturating_add(linked_stat_modifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_all_three_parts() {
        assert_eq!(compute_roll_value(5, -2, 1), 4);
        assert_eq!(compute_roll_value(0, 0, 0), 0);
    }

    #[test]
    fn negative_totals_are_allowed() {
        assert_eq!(compute_roll_value(3, 0, -5), -2);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        assert_eq!(compute_roll_value(i32::MAX, 1, 1), i32::MAX);
        assert_eq!(compute_roll_value(i32::MIN, -1, 0), i32::MIN);
    }
}
