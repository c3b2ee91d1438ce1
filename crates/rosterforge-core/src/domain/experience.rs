//! Experience level enumeration

/// A nurse's experience rank, on an ordered scale.
///
/// The derived ordering is part of the contract:
/// `Intern < Junior < Senior < Charge`.
///
/// # Examples
///
/// ```
/// use rosterforge_core::ExperienceLevel;
///
/// assert!(ExperienceLevel::Intern < ExperienceLevel::Junior);
/// assert!(ExperienceLevel::Senior.is_senior_or_above());
/// assert!(!ExperienceLevel::Junior.is_senior_or_above());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ExperienceLevel {
    /// In training, under supervision.
    Intern,
    /// 1-3 years of experience.
    Junior,
    /// 3+ years of experience.
    Senior,
    /// Charge nurse.
    Charge,
}

impl ExperienceLevel {
    /// Returns true for the ranks that satisfy the mixed-experience rule.
    #[inline]
    pub fn is_senior_or_above(&self) -> bool {
        *self >= ExperienceLevel::Senior
    }
}
