use crate::error::{ModelError, Result};

/// Mock eco-friendliness score. Always within
/// [`SustainabilityScore::MIN`]..=[`SustainabilityScore::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "u8", try_from = "u8"))]
pub struct SustainabilityScore(u8);

impl SustainabilityScore {
    pub const MIN: u8 = 60;
    pub const MAX: u8 = 99;

    pub fn new(score: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&score) {
            Ok(SustainabilityScore(score))
        } else {
            Err(ModelError::OutOfRange {
                field: "sustainability_score",
                value: score.to_string(),
            })
        }
    }

    /// Clamp an arbitrary value into the valid score band.
    pub fn saturating(score: u8) -> Self {
        SustainabilityScore(score.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<SustainabilityScore> for u8 {
    fn from(score: SustainabilityScore) -> Self {
        score.0
    }
}

impl TryFrom<u8> for SustainabilityScore {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self> {
        SustainabilityScore::new(value)
    }
}

impl std::fmt::Display for SustainabilityScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ratings are stored as tenths to keep them hashable, totally ordered and
/// exactly one decimal wide.
pub const RATING_SCALE_FACTOR: u8 = 10;

/// Customer rating in [3.0, 5.0] with one decimal of precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "f32", try_from = "f32"))]
pub struct Rating(u8);

impl Rating {
    pub const MIN_TENTHS: u8 = 30;
    pub const MAX_TENTHS: u8 = 50;

    pub fn from_tenths(tenths: u8) -> Result<Self> {
        if (Self::MIN_TENTHS..=Self::MAX_TENTHS).contains(&tenths) {
            Ok(Rating(tenths))
        } else {
            Err(ModelError::OutOfRange {
                field: "rating",
                value: format!("{}", tenths as f32 / RATING_SCALE_FACTOR as f32),
            })
        }
    }

    /// Clamp a tenths value into the valid rating band.
    pub fn saturating_tenths(tenths: u8) -> Self {
        Rating(tenths.clamp(Self::MIN_TENTHS, Self::MAX_TENTHS))
    }

    /// Round a float rating to one decimal and validate it.
    pub fn from_f32(value: f32) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(ModelError::OutOfRange {
                field: "rating",
                value: value.to_string(),
            });
        }
        let tenths = (value * RATING_SCALE_FACTOR as f32).round();
        if tenths > u8::MAX as f32 {
            return Err(ModelError::OutOfRange {
                field: "rating",
                value: value.to_string(),
            });
        }
        Rating::from_tenths(tenths as u8)
    }

    pub fn tenths(&self) -> u8 {
        self.0
    }

    pub fn value(&self) -> f32 {
        self.0 as f32 / RATING_SCALE_FACTOR as f32
    }
}

impl From<Rating> for f32 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl TryFrom<f32> for Rating {
    type Error = ModelError;

    fn try_from(value: f32) -> Result<Self> {
        Rating::from_f32(value)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

/// Round a monetary amount to whole cents.
#[inline]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
