//! Exact score arithmetic.
//!
//! Half-gun payouts split a discard win into halves and quarters, so a score
//! is stored as a whole number of quarter points. Every payout the engine
//! makes is a multiple of a quarter, which keeps the table zero-sum exactly.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const QUARTERS_PER_POINT: i64 = 4;

/// A signed score or score change, exact to a quarter point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(i64);

impl Score {
    /// The zero score every player starts with.
    pub const ZERO: Self = Self(0);

    /// Largest magnitude a decoded score may have. Summing a handful of
    /// scores this size cannot overflow.
    pub const MAX: Self = Self(i64::MAX / 8);

    /// A score of `points` whole points.
    pub fn from_points(points: i64) -> Self {
        Self(points * QUARTERS_PER_POINT)
    }

    /// A score of `quarters` quarter points.
    pub fn from_quarters(quarters: i64) -> Self {
        Self(quarters)
    }

    /// The raw number of quarter points.
    pub fn quarters(self) -> i64 {
        self.0
    }

    /// Half of this score. Exact as long as the score is a whole or half point.
    pub fn half(self) -> Self {
        Self(self.0 / 2)
    }

    /// A quarter of this score. Exact for whole points.
    pub fn quarter(self) -> Self {
        Self(self.0 / 4)
    }

    /// Whether the score has no fractional part.
    pub fn is_whole(self) -> bool {
        self.0 % QUARTERS_PER_POINT == 0
    }

    /// Whether the score is strictly positive.
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Whether the score is strictly negative.
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// The score as a float, for display only.
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / QUARTERS_PER_POINT as f64
    }

    /// Parse a float that must land exactly on a quarter point within
    /// [`Score::MAX`].
    pub fn from_f64(value: f64) -> Option<Self> {
        let quarters = value * QUARTERS_PER_POINT as f64;
        if !quarters.is_finite()
            || quarters.fract() != 0.0
            || quarters.abs() > Self::MAX.0 as f64
        {
            return None;
        }
        Some(Self(quarters as i64))
    }

    /// Addition that returns `None` instead of overflowing.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Sum of `scores`, or `None` if an intermediate total overflows.
    pub fn checked_sum(scores: impl IntoIterator<Item = Self>) -> Option<Self> {
        scores
            .into_iter()
            .try_fold(Self::ZERO, |acc, s| acc.checked_add(s))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / QUARTERS_PER_POINT as u64;
        match abs % QUARTERS_PER_POINT as u64 {
            0 => write!(f, "{sign}{whole}"),
            1 => write!(f, "{sign}{whole}.25"),
            2 => write!(f, "{sign}{whole}.5"),
            _ => write!(f, "{sign}{whole}.75"),
        }
    }
}

impl Add for Score {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Score {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Score {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Score {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Score> for Score {
    fn sum<I: Iterator<Item = &'a Score>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() {
            serializer.serialize_i64(self.0 / QUARTERS_PER_POINT)
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScoreVisitor)
    }
}

struct ScoreVisitor;

impl Visitor<'_> for ScoreVisitor {
    type Value = Score;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number that is a multiple of 0.25")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Score, E> {
        v.checked_mul(QUARTERS_PER_POINT)
            .filter(|q| q.unsigned_abs() <= Score::MAX.0.unsigned_abs())
            .map(Score)
            .ok_or_else(|| E::custom(format!("score {v} out of range")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Score, E> {
        let v = i64::try_from(v).map_err(|_| E::custom(format!("score {v} out of range")))?;
        self.visit_i64(v)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Score, E> {
        Score::from_f64(v).ok_or_else(|| {
            E::custom(format!(
                "score {v} is out of range or not a multiple of 0.25"
            ))
        })
    }
}
