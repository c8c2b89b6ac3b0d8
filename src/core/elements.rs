use crate::core::{Element, ZodiacSign};
use crate::error::{ChartError, ChartResult};

/// Extra score a point earns when placed in one of its ruling signs.
pub const RULERSHIP_BONUS: f64 = 10.0;

/// Running fire/earth/air/water totals aggregated from active points.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementTotals {
    pub fire: f64,
    pub earth: f64,
    pub air: f64,
    pub water: f64,
}

impl ElementTotals {
    /// Scores one point into the totals: base score, plus the rulership
    /// bonus when the point's ruling-sign set contains its current sign,
    /// credited to the element of that sign.
    pub fn add_point(&mut self, base_score: f64, ruling_signs: &[ZodiacSign], sign: ZodiacSign) {
        let mut score = base_score;
        if ruling_signs.contains(&sign) {
            score += RULERSHIP_BONUS;
        }

        match sign.element() {
            Element::Fire => self.fire += score,
            Element::Earth => self.earth += score,
            Element::Air => self.air += score,
            Element::Water => self.water += score,
        }
    }

    /// Aggregates `(base score, ruling signs, current sign)` triples.
    pub fn tally<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = (f64, &'a [ZodiacSign], ZodiacSign)>,
    {
        let mut totals = Self::default();
        for (base, ruling, sign) in points {
            totals.add_point(base, ruling, sign);
        }
        totals
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.fire + self.earth + self.air + self.water
    }

    /// Integer percentage shares per element.
    ///
    /// Each share is rounded independently with round-half-to-even
    /// (`round(2.5) == 2`), so the four shares may not sum to exactly 100.
    /// All-zero totals signal corrupted upstream data and are fatal.
    pub fn percentages(&self) -> ChartResult<ElementPercentages> {
        let total = self.sum();
        if total <= 0.0 {
            return Err(ChartError::DegenerateElementTotals);
        }

        let share = |value: f64| (100.0 * value / total).round_ties_even() as i64;
        Ok(ElementPercentages {
            fire: share(self.fire),
            earth: share(self.earth),
            air: share(self.air),
            water: share(self.water),
        })
    }
}

/// Independently rounded percentage share per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementPercentages {
    pub fire: i64,
    pub earth: i64,
    pub air: i64,
    pub water: i64,
}
