use tracing::debug;

use crate::astro::stars::{Gana, Nakshatra, PoruthamTable};
use crate::models::report::{FactorResult, HoroscopeReport, Verdict};

/// Offsets considered auspicious by the Mahendra rule
const MAHENDRA_COUNTS: [usize; 8] = [4, 7, 10, 13, 16, 19, 22, 25];

/// Raasi counts considered inauspicious (2/12 and 6/8 axes)
const RAASI_BAD_COUNTS: [usize; 4] = [2, 6, 8, 12];

/// Ten-factor star compatibility comparator
///
/// Pure over its inputs and the injected lookup table. Each factor is a
/// boolean predicate worth one point; the total is 0-10 and the verdict
/// bands are monotonic in the total.
#[derive(Debug, Clone)]
pub struct HoroscopeComparator {
    table: PoruthamTable,
    /// Totals >= good_min are Good
    good_min: u8,
    /// Totals >= average_min (and < good_min) are Average
    average_min: u8,
}

impl HoroscopeComparator {
    pub fn new(table: PoruthamTable, good_min: u8, average_min: u8) -> Self {
        Self {
            table,
            good_min,
            average_min,
        }
    }

    pub fn with_default_table() -> Self {
        Self::new(PoruthamTable::default(), 7, 4)
    }

    /// Compare two star placements and produce the ten-factor report.
    ///
    /// Deterministic: the same pair of stars always yields an identical
    /// report. Rajju failures do not change the total; they are surfaced
    /// through the per-factor `critical` flag only.
    pub fn compare(&self, star_a: Nakshatra, star_b: Nakshatra) -> HoroscopeReport {
        let factors = vec![
            self.factor(
                "Dina",
                "Day-count harmony for health and longevity",
                false,
                self.dina(star_a, star_b),
            ),
            self.factor(
                "Gana",
                "Temperament class agreement",
                false,
                self.gana(star_a, star_b),
            ),
            self.factor(
                "Mahendra",
                "Counted position favoring progeny and prosperity",
                false,
                self.mahendra(star_a, star_b),
            ),
            self.factor(
                "Stree Deergha",
                "Sufficient star distance for the bride's wellbeing",
                false,
                self.stree_deergha(star_a, star_b),
            ),
            self.factor(
                "Yoni",
                "Animal-nature compatibility",
                false,
                self.yoni(star_a, star_b),
            ),
            self.factor(
                "Raasi",
                "Moon-sign placement harmony",
                false,
                self.raasi(star_a, star_b),
            ),
            self.factor(
                "Raasi Adhipathi",
                "Friendship between the sign lords",
                false,
                self.raasi_adhipathi(star_a, star_b),
            ),
            self.factor(
                "Vasya",
                "Mutual influence between the signs",
                false,
                self.vasya(star_a, star_b),
            ),
            self.factor(
                "Rajju",
                "Rajju group separation, weighed heavily by reviewers",
                true,
                self.rajju(star_a, star_b),
            ),
            self.factor(
                "Vedha",
                "Absence of mutual affliction between the stars",
                false,
                self.vedha(star_a, star_b),
            ),
        ];

        let total: u8 = factors.iter().map(|f| f.points).sum();
        let verdict = self.verdict_for(total);

        debug!(
            star_a = star_a.name(),
            star_b = star_b.name(),
            total,
            "computed porutham report"
        );

        HoroscopeReport {
            factors,
            total,
            verdict,
        }
    }

    /// Verdict bands over the total; monotonic by construction.
    pub fn verdict_for(&self, total: u8) -> Verdict {
        if total >= self.good_min {
            Verdict::Good
        } else if total >= self.average_min {
            Verdict::Average
        } else {
            Verdict::Poor
        }
    }

    fn factor(&self, name: &str, description: &str, critical: bool, passed: bool) -> FactorResult {
        FactorResult {
            name: name.to_string(),
            description: description.to_string(),
            passed,
            points: if passed { 1 } else { 0 },
            critical,
        }
    }

    /// Inclusive count from `a` to `b` walking forward through the 27 stars.
    fn count_from(a: Nakshatra, b: Nakshatra) -> usize {
        (b.index() + 27 - a.index()) % 27 + 1
    }

    fn dina(&self, a: Nakshatra, b: Nakshatra) -> bool {
        Self::count_from(a, b) % 9 % 2 == 0
    }

    fn gana(&self, a: Nakshatra, b: Nakshatra) -> bool {
        let ga = self.table.gana_of(a);
        let gb = self.table.gana_of(b);
        ga == gb
            || matches!(
                (ga, gb),
                (Gana::Deva, Gana::Manushya) | (Gana::Manushya, Gana::Deva)
            )
    }

    fn mahendra(&self, a: Nakshatra, b: Nakshatra) -> bool {
        MAHENDRA_COUNTS.contains(&Self::count_from(a, b))
    }

    fn stree_deergha(&self, a: Nakshatra, b: Nakshatra) -> bool {
        Self::count_from(a, b) > 13
    }

    fn yoni(&self, a: Nakshatra, b: Nakshatra) -> bool {
        !self
            .table
            .yonis_hostile(self.table.yoni_of(a), self.table.yoni_of(b))
    }

    fn raasi(&self, a: Nakshatra, b: Nakshatra) -> bool {
        let ra = self.table.raasi_of(a);
        let rb = self.table.raasi_of(b);
        let count = (rb.index() + 12 - ra.index()) % 12 + 1;
        !RAASI_BAD_COUNTS.contains(&count)
    }

    fn raasi_adhipathi(&self, a: Nakshatra, b: Nakshatra) -> bool {
        let lord_a = self.table.lord_of(self.table.raasi_of(a));
        let lord_b = self.table.lord_of(self.table.raasi_of(b));
        self.table.planets_friendly(lord_a, lord_b)
    }

    fn vasya(&self, a: Nakshatra, b: Nakshatra) -> bool {
        let ra = self.table.raasi_of(a);
        let rb = self.table.raasi_of(b);
        self.table.vasya_controls(ra, rb) || self.table.vasya_controls(rb, ra)
    }

    fn rajju(&self, a: Nakshatra, b: Nakshatra) -> bool {
        self.table.rajju_of(a) != self.table.rajju_of(b)
    }

    fn vedha(&self, a: Nakshatra, b: Nakshatra) -> bool {
        !self.table.is_vedha(a, b)
    }
}

impl Default for HoroscopeComparator {
    fn default() -> Self {
        Self::with_default_table()
    }
}
