pub mod elements;
pub mod sizing;
pub mod types;

pub use elements::{ElementPercentages, ElementTotals, RULERSHIP_BONUS};
pub use sizing::{
    CHART_HEIGHT, ChartSizing, DualAspectGridStyle, GeometryRadii, MAIN_RADIUS, resolve_sizing,
};
pub use types::{
    AspectRecord, CelestialPoint, ChartMode, CompositeParts, Element, HouseCusp, LunarPhase,
    Subject, SubjectSummary, Zodiac, ZodiacSign,
};
