mod geometry;
mod null_painter;
mod painter;

pub use null_painter::NullPainter;
pub use painter::{
    AspectLineParams, ChartPainter, HouseGridParams, HousesCuspsParams, MoonPhaseParams,
    PlanetGridParams, PlanetsParams, ZodiacSliceParams,
};

pub(crate) use geometry::GeometryAssembly;
