//! Service layer: the annotation pipeline and the data providers around it.
//!
//! Everything here is synchronous and pure apart from the provider traits,
//! which a deployment can swap for live weather or content sources.

pub mod categorizer;
pub mod content;
pub mod pipeline;
pub mod planner;
pub mod travel;
pub mod travel_mode;
pub mod weather;


pub use categorizer::Categorizer;
pub use content::{StaticTravelContent, TravelContent};
pub use pipeline::{AnnotatedDay, AnnotationPipeline};
pub use planner::DayPlanner;
pub use travel::{TravelEstimate, TravelSynthesizer};
pub use travel_mode::TravelModeDetector;
pub use weather::{SimulatedWeather, WeatherProvider};
