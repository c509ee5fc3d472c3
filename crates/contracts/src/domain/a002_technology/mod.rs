pub mod aggregate;

pub use aggregate::{Technology, TechnologyDto, TechnologyTranslation};
