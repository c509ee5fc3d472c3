mod view;

pub use view::TechnologyDetails;
