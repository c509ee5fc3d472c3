mod view;

pub use view::ProjectDetails;
