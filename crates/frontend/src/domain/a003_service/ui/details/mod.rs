mod view;

pub use view::ServiceDetails;
