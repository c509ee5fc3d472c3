mod view;

pub use view::{role_options, UserDetails};
