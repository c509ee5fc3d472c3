mod view;

pub use view::InquiryTypeDetails;
