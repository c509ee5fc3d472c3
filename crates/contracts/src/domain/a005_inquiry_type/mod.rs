pub mod aggregate;

pub use aggregate::{InquiryType, InquiryTypeDto, InquiryTypeTranslation};
