pub mod aggregate;

pub use aggregate::{Testimonial, TestimonialDto, TestimonialTranslation};
