pub mod a001_category;
pub mod a002_technology;
pub mod a003_service;
pub mod a004_testimonial;
pub mod a005_inquiry_type;
pub mod a006_project;
pub mod a007_contact;
