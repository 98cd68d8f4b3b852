mod new_study;

pub use new_study::NewStudy;
