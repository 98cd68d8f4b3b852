pub mod buttons;
pub mod create_study_form;
pub mod forms;
pub mod icons;
