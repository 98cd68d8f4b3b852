mod loading_spinner_icon;

pub use loading_spinner_icon::LoadingSpinnerIcon;
