mod error_display;
mod generation_panel;
mod loading_spinner;
mod profile_form;

pub use error_display::ErrorDisplay;
pub use generation_panel::GenerationPanel;
pub use loading_spinner::LoadingSpinner;
pub use profile_form::ProfileForm;
