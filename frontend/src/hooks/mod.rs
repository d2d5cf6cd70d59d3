pub mod use_form_submission;

pub use use_form_submission::{use_form_submission, Acquisition, FormSubmission};
