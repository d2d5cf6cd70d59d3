pub mod contact_form;
pub mod newsletter_form;
pub mod prompt_dialog;
pub mod sign_in_button;

pub use contact_form::ContactForm;
pub use newsletter_form::NewsletterForm;
pub use prompt_dialog::PromptDialog;
pub use sign_in_button::SignInButton;
