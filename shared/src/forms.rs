//! The three forms the site exposes.

use crate::form::{FieldSpec, FormSpec, SuccessMessage};

pub const NEWSLETTER_CONFIRMATION: &str = "Thanks for subscribing!";

/// Username and password, asked for in a dialog and posted to `/signin`
pub fn sign_in() -> FormSpec {
    FormSpec {
        name: "signin",
        endpoint: "/signin",
        fields: vec![
            FieldSpec::required("username", "Enter your username:"),
            FieldSpec::required("password", "Enter your password:").secret(),
        ],
        missing_message: "Please enter both username and password",
        success: SuccessMessage::EchoServer,
    }
}

/// Name, email and message read from the page and posted to `/contact`
pub fn contact() -> FormSpec {
    FormSpec {
        name: "contact",
        endpoint: "/contact",
        fields: vec![
            FieldSpec::required("name", "Name"),
            FieldSpec::required("email", "Email"),
            FieldSpec::required("message", "Message"),
        ],
        missing_message: "Please fill in all fields",
        success: SuccessMessage::EchoServer,
    }
}

/// Single email address posted to `/newsletter`
pub fn newsletter() -> FormSpec {
    FormSpec {
        name: "newsletter",
        endpoint: "/newsletter",
        fields: vec![FieldSpec::required("email", "Email")
            .element("newsletter-email")
            .email()],
        missing_message: "Please enter your email address",
        success: SuccessMessage::Fixed(NEWSLETTER_CONFIRMATION),
    }
}
