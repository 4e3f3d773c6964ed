use std::sync::LazyLock;

use brdocs_canonical::{random, ValidationError};
use rand::Rng;
use regex::Regex;

use crate::document::document_newtype;
use crate::Document;

static SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-z._+-]+@[0-9a-z._+-]+(\.[0-9a-z._+-]+)+$").expect("email regex")
});

const SERVERS: [&str; 2] = ["gmail.com", "hotmail.com"];

document_newtype! {
    /// E-mail address in the restricted shape accepted as a Pix key, stored lowercase.
    Email
}

impl Document for Email {
    const NAME: &'static str = "Email";
    type FakeOptions = ();

    fn normalize(value: &str) -> Result<String, ValidationError> {
        let email = value.trim().to_lowercase();
        if email.is_empty() {
            return Err(ValidationError::EmptyValue { field: Self::NAME });
        }
        if !SHAPE.is_match(&email) {
            return Err(ValidationError::invalid_format(Self::NAME, email));
        }
        Ok(email)
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::normalize(value).map(Self)
    }

    fn fake_with<R: Rng + ?Sized>(rng: &mut R, _: &()) -> Result<Self, ValidationError> {
        let server = random::choose(rng, &SERVERS).copied().unwrap_or("gmail.com");
        let user = random::letters(rng, 10).to_lowercase();
        Self::parse(&format!("{user}@{server}"))
    }
}
