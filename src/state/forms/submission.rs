//! Payload handed to the submission target once a form passes validation

use serde::Serialize;

/// Which page form produced a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Login,
    Signup,
    Profile,
}

impl FormKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Profile => "profile",
        }
    }
}

/// One submitted name/value pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedField {
    pub name: String,
    pub value: String,
}

/// A form submission as the backend would receive it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub form: FormKind,
    pub fields: Vec<SubmittedField>,
}

impl Submission {
    pub fn new(form: FormKind) -> Self {
        Self {
            form,
            fields: Vec::new(),
        }
    }

    /// Builder-style field append
    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.fields.push(SubmittedField {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    #[cfg(test)]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Field names only, safe to log
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}
