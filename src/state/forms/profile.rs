//! Create-profile form: bio counter, avatar preview and focus tracking

use super::field::FormField;
use super::form_state::Form;
use super::submission::{FormKind, Submission};
use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

/// Longest bio the account service accepts
pub const BIO_MAX_CHARS: usize = 300;

/// What the avatar slot currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AvatarPreview {
    /// Placeholder user icon
    #[default]
    Icon,
    Image { file_name: String, size_bytes: u64 },
}

#[derive(Debug, Clone)]
pub struct ProfileForm {
    pub name: FormField,
    pub bio: FormField,
    pub website: FormField,
    pub picture: FormField,
    pub avatar: AvatarPreview,
    pub active_field_index: usize,
}

impl ProfileForm {
    pub const NAME: usize = 0;
    pub const BIO: usize = 1;
    pub const WEBSITE: usize = 2;
    pub const PICTURE: usize = 3;

    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Full Name"),
            bio: FormField::multiline("bio", "Bio"),
            website: FormField::text("website", "Website"),
            picture: FormField::text("profile_picture", "Profile Picture (path)"),
            avatar: AvatarPreview::Icon,
            active_field_index: 0,
        }
    }

    /// Characters typed into the bio so far
    pub fn bio_char_count(&self) -> usize {
        self.bio.char_count()
    }

    /// Counter text shown under the bio
    pub fn bio_counter(&self) -> String {
        format!("{}/{BIO_MAX_CHARS}", self.bio_char_count())
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.active_field_index == index
    }

    /// Type into the active field. The bio stops accepting input at its limit.
    pub fn input_char(&mut self, c: char) {
        if self.active_field_index == Self::BIO && self.bio_char_count() >= BIO_MAX_CHARS {
            return;
        }
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
        }
    }

    /// Swap the user icon for a preview of the chosen picture file.
    /// An empty path leaves the current preview alone.
    pub fn load_avatar(&mut self) -> Result<()> {
        let raw = self.picture.trimmed();
        if raw.is_empty() {
            return Ok(());
        }
        let path = Path::new(raw);
        let metadata = match fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => metadata,
            _ => bail!("No picture found at {raw}"),
        };
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| raw.to_string());
        tracing::debug!("avatar preview set to {file_name}");
        self.avatar = AvatarPreview::Image {
            file_name,
            size_bytes: metadata.len(),
        };
        Ok(())
    }

    pub fn submission(&self) -> Submission {
        Submission::new(FormKind::Profile)
            .field(&self.name.name, self.name.as_text())
            .field(&self.bio.name, self.bio.as_text())
            .field(&self.website.name, self.website.as_text())
            .field(&self.picture.name, self.picture.trimmed())
    }
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ProfileForm {
    fn field_count(&self) -> usize {
        4
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            Self::NAME => Some(&self.name),
            Self::BIO => Some(&self.bio),
            Self::WEBSITE => Some(&self.website),
            Self::PICTURE => Some(&self.picture),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            Self::NAME => Some(&mut self.name),
            Self::BIO => Some(&mut self.bio),
            Self::WEBSITE => Some(&mut self.website),
            Self::PICTURE => Some(&mut self.picture),
            _ => None,
        }
    }
}
