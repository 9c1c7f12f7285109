//! Form Drafts
//!
//! Raw form input for the create-listing and auth forms, validated into
//! store payloads before any backend call is made.

use thiserror::Error;

use super::item::NewItem;
use super::notice::Notice;
use super::session::Session;

/// Maximum photos per listing
pub const MAX_PHOTOS: usize = 5;
/// Minimum password length accepted by the auth provider
pub const MIN_PASSWORD_LEN: usize = 6;

/// Why a form cannot be submitted yet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Для создания объявления нужна авторизация")]
    NotSignedIn,
    #[error("Подтвердите состояние вещи")]
    ConditionNotConfirmed,
    #[error("Выберите категорию")]
    MissingCategory,
    #[error("Заполните поле «{0}»")]
    MissingField(&'static str),
    #[error("Поле «{0}» должно быть целым числом не меньше 1")]
    InvalidNumber(&'static str),
    #[error("Можно загрузить не больше 5 фото")]
    TooManyPhotos,
    #[error("Укажите имя")]
    MissingName,
    #[error("Пароль должен быть не короче 6 символов")]
    PasswordTooShort,
}

impl DraftError {
    pub fn notice(&self) -> Notice {
        match self {
            DraftError::NotSignedIn => Notice::error("Войдите в аккаунт", self.to_string()),
            DraftError::TooManyPhotos => Notice::error("Максимум 5 фото", self.to_string()),
            _ => Notice::error("Ошибка", self.to_string()),
        }
    }
}

/// Create-listing form state, as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingDraft {
    pub title: String,
    pub category: String,
    pub description: String,
    pub price: String,
    pub deposit: String,
    pub min_days: String,
    pub location: String,
    pub conditions: String,
    /// "Item is in working order" checkbox
    pub confirmed: bool,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: String::new(),
            description: String::new(),
            price: String::new(),
            deposit: String::new(),
            min_days: "1".to_string(),
            location: String::new(),
            conditions: String::new(),
            confirmed: false,
        }
    }
}

impl ListingDraft {
    /// Validate in submission order and build the insert payload.
    /// `images` stays empty until the photos are uploaded.
    pub fn validate(&self, session: Option<&Session>) -> Result<NewItem, DraftError> {
        let session = session.ok_or(DraftError::NotSignedIn)?;
        self.precheck()?;
        let title = required(&self.title, "Название вещи")?;
        let description = required(&self.description, "Описание")?;
        let price_per_day = positive(&self.price, "Цена за сутки")?;
        let deposit = positive(&self.deposit, "Депозит")?;
        let min_days = positive(&self.min_days, "Мин. срок аренды")?;
        let min_days = i32::try_from(min_days).map_err(|_| DraftError::InvalidNumber("Мин. срок аренды"))?;
        Ok(NewItem {
            owner_id: session.user.id.clone(),
            title,
            category: self.category.clone(),
            description,
            price_per_day,
            deposit,
            min_days,
            conditions: optional(&self.conditions),
            location: optional(&self.location),
            images: Vec::new(),
        })
    }

    /// Checkbox and category, checked right after the session
    pub fn precheck(&self) -> Result<(), DraftError> {
        if !self.confirmed {
            return Err(DraftError::ConditionNotConfirmed);
        }
        if self.category.trim().is_empty() {
            return Err(DraftError::MissingCategory);
        }
        Ok(())
    }
}

/// Reject a photo batch that would push the listing over the limit
pub fn check_photo_limit(existing: usize, adding: usize) -> Result<(), DraftError> {
    if existing + adding > MAX_PHOTOS {
        Err(DraftError::TooManyPhotos)
    } else {
        Ok(())
    }
}

/// Object path inside a bucket: `{user_id}/{unix_millis}-{file_name}`
pub fn upload_path(user_id: &str, unix_millis: i64, file_name: &str) -> String {
    let name: String = file_name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{}/{}-{}", user_id, unix_millis, name)
}

fn required(value: &str, field: &'static str) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DraftError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn positive(value: &str, field: &'static str) -> Result<i64, DraftError> {
    match value.trim().parse::<i64>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(DraftError::InvalidNumber(field)),
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

/// Sign-in / sign-up form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    /// Only used for sign-up
    pub name: String,
}

impl AuthForm {
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.email.trim().is_empty() {
            return Err(DraftError::MissingField("Email"));
        }
        if self.mode == AuthMode::SignUp && self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(DraftError::PasswordTooShort);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AuthUser, UserMetadata};

    fn session() -> Session {
        Session {
            access_token: "token".into(),
            refresh_token: None,
            expires_at: None,
            user: AuthUser {
                id: "user-1".into(),
                email: Some("a@b.c".into()),
                user_metadata: UserMetadata::default(),
            },
        }
    }

    fn filled() -> ListingDraft {
        ListingDraft {
            title: " Перфоратор ".into(),
            category: "tools".into(),
            description: "Мощный".into(),
            price: "500".into(),
            deposit: "5000".into(),
            min_days: "2".into(),
            location: "".into(),
            conditions: "Только бетон".into(),
            confirmed: true,
        }
    }

    #[test]
    fn test_unconfirmed_condition_blocks_submission() {
        let draft = ListingDraft { confirmed: false, ..filled() };
        assert_eq!(draft.validate(Some(&session())), Err(DraftError::ConditionNotConfirmed));
        assert_eq!(draft.precheck(), Err(DraftError::ConditionNotConfirmed));
    }

    #[test]
    fn test_sign_in_checked_before_checkbox() {
        let draft = ListingDraft { confirmed: false, ..filled() };
        let err = draft.validate(None).unwrap_err();
        assert_eq!(err, DraftError::NotSignedIn);
        assert_eq!(err.notice().title, "Войдите в аккаунт");
    }

    #[test]
    fn test_missing_category() {
        let draft = ListingDraft { category: String::new(), ..filled() };
        assert_eq!(draft.validate(Some(&session())), Err(DraftError::MissingCategory));
    }

    #[test]
    fn test_invalid_price() {
        let draft = ListingDraft { price: "0".into(), ..filled() };
        assert_eq!(draft.validate(Some(&session())), Err(DraftError::InvalidNumber("Цена за сутки")));
        let draft = ListingDraft { deposit: "abc".into(), ..filled() };
        assert_eq!(draft.validate(Some(&session())), Err(DraftError::InvalidNumber("Депозит")));
    }

    #[test]
    fn test_valid_draft_builds_payload() {
        let item = filled().validate(Some(&session())).unwrap();
        assert_eq!(item.owner_id, "user-1");
        assert_eq!(item.title, "Перфоратор");
        assert_eq!(item.min_days, 2);
        assert_eq!(item.location, None);
        assert_eq!(item.conditions.as_deref(), Some("Только бетон"));
        assert!(item.images.is_empty());
    }

    #[test]
    fn test_photo_limit() {
        assert!(check_photo_limit(3, 2).is_ok());
        assert_eq!(check_photo_limit(4, 2), Err(DraftError::TooManyPhotos));
    }

    #[test]
    fn test_upload_path() {
        assert_eq!(upload_path("u1", 1700000000000, "a/b.png"), "u1/1700000000000-a_b.png");
    }

    #[test]
    fn test_auth_form_rules() {
        let mut form = AuthForm {
            mode: AuthMode::SignUp,
            email: "a@b.c".into(),
            password: "secret".into(),
            name: " ".into(),
        };
        assert_eq!(form.validate(), Err(DraftError::MissingName));
        form.name = "Аня".into();
        assert_eq!(form.validate(), Ok(()));
        form.password = "12345".into();
        assert_eq!(form.validate(), Err(DraftError::PasswordTooShort));
        form.mode = AuthMode::SignIn;
        form.password = "123456".into();
        assert_eq!(form.validate(), Ok(()));
    }
}
